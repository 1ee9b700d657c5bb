/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/10/25
******************************************************************************/

//! Main client for making requests to Instapaper.
//!
//! Every public operation issues exactly one logical API call through the
//! shared retry wrapper: an authenticated POST retried up to the configured
//! attempt budget, back to back, each attempt bounded by the per-attempt
//! timeout. Only HTTP 200 with a JSON-parseable body counts as success;
//! a non-200 status, a transport failure or a malformed body is logged and
//! retried.
//!
//! Mutating endpoints are not idempotent-safe under retry: if a response is
//! lost after the server applied the mutation, the retried attempt can apply
//! it twice. The client does not deduplicate; this is an accepted property
//! of the API.

use crate::config::Config;
use crate::constants::{
    ADD_BOOKMARK, ADD_FOLDER, API_BASE_URL, DEFAULT_BOOKMARK_LIMIT, DELETE_BOOKMARK,
    DELETE_FOLDER, LIST_BOOKMARKS, LIST_FOLDERS, MOVE_BOOKMARK, USER_AGENT,
};
use crate::error::AppError;
use crate::model::objects::{Bookmark, Folder};
use crate::model::retry::RetryConfig;
use crate::signing::OauthCredentials;
use reqwest::{Client as HttpClient, StatusCode, header};
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

/// Constructor-level options for a [`Client`]
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Root of the REST API; endpoint paths are joined onto it. Overridable
    /// so the request loop can be pointed at a local test server.
    pub base_url: String,
    /// Attempt budget and per-attempt timeout for the retry loop
    pub retry: RetryConfig,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            base_url: API_BASE_URL.to_string(),
            retry: RetryConfig::default(),
        }
    }
}

/// Main class for making requests to Instapaper.
///
/// The signing context is resolved from the [`Config`] once, at
/// construction, and is immutable afterwards; rotating credentials requires
/// a new client. A client can be shared freely across tasks.
pub struct Client {
    http_client: HttpClient,
    oauth: OauthCredentials,
    base_url: String,
    retry: RetryConfig,
}

impl Client {
    /// Creates a client for `username` with the default base URL and retry
    /// configuration.
    ///
    /// Fails with [`AppError::MissingCredentials`] when the config lacks the
    /// application consumer pair or the user's token pair.
    pub fn new(config: &Config, username: &str) -> Result<Self, AppError> {
        Self::with_options(config, username, ClientOptions::default())
    }

    /// Creates a client with an explicit base URL and retry configuration
    pub fn with_options(
        config: &Config,
        username: &str,
        options: ClientOptions,
    ) -> Result<Self, AppError> {
        let oauth = OauthCredentials::new(
            config.consumer_key()?,
            config.consumer_secret()?,
            config.token(username)?,
            config.token_secret(username)?,
        );
        let http_client = HttpClient::builder()
            .user_agent(USER_AGENT)
            .timeout(options.retry.timeout)
            .build()?;
        Ok(Self {
            http_client,
            oauth,
            base_url: options.base_url.trim_end_matches('/').to_string(),
            retry: options.retry,
        })
    }

    /// Lists the user's folders, preserving server order
    pub async fn list_folders(&self) -> Result<Vec<Folder>, AppError> {
        let data = self.do_request(LIST_FOLDERS, &[]).await?;
        decode_tagged(&data, "folder", Folder::from_json)
    }

    /// Lists the bookmarks in `folder`, with the default limit of 500
    pub async fn list_bookmarks(&self, folder: &Folder) -> Result<Vec<Bookmark>, AppError> {
        self.list_bookmarks_with_limit(folder, DEFAULT_BOOKMARK_LIMIT)
            .await
    }

    /// Lists up to `limit` bookmarks in `folder`.
    ///
    /// The server accepts limits in 1..=500 and enforces the range itself.
    pub async fn list_bookmarks_with_limit(
        &self,
        folder: &Folder,
        limit: u32,
    ) -> Result<Vec<Bookmark>, AppError> {
        let folder_id = require_input(folder.id.as_ref(), "folder.id")?;
        let params = [
            ("folder_id", folder_id.to_string()),
            ("limit", limit.to_string()),
        ];
        let data = self.do_request(LIST_BOOKMARKS, &params).await?;
        decode_tagged(&data, "bookmark", Bookmark::from_json)
    }

    /// Moves `bookmark` to `folder` and returns its new state
    pub async fn move_bookmark(
        &self,
        bookmark: &Bookmark,
        folder: &Folder,
    ) -> Result<Bookmark, AppError> {
        let bookmark_id = require_input(bookmark.id.as_ref(), "bookmark.id")?;
        let folder_id = require_input(folder.id.as_ref(), "folder.id")?;
        let params = [
            ("bookmark_id", bookmark_id.to_string()),
            ("folder_id", folder_id.to_string()),
        ];
        let data = self.do_request(MOVE_BOOKMARK, &params).await?;
        Bookmark::from_json(single_element(&data)?)
    }

    /// Creates a folder titled after `folder` and returns it with its
    /// server-assigned id
    pub async fn add_folder(&self, folder: &Folder) -> Result<Folder, AppError> {
        let title = require_input(folder.title.as_ref(), "folder.title")?;
        let params = [("title", title.clone())];
        let data = self.do_request(ADD_FOLDER, &params).await?;
        Folder::from_json(single_element(&data)?)
    }

    /// Deletes `folder`.
    ///
    /// Returns the raw decoded response. Deleting an id that is already gone
    /// behaves however the server defines; it is not retried specially.
    pub async fn delete_folder(&self, folder: &Folder) -> Result<Value, AppError> {
        let folder_id = require_input(folder.id.as_ref(), "folder.id")?;
        self.do_request(DELETE_FOLDER, &[("folder_id", folder_id.to_string())])
            .await
    }

    /// Adds a new bookmark to the user's account.
    ///
    /// `bookmark.url` is required; title and description are sent only when
    /// present. With no `folder` the server files the bookmark under unread.
    pub async fn add_bookmark(
        &self,
        bookmark: &Bookmark,
        folder: Option<&Folder>,
    ) -> Result<Bookmark, AppError> {
        let url = require_input(bookmark.url.as_ref(), "bookmark.url")?;
        let mut params = vec![("url", url.clone())];
        if let Some(title) = &bookmark.title {
            params.push(("title", title.clone()));
        }
        if let Some(description) = &bookmark.description {
            params.push(("description", description.clone()));
        }
        if let Some(folder) = folder {
            let folder_id = require_input(folder.id.as_ref(), "folder.id")?;
            params.push(("folder_id", folder_id.to_string()));
        }
        let data = self.do_request(ADD_BOOKMARK, &params).await?;
        Bookmark::from_json(single_element(&data)?)
    }

    /// Permanently deletes `bookmark`.
    ///
    /// Returns the raw decoded response; see [`Client::delete_folder`] on
    /// repeated deletes.
    pub async fn delete_bookmark(&self, bookmark: &Bookmark) -> Result<Value, AppError> {
        let bookmark_id = require_input(bookmark.id.as_ref(), "bookmark.id")?;
        self.do_request(DELETE_BOOKMARK, &[("bookmark_id", bookmark_id.to_string())])
            .await
    }

    /// Sends one logical API call through the retry loop and returns the
    /// decoded body, a JSON array of tagged objects.
    async fn do_request(&self, path: &str, params: &[(&str, String)]) -> Result<Value, AppError> {
        let url = Url::parse(&format!(
            "{}/{}",
            self.base_url,
            path.trim_start_matches('/')
        ))?;
        debug!("POST {}", url);
        debug!("Request parameters: {:?}", params);

        for attempt in 1..=self.retry.max_attempts {
            debug!("Attempt {}", attempt);
            match self.try_once(&url, params).await {
                Ok(data) => return Ok(data),
                Err(reason) => warn!("Attempt {} failed: {}", attempt, reason),
            }
        }

        Err(AppError::RetriesExhausted {
            attempts: self.retry.max_attempts,
        })
    }

    // One attempt. The error is the reason fed to the retry log, never
    // surfaced to the caller.
    async fn try_once(&self, url: &Url, params: &[(&str, String)]) -> Result<Value, String> {
        let authorization = self.oauth.authorization_header("POST", url, params);

        let response = self
            .http_client
            .post(url.clone())
            .header(header::AUTHORIZATION, authorization)
            .form(params)
            .send()
            .await
            .map_err(|e| format!("transport error: {e}"))?;

        let status = response.status();
        debug!("Response status: {}", status);

        if status != StatusCode::OK {
            return Err(format!("unexpected status {status}"));
        }

        let body = response
            .text()
            .await
            .map_err(|e| format!("failed reading body: {e}"))?;
        serde_json::from_str(&body).map_err(|e| format!("malformed body: {e}"))
    }
}

/// Decodes the response items tagged `type == tag`, preserving their order
fn decode_tagged<T>(
    data: &Value,
    tag: &str,
    decode: fn(&Value) -> Result<T, AppError>,
) -> Result<Vec<T>, AppError> {
    let items = data.as_array().ok_or_else(|| {
        AppError::InvalidResponse("expected a JSON array of tagged objects".to_string())
    })?;
    items
        .iter()
        .filter(|item| item.get("type").and_then(Value::as_str) == Some(tag))
        .map(decode)
        .collect()
}

/// First element of a single-element response list
fn single_element(data: &Value) -> Result<&Value, AppError> {
    data.as_array().and_then(|items| items.first()).ok_or_else(|| {
        AppError::InvalidResponse("expected a single-element response list".to_string())
    })
}

fn require_input<'a, T>(value: Option<&'a T>, what: &'static str) -> Result<&'a T, AppError> {
    value.ok_or(AppError::MissingInput(what))
}
