/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 26/10/25
******************************************************************************/

//! Bookmark and Folder, the two Instapaper resource records.
//!
//! Both are value records: built once from caller input or from a decoded
//! server response, never mutated in place afterwards. Every record the
//! server returns carries an id; records submitted for creation may not.

use crate::error::AppError;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Identifier of a server-side resource.
///
/// Ordinary rows carry numeric ids; the built-in archive folder is addressed
/// by the literal string `"archive"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResourceId {
    /// Numeric id assigned by the service
    Number(i64),
    /// String id, used by the built-in archive folder
    Text(String),
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceId::Number(n) => write!(f, "{n}"),
            ResourceId::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<i64> for ResourceId {
    fn from(value: i64) -> Self {
        ResourceId::Number(value)
    }
}

impl From<&str> for ResourceId {
    fn from(value: &str) -> Self {
        ResourceId::Text(value.to_string())
    }
}

impl From<String> for ResourceId {
    fn from(value: String) -> Self {
        ResourceId::Text(value)
    }
}

/// Represents an Instapaper bookmark
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Bookmark {
    /// Server-assigned id; `None` until the bookmark has been created
    pub id: Option<ResourceId>,
    /// Optional free-form description
    pub description: Option<String>,
    /// Creation time exactly as the server sent it; never interpreted locally
    pub time: Option<Value>,
    /// Optional title
    pub title: Option<String>,
    /// The saved URL
    pub url: Option<String>,
}

impl Bookmark {
    /// Creates a bookmark ready to be submitted with
    /// [`Client::add_bookmark`](crate::client::Client::add_bookmark)
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Self::default()
        }
    }

    /// Creates a new Bookmark from the specified JSON object.
    ///
    /// The keys `bookmark_id`, `description`, `time`, `title` and `url` must
    /// all be present; a missing key fails with [`AppError::MissingField`]
    /// naming it. There is no partial decode.
    pub fn from_json(value: &Value) -> Result<Self, AppError> {
        let obj = as_object(value, "bookmark")?;
        Ok(Self {
            id: Some(id_field(obj, "bookmark_id")?),
            description: string_field(obj, "description")?,
            time: raw_field(obj, "time")?,
            title: string_field(obj, "title")?,
            url: string_field(obj, "url")?,
        })
    }
}

// Identity is the server id once both sides have one
impl PartialEq for Bookmark {
    fn eq(&self, other: &Self) -> bool {
        match (&self.id, &other.id) {
            (Some(a), Some(b)) => a == b,
            _ => {
                self.id == other.id
                    && self.description == other.description
                    && self.time == other.time
                    && self.title == other.title
                    && self.url == other.url
            }
        }
    }
}

impl fmt::Display for Bookmark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Bookmark[id={}, title={}, url={}]",
            display_id(&self.id),
            quoted(&self.title),
            quoted(&self.url),
        )
    }
}

/// Represents an Instapaper folder
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Folder {
    /// Server-assigned id; `None` until the folder has been created
    pub id: Option<ResourceId>,
    /// Folder title
    pub title: Option<String>,
    /// URL slug derived from the title by the server
    pub slug: Option<String>,
}

impl Folder {
    /// Creates a folder ready to be submitted with
    /// [`Client::add_folder`](crate::client::Client::add_folder)
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    /// Creates a new Folder from the specified JSON object.
    ///
    /// The keys `folder_id`, `title` and `slug` must all be present; a
    /// missing key fails with [`AppError::MissingField`] naming it.
    pub fn from_json(value: &Value) -> Result<Self, AppError> {
        let obj = as_object(value, "folder")?;
        Ok(Self {
            id: Some(id_field(obj, "folder_id")?),
            title: string_field(obj, "title")?,
            slug: string_field(obj, "slug")?,
        })
    }
}

// Identity is the server id once both sides have one
impl PartialEq for Folder {
    fn eq(&self, other: &Self) -> bool {
        match (&self.id, &other.id) {
            (Some(a), Some(b)) => a == b,
            _ => {
                self.id == other.id
                    && self.title == other.title
                    && self.slug == other.slug
            }
        }
    }
}

impl fmt::Display for Folder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Folder[id={}, title={}]",
            display_id(&self.id),
            quoted(&self.title),
        )
    }
}

/// The built-in folder new bookmarks land in.
///
/// Valid anywhere a [`Folder`] is expected, without a server round-trip.
pub static UNREAD_FOLDER: Lazy<Folder> = Lazy::new(|| Folder {
    id: Some(ResourceId::Number(0)),
    title: Some("unread".to_string()),
    slug: None,
});

/// The built-in folder holding archived bookmarks.
///
/// Valid anywhere a [`Folder`] is expected, without a server round-trip.
pub static ARCHIVE_FOLDER: Lazy<Folder> = Lazy::new(|| Folder {
    id: Some(ResourceId::Text("archive".to_string())),
    title: Some("archive".to_string()),
    slug: None,
});

fn quoted(value: &Option<String>) -> String {
    match value {
        Some(s) => format!("\"{s}\""),
        None => "None".to_string(),
    }
}

fn display_id(id: &Option<ResourceId>) -> String {
    match id {
        Some(id) => id.to_string(),
        None => "None".to_string(),
    }
}

fn as_object<'a>(value: &'a Value, what: &str) -> Result<&'a Map<String, Value>, AppError> {
    value
        .as_object()
        .ok_or_else(|| AppError::InvalidResponse(format!("expected a JSON object for a {what}")))
}

fn require<'a>(obj: &'a Map<String, Value>, field: &'static str) -> Result<&'a Value, AppError> {
    obj.get(field).ok_or(AppError::MissingField(field))
}

fn id_field(obj: &Map<String, Value>, field: &'static str) -> Result<ResourceId, AppError> {
    match require(obj, field)? {
        Value::Number(n) => n.as_i64().map(ResourceId::Number).ok_or_else(|| {
            AppError::InvalidResponse(format!("field `{field}` is not an integer id"))
        }),
        Value::String(s) => Ok(ResourceId::Text(s.clone())),
        _ => Err(AppError::InvalidResponse(format!(
            "field `{field}` is neither an integer nor a string"
        ))),
    }
}

fn string_field(obj: &Map<String, Value>, field: &'static str) -> Result<Option<String>, AppError> {
    match require(obj, field)? {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s.clone())),
        _ => Err(AppError::InvalidResponse(format!(
            "field `{field}` is not a string"
        ))),
    }
}

fn raw_field(obj: &Map<String, Value>, field: &'static str) -> Result<Option<Value>, AppError> {
    match require(obj, field)? {
        Value::Null => Ok(None),
        other => Ok(Some(other.clone())),
    }
}
