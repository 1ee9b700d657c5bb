/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 26/10/25
******************************************************************************/
use crate::constants::{APP_SECTION, CONFIG_FILE_NAME};
use crate::error::AppError;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

const TOKEN_KEY: &str = "token";
const TOKEN_SECRET_KEY: &str = "token_secret";

/// Named sections of string key/value pairs, as stored on disk
type Sections = BTreeMap<String, BTreeMap<String, String>>;

/// Holds the credentials used when making requests to Instapaper.
///
/// The backing file is a JSON object of named sections. The `instapaper`
/// section carries the application consumer pair; every other section is a
/// username holding that user's token pair:
///
/// ```json
/// {
///   "instapaper": { "consumer_key": "...", "consumer_secret": "..." },
///   "user@example.com": { "token": "...", "token_secret": "..." }
/// }
/// ```
///
/// Mutations persist to disk immediately. Writers to the same file are not
/// coordinated across processes: the last write wins.
#[derive(Debug, Clone)]
pub struct Config {
    path: PathBuf,
    sections: Sections,
}

impl Config {
    /// Loads the default credentials file, `~/.instapaperrc`.
    ///
    /// A missing file yields an empty configuration; a file that exists but
    /// is not valid JSON is an error.
    pub fn load() -> Result<Self, AppError> {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        Self::load_from(home.join(CONFIG_FILE_NAME))
    }

    /// Loads a credentials file from an explicit path
    pub fn load_from(path: impl Into<PathBuf>) -> Result<Self, AppError> {
        let path = path.into();
        let sections = if path.exists() {
            serde_json::from_str(&fs::read_to_string(&path)?)?
        } else {
            Sections::new()
        };
        Ok(Self { path, sections })
    }

    /// Path this configuration was loaded from and persists to
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the application consumer key
    pub fn consumer_key(&self) -> Result<&str, AppError> {
        self.get(APP_SECTION, "consumer_key")
    }

    /// Returns the application consumer secret
    pub fn consumer_secret(&self) -> Result<&str, AppError> {
        self.get(APP_SECTION, "consumer_secret")
    }

    /// Returns the OAuth token for the specified username
    pub fn token(&self, username: &str) -> Result<&str, AppError> {
        self.get(username, TOKEN_KEY)
    }

    /// Returns the OAuth token secret for the specified username
    pub fn token_secret(&self, username: &str) -> Result<&str, AppError> {
        self.get(username, TOKEN_SECRET_KEY)
    }

    /// Whether a complete token pair is stored for `username`. Never fails.
    #[must_use]
    pub fn has_credentials(&self, username: &str) -> bool {
        self.sections
            .get(username)
            .is_some_and(|section| {
                section.contains_key(TOKEN_KEY) && section.contains_key(TOKEN_SECRET_KEY)
            })
    }

    /// Inserts or replaces the token pair for `username` and writes the file
    pub fn add_credentials(
        &mut self,
        username: &str,
        token: &str,
        token_secret: &str,
    ) -> Result<(), AppError> {
        let mut section = BTreeMap::new();
        section.insert(TOKEN_KEY.to_string(), token.to_string());
        section.insert(TOKEN_SECRET_KEY.to_string(), token_secret.to_string());
        self.sections.insert(username.to_string(), section);
        self.persist()
    }

    /// Deletes the section for `username` and writes the file
    pub fn remove_credentials(&mut self, username: &str) -> Result<(), AppError> {
        self.sections.remove(username);
        self.persist()
    }

    fn persist(&self) -> Result<(), AppError> {
        let body = serde_json::to_string_pretty(&self.sections)?;
        fs::write(&self.path, body)?;
        Ok(())
    }

    fn get(&self, section: &str, key: &'static str) -> Result<&str, AppError> {
        self.sections
            .get(section)
            .and_then(|entries| entries.get(key))
            .map(String::as_str)
            .ok_or_else(|| AppError::MissingCredentials {
                section: section.to_string(),
                key,
            })
    }
}
