/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 26/10/25
******************************************************************************/
use thiserror::Error;

/// Main error type for the library.
///
/// Only failures that escape the retry loop are represented here. A failed
/// attempt inside the loop (non-200 status, transport error, malformed body)
/// is logged and retried; the caller sees it, at worst, folded into
/// [`AppError::RetriesExhausted`].
#[derive(Debug, Error)]
pub enum AppError {
    /// The credentials file has no entry for the requested section and key
    #[error("no `{key}` entry under `{section}` in the credentials file")]
    MissingCredentials {
        /// Section that was looked up: the application section or a username
        section: String,
        /// Key that was missing inside the section
        key: &'static str,
    },

    /// A server response object lacks a required field
    #[error("response object is missing field `{0}`")]
    MissingField(&'static str),

    /// A server response decoded cleanly but does not have the expected shape
    #[error("unexpected response: {0}")]
    InvalidResponse(String),

    /// A record passed by the caller lacks a value the operation needs
    #[error("missing required value: {0}")]
    MissingInput(&'static str),

    /// Every attempt of the retry loop failed
    #[error("request failed after {attempts} attempts")]
    RetriesExhausted {
        /// Number of attempts that were made
        attempts: u32,
    },

    /// The request URL could not be parsed
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// HTTP client construction failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Credentials file could not be read or written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Credentials file is not valid JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
