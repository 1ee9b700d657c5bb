/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/10/25
******************************************************************************/

//! # Instapaper Client Prelude
//!
//! This module provides a convenient way to import the most commonly used
//! types from the library.
//!
//! ## Usage
//!
//! ```rust
//! use instapaper_client::prelude::*;
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Credential store backing the client
pub use crate::config::Config;

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::AppError;

// ============================================================================
// CLIENT
// ============================================================================

/// Main client and its constructor-level options
pub use crate::client::{Client, ClientOptions};

/// Retry loop configuration
pub use crate::model::retry::RetryConfig;

/// OAuth 1.0a signing context
pub use crate::signing::OauthCredentials;

// ============================================================================
// RESOURCE RECORDS
// ============================================================================

/// Bookmark and Folder records, resource ids and the built-in folders
pub use crate::model::objects::{ARCHIVE_FOLDER, Bookmark, Folder, ResourceId, UNREAD_FOLDER};

// ============================================================================
// LOGGING
// ============================================================================

/// Re-exported tracing macros for convenient logging
pub use tracing::{debug, error, info, warn};
