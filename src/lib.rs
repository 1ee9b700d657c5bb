/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 26/10/25
******************************************************************************/

//! # Instapaper Client
//!
//! Client library for the Instapaper REST API (v1). It signs every request
//! with OAuth 1.0a and exposes one method per API operation for the two
//! resource types: folders and bookmarks.
//!
//! Credentials live in a local file (`~/.instapaperrc` by default): the
//! application consumer key/secret plus one token pair per username. The
//! access token pair is obtained out of band; this crate only signs with it.
//!
//! Every operation goes through a shared retry wrapper: up to ten attempts
//! back to back, each bounded by a five second timeout, with no delay in
//! between. Both knobs are configurable per client.
//!
//! # Example
//! ```ignore
//! use instapaper_client::prelude::*;
//!
//! let config = Config::load()?;
//! let client = Client::new(&config, "user@example.com")?;
//!
//! for folder in client.list_folders().await? {
//!     println!("{folder}");
//!     for bookmark in client.list_bookmarks(&folder).await? {
//!         println!("  {bookmark}");
//!     }
//! }
//! ```

/// Main client and the request/retry core
pub mod client;
/// Credential store backed by a local file
pub mod config;
/// API endpoints and default values
pub mod constants;
/// Error type used across the library
pub mod error;
/// Resource records and retry configuration
pub mod model;
/// Commonly used types, importable in one line
pub mod prelude;
/// OAuth 1.0a request signing
pub mod signing;

/// Current version of the crate, taken from Cargo.toml at build time
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the current version of the crate
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
