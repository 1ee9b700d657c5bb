/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 26/10/25
******************************************************************************/
use crate::constants::{DEFAULT_MAX_ATTEMPTS, DEFAULT_REQUEST_TIMEOUT_SECS};
use std::time::Duration;

/// Configuration for the request retry loop.
///
/// Attempts run back to back; there is no delay between them. A request
/// fails once `max_attempts` attempts have been used up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryConfig {
    /// Maximum number of attempts before the request fails
    pub max_attempts: u32,
    /// Upper bound for a single attempt, connection included
    pub timeout: Duration,
}

impl RetryConfig {
    /// Creates the default configuration: 10 attempts of at most 5 seconds each
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration with a custom attempt budget
    #[must_use]
    pub fn with_max_attempts(max_attempts: u32) -> Self {
        Self {
            max_attempts,
            ..Self::default()
        }
    }

    /// Creates a configuration with a custom per-attempt timeout
    #[must_use]
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout,
            ..Self::default()
        }
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}
