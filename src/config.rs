//! Runtime configuration
//!
//! Plain structs with defaults. The CLI maps its flags and environment
//! variables onto these.

use std::time::Duration;

/// How the corpus fetches its word list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadConfig {
    /// Fetch attempts before the load is reported as failed (at least 1)
    pub max_attempts: u32,
    /// Pause between failed attempts
    pub retry_delay: Duration,
}

impl LoadConfig {
    /// Single attempt, no retries
    #[must_use]
    pub const fn once() -> Self {
        Self {
            max_attempts: 1,
            retry_delay: Duration::ZERO,
        }
    }

    #[must_use]
    pub const fn with_retries(max_attempts: u32, retry_delay: Duration) -> Self {
        Self {
            max_attempts,
            retry_delay,
        }
    }
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            max_attempts: 1,
            retry_delay: Duration::from_millis(250),
        }
    }
}

/// Bounds applied by the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryLimits {
    /// Longest accepted letter bag, wildcards included
    pub max_letters: usize,
    /// Results displayed per query
    pub max_results: usize,
}

impl QueryLimits {
    pub const DEFAULT_MAX_LETTERS: usize = 15;
    pub const DEFAULT_MAX_RESULTS: usize = 100;
}

impl Default for QueryLimits {
    fn default() -> Self {
        Self {
            max_letters: Self::DEFAULT_MAX_LETTERS,
            max_results: Self::DEFAULT_MAX_RESULTS,
        }
    }
}
