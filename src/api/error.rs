//! Error type for remote store operations.
//!
//! Variants exist for diagnostics; the UI collapses all of them into a
//! single "remote operation failed" message and either shows it or rolls
//! the affected state back.

use thiserror::Error;

/// Errors that can occur talking to the product store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Failed to reach the store at all.
    #[error("Connection failed: {source}")]
    Connection {
        #[source]
        source: reqwest::Error,
    },

    /// Request exceeded the configured total timeout.
    #[error("Request timeout after {duration}s")]
    Timeout { duration: u64 },

    /// Store answered with a non-success status.
    #[error("Store returned status {status}")]
    Status { status: u16 },

    /// Response body was not the expected JSON shape.
    #[error("Failed to decode response: {source}")]
    Decode {
        #[source]
        source: reqwest::Error,
    },
}

impl StoreError {
    /// The one message users ever see. Everything else goes to the log.
    pub fn user_message(&self) -> &'static str {
        "Remote operation failed. Try again."
    }
}
