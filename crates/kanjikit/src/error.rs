//! Error types for the kanjikit crate.
//!
//! The errors you are most likely to see:
//!
//! - [`Error::ConnectionRefused`]: Anki is not running or AnkiConnect is
//!   not installed
//! - [`Error::AnkiConnect`]: the action itself failed (invalid query,
//!   unknown model, ...)
//! - [`Error::PermissionDenied`]: an API key is required or the request
//!   needs approval in the Anki UI

use thiserror::Error;

/// The error type for AnkiConnect operations.
#[derive(Debug, Error)]
pub enum Error {
    /// HTTP/network error from reqwest.
    ///
    /// Typically indicates network issues unrelated to Anki. For
    /// connection issues, see [`Error::ConnectionRefused`].
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// AnkiConnect returned an error message.
    #[error("AnkiConnect error: {0}")]
    AnkiConnect(String),

    /// Response was empty (no result or error).
    ///
    /// This is unexpected and may indicate an AnkiConnect bug.
    #[error("AnkiConnect returned empty response")]
    EmptyResponse,

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Connection refused - Anki is likely not running.
    #[error("Could not connect to Anki. Is Anki running with AnkiConnect installed?")]
    ConnectionRefused,

    /// Permission denied by AnkiConnect.
    ///
    /// An API key is required but missing or wrong, or the request needs
    /// user approval in the Anki UI.
    #[error("Permission denied. Request permission first or check API key.")]
    PermissionDenied,
}

/// A specialized Result type for AnkiConnect operations.
pub type Result<T> = std::result::Result<T, Error>;
