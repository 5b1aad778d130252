//! Error types for kanjikit-engine.
//!
//! The engine performs no local recovery: a failure reading from the
//! collaborating store surfaces unchanged, and a scan either fully
//! succeeds or fully fails. Empty collections, absent note types, and
//! unmatched source fields are valid empty results, not errors.

use thiserror::Error;

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during a coverage scan.
#[derive(Debug, Error)]
pub enum Error {
    /// An error from the underlying kanjikit client, passed through
    /// without additional context.
    #[error(transparent)]
    Client(#[from] kanjikit::Error),
}
