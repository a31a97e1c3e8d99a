//! Error types for the ledger boundary
//!
//! These are the failures a [`LedgerState`](crate::traits::LedgerState)
//! implementation can report. The executor converts them into its own
//! caller-facing error enum at the handler boundary.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use crate::contract::Version;
use thiserror::Error;

/// Result type alias for ledger operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the ledger or by record (de)serialization
#[derive(Debug, Error)]
pub enum Error {
    /// The ledger could not serve the request
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    /// Compare-and-put observed a different current version
    #[error("Version mismatch on {key}: expected {expected}, got {actual}")]
    VersionMismatch {
        /// Key being written
        key: String,
        /// Version the caller read
        expected: Version,
        /// Version currently committed
        actual: Version,
    },

    /// No value (or an empty value) stored at the key
    #[error("Key not found: {0}")]
    KeyNotFound(String),

    /// An iterator was advanced after it was closed
    #[error("Iterator already closed")]
    IteratorClosed,

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Key rejected by the ledger (e.g. empty)
    #[error("Invalid key: {0}")]
    InvalidKey(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
