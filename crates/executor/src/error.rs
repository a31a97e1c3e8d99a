//! Error types for invocation handling.
//!
//! All failures an invocation can report are represented by the [`Error`]
//! enum. These errors are:
//! - **Structured**: Each variant has typed fields for error details
//! - **Serializable**: Can be converted to/from JSON
//! - **Displayable**: the `Display` text is the failure envelope's message

use serde::{Deserialize, Serialize};

/// Invocation errors.
///
/// # Categories
///
/// | Category | Variants | Description |
/// |----------|----------|-------------|
/// | Arguments | `ArgumentCount` | Wrong number of arguments for the operation |
/// | Not Found | `DocumentNotFound` | Absent or empty value on a point read |
/// | Dispatch | `UnknownOperation` | Operation name outside the fixed set |
/// | Concurrency | `Conflict` | Record changed between read and write |
/// | Validation | `InvalidKey`, `Config` | Bad key or configuration |
/// | System | `Serialization`, `Store`, `Internal` | Infrastructure errors |
///
/// # Example
///
/// ```ignore
/// use smartreview_executor::{Error, Executor, Operation};
///
/// match executor.execute(Operation::QueryDocument, &["reviewDoc7".into()]) {
///     Ok(bytes) => { /* raw record bytes */ }
///     Err(Error::DocumentNotFound { key }) => println!("no document at {}", key),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
pub enum Error {
    // ==================== Arguments ====================
    /// Wrong number of arguments
    #[error("Incorrect number of arguments for {operation}. Expecting {expected}, got {actual}")]
    ArgumentCount {
        /// Operation name
        operation: String,
        /// Arguments the operation takes
        expected: usize,
        /// Arguments supplied
        actual: usize,
    },

    // ==================== Not Found ====================
    /// No document (or an empty value) at the key
    #[error("No Document exists with ID {key}")]
    DocumentNotFound {
        /// Storage key
        key: String,
    },

    // ==================== Dispatch ====================
    /// Operation name outside the fixed set
    #[error("Received unknown function {name} invocation")]
    UnknownOperation {
        /// Requested name
        name: String,
    },

    // ==================== Concurrency ====================
    /// The record was written by someone else between read and write
    #[error("Conflict on {key}: read at version {expected}, current version is {actual}")]
    Conflict {
        /// Storage key
        key: String,
        /// Version the mutation read
        expected: u64,
        /// Version committed when the write was attempted
        actual: u64,
    },

    // ==================== Validation ====================
    /// Key rejected by the ledger
    #[error("Invalid key: {reason}")]
    InvalidKey {
        /// Why the key was rejected
        reason: String,
    },

    /// Configuration could not be loaded or is inconsistent
    #[error("Invalid configuration: {reason}")]
    Config {
        /// What is wrong
        reason: String,
    },

    // ==================== System ====================
    /// Serialization error
    #[error("Serialization error: {reason}")]
    Serialization {
        /// Underlying message
        reason: String,
    },

    /// Ledger failure, propagated unchanged
    #[error("Store error: {reason}")]
    Store {
        /// Underlying message
        reason: String,
    },

    /// Internal error (bug or panic below the dispatcher)
    #[error("Internal error: {reason}")]
    Internal {
        /// Underlying message
        reason: String,
    },
}
