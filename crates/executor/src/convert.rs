//! Error conversion from ledger-level errors.
//!
//! Maps `smartreview_core::Error` onto the executor's [`Error`], keeping
//! every detail the caller may need.

use crate::Error;
use smartreview_core::Error as CoreError;

impl From<CoreError> for Error {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::KeyNotFound(key) => Error::DocumentNotFound { key },

            CoreError::VersionMismatch {
                key,
                expected,
                actual,
            } => Error::Conflict {
                key,
                expected: expected.as_u64(),
                actual: actual.as_u64(),
            },

            CoreError::Serialization(reason) => Error::Serialization { reason },

            CoreError::InvalidKey(reason) => Error::InvalidKey { reason },

            CoreError::StoreUnavailable(reason) => Error::Store { reason },

            err @ CoreError::IteratorClosed => Error::Store {
                reason: err.to_string(),
            },
        }
    }
}

/// Convert a ledger result into an executor result.
pub fn convert_result<T>(result: smartreview_core::Result<T>) -> crate::Result<T> {
    result.map_err(Error::from)
}
