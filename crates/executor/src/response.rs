//! Response envelope returned to the host for every invocation.
//!
//! Success carries a byte payload (possibly empty); failure carries the
//! error's message. Status codes follow the ledger runtime's convention.

use serde::{Deserialize, Serialize};

/// Status of a successful invocation
pub const OK: i32 = 200;

/// Status of a failed invocation
pub const ERROR: i32 = 500;

/// Outcome of one invocation.
///
/// # Example
///
/// ```text
/// let response = executor.invoke(Invocation::new("queryDocument", ["reviewDoc0"]));
/// if response.is_ok() {
///     println!("{}", String::from_utf8_lossy(&response.payload));
/// } else {
///     eprintln!("{}", response.message);
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    /// [`OK`] or [`ERROR`]
    pub status: i32,
    /// Error message, empty on success
    #[serde(default)]
    pub message: String,
    /// Operation payload, empty on failure
    #[serde(default)]
    pub payload: Vec<u8>,
}

impl Response {
    /// Wrap a handler's payload
    pub fn success(payload: Vec<u8>) -> Self {
        Response {
            status: OK,
            message: String::new(),
            payload,
        }
    }

    /// Wrap a failure message
    pub fn error(message: impl Into<String>) -> Self {
        Response {
            status: ERROR,
            message: message.into(),
            payload: Vec::new(),
        }
    }

    /// Whether the invocation succeeded
    pub fn is_ok(&self) -> bool {
        self.status == OK
    }

    /// Payload as text (lossy UTF-8)
    pub fn payload_text(&self) -> String {
        String::from_utf8_lossy(&self.payload).into_owned()
    }
}

impl From<crate::Result<Vec<u8>>> for Response {
    fn from(result: crate::Result<Vec<u8>>) -> Self {
        match result {
            Ok(payload) => Response::success(payload),
            Err(e) => Response::error(e.to_string()),
        }
    }
}
