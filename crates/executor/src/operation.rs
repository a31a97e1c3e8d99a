//! The closed set of invocable operations.
//!
//! Operation names arrive as strings from the host runtime. They are
//! resolved once, up front, into [`Operation`]; everything after that is an
//! exhaustive `match`. An unknown name never reaches the ledger.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// An operation the contract exposes.
///
/// | Operation | Args | Returns |
/// |-----------|------|---------|
/// | `queryDocument` | key | raw record bytes |
/// | `initLedger` | ignored | empty |
/// | `queryAllDocuments` | ignored | JSON array of `{Key, Record}` |
/// | `changeDocumentOwner` | key, owner | empty |
/// | `changeDocumentContent` | key, content | empty |
/// | `getHistoryForDocuments` | ignored | JSON array of `{TxId, Timestamp, IsDelete, Value}` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    /// Point read of one document
    #[serde(rename = "queryDocument")]
    QueryDocument,
    /// Write the seed documents
    #[serde(rename = "initLedger")]
    InitLedger,
    /// Range listing of every document
    #[serde(rename = "queryAllDocuments")]
    QueryAllDocuments,
    /// Replace a document's owner
    #[serde(rename = "changeDocumentOwner")]
    ChangeDocumentOwner,
    /// Replace a document's content
    #[serde(rename = "changeDocumentContent")]
    ChangeDocumentContent,
    /// History of every document slot
    #[serde(rename = "getHistoryForDocuments")]
    GetHistoryForDocuments,
}

impl Operation {
    /// Every operation, in declaration order
    pub const ALL: [Operation; 6] = [
        Operation::QueryDocument,
        Operation::InitLedger,
        Operation::QueryAllDocuments,
        Operation::ChangeDocumentOwner,
        Operation::ChangeDocumentContent,
        Operation::GetHistoryForDocuments,
    ];

    /// Wire name
    pub const fn name(&self) -> &'static str {
        match self {
            Operation::QueryDocument => "queryDocument",
            Operation::InitLedger => "initLedger",
            Operation::QueryAllDocuments => "queryAllDocuments",
            Operation::ChangeDocumentOwner => "changeDocumentOwner",
            Operation::ChangeDocumentContent => "changeDocumentContent",
            Operation::GetHistoryForDocuments => "getHistoryForDocuments",
        }
    }

    /// Exact argument count, or `None` when arguments are ignored.
    pub const fn arity(&self) -> Option<usize> {
        match self {
            Operation::QueryDocument => Some(1),
            Operation::ChangeDocumentOwner | Operation::ChangeDocumentContent => Some(2),
            Operation::InitLedger
            | Operation::QueryAllDocuments
            | Operation::GetHistoryForDocuments => None,
        }
    }

    /// Whether the operation writes to the ledger
    pub const fn is_write(&self) -> bool {
        matches!(
            self,
            Operation::InitLedger
                | Operation::ChangeDocumentOwner
                | Operation::ChangeDocumentContent
        )
    }

    /// Resolve a wire name. Matching is exact and case-sensitive.
    ///
    /// # Errors
    ///
    /// `UnknownOperation` naming the requested operation.
    pub fn parse(name: &str) -> Result<Self> {
        Operation::ALL
            .into_iter()
            .find(|op| op.name() == name)
            .ok_or_else(|| Error::UnknownOperation {
                name: name.to_string(),
            })
    }
}

impl FromStr for Operation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Operation::parse(s)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
