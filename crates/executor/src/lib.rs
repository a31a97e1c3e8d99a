//! # SmartReview Executor
//!
//! The invocation surface of the document-review contract.
//!
//! This is the only crate users need to import. It provides:
//! - [`Executor`] - resolves an operation name and dispatches it to the ledger
//! - [`Invocation`]/[`Response`] - the host-facing request and envelope
//! - [`SmartReview`] - typed wrapper returning parsed records
//! - [`ContractConfig`] - keyspace configuration from `smart_review.toml`
//!
//! ## Quick Start
//!
//! ```text
//! use smartreview_executor::{Executor, Invocation};
//!
//! let executor = Executor::new(ledger);
//! executor.invoke_raw(["initLedger"]);
//! let response = executor.invoke_raw(["queryDocument", "reviewDoc0"]);
//! assert_eq!(response.status, 200);
//! ```
//!
//! ## Operations
//!
//! | Name | Arguments | Payload |
//! |------|-----------|---------|
//! | `queryDocument` | key | stored bytes |
//! | `initLedger` | - | empty |
//! | `queryAllDocuments` | - | `[{"Key", "Record"}]` |
//! | `changeDocumentOwner` | key, owner | empty |
//! | `changeDocumentContent` | key, content | empty |
//! | `getHistoryForDocuments` | - | `[{"TxId", "Timestamp", "IsDelete", "Value"}]` |

#![warn(missing_docs)]

mod api;
pub(crate) mod bridge;
pub mod config;
mod convert;
mod error;
mod executor;
mod invocation;
mod operation;
pub mod response;

// Handler modules
mod handlers;


// =============================================================================
// Public API - Everything users need is re-exported here
// =============================================================================

pub use api::SmartReview;
pub use config::{ContractConfig, CONFIG_FILE_NAME};
pub use convert::convert_result;
pub use error::Error;
pub use executor::Executor;
pub use invocation::Invocation;
pub use operation::Operation;
pub use response::Response;

pub use smartreview_core::{
    Decoded, DocumentKeyspace, DocumentRecord, KeyScheme, LedgerState, LedgerTime, DOC_TYPE,
};
pub use smartreview_primitives::{HistoryRecord, RangeRecord};
pub use smartreview_storage::MemoryLedger;

/// Result type for executor operations
pub type Result<T> = std::result::Result<T, Error>;
