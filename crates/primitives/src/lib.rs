//! Primitives layer for SmartReview
//!
//! Provides the document-state operations as stateless facades over the ledger:
//! - **DocumentStore**: point read, seeding, owner/content mutation
//! - **RangeQueryEngine**: every document in the keyspace, in ledger order
//! - **HistoryQueryEngine**: every version of every slot key, flattened
//!
//! ## Design Principle: Stateless Facades
//!
//! Each primitive holds only an `Arc<dyn LedgerState>` and the keyspace.
//! Nothing is cached between calls; every operation re-reads the ledger.
//!
//! ## Iterator discipline
//!
//! Both engines consume ledger iterators through [`scan::fold_scan`], which
//! closes the iterator on exhaustion and on every error path.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod document_store;
pub mod history_query;
pub mod range_query;
pub mod scan;
pub mod seed;

pub use document_store::DocumentStore;
pub use history_query::{HistoryQueryEngine, HistoryRecord};
pub use range_query::{RangeQueryEngine, RangeRecord};
pub use scan::{fold_scan, Scan};
pub use seed::seed_documents;
