//! SmartReview - document-review record keeping over a versioned ledger
//!
//! Review documents live in the ledger's world state under bounded keys
//! (`reviewDoc0` .. `reviewDoc9` by default). Six operations read, seed,
//! mutate, list and trace the history of those documents.
//!
//! # Quick Start
//!
//! ```ignore
//! use smartreview::SmartReview;
//!
//! let review = SmartReview::in_memory();
//! review.init_ledger()?;
//! review.change_document_owner("reviewDoc0", "Priya")?;
//! let history = review.history_for_documents()?;
//! ```
//!
//! # Architecture
//!
//! All operations go through the [`Executor`], which resolves an operation
//! name and dispatches it against a [`LedgerState`]. The [`SmartReview`]
//! struct provides a typed interface over the same path.
//!
//! The ledger itself is supplied by the host; [`MemoryLedger`] is the
//! in-process reference implementation.

// Re-export the public API from smartreview-executor
pub use smartreview_executor::*;
