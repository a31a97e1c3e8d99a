//! Operation handlers organized by primitive.
//!
//! | Module | Operations | Primitive |
//! |--------|------------|-----------|
//! | `document` | queryDocument, initLedger, changeDocumentOwner, changeDocumentContent | DocumentStore |
//! | `query` | queryAllDocuments, getHistoryForDocuments | RangeQueryEngine, HistoryQueryEngine |
//!
//! Every handler returns the payload bytes placed in the success envelope.

pub mod document;
pub mod query;
