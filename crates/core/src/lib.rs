//! Core types and traits for SmartReview
//!
//! This crate defines the foundational types used throughout the system:
//! - DocumentRecord / Decoded: the stored document and its best-effort decoding
//! - DocumentKeyspace: the bounded set of storage keys documents occupy
//! - Contract types: Version, Timestamp, Versioned<T>
//! - Traits: the ledger contract (LedgerState, StateIterator)
//! - Error: ledger-level error type

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod contract;
pub mod document;
pub mod error;
pub mod keyspace;
pub mod traits;

pub use contract::{LedgerTime, Timestamp, Version, Versioned, VersionedBytes};
pub use document::{Decoded, DocumentRecord, DOC_TYPE};
pub use error::{Error, Result};
pub use keyspace::{DocumentKeyspace, KeyScheme, DEFAULT_PREFIX, DEFAULT_SLOTS};
pub use traits::{
    HistoryIterator, KeyModification, KeyValue, LedgerState, RangeIterator, StateIterator,
};
