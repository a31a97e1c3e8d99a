//! Reference ledger for SmartReview
//!
//! This crate implements the ledger contract from `smartreview-core` in memory:
//! - MemoryLedger: BTreeMap-based world state with per-key history (RwLock)
//! - SnapshotIter: cloned-snapshot iterators with open/close tracking
//! - testing::FaultyLedger: fault injection wrapper
//!
//! The production ledger is supplied by the host runtime; this crate backs
//! tests and local runs.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod iter;
pub mod memory;
pub mod testing;

pub use iter::{IteratorTracker, SnapshotIter};
pub use memory::{MemoryLedger, StoredVersion};
