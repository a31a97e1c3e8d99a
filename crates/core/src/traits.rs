//! The ledger contract consumed by the document layer
//!
//! The ledger engine (consensus, commitment, MVCC) is supplied by the host.
//! This layer only needs point reads and writes, a range scan and per-key
//! history, expressed by [`LedgerState`]. Scans hand back a
//! [`StateIterator`]: advance until `None`, then close.
//!
//! Thread safety: implementations must be shareable across threads
//! (requires Send + Sync); a single invocation never issues overlapping calls.

use crate::contract::{Timestamp, Version, VersionedBytes};
use crate::error::Result;

/// One entry of a range scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyValue {
    /// Storage key
    pub key: String,
    /// Raw value bytes
    pub value: Vec<u8>,
}

/// One historical version of a key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyModification {
    /// Transaction that produced this version
    pub tx_id: String,
    /// Commit time
    pub timestamp: Timestamp,
    /// Whether this version is a deletion tombstone
    pub is_delete: bool,
    /// Value written (empty for tombstones)
    pub value: Vec<u8>,
}

/// A finite, non-restartable cursor over ledger entries.
///
/// `advance` yields `Ok(None)` once exhausted. `close` releases the
/// ledger-side resources and must be called exactly once on every path;
/// see `smartreview_primitives::scan` for the adapter that guarantees it.
pub trait StateIterator: Send {
    /// Entry type yielded by this iterator
    type Item;

    /// Next entry, or `None` when exhausted.
    ///
    /// # Errors
    ///
    /// Returns an error if the ledger fails mid-scan or the iterator was closed.
    fn advance(&mut self) -> Result<Option<Self::Item>>;

    /// Release the iterator.
    ///
    /// # Errors
    ///
    /// Returns an error if the ledger fails to release it.
    fn close(&mut self) -> Result<()>;
}

/// Boxed range-scan iterator
pub type RangeIterator = Box<dyn StateIterator<Item = KeyValue>>;

/// Boxed history iterator
pub type HistoryIterator = Box<dyn StateIterator<Item = KeyModification>>;

/// World-state access offered by the host ledger.
pub trait LedgerState: Send + Sync {
    /// Current value of `key`, or `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the ledger is unavailable.
    fn get_state(&self, key: &str) -> Result<Option<VersionedBytes>>;

    /// Write `value` at `key` unconditionally; returns the new version.
    ///
    /// # Errors
    ///
    /// Returns an error if the ledger rejects the write.
    fn put_state(&self, key: &str, value: Vec<u8>) -> Result<Version>;

    /// Write `value` at `key` only if its current version is `expected`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::VersionMismatch`](crate::Error::VersionMismatch) if a
    /// different version is committed (an absent key counts as
    /// [`Version::ZERO`]), or any ledger failure.
    fn compare_and_put(&self, key: &str, value: Vec<u8>, expected: Version) -> Result<Version>;

    /// Scan keys in `[start, end)` in ledger order (lexicographic).
    ///
    /// # Errors
    ///
    /// Returns an error if the iterator cannot be opened.
    fn state_by_range(&self, start: &str, end: &str) -> Result<RangeIterator>;

    /// All committed versions of `key`, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the iterator cannot be opened.
    fn history_for_key(&self, key: &str) -> Result<HistoryIterator>;
}
