//! MemoryLedger: in-memory reference implementation of the ledger contract
//!
//! This module implements [`LedgerState`] using:
//! - `BTreeMap<String, Vec<StoredVersion>>` for ordered keys with full history
//! - `parking_lot::RwLock` for thread-safe access
//! - `AtomicU64` for monotonically increasing versions
//!
//! # Design Notes
//!
//! - **Full history**: every write appends a version; deletes append a tombstone
//! - **Snapshot scans**: iterators clone their entries when opened
//! - **Monotonic clock**: commit timestamps never go backwards, so history
//!   order and timestamp order agree
//!
//! It is a test double for the host ledger: no consensus, no durability.

use std::collections::BTreeMap;
use std::ops::Bound;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::trace;
use uuid::Uuid;

use smartreview_core::{
    Error, HistoryIterator, KeyModification, KeyValue, LedgerState, RangeIterator, Result,
    Timestamp, Version, Versioned, VersionedBytes,
};

use crate::iter::{IteratorTracker, SnapshotIter};

/// One committed version of a key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredVersion {
    /// Value bytes (empty for tombstones)
    pub value: Vec<u8>,
    /// Commit version
    pub version: Version,
    /// Commit time
    pub timestamp: Timestamp,
    /// Transaction identifier
    pub tx_id: String,
    /// Deletion tombstone
    pub is_delete: bool,
}

impl StoredVersion {
    fn to_modification(&self) -> KeyModification {
        KeyModification {
            tx_id: self.tx_id.clone(),
            timestamp: self.timestamp,
            is_delete: self.is_delete,
            value: self.value.clone(),
        }
    }
}

#[derive(Debug, Default)]
struct LedgerData {
    keys: BTreeMap<String, Vec<StoredVersion>>,
    last_timestamp: Timestamp,
}

impl LedgerData {
    fn live(&self, key: &str) -> Option<&StoredVersion> {
        self.keys
            .get(key)
            .and_then(|versions| versions.last())
            .filter(|sv| !sv.is_delete)
    }

    fn current_version(&self, key: &str) -> Version {
        self.live(key).map(|sv| sv.version).unwrap_or(Version::ZERO)
    }

    fn next_timestamp(&mut self) -> Timestamp {
        let now = Timestamp::now();
        let ts = if now > self.last_timestamp {
            now
        } else {
            Timestamp::from_micros(self.last_timestamp.as_micros() + 1)
        };
        self.last_timestamp = ts;
        ts
    }
}

/// In-memory ledger with per-key history.
///
/// Cloning shares the underlying state.
#[derive(Debug, Clone, Default)]
pub struct MemoryLedger {
    data: Arc<RwLock<LedgerData>>,
    version: Arc<AtomicU64>,
    tracker: IteratorTracker,
}

impl MemoryLedger {
    /// Create an empty ledger. Initial version is 0 (no writes have occurred).
    pub fn new() -> Self {
        Self::default()
    }

    /// Highest version assigned so far
    pub fn current_version(&self) -> Version {
        Version::new(self.version.load(Ordering::SeqCst))
    }

    /// Iterators opened and not yet closed
    pub fn open_iterators(&self) -> usize {
        self.tracker.open_count()
    }

    /// Iterators opened since creation
    pub fn iterators_opened(&self) -> usize {
        self.tracker.opened_total()
    }

    /// Number of live (non-deleted) keys
    pub fn len(&self) -> usize {
        self.data
            .read()
            .keys
            .values()
            .filter(|versions| versions.last().is_some_and(|sv| !sv.is_delete))
            .count()
    }

    /// Whether the ledger holds no live keys
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Append a deletion tombstone for `key`.
    ///
    /// Returns the tombstone's version, or `None` if the key was not live.
    pub fn delete_state(&self, key: &str) -> Result<Option<Version>> {
        validate_key(key)?;
        let mut data = self.data.write();
        if data.live(key).is_none() {
            return Ok(None);
        }
        let version = self.commit(&mut data, key, Vec::new(), true);
        Ok(Some(version))
    }

    /// Full history of `key`, oldest first.
    pub fn versions_of(&self, key: &str) -> Vec<StoredVersion> {
        self.data.read().keys.get(key).cloned().unwrap_or_default()
    }

    fn next_version(&self) -> Version {
        Version::new(self.version.fetch_add(1, Ordering::SeqCst) + 1)
    }

    fn commit(&self, data: &mut LedgerData, key: &str, value: Vec<u8>, is_delete: bool) -> Version {
        let version = self.next_version();
        let timestamp = data.next_timestamp();
        let tx_id = Uuid::new_v4().simple().to_string();
        trace!(key, %version, %tx_id, is_delete, "ledger commit");
        data.keys.entry(key.to_string()).or_default().push(StoredVersion {
            value,
            version,
            timestamp,
            tx_id,
            is_delete,
        });
        version
    }
}

fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(Error::InvalidKey("key must not be empty".into()));
    }
    Ok(())
}

impl LedgerState for MemoryLedger {
    fn get_state(&self, key: &str) -> Result<Option<VersionedBytes>> {
        validate_key(key)?;
        let data = self.data.read();
        Ok(data
            .live(key)
            .map(|sv| Versioned::with_timestamp(sv.value.clone(), sv.version, sv.timestamp)))
    }

    fn put_state(&self, key: &str, value: Vec<u8>) -> Result<Version> {
        validate_key(key)?;
        let mut data = self.data.write();
        Ok(self.commit(&mut data, key, value, false))
    }

    fn compare_and_put(&self, key: &str, value: Vec<u8>, expected: Version) -> Result<Version> {
        validate_key(key)?;
        let mut data = self.data.write();
        let actual = data.current_version(key);
        if actual != expected {
            return Err(Error::VersionMismatch {
                key: key.to_string(),
                expected,
                actual,
            });
        }
        Ok(self.commit(&mut data, key, value, false))
    }

    fn state_by_range(&self, start: &str, end: &str) -> Result<RangeIterator> {
        let entries = if start < end {
            let data = self.data.read();
            data.keys
                .range::<str, _>((Bound::Included(start), Bound::Excluded(end)))
                .filter_map(|(key, versions)| {
                    versions.last().filter(|sv| !sv.is_delete).map(|sv| KeyValue {
                        key: key.clone(),
                        value: sv.value.clone(),
                    })
                })
                .collect()
        } else {
            Vec::new()
        };
        Ok(Box::new(SnapshotIter::open(entries, &self.tracker)))
    }

    fn history_for_key(&self, key: &str) -> Result<HistoryIterator> {
        validate_key(key)?;
        let entries = self
            .data
            .read()
            .keys
            .get(key)
            .map(|versions| versions.iter().map(StoredVersion::to_modification).collect())
            .unwrap_or_default();
        Ok(Box::new(SnapshotIter::open(entries, &self.tracker)))
    }
}
