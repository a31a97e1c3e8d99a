//! HistoryQueryEngine: version history of every slot key, flattened
//!
//! Slots are visited in index order; each slot's history iterator is opened,
//! drained oldest-first into the shared list, and closed before the next slot
//! is opened. The result is not grouped by key.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use smartreview_core::{Decoded, DocumentKeyspace, KeyModification, LedgerState, LedgerTime, Result};
use tracing::debug;

use crate::scan::fold_scan;

/// One historical version in the history listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    /// Transaction that wrote this version
    #[serde(rename = "TxId")]
    pub tx_id: String,
    /// Commit time
    #[serde(rename = "Timestamp")]
    pub timestamp: LedgerTime,
    /// Deletion tombstone flag, rendered as `"true"` / `"false"`
    #[serde(rename = "IsDelete", with = "bool_string")]
    pub is_delete: bool,
    /// Value written, structured when it parses as a record
    #[serde(rename = "Value")]
    pub value: Decoded,
}

impl HistoryRecord {
    fn from_modification(entry: KeyModification) -> Self {
        HistoryRecord {
            tx_id: entry.tx_id,
            timestamp: entry.timestamp.into(),
            is_delete: entry.is_delete,
            value: Decoded::decode(&entry.value),
        }
    }
}

mod bool_string {
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(if *value { "true" } else { "false" })
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        match String::deserialize(deserializer)?.as_str() {
            "true" => Ok(true),
            "false" => Ok(false),
            other => Err(D::Error::custom(format!("expected \"true\" or \"false\", got {:?}", other))),
        }
    }
}

/// Per-key history aggregation over the document keyspace.
#[derive(Clone)]
pub struct HistoryQueryEngine {
    ledger: Arc<dyn LedgerState>,
    keyspace: Arc<DocumentKeyspace>,
}

impl HistoryQueryEngine {
    /// Create an engine over `ledger`
    pub fn new(ledger: Arc<dyn LedgerState>, keyspace: Arc<DocumentKeyspace>) -> Self {
        Self { ledger, keyspace }
    }

    /// History of every slot key, key-ascending then in ledger order.
    ///
    /// Versions with an empty value are skipped unless they are deletion
    /// tombstones, which are kept with an empty raw value.
    pub fn history_all(&self) -> Result<Vec<HistoryRecord>> {
        let mut all = Vec::new();
        for key in self.keyspace.keys() {
            let iter = self.ledger.history_for_key(&key)?;
            all = fold_scan(iter, all, |mut acc, entry| {
                if entry.value.is_empty() && !entry.is_delete {
                    return acc;
                }
                let record = HistoryRecord::from_modification(entry);
                if record.value.is_raw() && !record.is_delete {
                    debug!(key = %key, tx_id = %record.tx_id, "history value is not a document record");
                }
                acc.push(record);
                acc
            })?;
            debug!(key = %key, "end of history data");
        }
        Ok(all)
    }
}
