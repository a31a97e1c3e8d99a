//! RangeQueryEngine: every document in the keyspace, in ledger order

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use smartreview_core::{Decoded, DocumentKeyspace, LedgerState, Result};
use tracing::debug;

use crate::scan::fold_scan;

/// One entry of the range listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeRecord {
    /// Storage key
    #[serde(rename = "Key")]
    pub key: String,
    /// Stored value, structured when it parses as a record
    #[serde(rename = "Record")]
    pub record: Decoded,
}

/// Bounded range scan over the document keyspace.
#[derive(Clone)]
pub struct RangeQueryEngine {
    ledger: Arc<dyn LedgerState>,
    keyspace: Arc<DocumentKeyspace>,
}

impl RangeQueryEngine {
    /// Create an engine over `ledger`
    pub fn new(ledger: Arc<dyn LedgerState>, keyspace: Arc<DocumentKeyspace>) -> Self {
        Self { ledger, keyspace }
    }

    /// Scan every slot key and decode each non-empty value.
    ///
    /// Values that do not parse as a record are kept as raw text. Keys in the
    /// scanned range that are not slot keys (wrong rendering, index beyond
    /// the slot count) are skipped.
    pub fn query_all(&self) -> Result<Vec<RangeRecord>> {
        let (start, end) = self.keyspace.scan_range();
        let iter = self.ledger.state_by_range(&start, &end)?;
        let keyspace = &self.keyspace;

        let records = fold_scan(iter, Vec::new(), |mut acc, entry| {
            if entry.value.is_empty() || !keyspace.contains(&entry.key) {
                return acc;
            }
            let record = Decoded::decode(&entry.value);
            if record.is_raw() {
                debug!(key = %entry.key, "value is not a document record, keeping raw text");
            }
            acc.push(RangeRecord {
                key: entry.key,
                record,
            });
            acc
        })?;
        debug!(count = records.len(), "end of range data");
        Ok(records)
    }
}
