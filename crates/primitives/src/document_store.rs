//! DocumentStore: point reads, seeding and field mutations
//!
//! ## Design
//!
//! DocumentStore is a stateless facade over the ledger. It holds only an
//! `Arc<dyn LedgerState>` and the keyspace; every call re-reads the ledger.
//!
//! ## Guarded mutations
//!
//! `change_owner` and `change_content` are full read-modify-write cycles on
//! the whole record. The version observed by the read is handed to
//! `compare_and_put`, so a concurrent write between the two fails the
//! mutation with `VersionMismatch` instead of being silently overwritten.

use std::sync::Arc;

use smartreview_core::{
    DocumentKeyspace, DocumentRecord, Error, LedgerState, Result, Version, Versioned,
    VersionedBytes,
};
use tracing::{debug, info};

use crate::seed::seed_documents;

/// CRUD-style access to individual review documents.
///
/// # Example
///
/// ```ignore
/// use smartreview_primitives::DocumentStore;
///
/// let store = DocumentStore::new(ledger, keyspace);
/// store.init_ledger()?;
/// store.change_owner("reviewDoc0", "Priya")?;
/// let bytes = store.query("reviewDoc0")?;
/// ```
#[derive(Clone)]
pub struct DocumentStore {
    ledger: Arc<dyn LedgerState>,
    keyspace: Arc<DocumentKeyspace>,
}

impl DocumentStore {
    /// Create a store over `ledger`
    pub fn new(ledger: Arc<dyn LedgerState>, keyspace: Arc<DocumentKeyspace>) -> Self {
        Self { ledger, keyspace }
    }

    /// Keyspace the store seeds into
    pub fn keyspace(&self) -> &DocumentKeyspace {
        &self.keyspace
    }

    /// Raw bytes stored at `key`.
    ///
    /// An empty value is treated exactly like an absent one.
    ///
    /// # Errors
    ///
    /// `KeyNotFound` if nothing (or nothing but an empty value) is stored.
    pub fn query(&self, key: &str) -> Result<Vec<u8>> {
        let stored = self.fetch(key)?;
        debug!(key, bytes = stored.value.len(), "queried document");
        Ok(stored.value)
    }

    /// Decode the record stored at `key`, with the version it was read at.
    pub fn get_record(&self, key: &str) -> Result<Versioned<DocumentRecord>> {
        let stored = self.fetch(key)?;
        let record = DocumentRecord::from_bytes(&stored.value)?;
        Ok(Versioned::with_timestamp(record, stored.version, stored.timestamp))
    }

    /// Write the seed documents to the first slots of the keyspace.
    ///
    /// Overwrites with identical bytes when run again. Returns the version
    /// of each write, in slot order.
    ///
    /// # Errors
    ///
    /// `InvalidKey` before any write if the keyspace has fewer slots than
    /// there are seed documents.
    pub fn init_ledger(&self) -> Result<Vec<Version>> {
        info!("initLedger: start");
        let seeds = seed_documents();
        self.keyspace.ensure_capacity(seeds.len())?;
        let mut versions = Vec::new();
        for (index, document) in seeds.into_iter().enumerate() {
            let key = self.keyspace.key(index);
            let version = self.ledger.put_state(&key, document.to_bytes()?)?;
            info!(
                key = %key,
                document_id = %document.document_id,
                owner = %document.owner,
                "added document"
            );
            versions.push(version);
        }
        info!("initLedger: end");
        Ok(versions)
    }

    /// Replace the owner of the record at `key`.
    pub fn change_owner(&self, key: &str, new_owner: &str) -> Result<Version> {
        info!(key, "changeDocumentOwner: start");
        let version = self.update(key, |record| record.owner = new_owner.to_string())?;
        info!(key, %version, "changeDocumentOwner: end");
        Ok(version)
    }

    /// Replace the content of the record at `key`.
    pub fn change_content(&self, key: &str, new_content: &str) -> Result<Version> {
        info!(key, "changeDocumentContent: start");
        let version = self.update(key, |record| record.doc_content = new_content.to_string())?;
        info!(key, %version, "changeDocumentContent: end");
        Ok(version)
    }

    fn fetch(&self, key: &str) -> Result<VersionedBytes> {
        match self.ledger.get_state(key)? {
            Some(stored) if !stored.value.is_empty() => Ok(stored),
            _ => Err(Error::KeyNotFound(key.to_string())),
        }
    }

    fn update<F>(&self, key: &str, mutate: F) -> Result<Version>
    where
        F: FnOnce(&mut DocumentRecord),
    {
        let Versioned {
            value: mut record,
            version: read_version,
            ..
        } = self.get_record(key)?;
        mutate(&mut record);
        self.ledger
            .compare_and_put(key, record.to_bytes()?, read_version)
    }
}
