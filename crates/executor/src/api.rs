//! High-level typed wrapper for the Executor.
//!
//! [`SmartReview`] calls the executor exactly as the host would and parses
//! each payload back into typed records, so it exercises the same wire
//! format callers see.
//!
//! # Example
//!
//! ```text
//! use smartreview_executor::SmartReview;
//!
//! let review = SmartReview::in_memory();
//! review.init_ledger()?;
//! review.change_document_owner("reviewDoc1", "Priya")?;
//! for entry in review.query_all_documents()? {
//!     println!("{} {:?}", entry.key, entry.record);
//! }
//! ```

use std::sync::Arc;

use serde::de::DeserializeOwned;
use smartreview_core::LedgerState;
use smartreview_primitives::{HistoryRecord, RangeRecord};
use smartreview_storage::MemoryLedger;

use crate::config::ContractConfig;
use crate::{Error, Executor, Operation, Result};

/// Typed access to the review contract.
#[derive(Clone)]
pub struct SmartReview {
    executor: Executor,
}

impl SmartReview {
    /// Wrap an existing executor
    pub fn new(executor: Executor) -> Self {
        Self { executor }
    }

    /// A contract over a fresh in-memory ledger with the default keyspace.
    pub fn in_memory() -> Self {
        Self::new(Executor::new(Arc::new(MemoryLedger::new())))
    }

    /// A contract over `ledger`, keyed by `config`.
    pub fn with_config(ledger: Arc<dyn LedgerState>, config: &ContractConfig) -> Result<Self> {
        Ok(Self::new(Executor::with_config(ledger, config)?))
    }

    /// The underlying executor
    pub fn executor(&self) -> &Executor {
        &self.executor
    }

    /// Raw bytes stored under `key`.
    pub fn query_document(&self, key: &str) -> Result<Vec<u8>> {
        self.executor
            .execute(Operation::QueryDocument, &[key.to_string()])
    }

    /// Write the seed documents.
    pub fn init_ledger(&self) -> Result<()> {
        self.executor.execute(Operation::InitLedger, &[])?;
        Ok(())
    }

    /// Every document slot that holds a value, in ledger order.
    pub fn query_all_documents(&self) -> Result<Vec<RangeRecord>> {
        let payload = self.executor.execute(Operation::QueryAllDocuments, &[])?;
        parse_payload(Operation::QueryAllDocuments, &payload)
    }

    /// Replace the owner of the document at `key`.
    pub fn change_document_owner(&self, key: &str, owner: &str) -> Result<()> {
        self.executor.execute(
            Operation::ChangeDocumentOwner,
            &[key.to_string(), owner.to_string()],
        )?;
        Ok(())
    }

    /// Replace the content of the document at `key`.
    pub fn change_document_content(&self, key: &str, content: &str) -> Result<()> {
        self.executor.execute(
            Operation::ChangeDocumentContent,
            &[key.to_string(), content.to_string()],
        )?;
        Ok(())
    }

    /// Every historical version of every document slot.
    pub fn history_for_documents(&self) -> Result<Vec<HistoryRecord>> {
        let payload = self
            .executor
            .execute(Operation::GetHistoryForDocuments, &[])?;
        parse_payload(Operation::GetHistoryForDocuments, &payload)
    }
}

fn parse_payload<T: DeserializeOwned>(op: Operation, payload: &[u8]) -> Result<T> {
    serde_json::from_slice(payload).map_err(|e| Error::Internal {
        reason: format!("Unexpected output for {}: {}", op, e),
    })
}
