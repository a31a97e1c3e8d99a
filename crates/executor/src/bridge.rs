//! Bridge module: direct access to the document primitives.
//!
//! - [`Primitives`]: the three primitive facades sharing one ledger and keyspace
//! - [`expect_args`]: arity check turning a slice into a fixed-size array

use std::sync::Arc;

use smartreview_core::{DocumentKeyspace, LedgerState};
use smartreview_primitives::{DocumentStore, HistoryQueryEngine, RangeQueryEngine};

use crate::{Error, Operation, Result};

// =============================================================================
// Primitives
// =============================================================================

/// Direct access to all document primitives.
///
/// Every facade holds the same `Arc<dyn LedgerState>`; none of them cache
/// anything, so cloning `Primitives` is cheap and safe.
#[derive(Clone)]
pub struct Primitives {
    /// Key layout shared by all primitives
    pub keyspace: Arc<DocumentKeyspace>,
    /// Point reads, seeding, field mutations
    pub documents: DocumentStore,
    /// Range listing
    pub range: RangeQueryEngine,
    /// History aggregation
    pub history: HistoryQueryEngine,
}

impl Primitives {
    /// Create primitives over a ledger and keyspace.
    pub fn new(ledger: Arc<dyn LedgerState>, keyspace: Arc<DocumentKeyspace>) -> Self {
        Self {
            documents: DocumentStore::new(ledger.clone(), keyspace.clone()),
            range: RangeQueryEngine::new(ledger.clone(), keyspace.clone()),
            history: HistoryQueryEngine::new(ledger, keyspace.clone()),
            keyspace,
        }
    }
}

// =============================================================================
// Argument validation
// =============================================================================

/// Require exactly `N` arguments for `op`.
///
/// Checked before any ledger access.
pub fn expect_args<'a, const N: usize>(
    op: Operation,
    args: &'a [String],
) -> Result<&'a [String; N]> {
    debug_assert_eq!(op.arity(), Some(N));
    <&[String; N]>::try_from(args).map_err(|_| Error::ArgumentCount {
        operation: op.name().to_string(),
        expected: N,
        actual: args.len(),
    })
}
