//! Fault injection around a ledger
//!
//! Wraps any [`LedgerState`] and fails selected calls with
//! [`Error::StoreUnavailable`], to exercise error propagation and the
//! close-on-every-path discipline of the scan engines.
//!
//! # Example
//!
//! ```ignore
//! use smartreview_storage::{MemoryLedger, testing::FaultyLedger};
//!
//! let ledger = FaultyLedger::new(MemoryLedger::new());
//! ledger.fail_advance_after(2);   // third advance() on any iterator fails
//! ```

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use smartreview_core::{
    Error, HistoryIterator, LedgerState, RangeIterator, Result, StateIterator, Version,
    VersionedBytes,
};

const NO_LIMIT: usize = usize::MAX;

#[derive(Debug)]
struct Faults {
    reads: AtomicBool,
    writes: AtomicBool,
    open: AtomicBool,
    advance_after: AtomicUsize,
    advances: AtomicUsize,
    calls: AtomicUsize,
}

impl Default for Faults {
    fn default() -> Self {
        Faults {
            reads: AtomicBool::new(false),
            writes: AtomicBool::new(false),
            open: AtomicBool::new(false),
            advance_after: AtomicUsize::new(NO_LIMIT),
            advances: AtomicUsize::new(0),
            calls: AtomicUsize::new(0),
        }
    }
}

impl Faults {
    fn check(flag: &AtomicBool, what: &str) -> Result<()> {
        if flag.load(Ordering::SeqCst) {
            return Err(Error::StoreUnavailable(format!("injected {} failure", what)));
        }
        Ok(())
    }
}

/// A ledger wrapper that fails on demand.
#[derive(Debug, Clone)]
pub struct FaultyLedger<L> {
    inner: L,
    faults: Arc<Faults>,
}

impl<L: LedgerState> FaultyLedger<L> {
    /// Wrap `inner` with every fault disabled
    pub fn new(inner: L) -> Self {
        FaultyLedger {
            inner,
            faults: Arc::new(Faults::default()),
        }
    }

    /// The wrapped ledger
    pub fn inner(&self) -> &L {
        &self.inner
    }

    /// Fail every `get_state`
    pub fn fail_reads(&self, on: bool) {
        self.faults.reads.store(on, Ordering::SeqCst);
    }

    /// Fail every `put_state` and `compare_and_put`
    pub fn fail_writes(&self, on: bool) {
        self.faults.writes.store(on, Ordering::SeqCst);
    }

    /// Fail opening range and history iterators
    pub fn fail_open(&self, on: bool) {
        self.faults.open.store(on, Ordering::SeqCst);
    }

    /// Let `n` iterator advances succeed (counted across all iterators),
    /// then fail every further advance.
    pub fn fail_advance_after(&self, n: usize) {
        self.faults.advances.store(0, Ordering::SeqCst);
        self.faults.advance_after.store(n, Ordering::SeqCst);
    }

    /// Disable every fault
    pub fn heal(&self) {
        self.fail_reads(false);
        self.fail_writes(false);
        self.fail_open(false);
        self.faults.advance_after.store(NO_LIMIT, Ordering::SeqCst);
    }

    /// Number of ledger calls observed, iterator advances included
    pub fn calls(&self) -> usize {
        self.faults.calls.load(Ordering::SeqCst)
    }

    fn count(&self) {
        self.faults.calls.fetch_add(1, Ordering::SeqCst);
    }
}

struct FaultyIter<T> {
    inner: Box<dyn StateIterator<Item = T>>,
    faults: Arc<Faults>,
}

impl<T> StateIterator for FaultyIter<T> {
    type Item = T;

    fn advance(&mut self) -> Result<Option<T>> {
        self.faults.calls.fetch_add(1, Ordering::SeqCst);
        let seen = self.faults.advances.fetch_add(1, Ordering::SeqCst);
        if seen >= self.faults.advance_after.load(Ordering::SeqCst) {
            return Err(Error::StoreUnavailable("injected advance failure".into()));
        }
        self.inner.advance()
    }

    fn close(&mut self) -> Result<()> {
        self.inner.close()
    }
}

impl<L: LedgerState> LedgerState for FaultyLedger<L> {
    fn get_state(&self, key: &str) -> Result<Option<VersionedBytes>> {
        self.count();
        Faults::check(&self.faults.reads, "read")?;
        self.inner.get_state(key)
    }

    fn put_state(&self, key: &str, value: Vec<u8>) -> Result<Version> {
        self.count();
        Faults::check(&self.faults.writes, "write")?;
        self.inner.put_state(key, value)
    }

    fn compare_and_put(&self, key: &str, value: Vec<u8>, expected: Version) -> Result<Version> {
        self.count();
        Faults::check(&self.faults.writes, "write")?;
        self.inner.compare_and_put(key, value, expected)
    }

    fn state_by_range(&self, start: &str, end: &str) -> Result<RangeIterator> {
        self.count();
        Faults::check(&self.faults.open, "range open")?;
        let inner = self.inner.state_by_range(start, end)?;
        Ok(Box::new(FaultyIter {
            inner,
            faults: Arc::clone(&self.faults),
        }))
    }

    fn history_for_key(&self, key: &str) -> Result<HistoryIterator> {
        self.count();
        Faults::check(&self.faults.open, "history open")?;
        let inner = self.inner.history_for_key(key)?;
        Ok(Box::new(FaultyIter {
            inner,
            faults: Arc::clone(&self.faults),
        }))
    }
}
