//! Snapshot iterators handed out by the reference ledger
//!
//! Entries are materialised when the iterator is opened (cloned snapshot),
//! so later writes never show up in an open scan. Every iterator registers
//! with an [`IteratorTracker`] and deregisters on `close`, which lets tests
//! assert that nothing was left open.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use smartreview_core::{Error, Result, StateIterator};

/// Counts iterators that were opened but not yet closed.
#[derive(Debug, Clone, Default)]
pub struct IteratorTracker {
    open: Arc<AtomicUsize>,
    opened_total: Arc<AtomicUsize>,
}

impl IteratorTracker {
    /// Create a tracker with no open iterators
    pub fn new() -> Self {
        Self::default()
    }

    /// Iterators currently open
    pub fn open_count(&self) -> usize {
        self.open.load(Ordering::SeqCst)
    }

    /// Iterators opened since creation
    pub fn opened_total(&self) -> usize {
        self.opened_total.load(Ordering::SeqCst)
    }

    fn register(&self) {
        self.open.fetch_add(1, Ordering::SeqCst);
        self.opened_total.fetch_add(1, Ordering::SeqCst);
    }

    fn release(&self) {
        self.open.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Iterator over a materialised list of entries.
#[derive(Debug)]
pub struct SnapshotIter<T> {
    entries: VecDeque<T>,
    closed: bool,
    tracker: IteratorTracker,
}

impl<T> SnapshotIter<T> {
    /// Open an iterator over `entries`, registering it with `tracker`.
    pub fn open(entries: Vec<T>, tracker: &IteratorTracker) -> Self {
        tracker.register();
        SnapshotIter {
            entries: entries.into(),
            closed: false,
            tracker: tracker.clone(),
        }
    }

    /// Whether `close` has been called
    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

impl<T: Send> StateIterator for SnapshotIter<T> {
    type Item = T;

    fn advance(&mut self) -> Result<Option<T>> {
        if self.closed {
            return Err(Error::IteratorClosed);
        }
        Ok(self.entries.pop_front())
    }

    fn close(&mut self) -> Result<()> {
        if self.closed {
            return Err(Error::IteratorClosed);
        }
        self.closed = true;
        self.entries.clear();
        self.tracker.release();
        Ok(())
    }
}
