//! Scoped consumption of ledger iterators
//!
//! [`Scan`] turns a [`StateIterator`] into a finite, non-restartable Rust
//! iterator of `Result<T>`. The underlying ledger iterator is closed:
//! - as soon as it reports exhaustion (a close failure surfaces as the last item)
//! - when the `Scan` is dropped early, e.g. because a fold bailed out on an error
//!
//! [`fold_scan`] is the one place the query engines consume iterators.

use smartreview_core::{Result, StateIterator};
use tracing::warn;

/// Lazy sequence over a ledger iterator with guaranteed release.
pub struct Scan<T> {
    iter: Option<Box<dyn StateIterator<Item = T>>>,
}

impl<T> Scan<T> {
    /// Take ownership of an opened iterator
    pub fn new(iter: Box<dyn StateIterator<Item = T>>) -> Self {
        Scan { iter: Some(iter) }
    }

    /// Whether the underlying iterator has been released
    pub fn is_closed(&self) -> bool {
        self.iter.is_none()
    }

    fn release(&mut self) -> Result<()> {
        match self.iter.take() {
            Some(mut iter) => iter.close(),
            None => Ok(()),
        }
    }
}

impl<T> Iterator for Scan<T> {
    type Item = Result<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let iter = self.iter.as_mut()?;
        match iter.advance() {
            Ok(Some(entry)) => Some(Ok(entry)),
            Ok(None) => self.release().err().map(Err),
            Err(e) => Some(Err(e)),
        }
    }
}

impl<T> Drop for Scan<T> {
    fn drop(&mut self) {
        if let Err(e) = self.release() {
            warn!(error = %e, "failed to close ledger iterator");
        }
    }
}

/// Fold every entry of `iter` into an accumulator.
///
/// The iterator is closed before this returns, on success and on error.
pub fn fold_scan<T, A, F>(iter: Box<dyn StateIterator<Item = T>>, init: A, mut f: F) -> Result<A>
where
    F: FnMut(A, T) -> A,
{
    let mut acc = init;
    for entry in Scan::new(iter) {
        acc = f(acc, entry?);
    }
    Ok(acc)
}
