//! Ledger version identifier
//!
//! Every write to the world state produces a version. Reads return the
//! version of the value they observed, which is what makes a guarded
//! read-modify-write possible: the version read is handed back to
//! [`LedgerState::compare_and_put`](crate::traits::LedgerState::compare_and_put).
//!
//! ## Invariants
//!
//! - Versions are monotonically increasing across the whole ledger
//! - Version 0 is never assigned to a committed write

use serde::{Deserialize, Serialize};

/// Commit version of a world-state value.
///
/// Versions are totally ordered; a larger version was committed later.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Version(u64);

impl Version {
    /// The version before any write (never assigned to a committed value)
    pub const ZERO: Version = Version(0);

    /// Create a version from its numeric value
    #[inline]
    pub const fn new(v: u64) -> Self {
        Version(v)
    }

    /// Get the numeric value
    #[inline]
    pub const fn as_u64(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "v{}", self.0)
    }
}

impl From<u64> for Version {
    fn from(v: u64) -> Self {
        Version(v)
    }
}

impl From<Version> for u64 {
    fn from(v: Version) -> Self {
        v.0
    }
}
