//! Microsecond-precision commit timestamp
//!
//! Timestamps are stored as microseconds since Unix epoch. History payloads
//! present them in the ledger's `{seconds, nanos}` shape, see
//! [`LedgerTime`].
//!
//! ```
//! use smartreview_core::Timestamp;
//!
//! let ts = Timestamp::from_secs(1000);
//! assert_eq!(ts.seconds(), 1000);
//! assert_eq!(ts.subsec_nanos(), 0);
//! ```

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Microsecond-precision timestamp
///
/// ## Invariants
///
/// - Timestamps are always non-negative (u64)
/// - Timestamps are always in microseconds
/// - The zero timestamp represents Unix epoch
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(u64);

impl Timestamp {
    /// Unix epoch (1970-01-01 00:00:00 UTC)
    pub const EPOCH: Timestamp = Timestamp(0);

    /// Create a timestamp for the current moment
    ///
    /// Returns epoch if the system clock is before Unix epoch.
    pub fn now() -> Self {
        let duration = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        Timestamp(duration.as_micros() as u64)
    }

    /// Create a timestamp from microseconds since epoch
    #[inline]
    pub const fn from_micros(micros: u64) -> Self {
        Timestamp(micros)
    }

    /// Create a timestamp from seconds since epoch
    #[inline]
    pub const fn from_secs(secs: u64) -> Self {
        Timestamp(secs.saturating_mul(1_000_000))
    }

    /// Get microseconds since Unix epoch
    #[inline]
    pub const fn as_micros(&self) -> u64 {
        self.0
    }

    /// Whole seconds since Unix epoch
    #[inline]
    pub const fn seconds(&self) -> u64 {
        self.0 / 1_000_000
    }

    /// Fractional part of the second, in nanoseconds
    #[inline]
    pub const fn subsec_nanos(&self) -> u32 {
        ((self.0 % 1_000_000) * 1_000) as u32
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Timestamp::EPOCH
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{:06}", self.seconds(), self.0 % 1_000_000)
    }
}

/// Wire form of a commit timestamp in history payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LedgerTime {
    /// Whole seconds since epoch
    pub seconds: u64,
    /// Nanoseconds within the second
    pub nanos: u32,
}

impl From<Timestamp> for LedgerTime {
    fn from(ts: Timestamp) -> Self {
        LedgerTime {
            seconds: ts.seconds(),
            nanos: ts.subsec_nanos(),
        }
    }
}
