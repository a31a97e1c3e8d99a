//! Generic versioned wrapper type
//!
//! Point reads return `Versioned<T>` (value + version + timestamp); writes
//! return the [`Version`] they created.

use super::{Timestamp, Version};
use serde::{Deserialize, Serialize};

/// A value with its version information
///
/// ## Invariants
///
/// - `version` always matches the write that created this data
/// - `timestamp` is always the commit time of this version
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Versioned<T> {
    /// The actual value
    pub value: T,

    /// Version identifier
    pub version: Version,

    /// Commit timestamp
    pub timestamp: Timestamp,
}

impl<T> Versioned<T> {
    /// Create a versioned value with explicit timestamp
    pub fn with_timestamp(value: T, version: Version, timestamp: Timestamp) -> Self {
        Versioned {
            value,
            version,
            timestamp,
        }
    }

    /// Get a reference to the inner value
    #[inline]
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Get the version
    #[inline]
    pub fn version(&self) -> Version {
        self.version
    }
}

/// Raw world-state bytes with their version
pub type VersionedBytes = Versioned<Vec<u8>>;
