//! Contract types shared by the ledger boundary and the query engines
//!
//! - [`Version`]: commit version of a world-state value
//! - [`Timestamp`]: commit time, microsecond precision
//! - [`Versioned<T>`]: a value tagged with both

pub mod timestamp;
pub mod version;
pub mod versioned;

pub use timestamp::{LedgerTime, Timestamp};
pub use version::Version;
pub use versioned::{Versioned, VersionedBytes};
