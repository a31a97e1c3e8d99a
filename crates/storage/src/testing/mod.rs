//! Testing utilities for the ledger boundary
//!
//! - **FaultyLedger**: wraps a ledger and fails reads, writes, iterator opens
//!   or iterator advances on demand

mod faulty;

pub use faulty::FaultyLedger;
