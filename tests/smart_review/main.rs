//! SmartReview Integration Tests
//!
//! Drives the public surface of the `smartreview` crate:
//! - Executor - name-based dispatch and response envelopes
//! - SmartReview - typed wrapper
//! - ContractConfig - keyspace configuration files
//! - MemoryLedger - reference ledger behind every test


mod concurrency;
mod dispatch;
mod history;
mod listing;
mod mutations;
mod seeding;
