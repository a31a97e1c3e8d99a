//! Initial document set written by `initLedger`

use smartreview_core::DocumentRecord;

/// The three review documents every fresh ledger is seeded with, in slot order.
pub fn seed_documents() -> Vec<DocumentRecord> {
    vec![
        DocumentRecord::new(
            "doc001",
            "This is document summarizes what needs to be implemented in Sprint 1 for product XYZ",
            "Gopalji",
        ),
        DocumentRecord::new(
            "doc002",
            "This is document summarizes what needs to be implemented in Sprint 2 for product XYZ",
            "Tejaswini",
        ),
        DocumentRecord::new(
            "doc003",
            "This is document summarizes what needs to be implemented in Sprint 4 for product ABC",
            "Alok",
        ),
    ]
}
