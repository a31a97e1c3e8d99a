//! getHistoryForDocuments: per-slot history, flattened

use smartreview::{Decoded, HistoryRecord, LedgerState};

use crate::common::*;

fn history(executor: &smartreview::Executor) -> Vec<HistoryRecord> {
    serde_json::from_slice(&expect_ok(executor.invoke_raw(["getHistoryForDocuments"]))).unwrap()
}

#[test]
fn seed_then_mutation_is_chronological() {
    let (executor, _) = create_seeded_executor();
    expect_ok(executor.invoke_raw(["changeDocumentOwner", "reviewDoc1", "Priya"]));

    let entries: Vec<HistoryRecord> = history(&executor)
        .into_iter()
        .filter(|h| h.value.as_record().map(|r| r.document_id.as_str()) == Some("doc002"))
        .collect();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].value.as_record().unwrap().owner, "Tejaswini");
    assert_eq!(entries[1].value.as_record().unwrap().owner, "Priya");
    assert!(entries[0].timestamp <= entries[1].timestamp);
    assert_ne!(entries[0].tx_id, entries[1].tx_id);
}

#[test]
fn history_is_grouped_by_slot_order() {
    let (executor, _) = create_seeded_executor();
    expect_ok(executor.invoke_raw(["changeDocumentContent", "reviewDoc2", "late"]));
    expect_ok(executor.invoke_raw(["changeDocumentOwner", "reviewDoc0", "Priya"]));

    let ids: Vec<String> = history(&executor)
        .into_iter()
        .map(|h| h.value.as_record().unwrap().document_id.clone())
        .collect();
    assert_eq!(ids, vec!["doc001", "doc001", "doc002", "doc003", "doc003"]);
}

#[test]
fn tombstones_are_reported() {
    let (executor, ledger) = create_seeded_executor();
    ledger.delete_state("reviewDoc0").unwrap();

    let entries = history(&executor);
    let tombstone = &entries[1];
    assert!(tombstone.is_delete);
    assert_eq!(tombstone.value, Decoded::Raw(String::new()));
    assert!(!entries[0].is_delete);
}

#[test]
fn empty_writes_are_skipped() {
    let (executor, ledger) = create_seeded_executor();
    ledger.put_state("reviewDoc1", Vec::new()).unwrap();
    assert_eq!(history(&executor).len(), 3);
}

#[test]
fn raw_versions_keep_their_text() {
    let (executor, ledger) = create_executor();
    ledger.put_state("reviewDoc7", b"draft".to_vec()).unwrap();
    ledger.put_state("reviewDoc7", b"{\"documentID\":1}".to_vec()).unwrap();

    let entries = history(&executor);
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].value, Decoded::Raw("draft".into()));
    assert_eq!(entries[1].value, Decoded::Raw("{\"documentID\":1}".into()));
}

#[test]
fn keys_beyond_the_slots_have_no_history() {
    let (executor, ledger) = create_executor();
    ledger.put_state("reviewDoc10", b"hidden".to_vec()).unwrap();
    assert_eq!(
        String::from_utf8(expect_ok(executor.invoke_raw(["getHistoryForDocuments"]))).unwrap(),
        "[]"
    );
}

#[test]
fn wire_format_of_history_entries() {
    let (executor, _) = create_seeded_executor();
    let listing = json(&expect_ok(executor.invoke_raw(["getHistoryForDocuments"])));
    let first = listing[0].as_object().unwrap();
    let fields: Vec<&str> = first.keys().map(String::as_str).collect();
    for field in ["TxId", "Timestamp", "IsDelete", "Value"] {
        assert!(fields.contains(&field), "missing {}", field);
    }
    assert_eq!(first["IsDelete"], "false");
}

#[test]
fn failure_mid_history_releases_iterators() {
    let (executor, ledger) = create_faulty_executor();
    expect_ok(executor.invoke_raw(["initLedger"]));

    ledger.fail_advance_after(2);
    let message = expect_err(executor.invoke_raw(["getHistoryForDocuments"]));
    assert!(message.starts_with("Store error"));
    assert_eq!(ledger.inner().open_iterators(), 0);
}
