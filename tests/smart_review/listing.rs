//! queryAllDocuments: range scan over the document keyspace

use smartreview::{Decoded, KeyScheme, LedgerState, MemoryLedger, RangeRecord};
use smartreview::{ContractConfig, SmartReview};
use std::sync::Arc;

use crate::common::*;

#[test]
fn seeded_listing_in_key_order() {
    let review = create_review();
    review.init_ledger().unwrap();

    let listing = review.query_all_documents().unwrap();
    let keys: Vec<&str> = listing.iter().map(|e| e.key.as_str()).collect();
    assert_eq!(keys, vec!["reviewDoc0", "reviewDoc1", "reviewDoc2"]);

    let ids: Vec<&str> = listing
        .iter()
        .map(|e| e.record.as_record().unwrap().document_id.as_str())
        .collect();
    assert_eq!(ids, vec!["doc001", "doc002", "doc003"]);
}

#[test]
fn listing_matches_point_reads() {
    let (executor, _) = create_seeded_executor();
    let listing: Vec<RangeRecord> =
        serde_json::from_slice(&expect_ok(executor.invoke_raw(["queryAllDocuments"]))).unwrap();

    for entry in listing {
        let bytes = expect_ok(executor.invoke_raw(["queryDocument", entry.key.as_str()]));
        assert_eq!(entry.record, Decoded::decode(&bytes));
    }
}

#[test]
fn every_slot_is_visible_including_higher_digits() {
    let (executor, ledger) = create_executor();
    for i in 0..10 {
        ledger
            .put_state(&format!("reviewDoc{}", i), format!("v{}", i).into_bytes())
            .unwrap();
    }
    let listing = json(&expect_ok(executor.invoke_raw(["queryAllDocuments"])));
    let entries = listing.as_array().unwrap();
    assert_eq!(entries.len(), 10);
    assert_eq!(entries[9]["Key"], "reviewDoc9");
    assert_eq!(entries[9]["Record"], "v9");
}

#[test]
fn keys_beyond_the_slots_are_excluded() {
    let (executor, ledger) = create_seeded_executor();
    ledger.put_state("reviewDoc10", b"eleventh".to_vec()).unwrap();
    ledger.put_state("reviewDoc01", b"non canonical".to_vec()).unwrap();
    ledger.put_state("reviewDocX", b"foreign".to_vec()).unwrap();
    ledger.put_state("otherDoc0", b"foreign".to_vec()).unwrap();

    let listing = json(&expect_ok(executor.invoke_raw(["queryAllDocuments"])));
    assert_eq!(listing.as_array().unwrap().len(), 3);
}

#[test]
fn bad_record_does_not_abort_the_scan() {
    let (executor, ledger) = create_seeded_executor();
    ledger.put_state("reviewDoc1", b"\xff\xfe not utf8".to_vec()).unwrap();

    let listing = json(&expect_ok(executor.invoke_raw(["queryAllDocuments"])));
    let entries = listing.as_array().unwrap();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0]["Record"]["owner"], "Gopalji");
    assert!(entries[1]["Record"].as_str().unwrap().ends_with("not utf8"));
    assert_eq!(entries[2]["Record"]["owner"], "Alok");
}

#[test]
fn empty_values_and_deletions_are_skipped() {
    let (executor, ledger) = create_seeded_executor();
    ledger.put_state("reviewDoc1", Vec::new()).unwrap();
    ledger.delete_state("reviewDoc2").unwrap();

    let listing = json(&expect_ok(executor.invoke_raw(["queryAllDocuments"])));
    let entries = listing.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["Key"], "reviewDoc0");
}

#[test]
fn zero_padded_keyspace_orders_numerically() {
    let ledger = MemoryLedger::new();
    let config = ContractConfig {
        document_slots: 20,
        key_scheme: KeyScheme::ZeroPadded { width: 2 },
        ..ContractConfig::default()
    };
    let review = SmartReview::with_config(Arc::new(ledger.clone()), &config).unwrap();
    for i in [15, 2, 9, 10] {
        ledger
            .put_state(&format!("reviewDoc{:02}", i), b"x".to_vec())
            .unwrap();
    }
    let keys: Vec<String> = review
        .query_all_documents()
        .unwrap()
        .into_iter()
        .map(|e| e.key)
        .collect();
    assert_eq!(keys, vec!["reviewDoc02", "reviewDoc09", "reviewDoc10", "reviewDoc15"]);
}

#[test]
fn scans_release_their_iterators() {
    let (executor, ledger) = create_seeded_executor();
    expect_ok(executor.invoke_raw(["queryAllDocuments"]));
    expect_ok(executor.invoke_raw(["getHistoryForDocuments"]));
    assert_eq!(ledger.open_iterators(), 0);
    // one range scan plus one history iterator per slot
    assert_eq!(ledger.iterators_opened(), 11);
}
