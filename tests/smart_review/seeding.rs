//! initLedger: seed content, slot placement and idempotence

use smartreview::{Operation, DOC_TYPE};

use crate::common::*;

const SEED: [(&str, &str, &str, &str); 3] = [
    (
        "reviewDoc0",
        "doc001",
        "Gopalji",
        "This is document summarizes what needs to be implemented in Sprint 1 for product XYZ",
    ),
    (
        "reviewDoc1",
        "doc002",
        "Tejaswini",
        "This is document summarizes what needs to be implemented in Sprint 2 for product XYZ",
    ),
    (
        "reviewDoc2",
        "doc003",
        "Alok",
        "This is document summarizes what needs to be implemented in Sprint 4 for product ABC",
    ),
];

#[test]
fn seed_writes_three_literal_documents() {
    let (executor, ledger) = create_seeded_executor();
    assert_eq!(ledger.len(), 3);

    for (key, id, owner, content) in SEED {
        let doc = record(&expect_ok(executor.invoke_raw(["queryDocument", key])));
        assert_eq!(doc.document_id, id);
        assert_eq!(doc.owner, owner);
        assert_eq!(doc.doc_content, content);
        assert_eq!(doc.doc_type, DOC_TYPE);
        assert!(doc.extra.is_empty());
    }
}

#[test]
fn seed_bytes_use_contract_field_order() {
    let (executor, _) = create_seeded_executor();
    let payload = expect_ok(executor.invoke_raw(["queryDocument", "reviewDoc2"]));
    let text = String::from_utf8(payload).unwrap();
    assert!(text.starts_with(r#"{"documentID":"doc003","docContent":"#));
    assert!(text.ends_with(r#""owner":"Alok","docType":"documents"}"#));
}

#[test]
fn reseeding_is_byte_identical() {
    let (executor, ledger) = create_seeded_executor();
    let read_all = || -> Vec<Vec<u8>> {
        SEED.iter()
            .map(|(key, ..)| expect_ok(executor.invoke_raw(["queryDocument", *key])))
            .collect()
    };

    let first = read_all();
    for _ in 0..3 {
        expect_ok(executor.invoke_raw(["initLedger"]));
        assert_eq!(read_all(), first);
    }
    assert_eq!(ledger.len(), 3);
    assert_eq!(ledger.versions_of("reviewDoc0").len(), 4);
}

#[test]
fn reseeding_restores_mutated_documents() {
    let (executor, _) = create_seeded_executor();
    let original = expect_ok(executor.invoke_raw(["queryDocument", "reviewDoc1"]));
    expect_ok(executor.invoke_raw(["changeDocumentOwner", "reviewDoc1", "Priya"]));

    expect_ok(executor.invoke_raw(["initLedger"]));
    assert_eq!(
        expect_ok(executor.invoke_raw(["queryDocument", "reviewDoc1"])),
        original
    );
}

#[test]
fn seeding_ignores_arguments() {
    let (executor, ledger) = create_executor();
    let payload = executor
        .execute(Operation::InitLedger, &["unused".to_string()])
        .unwrap();
    assert!(payload.is_empty());
    assert_eq!(ledger.len(), 3);
}
