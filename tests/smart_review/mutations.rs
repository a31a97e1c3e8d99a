//! changeDocumentOwner / changeDocumentContent

use proptest::prelude::*;
use smartreview::{Error, LedgerState, Operation};

use crate::common::*;

#[test]
fn owner_change_leaves_other_fields_alone() {
    let (executor, _) = create_seeded_executor();
    let before = record(&expect_ok(executor.invoke_raw(["queryDocument", "reviewDoc0"])));

    expect_ok(executor.invoke_raw(["changeDocumentOwner", "reviewDoc0", "X"]));

    let after = record(&expect_ok(executor.invoke_raw(["queryDocument", "reviewDoc0"])));
    assert_eq!(after.owner, "X");
    assert_eq!(after.document_id, before.document_id);
    assert_eq!(after.doc_content, before.doc_content);
    assert_eq!(after.doc_type, before.doc_type);
}

#[test]
fn content_change_leaves_other_fields_alone() {
    let (executor, _) = create_seeded_executor();
    let before = record(&expect_ok(executor.invoke_raw(["queryDocument", "reviewDoc1"])));

    expect_ok(executor.invoke_raw(["changeDocumentContent", "reviewDoc1", ""]));

    let after = record(&expect_ok(executor.invoke_raw(["queryDocument", "reviewDoc1"])));
    assert_eq!(after.doc_content, "");
    assert_eq!(after.owner, before.owner);
    assert_eq!(after.document_id, before.document_id);
}

#[test]
fn unknown_fields_are_carried_through() {
    let (executor, ledger) = create_executor();
    ledger
        .put_state(
            "reviewDoc4",
            br#"{"documentID":"doc009","docContent":"c","owner":"o","docType":"documents","reviewers":["Ana","Raj"]}"#.to_vec(),
        )
        .unwrap();

    expect_ok(executor.invoke_raw(["changeDocumentOwner", "reviewDoc4", "Ana"]));

    let doc = record(&expect_ok(executor.invoke_raw(["queryDocument", "reviewDoc4"])));
    assert_eq!(doc.owner, "Ana");
    assert_eq!(doc.extra["reviewers"], serde_json::json!(["Ana", "Raj"]));
}

#[test]
fn foreign_doc_type_is_preserved() {
    let (executor, ledger) = create_executor();
    ledger
        .put_state(
            "reviewDoc5",
            br#"{"documentID":"d","docContent":"c","owner":"o","docType":"minutes"}"#.to_vec(),
        )
        .unwrap();

    expect_ok(executor.invoke_raw(["changeDocumentContent", "reviewDoc5", "new"]));
    let doc = record(&expect_ok(executor.invoke_raw(["queryDocument", "reviewDoc5"])));
    assert_eq!(doc.doc_type, "minutes");
    assert!(!doc.is_review_document());
}

#[test]
fn record_without_doc_type_can_be_mutated() {
    let (executor, ledger) = create_executor();
    ledger
        .put_state(
            "reviewDoc6",
            br#"{"documentID":"doc006","docContent":"c","owner":"o"}"#.to_vec(),
        )
        .unwrap();

    expect_ok(executor.invoke_raw(["changeDocumentOwner", "reviewDoc6", "Priya"]));
    let doc = record(&expect_ok(executor.invoke_raw(["queryDocument", "reviewDoc6"])));
    assert_eq!(doc.owner, "Priya");
    assert_eq!(doc.document_id, "doc006");
    assert_eq!(doc.doc_type, "");
}

#[test]
fn mutating_absent_document_is_not_found() {
    let (executor, ledger) = create_executor();
    let message = expect_err(executor.invoke_raw(["changeDocumentContent", "reviewDoc8", "x"]));
    assert_eq!(message, "No Document exists with ID reviewDoc8");
    assert!(ledger.is_empty());
}

#[test]
fn mutating_non_record_fails_without_writing() {
    let (executor, ledger) = create_executor();
    ledger.put_state("reviewDoc1", b"[1,2,3]".to_vec()).unwrap();

    let err = executor
        .execute(
            Operation::ChangeDocumentOwner,
            &["reviewDoc1".to_string(), "X".to_string()],
        )
        .unwrap_err();
    assert!(matches!(err, Error::Serialization { .. }));
    assert_eq!(ledger.versions_of("reviewDoc1").len(), 1);
}

#[test]
fn wrong_argument_counts() {
    let (executor, ledger) = create_seeded_executor();
    let before = ledger.current_version();

    let message = expect_err(executor.invoke_raw(["changeDocumentOwner", "reviewDoc0"]));
    assert_eq!(
        message,
        "Incorrect number of arguments for changeDocumentOwner. Expecting 2, got 1"
    );
    expect_err(executor.invoke_raw(["changeDocumentContent", "reviewDoc0", "a", "b"]));

    assert_eq!(ledger.current_version(), before);
}

#[test]
fn failed_write_leaves_value_unchanged() {
    let (executor, ledger) = create_faulty_executor();
    expect_ok(executor.invoke_raw(["initLedger"]));
    let before = expect_ok(executor.invoke_raw(["queryDocument", "reviewDoc2"]));

    ledger.fail_writes(true);
    let message = expect_err(executor.invoke_raw(["changeDocumentOwner", "reviewDoc2", "X"]));
    assert!(message.starts_with("Store error"));

    ledger.heal();
    assert_eq!(
        expect_ok(executor.invoke_raw(["queryDocument", "reviewDoc2"])),
        before
    );
}

proptest! {
    #[test]
    fn last_owner_wins(owners in prop::collection::vec("[A-Za-z ]{0,12}", 1..8)) {
        let (executor, _) = create_seeded_executor();
        for owner in &owners {
            let response = executor.invoke_raw(["changeDocumentOwner", "reviewDoc2", owner.as_str()]);
            prop_assert!(response.is_ok());
        }
        let doc = record(&expect_ok(executor.invoke_raw(["queryDocument", "reviewDoc2"])));
        prop_assert_eq!(&doc.owner, owners.last().unwrap());
        prop_assert_eq!(doc.document_id.as_str(), "doc003");
    }
}
