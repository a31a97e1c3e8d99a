//! Name resolution and the response envelope

use smartreview::{Invocation, Operation};

use crate::common::*;

#[test]
fn unknown_operation_makes_no_ledger_calls() {
    let (executor, ledger) = create_faulty_executor();
    for name in ["deleteDocument", "initledger", "", "queryDocument "] {
        let message = expect_err(executor.invoke_raw([name, "reviewDoc0"]));
        assert_eq!(message, format!("Received unknown function {} invocation", name));
    }
    assert_eq!(ledger.calls(), 0);
}

#[test]
fn every_operation_name_dispatches() {
    let (executor, _) = create_executor();
    expect_ok(executor.invoke_raw(["initLedger"]));
    for op in Operation::ALL {
        let args: Vec<&str> = match op.arity() {
            Some(1) => vec!["reviewDoc0"],
            Some(2) => vec!["reviewDoc0", "value"],
            _ => vec![],
        };
        let response = executor.invoke(Invocation::new(op.name(), args));
        assert!(response.is_ok(), "{} failed: {}", op, response.message);
    }
}

#[test]
fn status_codes() {
    let (executor, _) = create_executor();
    assert_eq!(executor.init().status, 200);
    assert_eq!(executor.invoke_raw(["queryAllDocuments"]).status, 200);
    assert_eq!(executor.invoke_raw(["queryDocument", "reviewDoc0"]).status, 500);
}

#[test]
fn invocation_from_json_request() {
    let (executor, _) = create_seeded_executor();
    let request: Invocation =
        serde_json::from_str(r#"{"function":"queryDocument","args":["reviewDoc2"]}"#).unwrap();
    let doc = record(&expect_ok(executor.invoke(request)));
    assert_eq!(doc.owner, "Alok");
}

#[test]
fn batch_invocations_are_independent() {
    let (executor, _) = create_executor();
    let responses = executor.invoke_many(vec![
        Invocation::from_raw_args(["queryDocument", "reviewDoc0"]),
        Invocation::from_raw_args(["initLedger"]),
        Invocation::from_raw_args(["queryDocument", "reviewDoc0"]),
    ]);
    let statuses: Vec<i32> = responses.iter().map(|r| r.status).collect();
    assert_eq!(statuses, vec![500, 200, 200]);
}
