//! Shared executor across threads

use std::sync::Arc;
use std::thread;

use smartreview::{Error, Executor, MemoryLedger, Operation};

use crate::common::*;

#[test]
fn concurrent_readers_see_seeded_documents() {
    let (executor, _) = create_seeded_executor();
    let executor = Arc::new(executor);

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let executor = Arc::clone(&executor);
            thread::spawn(move || {
                let key = format!("reviewDoc{}", i % 3);
                let payload = expect_ok(executor.invoke_raw(["queryDocument", key.as_str()]));
                record(&payload).document_id
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), format!("doc00{}", i % 3 + 1));
    }
}

#[test]
fn racing_mutations_never_lose_an_update_silently() {
    init_tracing();
    let ledger = MemoryLedger::new();
    let executor = Executor::new(Arc::new(ledger.clone()));
    expect_ok(executor.invoke_raw(["initLedger"]));

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let executor = executor.clone();
            thread::spawn(move || {
                let owner = format!("owner{}", i);
                executor.execute(
                    Operation::ChangeDocumentOwner,
                    &["reviewDoc0".to_string(), owner.clone()],
                )
                .map(|_| owner)
            })
        })
        .collect();

    let mut applied = Vec::new();
    for handle in handles {
        match handle.join().unwrap() {
            Ok(owner) => applied.push(owner),
            Err(Error::Conflict { .. }) => {}
            Err(other) => panic!("unexpected error: {}", other),
        }
    }

    // Every successful mutation is one committed version; conflicts commit nothing.
    assert!(!applied.is_empty());
    assert_eq!(ledger.versions_of("reviewDoc0").len(), 1 + applied.len());

    let current = record(&expect_ok(executor.invoke_raw(["queryDocument", "reviewDoc0"])));
    assert!(applied.contains(&current.owner));
}
