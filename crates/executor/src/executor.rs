//! The Executor - single entry point for contract invocations.
//!
//! The Executor is a stateless dispatcher: it resolves the operation name,
//! routes to the matching handler and wraps the outcome in a [`Response`].

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

use smartreview_core::{DocumentKeyspace, LedgerState};
use tracing::{debug, error};

use crate::bridge::Primitives;
use crate::config::ContractConfig;
use crate::{Error, Invocation, Operation, Response, Result};

/// The invocation executor.
///
/// The Executor is **stateless**: it holds references to the ledger through
/// the primitives but keeps nothing between invocations. All state lives in
/// the ledger.
///
/// # Thread Safety
///
/// Executor is `Send + Sync` and can be shared across threads.
///
/// # Example
///
/// ```ignore
/// use smartreview_executor::{Executor, Invocation};
///
/// let executor = Executor::new(ledger);
///
/// // Envelope-level invocation, as the host runtime calls it
/// let response = executor.invoke(Invocation::new("initLedger", Vec::<String>::new()));
/// assert!(response.is_ok());
///
/// // Typed execution
/// let bytes = executor.execute(Operation::QueryDocument, &["reviewDoc0".into()])?;
/// ```
#[derive(Clone)]
pub struct Executor {
    primitives: Arc<Primitives>,
}

impl Executor {
    /// Create an executor over `ledger` with the default keyspace.
    pub fn new(ledger: Arc<dyn LedgerState>) -> Self {
        Self::with_keyspace(ledger, Arc::new(DocumentKeyspace::default()))
    }

    /// Create an executor with a keyspace taken from configuration.
    ///
    /// # Errors
    ///
    /// `Config` if the configuration describes an unusable keyspace.
    pub fn with_config(ledger: Arc<dyn LedgerState>, config: &ContractConfig) -> Result<Self> {
        Ok(Self::with_keyspace(ledger, config.keyspace()?))
    }

    /// Create an executor over an explicit keyspace.
    pub fn with_keyspace(ledger: Arc<dyn LedgerState>, keyspace: Arc<DocumentKeyspace>) -> Self {
        Self {
            primitives: Arc::new(Primitives::new(ledger, keyspace)),
        }
    }

    /// Keyspace in use
    pub fn keyspace(&self) -> &DocumentKeyspace {
        &self.primitives.keyspace
    }

    /// Instantiation hook. Touches no state and always succeeds.
    pub fn init(&self) -> Response {
        debug!("contract instantiated");
        Response::success(Vec::new())
    }

    /// Handle one invocation and wrap the outcome in an envelope.
    ///
    /// Never panics: a panic below the dispatcher is reported as an
    /// internal error.
    pub fn invoke(&self, invocation: Invocation) -> Response {
        let Invocation { function, args } = invocation;
        let outcome = catch_unwind(AssertUnwindSafe(|| self.dispatch(&function, &args)))
            .unwrap_or_else(|panic| {
                Err(Error::Internal {
                    reason: panic_message(panic.as_ref()),
                })
            });
        if let Err(e) = &outcome {
            error!(function = %function, error = %e, "invocation failed");
        }
        Response::from(outcome)
    }

    /// Handle the host's flat argument vector (function name first).
    pub fn invoke_raw<I, S>(&self, raw: I) -> Response
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.invoke(Invocation::from_raw_args(raw))
    }

    /// Handle several invocations in order.
    ///
    /// Each one runs independently; a failure does not stop the rest.
    pub fn invoke_many(&self, invocations: Vec<Invocation>) -> Vec<Response> {
        invocations.into_iter().map(|inv| self.invoke(inv)).collect()
    }

    /// Resolve `function` and execute it.
    ///
    /// # Errors
    ///
    /// `UnknownOperation` before any ledger access when the name is outside
    /// the fixed set; otherwise whatever [`execute`](Self::execute) reports.
    pub fn dispatch(&self, function: &str, args: &[String]) -> Result<Vec<u8>> {
        let op = Operation::parse(function)?;
        debug!(operation = %op, write = op.is_write(), args = args.len(), "dispatching");
        self.execute(op, args)
    }

    /// Execute a resolved operation and return its payload.
    pub fn execute(&self, op: Operation, args: &[String]) -> Result<Vec<u8>> {
        let p = &self.primitives;
        match op {
            Operation::QueryDocument => crate::handlers::document::query_document(p, args),
            Operation::InitLedger => crate::handlers::document::init_ledger(p),
            Operation::QueryAllDocuments => crate::handlers::query::query_all(p),
            Operation::ChangeDocumentOwner => crate::handlers::document::change_owner(p, args),
            Operation::ChangeDocumentContent => {
                crate::handlers::document::change_content(p, args)
            }
            Operation::GetHistoryForDocuments => crate::handlers::query::history_all(p),
        }
    }
}

fn panic_message(panic: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        format!("panic: {}", s)
    } else if let Some(s) = panic.downcast_ref::<String>() {
        format!("panic: {}", s)
    } else {
        "panic with non-string payload".to_string()
    }
}
