//! Document handlers: point read, seeding and field mutations.

use std::sync::Arc;

use crate::bridge::{expect_args, Primitives};
use crate::convert::convert_result;
use crate::{Operation, Result};

/// Handle queryDocument: the stored bytes, unchanged.
pub fn query_document(p: &Arc<Primitives>, args: &[String]) -> Result<Vec<u8>> {
    let [key] = expect_args::<1>(Operation::QueryDocument, args)?;
    convert_result(p.documents.query(key))
}

/// Handle initLedger. Arguments are ignored.
pub fn init_ledger(p: &Arc<Primitives>) -> Result<Vec<u8>> {
    convert_result(p.documents.init_ledger())?;
    Ok(Vec::new())
}

/// Handle changeDocumentOwner.
pub fn change_owner(p: &Arc<Primitives>, args: &[String]) -> Result<Vec<u8>> {
    let [key, owner] = expect_args::<2>(Operation::ChangeDocumentOwner, args)?;
    convert_result(p.documents.change_owner(key, owner))?;
    Ok(Vec::new())
}

/// Handle changeDocumentContent.
pub fn change_content(p: &Arc<Primitives>, args: &[String]) -> Result<Vec<u8>> {
    let [key, content] = expect_args::<2>(Operation::ChangeDocumentContent, args)?;
    convert_result(p.documents.change_content(key, content))?;
    Ok(Vec::new())
}
