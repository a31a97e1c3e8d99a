//! Listing handlers: range scan and history aggregation.
//!
//! Both serialise to a JSON array, `[]` when nothing matched.

use std::sync::Arc;

use serde::Serialize;

use crate::bridge::Primitives;
use crate::convert::convert_result;
use crate::{Error, Result};

/// Handle queryAllDocuments. Arguments are ignored.
pub fn query_all(p: &Arc<Primitives>) -> Result<Vec<u8>> {
    let records = convert_result(p.range.query_all())?;
    to_payload(&records)
}

/// Handle getHistoryForDocuments. Arguments are ignored.
pub fn history_all(p: &Arc<Primitives>) -> Result<Vec<u8>> {
    let records = convert_result(p.history.history_all())?;
    to_payload(&records)
}

fn to_payload<T: Serialize>(records: &[T]) -> Result<Vec<u8>> {
    serde_json::to_vec(records).map_err(|e| Error::Serialization {
        reason: e.to_string(),
    })
}
