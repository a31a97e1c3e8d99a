//! The document record and its best-effort decoding
//!
//! A [`DocumentRecord`] is stored as compact JSON. Field names and their
//! order (`documentID`, `docContent`, `owner`, `docType`) are part of the
//! wire contract: re-serialising an unchanged record yields identical bytes.
//!
//! Values read back during scans go through [`Decoded::decode`], which never
//! fails. Anything that is not a record object is surfaced as raw text.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

use crate::error::Result;

/// Discriminator written on every record created by this layer.
pub const DOC_TYPE: &str = "documents";

/// A document under review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRecord {
    /// Logical identifier shown to callers (not the storage key)
    #[serde(rename = "documentID")]
    pub document_id: String,

    /// Free-text body
    #[serde(rename = "docContent")]
    pub doc_content: String,

    /// Current owning principal
    pub owner: String,

    /// Record discriminator, [`DOC_TYPE`] for records written here.
    /// Empty when a stored record omits it.
    #[serde(rename = "docType", default)]
    pub doc_type: String,

    /// Fields this layer does not know about, carried through mutations
    #[serde(flatten)]
    pub extra: Map<String, JsonValue>,
}

impl DocumentRecord {
    /// Create a record tagged with [`DOC_TYPE`].
    pub fn new(
        document_id: impl Into<String>,
        doc_content: impl Into<String>,
        owner: impl Into<String>,
    ) -> Self {
        DocumentRecord {
            document_id: document_id.into(),
            doc_content: doc_content.into(),
            owner: owner.into(),
            doc_type: DOC_TYPE.to_string(),
            extra: Map::new(),
        }
    }

    /// Strict decode, used by mutations.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Compact JSON encoding.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Whether the record carries the discriminator this layer writes.
    pub fn is_review_document(&self) -> bool {
        self.doc_type == DOC_TYPE
    }
}

/// Result of decoding a stored value.
///
/// Serialises untagged: a record becomes a JSON object, raw text a JSON
/// string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Decoded {
    /// The value parsed as a document record
    Structured(DocumentRecord),
    /// The value as (lossy UTF-8) text
    Raw(String),
}

impl Decoded {
    /// Decode stored bytes, falling back to raw text.
    pub fn decode(bytes: &[u8]) -> Self {
        let text = String::from_utf8_lossy(bytes);
        match serde_json::from_str::<DocumentRecord>(&text) {
            Ok(record) => Decoded::Structured(record),
            Err(_) => Decoded::Raw(text.into_owned()),
        }
    }

    /// The record, if the value was structured.
    pub fn as_record(&self) -> Option<&DocumentRecord> {
        match self {
            Decoded::Structured(record) => Some(record),
            Decoded::Raw(_) => None,
        }
    }

    /// Whether decoding fell back to raw text.
    pub fn is_raw(&self) -> bool {
        matches!(self, Decoded::Raw(_))
    }
}
