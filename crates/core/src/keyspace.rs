//! Storage keys for review documents
//!
//! Documents live at `prefix + index` (`reviewDoc0`, `reviewDoc1`, ...).
//! Indices are small and bounded by the slot count; both the range scan and
//! the history aggregation only look at slots `0..slots`.
//!
//! The ledger orders keys lexicographically, so with the plain scheme
//! `reviewDoc10` sorts between `reviewDoc1` and `reviewDoc2`. The scan range
//! therefore spans every digit suffix (`[prefix0, prefix:)`, `':'` being the
//! byte after `'9'`) and entries are filtered by parsed index instead of
//! relying on a `prefix + slots` upper bound. The zero-padded scheme makes
//! lexicographic order match numeric order for slot keys, but it uses the
//! same range and filter so stray keys such as `prefix5` stay out.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default key prefix
pub const DEFAULT_PREFIX: &str = "reviewDoc";

/// Default number of document slots
pub const DEFAULT_SLOTS: usize = 10;

/// Byte immediately after `'9'`, exclusive end of the digit suffixes.
const DIGIT_END: char = ':';

/// How the numeric index is rendered into the key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum KeyScheme {
    /// Decimal without padding (`reviewDoc7`)
    #[default]
    Plain,
    /// Decimal left-padded with zeros to `width` digits (`reviewDoc07`)
    ZeroPadded {
        /// Number of digits
        width: usize,
    },
}

/// The bounded set of keys review documents may occupy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentKeyspace {
    prefix: String,
    slots: usize,
    scheme: KeyScheme,
}

impl Default for DocumentKeyspace {
    fn default() -> Self {
        DocumentKeyspace::new(DEFAULT_PREFIX, DEFAULT_SLOTS, KeyScheme::Plain)
    }
}

impl DocumentKeyspace {
    /// Create a keyspace. Call [`validate`](Self::validate) before use if
    /// the parameters come from user input.
    pub fn new(prefix: impl Into<String>, slots: usize, scheme: KeyScheme) -> Self {
        DocumentKeyspace {
            prefix: prefix.into(),
            slots,
            scheme,
        }
    }

    /// Reject parameters that cannot address every slot.
    pub fn validate(&self) -> Result<()> {
        if self.prefix.is_empty() {
            return Err(Error::InvalidKey("key prefix must not be empty".into()));
        }
        if self.slots == 0 {
            return Err(Error::InvalidKey("document slot count must be at least 1".into()));
        }
        if let KeyScheme::ZeroPadded { width } = self.scheme {
            let needed = (self.slots - 1).to_string().len();
            if width < needed {
                return Err(Error::InvalidKey(format!(
                    "padding width {} cannot hold index {}",
                    width,
                    self.slots - 1
                )));
            }
        }
        Ok(())
    }

    /// Reject a keyspace whose slots cannot hold `count` documents.
    pub fn ensure_capacity(&self, count: usize) -> Result<()> {
        if count > self.slots {
            return Err(Error::InvalidKey(format!(
                "{} document slots cannot hold {} documents",
                self.slots, count
            )));
        }
        Ok(())
    }

    /// Key prefix
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Number of slots
    pub fn slots(&self) -> usize {
        self.slots
    }

    /// Index rendering scheme
    pub fn scheme(&self) -> KeyScheme {
        self.scheme
    }

    /// Storage key for a slot index.
    pub fn key(&self, index: usize) -> String {
        match self.scheme {
            KeyScheme::Plain => format!("{}{}", self.prefix, index),
            KeyScheme::ZeroPadded { width } => {
                format!("{}{:0width$}", self.prefix, index, width = width)
            }
        }
    }

    /// Every slot key, in index order.
    pub fn keys(&self) -> impl Iterator<Item = String> + '_ {
        (0..self.slots).map(move |i| self.key(i))
    }

    /// Parse the slot index out of a key produced by [`key`](Self::key).
    ///
    /// Returns `None` for foreign keys, non-canonical renderings (`reviewDoc03`
    /// under the plain scheme) and indices outside the slot bound.
    pub fn index_of(&self, key: &str) -> Option<usize> {
        let suffix = key.strip_prefix(self.prefix.as_str())?;
        if suffix.is_empty() || !suffix.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let canonical = match self.scheme {
            KeyScheme::Plain => suffix == "0" || !suffix.starts_with('0'),
            KeyScheme::ZeroPadded { width } => suffix.len() == width,
        };
        if !canonical {
            return None;
        }
        suffix.parse::<usize>().ok().filter(|i| *i < self.slots)
    }

    /// Whether `key` is one of the slot keys.
    pub fn contains(&self, key: &str) -> bool {
        self.index_of(key).is_some()
    }

    /// Range-scan bounds `[start, end)` covering every slot key.
    ///
    /// The same bound is used for both schemes. It also admits non-slot keys
    /// under the prefix, so callers filter the scan with
    /// [`index_of`](Self::index_of).
    pub fn scan_range(&self) -> (String, String) {
        (self.key(0), format!("{}{}", self.prefix, DIGIT_END))
    }
}
