//! Contract configuration via `smart_review.toml`
//!
//! Every field has a default matching the literal contract (`reviewDoc`
//! prefix, ten slots, unpadded indices), so an empty or missing file
//! behaves exactly like the built-in keyspace.

use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use smartreview_core::{DocumentKeyspace, KeyScheme, DEFAULT_PREFIX, DEFAULT_SLOTS};
use smartreview_primitives::seed_documents;

use crate::{Error, Result};

/// Config file name.
pub const CONFIG_FILE_NAME: &str = "smart_review.toml";

/// Keyspace configuration loaded from `smart_review.toml`.
///
/// # Example
///
/// ```toml
/// key_prefix = "reviewDoc"
/// document_slots = 10
///
/// [key_scheme]
/// kind = "plain"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractConfig {
    /// Prefix every document key starts with.
    #[serde(default = "default_prefix")]
    pub key_prefix: String,
    /// Number of document slots scanned by listing and history.
    #[serde(default = "default_slots")]
    pub document_slots: usize,
    /// How slot indices are rendered into keys.
    #[serde(default)]
    pub key_scheme: KeyScheme,
}

fn default_prefix() -> String {
    DEFAULT_PREFIX.to_string()
}

fn default_slots() -> usize {
    DEFAULT_SLOTS
}

impl Default for ContractConfig {
    fn default() -> Self {
        Self {
            key_prefix: default_prefix(),
            document_slots: default_slots(),
            key_scheme: KeyScheme::default(),
        }
    }
}

impl ContractConfig {
    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# SmartReview contract configuration
#
# Documents are stored at key_prefix + slot index (reviewDoc0, reviewDoc1, ...).
key_prefix = "reviewDoc"

# Number of slots covered by queryAllDocuments and getHistoryForDocuments.
document_slots = 10

# Index rendering: "plain" (reviewDoc7) or "zero_padded" (reviewDoc07).
# Zero padding keeps lexicographic key order equal to slot order.
[key_scheme]
kind = "plain"
# kind = "zero_padded"
# width = 2
"#
    }

    /// Parse config from TOML text and validate it.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: ContractConfig = toml::from_str(content).map_err(|e| Error::Config {
            reason: format!("Failed to parse config: {}", e),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::Config {
            reason: format!("Failed to read config file '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&content).map_err(|e| match e {
            Error::Config { reason } => Error::Config {
                reason: format!("{} ({})", reason, path.display()),
            },
            other => other,
        })
    }

    /// Write the default config file if it does not already exist.
    ///
    /// Returns `Ok(())` whether the file was created or already existed.
    pub fn write_default_if_missing(path: &Path) -> Result<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml()).map_err(|e| Error::Config {
                reason: format!(
                    "Failed to write default config file '{}': {}",
                    path.display(),
                    e
                ),
            })?;
        }
        Ok(())
    }

    /// Reject a keyspace that cannot address every slot or is too small
    /// for the seed documents.
    pub fn validate(&self) -> Result<()> {
        let keyspace = self.to_keyspace();
        keyspace
            .validate()
            .and_then(|()| keyspace.ensure_capacity(seed_documents().len()))
            .map_err(|e| Error::Config {
                reason: e.to_string(),
            })
    }

    /// The validated keyspace this config describes.
    pub fn keyspace(&self) -> Result<Arc<DocumentKeyspace>> {
        self.validate()?;
        Ok(Arc::new(self.to_keyspace()))
    }

    fn to_keyspace(&self) -> DocumentKeyspace {
        DocumentKeyspace::new(self.key_prefix.clone(), self.document_slots, self.key_scheme)
    }
}
