//! Variable record and vault reference types.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::core::constants;
use crate::error::{ParseError, Result};

/// A single environment-variable record.
///
/// Build-time records carry a name only. Run-time records carry a value,
/// which for secrets is the composed vault reference string rather than
/// the raw secret value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variable {
    /// Unique id within the owning set. Never reused.
    pub id: u64,
    /// Variable name (non-empty, no whitespace).
    pub name: String,
    /// Value text; absent for build-time records.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Whether the value is a vault reference rather than plain text.
    #[serde(default)]
    pub secret: bool,
}

impl Variable {
    /// Case-insensitive substring match against name or value.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.name.to_lowercase().contains(&query)
            || self
                .value
                .as_ref()
                .is_some_and(|v| v.to_lowercase().contains(&query))
    }

    /// Decompose this record's stored vault reference.
    ///
    /// Used when editing an existing secret to pre-fill the vault and
    /// secret-name fields.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::VaultRef` if the record holds no value or the
    /// value is not a well-formed reference.
    pub fn vault_ref(&self) -> Result<VaultRef> {
        let value = self
            .value
            .as_deref()
            .ok_or_else(|| ParseError::VaultRef(format!("{} has no value", self.name)))?;
        VaultRef::parse(value)
    }
}

impl std::fmt::Display for Variable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A key-vault reference: vault name plus secret name.
///
/// Serializes to the provider string
/// `@Microsoft.KeyVault(VaultName=<vault>;SecretName=<secret>)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VaultRef {
    pub vault: String,
    pub secret: String,
}

impl VaultRef {
    pub fn new(vault: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            vault: vault.into(),
            secret: secret.into(),
        }
    }

    /// Whether a raw value carries the key-vault sentinel prefix.
    pub fn is_reference(value: &str) -> bool {
        value.starts_with(constants::KEYVAULT_PREFIX)
    }

    /// Parse a composed reference string back into its parts.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::VaultRef` if the string does not contain the
    /// `VaultName=...;SecretName=...` section.
    pub fn parse(value: &str) -> Result<Self> {
        let pattern =
            Regex::new(r"VaultName=(.*?);SecretName=(.*?)\)").map_err(ParseError::Pattern)?;
        let caps = pattern
            .captures(value)
            .ok_or_else(|| ParseError::VaultRef(value.to_string()))?;

        Ok(Self {
            vault: caps[1].to_string(),
            secret: caps[2].to_string(),
        })
    }
}

impl std::fmt::Display for VaultRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}(VaultName={};SecretName={})",
            constants::KEYVAULT_PREFIX,
            self.vault,
            self.secret
        )
    }
}
