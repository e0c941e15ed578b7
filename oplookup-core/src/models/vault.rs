//! Vault model.

use serde::{Deserialize, Serialize};

/// A 1Password vault
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vault {
    /// Vault identifier
    pub id: String,
    /// Human-readable vault name
    pub name: String,
    /// Optional description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Vault {
    /// Creates a vault with the given id and name
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
        }
    }
}

/// Reference from an item back to its owning vault
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaultRef {
    /// Vault identifier
    pub id: String,
}
