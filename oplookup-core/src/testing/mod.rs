//! In-memory secret store for tests and offline use
//!
//! [`InMemoryStore`] implements [`SecretStore`] over a fixed set of vaults
//! and items, returning them in insertion order just like the service does.
//! It counts calls per operation so tests can assert which lookups happened.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::error::{ClientError, ClientResult};
use crate::models::{Item, Vault};
use crate::store::SecretStore;

/// Per-operation call counters
#[derive(Debug, Default)]
pub struct CallCounts {
    vault_by_name: AtomicUsize,
    item_by_id: AtomicUsize,
    item_by_name: AtomicUsize,
}

impl CallCounts {
    /// Calls to `get_vault_id_by_name`
    #[must_use]
    pub fn vault_by_name(&self) -> usize {
        self.vault_by_name.load(Ordering::SeqCst)
    }

    /// Calls to `get_item_by_id`
    #[must_use]
    pub fn item_by_id(&self) -> usize {
        self.item_by_id.load(Ordering::SeqCst)
    }

    /// Calls to `get_item_by_name`
    #[must_use]
    pub fn item_by_name(&self) -> usize {
        self.item_by_name.load(Ordering::SeqCst)
    }

    /// Total item lookups of either kind
    #[must_use]
    pub fn item_lookups(&self) -> usize {
        self.item_by_id() + self.item_by_name()
    }
}

/// A fixed vault/item fixture served from memory
#[derive(Debug, Default)]
pub struct InMemoryStore {
    vaults: Vec<Vault>,
    items: Vec<(String, Item)>,
    calls: CallCounts,
}

impl InMemoryStore {
    /// Creates an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a vault
    #[must_use]
    pub fn with_vault(mut self, vault: Vault) -> Self {
        self.vaults.push(vault);
        self
    }

    /// Adds an item to the vault with the given id
    #[must_use]
    pub fn with_item(mut self, vault_id: impl Into<String>, item: Item) -> Self {
        self.items.push((vault_id.into(), item));
        self
    }

    /// Returns the call counters
    #[must_use]
    pub const fn calls(&self) -> &CallCounts {
        &self.calls
    }

    fn items_in<'a>(&'a self, vault_id: &'a str) -> impl Iterator<Item = &'a Item> + 'a {
        self.items
            .iter()
            .filter(move |(v, _)| v == vault_id)
            .map(|(_, item)| item)
    }
}

#[async_trait]
impl SecretStore for InMemoryStore {
    async fn get_vault_id_by_name(&self, name: &str) -> ClientResult<String> {
        self.calls.vault_by_name.fetch_add(1, Ordering::SeqCst);
        self.vaults
            .iter()
            .find(|v| v.name == name)
            .map(|v| v.id.clone())
            .ok_or_else(|| ClientError::NotFound(format!("vault '{name}'")))
    }

    async fn get_item_by_id(&self, item_id: &str, vault_id: &str) -> ClientResult<Item> {
        self.calls.item_by_id.fetch_add(1, Ordering::SeqCst);
        self.items_in(vault_id)
            .find(|i| i.id == item_id)
            .cloned()
            .ok_or_else(|| ClientError::NotFound(format!("item {item_id} in vault {vault_id}")))
    }

    async fn get_item_by_name(&self, name: &str, vault_id: &str) -> ClientResult<Item> {
        self.calls.item_by_name.fetch_add(1, Ordering::SeqCst);
        self.items_in(vault_id)
            .find(|i| i.title == name)
            .cloned()
            .ok_or_else(|| ClientError::NotFound(format!("item '{name}' in vault {vault_id}")))
    }
}
