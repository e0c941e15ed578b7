//! Secret store client
//!
//! Read-only access to vaults and items. The [`SecretStore`] trait is the
//! seam the resolver depends on; [`ConnectClient`] implements it over the
//! 1Password Connect REST API.
//!
//! Implementations own no resolution logic: they return raw items or a
//! not-found signal, and perform no retries or caching.

mod connect;

use async_trait::async_trait;

use crate::error::ClientResult;
use crate::models::Item;

pub use connect::ConnectClient;
pub use crate::identifier::is_valid_identifier;

/// Read-only queries against a secret store
#[async_trait]
pub trait SecretStore: Send + Sync {
    /// Resolves a vault identifier by exact vault name.
    ///
    /// When several vaults share the name, the first one in service order
    /// is returned.
    ///
    /// # Errors
    /// Returns `ClientError::NotFound` if no vault has that name.
    async fn get_vault_id_by_name(&self, name: &str) -> ClientResult<String>;

    /// Fetches an item by identifier within a vault.
    ///
    /// # Errors
    /// Returns `ClientError::NotFound` if the item does not exist.
    async fn get_item_by_id(&self, item_id: &str, vault_id: &str) -> ClientResult<Item>;

    /// Fetches an item by exact title within a vault.
    ///
    /// # Errors
    /// Returns `ClientError::NotFound` if no item has that title.
    async fn get_item_by_name(&self, name: &str, vault_id: &str) -> ClientResult<Item>;
}
