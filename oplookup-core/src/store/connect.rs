//! 1Password Connect REST client
//!
//! Wraps the three read-only endpoints the resolver needs:
//! - `GET /v1/vaults?filter=name eq "<name>"`
//! - `GET /v1/vaults/{vault}/items?filter=title eq "<title>"`
//! - `GET /v1/vaults/{vault}/items/{item}`
//!
//! Raw API error bodies never reach callers; every failure is mapped to a
//! [`ClientError`] variant.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use tracing::{debug, debug_span, Instrument};

use crate::config::ConnectConfig;
use crate::error::{ClientError, ClientResult};
use crate::models::{Item, ItemSummary, Vault};
use crate::tracing::span_names;

use super::SecretStore;

/// HTTP client for one Connect server and one bearer token
#[derive(Clone)]
pub struct ConnectClient {
    http: reqwest::Client,
    base_url: String,
    token: SecretString,
}

impl std::fmt::Debug for ConnectClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl ConnectClient {
    /// Builds the user-agent string from the crate version
    fn user_agent() -> String {
        format!("oplookup/{}", env!("CARGO_PKG_VERSION"))
    }

    /// Creates a client for the configured server.
    ///
    /// # Errors
    /// Returns `ClientError::Network` if the HTTP client cannot be built.
    pub fn new(config: &ConnectConfig) -> ClientResult<Self> {
        let http = reqwest::Client::builder()
            .user_agent(Self::user_agent())
            .timeout(config.timeout())
            .build()
            .map_err(|e| ClientError::Network(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: config.host().to_string(),
            token: config.token().clone(),
        })
    }

    /// Returns the server base URL
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Lists vaults whose name equals `name`
    async fn list_vaults_named(&self, name: &str) -> ClientResult<Vec<Vault>> {
        let url = format!("{}/v1/vaults", self.base_url);
        let filter = eq_filter("name", name);
        self.get_json(&url, Some(&filter), &format!("vault '{name}'")).await
    }

    /// Lists items in a vault whose title equals `title`
    async fn list_items_titled(
        &self,
        vault_id: &str,
        title: &str,
    ) -> ClientResult<Vec<ItemSummary>> {
        let url = format!("{}/v1/vaults/{vault_id}/items", self.base_url);
        let filter = eq_filter("title", title);
        self.get_json(&url, Some(&filter), &format!("vault {vault_id}")).await
    }

    /// Issues an authenticated GET and decodes a JSON body
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        filter: Option<&str>,
        resource: &str,
    ) -> ClientResult<T> {
        let mut request = self
            .http
            .get(url)
            .bearer_auth(self.token.expose_secret());
        if let Some(filter) = filter {
            request = request.query(&[("filter", filter)]);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ClientError::Network(e.without_url().to_string()))?;

        let status = response.status();
        debug!(url = %url, status = status.as_u16(), "Connect response");
        if !status.is_success() {
            return Err(ClientError::from_status(status.as_u16(), resource));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ClientError::Decode(e.without_url().to_string()))
    }
}

#[async_trait]
impl SecretStore for ConnectClient {
    async fn get_vault_id_by_name(&self, name: &str) -> ClientResult<String> {
        let span = debug_span!(span_names::STORE_VAULT_BY_NAME, vault = %name);
        async {
            let vaults = self.list_vaults_named(name).await?;
            debug!(matches = vaults.len(), "Vault name lookup");
            vaults
                .into_iter()
                .next()
                .map(|v| v.id)
                .ok_or_else(|| ClientError::NotFound(format!("vault '{name}'")))
        }
        .instrument(span)
        .await
    }

    async fn get_item_by_id(&self, item_id: &str, vault_id: &str) -> ClientResult<Item> {
        let span = debug_span!(span_names::STORE_ITEM_BY_ID, item = %item_id, vault = %vault_id);
        let url = format!("{}/v1/vaults/{vault_id}/items/{item_id}", self.base_url);
        self.get_json(&url, None, &format!("item {item_id} in vault {vault_id}"))
            .instrument(span)
            .await
    }

    async fn get_item_by_name(&self, name: &str, vault_id: &str) -> ClientResult<Item> {
        let span = debug_span!(span_names::STORE_ITEM_BY_NAME, item = %name, vault = %vault_id);
        async {
            let summaries = self.list_items_titled(vault_id, name).await?;
            debug!(matches = summaries.len(), "Item title lookup");
            let summary = summaries.into_iter().next().ok_or_else(|| {
                ClientError::NotFound(format!("item '{name}' in vault {vault_id}"))
            })?;
            self.get_item_by_id(&summary.id, vault_id).await
        }
        .instrument(span)
        .await
    }
}

/// Builds a Connect `eq` filter expression, escaping embedded quotes
fn eq_filter(attribute: &str, value: &str) -> String {
    let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
    format!("{attribute} eq \"{escaped}\"")
}
