//! Client facade
//!
//! Wires the transport, credential store and gateway together and hands out
//! the per-area endpoint groups.

use crate::api::{AuthApi, FriendsApi, PostsApi, SearchApi, UsersApi, WellbeingApi};
use crate::auth::AuthGateway;
use crate::config::ClientConfig;
use crate::error::Result;
use crate::feed::FeedLoader;
use crate::http::{HttpClient, HttpClientConfig};
use crate::session::{CredentialStore, FileStore, MemoryStore};
use std::sync::Arc;

/// Top-level API client.
///
/// Cheap to share: everything stateful lives behind the gateway's `Arc`.
/// Feed loaders created from the client keep their own pagination state and
/// stay valid after the client is dropped.
#[derive(Debug, Clone)]
pub struct Client {
    config: ClientConfig,
    gateway: Arc<AuthGateway>,
}

impl Client {
    /// Build a client from a configuration.
    ///
    /// Uses the configured credentials file when one is set, otherwise an
    /// in-memory session that ends with the process.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let store: Arc<dyn CredentialStore> = match &config.credentials_file {
            Some(path) => Arc::new(FileStore::open(path)?),
            None => Arc::new(MemoryStore::new()),
        };
        Self::with_store(config, store)
    }

    /// Build a client over a caller-provided credential store
    pub fn with_store(config: ClientConfig, store: Arc<dyn CredentialStore>) -> Result<Self> {
        let http_config = HttpClientConfig::builder()
            .base_url(&config.base_url)
            .timeout(config.timeout())
            .build();
        let http = HttpClient::with_config(http_config)?;
        let gateway =
            Arc::new(AuthGateway::new(http, store).with_refresh_path(&config.refresh_path));

        Ok(Self { config, gateway })
    }

    /// The configuration this client was built from
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// The authenticated request gateway
    pub fn gateway(&self) -> &Arc<AuthGateway> {
        &self.gateway
    }

    /// Login, registration and logout
    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi::new(&self.gateway)
    }

    /// Post endpoints
    pub fn posts(&self) -> PostsApi<'_> {
        PostsApi::new(&self.gateway)
    }

    /// Profile and notification endpoints
    pub fn users(&self) -> UsersApi<'_> {
        UsersApi::new(&self.gateway)
    }

    /// Friendship endpoints
    pub fn friends(&self) -> FriendsApi<'_> {
        FriendsApi::new(&self.gateway)
    }

    /// Mood tracking endpoints
    pub fn wellbeing(&self) -> WellbeingApi<'_> {
        WellbeingApi::new(&self.gateway)
    }

    /// Search endpoints
    pub fn search(&self) -> SearchApi<'_> {
        SearchApi::new(&self.gateway)
    }

    /// A feed loader for the given viewer, using the configured page size
    pub fn feed_loader(&self, viewer: impl Into<String>) -> FeedLoader {
        FeedLoader::with_page_size(self.gateway.clone(), viewer, self.config.page_size)
    }
}
