//! Credential store implementations
//!
//! Provides the `CredentialStore` trait plus an in-memory store for tests
//! and a file-backed store with atomic writes for persistent sessions.

use crate::error::{Error, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;

/// The two credentials a session consists of.
///
/// Both tokens are opaque strings from the store's point of view; decoding
/// happens in the auth layer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoredCredentials {
    /// Short-lived bearer token attached to requests
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    /// Long-lived token used only to mint a new access token
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
}

/// Persistent key-value storage for the session and refresh tokens.
///
/// Lifecycle: written at login, read before every request, the access token
/// overwritten on refresh, everything cleared on logout or terminal failure.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Read the current access token, if any
    async fn access_token(&self) -> Result<Option<String>>;

    /// Read the current refresh token, if any
    async fn refresh_token(&self) -> Result<Option<String>>;

    /// Overwrite the access token, keeping the refresh token
    async fn store_access_token(&self, token: &str) -> Result<()>;

    /// Store both tokens (login)
    async fn store_tokens(&self, access: &str, refresh: &str) -> Result<()>;

    /// Remove both tokens (logout or terminal failure)
    async fn clear(&self) -> Result<()>;
}

// ============================================================================
// In-memory store
// ============================================================================

/// In-process credential store. Useful for tests and one-shot tools that
/// don't need the session to survive the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<StoredCredentials>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-loaded with both tokens
    pub fn with_tokens(access: impl Into<String>, refresh: impl Into<String>) -> Self {
        Self {
            inner: RwLock::new(StoredCredentials {
                access_token: Some(access.into()),
                refresh_token: Some(refresh.into()),
            }),
        }
    }
}

#[async_trait]
impl CredentialStore for MemoryStore {
    async fn access_token(&self) -> Result<Option<String>> {
        Ok(self.inner.read().await.access_token.clone())
    }

    async fn refresh_token(&self) -> Result<Option<String>> {
        Ok(self.inner.read().await.refresh_token.clone())
    }

    async fn store_access_token(&self, token: &str) -> Result<()> {
        self.inner.write().await.access_token = Some(token.to_string());
        Ok(())
    }

    async fn store_tokens(&self, access: &str, refresh: &str) -> Result<()> {
        let mut creds = self.inner.write().await;
        creds.access_token = Some(access.to_string());
        creds.refresh_token = Some(refresh.to_string());
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        *self.inner.write().await = StoredCredentials::default();
        Ok(())
    }
}

// ============================================================================
// File-backed store
// ============================================================================

/// File-backed credential store surviving process restarts.
///
/// The file holds a small JSON object with the two token keys. Every write
/// goes to a temp file first and is renamed into place for atomicity.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    cache: Arc<RwLock<StoredCredentials>>,
}

impl FileStore {
    /// Open a store at the given path, loading existing credentials if the
    /// file is present.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let creds = if path.exists() {
            let contents = std::fs::read_to_string(&path).map_err(|e| Error::Storage {
                message: format!("Failed to read credentials file: {e}"),
            })?;
            serde_json::from_str(&contents).map_err(|e| Error::Storage {
                message: format!("Failed to parse credentials file: {e}"),
            })?
        } else {
            StoredCredentials::default()
        };

        Ok(Self {
            path,
            cache: Arc::new(RwLock::new(creds)),
        })
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn persist(&self, creds: &StoredCredentials) -> Result<()> {
        let contents = serde_json::to_string_pretty(creds).map_err(|e| Error::Storage {
            message: format!("Failed to serialize credentials: {e}"),
        })?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|e| Error::Storage {
                        message: format!("Failed to create credentials directory: {e}"),
                    })?;
            }
        }

        // Write to temp file first, then rename for atomicity
        let temp_path = self.path.with_extension("tmp");
        tokio::fs::write(&temp_path, &contents)
            .await
            .map_err(|e| Error::Storage {
                message: format!("Failed to write credentials file: {e}"),
            })?;

        tokio::fs::rename(&temp_path, &self.path)
            .await
            .map_err(|e| Error::Storage {
                message: format!("Failed to rename credentials file: {e}"),
            })?;

        Ok(())
    }
}

#[async_trait]
impl CredentialStore for FileStore {
    async fn access_token(&self) -> Result<Option<String>> {
        Ok(self.cache.read().await.access_token.clone())
    }

    async fn refresh_token(&self) -> Result<Option<String>> {
        Ok(self.cache.read().await.refresh_token.clone())
    }

    async fn store_access_token(&self, token: &str) -> Result<()> {
        let mut creds = self.cache.write().await;
        creds.access_token = Some(token.to_string());
        self.persist(&creds).await
    }

    async fn store_tokens(&self, access: &str, refresh: &str) -> Result<()> {
        let mut creds = self.cache.write().await;
        creds.access_token = Some(access.to_string());
        creds.refresh_token = Some(refresh.to_string());
        self.persist(&creds).await
    }

    async fn clear(&self) -> Result<()> {
        let mut creds = self.cache.write().await;
        *creds = StoredCredentials::default();
        if self.path.exists() {
            self.persist(&creds).await?;
        }
        Ok(())
    }
}
