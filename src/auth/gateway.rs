//! Gateway implementation
//!
//! Wraps the HTTP transport so that every outbound request carries a valid
//! bearer token. An expired token is renewed through the refresh endpoint
//! before the original request goes out; renewal is single-flight, so
//! concurrent callers that hit an expired token share one refresh call.

use super::token::decode_claims;
use crate::error::{Error, Result};
use crate::http::{HttpClient, RequestConfig};
use crate::session::CredentialStore;
use reqwest::{Method, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, warn};

const DEFAULT_REFRESH_PATH: &str = "/auth/refresh";

/// Authenticated request gateway.
///
/// The gateway is the only component that mutates the credential store: it
/// overwrites the access token after a successful refresh and clears both
/// tokens on terminal failure. It never retries a request.
pub struct AuthGateway {
    http: HttpClient,
    store: Arc<dyn CredentialStore>,
    refresh_path: String,
    /// Serializes refreshes so racing callers trigger at most one
    refresh_lock: Mutex<()>,
}

#[derive(Serialize)]
struct RefreshRequest<'a> {
    refresh_token: &'a str,
}

#[derive(Deserialize)]
struct RefreshResponse {
    access_token: String,
}

impl AuthGateway {
    /// Create a gateway over the given transport and credential store
    pub fn new(http: HttpClient, store: Arc<dyn CredentialStore>) -> Self {
        Self {
            http,
            store,
            refresh_path: DEFAULT_REFRESH_PATH.to_string(),
            refresh_lock: Mutex::new(()),
        }
    }

    /// Override the refresh endpoint path
    #[must_use]
    pub fn with_refresh_path(mut self, path: impl Into<String>) -> Self {
        self.refresh_path = path.into();
        self
    }

    /// The credential store backing this gateway
    pub fn store(&self) -> &Arc<dyn CredentialStore> {
        &self.store
    }

    /// The underlying HTTP transport
    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    /// Decode the claims of the currently stored access token, if any.
    ///
    /// Read-only: a malformed token surfaces as `Error::TokenDecode` but
    /// does not clear the store here; that happens on the request path.
    pub async fn current_claims(&self) -> Result<Option<super::Claims>> {
        match self.store.access_token().await? {
            Some(token) => Ok(Some(decode_claims(&token)?)),
            None => Ok(None),
        }
    }

    /// Send an authenticated request.
    ///
    /// If no access token is stored the request proceeds unauthenticated;
    /// the server enforces access control.
    pub async fn send(
        &self,
        method: Method,
        path: &str,
        mut config: RequestConfig,
    ) -> Result<Response> {
        if let Some(token) = self.bearer_token().await? {
            config = config.bearer(token);
        }
        self.http.request(method, path, config).await
    }

    /// Send an authenticated request and parse the JSON response
    pub async fn send_json<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        config: RequestConfig,
    ) -> Result<T> {
        let response = self.send(method, path, config).await?;
        let json: T = response.json().await.map_err(Error::Network)?;
        Ok(json)
    }

    /// Produce a valid bearer token, refreshing the stored one if expired.
    ///
    /// Returns `Ok(None)` when no session exists at all. Any terminal
    /// condition (malformed token, expired with no refresh token, rejected
    /// refresh) clears the store and returns `Error::SessionExpired`.
    async fn bearer_token(&self) -> Result<Option<String>> {
        let Some(access) = self.store.access_token().await? else {
            return Ok(None);
        };

        let claims = match decode_claims(&access) {
            Ok(claims) => claims,
            Err(e) => {
                return self
                    .terminate(format!("stored access token is malformed: {e}"))
                    .await;
            }
        };

        if !claims.is_expired() {
            return Ok(Some(access));
        }

        let _guard = self.refresh_lock.lock().await;

        // Double-check after acquiring the lock: another caller may have
        // refreshed while we waited.
        if let Some(current) = self.store.access_token().await? {
            if let Ok(claims) = decode_claims(&current) {
                if !claims.is_expired() {
                    return Ok(Some(current));
                }
            }
        }

        let Some(refresh) = self.store.refresh_token().await? else {
            return self
                .terminate("access token expired and no refresh token is stored")
                .await;
        };

        match self.request_refresh(&refresh).await {
            Ok(new_access) => {
                self.store.store_access_token(&new_access).await?;
                debug!("access token refreshed");
                Ok(Some(new_access))
            }
            Err(e) => self.terminate(format!("token refresh failed: {e}")).await,
        }
    }

    /// Call the refresh endpoint with the refresh token.
    ///
    /// Goes through the raw transport: the refresh call itself must not be
    /// routed back through the gateway.
    async fn request_refresh(&self, refresh_token: &str) -> Result<String> {
        let body = serde_json::to_value(RefreshRequest { refresh_token })?;
        let response: RefreshResponse = self
            .http
            .request_json(
                Method::POST,
                &self.refresh_path,
                RequestConfig::new().json(body),
            )
            .await
            .map_err(|e| Error::TokenRefresh {
                message: e.to_string(),
            })?;
        Ok(response.access_token)
    }

    /// End the session: clear both stored credentials and surface a
    /// terminal error for the caller to map to its login entry point.
    async fn terminate(&self, message: impl Into<String>) -> Result<Option<String>> {
        let message = message.into();
        warn!("session terminated: {message}");
        self.store.clear().await?;
        Err(Error::SessionExpired { message })
    }
}

impl std::fmt::Debug for AuthGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthGateway")
            .field("http", &self.http)
            .field("refresh_path", &self.refresh_path)
            .finish_non_exhaustive()
    }
}
