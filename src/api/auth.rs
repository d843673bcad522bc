//! Login, registration and logout
//!
//! These calls go through the raw transport, not the bearer-token path:
//! a login attempt must never trigger a refresh of whatever stale session
//! might still be lying around in the store.

use crate::auth::{decode_claims, AuthGateway, Claims};
use crate::error::{Error, Result};
use crate::http::RequestConfig;
use reqwest::Method;
use serde::Deserialize;

/// Authentication endpoints
pub struct AuthApi<'a> {
    gateway: &'a AuthGateway,
}

#[derive(Deserialize)]
struct LoginResponse {
    access_token: String,
    refresh_token: String,
}

impl<'a> AuthApi<'a> {
    pub fn new(gateway: &'a AuthGateway) -> Self {
        Self { gateway }
    }

    /// Log in with email and password.
    ///
    /// On success both tokens are written to the credential store and the
    /// decoded claims of the new session are returned. A server rejection
    /// becomes `Error::Auth` carrying the server's message; an unreachable
    /// server stays `Error::Network` so the caller can distinguish the two.
    pub async fn login(&self, email: &str, password: &str) -> Result<Claims> {
        let body = serde_json::json!({ "email": email, "password": password });
        let response: LoginResponse = self
            .gateway
            .http()
            .request_json(
                Method::POST,
                "/auth/login",
                RequestConfig::new().json(body),
            )
            .await
            .map_err(rejected_to_auth)?;

        self.gateway
            .store()
            .store_tokens(&response.access_token, &response.refresh_token)
            .await?;

        decode_claims(&response.access_token)
    }

    /// Register a new account
    pub async fn register(
        &self,
        tp_number: &str,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<()> {
        let body = serde_json::json!({
            "tpNumber": tp_number,
            "username": username,
            "email": email,
            "password": password,
        });
        self.gateway
            .http()
            .request(
                Method::POST,
                "/auth/register",
                RequestConfig::new().json(body),
            )
            .await
            .map_err(rejected_to_auth)?;
        Ok(())
    }

    /// Log out: drop both stored credentials
    pub async fn logout(&self) -> Result<()> {
        self.gateway.store().clear().await
    }
}

/// Map a server rejection to an auth error with the server's message,
/// leaving transport failures untouched.
fn rejected_to_auth(err: Error) -> Error {
    match err {
        Error::Status { body, status } => {
            let message = serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(String::from))
                .unwrap_or_else(|| format!("HTTP {status}"));
            Error::Auth { message }
        }
        other => other,
    }
}
