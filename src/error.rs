//! Error types for the APBook client
//!
//! This module defines the error hierarchy for the entire crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.
//!
//! Failures fall into two classes: *terminal* errors end the current session
//! (credentials have been cleared, the user must log in again) and *transient*
//! errors leave session state untouched so the caller may retry.

use thiserror::Error;

/// The main error type for the APBook client
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Session Errors (terminal)
    // ============================================================================
    #[error("Session expired: {message}")]
    SessionExpired { message: String },

    #[error("Failed to decode access token: {message}")]
    TokenDecode { message: String },

    #[error("Token refresh failed: {message}")]
    TokenRefresh { message: String },

    // ============================================================================
    // Authentication Errors
    // ============================================================================
    #[error("Authentication failed: {message}")]
    Auth { message: String },

    // ============================================================================
    // HTTP Errors (transient)
    // ============================================================================
    /// Transport-level failure: no response was received at all.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server responded, but with a non-success status.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Storage Errors
    // ============================================================================
    #[error("Credential storage error: {message}")]
    Storage { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a session-expired error
    pub fn session_expired(message: impl Into<String>) -> Self {
        Self::SessionExpired {
            message: message.into(),
        }
    }

    /// Create a token decode error
    pub fn token_decode(message: impl Into<String>) -> Self {
        Self::TokenDecode {
            message: message.into(),
        }
    }

    /// Create a token refresh error
    pub fn token_refresh(message: impl Into<String>) -> Self {
        Self::TokenRefresh {
            message: message.into(),
        }
    }

    /// Create an auth error
    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth {
            message: message.into(),
        }
    }

    /// Create an HTTP status error
    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self::Status {
            status,
            body: body.into(),
        }
    }

    /// Create a storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    /// Check if this error ends the current session.
    ///
    /// Terminal errors mean the stored credentials have been cleared and the
    /// user must authenticate again. Everything else preserves session state.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Error::SessionExpired { .. } | Error::TokenDecode { .. } | Error::TokenRefresh { .. }
        )
    }

    /// Check if this error is transient (safe to retry without re-auth)
    pub fn is_transient(&self) -> bool {
        matches!(self, Error::Network(_) | Error::Status { .. })
    }
}

/// Result type alias for the APBook client
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::config("test message");
        assert_eq!(err.to_string(), "Configuration error: test message");

        let err = Error::status(404, "Not found");
        assert_eq!(err.to_string(), "HTTP 404: Not found");

        let err = Error::session_expired("refresh rejected");
        assert_eq!(err.to_string(), "Session expired: refresh rejected");
    }

    #[test]
    fn test_is_terminal() {
        assert!(Error::session_expired("x").is_terminal());
        assert!(Error::token_decode("bad segment").is_terminal());
        assert!(Error::token_refresh("401").is_terminal());

        assert!(!Error::status(500, "").is_terminal());
        assert!(!Error::config("x").is_terminal());
        assert!(!Error::auth("bad password").is_terminal());
    }

    #[test]
    fn test_is_transient() {
        assert!(Error::status(503, "").is_transient());
        assert!(!Error::session_expired("x").is_transient());
        assert!(!Error::auth("x").is_transient());
    }
}
