//! Credential storage
//!
//! The session token and refresh token live in an explicit, injectable
//! store with defined read/write/clear operations. Only the request
//! gateway mutates the store; no other component writes it.

mod store;

pub use store::{CredentialStore, FileStore, MemoryStore, StoredCredentials};
