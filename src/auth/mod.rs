//! Authenticated request gateway
//!
//! Every outbound call goes through [`AuthGateway`], which attaches the
//! stored bearer token, transparently refreshes it when expired, and ends
//! the session (clearing the credential store) on irrecoverable failure.

mod gateway;
mod token;

pub use gateway::AuthGateway;
pub use token::{decode_claims, Claims};
