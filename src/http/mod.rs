//! HTTP transport
//!
//! A thin wrapper over `reqwest` that resolves paths against the configured
//! base URL, applies the defensive request timeout, and classifies failures
//! into transport errors (no response) versus server rejections (non-success
//! status). It performs no retries; retry policy belongs to the caller.

mod client;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder, RequestConfig};

#[cfg(test)]
mod tests;
