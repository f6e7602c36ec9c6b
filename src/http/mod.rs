//! HTTP transport module
//!
//! Provides the GET primitive every endpoint goes through.
//!
//! # Features
//!
//! - **Transport trait**: the seam between request composition and the network
//! - **Credential header**: the project id is attached to every request
//! - **Proxies**: optional per-scheme proxies fixed at construction
//! - **Error mapping**: non-200 responses become `RemoteRequestFailed`

mod client;

pub use client::{HttpClient, Transport};

#[cfg(test)]
mod tests;
