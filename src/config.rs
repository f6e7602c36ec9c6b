//! Client configuration
//!
//! Holds everything a client handle is fixed to for its lifetime:
//! the credential, the network root and the transport options.

use crate::error::{Error, Result};
use crate::types::Network;
use std::time::Duration;
use url::Url;

/// Name of the header carrying the project credential
pub const HEADER_PARAM_NAME: &str = "project_id";

/// Environment variable consulted when no credential is passed explicitly
pub const API_KEY_ENV_VAR: &str = "BLOCKFROST_API_KEY";

// ============================================================================
// Proxy
// ============================================================================

/// Proxies used for outgoing requests, per URL scheme
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProxyConfig {
    /// Proxy for `http://` URLs
    pub http: Option<String>,
    /// Proxy for `https://` URLs
    pub https: Option<String>,
}

impl ProxyConfig {
    /// Check if no proxy is configured
    pub fn is_empty(&self) -> bool {
        self.http.is_none() && self.https.is_none()
    }
}

// ============================================================================
// Client Config
// ============================================================================

/// Configuration for a [`BlockfrostClient`](crate::client::BlockfrostClient)
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Explicit credential; falls back to [`API_KEY_ENV_VAR`] when unset
    pub api_key: Option<String>,
    /// Network to query
    pub network: Network,
    /// Optional proxies
    pub proxy: ProxyConfig,
    /// Optional request timeout (none by default)
    pub timeout: Option<Duration>,
    /// User agent string
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            network: Network::default(),
            proxy: ProxyConfig::default(),
            timeout: None,
            user_agent: format!("cardano-explorer/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Create a new config builder
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Resolve the credential from the config or the process environment
    pub fn resolve_api_key(&self) -> Result<String> {
        resolve_api_key_with(self.api_key.as_deref(), |name| std::env::var(name).ok())
    }

    /// Validate the network root and return it
    pub fn base_url(&self) -> Result<&str> {
        let base = self.network.base_url();
        let parsed = Url::parse(base)
            .map_err(|e| Error::config(format!("Invalid network root '{base}': {e}")))?;
        if parsed.cannot_be_a_base() {
            return Err(Error::config(format!(
                "Network root '{base}' is not a valid base URL"
            )));
        }
        Ok(base)
    }
}

/// Resolve a credential: the explicit value wins, otherwise `lookup`
/// is asked for [`API_KEY_ENV_VAR`].
pub fn resolve_api_key_with<F>(explicit: Option<&str>, lookup: F) -> Result<String>
where
    F: FnOnce(&str) -> Option<String>,
{
    if let Some(key) = explicit.filter(|k| !k.is_empty()) {
        return Ok(key.to_string());
    }

    lookup(API_KEY_ENV_VAR)
        .filter(|k| !k.is_empty())
        .ok_or_else(|| {
            Error::config(format!(
                "No API key given and {API_KEY_ENV_VAR} is not set in the environment"
            ))
        })
}

/// Builder for client config
#[derive(Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Set the API key
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.config.api_key = Some(key.into());
        self
    }

    /// Set the network
    pub fn network(mut self, network: Network) -> Self {
        self.config.network = network;
        self
    }

    /// Use a custom API root
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.network = Network::Custom(url.into());
        self
    }

    /// Set the proxy for http URLs
    pub fn http_proxy(mut self, proxy: impl Into<String>) -> Self {
        self.config.proxy.http = Some(proxy.into());
        self
    }

    /// Set the proxy for https URLs
    pub fn https_proxy(mut self, proxy: impl Into<String>) -> Self {
        self.config.proxy.https = Some(proxy.into());
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = Some(timeout);
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> ClientConfig {
        self.config
    }
}
