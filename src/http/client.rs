//! HTTP client for the Blockfrost API
//!
//! Provides a thin HTTP client that handles:
//! - The `project_id` credential header
//! - Optional HTTP/HTTPS proxies
//! - Response body parsing
//! - Mapping of upstream error bodies to `RemoteRequestFailed`

use crate::config::{ClientConfig, ProxyConfig, HEADER_PARAM_NAME};
use crate::error::{Error, Result};
use crate::types::JsonValue;
use async_trait::async_trait;
use reqwest::{Client, Proxy, StatusCode};
use serde::Deserialize;
use tracing::debug;

/// The GET primitive: fetch a URL and return its JSON body
///
/// Implementations must return `RemoteRequestFailed` for anything other
/// than a successful JSON response.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issue a GET request against `url` and parse the JSON body
    async fn get_json(&self, url: &str) -> Result<JsonValue>;
}

/// Error body returned by the API on failure
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    status_code: Option<u16>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// HTTP client sending the project credential with every request
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    api_key: Option<String>,
}

impl HttpClient {
    /// Create a client without credential or proxy (public endpoints)
    pub fn anonymous(user_agent: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(|e| Error::config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key: None,
        })
    }

    /// Create a client from a config, resolving the credential
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let api_key = config.resolve_api_key()?;
        Self::with_api_key(config, api_key)
    }

    /// Create a client from a config with an already resolved credential
    pub fn with_api_key(config: &ClientConfig, api_key: impl Into<String>) -> Result<Self> {
        let mut builder = Client::builder().user_agent(&config.user_agent);

        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        for proxy in build_proxies(&config.proxy)? {
            builder = builder.proxy(proxy);
        }

        let client = builder
            .build()
            .map_err(|e| Error::config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key: Some(api_key.into()),
        })
    }

    /// Get the underlying reqwest client
    pub fn inner(&self) -> &Client {
        &self.client
    }

    /// Check if a credential is attached to requests
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

#[async_trait]
impl Transport for HttpClient {
    async fn get_json(&self, url: &str) -> Result<JsonValue> {
        let mut req = self.client.get(url);
        if let Some(key) = &self.api_key {
            req = req.header(HEADER_PARAM_NAME, key);
        }

        let response = req
            .send()
            .await
            .map_err(|e| Error::remote(url, None, "Request Error", e.to_string()))?;

        let status = response.status();
        if status == StatusCode::OK {
            debug!("Request succeeded: GET {}", url);
            return response
                .json::<JsonValue>()
                .await
                .map_err(|e| Error::remote(url, Some(status.as_u16()), "Invalid Body", e.to_string()));
        }

        let body = body_or_read_error(response.text().await);
        Err(error_from_body(url, status, &body))
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("has_api_key", &self.api_key.is_some())
            .finish_non_exhaustive()
    }
}

/// Build reqwest proxies from the proxy config
fn build_proxies(config: &ProxyConfig) -> Result<Vec<Proxy>> {
    let mut proxies = Vec::new();

    if let Some(http) = &config.http {
        let proxy = Proxy::http(http)
            .map_err(|e| Error::config(format!("Invalid http proxy '{http}': {e}")))?;
        proxies.push(proxy);
    }

    if let Some(https) = &config.https {
        let proxy = Proxy::https(https)
            .map_err(|e| Error::config(format!("Invalid https proxy '{https}': {e}")))?;
        proxies.push(proxy);
    }

    Ok(proxies)
}

/// Turn a non-200 response into `RemoteRequestFailed`
///
/// Prefers the fields of the API error body and falls back to the
/// reason phrase and raw text.
/// Error body text, or the reason it could not be read
pub(crate) fn body_or_read_error<E>(read: std::result::Result<String, E>) -> String
where
    E: std::fmt::Display,
{
    read.unwrap_or_else(|e| format!("Failed to read error body: {e}"))
}

pub(crate) fn error_from_body(url: &str, status: StatusCode, body: &str) -> Error {
    let reason = status.canonical_reason().unwrap_or("Unknown Status");

    match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(parsed) => Error::remote(
            url,
            Some(parsed.status_code.unwrap_or(status.as_u16())),
            parsed.error.unwrap_or_else(|| reason.to_string()),
            parsed.message.unwrap_or_default(),
        ),
        Err(_) => Error::remote(url, Some(status.as_u16()), reason, body.trim()),
    }
}
