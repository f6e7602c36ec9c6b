//! Common types used throughout cardano-explorer
//!
//! This module contains shared type definitions, type aliases,
//! and utility types used across multiple modules.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type
pub type JsonObject = serde_json::Map<String, JsonValue>;

/// An aggregated, ordered collection of records
pub type Records = Vec<JsonValue>;

// ============================================================================
// Sort Order
// ============================================================================

/// Order in which the API returns paged data
///
/// The API returns data oldest first; `Desc` reverses it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Order {
    /// Oldest first
    #[default]
    Asc,
    /// Newest first
    Desc,
}

impl Order {
    /// Check if this is descending order
    pub fn is_desc(self) -> bool {
        matches!(self, Self::Desc)
    }
}

impl FromStr for Order {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(Error::invalid_argument(format!(
                "order must be 'asc' or 'desc', got '{other}'"
            ))),
        }
    }
}

// ============================================================================
// Network
// ============================================================================

/// Root URL of the Cardano mainnet API
pub const MAINNET_URL: &str = "https://cardano-mainnet.blockfrost.io/api/v0/";

/// Root URL of the Cardano testnet API
pub const TESTNET_URL: &str = "https://cardano-testnet.blockfrost.io/api/v0/";

/// Root URL of a locally running, API compatible backend
pub const LOCAL_URL: &str = "http://localhost:3000/";

/// Network the client talks to
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Network {
    /// Cardano mainnet, [`MAINNET_URL`]
    #[default]
    Mainnet,
    /// Cardano testnet, [`TESTNET_URL`]
    Testnet,
    /// Local backend, [`LOCAL_URL`]
    Local,
    /// Any other API root, used verbatim as the URL prefix
    Custom(String),
}

impl Network {
    /// Root URL every resource path is appended to
    pub fn base_url(&self) -> &str {
        match self {
            Self::Mainnet => MAINNET_URL,
            Self::Testnet => TESTNET_URL,
            Self::Local => LOCAL_URL,
            Self::Custom(url) => url,
        }
    }
}

impl FromStr for Network {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "mainnet" => Ok(Self::Mainnet),
            "testnet" => Ok(Self::Testnet),
            "local" => Ok(Self::Local),
            other => Err(Error::config(format!(
                "Unknown network '{other}' (expected mainnet, testnet or local)"
            ))),
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mainnet => f.write_str("mainnet"),
            Self::Testnet => f.write_str("testnet"),
            Self::Local => f.write_str("local"),
            Self::Custom(url) => f.write_str(url),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_default() {
        assert_eq!(Order::default(), Order::Asc);
        assert!(!Order::Asc.is_desc());
        assert!(Order::Desc.is_desc());
    }

    #[test]
    fn test_order_parse() {
        assert_eq!("desc".parse::<Order>().unwrap(), Order::Desc);
        assert_eq!("ASC".parse::<Order>().unwrap(), Order::Asc);
        assert!(matches!(
            "newest".parse::<Order>(),
            Err(Error::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_order_serde() {
        let order: Order = serde_json::from_str("\"desc\"").unwrap();
        assert_eq!(order, Order::Desc);
        assert_eq!(serde_json::to_string(&Order::Asc).unwrap(), "\"asc\"");
    }

    #[test]
    fn test_network_base_url() {
        assert_eq!(Network::Mainnet.base_url(), MAINNET_URL);
        assert_eq!(Network::Testnet.base_url(), TESTNET_URL);
        assert_eq!(Network::Local.base_url(), LOCAL_URL);
        assert_eq!(
            Network::Custom("http://127.0.0.1:8080/".into()).base_url(),
            "http://127.0.0.1:8080/"
        );
    }

    #[test]
    fn test_network_parse() {
        assert_eq!("mainnet".parse::<Network>().unwrap(), Network::Mainnet);
        assert_eq!("Testnet".parse::<Network>().unwrap(), Network::Testnet);
        assert_eq!("local".parse::<Network>().unwrap(), Network::Local);
        assert!(matches!(
            "preprod".parse::<Network>(),
            Err(Error::Config { .. })
        ));
    }
}
