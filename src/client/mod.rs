//! Blockfrost API client
//!
//! [`BlockfrostClient`] maps every supported resource to a method.
//! Single resources come back as one JSON value. List resources go
//! through the [`Aggregator`] and come back as one ordered collection.
//!
//! ```rust,ignore
//! use cardano_explorer::client::{BlockfrostClient, ListParams};
//! use cardano_explorer::config::ClientConfig;
//!
//! let client = BlockfrostClient::new(ClientConfig::builder().api_key("mainnet...").build())?;
//! let rewards = client
//!     .stake_reward_history("stake1...", ListParams::first(200).descending())
//!     .await?;
//! ```

mod accounts;
mod addresses;
mod analysis;
mod assets;
mod epochs;
mod pools;
mod scripts;
mod transactions;

pub use assets::PolicyAssets;
pub use epochs::parse_epochs;

use crate::config::ClientConfig;
use crate::error::Result;
use crate::http::{HttpClient, Transport};
use crate::pagination::Aggregator;
use crate::types::{JsonValue, Network, Order, Records};
use crate::urls;
use tracing::info;

/// Sort order and result budget of a paged call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListParams {
    /// Sort order
    pub order: Order,
    /// Maximum number of results (multiple of 100), `None` for all
    pub nb_of_results: Option<u32>,
}

impl ListParams {
    /// Every record, ascending
    pub fn all() -> Self {
        Self::default()
    }

    /// At most `nb_of_results` records, ascending
    pub fn first(nb_of_results: u32) -> Self {
        Self {
            order: Order::Asc,
            nb_of_results: Some(nb_of_results),
        }
    }

    /// Reverse the order (newest first)
    #[must_use]
    pub fn descending(mut self) -> Self {
        self.order = Order::Desc;
        self
    }

    /// Set the order
    #[must_use]
    pub fn with_order(mut self, order: Order) -> Self {
        self.order = order;
        self
    }
}

/// Client handle bound to one credential and one network
///
/// Immutable after construction.
pub struct BlockfrostClient<T: Transport = HttpClient> {
    transport: T,
    network: Network,
}

impl BlockfrostClient<HttpClient> {
    /// Create a client from a config
    ///
    /// Fails with a configuration error when no credential can be
    /// resolved or the network root is not a valid URL.
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.base_url()?;
        let transport = HttpClient::from_config(&config)?;
        Ok(Self {
            transport,
            network: config.network,
        })
    }

    /// Create a mainnet client whose credential comes from the environment
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::default())
    }
}

impl<T: Transport> BlockfrostClient<T> {
    /// Create a client over any transport
    pub fn with_transport(transport: T, network: Network) -> Self {
        Self { transport, network }
    }

    /// Network this client queries
    pub fn network(&self) -> &Network {
        &self.network
    }

    /// Root URL of the network
    pub fn base_url(&self) -> &str {
        self.network.base_url()
    }

    /// Transport used for requests
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// GET a single resource
    pub(crate) async fn get(&self, path: &str) -> Result<JsonValue> {
        let url = urls::full_url(self.base_url(), path);
        self.transport.get_json(&url).await
    }

    /// GET every page of a list resource
    pub(crate) async fn get_pages(
        &self,
        operation: &str,
        path: &str,
        params: ListParams,
    ) -> Result<Records> {
        let out = Aggregator::new(&self.transport, self.base_url())
            .collect(path, params.order, params.nb_of_results)
            .await?;

        info!(
            operation,
            api_calls = out.api_calls,
            records = out.records.len(),
            "Paged request complete"
        );
        Ok(out.records)
    }
}

impl<T: Transport> std::fmt::Debug for BlockfrostClient<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BlockfrostClient")
            .field("network", &self.network)
            .finish_non_exhaustive()
    }
}
