//! Stake pool resources

use super::{BlockfrostClient, ListParams};
use crate::error::{Error, Result};
use crate::http::Transport;
use crate::types::{JsonValue, Records};
use crate::urls::{self, resource_path};

impl<T: Transport> BlockfrostClient<T> {
    /// Ids of the registered stake pools
    pub async fn registered_pools(&self, params: ListParams) -> Result<Vec<String>> {
        let records = self
            .get_pages("registered_pools", urls::POOLS, params)
            .await?;

        records
            .into_iter()
            .map(|record| match record {
                JsonValue::String(id) => Ok(id),
                other => Err(Error::decode(format!("Expected a pool id, got {other}"))),
            })
            .collect()
    }

    /// Information about a stake pool
    pub async fn pool_informations(&self, pool_id: &str) -> Result<JsonValue> {
        self.get(&resource_path(urls::POOLS, pool_id, "")).await
    }

    /// Stake pool parameters over epochs
    pub async fn stake_pool_history(&self, pool_id: &str, params: ListParams) -> Result<Records> {
        let path = resource_path(urls::POOLS, pool_id, urls::POOL_HISTORY);
        self.get_pages("stake_pool_history", &path, params).await
    }
}
