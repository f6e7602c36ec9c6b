//! Native asset resources

use super::{BlockfrostClient, ListParams};
use crate::error::{Error, Result};
use crate::http::Transport;
use crate::transform::{process_onchain_metadata, readable_asset_name};
use crate::types::{JsonObject, JsonValue, Records};
use crate::urls::{self, resource_path};
use tracing::{info, warn};

/// Metadata of every asset minted under one policy
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PolicyAssets {
    /// Flattened asset records, in policy listing order
    pub assets: Vec<JsonObject>,
    /// Readable names of the assets the API could not find
    pub not_found: Vec<String>,
}

impl<T: Transport> BlockfrostClient<T> {
    /// All assets
    pub async fn assets(&self, params: ListParams) -> Result<Records> {
        self.get_pages("assets", urls::ASSETS, params).await
    }

    /// One asset by identifier (policy id + hex name)
    pub async fn specific_asset(&self, asset: &str) -> Result<JsonValue> {
        self.get(&resource_path(urls::ASSETS, asset, "")).await
    }

    /// Mint and burn history of an asset
    pub async fn asset_history(&self, asset: &str, params: ListParams) -> Result<Records> {
        let path = resource_path(urls::ASSETS, asset, urls::ASSET_HISTORY);
        self.get_pages("asset_history", &path, params).await
    }

    /// Transactions involving an asset
    pub async fn asset_transactions(&self, asset: &str, params: ListParams) -> Result<Records> {
        let path = resource_path(urls::ASSETS, asset, urls::ASSET_TRANSACTIONS);
        self.get_pages("asset_transactions", &path, params).await
    }

    /// Addresses holding an asset
    pub async fn asset_addresses(&self, asset: &str, params: ListParams) -> Result<Records> {
        let path = resource_path(urls::ASSETS, asset, urls::ASSET_ADDRESSES);
        self.get_pages("asset_addresses", &path, params).await
    }

    /// Assets minted under a policy
    pub async fn assets_policy(&self, policy_id: &str, params: ListParams) -> Result<Records> {
        let path = resource_path(urls::ASSETS, urls::ASSETS_POLICY, policy_id);
        self.get_pages("assets_policy", &path, params).await
    }

    /// Flattened metadata of every asset minted under a policy
    ///
    /// Assets the API reports as not found are collected by readable name
    /// and skipped. Any other failure aborts the batch.
    pub async fn assets_policy_informations(
        &self,
        policy_id: &str,
        nb_of_results: Option<u32>,
    ) -> Result<PolicyAssets> {
        let params = ListParams {
            nb_of_results,
            ..ListParams::all()
        };
        let listing = self.assets_policy(policy_id, params).await?;

        let mut out = PolicyAssets::default();
        for entry in &listing {
            let asset = entry
                .get("asset")
                .and_then(JsonValue::as_str)
                .ok_or_else(|| Error::decode(format!("Policy listing entry has no asset: {entry}")))?;

            match self.specific_asset(asset).await {
                Ok(JsonValue::Object(record)) => {
                    out.assets.push(process_onchain_metadata(&record));
                }
                Ok(other) => {
                    return Err(Error::decode(format!(
                        "Expected an asset object for {asset}, got {other}"
                    )))
                }
                Err(e) if e.is_not_found() => {
                    let name = readable_asset_name(asset, policy_id);
                    warn!(asset = %name, "Asset not found");
                    out.not_found.push(name);
                }
                Err(e) => return Err(e),
            }
        }

        info!(
            operation = "assets_policy_informations",
            assets = out.assets.len(),
            not_found = out.not_found.len(),
            "Asset lookups complete"
        );
        Ok(out)
    }
}
