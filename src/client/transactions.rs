//! Transaction resources
//!
//! All single lookups under `txs/{hash}`.

use super::BlockfrostClient;
use crate::error::Result;
use crate::http::Transport;
use crate::types::JsonValue;
use crate::urls::{self, resource_path};

impl<T: Transport> BlockfrostClient<T> {
    async fn tx_resource(&self, hash: &str, suffix: &str) -> Result<JsonValue> {
        self.get(&resource_path(urls::TX, hash, suffix)).await
    }

    /// One transaction
    pub async fn specific_tx(&self, hash: &str) -> Result<JsonValue> {
        self.tx_resource(hash, "").await
    }

    /// Inputs and outputs of a transaction
    pub async fn tx_utxos(&self, hash: &str) -> Result<JsonValue> {
        self.tx_resource(hash, urls::TX_UTXOS).await
    }

    /// Stake address certificates
    pub async fn tx_stake_address_certificates(&self, hash: &str) -> Result<JsonValue> {
        self.tx_resource(hash, urls::TX_STAKES).await
    }

    /// Delegation certificates
    pub async fn tx_delegation_certificates(&self, hash: &str) -> Result<JsonValue> {
        self.tx_resource(hash, urls::TX_DELEGATIONS).await
    }

    /// Reward withdrawals
    pub async fn tx_withdrawals(&self, hash: &str) -> Result<JsonValue> {
        self.tx_resource(hash, urls::TX_WITHDRAWALS).await
    }

    /// MIR certificates
    pub async fn tx_mirs(&self, hash: &str) -> Result<JsonValue> {
        self.tx_resource(hash, urls::TX_MIRS).await
    }

    /// Stake pool registration and update certificates
    pub async fn tx_pool_updates(&self, hash: &str) -> Result<JsonValue> {
        self.tx_resource(hash, urls::TX_POOL_UPDATES).await
    }

    /// Stake pool retirement certificates
    pub async fn tx_pool_retirements(&self, hash: &str) -> Result<JsonValue> {
        self.tx_resource(hash, urls::TX_POOL_RETIRES).await
    }

    /// Metadata as JSON
    pub async fn tx_metadata(&self, hash: &str) -> Result<JsonValue> {
        self.tx_resource(hash, urls::TX_METADATA).await
    }

    /// Metadata as CBOR
    pub async fn tx_cbor_metadata(&self, hash: &str) -> Result<JsonValue> {
        self.tx_resource(hash, urls::TX_METADATA_CBOR).await
    }

    /// Redeemers of a transaction
    pub async fn tx_redeemers(&self, hash: &str) -> Result<JsonValue> {
        self.tx_resource(hash, urls::TX_REDEEMERS).await
    }
}
