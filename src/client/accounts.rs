//! Account (stake address) resources

use super::{BlockfrostClient, ListParams};
use crate::error::Result;
use crate::http::Transport;
use crate::types::{JsonValue, Records};
use crate::urls::{self, resource_path};

impl<T: Transport> BlockfrostClient<T> {
    /// Information about a stake account
    pub async fn stake_informations(&self, stake_address: &str) -> Result<JsonValue> {
        self.get(&resource_path(urls::STAKE, stake_address, ""))
            .await
    }

    /// Reward history of a stake account
    pub async fn stake_reward_history(
        &self,
        stake_address: &str,
        params: ListParams,
    ) -> Result<Records> {
        let path = resource_path(urls::STAKE, stake_address, urls::STAKE_REWARDS);
        self.get_pages("stake_reward_history", &path, params).await
    }

    /// Active stake amount per epoch
    pub async fn stake_amount_history(
        &self,
        stake_address: &str,
        params: ListParams,
    ) -> Result<Records> {
        let path = resource_path(urls::STAKE, stake_address, urls::STAKE_AMOUNT_HISTORY);
        self.get_pages("stake_amount_history", &path, params).await
    }

    /// Delegation history
    pub async fn stake_delegation(
        &self,
        stake_address: &str,
        params: ListParams,
    ) -> Result<Records> {
        let path = resource_path(urls::STAKE, stake_address, urls::STAKE_DELEGATIONS);
        self.get_pages("stake_delegation", &path, params).await
    }

    /// Registrations and deregistrations of the account
    pub async fn stake_registration_deregistrations(
        &self,
        stake_address: &str,
        params: ListParams,
    ) -> Result<Records> {
        let path = resource_path(urls::STAKE, stake_address, urls::STAKE_REGISTRATIONS);
        self.get_pages("stake_registration_deregistrations", &path, params)
            .await
    }

    /// Withdrawal history
    pub async fn stake_withdrawal_history(
        &self,
        stake_address: &str,
        params: ListParams,
    ) -> Result<Records> {
        let path = resource_path(urls::STAKE, stake_address, urls::STAKE_WITHDRAWALS);
        self.get_pages("stake_withdrawal_history", &path, params)
            .await
    }

    /// MIR (move instantaneous rewards) history
    pub async fn stake_mir_history(
        &self,
        stake_address: &str,
        params: ListParams,
    ) -> Result<Records> {
        let path = resource_path(urls::STAKE, stake_address, urls::STAKE_MIRS);
        self.get_pages("stake_mir_history", &path, params).await
    }

    /// Addresses associated with the account
    pub async fn stake_associated_addresses(
        &self,
        stake_address: &str,
        params: ListParams,
    ) -> Result<Records> {
        let path = resource_path(urls::STAKE, stake_address, urls::STAKE_ADDRESSES);
        self.get_pages("stake_associated_addresses", &path, params)
            .await
    }

    /// Assets held by the addresses associated with the account
    pub async fn stake_assets_associated_addresses(
        &self,
        stake_address: &str,
        params: ListParams,
    ) -> Result<Records> {
        let path = resource_path(urls::STAKE, stake_address, urls::STAKE_ADDRESSES_ASSETS);
        self.get_pages("stake_assets_associated_addresses", &path, params)
            .await
    }
}
