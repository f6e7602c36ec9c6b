//! Address and network resources

use super::{BlockfrostClient, ListParams};
use crate::error::Result;
use crate::http::Transport;
use crate::types::{JsonValue, Records};
use crate::urls::{self, resource_path};

impl<T: Transport> BlockfrostClient<T> {
    /// Information about an address
    pub async fn address_info(&self, address: &str) -> Result<JsonValue> {
        self.get(&resource_path(urls::ADDRESS, address, "")).await
    }

    /// Totals received and sent by an address
    pub async fn address_details(&self, address: &str) -> Result<JsonValue> {
        self.get(&resource_path(urls::ADDRESS, address, urls::ADDRESS_TOTAL))
            .await
    }

    /// Unspent outputs of an address
    pub async fn address_utxos(&self, address: &str, params: ListParams) -> Result<Records> {
        let path = resource_path(urls::ADDRESS, address, urls::ADDRESS_UTXOS);
        self.get_pages("address_utxos", &path, params).await
    }

    /// Transactions involving an address
    pub async fn address_transactions(
        &self,
        address: &str,
        params: ListParams,
    ) -> Result<Records> {
        let path = resource_path(urls::ADDRESS, address, urls::ADDRESS_TRANSACTIONS);
        self.get_pages("address_transactions", &path, params).await
    }

    /// Detailed network information (supply, stake)
    pub async fn network_info(&self) -> Result<JsonValue> {
        self.get(urls::NETWORK).await
    }
}
