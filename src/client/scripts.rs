//! Script resources

use super::{BlockfrostClient, ListParams};
use crate::error::Result;
use crate::http::Transport;
use crate::types::{JsonValue, Records};
use crate::urls::{self, resource_path};

impl<T: Transport> BlockfrostClient<T> {
    /// Script hashes
    pub async fn scripts_list(&self, params: ListParams) -> Result<Records> {
        self.get_pages("scripts_list", urls::SCRIPTS, params).await
    }

    /// One script by hash
    pub async fn specific_script(&self, script_hash: &str) -> Result<JsonValue> {
        self.get(&resource_path(urls::SCRIPT, script_hash, "")).await
    }

    /// Redeemers of a script
    pub async fn script_redeemers(&self, script_hash: &str, params: ListParams) -> Result<Records> {
        let path = resource_path(urls::SCRIPT, script_hash, urls::SCRIPT_REDEEMERS);
        self.get_pages("script_redeemers", &path, params).await
    }
}
