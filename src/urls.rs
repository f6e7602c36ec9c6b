//! Resource paths of the Blockfrost API
//!
//! Paths are joined left to right without separator normalization:
//! the prefixes carry their trailing `/`, the suffixes their leading `/`.

// Accounts
/// Stake account prefix
pub const STAKE: &str = "accounts/";
/// Reward history
pub const STAKE_REWARDS: &str = "/rewards";
/// Active stake history
pub const STAKE_AMOUNT_HISTORY: &str = "/history";
/// Delegation history
pub const STAKE_DELEGATIONS: &str = "/delegations";
/// Registrations and deregistrations
pub const STAKE_REGISTRATIONS: &str = "/registrations";
/// Withdrawal history
pub const STAKE_WITHDRAWALS: &str = "/withdrawals";
/// MIR history
pub const STAKE_MIRS: &str = "/mirs";
/// Addresses of an account
pub const STAKE_ADDRESSES: &str = "/addresses";
/// Assets held by the addresses of an account
pub const STAKE_ADDRESSES_ASSETS: &str = "/addresses/assets";

// Addresses
/// Address prefix
pub const ADDRESS: &str = "addresses/";
/// Lifetime totals of an address
pub const ADDRESS_TOTAL: &str = "/total";
/// Unspent outputs of an address
pub const ADDRESS_UTXOS: &str = "/utxos";
/// Transactions of an address
pub const ADDRESS_TRANSACTIONS: &str = "/transactions";

// Network
/// Network information
pub const NETWORK: &str = "network";

// Epochs
/// Epoch prefix
pub const EPOCH: &str = "epochs/";
/// Latest epoch
pub const LATEST_EPOCH: &str = "epochs/latest";
/// Protocol parameters of the latest epoch
pub const LATEST_EPOCH_PARAMETERS: &str = "epochs/latest/parameters";

// Pools
/// Stake pool prefix, also the pool list
pub const POOLS: &str = "pools/";
/// Per-epoch history of a pool
pub const POOL_HISTORY: &str = "/history";

// Assets
/// Asset prefix, also the asset list
pub const ASSETS: &str = "assets/";
/// Mint and burn history
pub const ASSET_HISTORY: &str = "/history";
/// Transactions involving an asset
pub const ASSET_TRANSACTIONS: &str = "/transactions";
/// Addresses holding an asset
pub const ASSET_ADDRESSES: &str = "/addresses";
/// Policy segment under the asset prefix
pub const ASSETS_POLICY: &str = "policy/";

// Transactions
/// Transaction prefix
pub const TX: &str = "txs/";
/// Inputs and outputs
pub const TX_UTXOS: &str = "/utxos";
/// Stake address certificates
pub const TX_STAKES: &str = "/stakes";
/// Delegation certificates
pub const TX_DELEGATIONS: &str = "/delegations";
/// Reward withdrawals
pub const TX_WITHDRAWALS: &str = "/withdrawals";
/// MIR certificates
pub const TX_MIRS: &str = "/mirs";
/// Pool update certificates
pub const TX_POOL_UPDATES: &str = "/pool_updates";
/// Pool retirement certificates
pub const TX_POOL_RETIRES: &str = "/pool_retires";
/// Metadata as JSON
pub const TX_METADATA: &str = "/metadata";
/// Metadata as CBOR
pub const TX_METADATA_CBOR: &str = "/metadata/cbor";
/// Redeemers of a transaction
pub const TX_REDEEMERS: &str = "/redeemers";

// Scripts
/// Script list
pub const SCRIPTS: &str = "scripts";
/// Script prefix
pub const SCRIPT: &str = "scripts/";
/// Redeemers of a script
pub const SCRIPT_REDEEMERS: &str = "/redeemers";

/// Compose a resource path: prefix + identifier + suffix
pub fn resource_path(prefix: &str, id: &str, suffix: &str) -> String {
    format!("{prefix}{id}{suffix}")
}

/// Compose a full URL from the network root and a resource path
pub fn full_url(base: &str, path: &str) -> String {
    format!("{base}{path}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MAINNET_URL;

    #[test]
    fn test_resource_path() {
        assert_eq!(
            resource_path(STAKE, "stake1u8uz", STAKE_REWARDS),
            "accounts/stake1u8uz/rewards"
        );
        assert_eq!(resource_path(EPOCH, "287", ""), "epochs/287");
        assert_eq!(
            resource_path(ASSETS, ASSETS_POLICY, "40fa2a"),
            "assets/policy/40fa2a"
        );
    }

    #[test]
    fn test_full_url_does_not_normalize() {
        assert_eq!(
            full_url(MAINNET_URL, LATEST_EPOCH),
            "https://cardano-mainnet.blockfrost.io/api/v0/epochs/latest"
        );
        assert_eq!(full_url("http://h/", "/x"), "http://h//x");
    }
}
