//! CLI commands and argument parsing

use crate::types::{Network, Order};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing::Level;

/// Cardano blockchain explorer over the Blockfrost API
#[derive(Parser, Debug)]
#[command(name = "cardano-explorer")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Blockfrost project id
    #[arg(long, global = true, env = "BLOCKFROST_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Network: mainnet, testnet or local
    #[arg(short, long, global = true, default_value = "mainnet")]
    pub network: Network,

    /// Custom API root, overrides --network
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Proxy for http:// requests
    #[arg(long, global = true)]
    pub proxy_http: Option<String>,

    /// Proxy for https:// requests
    #[arg(long, global = true)]
    pub proxy_https: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Sort order of paged results
    #[arg(long, global = true, default_value = "asc")]
    pub order: Order,

    /// Maximum number of paged results (multiple of 100, all when unset)
    #[arg(short, long, global = true)]
    pub results: Option<u32>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value = "json")]
    pub format: OutputFormat,

    /// Output file (stdout when unset, required for parquet)
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// Verbose output (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Resource to query
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Log level for the run: DEBUG with --verbose, INFO otherwise
    pub fn log_level(&self) -> Level {
        if self.verbose {
            Level::DEBUG
        } else {
            Level::INFO
        }
    }
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Network supply and stake
    Network,

    /// Latest epoch, or one epoch by number
    Epoch {
        /// Epoch number, latest when unset
        #[arg(allow_negative_numbers = true)]
        epoch: Option<i64>,

        /// Protocol parameters of the latest epoch
        #[arg(long, conflicts_with = "epoch")]
        parameters: bool,
    },

    /// Several past epochs
    Epochs {
        /// Past epoch numbers
        #[arg(required = true, allow_negative_numbers = true)]
        epochs: Vec<i64>,
    },

    /// Stake account resources
    Stake {
        /// Stake address (stake1...)
        stake_address: String,

        #[arg(value_enum, default_value = "info")]
        view: StakeView,
    },

    /// Address resources
    Address {
        /// Bech32 address
        address: String,

        #[arg(value_enum, default_value = "info")]
        view: AddressView,
    },

    /// One stake pool
    Pool {
        /// Pool id, bech32 or hex
        pool_id: String,

        /// Parameter history over epochs
        #[arg(long)]
        history: bool,
    },

    /// Registered stake pool ids
    Pools,

    /// Native asset resources
    Asset {
        /// Policy id followed by the hex asset name
        asset: String,

        #[arg(value_enum, default_value = "info")]
        view: AssetView,
    },

    /// Assets minted under a policy
    Policy {
        /// Minting policy id
        policy_id: String,

        /// Fetch flattened metadata of every asset
        #[arg(long)]
        metadata: bool,
    },

    /// Transaction resources
    Tx {
        /// Transaction hash
        hash: String,

        #[arg(value_enum, default_value = "info")]
        view: TxView,
    },

    /// One script
    Script {
        /// Script hash
        script_hash: String,

        /// Redeemers of the script
        #[arg(long)]
        redeemers: bool,
    },

    /// Script hashes
    Scripts,

    /// Per-epoch rewards of a stake account with their context
    RewardsAnalysis {
        /// Stake address (stake1...)
        stake_address: String,
    },

    /// cnft.io verified projects
    Cnft {
        /// Registry root (GitHub contents API directory)
        #[arg(long)]
        registry_url: Option<String>,

        #[command(subcommand)]
        action: CnftAction,
    },
}

/// Registry actions
#[derive(Subcommand, Debug)]
pub enum CnftAction {
    /// List verified projects
    List,
    /// Whether a project is verified
    Exists {
        /// Project name as listed in the registry
        project: String,
    },
    /// Verified policy ids of a project
    Policies {
        /// Project name as listed in the registry
        project: String,
    },
    /// Whether a policy id belongs to a project
    Check {
        /// Minting policy id
        policy_id: String,
        /// Project name as listed in the registry
        project: String,
    },
    /// Registry entry of a project
    Info {
        /// Project name as listed in the registry
        project: String,
    },
}

/// Stake account resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StakeView {
    /// Account summary
    Info,
    /// Reward history
    Rewards,
    /// Active stake history
    History,
    /// Delegation history
    Delegations,
    /// Registration history
    Registrations,
    /// Withdrawal history
    Withdrawals,
    /// MIR history
    Mirs,
    /// Associated addresses
    Addresses,
    /// Assets held by associated addresses
    Assets,
}

/// Address resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AddressView {
    /// Address summary
    Info,
    /// Lifetime totals
    Total,
    /// Unspent outputs
    Utxos,
    /// Transactions
    Transactions,
}

/// Asset resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AssetView {
    /// Asset details with flattened metadata
    Info,
    /// Mint and burn history
    History,
    /// Transactions
    Transactions,
    /// Holding addresses
    Addresses,
}

/// Transaction resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TxView {
    /// Transaction details
    Info,
    /// Inputs and outputs
    Utxos,
    /// Stake address certificates
    Stakes,
    /// Delegation certificates
    Delegations,
    /// Reward withdrawals
    Withdrawals,
    /// MIR certificates
    Mirs,
    /// Pool update certificates
    PoolUpdates,
    /// Pool retirement certificates
    PoolRetires,
    /// Metadata as JSON
    Metadata,
    /// Metadata as CBOR
    MetadataCbor,
    /// Redeemers
    Redeemers,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Compact JSON
    Json,
    /// Indented JSON
    Pretty,
    /// Parquet file (needs --output)
    Parquet,
}
