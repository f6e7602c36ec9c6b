//! CLI module
//!
//! Command-line interface over the Blockfrost client.
//!
//! # Commands
//!
//! - `network`, `epoch`, `epochs` - Network and epoch lookups
//! - `stake`, `address` - Account and address resources
//! - `pool`, `pools` - Stake pools
//! - `asset`, `policy` - Native assets
//! - `tx`, `script`, `scripts` - Transactions and scripts
//! - `rewards-analysis` - Per-epoch rewards with their context
//! - `cnft` - cnft.io verified projects

mod commands;
mod runner;

pub use commands::{
    AddressView, AssetView, Cli, CnftAction, Commands, OutputFormat, StakeView, TxView,
};
pub use runner::Runner;
