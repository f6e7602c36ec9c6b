// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]

//! # Cardano Explorer
//!
//! A client for the Blockfrost Cardano API that turns its paged REST
//! resources into plain collections.
//!
//! ## Features
//!
//! - **Full resource map**: Accounts, addresses, epochs, pools, assets, transactions, scripts
//! - **Page aggregation**: Sequential page fetches with result budgets and sort order
//! - **Validation**: Result budgets and epoch ranges checked before any request
//! - **Asset metadata**: Flattened on-chain metadata, bulk lookups per policy
//! - **Arrow Output**: Optional tabular view as Arrow RecordBatch or Parquet file
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use cardano_explorer::{BlockfrostClient, ClientConfig, ListParams, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = BlockfrostClient::new(ClientConfig::builder().api_key("mainnet...").build())?;
//!
//!     let epoch = client.latest_epoch().await?;
//!     let rewards = client
//!         .stake_reward_history("stake1...", ListParams::first(300).descending())
//!         .await?;
//!
//!     let table = cardano_explorer::output::records_to_table(&rewards)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                     BlockfrostClient                       │
//! │  accounts  addresses  epochs  pools  assets  txs  scripts  │
//! └────────────────────────────────────────────────────────────┘
//!                              │
//! ┌──────────┬─────────────────┴──┬──────────────┬────────────┐
//! │   URLs   │    Pagination      │  Transport   │   Output   │
//! ├──────────┼────────────────────┼──────────────┼────────────┤
//! │ Paths    │ Result budget      │ project_id   │ Arrow      │
//! │ Suffixes │ ?page=n&order=desc │ Proxies      │ Parquet    │
//! └──────────┴────────────────────┴──────────────┴────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Client configuration
pub mod config;

/// HTTP transport
pub mod http;

/// Resource paths
pub mod urls;

/// Page aggregation
pub mod pagination;

/// Record transforms
pub mod transform;

/// Blockfrost API client
pub mod client;

/// Arrow/Parquet output
pub mod output;

/// cnft.io verified policy registry
pub mod cnft;

/// Command-line interface
pub mod cli;

#[cfg(test)]
mod test_support;

// ============================================================================
// Re-exports
// ============================================================================

pub use client::{BlockfrostClient, ListParams, PolicyAssets};
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use types::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
