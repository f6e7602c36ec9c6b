//! CLI runner - executes commands

use crate::cli::commands::{
    AddressView, AssetView, Cli, CnftAction, Commands, OutputFormat, StakeView, TxView,
};
use crate::client::{BlockfrostClient, ListParams};
use crate::cnft::CnftRegistry;
use crate::config::ClientConfig;
use crate::error::{Error, Result, ResultExt};
use crate::http::{HttpClient, Transport};
use crate::output::{record_to_table, write_batch_to_parquet};
use crate::transform::flatten_record;
use crate::types::{JsonValue, Records};
use serde_json::json;
use std::fs;
use std::time::Duration;
use tracing::info;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        if self.cli.format == OutputFormat::Parquet && self.cli.output.is_none() {
            return Err(Error::config("Parquet output needs a file (use --output)"));
        }

        let value = match &self.cli.command {
            Commands::Cnft {
                registry_url,
                action,
            } => {
                let registry = match registry_url {
                    Some(url) => CnftRegistry::with_transport(
                        HttpClient::anonymous(&self.client_config().user_agent)?,
                        url.clone(),
                    ),
                    None => CnftRegistry::new()?,
                };
                cnft(&registry, action).await?
            }
            command => {
                let client = BlockfrostClient::new(self.client_config())?;
                self.query(&client, command).await?
            }
        };

        self.emit(&value)
    }

    /// Build the client config from global flags
    fn client_config(&self) -> ClientConfig {
        let cli = &self.cli;
        let mut builder = ClientConfig::builder().network(cli.network.clone());

        if let Some(url) = &cli.base_url {
            builder = builder.base_url(url.clone());
        }
        if let Some(key) = &cli.api_key {
            builder = builder.api_key(key.clone());
        }
        if let Some(proxy) = &cli.proxy_http {
            builder = builder.http_proxy(proxy.clone());
        }
        if let Some(proxy) = &cli.proxy_https {
            builder = builder.https_proxy(proxy.clone());
        }
        if let Some(secs) = cli.timeout {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        builder.build()
    }

    fn list_params(&self) -> ListParams {
        ListParams {
            order: self.cli.order,
            nb_of_results: self.cli.results,
        }
    }

    /// Run an API subcommand against a client
    async fn query<T: Transport>(
        &self,
        client: &BlockfrostClient<T>,
        command: &Commands,
    ) -> Result<JsonValue> {
        let params = self.list_params();

        let value = match command {
            Commands::Network => client.network_info().await?,

            Commands::Epoch { epoch, parameters } => match epoch {
                Some(epoch) => client.specific_epoch(*epoch).await?,
                None if *parameters => client.latest_epoch_protocol_parameters().await?,
                None => client.latest_epoch().await?,
            },

            Commands::Epochs { epochs } => list(client.epochs_history(epochs).await?),

            Commands::Stake {
                stake_address,
                view,
            } => {
                let stake = stake_address.as_str();
                match view {
                    StakeView::Info => client.stake_informations(stake).await?,
                    StakeView::Rewards => list(client.stake_reward_history(stake, params).await?),
                    StakeView::History => list(client.stake_amount_history(stake, params).await?),
                    StakeView::Delegations => list(client.stake_delegation(stake, params).await?),
                    StakeView::Registrations => list(
                        client
                            .stake_registration_deregistrations(stake, params)
                            .await?,
                    ),
                    StakeView::Withdrawals => {
                        list(client.stake_withdrawal_history(stake, params).await?)
                    }
                    StakeView::Mirs => list(client.stake_mir_history(stake, params).await?),
                    StakeView::Addresses => {
                        list(client.stake_associated_addresses(stake, params).await?)
                    }
                    StakeView::Assets => list(
                        client
                            .stake_assets_associated_addresses(stake, params)
                            .await?,
                    ),
                }
            }

            Commands::Address { address, view } => match view {
                AddressView::Info => client.address_info(address).await?,
                AddressView::Total => client.address_details(address).await?,
                AddressView::Utxos => list(client.address_utxos(address, params).await?),
                AddressView::Transactions => {
                    list(client.address_transactions(address, params).await?)
                }
            },

            Commands::Pool { pool_id, history } => {
                if *history {
                    list(client.stake_pool_history(pool_id, params).await?)
                } else {
                    client.pool_informations(pool_id).await?
                }
            }

            Commands::Pools => json!(client.registered_pools(params).await?),

            Commands::Asset { asset, view } => match view {
                AssetView::Info => flatten_record(&client.specific_asset(asset).await?),
                AssetView::History => list(client.asset_history(asset, params).await?),
                AssetView::Transactions => list(client.asset_transactions(asset, params).await?),
                AssetView::Addresses => list(client.asset_addresses(asset, params).await?),
            },

            Commands::Policy {
                policy_id,
                metadata,
            } => {
                if *metadata {
                    let out = client
                        .assets_policy_informations(policy_id, params.nb_of_results)
                        .await?;
                    json!({"assets": out.assets, "not_found": out.not_found})
                } else {
                    list(client.assets_policy(policy_id, params).await?)
                }
            }

            Commands::Tx { hash, view } => match view {
                TxView::Info => client.specific_tx(hash).await?,
                TxView::Utxos => client.tx_utxos(hash).await?,
                TxView::Stakes => client.tx_stake_address_certificates(hash).await?,
                TxView::Delegations => client.tx_delegation_certificates(hash).await?,
                TxView::Withdrawals => client.tx_withdrawals(hash).await?,
                TxView::Mirs => client.tx_mirs(hash).await?,
                TxView::PoolUpdates => client.tx_pool_updates(hash).await?,
                TxView::PoolRetires => client.tx_pool_retirements(hash).await?,
                TxView::Metadata => client.tx_metadata(hash).await?,
                TxView::MetadataCbor => client.tx_cbor_metadata(hash).await?,
                TxView::Redeemers => client.tx_redeemers(hash).await?,
            },

            Commands::Script {
                script_hash,
                redeemers,
            } => {
                if *redeemers {
                    list(client.script_redeemers(script_hash, params).await?)
                } else {
                    client.specific_script(script_hash).await?
                }
            }

            Commands::Scripts => list(client.scripts_list(params).await?),

            Commands::RewardsAnalysis { stake_address } => {
                list(client.rewards_history_analysis(stake_address).await?)
            }

            Commands::Cnft { .. } => {
                return Err(Error::invalid_argument(
                    "cnft commands do not query the Blockfrost API",
                ))
            }
        };

        Ok(value)
    }

    /// Rows to tabulate for a result
    ///
    /// Policy metadata results are tabulated by their asset records.
    fn table_rows<'v>(&self, value: &'v JsonValue) -> &'v JsonValue {
        match (&self.cli.command, value.get("assets")) {
            (Commands::Policy { metadata: true, .. }, Some(assets)) => assets,
            _ => value,
        }
    }

    /// Print or write a result in the selected format
    fn emit(&self, value: &JsonValue) -> Result<()> {
        let text = match self.cli.format {
            OutputFormat::Parquet => {
                let path = self
                    .cli
                    .output
                    .as_ref()
                    .ok_or_else(|| Error::config("Parquet output needs a file (use --output)"))?;
                let batch = record_to_table(self.table_rows(value))?;
                write_batch_to_parquet(path, &batch, None)?;
                return Ok(());
            }
            OutputFormat::Json => serde_json::to_string(value)?,
            OutputFormat::Pretty => serde_json::to_string_pretty(value)?,
        };

        match &self.cli.output {
            Some(path) => {
                fs::write(path, format!("{text}\n"))
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                info!(path = %path.display(), "Wrote JSON output");
            }
            None => println!("{text}"),
        }
        Ok(())
    }
}

fn list(records: Records) -> JsonValue {
    JsonValue::Array(records)
}

/// Run a registry action
async fn cnft<T: Transport>(registry: &CnftRegistry<T>, action: &CnftAction) -> Result<JsonValue> {
    let value = match action {
        CnftAction::List => list(registry.verified_policies().await?),
        CnftAction::Exists { project } => json!(registry.project_exist(project).await?),
        CnftAction::Policies { project } => json!(registry.get_policy_id(project).await?),
        CnftAction::Check { policy_id, project } => {
            json!(registry.check_policy_id(policy_id, project).await?)
        }
        CnftAction::Info { project } => JsonValue::Object(registry.get_project_info(project).await?),
    };
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{ScriptedTransport, BASE};
    use crate::types::{Network, Order};
    use clap::{CommandFactory, Parser, ValueEnum};
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn runner(args: &[&str]) -> Runner {
        let mut argv = vec!["cardano-explorer"];
        argv.extend_from_slice(args);
        Runner::new(Cli::try_parse_from(argv).unwrap())
    }

    fn scripted(transport: ScriptedTransport) -> BlockfrostClient<ScriptedTransport> {
        BlockfrostClient::with_transport(transport, Network::Custom(BASE.to_string()))
    }

    #[test]
    fn test_client_config_from_flags() {
        let runner = runner(&[
            "--api-key",
            "testnetabc",
            "--network",
            "testnet",
            "--proxy-https",
            "http://proxy.local:3128",
            "--timeout",
            "5",
            "network",
        ]);

        let config = runner.client_config();
        assert_eq!(config.api_key.as_deref(), Some("testnetabc"));
        assert_eq!(config.network, Network::Testnet);
        assert_eq!(config.proxy.https.as_deref(), Some("http://proxy.local:3128"));
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_verbose_flag_lowers_log_level() {
        let quiet = runner(&["network"]);
        assert!(!quiet.cli.verbose);
        assert_eq!(quiet.cli.log_level(), tracing::Level::INFO);

        let verbose = runner(&["-v", "network"]);
        assert!(verbose.cli.verbose);
        assert_eq!(verbose.cli.log_level(), tracing::Level::DEBUG);

        let trailing = runner(&["epochs", "208", "--verbose"]);
        assert_eq!(trailing.cli.log_level(), tracing::Level::DEBUG);
    }

    #[test]
    fn test_command_definition_is_consistent() {
        Cli::command().debug_assert();

        let help = StakeView::Rewards
            .to_possible_value()
            .and_then(|v| v.get_help().map(ToString::to_string));
        assert_eq!(help.as_deref(), Some("Reward history"));
    }

    #[test]
    fn test_base_url_overrides_network() {
        let config = runner(&["--base-url", "http://node.local/api/", "network"]).client_config();
        assert_eq!(config.network, Network::Custom("http://node.local/api/".into()));
    }

    #[test]
    fn test_unknown_network_is_rejected() {
        assert!(Cli::try_parse_from(["cardano-explorer", "--network", "preprod", "network"]).is_err());
    }

    #[tokio::test]
    async fn test_query_uses_global_list_params() {
        let runner = runner(&["--order", "desc", "--results", "100", "pools"]);
        assert_eq!(runner.list_params(), ListParams::first(100).with_order(Order::Desc));

        let client = scripted(ScriptedTransport::new().ok("pools/?page=1&order=desc", json!(["pool1a"])));
        let value = runner.query(&client, &runner.cli.command).await.unwrap();

        assert_eq!(value, json!(["pool1a"]));
        assert_eq!(client.transport().calls(), vec!["pools/?page=1&order=desc"]);
    }

    #[tokio::test]
    async fn test_query_negative_epoch_fails_without_request() {
        let runner = runner(&["epoch", "-1"]);
        let client = scripted(ScriptedTransport::new());

        let err = runner.query(&client, &runner.cli.command).await.unwrap_err();

        assert!(matches!(err, Error::InvalidArgument { .. }));
        assert!(client.transport().calls().is_empty());
    }

    #[tokio::test]
    async fn test_query_asset_info_is_flattened() {
        let runner = runner(&["asset", "abc"]);
        let client = scripted(
            ScriptedTransport::new()
                .ok("assets/abc", json!({"asset": "abc", "onchain_metadata": {"name": "Foo"}})),
        );

        let value = runner.query(&client, &runner.cli.command).await.unwrap();

        assert_eq!(value, json!({"asset": "abc", "name": "Foo"}));
    }

    #[test]
    fn test_emit_json_to_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.json");
        let runner = runner(&["--format", "pretty", "--output", path.to_str().unwrap(), "network"]);

        runner.emit(&json!({"supply": {"max": "45"}})).unwrap();

        let written: JsonValue = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written, json!({"supply": {"max": "45"}}));
    }

    #[test]
    fn test_emit_policy_metadata_as_parquet() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("policy.parquet");
        let runner = runner(&[
            "--format",
            "parquet",
            "--output",
            path.to_str().unwrap(),
            "policy",
            "abc",
            "--metadata",
        ]);
        let value = json!({"assets": [{"asset": "abc01", "name": "A"}], "not_found": ["B"]});

        assert_eq!(runner.table_rows(&value), &json!([{"asset": "abc01", "name": "A"}]));
        runner.emit(&value).unwrap();
        assert!(path.exists());
    }

    #[tokio::test]
    async fn test_parquet_without_output_fails_early() {
        let err = runner(&["--format", "parquet", "network"]).run().await.unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }
}
