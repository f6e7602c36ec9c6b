//! Rewards history analysis
//!
//! Joins, epoch by epoch, what an account earned with what it had staked,
//! what the epoch looked like and what its pool looked like.

use super::{BlockfrostClient, ListParams};
use crate::error::{Error, Result};
use crate::http::Transport;
use crate::types::{JsonObject, JsonValue, Records};

const REWARDS_AMOUNT: &str = "rewards_amount";
const STAKE_AMOUNT: &str = "stake_amount";
const EPOCH_PREFIX: &str = "epoch_";
const STAKE_POOL_PREFIX: &str = "stake_pool_";

fn epoch_of(record: &JsonValue, key: &str) -> Option<i64> {
    record.get(key).and_then(JsonValue::as_i64)
}

fn find_by_epoch<'r>(records: &'r [JsonValue], key: &str, epoch: i64) -> Option<&'r JsonObject> {
    records
        .iter()
        .find(|r| epoch_of(r, key) == Some(epoch))
        .and_then(JsonValue::as_object)
}

/// Copy `source` into `row` with every key prefixed, skipping the join key
fn merge_prefixed(row: &mut JsonObject, source: &JsonObject, prefix: &str, join_key: &str) {
    for (key, value) in source {
        if key != join_key {
            row.insert(format!("{prefix}{key}"), value.clone());
        }
    }
}

/// Build one analysis row per reward record
///
/// Rows follow the reward order. Counterparts missing for an epoch add no
/// columns to that row.
pub(crate) fn join_rewards(
    rewards: &[JsonValue],
    amounts: &[JsonValue],
    epochs: &[JsonValue],
    pool_history: &[JsonValue],
) -> Result<Records> {
    rewards
        .iter()
        .map(|reward| {
            let epoch = epoch_of(reward, "epoch")
                .ok_or_else(|| Error::decode(format!("Reward record has no epoch: {reward}")))?;

            let mut row = JsonObject::new();
            row.insert("epoch".into(), epoch.into());
            row.insert(
                REWARDS_AMOUNT.into(),
                reward.get("amount").cloned().unwrap_or(JsonValue::Null),
            );

            if let Some(stake) = find_by_epoch(amounts, "active_epoch", epoch) {
                for (key, value) in stake {
                    match key.as_str() {
                        "active_epoch" => {}
                        "amount" => {
                            row.insert(STAKE_AMOUNT.into(), value.clone());
                        }
                        _ => {
                            row.insert(key.clone(), value.clone());
                        }
                    }
                }
            }
            if let Some(info) = find_by_epoch(epochs, "epoch", epoch) {
                merge_prefixed(&mut row, info, EPOCH_PREFIX, "epoch");
            }
            if let Some(pool) = find_by_epoch(pool_history, "epoch", epoch) {
                merge_prefixed(&mut row, pool, STAKE_POOL_PREFIX, "epoch");
            }

            Ok(JsonValue::Object(row))
        })
        .collect()
}

impl<T: Transport> BlockfrostClient<T> {
    /// Per-epoch explanatory variables of an account's rewards
    ///
    /// Pool history comes from the pool of the first reward record.
    pub async fn rewards_history_analysis(&self, stake_address: &str) -> Result<Records> {
        let rewards = self
            .stake_reward_history(stake_address, ListParams::all())
            .await?;
        let Some(first) = rewards.first() else {
            return Ok(Vec::new());
        };

        let pool_id = first
            .get("pool_id")
            .and_then(JsonValue::as_str)
            .ok_or_else(|| Error::decode("Reward record has no pool_id"))?
            .to_string();
        let reward_epochs = rewards
            .iter()
            .map(|r| {
                epoch_of(r, "epoch")
                    .ok_or_else(|| Error::decode(format!("Reward record has no epoch: {r}")))
            })
            .collect::<Result<Vec<_>>>()?;

        let amounts = self
            .stake_amount_history(stake_address, ListParams::all())
            .await?;
        let pool_history = self
            .stake_pool_history(&pool_id, ListParams::all())
            .await?;
        let epochs = self.epochs_history(&reward_epochs).await?;

        join_rewards(&rewards, &amounts, &epochs, &pool_history)
    }
}
