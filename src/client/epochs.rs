//! Epoch resources and epoch number validation

use super::BlockfrostClient;
use crate::error::{Error, Result};
use crate::http::Transport;
use crate::types::{JsonValue, Records};
use crate::urls::{self, resource_path};
use tracing::info;

/// Read a list of epoch numbers out of loosely typed input
///
/// Accepts only a JSON array of integers.
pub fn parse_epochs(value: &JsonValue) -> Result<Vec<i64>> {
    let items = value.as_array().ok_or_else(|| {
        Error::invalid_argument(format!(
            "The parameter 'epochs' should be a list, got {value}"
        ))
    })?;

    items
        .iter()
        .map(|item| {
            item.as_i64().ok_or_else(|| {
                Error::invalid_argument(format!("Epoch '{item}' is not an integer"))
            })
        })
        .collect()
}

fn validate_positive(epochs: &[i64]) -> Result<()> {
    match epochs.iter().find(|&&epoch| epoch <= 0) {
        Some(epoch) => Err(Error::invalid_argument(format!(
            "The number of epoch ({epoch}) must be greater than 0"
        ))),
        None => Ok(()),
    }
}

/// Check a batch of epochs against the current epoch
///
/// Every epoch must satisfy `0 < epoch < current`.
fn validate_epochs(epochs: &[i64], current: i64) -> Result<()> {
    validate_positive(epochs)?;
    for &epoch in epochs {
        if epoch >= current {
            return Err(Error::invalid_argument(format!(
                "The number of epoch ({epoch}) must be lower than the current epoch ({current})"
            )));
        }
    }
    Ok(())
}

impl<T: Transport> BlockfrostClient<T> {
    /// Current epoch
    pub async fn latest_epoch(&self) -> Result<JsonValue> {
        self.get(urls::LATEST_EPOCH).await
    }

    /// Protocol parameters of the current epoch
    pub async fn latest_epoch_protocol_parameters(&self) -> Result<JsonValue> {
        self.get(urls::LATEST_EPOCH_PARAMETERS).await
    }

    /// One epoch by number
    pub async fn specific_epoch(&self, epoch: i64) -> Result<JsonValue> {
        if epoch < 0 {
            return Err(Error::invalid_argument(format!(
                "The number of epoch ({epoch}) can't be negative"
            )));
        }
        self.get(&resource_path(urls::EPOCH, &epoch.to_string(), ""))
            .await
    }

    /// Several past epochs, in input order
    ///
    /// Looks up the current epoch first, then rejects the whole batch if
    /// any epoch is not strictly between 0 and the current epoch.
    pub async fn epochs_history(&self, epochs: &[i64]) -> Result<Records> {
        validate_positive(epochs)?;

        let latest = self.latest_epoch().await?;
        let current = latest
            .get("epoch")
            .and_then(JsonValue::as_i64)
            .ok_or_else(|| Error::decode("Latest epoch response has no 'epoch' number"))?;

        validate_epochs(epochs, current)?;

        let mut history = Vec::with_capacity(epochs.len());
        for &epoch in epochs {
            history.push(self.specific_epoch(epoch).await?);
        }

        info!(
            operation = "epochs_history",
            api_calls = epochs.len() + 1,
            "Epoch lookups complete"
        );
        Ok(history)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_epochs() {
        assert_eq!(parse_epochs(&json!([1, 2, 3])).unwrap(), vec![1, 2, 3]);
        assert!(parse_epochs(&json!([])).unwrap().is_empty());
        assert!(parse_epochs(&json!(5)).is_err());
        assert!(parse_epochs(&json!("1,2")).is_err());
        assert!(parse_epochs(&json!([1, "2"])).is_err());
        assert!(parse_epochs(&json!([1.5])).is_err());
    }

    #[test]
    fn test_validate_epochs_bounds() {
        assert!(validate_epochs(&[1, 299], 300).is_ok());
        assert!(validate_epochs(&[0], 300).is_err());
        assert!(validate_epochs(&[-1], 300).is_err());
        assert!(validate_epochs(&[300], 300).is_err());
        assert!(validate_epochs(&[], 300).is_ok());
    }
}
