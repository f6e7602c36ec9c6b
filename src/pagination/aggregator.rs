//! Page aggregation
//!
//! Drives sequential GET calls against a paged resource and appends
//! each page's records to one collection.

use super::types::{PageRequest, ResultBudget};
use crate::error::{Error, Result};
use crate::http::Transport;
use crate::types::{JsonValue, Order, Records};
use tracing::debug;

/// Records of a paged resource plus the number of requests it took
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Aggregated {
    /// Records in page order, then in-page order
    pub records: Records,
    /// Number of GET requests issued
    pub api_calls: u32,
}

/// Fetches every page of a list resource
pub struct Aggregator<'a, T: Transport + ?Sized> {
    transport: &'a T,
    base_url: &'a str,
}

impl<'a, T: Transport + ?Sized> Aggregator<'a, T> {
    /// Create an aggregator over a transport and a network root
    pub fn new(transport: &'a T, base_url: &'a str) -> Self {
        Self {
            transport,
            base_url,
        }
    }

    /// Fetch `path` page by page
    ///
    /// Stops at the first empty page, or once the page budget derived
    /// from `nb_of_results` is used up. The budget is validated before
    /// any request is made. Any failed request aborts the whole call.
    pub async fn collect(
        &self,
        path: &str,
        order: Order,
        nb_of_results: Option<u32>,
    ) -> Result<Aggregated> {
        let budget = ResultBudget::from_nb_results(nb_of_results)?;

        let mut out = Aggregated::default();
        let mut page = 0u32;

        loop {
            page += 1;
            if !budget.allows(page) {
                break;
            }

            let url = PageRequest::new(page, order).url(self.base_url, path);
            debug!(page, url = %url, "Fetching page");

            let body = self.transport.get_json(&url).await?;
            out.api_calls += 1;

            match body {
                JsonValue::Array(items) if items.is_empty() => break,
                JsonValue::Null => break,
                JsonValue::Array(items) => out.records.extend(items),
                other => {
                    return Err(Error::decode(format!(
                        "Expected a JSON array from {url}, got {}",
                        kind_of(&other)
                    )))
                }
            }
        }

        Ok(out)
    }
}

fn kind_of(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}
