//! Pagination types
//!
//! Defines the result budget and the page query string.

use crate::error::{Error, Result};
use crate::types::Order;

/// Number of records the API returns per page
pub const PAGE_SIZE: u32 = 100;

/// How many records a paged call may return
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResultBudget {
    /// Fetch pages until the first empty one
    #[default]
    All,
    /// Fetch at most this many pages
    Pages(u32),
}

impl ResultBudget {
    /// Validate a requested number of results
    ///
    /// `None` means everything. Otherwise the number must be a strictly
    /// positive multiple of [`PAGE_SIZE`].
    pub fn from_nb_results(nb_of_results: Option<u32>) -> Result<Self> {
        match nb_of_results {
            None => Ok(Self::All),
            Some(0) => Err(Error::invalid_argument(format!(
                "nb_of_results (0) can't be zero, it should be a multiple of {PAGE_SIZE} \
                 or None to get all the data available"
            ))),
            Some(n) if n % PAGE_SIZE != 0 => Err(Error::invalid_argument(format!(
                "nb_of_results ({n}) should be a multiple of {PAGE_SIZE} \
                 or None to get all the data available"
            ))),
            Some(n) => Ok(Self::Pages(n / PAGE_SIZE)),
        }
    }

    /// Last page to fetch, 0 when unbounded
    pub fn last_page(self) -> u32 {
        match self {
            Self::All => 0,
            Self::Pages(n) => n,
        }
    }

    /// Check if the budget is unbounded
    pub fn is_unbounded(self) -> bool {
        matches!(self, Self::All)
    }

    /// Check if `page` (1-based) may still be requested
    pub fn allows(self, page: u32) -> bool {
        match self {
            Self::All => true,
            Self::Pages(last) => page <= last,
        }
    }
}

/// Validate a requested number of results
///
/// Returns the last page to request (0 for all) and whether all the
/// data should be fetched.
pub fn nb_results_to_return(nb_of_results: Option<u32>) -> Result<(u32, bool)> {
    let budget = ResultBudget::from_nb_results(nb_of_results)?;
    Ok((budget.last_page(), budget.is_unbounded()))
}

/// A single page of a list resource
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Page number, starting at 1
    pub page: u32,
    /// Sort order
    pub order: Order,
}

impl PageRequest {
    /// Create a new page request
    pub fn new(page: u32, order: Order) -> Self {
        Self { page, order }
    }

    /// Render the query string for this page
    pub fn query_string(&self) -> String {
        set_query_string_parameter(self.page, self.order)
    }

    /// Full URL of this page
    pub fn url(&self, base: &str, path: &str) -> String {
        format!("{base}{path}{}", self.query_string())
    }
}

/// Build the paging query string
///
/// Ascending order keeps an empty segment after the `&`
/// (`?page=1&`), descending appends `order=desc`.
pub fn set_query_string_parameter(page: u32, order: Order) -> String {
    let order_parameter = if order.is_desc() { "order=desc" } else { "" };
    format!("?page={page}&{order_parameter}")
}
