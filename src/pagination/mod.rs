//! Pagination module
//!
//! The API serves list resources 100 records at a time behind a
//! `?page=<n>` query parameter. This module turns such a resource into
//! one ordered collection.
//!
//! # Overview
//!
//! - [`ResultBudget`] validates how many records the caller asked for
//! - [`PageRequest`] renders the paging query string
//! - [`Aggregator`] walks the pages until an empty page or the budget

mod aggregator;
mod types;

pub use aggregator::{Aggregated, Aggregator};
pub use types::{
    nb_results_to_return, set_query_string_parameter, PageRequest, ResultBudget, PAGE_SIZE,
};
