//! Output module
//!
//! Optional tabular rendering of API results.
//!
//! # Overview
//!
//! This module provides utilities for:
//! - Inferring Arrow schemas from JSON records
//! - Converting records to Arrow RecordBatches
//! - Writing Parquet files

mod table;
mod writer;

pub use table::{infer_schema, record_to_table, records_to_table, VALUE_COLUMN};
pub use writer::{write_batch_to_parquet, ParquetWriterConfig};
