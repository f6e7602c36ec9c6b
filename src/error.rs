//! Error types for cardano-explorer
//!
//! This module defines the error hierarchy for the entire crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for cardano-explorer
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    /// Invalid client setup: credentials, network root or proxies
    #[error("Configuration error: {message}")]
    Config { message: String },

    // ============================================================================
    // Argument Errors
    // ============================================================================
    /// Caller input rejected before any request
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    // ============================================================================
    // Remote Errors
    // ============================================================================
    /// The API answered with an error, or could not be reached
    #[error("[ERROR {}] {error} ({url}). {message}", status_label(.status))]
    RemoteRequestFailed {
        /// Requested URL
        url: String,
        /// HTTP status, `None` for transport failures
        status: Option<u16>,
        /// Short error title
        error: String,
        /// Detail message
        message: String,
    },

    // ============================================================================
    // Data Processing Errors
    // ============================================================================
    /// JSON parse failure
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// Response body did not have the expected shape
    #[error("Failed to decode response: {message}")]
    Decode { message: String },

    // ============================================================================
    // Arrow/Parquet Errors
    // ============================================================================
    /// Arrow failure
    #[error("Arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    /// Parquet failure
    #[error("Parquet error: {0}")]
    Parquet(#[from] parquet::errors::ParquetError),

    /// Table or file output failed
    #[error("Output error: {message}")]
    Output { message: String },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    /// I/O failure
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    /// Anything else
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a remote request error
    pub fn remote(
        url: impl Into<String>,
        status: Option<u16>,
        error: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::RemoteRequestFailed {
            url: url.into(),
            status,
            error: error.into(),
            message: message.into(),
        }
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Create an output error
    pub fn output(message: impl Into<String>) -> Self {
        Self::Output {
            message: message.into(),
        }
    }

    /// HTTP status of a failed remote request, if the server answered
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::RemoteRequestFailed { status, .. } => *status,
            _ => None,
        }
    }

    /// Check if this error is the remote service reporting a missing resource
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

fn status_label(status: &Option<u16>) -> String {
    status.map_or_else(|| "transport".to_string(), |s| s.to_string())
}

/// Result type alias for cardano-explorer
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}
