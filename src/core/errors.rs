use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by order loading, configuration and batch execution
#[derive(Error, Debug)]
pub enum SimError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed order data in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("order #{index} is invalid: {reason}")]
    InvalidOrder { index: usize, reason: String },

    #[error("duplicate order id {0}")]
    DuplicateOrderId(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to build thread pool: {0}")]
    ThreadPool(String),
}
