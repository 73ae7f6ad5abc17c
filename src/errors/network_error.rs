//! Error types shared by the network core and its I/O shell.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, NetworkError>;

/// Errors that can occur while configuring, training or querying a network.
#[derive(Debug, Error)]
pub enum NetworkError {
    /// `predict` was called before any successful `train`.
    #[error("network is not trained: weights and biases are unset")]
    UninitializedModel,

    /// A reduction helper was asked for an axis other than 0 (rows) or 1 (columns).
    #[error("invalid reduction axis {0}: expected 0 or 1")]
    InvalidReductionAxis(usize),

    #[error("shape mismatch in {context}: expected {expected}, got {actual}")]
    ShapeMismatch {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("invalid network configuration: {0}")]
    InvalidConfig(String),

    #[error("invalid dataset: {0}")]
    Data(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
