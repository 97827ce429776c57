use thiserror::Error;

/// Error type for number-based selection lookups.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("number {number} is out of range (valid: 1..={total})")]
    OutOfRange { number: usize, total: usize },
}

/// Error type that captures configuration load/save failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
