use std::path::PathBuf;

use thiserror::Error;

/// Failures of the order-response pipeline. All of them surface to the
/// caller as server errors.
#[derive(Debug, Error)]
pub enum EmulatorError {
    #[error("coupon catalog is empty")]
    EmptyCatalog,
    #[error("invalid catalog entry for coupon {coupon_id}: {reason}")]
    InvalidCatalogEntry { coupon_id: i64, reason: String },
    #[error("order index {index} out of bounds for {len} requested order ids")]
    OrderIndexOutOfBounds { index: usize, len: usize },
    #[error("requested {requested} orders, at most {max} can be synthesized")]
    LimitTooLarge { requested: usize, max: usize },
    #[error("order number overflows when offsetting {from} by {index}")]
    OrderNumberOverflow { from: i64, index: usize },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("minimum delay must not be negative, got {0} ms")]
    NegativeMinDelay(i64),
    #[error("maximum delay must not exceed {limit} ms, got {got} ms")]
    MaxDelayTooLarge { got: i64, limit: i64 },
    #[error("minimum delay {min} ms exceeds maximum delay {max} ms")]
    InvertedDelayBounds { min: i64, max: i64 },
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse catalog {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
