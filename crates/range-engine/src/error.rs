//! Error types for range-engine operations.

use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RangeError {
    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Invalid window: dateFrom {from} is after dateTo {to}")]
    InvalidWindow {
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    },
}

/// Convenience alias used throughout range-engine.
pub type Result<T> = std::result::Result<T, RangeError>;
