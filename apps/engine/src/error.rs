//! Application-level error type for the engine crate.
//!
//! This only covers construction and configuration failures. Game-rule
//! rejections are `crate::errors::domain` values and never pass through
//! here; they are expected outcomes returned to the dispatch layer for
//! display, not faults.

use thiserror::Error;

use crate::errors::ErrorCode;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {detail}")]
    Config { detail: String },
}

impl AppError {
    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    /// Error code for the dispatch layer.
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Config { .. } => ErrorCode::ConfigError,
        }
    }
}
