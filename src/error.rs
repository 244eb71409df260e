//! Application-wide error types using thiserror
//!
//! Only configuration loading can fail the process. Venue failures stay
//! `ExchangeError`s and are absorbed by the scanning core as skipped markets.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;
