//! Exchange adapter error types
//!
//! All venue-related failures are wrapped in ExchangeError. The scanning core
//! never propagates these: a failed catalog or ticker fetch degrades that
//! venue/market to "absent" for the current cycle.

use thiserror::Error;

/// Exchange-specific error types for adapter operations
#[derive(Error, Debug)]
pub enum ExchangeError {
    /// Connection to exchange failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Network operation timed out
    #[error("Network timeout after {0}ms")]
    NetworkTimeout(u64),

    /// Non-success HTTP status from a REST endpoint
    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    /// Invalid or unexpected response from exchange
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Venue returned its own error envelope (non-zero retCode, code != "0", ...)
    #[error("API error {code}: {message}")]
    Api { code: String, message: String },

    /// No adapter is registered for this venue id
    #[error("Unknown venue: {0}")]
    UnknownVenue(String),
}

/// Result type alias for exchange operations
pub type ExchangeResult<T> = std::result::Result<T, ExchangeError>;
