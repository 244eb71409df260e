//! Spot/futures basis scanner
//!
//! - Venue adapters (Binance, Bybit, OKX) behind catalog and quote traits
//! - Symbol normalization, catalog filtering and cross-venue universe building
//! - Spot → futures pair generation over the fully common symbol set
//! - Price store and spread scanning against a percentage threshold

pub mod adapters;
pub mod config;
pub mod core;
pub mod error;

pub use error::AppError;
