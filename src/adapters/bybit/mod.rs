//! Bybit exchange adapter module
//!
//! Public REST market data from the unified v5 API (`spot` and `linear` categories).

pub mod adapter;
pub mod config;
pub mod types;

pub use adapter::BybitAdapter;
pub use config::BybitConfig;
