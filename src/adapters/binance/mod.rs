//! Binance exchange adapter module
//!
//! Public REST market data: spot (`/api/v3`) and USDⓈ-M futures (`/fapi/v1`).

pub mod adapter;
pub mod config;
pub mod types;

pub use adapter::BinanceAdapter;
pub use config::BinanceConfig;
