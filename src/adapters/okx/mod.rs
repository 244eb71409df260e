//! OKX exchange adapter module
//!
//! Public REST market data from the v5 API (`SPOT`, `SWAP`, `FUTURES`).

pub mod adapter;
pub mod config;
pub mod types;

pub use adapter::OkxAdapter;
pub use config::OkxConfig;
