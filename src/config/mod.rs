//! Configuration module for scanner settings and YAML loading
//!
//! This module provides:
//! - Configuration types (`AppConfig`, `ExchangeConfig`, `FilterConfig`, ...)
//! - YAML loading functionality (`load_config`)
//! - Logging configuration (`init_logging`)

mod loader;
pub mod logging;
mod types;

// Re-export types
pub use types::{
    AppConfig, ArbitrageConfig, ExchangeConfig, FilterConfig, HttpConfig, MarketToggle,
    DEFAULT_HTTP_TIMEOUT_MS,
};

// Re-export loader functions
pub use loader::{config_path_from_env, load_config, load_config_from_str, DEFAULT_CONFIG_PATH};

// Re-export logging functions
pub use logging::init_logging;
