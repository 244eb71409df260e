//! Binance Configuration
//!
//! REST endpoints and derivative flavour for the Binance adapter.

use crate::adapters::types::DerivativeType;
use crate::config::{ExchangeConfig, HttpConfig, DEFAULT_HTTP_TIMEOUT_MS};

// =============================================================================
// Constants
// =============================================================================

/// Spot REST base URL
const SPOT_REST_URL: &str = "https://api.binance.com";
/// USDⓈ-M futures REST base URL
const FUTURES_REST_URL: &str = "https://fapi.binance.com";

// =============================================================================
// Configuration
// =============================================================================

/// Configuration for the Binance adapter (public market data)
#[derive(Debug, Clone)]
pub struct BinanceConfig {
    pub spot_url: String,
    pub futures_url: String,
    /// Perpetuals or quarterly contracts on the futures market
    pub futures_type: DerivativeType,
    pub timeout_ms: u64,
}

impl Default for BinanceConfig {
    fn default() -> Self {
        Self {
            spot_url: SPOT_REST_URL.to_string(),
            futures_url: FUTURES_REST_URL.to_string(),
            futures_type: DerivativeType::Swap,
            timeout_ms: DEFAULT_HTTP_TIMEOUT_MS,
        }
    }
}

impl BinanceConfig {
    /// Apply per-exchange overrides from the YAML config
    pub fn from_exchange(exchange: &ExchangeConfig, http: &HttpConfig, futures_type: DerivativeType) -> Self {
        let defaults = Self::default();
        Self {
            spot_url: exchange.spot_url.clone().unwrap_or(defaults.spot_url),
            futures_url: exchange.futures_url.clone().unwrap_or(defaults.futures_url),
            futures_type,
            timeout_ms: http.timeout_ms,
        }
    }

    pub fn exchange_info_url(&self, spot: bool) -> String {
        if spot {
            format!("{}/api/v3/exchangeInfo", self.spot_url.trim_end_matches('/'))
        } else {
            format!("{}/fapi/v1/exchangeInfo", self.futures_url.trim_end_matches('/'))
        }
    }

    pub fn book_ticker_url(&self, spot: bool) -> String {
        if spot {
            format!("{}/api/v3/ticker/bookTicker", self.spot_url.trim_end_matches('/'))
        } else {
            format!("{}/fapi/v1/ticker/bookTicker", self.futures_url.trim_end_matches('/'))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MarketToggle;

    #[test]
    fn test_config_default() {
        let config = BinanceConfig::default();
        assert_eq!(config.exchange_info_url(true), "https://api.binance.com/api/v3/exchangeInfo");
        assert_eq!(
            config.book_ticker_url(false),
            "https://fapi.binance.com/fapi/v1/ticker/bookTicker"
        );
    }

    #[test]
    fn test_config_overrides() {
        let mut exchange = ExchangeConfig::new("binance", MarketToggle::new(true, true));
        exchange.futures_url = Some("http://localhost:1234/".to_string());
        let http = HttpConfig { timeout_ms: 500 };

        let config = BinanceConfig::from_exchange(&exchange, &http, DerivativeType::Future);

        assert_eq!(config.spot_url, "https://api.binance.com");
        assert_eq!(config.exchange_info_url(false), "http://localhost:1234/fapi/v1/exchangeInfo");
        assert_eq!(config.futures_type, DerivativeType::Future);
        assert_eq!(config.timeout_ms, 500);
    }
}
