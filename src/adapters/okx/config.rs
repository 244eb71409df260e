//! OKX Configuration

use crate::adapters::types::DerivativeType;
use crate::config::{ExchangeConfig, HttpConfig, DEFAULT_HTTP_TIMEOUT_MS};
use crate::core::types::MarketKind;

const REST_URL: &str = "https://www.okx.com";

/// Configuration for the OKX adapter (public market data)
#[derive(Debug, Clone)]
pub struct OkxConfig {
    pub spot_url: String,
    pub futures_url: String,
    pub futures_type: DerivativeType,
    pub timeout_ms: u64,
}

impl Default for OkxConfig {
    fn default() -> Self {
        Self {
            spot_url: REST_URL.to_string(),
            futures_url: REST_URL.to_string(),
            futures_type: DerivativeType::Swap,
            timeout_ms: DEFAULT_HTTP_TIMEOUT_MS,
        }
    }
}

impl OkxConfig {
    pub fn from_exchange(exchange: &ExchangeConfig, http: &HttpConfig, futures_type: DerivativeType) -> Self {
        let defaults = Self::default();
        Self {
            spot_url: exchange.spot_url.clone().unwrap_or(defaults.spot_url),
            futures_url: exchange.futures_url.clone().unwrap_or(defaults.futures_url),
            futures_type,
            timeout_ms: http.timeout_ms,
        }
    }

    fn base_url(&self, kind: MarketKind) -> &str {
        match kind {
            MarketKind::Spot => self.spot_url.trim_end_matches('/'),
            MarketKind::Futures => self.futures_url.trim_end_matches('/'),
        }
    }

    pub fn instruments_url(&self, kind: MarketKind) -> String {
        format!("{}/api/v5/public/instruments", self.base_url(kind))
    }

    pub fn tickers_url(&self, kind: MarketKind) -> String {
        format!("{}/api/v5/market/tickers", self.base_url(kind))
    }

    /// v5 `instType` parameter for a market kind
    pub fn inst_type(&self, kind: MarketKind) -> &'static str {
        match (kind, self.futures_type) {
            (MarketKind::Spot, _) => "SPOT",
            (MarketKind::Futures, DerivativeType::Swap) => "SWAP",
            (MarketKind::Futures, DerivativeType::Future) => "FUTURES",
        }
    }
}
