//! Bybit Configuration

use crate::adapters::types::DerivativeType;
use crate::config::{ExchangeConfig, HttpConfig, DEFAULT_HTTP_TIMEOUT_MS};
use crate::core::types::MarketKind;

/// v5 REST base URL (spot and derivatives share the host)
const REST_URL: &str = "https://api.bybit.com";

/// Page size for `instruments-info` (venue maximum)
pub const INSTRUMENTS_PAGE_LIMIT: u32 = 1000;

/// Configuration for the Bybit adapter (public market data)
#[derive(Debug, Clone)]
pub struct BybitConfig {
    pub spot_url: String,
    pub futures_url: String,
    pub futures_type: DerivativeType,
    pub timeout_ms: u64,
}

impl Default for BybitConfig {
    fn default() -> Self {
        Self {
            spot_url: REST_URL.to_string(),
            futures_url: REST_URL.to_string(),
            futures_type: DerivativeType::Future,
            timeout_ms: DEFAULT_HTTP_TIMEOUT_MS,
        }
    }
}

impl BybitConfig {
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
        format!("{}/v5/market/instruments-info", self.base_url(kind))
    }

    pub fn tickers_url(&self, kind: MarketKind) -> String {
        format!("{}/v5/market/tickers", self.base_url(kind))
    }
}

/// v5 `category` parameter for a market kind
pub fn category(kind: MarketKind) -> &'static str {
    match kind {
        MarketKind::Spot => "spot",
        MarketKind::Futures => "linear",
    }
}
