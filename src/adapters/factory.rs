//! Adapter factory and venue registry
//!
//! Creates `VenueAdapter` instances from exchange config entries.
//! Uses an enum-based dispatch pattern (no `Box<dyn>`) to preserve monomorphization.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::adapters::binance::{BinanceAdapter, BinanceConfig};
use crate::adapters::bybit::{BybitAdapter, BybitConfig};
use crate::adapters::errors::{ExchangeError, ExchangeResult};
use crate::adapters::okx::{OkxAdapter, OkxConfig};
use crate::adapters::traits::{CatalogProvider, QuoteProvider, VenueAdapter};
use crate::adapters::types::{DerivativeType, RawCatalog, RawTickers};
use crate::config::{AppConfig, ExchangeConfig, HttpConfig};
use crate::core::types::{MarketKind, VenueId};

// =============================================================================
// AnyAdapter: enum-based dispatch
// =============================================================================

/// Enum wrapping all concrete adapter types for runtime dispatch.
#[derive(Debug, Clone)]
pub enum AnyAdapter {
    Binance(BinanceAdapter),
    Bybit(BybitAdapter),
    Okx(OkxAdapter),
}

/// Macro to reduce boilerplate for delegating trait methods
macro_rules! delegate {
    ($self:expr, $method:ident ( $($arg:expr),* )) => {
        match $self {
            AnyAdapter::Binance(a) => a.$method($($arg),*),
            AnyAdapter::Bybit(a) => a.$method($($arg),*),
            AnyAdapter::Okx(a) => a.$method($($arg),*),
        }
    };
    (await $self:expr, $method:ident ( $($arg:expr),* )) => {
        match $self {
            AnyAdapter::Binance(a) => a.$method($($arg),*).await,
            AnyAdapter::Bybit(a) => a.$method($($arg),*).await,
            AnyAdapter::Okx(a) => a.$method($($arg),*).await,
        }
    };
}

#[async_trait]
impl VenueAdapter for AnyAdapter {
    async fn load_markets(&self, kind: MarketKind) -> ExchangeResult<RawCatalog> {
        delegate!(await self, load_markets(kind))
    }

    async fn fetch_tickers(&self, kind: MarketKind) -> ExchangeResult<RawTickers> {
        delegate!(await self, fetch_tickers(kind))
    }

    fn exchange_name(&self) -> &'static str {
        delegate!(self, exchange_name())
    }
}

// =============================================================================
// Factory Functions
// =============================================================================

/// All supported exchange adapter ids.
pub const SUPPORTED_EXCHANGES: &[&str] = &["binance", "bybit", "okx"];

/// Derivative listing a venue's "futures" market means when not configured.
///
/// Venues whose futures market is primarily perpetual swaps use `Swap`;
/// everything else uses dated `Future` contracts.
pub fn futures_default_type(venue: &str) -> DerivativeType {
    match venue {
        "binance" | "mexc" | "bingx" | "okx" => DerivativeType::Swap,
        _ => DerivativeType::Future,
    }
}

/// `"{venue}-{kind}"`, e.g. `binance-futures`
pub fn market_label(venue: &VenueId, kind: MarketKind) -> String {
    format!("{}-{}", venue, kind)
}

/// Create an adapter for one configured exchange.
pub fn create_adapter(exchange: &ExchangeConfig, http: &HttpConfig) -> ExchangeResult<AnyAdapter> {
    let id = exchange.id.as_str();
    let futures_type = exchange
        .futures_type
        .unwrap_or_else(|| futures_default_type(id));

    match id {
        "binance" => {
            let config = BinanceConfig::from_exchange(exchange, http, futures_type);
            Ok(AnyAdapter::Binance(BinanceAdapter::new(config)?))
        }
        "bybit" => {
            let config = BybitConfig::from_exchange(exchange, http, futures_type);
            Ok(AnyAdapter::Bybit(BybitAdapter::new(config)?))
        }
        "okx" => {
            let config = OkxConfig::from_exchange(exchange, http, futures_type);
            Ok(AnyAdapter::Okx(OkxAdapter::new(config)?))
        }
        _ => Err(ExchangeError::UnknownVenue(format!(
            "'{}'. Supported: {}",
            id,
            SUPPORTED_EXCHANGES.join(", ")
        ))),
    }
}

// =============================================================================
// VenueRegistry
// =============================================================================

/// One adapter per configured venue, dispatched by `VenueId`.
///
/// Venues without an adapter stay out of the registry; fetches against them
/// fail with `UnknownVenue` and are skipped by the core like any other failure.
#[derive(Debug, Default)]
pub struct VenueRegistry {
    adapters: HashMap<VenueId, AnyAdapter>,
}

impl VenueRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build adapters for every configured exchange, logging the ones that fail
    pub fn from_config(config: &AppConfig) -> Self {
        let mut registry = Self::new();
        for exchange in &config.exchanges {
            match create_adapter(exchange, &config.http) {
                Ok(adapter) => {
                    tracing::info!(
                        phase = "init",
                        exchange = %exchange.id,
                        name = %exchange.name,
                        "Adapter created"
                    );
                    registry.insert(exchange.id.clone(), adapter);
                }
                Err(e) => {
                    tracing::warn!(
                        phase = "init",
                        exchange = %exchange.id,
                        error = %e,
                        "No adapter for exchange, its markets will be skipped"
                    );
                }
            }
        }
        registry
    }

    pub fn insert(&mut self, venue: VenueId, adapter: AnyAdapter) {
        self.adapters.insert(venue, adapter);
    }

    pub fn get(&self, venue: &VenueId) -> ExchangeResult<&AnyAdapter> {
        self.adapters
            .get(venue)
            .ok_or_else(|| ExchangeError::UnknownVenue(venue.to_string()))
    }

    pub fn len(&self) -> usize {
        self.adapters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adapters.is_empty()
    }
}

#[async_trait]
impl CatalogProvider for VenueRegistry {
    async fn fetch_catalog(&self, venue: &VenueId, kind: MarketKind) -> ExchangeResult<RawCatalog> {
        tracing::debug!(market = %market_label(venue, kind), "Loading catalog");
        self.get(venue)?.load_markets(kind).await
    }
}

#[async_trait]
impl QuoteProvider for VenueRegistry {
    async fn fetch_tickers(&self, venue: &VenueId, kind: MarketKind) -> ExchangeResult<RawTickers> {
        tracing::debug!(market = %market_label(venue, kind), "Fetching tickers");
        self.get(venue)?.fetch_tickers(kind).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ArbitrageConfig, FilterConfig, MarketToggle};

    fn exchange(id: &str) -> ExchangeConfig {
        ExchangeConfig::new(id, MarketToggle::new(true, true))
    }

    #[test]
    fn test_futures_default_type() {
        for venue in ["binance", "mexc", "bingx", "okx"] {
            assert_eq!(futures_default_type(venue), DerivativeType::Swap, "{}", venue);
        }
        assert_eq!(futures_default_type("bybit"), DerivativeType::Future);
        assert_eq!(futures_default_type("kraken"), DerivativeType::Future);
    }

    #[test]
    fn test_market_label() {
        assert_eq!(market_label(&"binance".into(), MarketKind::Futures), "binance-futures");
        assert_eq!(market_label(&"okx".into(), MarketKind::Spot), "okx-spot");
    }

    #[test]
    fn test_create_supported_adapters() {
        let http = HttpConfig::default();
        for id in SUPPORTED_EXCHANGES {
            let adapter = create_adapter(&exchange(id), &http).unwrap();
            assert_eq!(adapter.exchange_name(), *id);
        }
    }

    #[test]
    fn test_create_unknown_adapter() {
        let result = create_adapter(&exchange("kraken"), &HttpConfig::default());
        match result {
            Err(ExchangeError::UnknownVenue(msg)) => assert!(msg.contains("kraken")),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_registry_skips_unknown_venues() {
        let config = AppConfig {
            exchanges: vec![exchange("binance"), exchange("kraken")],
            filters: FilterConfig::new("USDT", true),
            arbitrage: ArbitrageConfig::new(0.5),
            http: HttpConfig::default(),
        };

        let registry = VenueRegistry::from_config(&config);

        assert_eq!(registry.len(), 1);
        assert!(registry.get(&"binance".into()).is_ok());
        assert!(matches!(registry.get(&"kraken".into()), Err(ExchangeError::UnknownVenue(_))));
    }

    #[tokio::test]
    async fn test_unregistered_venue_fetch_fails() {
        let registry = VenueRegistry::new();
        let result = registry.fetch_tickers(&"kraken".into(), MarketKind::Spot).await;
        assert!(matches!(result, Err(ExchangeError::UnknownVenue(_))));
    }

    #[tokio::test]
    async fn test_registry_dispatches_to_adapter() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/v3/ticker/bookTicker")
            .with_status(200)
            .with_body(r#"[{"symbol":"BTCUSDT","bidPrice":"1","bidQty":"1","askPrice":"2","askQty":"1"}]"#)
            .create_async()
            .await;

        let mut binance = exchange("binance");
        binance.spot_url = Some(server.url());
        let mut registry = VenueRegistry::new();
        registry.insert(
            binance.id.clone(),
            create_adapter(&binance, &HttpConfig::default()).unwrap(),
        );

        let tickers = registry
            .fetch_tickers(&"binance".into(), MarketKind::Spot)
            .await
            .unwrap();

        assert_eq!(tickers["BTCUSDT"].bid, Some(1.0));
    }
}
