//! Binance Adapter Implementation
//!
//! Public REST only: `exchangeInfo` for catalogs, `ticker/bookTicker` for a
//! full best bid/ask snapshot in one request.
//!
//! Docs: https://developers.binance.com/docs/binance-spot-api-docs/rest-api

use async_trait::async_trait;

use crate::adapters::errors::ExchangeResult;
use crate::adapters::shared::RestClient;
use crate::adapters::traits::VenueAdapter;
use crate::adapters::types::{RawCatalog, RawTickers};
use crate::core::types::MarketKind;

use super::config::BinanceConfig;
use super::types::{to_catalog, to_tickers, BinanceBookTicker, BinanceExchangeInfo};

/// Binance adapter implementing VenueAdapter
#[derive(Debug, Clone)]
pub struct BinanceAdapter {
    config: BinanceConfig,
    rest: RestClient,
}

impl BinanceAdapter {
    pub fn new(config: BinanceConfig) -> ExchangeResult<Self> {
        let rest = RestClient::new("binance", config.timeout_ms)?;
        Ok(Self { config, rest })
    }
}

#[async_trait]
impl VenueAdapter for BinanceAdapter {
    async fn load_markets(&self, kind: MarketKind) -> ExchangeResult<RawCatalog> {
        let url = self.config.exchange_info_url(kind == MarketKind::Spot);
        let info: BinanceExchangeInfo = self.rest.get_json(&url, &[]).await?;
        let catalog = to_catalog(info, kind, self.config.futures_type);

        tracing::debug!(exchange = "binance", market = %kind, instruments = catalog.len(), "Catalog loaded");
        Ok(catalog)
    }

    async fn fetch_tickers(&self, kind: MarketKind) -> ExchangeResult<RawTickers> {
        let url = self.config.book_ticker_url(kind == MarketKind::Spot);
        let tickers: Vec<BinanceBookTicker> = self.rest.get_json(&url, &[]).await?;
        Ok(to_tickers(tickers, kind, self.config.futures_type))
    }

    fn exchange_name(&self) -> &'static str {
        "binance"
    }
}
