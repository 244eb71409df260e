//! Bybit Adapter Implementation
//!
//! v5 public REST. The instrument listing is cursor-paginated; tickers come
//! back in a single response per category.
//!
//! Docs: https://bybit-exchange.github.io/docs/v5/market/instrument

use async_trait::async_trait;

use crate::adapters::errors::ExchangeResult;
use crate::adapters::shared::RestClient;
use crate::adapters::traits::VenueAdapter;
use crate::adapters::types::{RawCatalog, RawTickers};
use crate::core::types::MarketKind;

use super::config::{category, BybitConfig, INSTRUMENTS_PAGE_LIMIT};
use super::types::{extend_catalog, to_tickers, BybitResponse, InstrumentsPage, TickersPage};

/// Upper bound on followed cursors, guards against a cursor that never empties
const MAX_INSTRUMENT_PAGES: usize = 20;

/// Bybit adapter implementing VenueAdapter
#[derive(Debug, Clone)]
pub struct BybitAdapter {
    config: BybitConfig,
    rest: RestClient,
}

impl BybitAdapter {
    pub fn new(config: BybitConfig) -> ExchangeResult<Self> {
        let rest = RestClient::new("bybit", config.timeout_ms)?;
        Ok(Self { config, rest })
    }
}

#[async_trait]
impl VenueAdapter for BybitAdapter {
    async fn load_markets(&self, kind: MarketKind) -> ExchangeResult<RawCatalog> {
        let url = self.config.instruments_url(kind);
        let limit = INSTRUMENTS_PAGE_LIMIT.to_string();
        let mut catalog = RawCatalog::new();
        let mut cursor = String::new();

        for _ in 0..MAX_INSTRUMENT_PAGES {
            let resp: BybitResponse<InstrumentsPage> = {
                let mut query = vec![("category", category(kind)), ("limit", limit.as_str())];
                if !cursor.is_empty() {
                    query.push(("cursor", cursor.as_str()));
                }
                self.rest.get_json(&url, &query).await?
            };
            let (page, _) = resp.into_result()?;
            extend_catalog(&mut catalog, page.list, kind, self.config.futures_type);

            if page.next_page_cursor.is_empty() {
                tracing::debug!(exchange = "bybit", market = %kind, instruments = catalog.len(), "Catalog loaded");
                return Ok(catalog);
            }
            cursor = page.next_page_cursor;
        }

        tracing::warn!(
            exchange = "bybit",
            market = %kind,
            pages = MAX_INSTRUMENT_PAGES,
            "Instrument pagination cap reached, catalog may be partial"
        );
        Ok(catalog)
    }

    async fn fetch_tickers(&self, kind: MarketKind) -> ExchangeResult<RawTickers> {
        let url = self.config.tickers_url(kind);
        let resp: BybitResponse<TickersPage> =
            self.rest.get_json(&url, &[("category", category(kind))]).await?;
        let (page, time) = resp.into_result()?;
        Ok(to_tickers(page, time, kind, self.config.futures_type))
    }

    fn exchange_name(&self) -> &'static str {
        "bybit"
    }
}
