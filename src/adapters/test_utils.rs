//! Shared test utilities for core and adapter testing
//!
//! `StaticMarketData` is an in-memory `CatalogProvider` + `QuoteProvider`
//! with per-(venue, market) failure injection and call counting.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::adapters::errors::{ExchangeError, ExchangeResult};
use crate::adapters::traits::{CatalogProvider, QuoteProvider};
use crate::adapters::types::{InstrumentMeta, RawCatalog, RawTickers, TickerSnapshot};
use crate::core::types::{MarketKind, VenueId};

type MarketKey = (VenueId, MarketKind);

/// In-memory market data source. Unknown (venue, market) keys return empty maps.
#[derive(Default)]
pub struct StaticMarketData {
    pub catalogs: HashMap<MarketKey, RawCatalog>,
    pub tickers: HashMap<MarketKey, RawTickers>,
    /// Keys whose fetches fail with `ConnectionFailed`
    pub failing: HashSet<MarketKey>,
    pub catalog_calls: AtomicUsize,
    pub ticker_calls: AtomicUsize,
}

impl StaticMarketData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add active listings quoted in `quote` (spellings like "BTC/USDT")
    pub fn with_listings(mut self, venue: &str, kind: MarketKind, spellings: &[&str], quote: &str) -> Self {
        let catalog = self.catalogs.entry((VenueId::new(venue), kind)).or_default();
        for spelling in spellings {
            catalog.insert(spelling.to_string(), InstrumentMeta::new(quote, true));
        }
        self
    }

    pub fn with_ticker(
        mut self,
        venue: &str,
        kind: MarketKind,
        spelling: &str,
        bid: Option<f64>,
        ask: Option<f64>,
        timestamp_ms: Option<u64>,
    ) -> Self {
        self.tickers
            .entry((VenueId::new(venue), kind))
            .or_default()
            .insert(spelling.to_string(), TickerSnapshot::new(bid, ask, timestamp_ms));
        self
    }

    pub fn with_failure(mut self, venue: &str, kind: MarketKind) -> Self {
        self.failing.insert((VenueId::new(venue), kind));
        self
    }

    fn check(&self, venue: &VenueId, kind: MarketKind) -> ExchangeResult<()> {
        if self.failing.contains(&(venue.clone(), kind)) {
            return Err(ExchangeError::ConnectionFailed(format!(
                "mock failure for {} {}",
                venue, kind
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl CatalogProvider for StaticMarketData {
    async fn fetch_catalog(&self, venue: &VenueId, kind: MarketKind) -> ExchangeResult<RawCatalog> {
        self.catalog_calls.fetch_add(1, Ordering::Relaxed);
        self.check(venue, kind)?;
        Ok(self
            .catalogs
            .get(&(venue.clone(), kind))
            .cloned()
            .unwrap_or_default())
    }
}

#[async_trait]
impl QuoteProvider for StaticMarketData {
    async fn fetch_tickers(&self, venue: &VenueId, kind: MarketKind) -> ExchangeResult<RawTickers> {
        self.ticker_calls.fetch_add(1, Ordering::Relaxed);
        self.check(venue, kind)?;
        Ok(self
            .tickers
            .get(&(venue.clone(), kind))
            .cloned()
            .unwrap_or_default())
    }
}
