//! Universe builder: per-venue, per-market symbol lists.
//!
//! Loads every enabled (venue, market) catalog concurrently, filters it and
//! records the result in a [`SymbolMap`]. A market whose catalog fetch fails
//! is left out of its venue entry and reported as a [`SkippedMarket`]; the
//! rest of the universe is still built.

use std::collections::BTreeMap;

use futures_util::future::join_all;
use tracing::{info, warn};

use crate::adapters::traits::CatalogProvider;
use crate::config::{ExchangeConfig, FilterConfig};
use crate::core::catalog::filter_catalog;
use crate::core::symbols::NormalizedSymbol;
use crate::core::types::{MarketKind, SkippedMarket, VenueId};

/// venue → market kind → normalized symbols.
///
/// A missing market kind means the venue does not participate in that kind
/// this cycle; an empty list means it participates but nothing matched.
pub type SymbolMap = BTreeMap<VenueId, BTreeMap<MarketKind, Vec<NormalizedSymbol>>>;

/// Result of one universe build
#[derive(Debug, Clone, Default)]
pub struct Universe {
    pub symbols: SymbolMap,
    pub skipped: Vec<SkippedMarket>,
}

impl Universe {
    /// Symbols listed by `venue` for `kind`, if the venue participates in that kind
    pub fn listed(&self, venue: &str, kind: MarketKind) -> Option<&[NormalizedSymbol]> {
        self.symbols.get(venue)?.get(&kind).map(Vec::as_slice)
    }
}

/// Build the filtered symbol universe for every configured venue.
///
/// Every configured venue gets an entry, even if all of its fetches failed.
pub async fn build_universe<P>(
    provider: &P,
    venues: &[ExchangeConfig],
    filters: &FilterConfig,
) -> Universe
where
    P: CatalogProvider + ?Sized,
{
    let fetches = venues.iter().flat_map(|venue| {
        venue.markets.enabled_kinds().map(move |kind| async move {
            let outcome = provider.fetch_catalog(&venue.id, kind).await;
            (venue, kind, outcome)
        })
    });
    let results = join_all(fetches).await;

    let mut universe = Universe::default();
    for venue in venues {
        universe.symbols.entry(venue.id.clone()).or_default();
    }

    for (venue, kind, outcome) in results {
        match outcome {
            Ok(catalog) => {
                let symbols = filter_catalog(&catalog, &filters.quote, filters.only_active);
                info!(
                    exchange = %venue.id,
                    market = %kind,
                    listed = catalog.len(),
                    symbols = symbols.len(),
                    "Catalog filtered"
                );
                universe
                    .symbols
                    .entry(venue.id.clone())
                    .or_default()
                    .insert(kind, symbols.into_iter().collect());
            }
            Err(e) => {
                warn!(
                    exchange = %venue.id,
                    market = %kind,
                    error = %e,
                    "Catalog fetch failed, skipping"
                );
                universe
                    .skipped
                    .push(SkippedMarket::new(venue.id.clone(), kind, e.to_string()));
            }
        }
    }

    universe
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::test_utils::StaticMarketData;
    use crate::adapters::types::InstrumentMeta;
    use crate::config::MarketToggle;
    use std::sync::atomic::Ordering;

    fn filters() -> FilterConfig {
        FilterConfig::new("USDT", true)
    }

    fn names(symbols: &[NormalizedSymbol]) -> Vec<&str> {
        symbols.iter().map(|s| s.as_str()).collect()
    }

    #[tokio::test]
    async fn test_builds_enabled_markets() {
        let provider = StaticMarketData::new()
            .with_listings("binance", MarketKind::Spot, &["BTC/USDT", "ETH/USDT", "ETH/BTC"], "USDT")
            .with_listings("binance", MarketKind::Futures, &["BTC/USDT"], "USDT");
        let venues = vec![ExchangeConfig::new("binance", MarketToggle::new(true, true))];

        let universe = build_universe(&provider, &venues, &filters()).await;

        assert!(universe.skipped.is_empty());
        assert_eq!(
            names(universe.listed("binance", MarketKind::Spot).unwrap()),
            vec!["BTCUSDT", "ETHBTC", "ETHUSDT"]
        );
        assert_eq!(
            names(universe.listed("binance", MarketKind::Futures).unwrap()),
            vec!["BTCUSDT"]
        );
    }

    #[tokio::test]
    async fn test_disabled_market_is_absent_and_not_fetched() {
        let provider = StaticMarketData::new()
            .with_listings("okx", MarketKind::Spot, &["BTC-USDT"], "USDT")
            .with_listings("okx", MarketKind::Futures, &["BTC-USDT"], "USDT");
        let venues = vec![ExchangeConfig::new("okx", MarketToggle::new(true, false))];

        let universe = build_universe(&provider, &venues, &filters()).await;

        assert!(universe.listed("okx", MarketKind::Spot).is_some());
        assert!(universe.listed("okx", MarketKind::Futures).is_none());
        assert_eq!(provider.catalog_calls.load(Ordering::Relaxed), 1);
    }

    #[tokio::test]
    async fn test_enabled_market_with_no_matches_is_empty_not_absent() {
        let provider = StaticMarketData::new()
            .with_listings("bybit", MarketKind::Spot, &["BTC/USDC"], "USDC");
        let venues = vec![ExchangeConfig::new("bybit", MarketToggle::new(true, false))];

        let universe = build_universe(&provider, &venues, &filters()).await;

        assert_eq!(universe.listed("bybit", MarketKind::Spot), Some(&[][..]));
    }

    #[tokio::test]
    async fn test_failed_fetch_is_skipped_not_fatal() {
        let provider = StaticMarketData::new()
            .with_listings("binance", MarketKind::Spot, &["BTC/USDT"], "USDT")
            .with_listings("okx", MarketKind::Spot, &["BTC-USDT"], "USDT")
            .with_failure("okx", MarketKind::Futures);
        let venues = vec![
            ExchangeConfig::new("binance", MarketToggle::new(true, false)),
            ExchangeConfig::new("okx", MarketToggle::new(true, true)),
        ];

        let universe = build_universe(&provider, &venues, &filters()).await;

        assert_eq!(universe.skipped.len(), 1);
        assert_eq!(universe.skipped[0].venue.as_str(), "okx");
        assert_eq!(universe.skipped[0].kind, MarketKind::Futures);
        assert!(universe.listed("okx", MarketKind::Spot).is_some());
        assert!(universe.listed("okx", MarketKind::Futures).is_none());
        assert!(universe.listed("binance", MarketKind::Spot).is_some());
    }

    #[tokio::test]
    async fn test_venue_entry_kept_when_all_fetches_fail() {
        let provider = StaticMarketData::new().with_failure("mexc", MarketKind::Spot);
        let venues = vec![ExchangeConfig::new("mexc", MarketToggle::new(true, false))];

        let universe = build_universe(&provider, &venues, &filters()).await;

        assert!(universe.symbols.get("mexc").unwrap().is_empty());
        assert_eq!(universe.skipped.len(), 1);
    }

    #[tokio::test]
    async fn test_inactive_filtered_per_config() {
        let mut provider = StaticMarketData::new();
        let mut catalog = crate::adapters::types::RawCatalog::new();
        catalog.insert("BTC/USDT".into(), InstrumentMeta::new("USDT", true));
        catalog.insert("LUNA/USDT".into(), InstrumentMeta::new("USDT", false));
        provider
            .catalogs
            .insert((VenueId::new("binance"), MarketKind::Spot), catalog);
        let venues = vec![ExchangeConfig::new("binance", MarketToggle::new(true, false))];

        let active_only = build_universe(&provider, &venues, &FilterConfig::new("usdt", true)).await;
        assert_eq!(names(active_only.listed("binance", MarketKind::Spot).unwrap()), vec!["BTCUSDT"]);

        let all = build_universe(&provider, &venues, &FilterConfig::new("usdt", false)).await;
        assert_eq!(
            names(all.listed("binance", MarketKind::Spot).unwrap()),
            vec!["BTCUSDT", "LUNAUSDT"]
        );
    }
}
