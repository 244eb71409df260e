//! One scan cycle: universe → pairs → quotes → spreads.
//!
//! Each cycle builds its own price store, so quotes never leak from one cycle
//! into the next.

use std::future::Future;
use std::time::Duration;

use tokio::time::MissedTickBehavior;
use tracing::{info, warn};

use crate::adapters::traits::{CatalogProvider, QuoteProvider};
use crate::config::AppConfig;
use crate::core::pairs::{generate_pairs, MonitoredPair};
use crate::core::price_store::PriceStore;
use crate::core::quotes::fetch_quotes;
use crate::core::scanner::{scan_spreads, SpreadMatch};
use crate::core::types::{MarketKind, SkippedMarket};
use crate::core::universe::build_universe;

/// Result of a cycle that got as far as scanning
#[derive(Debug, Clone, Default)]
pub struct CycleReport {
    pub pairs: Vec<MonitoredPair>,
    pub matches: Vec<SpreadMatch>,
    /// Quotes written during the fetch phase
    pub quotes: usize,
    /// Catalog and ticker fetches that failed this cycle
    pub skipped: Vec<SkippedMarket>,
}

/// How a cycle ended
#[derive(Debug, Clone)]
pub enum CycleOutcome {
    /// The universes share no symbol; nothing to price. Not a fetch failure,
    /// although `skipped` may explain a shrunken universe.
    NoCommonSymbols { skipped: Vec<SkippedMarket> },
    /// Catalog fetches failed so that no venue has a spot universe or no
    /// venue has a futures universe; nothing could be compared.
    NoData { skipped: Vec<SkippedMarket> },
    Scanned(CycleReport),
}

impl CycleOutcome {
    pub fn matches(&self) -> &[SpreadMatch] {
        match self {
            CycleOutcome::NoCommonSymbols { .. } | CycleOutcome::NoData { .. } => &[],
            CycleOutcome::Scanned(report) => &report.matches,
        }
    }

    pub fn skipped(&self) -> &[SkippedMarket] {
        match self {
            CycleOutcome::NoCommonSymbols { skipped } | CycleOutcome::NoData { skipped } => skipped,
            CycleOutcome::Scanned(report) => &report.skipped,
        }
    }
}

/// Run a full cycle against the given providers.
pub async fn run_cycle<C, Q>(config: &AppConfig, catalogs: &C, quotes: &Q) -> CycleOutcome
where
    C: CatalogProvider + ?Sized,
    Q: QuoteProvider + ?Sized,
{
    let universe = build_universe(catalogs, &config.exchanges, &config.filters).await;
    let mut skipped = universe.skipped;

    let has_side = |kind: MarketKind| universe.symbols.values().any(|markets| markets.contains_key(&kind));
    let sides_loaded = has_side(MarketKind::Spot) && has_side(MarketKind::Futures);
    if !sides_loaded && !skipped.is_empty() {
        warn!(skipped = skipped.len(), "Catalog fetches failed, no spot or no futures universe to compare");
        return CycleOutcome::NoData { skipped };
    }

    let pairs = generate_pairs(&universe.symbols);
    if pairs.is_empty() {
        info!(skipped = skipped.len(), "No common symbols across venues");
        return CycleOutcome::NoCommonSymbols { skipped };
    }

    let store = match config.arbitrage.max_quote_age_ms {
        Some(max_age) => PriceStore::with_max_age(max_age),
        None => PriceStore::new(),
    }
    .into_shared();

    let fetch = fetch_quotes(quotes, &universe.symbols, &store).await;
    skipped.extend(fetch.skipped);

    let matches = {
        let store = store.read().await;
        scan_spreads(&store, &pairs, config.arbitrage.min_spread_percent)
    };

    info!(
        pairs = pairs.len(),
        quotes = fetch.updated,
        matches = matches.len(),
        skipped = skipped.len(),
        "Scan cycle complete"
    );

    CycleOutcome::Scanned(CycleReport {
        pairs,
        matches,
        quotes: fetch.updated,
        skipped,
    })
}

/// Repeat cycles every `interval` until `shutdown` resolves.
///
/// Each tick and the cycle it starts race `shutdown`; a cycle still in flight
/// when it resolves is dropped. Returns the number of completed cycles.
pub async fn scan_loop<C, Q, S, F>(
    config: &AppConfig,
    catalogs: &C,
    quotes: &Q,
    interval: Duration,
    shutdown: S,
    mut on_outcome: F,
) -> usize
where
    C: CatalogProvider + ?Sized,
    Q: QuoteProvider + ?Sized,
    S: Future<Output = ()>,
    F: FnMut(CycleOutcome),
{
    tokio::pin!(shutdown);
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut completed = 0;

    loop {
        tokio::select! {
            _ = &mut shutdown => break,
            outcome = async {
                ticker.tick().await;
                run_cycle(config, catalogs, quotes).await
            } => {
                completed += 1;
                on_outcome(outcome);
            }
        }
    }

    info!(cycles = completed, "Scan loop stopped");
    completed
}
