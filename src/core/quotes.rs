//! Fetch phase: populate the price store from venue tickers.
//!
//! One ticker fetch per (venue, market) that has symbols in the universe, all
//! in flight at once. Tickers outside the universe, and tickers missing a bid
//! or an ask, never reach the store. A failed fetch leaves that market empty
//! for the cycle.

use std::collections::HashSet;

use futures_util::future::join_all;
use tracing::{debug, warn};

use crate::adapters::traits::QuoteProvider;
use crate::adapters::types::RawTickers;
use crate::core::price_store::SharedPriceStore;
use crate::core::symbols::{normalize_symbol, NormalizedSymbol};
use crate::core::types::{current_time_ms, Quote, SkippedMarket};
use crate::core::universe::SymbolMap;

/// Outcome of one fetch phase
#[derive(Debug, Clone, Default)]
pub struct FetchReport {
    /// Quotes written to the store
    pub updated: usize,
    pub skipped: Vec<SkippedMarket>,
}

/// Keep the tickers whose normalized symbol is wanted and that carry both a bid
/// and an ask. Missing timestamps default to `now_ms`.
pub fn select_quotes(
    tickers: &RawTickers,
    wanted: &[NormalizedSymbol],
    now_ms: u64,
) -> Vec<(NormalizedSymbol, Quote)> {
    let wanted: HashSet<&NormalizedSymbol> = wanted.iter().collect();

    tickers
        .iter()
        .filter_map(|(spelling, ticker)| {
            let symbol = normalize_symbol(spelling);
            if !wanted.contains(&symbol) {
                return None;
            }
            let (bid, ask) = (ticker.bid?, ticker.ask?);
            let timestamp_ms = ticker.timestamp_ms.unwrap_or(now_ms);
            Some((symbol, Quote::new(bid, ask, timestamp_ms)))
        })
        .collect()
}

/// Fetch tickers for every non-empty (venue, market) of `symbols` into `store`.
pub async fn fetch_quotes<P>(
    provider: &P,
    symbols: &SymbolMap,
    store: &SharedPriceStore,
) -> FetchReport
where
    P: QuoteProvider + ?Sized,
{
    let fetches = symbols.iter().flat_map(|(venue, markets)| {
        markets
            .iter()
            .filter(|(_, wanted)| !wanted.is_empty())
            .map(move |(kind, wanted)| async move {
                let kind = *kind;
                match provider.fetch_tickers(venue, kind).await {
                    Ok(tickers) => {
                        let quotes = select_quotes(&tickers, wanted, current_time_ms());
                        let updated = quotes.len();
                        let mut guard = store.write().await;
                        for (symbol, quote) in quotes {
                            guard.update(venue.clone(), kind, symbol, quote.bid, quote.ask, quote.timestamp_ms);
                        }
                        debug!(
                            exchange = %venue,
                            market = %kind,
                            tickers = tickers.len(),
                            updated,
                            "Quotes stored"
                        );
                        Ok(updated)
                    }
                    Err(e) => {
                        warn!(
                            exchange = %venue,
                            market = %kind,
                            error = %e,
                            "Ticker fetch failed, skipping"
                        );
                        Err(SkippedMarket::new(venue.clone(), kind, e.to_string()))
                    }
                }
            })
    });

    let mut report = FetchReport::default();
    for outcome in join_all(fetches).await {
        match outcome {
            Ok(updated) => report.updated += updated,
            Err(skip) => report.skipped.push(skip),
        }
    }
    report
}
