//! Price store: latest quote per (venue, market, symbol).
//!
//! Plain map, last write wins. Wrap it in [`SharedPriceStore`] when several
//! fetch tasks upsert concurrently; reads happen after all writes of a cycle.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::core::symbols::NormalizedSymbol;
use crate::core::types::{current_time_ms, MarketKind, Quote, VenueId};

/// Shared store for concurrent upserts during the fetch phase
pub type SharedPriceStore = Arc<RwLock<PriceStore>>;

type VenueQuotes = HashMap<MarketKind, HashMap<NormalizedSymbol, Quote>>;

/// In-memory quote cache.
///
/// `get` never synthesizes a quote: a missing or expired entry is `None`.
#[derive(Debug, Default)]
pub struct PriceStore {
    /// venue → market → symbol → latest quote
    quotes: HashMap<VenueId, VenueQuotes>,
    /// Quotes older than this are treated as missing; `None` disables expiry
    max_age_ms: Option<u64>,
}

impl PriceStore {
    /// Store without expiry
    pub fn new() -> Self {
        Self::default()
    }

    /// Store that hides quotes older than `max_age_ms`
    pub fn with_max_age(max_age_ms: u64) -> Self {
        Self {
            quotes: HashMap::new(),
            max_age_ms: Some(max_age_ms),
        }
    }

    /// Wrap into the shared form used by concurrent fetch tasks
    pub fn into_shared(self) -> SharedPriceStore {
        Arc::new(RwLock::new(self))
    }

    /// Upsert the quote for a key, replacing any previous one
    pub fn update(
        &mut self,
        venue: VenueId,
        kind: MarketKind,
        symbol: NormalizedSymbol,
        bid: f64,
        ask: f64,
        timestamp_ms: u64,
    ) {
        self.quotes
            .entry(venue)
            .or_default()
            .entry(kind)
            .or_default()
            .insert(symbol, Quote::new(bid, ask, timestamp_ms));
    }

    /// Latest quote for a key, or `None` if never populated (or expired)
    pub fn get(&self, venue: &VenueId, kind: MarketKind, symbol: &NormalizedSymbol) -> Option<Quote> {
        let quote = self.quotes.get(venue)?.get(&kind)?.get(symbol)?;
        if self.is_expired(quote, current_time_ms()) {
            return None;
        }
        Some(*quote)
    }

    fn is_expired(&self, quote: &Quote, now: u64) -> bool {
        match self.max_age_ms {
            Some(max_age) => now.saturating_sub(quote.timestamp_ms) > max_age,
            None => false,
        }
    }

    /// Drop expired quotes. No-op without a max age.
    pub fn cleanup(&mut self) {
        let Some(max_age) = self.max_age_ms else {
            return;
        };
        let now = current_time_ms();
        self.quotes.retain(|_, markets| {
            markets.retain(|_, symbols| {
                symbols.retain(|_, quote| now.saturating_sub(quote.timestamp_ms) <= max_age);
                !symbols.is_empty()
            });
            !markets.is_empty()
        });
    }

    /// Number of stored quotes, expired ones included
    pub fn len(&self) -> usize {
        self.quotes
            .values()
            .flat_map(|markets| markets.values())
            .map(|symbols| symbols.len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
