//! Pair generation: which (symbol, spot venue, futures venue) legs to watch.
//!
//! A symbol qualifies only if it is listed spot on *every* venue that has a
//! spot universe and futures on *every* venue that has a futures universe.
//! For each qualifying symbol every spot leg is crossed with every futures
//! leg, including a venue against itself.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::symbols::NormalizedSymbol;
use crate::core::types::{MarketKind, VenueId};
use crate::core::universe::SymbolMap;

/// "Watch this spot leg against this futures leg for this symbol"
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MonitoredPair {
    pub symbol: NormalizedSymbol,
    pub spot_venue: VenueId,
    pub futures_venue: VenueId,
}

impl MonitoredPair {
    pub fn new(symbol: NormalizedSymbol, spot_venue: VenueId, futures_venue: VenueId) -> Self {
        Self {
            symbol,
            spot_venue,
            futures_venue,
        }
    }
}

impl fmt::Display for MonitoredPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}/spot -> {}/futures", self.symbol, self.spot_venue, self.futures_venue)
    }
}

/// Per-venue listing sets for one market kind, venues in map order
fn listings(map: &SymbolMap, kind: MarketKind) -> Vec<(&VenueId, BTreeSet<&NormalizedSymbol>)> {
    map.iter()
        .filter_map(|(venue, markets)| {
            markets
                .get(&kind)
                .map(|symbols| (venue, symbols.iter().collect::<BTreeSet<_>>()))
        })
        .collect()
}

fn intersect_all<'a>(sets: &[(&VenueId, BTreeSet<&'a NormalizedSymbol>)]) -> BTreeSet<&'a NormalizedSymbol> {
    let mut iter = sets.iter();
    let mut common = match iter.next() {
        Some((_, first)) => first.clone(),
        None => return BTreeSet::new(),
    };
    for (_, set) in iter {
        common.retain(|symbol| set.contains(symbol));
    }
    common
}

/// Symbols listed spot on all spot venues and futures on all futures venues.
///
/// Empty when no venue has a spot universe or no venue has a futures universe.
pub fn common_tradables(map: &SymbolMap) -> BTreeSet<NormalizedSymbol> {
    let spot = listings(map, MarketKind::Spot);
    let futures = listings(map, MarketKind::Futures);
    if spot.is_empty() || futures.is_empty() {
        return BTreeSet::new();
    }

    let common_spot = intersect_all(&spot);
    let common_futures = intersect_all(&futures);

    common_spot
        .intersection(&common_futures)
        .map(|symbol| (*symbol).clone())
        .collect()
}

/// Every (symbol, spot venue, futures venue) triple for the common symbols.
///
/// Order follows symbol, then spot venue, then futures venue; callers should
/// not rely on it.
pub fn generate_pairs(map: &SymbolMap) -> Vec<MonitoredPair> {
    let symbols = common_tradables(map);
    let spot = listings(map, MarketKind::Spot);
    let futures = listings(map, MarketKind::Futures);

    let mut pairs = Vec::new();
    for symbol in &symbols {
        for (spot_venue, spot_symbols) in &spot {
            if !spot_symbols.contains(symbol) {
                continue;
            }
            for (futures_venue, futures_symbols) in &futures {
                if !futures_symbols.contains(symbol) {
                    continue;
                }
                pairs.push(MonitoredPair::new(
                    symbol.clone(),
                    (*spot_venue).clone(),
                    (*futures_venue).clone(),
                ));
            }
        }
    }
    pairs
}
