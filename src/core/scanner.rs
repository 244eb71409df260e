//! Spread scanner: spot ask vs futures bid for every monitored pair.
//!
//! spread % = (futures bid − spot ask) / spot ask × 100
//!
//! Positive spread = the futures leg can be sold above the spot purchase price.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::pairs::MonitoredPair;
use crate::core::price_store::PriceStore;
use crate::core::symbols::NormalizedSymbol;
use crate::core::types::{MarketKind, VenueId};

/// A pair whose spread reached the configured minimum
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpreadMatch {
    pub symbol: NormalizedSymbol,
    pub spot_venue: VenueId,
    /// Spot ask (we would buy here)
    pub spot_ask: f64,
    pub futures_venue: VenueId,
    /// Futures bid (we would sell here)
    pub futures_bid: f64,
    pub spread_percent: f64,
}

impl fmt::Display for SpreadMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | spot {} {:.4} < futures {} {:.4} | spread {:.2}%",
            self.symbol,
            self.spot_venue,
            self.spot_ask,
            self.futures_venue,
            self.futures_bid,
            self.spread_percent
        )
    }
}

/// Percentage spread of a futures bid over a spot ask.
///
/// `None` when the spot ask is zero, negative or not finite, or the result
/// is not finite.
#[inline]
#[must_use]
pub fn calculate_spread(spot_ask: f64, futures_bid: f64) -> Option<f64> {
    if !spot_ask.is_finite() || spot_ask <= 0.0 {
        return None;
    }
    let spread = (futures_bid - spot_ask) / spot_ask * 100.0;
    spread.is_finite().then_some(spread)
}

/// Evaluate every pair against the store; report spreads `>= min_spread_percent`.
///
/// Pairs missing either quote are skipped. Output keeps input pair order.
pub fn scan_spreads(
    store: &PriceStore,
    pairs: &[MonitoredPair],
    min_spread_percent: f64,
) -> Vec<SpreadMatch> {
    let mut matches = Vec::new();

    for pair in pairs {
        let Some(spot) = store.get(&pair.spot_venue, MarketKind::Spot, &pair.symbol) else {
            continue;
        };
        let Some(futures) = store.get(&pair.futures_venue, MarketKind::Futures, &pair.symbol) else {
            continue;
        };
        let Some(spread) = calculate_spread(spot.ask, futures.bid) else {
            debug!(pair = %pair, spot_ask = spot.ask, "Degenerate spot ask, skipping");
            continue;
        };

        if spread >= min_spread_percent {
            matches.push(SpreadMatch {
                symbol: pair.symbol.clone(),
                spot_venue: pair.spot_venue.clone(),
                spot_ask: spot.ask,
                futures_venue: pair.futures_venue.clone(),
                futures_bid: futures.bid,
                spread_percent: spread,
            });
        }
    }

    matches
}
