//! Core data types for the spot/futures scanning pipeline.
//!
//! These types are the shared vocabulary between the universe builder, the
//! pair generator, the price store and the spread scanner.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

// =============================================================================
// Venue identifier
// =============================================================================

/// Opaque venue identifier (e.g. "binance", "okx"). Keys config, catalogs and quotes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VenueId(String);

impl VenueId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VenueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for VenueId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for VenueId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Borrow<str> for VenueId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

// =============================================================================
// Market kind
// =============================================================================

/// Market kind of a listing. Closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarketKind {
    Spot,
    Futures,
}

impl MarketKind {
    pub const ALL: [MarketKind; 2] = [MarketKind::Spot, MarketKind::Futures];

    pub fn as_str(&self) -> &'static str {
        match self {
            MarketKind::Spot => "spot",
            MarketKind::Futures => "futures",
        }
    }
}

impl fmt::Display for MarketKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Quote
// =============================================================================

/// Latest best bid/ask for one (venue, market, symbol). Replaced wholesale on update.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub bid: f64,
    pub ask: f64,
    /// Epoch milliseconds
    pub timestamp_ms: u64,
}

impl Quote {
    pub fn new(bid: f64, ask: f64, timestamp_ms: u64) -> Self {
        Self {
            bid,
            ask,
            timestamp_ms,
        }
    }
}

// =============================================================================
// Skipped market
// =============================================================================

/// A (venue, market) that produced no data this cycle because its fetch failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedMarket {
    pub venue: VenueId,
    pub kind: MarketKind,
    pub reason: String,
}

impl SkippedMarket {
    pub fn new(venue: VenueId, kind: MarketKind, reason: impl Into<String>) -> Self {
        Self {
            venue,
            kind,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for SkippedMarket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "skip {} {}: {}", self.venue, self.kind, self.reason)
    }
}

/// Current time in epoch milliseconds
#[inline]
pub fn current_time_ms() -> u64 {
    chrono::Utc::now().timestamp_millis().max(0) as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_venue_id_borrow_lookup() {
        let mut map = HashMap::new();
        map.insert(VenueId::new("binance"), 1);
        assert_eq!(map.get("binance"), Some(&1));
        assert_eq!(map.get("okx"), None);
    }

    #[test]
    fn test_market_kind_serde() {
        let kind: MarketKind = serde_yaml::from_str("futures").unwrap();
        assert_eq!(kind, MarketKind::Futures);
        assert_eq!(MarketKind::Spot.to_string(), "spot");
    }

    #[test]
    fn test_market_kind_ordering() {
        assert!(MarketKind::Spot < MarketKind::Futures);
    }

    #[test]
    fn test_skipped_market_display() {
        let skip = SkippedMarket::new(VenueId::new("okx"), MarketKind::Futures, "HTTP 503: down");
        assert_eq!(skip.to_string(), "skip okx futures: HTTP 503: down");
    }

    #[test]
    fn test_current_time_ms_is_recent() {
        // 2020-01-01 in epoch ms
        assert!(current_time_ms() > 1_577_836_800_000);
    }
}
