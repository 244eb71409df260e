//! Normalized collaborator shapes shared by every venue adapter
//!
//! Adapters translate venue payloads into these types; the core only ever sees
//! a `RawCatalog` (instrument metadata keyed by raw spelling) and a
//! `RawTickers` map (best bid/ask keyed by raw spelling).

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

// =============================================================================
// Catalog
// =============================================================================

/// Instrument metadata as exposed by a venue catalog.
///
/// A missing `quote` deserializes to `""` (fails every quote filter) and a
/// missing `active` flag defaults to `true`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstrumentMeta {
    #[serde(default)]
    pub quote: String,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl InstrumentMeta {
    pub fn new(quote: impl Into<String>, active: bool) -> Self {
        Self {
            quote: quote.into(),
            active,
        }
    }
}

/// Venue catalog: raw symbol spelling → metadata
pub type RawCatalog = HashMap<String, InstrumentMeta>;

// =============================================================================
// Tickers
// =============================================================================

/// Best bid/ask snapshot for one instrument. Any field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TickerSnapshot {
    pub bid: Option<f64>,
    pub ask: Option<f64>,
    pub timestamp_ms: Option<u64>,
}

impl TickerSnapshot {
    pub fn new(bid: Option<f64>, ask: Option<f64>, timestamp_ms: Option<u64>) -> Self {
        Self {
            bid,
            ask,
            timestamp_ms,
        }
    }
}

/// Venue tickers: raw symbol spelling → snapshot
pub type RawTickers = HashMap<String, TickerSnapshot>;

// =============================================================================
// Derivative flavour
// =============================================================================

/// Which derivative listing a venue's "futures" market refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DerivativeType {
    /// Perpetual swaps
    Swap,
    /// Dated delivery futures
    Future,
}

impl fmt::Display for DerivativeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DerivativeType::Swap => write!(f, "swap"),
            DerivativeType::Future => write!(f, "future"),
        }
    }
}

/// Parse a venue decimal string ("64000.10"). Empty, unparsable or
/// non-finite values are treated as absent.
pub fn parse_price(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse a millisecond timestamp that venues send either as a string or a number.
pub fn parse_timestamp(raw: &str) -> Option<u64> {
    raw.trim().parse::<u64>().ok()
}
