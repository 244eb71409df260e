//! Venue-agnostic symbol identity.
//!
//! Venues spell the same instrument differently (`BTC/USDT`, `BTC-USDT`,
//! `btcusdt`). Stripping `/` and `-` and upper-casing gives a canonical key
//! that is compared across venues.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Canonical symbol. Only constructible through [`normalize_symbol`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NormalizedSymbol(String);

impl NormalizedSymbol {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NormalizedSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for NormalizedSymbol {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NormalizedSymbol {
    fn from(raw: &str) -> Self {
        normalize_symbol(raw)
    }
}

/// Canonicalize a venue symbol spelling: drop `/` and `-`, upper-case the rest.
///
/// Pure and idempotent; the empty string maps to the empty string.
pub fn normalize_symbol(raw: &str) -> NormalizedSymbol {
    let stripped: String = raw.chars().filter(|c| *c != '/' && *c != '-').collect();
    NormalizedSymbol(stripped.to_uppercase())
}
