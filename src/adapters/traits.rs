//! Collaborator traits consumed by the scanning core
//!
//! The core only needs two things from the outside world: a venue's
//! instrument catalog and a venue's current tickers, both per market kind.
//! Everything venue-specific stays behind these traits.

use async_trait::async_trait;

use crate::adapters::errors::ExchangeResult;
use crate::adapters::types::{RawCatalog, RawTickers};
use crate::core::types::{MarketKind, VenueId};

/// Source of venue instrument catalogs
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Fetch the full catalog of `venue` for `kind`.
    ///
    /// A failure means "no data for this venue/kind this cycle".
    async fn fetch_catalog(&self, venue: &VenueId, kind: MarketKind) -> ExchangeResult<RawCatalog>;
}

/// Source of venue best bid/ask snapshots
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    /// Fetch every ticker of `venue` for `kind` in one call.
    async fn fetch_tickers(&self, venue: &VenueId, kind: MarketKind) -> ExchangeResult<RawTickers>;
}

/// Single-venue REST adapter
///
/// Implemented by each venue module; `VenueRegistry` fans the two
/// collaborator traits out to these by venue id.
#[async_trait]
pub trait VenueAdapter: Send + Sync {
    /// Load the instrument catalog for a market kind
    ///
    /// Keys are `BASE/QUOTE` spellings so that spot and derivative listings of
    /// the same pair normalize identically.
    async fn load_markets(&self, kind: MarketKind) -> ExchangeResult<RawCatalog>;

    /// Fetch best bid/ask for every instrument of a market kind
    async fn fetch_tickers(&self, kind: MarketKind) -> ExchangeResult<RawTickers>;

    /// Exchange name identifier ("binance", "bybit", "okx")
    fn exchange_name(&self) -> &'static str;
}
