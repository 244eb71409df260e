//! Exchange adapters for Binance, Bybit, OKX
//!
//! Venue REST payloads are translated into the normalized catalog and ticker
//! shapes consumed by the scanning core through `CatalogProvider` and
//! `QuoteProvider`.

pub mod binance;
pub mod bybit;
pub mod errors;
pub mod factory;
pub mod okx;
pub mod shared;
pub mod traits;
pub mod types;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types for convenience
pub use errors::{ExchangeError, ExchangeResult};
pub use factory::{create_adapter, futures_default_type, market_label, AnyAdapter, VenueRegistry};
pub use traits::{CatalogProvider, QuoteProvider, VenueAdapter};
pub use types::{DerivativeType, InstrumentMeta, RawCatalog, RawTickers, TickerSnapshot};
