//! Core module - Symbol universe, pair generation, price store and spread scanning
//!
//! # Module Architecture
//!
//! This module uses **explicit re-exports** instead of glob exports (`pub use module::*`)
//! to provide better API visibility and prevent accidental public API changes.
//!
//! ## Usage
//! Prefer importing from `crate::core`:
//! ```ignore
//! use crate::core::{build_universe, generate_pairs, scan_spreads, PriceStore};
//! ```

pub mod catalog;
pub mod cycle;
pub mod pairs;
pub mod price_store;
pub mod quotes;
pub mod scanner;
pub mod symbols;
pub mod types;
pub mod universe;

pub use types::{current_time_ms, MarketKind, Quote, SkippedMarket, VenueId};
pub use symbols::{normalize_symbol, NormalizedSymbol};
pub use catalog::filter_catalog;
pub use universe::{build_universe, SymbolMap, Universe};
pub use pairs::{common_tradables, generate_pairs, MonitoredPair};
pub use price_store::{PriceStore, SharedPriceStore};
pub use quotes::{fetch_quotes, select_quotes, FetchReport};
pub use scanner::{calculate_spread, scan_spreads, SpreadMatch};
pub use cycle::{run_cycle, scan_loop, CycleOutcome, CycleReport};
