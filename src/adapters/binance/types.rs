//! Binance Types
//!
//! REST payloads for `exchangeInfo` and `ticker/bookTicker`.
//!
//! Spot and futures share the same shapes; futures add `contractType` to
//! symbols and `time` to book tickers. Quarterly futures symbols carry a
//! delivery suffix (`BTCUSDT_250328`).

use serde::Deserialize;

use crate::adapters::types::{
    parse_price, DerivativeType, InstrumentMeta, RawCatalog, RawTickers, TickerSnapshot,
};
use crate::core::types::MarketKind;

/// Status string of a tradable symbol
const TRADING_STATUS: &str = "TRADING";

// =============================================================================
// REST Response Types
// =============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct BinanceExchangeInfo {
    pub symbols: Vec<BinanceSymbolInfo>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BinanceSymbolInfo {
    pub symbol: String,
    pub status: String,
    pub base_asset: String,
    pub quote_asset: String,
    /// Futures only: PERPETUAL, CURRENT_QUARTER, NEXT_QUARTER, ...
    #[serde(default)]
    pub contract_type: Option<String>,
}

impl BinanceSymbolInfo {
    fn matches_derivative(&self, futures_type: DerivativeType) -> bool {
        match (futures_type, self.contract_type.as_deref()) {
            (DerivativeType::Swap, Some("PERPETUAL")) => true,
            (DerivativeType::Future, Some("CURRENT_QUARTER" | "NEXT_QUARTER")) => true,
            _ => false,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BinanceBookTicker {
    pub symbol: String,
    pub bid_price: String,
    pub ask_price: String,
    /// Futures only
    #[serde(default)]
    pub time: Option<u64>,
}

// =============================================================================
// Conversions
// =============================================================================

/// Build the catalog for one market kind, keyed by `BASE/QUOTE`.
pub fn to_catalog(info: BinanceExchangeInfo, kind: MarketKind, futures_type: DerivativeType) -> RawCatalog {
    info.symbols
        .into_iter()
        .filter(|s| kind == MarketKind::Spot || s.matches_derivative(futures_type))
        .map(|s| {
            let active = s.status == TRADING_STATUS;
            (
                format!("{}/{}", s.base_asset, s.quote_asset),
                InstrumentMeta::new(s.quote_asset, active),
            )
        })
        .collect()
}

/// Split a futures symbol into its pair part and optional delivery suffix
fn split_delivery(symbol: &str) -> (&str, Option<&str>) {
    match symbol.split_once('_') {
        Some((pair, suffix)) => (pair, Some(suffix)),
        None => (symbol, None),
    }
}

/// Build the ticker map for one market kind.
///
/// On futures, only contracts of the configured flavour are kept and the
/// delivery suffix is dropped so the spelling normalizes like the catalog key.
pub fn to_tickers(
    tickers: Vec<BinanceBookTicker>,
    kind: MarketKind,
    futures_type: DerivativeType,
) -> RawTickers {
    tickers
        .into_iter()
        .filter_map(|t| {
            let spelling = match kind {
                MarketKind::Spot => t.symbol.clone(),
                MarketKind::Futures => match (futures_type, split_delivery(&t.symbol)) {
                    (DerivativeType::Swap, (pair, None)) => pair.to_string(),
                    (DerivativeType::Future, (pair, Some(_))) => pair.to_string(),
                    _ => return None,
                },
            };
            let snapshot = TickerSnapshot::new(parse_price(&t.bid_price), parse_price(&t.ask_price), t.time);
            Some((spelling, snapshot))
        })
        .collect()
}
