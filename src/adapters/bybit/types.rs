//! Bybit Types
//!
//! v5 REST envelopes for `market/instruments-info` and `market/tickers`.
//!
//! Every v5 response is wrapped in `{retCode, retMsg, result, time}`; a
//! non-zero `retCode` is an API error even on HTTP 200. Dated linear futures
//! carry a delivery suffix (`BTCUSDT-27DEC24`).

use serde::Deserialize;

use crate::adapters::errors::{ExchangeError, ExchangeResult};
use crate::adapters::types::{
    parse_price, DerivativeType, InstrumentMeta, RawCatalog, RawTickers, TickerSnapshot,
};
use crate::core::types::MarketKind;

const TRADING_STATUS: &str = "Trading";

// =============================================================================
// Envelope
// =============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BybitResponse<T> {
    pub ret_code: i64,
    #[serde(default)]
    pub ret_msg: String,
    pub result: Option<T>,
    /// Server time in milliseconds
    #[serde(default)]
    pub time: Option<u64>,
}

impl<T> BybitResponse<T> {
    /// Unwrap the envelope, mapping `retCode != 0` to `ExchangeError::Api`
    pub fn into_result(self) -> ExchangeResult<(T, Option<u64>)> {
        if self.ret_code != 0 {
            return Err(ExchangeError::Api {
                code: self.ret_code.to_string(),
                message: self.ret_msg,
            });
        }
        match self.result {
            Some(result) => Ok((result, self.time)),
            None => Err(ExchangeError::InvalidResponse("Bybit response without result".to_string())),
        }
    }
}

// =============================================================================
// Instruments
// =============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstrumentsPage {
    #[serde(default)]
    pub list: Vec<BybitInstrument>,
    /// Empty on the last page
    #[serde(default)]
    pub next_page_cursor: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BybitInstrument {
    pub symbol: String,
    pub base_coin: String,
    pub quote_coin: String,
    pub status: String,
    /// Linear only: LinearPerpetual, LinearFutures
    #[serde(default)]
    pub contract_type: Option<String>,
}

impl BybitInstrument {
    fn matches_derivative(&self, futures_type: DerivativeType) -> bool {
        matches!(
            (futures_type, self.contract_type.as_deref()),
            (DerivativeType::Swap, Some("LinearPerpetual")) | (DerivativeType::Future, Some("LinearFutures"))
        )
    }
}

/// Add one page of instruments to `catalog`, keyed by `BASE/QUOTE`
pub fn extend_catalog(
    catalog: &mut RawCatalog,
    instruments: Vec<BybitInstrument>,
    kind: MarketKind,
    futures_type: DerivativeType,
) {
    let entries = instruments
        .into_iter()
        .filter(|i| kind == MarketKind::Spot || i.matches_derivative(futures_type))
        .map(|i| {
            let active = i.status == TRADING_STATUS;
            (
                format!("{}/{}", i.base_coin, i.quote_coin),
                InstrumentMeta::new(i.quote_coin, active),
            )
        });
    catalog.extend(entries);
}

// =============================================================================
// Tickers
// =============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct TickersPage {
    #[serde(default)]
    pub list: Vec<BybitTicker>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BybitTicker {
    pub symbol: String,
    #[serde(default)]
    pub bid1_price: String,
    #[serde(default)]
    pub ask1_price: String,
}

/// Build the ticker map; all tickers share the envelope `time`.
pub fn to_tickers(
    page: TickersPage,
    time: Option<u64>,
    kind: MarketKind,
    futures_type: DerivativeType,
) -> RawTickers {
    page.list
        .into_iter()
        .filter_map(|t| {
            let spelling = match kind {
                MarketKind::Spot => t.symbol.clone(),
                MarketKind::Futures => match (futures_type, t.symbol.split_once('-')) {
                    (DerivativeType::Swap, None) => t.symbol.clone(),
                    (DerivativeType::Future, Some((pair, _))) => pair.to_string(),
                    _ => return None,
                },
            };
            let snapshot = TickerSnapshot::new(parse_price(&t.bid1_price), parse_price(&t.ask1_price), time);
            Some((spelling, snapshot))
        })
        .collect()
}
