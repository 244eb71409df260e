//! OKX Types
//!
//! v5 REST envelopes for `public/instruments` and `market/tickers`.
//!
//! Envelope: `{code, msg, data}` with `code == "0"` on success. Every field
//! inside `data` is a string, empty when not applicable (derivatives have no
//! `baseCcy`/`quoteCcy`, spot has no `uly`). Derivative ids append a contract
//! suffix to the underlying: `BTC-USDT-SWAP`, `BTC-USDT-250328`.

use serde::Deserialize;

use crate::adapters::errors::{ExchangeError, ExchangeResult};
use crate::adapters::types::{
    parse_price, parse_timestamp, InstrumentMeta, RawCatalog, RawTickers, TickerSnapshot,
};

const LIVE_STATE: &str = "live";

// =============================================================================
// Envelope
// =============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct OkxResponse<T> {
    pub code: String,
    #[serde(default)]
    pub msg: String,
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

impl<T> OkxResponse<T> {
    pub fn into_data(self) -> ExchangeResult<Vec<T>> {
        if self.code != "0" {
            return Err(ExchangeError::Api {
                code: self.code,
                message: self.msg,
            });
        }
        Ok(self.data)
    }
}

// =============================================================================
// Instruments
// =============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OkxInstrument {
    pub inst_id: String,
    #[serde(default)]
    pub uly: String,
    #[serde(default)]
    pub base_ccy: String,
    #[serde(default)]
    pub quote_ccy: String,
    #[serde(default)]
    pub settle_ccy: String,
    pub state: String,
}

impl OkxInstrument {
    /// `(base, quote)` from the spot currencies, else from the underlying
    fn legs(&self) -> Option<(&str, &str)> {
        if !self.base_ccy.is_empty() && !self.quote_ccy.is_empty() {
            return Some((self.base_ccy.as_str(), self.quote_ccy.as_str()));
        }
        self.uly.split_once('-')
    }

    /// Coin-margined contract: settles in something other than its quote leg
    fn is_inverse(&self, quote: &str) -> bool {
        !self.settle_ccy.is_empty() && !self.settle_ccy.eq_ignore_ascii_case(quote)
    }

    /// Catalog entry keyed by `BASE/QUOTE` and quoted in `QUOTE`.
    ///
    /// `None` when no pair can be derived or the contract is inverse.
    fn to_entry(&self) -> Option<(String, InstrumentMeta)> {
        let (base, quote) = self.legs()?;
        if self.quote_ccy.is_empty() && self.is_inverse(quote) {
            return None;
        }
        let active = self.state == LIVE_STATE;
        Some((format!("{}/{}", base, quote), InstrumentMeta::new(quote, active)))
    }
}

pub fn to_catalog(instruments: Vec<OkxInstrument>) -> RawCatalog {
    instruments
        .iter()
        .filter_map(|inst| {
            let entry = inst.to_entry();
            if entry.is_none() {
                tracing::debug!(exchange = "okx", inst_id = %inst.inst_id, "Inverse or unpaired instrument, ignored");
            }
            entry
        })
        .collect()
}

// =============================================================================
// Tickers
// =============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OkxTicker {
    pub inst_id: String,
    #[serde(default)]
    pub bid_px: String,
    #[serde(default)]
    pub ask_px: String,
    #[serde(default)]
    pub ts: String,
}

/// `BTC-USDT-SWAP` → `BTC-USDT`; spot ids pass through
fn underlying(inst_id: &str) -> &str {
    match inst_id.match_indices('-').nth(1) {
        Some((idx, _)) => &inst_id[..idx],
        None => inst_id,
    }
}

/// Build the ticker map. Dated contracts of the same underlying collapse onto
/// one spelling; the last one listed wins.
pub fn to_tickers(tickers: Vec<OkxTicker>) -> RawTickers {
    tickers
        .into_iter()
        .map(|t| {
            let snapshot = TickerSnapshot::new(parse_price(&t.bid_px), parse_price(&t.ask_px), parse_timestamp(&t.ts));
            (underlying(&t.inst_id).to_string(), snapshot)
        })
        .collect()
}
