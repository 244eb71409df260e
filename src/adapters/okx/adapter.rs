//! OKX Adapter Implementation
//!
//! Docs: https://www.okx.com/docs-v5/en/#public-data-rest-api-get-instruments

use async_trait::async_trait;

use crate::adapters::errors::ExchangeResult;
use crate::adapters::shared::RestClient;
use crate::adapters::traits::VenueAdapter;
use crate::adapters::types::{RawCatalog, RawTickers};
use crate::core::types::MarketKind;

use super::config::OkxConfig;
use super::types::{to_catalog, to_tickers, OkxInstrument, OkxResponse, OkxTicker};

/// OKX adapter implementing VenueAdapter
#[derive(Debug, Clone)]
pub struct OkxAdapter {
    config: OkxConfig,
    rest: RestClient,
}

impl OkxAdapter {
    pub fn new(config: OkxConfig) -> ExchangeResult<Self> {
        let rest = RestClient::new("okx", config.timeout_ms)?;
        Ok(Self { config, rest })
    }
}

#[async_trait]
impl VenueAdapter for OkxAdapter {
    async fn load_markets(&self, kind: MarketKind) -> ExchangeResult<RawCatalog> {
        let url = self.config.instruments_url(kind);
        let query = [("instType", self.config.inst_type(kind))];
        let resp: OkxResponse<OkxInstrument> = self.rest.get_json(&url, &query).await?;
        let catalog = to_catalog(resp.into_data()?);

        tracing::debug!(exchange = "okx", market = %kind, instruments = catalog.len(), "Catalog loaded");
        Ok(catalog)
    }

    async fn fetch_tickers(&self, kind: MarketKind) -> ExchangeResult<RawTickers> {
        let url = self.config.tickers_url(kind);
        let query = [("instType", self.config.inst_type(kind))];
        let resp: OkxResponse<OkxTicker> = self.rest.get_json(&url, &query).await?;
        Ok(to_tickers(resp.into_data()?))
    }

    fn exchange_name(&self) -> &'static str {
        "okx"
    }
}
