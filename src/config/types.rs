//! Configuration types for the spot/futures scanner
//!
//! This module defines all configuration structs that are loaded from YAML:
//! the venue list with per-market toggles, the catalog filter, the spread
//! threshold and HTTP settings for the venue adapters.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::adapters::types::DerivativeType;
use crate::core::types::{MarketKind, VenueId};
use crate::error::{AppError, Result};

/// Default REST timeout for venue adapters
pub const DEFAULT_HTTP_TIMEOUT_MS: u64 = 10_000;

// ============================================================================
// Configuration Structs
// ============================================================================

/// Which market kinds a venue participates in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketToggle {
    #[serde(default)]
    pub spot: bool,
    #[serde(default)]
    pub futures: bool,
}

impl MarketToggle {
    pub fn new(spot: bool, futures: bool) -> Self {
        Self { spot, futures }
    }

    pub fn is_enabled(&self, kind: MarketKind) -> bool {
        match kind {
            MarketKind::Spot => self.spot,
            MarketKind::Futures => self.futures,
        }
    }

    /// Enabled market kinds, spot first
    pub fn enabled_kinds(&self) -> impl Iterator<Item = MarketKind> + '_ {
        MarketKind::ALL.into_iter().filter(move |kind| self.is_enabled(*kind))
    }
}

/// Single venue configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExchangeConfig {
    /// Display name (e.g., "Binance")
    pub name: String,
    /// Venue id used for adapter selection and as the universe key (e.g., "binance")
    pub id: VenueId,
    /// Market kinds to load for this venue
    #[serde(default)]
    pub markets: MarketToggle,
    /// Derivative listing to treat as "futures"; defaults per venue
    #[serde(default)]
    pub futures_type: Option<DerivativeType>,
    /// REST base URL override for spot endpoints
    #[serde(default)]
    pub spot_url: Option<String>,
    /// REST base URL override for derivative endpoints
    #[serde(default)]
    pub futures_url: Option<String>,
}

impl ExchangeConfig {
    pub fn new(id: impl Into<String>, markets: MarketToggle) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id: VenueId::new(id),
            markets,
            futures_type: None,
            spot_url: None,
            futures_url: None,
        }
    }

    /// Validate venue configuration rules
    pub fn validate(&self) -> Result<()> {
        // Rule: venue id cannot be empty
        if self.id.as_str().trim().is_empty() {
            return Err(AppError::Config(format!(
                "Exchange '{}': id cannot be empty",
                self.name
            )));
        }

        Ok(())
    }
}

/// Catalog filter applied to every venue/market
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Quote currency to keep (e.g., "USDT"), compared case-insensitively
    pub quote: String,
    /// Drop instruments the venue marks inactive
    #[serde(default = "default_only_active")]
    pub only_active: bool,
}

fn default_only_active() -> bool {
    true
}

impl FilterConfig {
    pub fn new(quote: impl Into<String>, only_active: bool) -> Self {
        Self {
            quote: quote.into(),
            only_active,
        }
    }
}

/// Spread detection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArbitrageConfig {
    /// Minimum spread to report, in percent (0.5 = 0.5%)
    pub min_spread_percent: f64,
    /// Repeat the scan every N seconds; absent runs a single pass
    #[serde(default)]
    pub scan_interval_secs: Option<u64>,
    /// Ignore quotes older than this many milliseconds; absent disables expiry
    #[serde(default)]
    pub max_quote_age_ms: Option<u64>,
}

impl ArbitrageConfig {
    pub fn new(min_spread_percent: f64) -> Self {
        Self {
            min_spread_percent,
            scan_interval_secs: None,
            max_quote_age_ms: None,
        }
    }
}

/// HTTP settings shared by the venue adapters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_timeout_ms() -> u64 {
    DEFAULT_HTTP_TIMEOUT_MS
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_ms: DEFAULT_HTTP_TIMEOUT_MS,
        }
    }
}

/// Root application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub exchanges: Vec<ExchangeConfig>,
    pub filters: FilterConfig,
    pub arbitrage: ArbitrageConfig,
    #[serde(default)]
    pub http: HttpConfig,
}

impl AppConfig {
    /// Validate all configuration rules
    pub fn validate(&self) -> Result<()> {
        // Rule: At least one exchange must be configured
        if self.exchanges.is_empty() {
            return Err(AppError::Config(
                "Configuration must contain at least one exchange".to_string(),
            ));
        }

        // Rule: No duplicate exchange ids
        let mut seen_ids = HashSet::new();
        for exchange in &self.exchanges {
            if !seen_ids.insert(exchange.id.as_str()) {
                return Err(AppError::Config(format!(
                    "Duplicate exchange id: '{}'",
                    exchange.id
                )));
            }
        }

        for exchange in &self.exchanges {
            exchange.validate()?;
        }

        if self.filters.quote.trim().is_empty() {
            return Err(AppError::Config(
                "filters.quote cannot be empty".to_string(),
            ));
        }

        // Rule: no NaN or Infinity in the threshold
        if !self.arbitrage.min_spread_percent.is_finite() {
            return Err(AppError::Config(format!(
                "arbitrage.min_spread_percent must be a finite number (got {})",
                self.arbitrage.min_spread_percent
            )));
        }

        if self.arbitrage.scan_interval_secs == Some(0) {
            return Err(AppError::Config(
                "arbitrage.scan_interval_secs must be > 0".to_string(),
            ));
        }

        if self.http.timeout_ms == 0 {
            return Err(AppError::Config("http.timeout_ms must be > 0".to_string()));
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
