//! Catalog filtering: raw venue catalog → normalized symbol set.

use std::collections::BTreeSet;

use crate::adapters::types::RawCatalog;
use crate::core::symbols::{normalize_symbol, NormalizedSymbol};

/// Select the instruments quoted in `quote_currency` (case-insensitive) and,
/// when `only_active` is set, currently active. Spellings that normalize to the
/// same symbol collapse into one entry.
pub fn filter_catalog(
    raw_catalog: &RawCatalog,
    quote_currency: &str,
    only_active: bool,
) -> BTreeSet<NormalizedSymbol> {
    let wanted_quote = quote_currency.to_uppercase();

    raw_catalog
        .iter()
        .filter(|(_, meta)| !only_active || meta.active)
        .filter(|(_, meta)| meta.quote.to_uppercase() == wanted_quote)
        .map(|(spelling, _)| normalize_symbol(spelling))
        .collect()
}
