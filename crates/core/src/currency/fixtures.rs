//! Demo currencies and rates for a freshly seeded entity.
//!
//! Nothing here is persisted; a session starts from these and discards its
//! changes when it ends.

use chrono::NaiveDate;
use meridian_shared::config::CurrencyConfig;
use meridian_shared::types::{EntityId, RoundingRule};
use rust_decimal::Decimal;
use tracing::info;

use super::error::CurrencyError;
use super::rate_book::RateBook;
use super::registry::CurrencyRegistry;
use super::types::RateSource;
use super::validation::{CurrencyInput, ExchangeRateInput};

/// Demo currencies, in display order. None is flagged as base; the
/// configured base currency is applied when seeding.
#[must_use]
pub fn default_currencies() -> Vec<CurrencyInput> {
    vec![
        CurrencyInput::new("USD", "US Dollar", "$", 2),
        CurrencyInput::new("EUR", "Euro", "€", 2),
        CurrencyInput::new("GBP", "British Pound", "£", 2),
        CurrencyInput::new("JPY", "Japanese Yen", "¥", 0),
        CurrencyInput::new("CAD", "Canadian Dollar", "$", 2).rounding(RoundingRule::Bankers),
        CurrencyInput::new("CHF", "Swiss Franc", "CHF", 2).inactive(),
    ]
}

/// Demo rates effective on `effective_date`. Each direction is its own rate.
#[must_use]
pub fn default_rates(effective_date: NaiveDate) -> Vec<ExchangeRateInput> {
    let api = |from: &str, to: &str, rate: Decimal| {
        ExchangeRateInput::from_source(from, to, rate, effective_date, RateSource::Api)
    };
    vec![
        api("USD", "EUR", Decimal::new(85, 2)),
        api("EUR", "USD", Decimal::new(118, 2)),
        api("USD", "GBP", Decimal::new(73, 2)),
        api("GBP", "USD", Decimal::new(137, 2)),
        api("USD", "JPY", Decimal::new(11025, 2)),
        api("JPY", "USD", Decimal::new(91, 4)),
        ExchangeRateInput::from_source(
            "USD",
            "CAD",
            Decimal::new(125, 2),
            effective_date,
            RateSource::Bank,
        ),
        ExchangeRateInput::manual("EUR", "GBP", Decimal::new(86, 2), effective_date),
    ]
}

/// Builds a registry holding the demo currencies, with the configured base.
///
/// A configured base that is not among the demo currencies leaves the
/// first demo currency as base.
pub fn seed_registry(
    entity_id: EntityId,
    config: &CurrencyConfig,
) -> Result<CurrencyRegistry, CurrencyError> {
    let mut registry = CurrencyRegistry::new(entity_id, config);
    for mut input in default_currencies() {
        input.is_base_currency = input.is_active && input.code == config.base_currency.as_str();
        registry.add(input)?;
    }

    info!(
        entity_id = %entity_id,
        currencies = registry.len(),
        base = ?registry.base().map(|c| c.code.to_string()),
        "Seeded demo currencies"
    );
    Ok(registry)
}

/// Builds a rate book holding the demo rates.
pub fn seed_rate_book(
    registry: &CurrencyRegistry,
    effective_date: NaiveDate,
) -> Result<RateBook, CurrencyError> {
    let mut book = RateBook::new();
    for input in default_rates(effective_date) {
        book.upsert(input, registry)?;
    }

    info!(rates = book.len(), effective_date = %effective_date, "Seeded demo rates");
    Ok(book)
}
