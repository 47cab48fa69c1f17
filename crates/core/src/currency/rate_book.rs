//! Directional exchange rate storage.
//!
//! Rates are keyed by ordered pair, then by effective date. Lookups are
//! direct only: a `USD/EUR` rate never answers an `EUR/USD` query.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use meridian_shared::types::{ExchangeRateId, Money};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, info, warn};

use super::conversion::{apply_rounding, convert_currency};
use super::error::CurrencyError;
use super::pairs::CurrencyPair;
use super::registry::CurrencyRegistry;
use super::types::{ExchangeRate, RateSource};
use super::validation::{ExchangeRateInput, validate_rate_input};

/// One row of the rate table screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RateTableRow {
    /// Direction of the rate.
    pub pair: CurrencyPair,
    /// Latest rate on or before the table date, if any.
    pub rate: Option<Decimal>,
    /// Effective date of that rate.
    pub effective_date: Option<NaiveDate>,
    /// Source of that rate.
    pub source: Option<RateSource>,
    /// Whether that rate was entered by hand.
    pub is_manual: Option<bool>,
}

/// In-memory exchange rates for one entity.
#[derive(Debug, Clone, Default)]
pub struct RateBook {
    rates: BTreeMap<CurrencyPair, BTreeMap<NaiveDate, ExchangeRate>>,
}

impl RateBook {
    /// Creates an empty rate book.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a rate, replacing any rate for the same pair and date.
    ///
    /// Both currencies must exist in `registry`. A replaced rate keeps its ID.
    pub fn upsert(
        &mut self,
        input: ExchangeRateInput,
        registry: &CurrencyRegistry,
    ) -> Result<&ExchangeRate, CurrencyError> {
        let pair = validate_rate_input(&input)?;
        let from = registry.resolve(pair.from.as_str())?;
        let to = registry.resolve(pair.to.as_str())?;

        let by_date = self.rates.entry(pair).or_default();
        let id = match by_date.get(&input.effective_date) {
            Some(existing) => {
                debug!(
                    pair = %pair,
                    effective_date = %input.effective_date,
                    old_rate = %existing.rate,
                    new_rate = %input.rate,
                    "Replacing exchange rate"
                );
                existing.id
            }
            None => ExchangeRateId::new(),
        };

        let rate = ExchangeRate {
            id,
            from_currency_id: from.id,
            to_currency_id: to.id,
            pair,
            rate: input.rate,
            is_manual: input.is_manual,
            source: input.source,
            effective_date: input.effective_date,
        };

        info!(
            entity_id = %registry.entity_id(),
            pair = %pair,
            rate = %rate.rate,
            source = %rate.source,
            effective_date = %rate.effective_date,
            "Exchange rate stored"
        );

        let date = rate.effective_date;
        by_date.insert(date, rate);
        Ok(&by_date[&date])
    }

    /// Latest rate for `pair` effective on or before `date`.
    #[must_use]
    pub fn find_rate(&self, pair: CurrencyPair, date: NaiveDate) -> Option<&ExchangeRate> {
        self.rates
            .get(&pair)?
            .range(..=date)
            .next_back()
            .map(|(_, rate)| rate)
    }

    /// Like [`RateBook::find_rate`], but a missing rate is an error.
    pub fn require_rate(
        &self,
        pair: CurrencyPair,
        date: NaiveDate,
    ) -> Result<&ExchangeRate, CurrencyError> {
        self.find_rate(pair, date).ok_or_else(|| {
            warn!(pair = %pair, date = %date, "No exchange rate available");
            CurrencyError::NoExchangeRate { pair, date }
        })
    }

    /// Rate history for `pair`, oldest first.
    pub fn history(&self, pair: CurrencyPair) -> impl Iterator<Item = &ExchangeRate> {
        self.rates.get(&pair).into_iter().flat_map(BTreeMap::values)
    }

    /// Total number of stored rates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rates.values().map(BTreeMap::len).sum()
    }

    /// True when no rate is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// One row per ordered pair of active currencies, with the latest rate
    /// on or before `date`.
    #[must_use]
    pub fn rate_table(&self, registry: &CurrencyRegistry, date: NaiveDate) -> Vec<RateTableRow> {
        registry
            .pairs()
            .into_iter()
            .map(|pair| {
                let rate = self.find_rate(pair, date);
                RateTableRow {
                    pair,
                    rate: rate.map(|r| r.rate),
                    effective_date: rate.map(|r| r.effective_date),
                    source: rate.map(|r| r.source),
                    is_manual: rate.map(|r| r.is_manual),
                }
            })
            .collect()
    }

    /// Converts `amount` from one currency to another at the rate effective
    /// on `date`.
    ///
    /// Both currencies must be active. Converting a currency to itself only
    /// rounds the amount.
    pub fn convert(
        &self,
        amount: Decimal,
        from: &str,
        to: &str,
        date: NaiveDate,
        registry: &CurrencyRegistry,
    ) -> Result<Money, CurrencyError> {
        let source = registry.resolve(from)?;
        let target = registry.resolve(to)?;
        for currency in [source, target] {
            if !currency.is_active {
                return Err(CurrencyError::CurrencyInactive(currency.code));
            }
        }

        if source.id == target.id {
            return Ok(Money::new(apply_rounding(amount, target), target.code));
        }

        let rate = self.require_rate(CurrencyPair::new(source.code, target.code), date)?;
        let money = Money::new(convert_currency(amount, rate, target), target.code);

        debug!(
            pair = %rate.pair,
            amount = %amount,
            rate = %rate.rate,
            converted = %money,
            "Amount converted"
        );
        Ok(money)
    }
}

#[cfg(test)]
#[path = "rate_book_tests.rs"]
mod tests;
