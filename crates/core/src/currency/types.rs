//! Currency and exchange rate domain types.

use chrono::NaiveDate;
use meridian_shared::types::{CurrencyCode, CurrencyId, ExchangeRateId, RoundingRule};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::pairs::CurrencyPair;

/// A currency configured for an entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    /// Unique identifier.
    pub id: CurrencyId,
    /// Three-letter ISO code.
    pub code: CurrencyCode,
    /// Display name (e.g. "Japanese Yen").
    pub name: String,
    /// Display symbol (e.g. "¥").
    pub symbol: String,
    /// Minor-unit precision; amounts round to `10^-decimal_places`.
    pub decimal_places: u32,
    /// Whether the currency can be used for new documents.
    pub is_active: bool,
    /// Whether this is the entity's reporting currency.
    pub is_base_currency: bool,
    /// How amounts are rounded to `decimal_places`.
    pub rounding_rule: RoundingRule,
}

impl Currency {
    /// Creates an active, non-base currency with the standard rounding rule.
    #[must_use]
    pub fn new(
        code: CurrencyCode,
        name: impl Into<String>,
        symbol: impl Into<String>,
        decimal_places: u32,
    ) -> Self {
        Self {
            id: CurrencyId::new(),
            code,
            name: name.into(),
            symbol: symbol.into(),
            decimal_places,
            is_active: true,
            is_base_currency: false,
            rounding_rule: RoundingRule::Standard,
        }
    }

    /// Returns the currency with a different rounding rule.
    #[must_use]
    pub fn with_rounding_rule(mut self, rule: RoundingRule) -> Self {
        self.rounding_rule = rule;
        self
    }
}

/// Where an exchange rate came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RateSource {
    /// Fetched from a rate provider.
    Api,
    /// Entered by a user.
    #[default]
    Manual,
    /// Published by the entity's bank.
    Bank,
}

impl std::fmt::Display for RateSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Api => write!(f, "api"),
            Self::Manual => write!(f, "manual"),
            Self::Bank => write!(f, "bank"),
        }
    }
}

impl std::str::FromStr for RateSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "api" => Ok(Self::Api),
            "manual" => Ok(Self::Manual),
            "bank" => Ok(Self::Bank),
            _ => Err(format!("Unknown rate source: {s}")),
        }
    }
}

/// Directional exchange rate: 1 unit of `from` buys `rate` units of `to`.
///
/// The reverse direction is a separate record; see [`ExchangeRate::inverse`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeRate {
    /// Unique identifier.
    pub id: ExchangeRateId,
    /// Source currency.
    pub from_currency_id: CurrencyId,
    /// Target currency.
    pub to_currency_id: CurrencyId,
    /// Codes of the source and target currencies.
    pub pair: CurrencyPair,
    /// Multiplier from source to target amounts.
    pub rate: Decimal,
    /// Whether a user overrode the rate by hand.
    pub is_manual: bool,
    /// Where the rate came from.
    pub source: RateSource,
    /// Date this rate is effective.
    pub effective_date: NaiveDate,
}

impl ExchangeRate {
    /// Builds the opposite-direction rate (`1 / rate`) as a new record.
    ///
    /// Returns `None` for a zero rate.
    #[must_use]
    pub fn inverse(&self) -> Option<Self> {
        let rate = Decimal::ONE.checked_div(self.rate)?;
        Some(Self {
            id: ExchangeRateId::new(),
            from_currency_id: self.to_currency_id,
            to_currency_id: self.from_currency_id,
            pair: self.pair.reversed(),
            rate,
            is_manual: self.is_manual,
            source: self.source,
            effective_date: self.effective_date,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::str::FromStr;

    fn code(s: &str) -> CurrencyCode {
        CurrencyCode::new(s).unwrap()
    }

    fn usd_eur(rate: Decimal) -> ExchangeRate {
        ExchangeRate {
            id: ExchangeRateId::new(),
            from_currency_id: CurrencyId::new(),
            to_currency_id: CurrencyId::new(),
            pair: CurrencyPair::new(code("USD"), code("EUR")),
            rate,
            is_manual: false,
            source: RateSource::Api,
            effective_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        }
    }

    #[test]
    fn test_currency_new_defaults() {
        let jpy = Currency::new(code("JPY"), "Japanese Yen", "¥", 0);
        assert!(jpy.is_active);
        assert!(!jpy.is_base_currency);
        assert_eq!(jpy.rounding_rule, RoundingRule::Standard);

        let jpy = jpy.with_rounding_rule(RoundingRule::Down);
        assert_eq!(jpy.rounding_rule, RoundingRule::Down);
    }

    #[test]
    fn test_inverse_swaps_direction() {
        let rate = usd_eur(dec!(0.8));
        let inverse = rate.inverse().unwrap();

        assert_eq!(inverse.pair.to_string(), "EUR/USD");
        assert_eq!(inverse.rate, dec!(1.25));
        assert_eq!(inverse.from_currency_id, rate.to_currency_id);
        assert_eq!(inverse.to_currency_id, rate.from_currency_id);
        assert_ne!(inverse.id, rate.id);
    }

    #[test]
    fn test_inverse_of_zero_rate() {
        assert!(usd_eur(Decimal::ZERO).inverse().is_none());
    }

    #[test]
    fn test_rate_source_round_trip() {
        for source in [RateSource::Api, RateSource::Manual, RateSource::Bank] {
            assert_eq!(RateSource::from_str(&source.to_string()).unwrap(), source);
        }
        assert!(RateSource::from_str("bank_feed").is_err());
    }
}
