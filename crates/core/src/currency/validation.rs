//! Form validation for currency and exchange rate input.

use chrono::NaiveDate;
use meridian_shared::types::{CurrencyCode, RoundingRule};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::CurrencyError;
use super::pairs::CurrencyPair;
use super::types::RateSource;

/// Input from the "add currency" form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrencyInput {
    /// ISO code, any case.
    pub code: String,
    /// Display name.
    pub name: String,
    /// Display symbol.
    pub symbol: String,
    /// Minor-unit precision.
    pub decimal_places: u32,
    /// Rounding rule; falls back to the entity default when unset.
    #[serde(default)]
    pub rounding_rule: Option<RoundingRule>,
    /// Whether the currency starts active.
    #[serde(default = "default_true")]
    pub is_active: bool,
    /// Whether the currency becomes the entity's base currency.
    #[serde(default)]
    pub is_base_currency: bool,
}

fn default_true() -> bool {
    true
}

impl CurrencyInput {
    /// Creates an input for an active, non-base currency.
    #[must_use]
    pub fn new(code: &str, name: &str, symbol: &str, decimal_places: u32) -> Self {
        Self {
            code: code.to_string(),
            name: name.to_string(),
            symbol: symbol.to_string(),
            decimal_places,
            rounding_rule: None,
            is_active: true,
            is_base_currency: false,
        }
    }

    /// Marks the input as the base currency.
    #[must_use]
    pub fn base(mut self) -> Self {
        self.is_base_currency = true;
        self
    }

    /// Marks the input as inactive.
    #[must_use]
    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }

    /// Sets an explicit rounding rule.
    #[must_use]
    pub fn rounding(mut self, rule: RoundingRule) -> Self {
        self.rounding_rule = Some(rule);
        self
    }
}

/// Input from the "add exchange rate" form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExchangeRateInput {
    /// Source currency code.
    pub from_currency: String,
    /// Target currency code.
    pub to_currency: String,
    /// 1 `from_currency` = `rate` `to_currency`.
    pub rate: Decimal,
    /// Date this rate is effective.
    pub effective_date: NaiveDate,
    /// Where the rate came from.
    #[serde(default)]
    pub source: RateSource,
    /// Whether the rate was entered by hand.
    #[serde(default)]
    pub is_manual: bool,
}

impl ExchangeRateInput {
    /// Creates a manually entered rate.
    #[must_use]
    pub fn manual(from: &str, to: &str, rate: Decimal, effective_date: NaiveDate) -> Self {
        Self {
            from_currency: from.to_string(),
            to_currency: to.to_string(),
            rate,
            effective_date,
            source: RateSource::Manual,
            is_manual: true,
        }
    }

    /// Creates a rate from an automated source.
    #[must_use]
    pub fn from_source(
        from: &str,
        to: &str,
        rate: Decimal,
        effective_date: NaiveDate,
        source: RateSource,
    ) -> Self {
        Self {
            from_currency: from.to_string(),
            to_currency: to.to_string(),
            rate,
            effective_date,
            source,
            is_manual: false,
        }
    }
}

/// Parses a currency code, mapping failures to `CurrencyError::InvalidCode`.
pub fn parse_code(code: &str) -> Result<CurrencyCode, CurrencyError> {
    CurrencyCode::new(code).map_err(|_| CurrencyError::InvalidCode(code.to_string()))
}

/// Validates a currency form and returns its normalized code.
///
/// `max_decimal_places` is the configured ceiling.
pub fn validate_currency_input(
    input: &CurrencyInput,
    max_decimal_places: u32,
) -> Result<CurrencyCode, CurrencyError> {
    let code = parse_code(&input.code)?;

    if input.name.trim().is_empty() {
        return Err(CurrencyError::BlankName);
    }
    if input.symbol.trim().is_empty() {
        return Err(CurrencyError::BlankSymbol);
    }
    validate_decimal_places(input.decimal_places, max_decimal_places)?;

    Ok(code)
}

/// Checks `decimal_places` against the configured ceiling.
pub fn validate_decimal_places(decimal_places: u32, max: u32) -> Result<(), CurrencyError> {
    if decimal_places > max {
        return Err(CurrencyError::DecimalPlacesOutOfRange {
            decimal_places,
            max,
        });
    }
    Ok(())
}

/// Validates an exchange rate form and returns its directional pair.
pub fn validate_rate_input(input: &ExchangeRateInput) -> Result<CurrencyPair, CurrencyError> {
    if input.rate <= Decimal::ZERO {
        return Err(CurrencyError::NonPositiveRate);
    }

    let pair = CurrencyPair::new(
        parse_code(&input.from_currency)?,
        parse_code(&input.to_currency)?,
    );
    if pair.is_self_pair() {
        return Err(CurrencyError::SameCurrency);
    }

    Ok(pair)
}
