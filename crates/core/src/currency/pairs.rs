//! Ordered currency pairs.
//!
//! An ordered pair is also the key of a stored exchange rate, so `USD/EUR`
//! and `EUR/USD` are distinct pairs backed by distinct rates.

use meridian_shared::types::{CurrencyCode, InvalidCurrencyCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::types::Currency;

/// Source and target currency of a directional rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CurrencyPair {
    /// Currency converted from.
    pub from: CurrencyCode,
    /// Currency converted to.
    pub to: CurrencyCode,
}

/// Error returned when a string is not a `FROM/TO` pair.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParsePairError {
    /// No `/` separator.
    #[error("Invalid currency pair '{0}': expected FROM/TO")]
    MissingSeparator(String),
    /// One side is not a currency code.
    #[error(transparent)]
    InvalidCode(#[from] InvalidCurrencyCode),
}

impl CurrencyPair {
    /// Creates a pair.
    #[must_use]
    pub const fn new(from: CurrencyCode, to: CurrencyCode) -> Self {
        Self { from, to }
    }

    /// Returns the opposite direction.
    #[must_use]
    pub const fn reversed(self) -> Self {
        Self {
            from: self.to,
            to: self.from,
        }
    }

    /// True when both sides are the same currency.
    #[must_use]
    pub fn is_self_pair(&self) -> bool {
        self.from == self.to
    }
}

impl std::fmt::Display for CurrencyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.from, self.to)
    }
}

impl std::str::FromStr for CurrencyPair {
    type Err = ParsePairError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (from, to) = s
            .split_once('/')
            .ok_or_else(|| ParsePairError::MissingSeparator(s.to_string()))?;
        Ok(Self::new(from.parse()?, to.parse()?))
    }
}

/// Enumerates every ordered pair of distinct positions in `currencies`.
///
/// Yields `n * (n - 1)` pairs, both directions included, in input order.
/// Positions are compared, not codes, so duplicated codes in the input
/// do produce a self pair.
#[must_use]
pub fn currency_pairs(currencies: &[Currency]) -> Vec<CurrencyPair> {
    let mut pairs = Vec::with_capacity(currencies.len() * currencies.len().saturating_sub(1));
    for (i, from) in currencies.iter().enumerate() {
        for (j, to) in currencies.iter().enumerate() {
            if i != j {
                pairs.push(CurrencyPair::new(from.code, to.code));
            }
        }
    }
    pairs
}

/// Same as [`currency_pairs`], rendered as `"FROM/TO"` strings.
#[must_use]
pub fn get_currency_pairs(currencies: &[Currency]) -> Vec<String> {
    currency_pairs(currencies)
        .into_iter()
        .map(|pair| pair.to_string())
        .collect()
}
