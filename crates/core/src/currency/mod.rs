//! Multi-currency handling and exchange rates.
//!
//! The free functions in [`conversion`], [`format`] and [`pairs`] are total
//! and stateless. [`registry`] and [`rate_book`] hold the per-entity state
//! the currency panel edits during a session.

pub mod conversion;
pub mod error;
pub mod fixtures;
pub mod format;
pub mod gain_loss;
pub mod pairs;
pub mod rate_book;
pub mod registry;
pub mod types;
pub mod validation;

#[cfg(test)]
mod props;

pub use conversion::{
    apply_rounding, calculate_gain_loss, convert_at_rate, convert_currency, round_amount,
};
pub use error::CurrencyError;
pub use format::{format_currency, format_with_symbol};
pub use gain_loss::{CurrencyGainLoss, GainLossStatus, GainLossSummary};
pub use pairs::{CurrencyPair, ParsePairError, currency_pairs, get_currency_pairs};
pub use rate_book::{RateBook, RateTableRow};
pub use registry::CurrencyRegistry;
pub use types::{Currency, ExchangeRate, RateSource};
pub use validation::{CurrencyInput, ExchangeRateInput};
