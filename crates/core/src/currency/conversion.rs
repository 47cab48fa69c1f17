//! Rounding, conversion and gain/loss arithmetic.
//!
//! Every function here is total: no errors, no panics. Arithmetic that
//! would leave `Decimal`'s range saturates at its bounds.

use meridian_shared::types::RoundingRule;
use rust_decimal::Decimal;

use super::types::{Currency, ExchangeRate};

/// Rounds `amount` to `decimal_places` fraction digits using `rule`.
#[must_use]
pub fn round_amount(amount: Decimal, decimal_places: u32, rule: RoundingRule) -> Decimal {
    amount.round_dp_with_strategy(decimal_places, rule.strategy())
}

/// Rounds `amount` to the currency's precision using its rounding rule.
///
/// | rule       | 2.345 @ 2dp | -2.345 @ 2dp |
/// |------------|-------------|--------------|
/// | `standard` | 2.35        | -2.35        |
/// | `up`       | 2.35        | -2.34        |
/// | `down`     | 2.34        | -2.35        |
/// | `bankers`  | 2.34        | -2.34        |
#[must_use]
pub fn apply_rounding(amount: Decimal, currency: &Currency) -> Decimal {
    round_amount(amount, currency.decimal_places, currency.rounding_rule)
}

/// Multiplies `amount` by `rate` and rounds to the target currency.
#[must_use]
pub fn convert_at_rate(amount: Decimal, rate: Decimal, target: &Currency) -> Decimal {
    apply_rounding(amount.saturating_mul(rate), target)
}

/// Converts `amount` with a stored exchange rate, rounding to `target`.
///
/// The caller picks a rate whose direction matches the conversion; the
/// rate's currencies are not checked against `target`.
#[must_use]
pub fn convert_currency(amount: Decimal, exchange_rate: &ExchangeRate, target: &Currency) -> Decimal {
    convert_at_rate(amount, exchange_rate.rate, target)
}

/// Difference between settled and original amounts in base currency terms.
///
/// Positive is a gain, negative a loss.
#[must_use]
pub fn calculate_gain_loss(
    original_amount: Decimal,
    settled_amount: Decimal,
    base_currency: &Currency,
) -> Decimal {
    apply_rounding(settled_amount.saturating_sub(original_amount), base_currency)
}
