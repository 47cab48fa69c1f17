//! Display formatting for currency amounts.

use rust_decimal::Decimal;

use super::conversion::apply_rounding;
use super::types::Currency;

/// Symbol rendered with en-US locale conventions (grouping, sign first).
const LOCALE_SYMBOL: &str = "$";

/// Formats `amount` for display after rounding it to the currency's precision.
///
/// - `show_symbol` with a `$` symbol: en-US style, `-$1,234.50`.
/// - `show_symbol` with any other symbol: symbol then the plain number,
///   no grouping, `¥1235`, `€-5.00`.
/// - without symbol: plain number, `1234.50`.
///
/// The fraction always has exactly `decimal_places` digits.
#[must_use]
pub fn format_currency(amount: Decimal, currency: &Currency, show_symbol: bool) -> String {
    let rounded = apply_rounding(amount, currency);
    let fixed = to_fixed(rounded, currency.decimal_places);

    if !show_symbol {
        return fixed;
    }

    if currency.symbol == LOCALE_SYMBOL {
        let (negative, digits) = match fixed.strip_prefix('-') {
            Some(digits) => (true, digits),
            None => (false, fixed.as_str()),
        };
        let sign = if negative { "-" } else { "" };
        format!("{sign}{LOCALE_SYMBOL}{}", add_thousands_separator(digits))
    } else {
        format!("{}{fixed}", currency.symbol)
    }
}

/// [`format_currency`] with the symbol shown.
#[must_use]
pub fn format_with_symbol(amount: Decimal, currency: &Currency) -> String {
    format_currency(amount, currency, true)
}

/// Renders `value` with exactly `decimal_places` fraction digits.
///
/// `rescale` stops short of the requested scale when the integer part is
/// too wide; the missing zeros are appended as text.
fn to_fixed(value: Decimal, decimal_places: u32) -> String {
    let mut value = value;
    value.rescale(decimal_places);
    if value.is_zero() {
        value.set_sign_positive(true);
    }

    let mut fixed = value.to_string();
    let missing = decimal_places.saturating_sub(value.scale());
    if missing > 0 {
        if value.scale() == 0 {
            fixed.push('.');
        }
        fixed.extend(std::iter::repeat_n('0', usize::try_from(missing).unwrap_or(0)));
    }
    fixed
}

/// Inserts `,` between groups of three integer digits.
fn add_thousands_separator(s: &str) -> String {
    let (integer_part, fraction_part) = match s.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (s, None),
    };

    let digits: Vec<char> = integer_part.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*digit);
    }

    match fraction_part {
        Some(fraction) => format!("{grouped}.{fraction}"),
        None => grouped,
    }
}
