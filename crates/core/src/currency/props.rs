//! Property-based tests for currency operations.
//!
//! - Rounding lands on the currency's minor unit
//! - Rounding is idempotent for every rule
//! - Rule ordering: down <= standard/bankers <= up
//! - Pair enumeration size and symmetry

use meridian_shared::types::{CurrencyCode, RoundingRule};
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::conversion::{apply_rounding, calculate_gain_loss, convert_at_rate};
use super::pairs::get_currency_pairs;
use super::types::Currency;

/// Strategy to generate signed amounts with up to 6 fraction digits.
fn amount() -> impl Strategy<Value = Decimal> {
    (-1_000_000_000_000i64..1_000_000_000_000i64).prop_map(|units| Decimal::new(units, 6))
}

/// Strategy to generate positive exchange rates (0.0001 to 10000.0000).
fn positive_rate() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|v| Decimal::new(v, 4))
}

/// Strategy to generate decimal places (0 to 4).
fn decimal_places() -> impl Strategy<Value = u32> {
    0u32..=4
}

fn rounding_rule() -> impl Strategy<Value = RoundingRule> {
    prop::sample::select(RoundingRule::ALL.to_vec())
}

fn currency(decimal_places: u32, rule: RoundingRule) -> Currency {
    Currency::new(CurrencyCode::USD, "US Dollar", "$", decimal_places).with_rounding_rule(rule)
}

/// Strategy to generate distinct currency codes.
fn distinct_codes() -> impl Strategy<Value = Vec<String>> {
    prop::collection::btree_set("[A-Z]{3}", 0..8).prop_map(|codes| codes.into_iter().collect())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Rounded output times 10^d is an integer.
    #[test]
    fn prop_rounding_lands_on_minor_unit(
        amount in amount(),
        decimal_places in decimal_places(),
        rule in rounding_rule(),
    ) {
        let rounded = apply_rounding(amount, &currency(decimal_places, rule));
        let scaled = rounded * Decimal::from(10i64.pow(decimal_places));
        prop_assert_eq!(scaled, scaled.trunc(), "{} is not on the minor unit", rounded);
    }

    /// Rounding an already rounded amount changes nothing.
    #[test]
    fn prop_rounding_is_idempotent(
        amount in amount(),
        decimal_places in decimal_places(),
        rule in rounding_rule(),
    ) {
        let currency = currency(decimal_places, rule);
        let once = apply_rounding(amount, &currency);
        let twice = apply_rounding(once, &currency);
        prop_assert_eq!(once, twice);
    }

    /// Rounding moves an amount by less than one minor unit.
    #[test]
    fn prop_rounding_error_is_below_one_unit(
        amount in amount(),
        decimal_places in decimal_places(),
        rule in rounding_rule(),
    ) {
        let rounded = apply_rounding(amount, &currency(decimal_places, rule));
        let unit = Decimal::new(1, decimal_places);
        prop_assert!((rounded - amount).abs() < unit);
    }

    /// Floor never exceeds the midpoint rules, which never exceed the ceiling.
    #[test]
    fn prop_rules_are_ordered(
        amount in amount(),
        decimal_places in decimal_places(),
    ) {
        let down = apply_rounding(amount, &currency(decimal_places, RoundingRule::Down));
        let standard = apply_rounding(amount, &currency(decimal_places, RoundingRule::Standard));
        let bankers = apply_rounding(amount, &currency(decimal_places, RoundingRule::Bankers));
        let up = apply_rounding(amount, &currency(decimal_places, RoundingRule::Up));

        prop_assert!(down <= standard && standard <= up);
        prop_assert!(down <= bankers && bankers <= up);
        prop_assert!(down <= amount && amount <= up);
    }

    /// Conversion at rate 1 is plain rounding.
    #[test]
    fn prop_unit_rate_only_rounds(
        amount in amount(),
        decimal_places in decimal_places(),
        rule in rounding_rule(),
    ) {
        let currency = currency(decimal_places, rule);
        prop_assert_eq!(
            convert_at_rate(amount, Decimal::ONE, &currency),
            apply_rounding(amount, &currency)
        );
    }

    /// Positive amounts stay non-negative after conversion.
    #[test]
    fn prop_positive_inputs_non_negative_output(
        amount in (1i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2)),
        rate in positive_rate(),
        decimal_places in decimal_places(),
    ) {
        let converted = convert_at_rate(amount, rate, &currency(decimal_places, RoundingRule::Standard));
        prop_assert!(converted >= Decimal::ZERO);
    }

    /// Swapping original and settled negates a standard-rounded gain/loss.
    #[test]
    fn prop_gain_loss_is_antisymmetric(
        original in amount(),
        settled in amount(),
        decimal_places in decimal_places(),
    ) {
        let base = currency(decimal_places, RoundingRule::Standard);
        prop_assert_eq!(
            calculate_gain_loss(original, settled, &base),
            -calculate_gain_loss(settled, original, &base)
        );
    }

    /// n currencies yield n * (n - 1) pairs, each with its reverse, none reflexive.
    #[test]
    fn prop_pairs_size_and_symmetry(codes in distinct_codes()) {
        let currencies: Vec<Currency> = codes
            .iter()
            .map(|c| Currency::new(CurrencyCode::new(c).unwrap(), c.as_str(), "$", 2))
            .collect();
        let pairs = get_currency_pairs(&currencies);

        let n = currencies.len();
        prop_assert_eq!(pairs.len(), n * n.saturating_sub(1));
        for pair in &pairs {
            let (from, to) = pair.split_once('/').unwrap();
            prop_assert_ne!(from, to);
            let reverse = format!("{to}/{from}");
            prop_assert!(pairs.contains(&reverse));
        }
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use rust_decimal_macros::dec;

    /// 2.5 rounds to 2 under bankers, 3 under standard.
    #[test]
    fn test_bankers_vs_standard_midpoint() {
        assert_eq!(
            apply_rounding(dec!(2.5), &currency(0, RoundingRule::Bankers)),
            dec!(2)
        );
        assert_eq!(
            apply_rounding(dec!(2.5), &currency(0, RoundingRule::Standard)),
            dec!(3)
        );
    }

    /// 3.5 rounds to 4 under both midpoint rules.
    #[test]
    fn test_bankers_3_5() {
        assert_eq!(
            apply_rounding(dec!(3.5), &currency(0, RoundingRule::Bankers)),
            dec!(4)
        );
    }

    /// 2.25 rounds to 2.2 at one decimal under bankers.
    #[test]
    fn test_bankers_2_25() {
        assert_eq!(
            apply_rounding(dec!(2.25), &currency(1, RoundingRule::Bankers)),
            dec!(2.2)
        );
    }
}
