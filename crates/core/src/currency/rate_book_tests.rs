use super::*;
use crate::currency::validation::CurrencyInput;
use meridian_shared::config::CurrencyConfig;
use meridian_shared::types::{CurrencyCode, EntityId, RoundingRule};
use rust_decimal_macros::dec;

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
}

fn pair(s: &str) -> CurrencyPair {
    s.parse().unwrap()
}

fn registry() -> CurrencyRegistry {
    let mut registry = CurrencyRegistry::new(EntityId::new(), &CurrencyConfig::default());
    registry
        .add(CurrencyInput::new("USD", "US Dollar", "$", 2))
        .unwrap();
    registry.add(CurrencyInput::new("EUR", "Euro", "€", 2)).unwrap();
    registry
        .add(CurrencyInput::new("JPY", "Japanese Yen", "¥", 0))
        .unwrap();
    registry
        .add(CurrencyInput::new("CHF", "Swiss Franc", "CHF", 2).inactive())
        .unwrap();
    registry
}

#[test]
fn test_upsert_and_find() {
    let registry = registry();
    let mut book = RateBook::new();

    let stored = book
        .upsert(
            ExchangeRateInput::manual("USD", "EUR", dec!(0.85), date(10)),
            &registry,
        )
        .unwrap();
    assert_eq!(stored.pair, pair("USD/EUR"));
    assert_eq!(
        stored.from_currency_id,
        registry.find_by_code(CurrencyCode::USD).unwrap().id
    );
    assert!(stored.is_manual);

    let found = book.find_rate(pair("USD/EUR"), date(10)).unwrap();
    assert_eq!(found.rate, dec!(0.85));
}

#[test]
fn test_lookup_is_directional() {
    let registry = registry();
    let mut book = RateBook::new();
    book.upsert(
        ExchangeRateInput::manual("USD", "EUR", dec!(0.85), date(10)),
        &registry,
    )
    .unwrap();

    assert!(book.find_rate(pair("EUR/USD"), date(10)).is_none());
    assert_eq!(
        book.require_rate(pair("EUR/USD"), date(10)).unwrap_err(),
        CurrencyError::NoExchangeRate {
            pair: pair("EUR/USD"),
            date: date(10)
        }
    );
}

#[test]
fn test_find_uses_latest_rate_on_or_before_date() {
    let registry = registry();
    let mut book = RateBook::new();
    for (day, rate) in [(5, dec!(0.84)), (10, dec!(0.85)), (20, dec!(0.86))] {
        book.upsert(
            ExchangeRateInput::manual("USD", "EUR", rate, date(day)),
            &registry,
        )
        .unwrap();
    }

    assert!(book.find_rate(pair("USD/EUR"), date(4)).is_none());
    assert_eq!(book.find_rate(pair("USD/EUR"), date(5)).unwrap().rate, dec!(0.84));
    assert_eq!(book.find_rate(pair("USD/EUR"), date(15)).unwrap().rate, dec!(0.85));
    assert_eq!(book.find_rate(pair("USD/EUR"), date(31)).unwrap().rate, dec!(0.86));
    assert_eq!(book.history(pair("USD/EUR")).count(), 3);
}

#[test]
fn test_upsert_same_date_replaces_and_keeps_id() {
    let registry = registry();
    let mut book = RateBook::new();

    let first_id = book
        .upsert(
            ExchangeRateInput::from_source("USD", "EUR", dec!(0.85), date(10), RateSource::Api),
            &registry,
        )
        .unwrap()
        .id;
    let replaced = book
        .upsert(
            ExchangeRateInput::manual("USD", "EUR", dec!(0.9), date(10)),
            &registry,
        )
        .unwrap();

    assert_eq!(replaced.id, first_id);
    assert_eq!(replaced.rate, dec!(0.9));
    assert_eq!(replaced.source, RateSource::Manual);
    assert_eq!(book.len(), 1);
}

#[test]
fn test_upsert_validates() {
    let registry = registry();
    let mut book = RateBook::new();

    let err = book
        .upsert(
            ExchangeRateInput::manual("USD", "EUR", dec!(-1), date(1)),
            &registry,
        )
        .unwrap_err();
    assert_eq!(err, CurrencyError::NonPositiveRate);

    let err = book
        .upsert(
            ExchangeRateInput::manual("USD", "GBP", dec!(0.7), date(1)),
            &registry,
        )
        .unwrap_err();
    assert_eq!(err, CurrencyError::CurrencyNotFound("GBP".into()));
    assert!(book.is_empty());
}

#[test]
fn test_rate_table_lists_active_pairs() {
    let registry = registry();
    let mut book = RateBook::new();
    book.upsert(
        ExchangeRateInput::manual("USD", "JPY", dec!(110.25), date(10)),
        &registry,
    )
    .unwrap();

    let table = book.rate_table(&registry, date(10));
    // USD, EUR, JPY are active: 3 * 2 rows.
    assert_eq!(table.len(), 6);

    let usd_jpy = table.iter().find(|r| r.pair == pair("USD/JPY")).unwrap();
    assert_eq!(usd_jpy.rate, Some(dec!(110.25)));
    assert_eq!(usd_jpy.effective_date, Some(date(10)));
    assert_eq!(usd_jpy.is_manual, Some(true));

    let jpy_usd = table.iter().find(|r| r.pair == pair("JPY/USD")).unwrap();
    assert_eq!(jpy_usd.rate, None);
}

#[test]
fn test_convert_rounds_to_target_currency() {
    let registry = registry();
    let mut book = RateBook::new();
    book.upsert(
        ExchangeRateInput::manual("USD", "JPY", dec!(110.255), date(1)),
        &registry,
    )
    .unwrap();
    book.upsert(
        ExchangeRateInput::manual("USD", "EUR", dec!(0.85), date(1)),
        &registry,
    )
    .unwrap();

    let yen = book.convert(dec!(10), "USD", "JPY", date(2), &registry).unwrap();
    assert_eq!(yen.amount, dec!(1103));
    assert_eq!(yen.currency.as_str(), "JPY");

    let euro = book.convert(dec!(100), "usd", "eur", date(2), &registry).unwrap();
    assert_eq!(euro.amount, dec!(85.00));
}

#[test]
fn test_convert_same_currency_only_rounds() {
    let registry = registry();
    let book = RateBook::new();
    let money = book
        .convert(dec!(10.005), "USD", "USD", date(1), &registry)
        .unwrap();
    assert_eq!(money.amount, dec!(10.01));
}

#[test]
fn test_convert_requires_active_currencies_and_rate() {
    let registry = registry();
    let book = RateBook::new();

    assert_eq!(
        book.convert(dec!(1), "USD", "CHF", date(1), &registry)
            .unwrap_err(),
        CurrencyError::CurrencyInactive(CurrencyCode::new("CHF").unwrap())
    );
    assert_eq!(
        book.convert(dec!(1), "EUR", "USD", date(1), &registry)
            .unwrap_err()
            .error_code(),
        "NO_EXCHANGE_RATE"
    );
}

#[test]
fn test_convert_uses_target_rounding_rule() {
    let mut registry = registry();
    registry
        .update_rounding("EUR", RoundingRule::Down, 2)
        .unwrap();
    let mut book = RateBook::new();
    book.upsert(
        ExchangeRateInput::manual("USD", "EUR", dec!(0.8567), date(1)),
        &registry,
    )
    .unwrap();

    let euro = book.convert(dec!(1), "USD", "EUR", date(1), &registry).unwrap();
    assert_eq!(euro.amount, dec!(0.85));
}
