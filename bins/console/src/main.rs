//! Meridian currency console.
//!
//! Seeds a demo entity with currencies and exchange rates, then prints what
//! the multi-currency panel shows: currencies, the rate table, sample
//! conversions and the gain/loss stat cards.
//!
//! Usage: cargo run --bin meridian-console [amount]

use anyhow::Context;
use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use tracing::info;

use meridian_core::currency::{
    CurrencyGainLoss, CurrencyRegistry, GainLossSummary, RateBook, fixtures, format_currency,
    format_with_symbol,
};
use meridian_core::preferences::{ConsoleState, MemoryPreferenceStore, OnboardingStep};
use meridian_shared::{AppConfig, logging, types::EntityId};

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;
    logging::init_tracing(&config.logging)?;

    let amount = match std::env::args().nth(1) {
        Some(raw) => raw
            .parse::<Decimal>()
            .with_context(|| format!("'{raw}' is not a decimal amount"))?,
        None => Decimal::new(12345, 1),
    };

    let entity_id = EntityId::new();
    let today = Utc::now().date_naive();
    info!(entity_id = %entity_id, %today, "Starting currency console");

    let registry = fixtures::seed_registry(entity_id, &config.currency)?;
    let book = fixtures::seed_rate_book(&registry, today)?;

    print_currencies(&registry, amount);
    print_rate_table(&registry, &book, today)?;
    print_conversions(&registry, &book, amount, today);
    print_gain_loss(&registry, today);
    print_onboarding(entity_id)?;

    Ok(())
}

fn print_currencies(registry: &CurrencyRegistry, amount: Decimal) {
    println!("Currencies:");
    for currency in registry.list() {
        let flags = match (currency.is_base_currency, currency.is_active) {
            (true, _) => "base",
            (false, true) => "active",
            (false, false) => "inactive",
        };
        println!(
            "  {} {:<16} {:<8} dp={} rule={:<8} {:>16}  [{}]",
            currency.code,
            currency.name,
            currency.symbol,
            currency.decimal_places,
            currency.rounding_rule,
            format_with_symbol(amount, currency),
            flags,
        );
    }
    println!();
}

fn print_rate_table(
    registry: &CurrencyRegistry,
    book: &RateBook,
    date: NaiveDate,
) -> anyhow::Result<()> {
    let pairs: Vec<String> = registry.pairs().iter().map(ToString::to_string).collect();
    println!("Pairs: {}", pairs.join(", "));

    let table = book.rate_table(registry, date);
    println!("Rate table ({} pairs, {} stored rates):", table.len(), book.len());
    println!("{}", serde_json::to_string_pretty(&table)?);
    println!();
    Ok(())
}

fn print_conversions(registry: &CurrencyRegistry, book: &RateBook, amount: Decimal, date: NaiveDate) {
    let Some(base) = registry.base() else {
        println!("No base currency configured, skipping conversions.");
        return;
    };

    println!("Converting {} {}:", format_currency(amount, base, false), base.code);
    for target in registry.active() {
        match book.convert(amount, base.code.as_str(), target.code.as_str(), date, registry) {
            Ok(money) => println!("  -> {}", format_with_symbol(money.amount, target)),
            Err(e) => println!("  -> {}: {} ({})", target.code, e, e.error_code()),
        }
    }
    println!();
}

fn print_gain_loss(registry: &CurrencyRegistry, date: NaiveDate) {
    let Some(base) = registry.base() else {
        return;
    };

    let records: Vec<CurrencyGainLoss> = registry
        .active()
        .filter(|c| !c.is_base_currency)
        .enumerate()
        .map(|(i, currency)| {
            let step = Decimal::from(i64::try_from(i).unwrap_or(0));
            let original = Decimal::new(100_000, 2);
            let settled = original + Decimal::new(2_575, 2) - step * Decimal::new(1_850, 2);
            if i % 2 == 0 {
                CurrencyGainLoss::realized(currency, original, settled, base, date)
            } else {
                CurrencyGainLoss::unrealized(currency, original, settled, base, date)
            }
        })
        .collect();

    let summary = GainLossSummary::from_records(&records);
    println!("Gain/loss ({} records):", summary.record_count);
    println!("  gains      {}", format_with_symbol(summary.total_gains, base));
    println!("  losses     {}", format_with_symbol(summary.total_losses, base));
    println!("  net        {}", format_with_symbol(summary.net, base));
    println!("  realized   {}", format_with_symbol(summary.realized_net, base));
    println!("  unrealized {}", format_with_symbol(summary.unrealized_net, base));
    println!();
}

fn print_onboarding(entity_id: EntityId) -> anyhow::Result<()> {
    let mut store = MemoryPreferenceStore::new();
    let mut state = ConsoleState::load(&store, entity_id)?;
    state.complete_step(OnboardingStep::CompanyProfile);
    state.complete_step(OnboardingStep::Currencies);
    state.save(&mut store, entity_id)?;

    let state = ConsoleState::load(&store, entity_id)?;
    println!(
        "Onboarding: {}% complete, next step {:?}",
        state.progress_percent(),
        state.next_step()
    );
    Ok(())
}
