//! Realized and unrealized foreign exchange gain/loss records.

use chrono::NaiveDate;
use meridian_shared::types::{CurrencyId, GainLossId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::conversion::calculate_gain_loss;
use super::types::Currency;

/// Whether a gain/loss has been settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GainLossStatus {
    /// Settled: the document was paid at a different rate.
    Realized,
    /// Open: revaluation of an outstanding balance.
    Unrealized,
}

/// Difference between an original and a settled amount, in base currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyGainLoss {
    /// Unique identifier.
    pub id: GainLossId,
    /// Foreign currency the underlying document was in.
    pub currency_id: CurrencyId,
    /// Base-currency value when the document was booked.
    pub original_amount: Decimal,
    /// Base-currency value at settlement or revaluation.
    pub settled_amount: Decimal,
    /// `settled - original`, rounded to the base currency.
    pub gain_loss_amount: Decimal,
    /// Realized or unrealized.
    pub status: GainLossStatus,
    /// Date the difference was recognized.
    pub recorded_on: NaiveDate,
}

impl CurrencyGainLoss {
    /// Records a gain/loss with the given status.
    #[must_use]
    pub fn record(
        currency: &Currency,
        original_amount: Decimal,
        settled_amount: Decimal,
        base_currency: &Currency,
        status: GainLossStatus,
        recorded_on: NaiveDate,
    ) -> Self {
        Self {
            id: GainLossId::new(),
            currency_id: currency.id,
            original_amount,
            settled_amount,
            gain_loss_amount: calculate_gain_loss(original_amount, settled_amount, base_currency),
            status,
            recorded_on,
        }
    }

    /// Records a settled gain/loss.
    #[must_use]
    pub fn realized(
        currency: &Currency,
        original_amount: Decimal,
        settled_amount: Decimal,
        base_currency: &Currency,
        recorded_on: NaiveDate,
    ) -> Self {
        Self::record(
            currency,
            original_amount,
            settled_amount,
            base_currency,
            GainLossStatus::Realized,
            recorded_on,
        )
    }

    /// Records a revaluation of an open balance.
    #[must_use]
    pub fn unrealized(
        currency: &Currency,
        original_amount: Decimal,
        settled_amount: Decimal,
        base_currency: &Currency,
        recorded_on: NaiveDate,
    ) -> Self {
        Self::record(
            currency,
            original_amount,
            settled_amount,
            base_currency,
            GainLossStatus::Unrealized,
            recorded_on,
        )
    }

    /// True for a positive difference.
    #[must_use]
    pub fn is_gain(&self) -> bool {
        self.gain_loss_amount > Decimal::ZERO
    }

    /// True for a negative difference.
    #[must_use]
    pub fn is_loss(&self) -> bool {
        self.gain_loss_amount < Decimal::ZERO
    }
}

/// Totals shown on the gain/loss stat cards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GainLossSummary {
    /// Sum of positive differences.
    pub total_gains: Decimal,
    /// Sum of negative differences (zero or negative).
    pub total_losses: Decimal,
    /// `total_gains + total_losses`.
    pub net: Decimal,
    /// Net of realized records.
    pub realized_net: Decimal,
    /// Net of unrealized records.
    pub unrealized_net: Decimal,
    /// Number of records summarized.
    pub record_count: usize,
}

impl GainLossSummary {
    /// Aggregates records.
    #[must_use]
    pub fn from_records(records: &[CurrencyGainLoss]) -> Self {
        records.iter().fold(Self::default(), |mut summary, record| {
            let amount = record.gain_loss_amount;
            if record.is_gain() {
                summary.total_gains = summary.total_gains.saturating_add(amount);
            } else {
                summary.total_losses = summary.total_losses.saturating_add(amount);
            }
            summary.net = summary.net.saturating_add(amount);
            match record.status {
                GainLossStatus::Realized => {
                    summary.realized_net = summary.realized_net.saturating_add(amount);
                }
                GainLossStatus::Unrealized => {
                    summary.unrealized_net = summary.unrealized_net.saturating_add(amount);
                }
            }
            summary.record_count += 1;
            summary
        })
    }
}
