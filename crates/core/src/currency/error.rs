//! Currency error types.
//!
//! The rounding, formatting and conversion primitives never fail; these
//! errors come from form validation, the registry and the rate book.

use chrono::NaiveDate;
use meridian_shared::AppError;
use meridian_shared::types::CurrencyCode;
use thiserror::Error;

use super::pairs::CurrencyPair;

/// Errors that can occur during currency management.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CurrencyError {
    // ========== Validation Errors ==========
    /// Code is not three ASCII letters.
    #[error("Invalid currency code: {0}")]
    InvalidCode(String),

    /// Name must not be blank.
    #[error("Currency name cannot be blank")]
    BlankName,

    /// Symbol must not be blank.
    #[error("Currency symbol cannot be blank")]
    BlankSymbol,

    /// Decimal places exceed the configured maximum.
    #[error("Decimal places {decimal_places} exceed the maximum of {max}")]
    DecimalPlacesOutOfRange {
        /// Requested decimal places.
        decimal_places: u32,
        /// Allowed maximum.
        max: u32,
    },

    /// Exchange rate must be positive.
    #[error("Exchange rate must be positive")]
    NonPositiveRate,

    /// Source and target currencies must be different.
    #[error("From and to currencies must be different")]
    SameCurrency,

    // ========== Registry Errors ==========
    /// A currency with this code already exists in the entity.
    #[error("Currency {0} already exists")]
    DuplicateCode(CurrencyCode),

    /// Currency not found.
    #[error("Currency '{0}' not found")]
    CurrencyNotFound(String),

    /// Currency is inactive and cannot be used.
    #[error("Currency {0} is inactive")]
    CurrencyInactive(CurrencyCode),

    /// The base currency must stay active.
    #[error("Base currency {0} must be active")]
    BaseCurrencyInactive(CurrencyCode),

    // ========== Rate Errors ==========
    /// No rate stored for the pair on or before the date.
    #[error("No exchange rate found for {pair} on or before {date}")]
    NoExchangeRate {
        /// Requested direction.
        pair: CurrencyPair,
        /// Date for which the rate was requested.
        date: NaiveDate,
    },
}

impl CurrencyError {
    /// Returns the error code for consumers.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidCode(_) => "INVALID_CURRENCY_CODE",
            Self::BlankName => "BLANK_CURRENCY_NAME",
            Self::BlankSymbol => "BLANK_CURRENCY_SYMBOL",
            Self::DecimalPlacesOutOfRange { .. } => "DECIMAL_PLACES_OUT_OF_RANGE",
            Self::NonPositiveRate => "NON_POSITIVE_RATE",
            Self::SameCurrency => "SAME_CURRENCY_EXCHANGE",
            Self::DuplicateCode(_) => "DUPLICATE_CURRENCY",
            Self::CurrencyNotFound(_) => "CURRENCY_NOT_FOUND",
            Self::CurrencyInactive(_) => "CURRENCY_INACTIVE",
            Self::BaseCurrencyInactive(_) => "BASE_CURRENCY_INACTIVE",
            Self::NoExchangeRate { .. } => "NO_EXCHANGE_RATE",
        }
    }

    /// Returns true for errors raised while validating form input.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidCode(_)
                | Self::BlankName
                | Self::BlankSymbol
                | Self::DecimalPlacesOutOfRange { .. }
                | Self::NonPositiveRate
                | Self::SameCurrency
        )
    }
}

impl From<CurrencyError> for AppError {
    fn from(err: CurrencyError) -> Self {
        let message = err.to_string();
        match err {
            CurrencyError::CurrencyNotFound(_) | CurrencyError::NoExchangeRate { .. } => {
                Self::NotFound(message)
            }
            CurrencyError::DuplicateCode(_) => Self::Conflict(message),
            CurrencyError::CurrencyInactive(_) | CurrencyError::BaseCurrencyInactive(_) => {
                Self::BusinessRule(message)
            }
            _ => Self::Validation(message),
        }
    }
}
