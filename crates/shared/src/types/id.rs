//! Typed IDs for type-safe entity references.
//!
//! Using typed IDs prevents accidentally passing a `CurrencyId` where an
//! `ExchangeRateId` is expected.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Macro to generate typed ID wrappers.
macro_rules! typed_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub Uuid);

        impl $name {
            /// Creates a new random ID using UUID v7 (time-ordered).
            #[must_use]
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

typed_id!(
    EntityId,
    "Unique identifier for a tenant entity (the scope owning a currency set)."
);
typed_id!(CurrencyId, "Unique identifier for a configured currency.");
typed_id!(ExchangeRateId, "Unique identifier for a stored exchange rate.");
typed_id!(GainLossId, "Unique identifier for a currency gain/loss record.");

#[cfg(test)]
#[path = "id_tests.rs"]
mod tests;
