//! Common types used across the application.

pub mod code;
pub mod id;
pub mod money;
pub mod rounding;

pub use code::{CurrencyCode, InvalidCurrencyCode};
pub use id::*;
pub use money::Money;
pub use rounding::RoundingRule;
