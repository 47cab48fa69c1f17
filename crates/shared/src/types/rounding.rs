//! Rounding rules applied when normalizing amounts to a currency's precision.

use rust_decimal::RoundingStrategy;
use serde::{Deserialize, Serialize};

/// Policy for converting a fractional amount to a currency's minor unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundingRule {
    /// Round half away from zero (2.5 -> 3, -2.5 -> -3).
    #[default]
    Standard,
    /// Always round toward positive infinity (ceiling).
    Up,
    /// Always round toward negative infinity (floor).
    Down,
    /// Round half to even (2.5 -> 2, 3.5 -> 4).
    Bankers,
}

impl RoundingRule {
    /// All rules, in declaration order.
    pub const ALL: [Self; 4] = [Self::Standard, Self::Up, Self::Down, Self::Bankers];

    /// Returns the `rust_decimal` strategy implementing this rule.
    #[must_use]
    pub const fn strategy(self) -> RoundingStrategy {
        match self {
            Self::Standard => RoundingStrategy::MidpointAwayFromZero,
            Self::Up => RoundingStrategy::ToPositiveInfinity,
            Self::Down => RoundingStrategy::ToNegativeInfinity,
            Self::Bankers => RoundingStrategy::MidpointNearestEven,
        }
    }

    /// Returns the lowercase name used in configuration and serialization.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Up => "up",
            Self::Down => "down",
            Self::Bankers => "bankers",
        }
    }
}

impl std::fmt::Display for RoundingRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RoundingRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "standard" => Ok(Self::Standard),
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            "bankers" => Ok(Self::Bankers),
            _ => Err(format!("Unknown rounding rule: {s}")),
        }
    }
}
