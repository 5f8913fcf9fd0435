// ============================================================================
// Rounding Policy
// Rounding strategies shared by Decimal and Money
// ============================================================================

use super::decimal::Decimal;
use rust_decimal::RoundingStrategy;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default number of fractional digits kept by a rounding policy.
pub const DEFAULT_PRECISION: u32 = 4;

/// How a discarded fractional remainder affects the kept digits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RoundingMode {
    /// Half to the neighbour whose last kept digit is even (banker's rounding)
    #[default]
    ToNearestEven,
    /// Half away from zero
    ToNearestAway,
    /// Truncate; magnitude never increases
    ToZero,
    /// Any non-zero remainder increases magnitude
    AwayFromZero,
}

impl RoundingMode {
    /// The equivalent `rust_decimal` strategy.
    #[inline]
    pub(crate) fn strategy(self) -> RoundingStrategy {
        match self {
            RoundingMode::ToNearestEven => RoundingStrategy::MidpointNearestEven,
            RoundingMode::ToNearestAway => RoundingStrategy::MidpointAwayFromZero,
            RoundingMode::ToZero => RoundingStrategy::ToZero,
            RoundingMode::AwayFromZero => RoundingStrategy::AwayFromZero,
        }
    }
}

/// A rounding mode together with the number of fractional digits to keep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RoundingPolicy {
    pub mode: RoundingMode,
    pub precision: u32,
}

impl RoundingPolicy {
    pub const fn new(mode: RoundingMode, precision: u32) -> Self {
        Self { mode, precision }
    }

    /// Round `value` to this policy's precision.
    #[inline]
    pub fn apply(&self, value: Decimal) -> Decimal {
        value.round(self.mode, self.precision)
    }

    /// Round `value` with this policy's mode but a different precision.
    #[inline]
    pub fn apply_with_precision(&self, value: Decimal, precision: u32) -> Decimal {
        value.round(self.mode, precision)
    }
}

impl Default for RoundingPolicy {
    fn default() -> Self {
        Self::new(RoundingMode::default(), DEFAULT_PRECISION)
    }
}
