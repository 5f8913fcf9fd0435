// ============================================================================
// Exact Decimal
// Base-10 arithmetic with explicit rounding
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::rounding::RoundingMode;
use rust_decimal::prelude::ToPrimitive;
use std::fmt;
use std::ops::Neg;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Exact base-10 number.
///
/// Internally a `rust_decimal::Decimal`: a 96-bit unscaled integer, a sign and
/// a scale of 0..=28 fractional digits. Arithmetic never goes through binary
/// floating point; `f64` is accepted and produced only by [`Decimal::from_f64`]
/// and [`Decimal::to_f64`].
///
/// `Decimal` is `Copy` and every operation returns a new value, so there is
/// no aliasing between operands and results.
///
/// # Example
/// ```
/// use money_format::numeric::{Decimal, RoundingMode};
///
/// let x: Decimal = "2.34645".parse().unwrap();
/// assert_eq!(x.round(RoundingMode::ToNearestEven, 4).to_string(), "2.3464");
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[repr(transparent)]
pub struct Decimal(rust_decimal::Decimal);

impl Decimal {
    /// Largest number of fractional digits the backing type can hold.
    pub const MAX_SCALE: u32 = 28;

    /// Zero value
    pub const ZERO: Self = Self(rust_decimal::Decimal::ZERO);

    /// One (1)
    pub const ONE: Self = Self(rust_decimal::Decimal::ONE);

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from an unscaled integer and a scale: `new(12345, 2)` is `123.45`.
    ///
    /// # Errors
    /// Returns `InvalidInput` if `scale` exceeds [`Decimal::MAX_SCALE`].
    pub fn new(num: i64, scale: u32) -> NumericResult<Self> {
        rust_decimal::Decimal::try_new(num, scale)
            .map(Self)
            .map_err(|_| NumericError::InvalidInput)
    }

    /// Create from an integer value.
    #[inline]
    pub fn from_integer(value: i64) -> Self {
        Self(rust_decimal::Decimal::from(value))
    }

    /// Convert from a native float.
    ///
    /// Uses the shortest decimal text that round-trips to the same `f64`, so a
    /// literal such as `2.34645` becomes exactly `2.34645` rather than the
    /// nearest binary approximation. Digits beyond 28 fractional places are
    /// rounded half-to-even.
    ///
    /// # Errors
    /// - `InvalidInput` for NaN or infinite values
    /// - `Overflow` if the magnitude does not fit the 96-bit range
    pub fn from_f64(value: f64) -> NumericResult<Self> {
        if !value.is_finite() {
            return Err(NumericError::InvalidInput);
        }
        // f64 Display never uses exponent notation and is the shortest round-trip form
        let text = value.to_string();
        rust_decimal::Decimal::from_str(&text)
            .map(Self)
            .map_err(|_| NumericError::Overflow)
    }

    /// Convert to the nearest native float.
    ///
    /// Intended for handing values to external code only.
    ///
    /// # Errors
    /// Returns `Overflow` if the backing conversion yields no float.
    pub fn to_f64(self) -> NumericResult<f64> {
        self.0.to_f64().ok_or(NumericError::Overflow)
    }

    /// Borrow the backing `rust_decimal::Decimal`.
    #[inline]
    pub const fn as_inner(&self) -> &rust_decimal::Decimal {
        &self.0
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Returns -1, 0 or +1 according to the sign of the value.
    #[inline]
    pub fn sign(self) -> i32 {
        if self.0.is_zero() {
            0
        } else if self.0.is_sign_negative() {
            -1
        } else {
            1
        }
    }

    /// Check if value is zero.
    #[inline]
    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }

    /// Check if value is strictly negative.
    #[inline]
    pub fn is_negative(self) -> bool {
        self.sign() < 0
    }

    /// Check if value is strictly positive.
    #[inline]
    pub fn is_positive(self) -> bool {
        self.sign() > 0
    }

    /// Number of fractional digits currently stored.
    #[inline]
    pub fn scale(self) -> u32 {
        self.0.scale()
    }

    /// Get absolute value.
    #[inline]
    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Checked addition.
    ///
    /// # Errors
    /// Returns `Overflow` if the result is out of range.
    #[inline]
    pub fn checked_add(self, rhs: Self) -> NumericResult<Self> {
        self.0
            .checked_add(rhs.0)
            .map(Self)
            .ok_or(NumericError::Overflow)
    }

    /// Checked subtraction.
    ///
    /// # Errors
    /// Returns `Overflow` if the result is out of range.
    #[inline]
    pub fn checked_sub(self, rhs: Self) -> NumericResult<Self> {
        self.0
            .checked_sub(rhs.0)
            .map(Self)
            .ok_or(NumericError::Overflow)
    }

    /// Checked multiplication.
    ///
    /// The product keeps up to 28 fractional digits; no rounding to a money
    /// precision happens here.
    ///
    /// # Errors
    /// Returns `Overflow` if the result is out of range.
    #[inline]
    pub fn checked_mul(self, rhs: Self) -> NumericResult<Self> {
        self.0
            .checked_mul(rhs.0)
            .map(Self)
            .ok_or(NumericError::Overflow)
    }

    /// Checked division at full working precision (28 significant digits).
    ///
    /// # Errors
    /// - `DivisionByZero` if `rhs` is zero
    /// - `Overflow` if the quotient is out of range
    #[inline]
    pub fn checked_div(self, rhs: Self) -> NumericResult<Self> {
        if rhs.is_zero() {
            return Err(NumericError::DivisionByZero);
        }
        self.0
            .checked_div(rhs.0)
            .map(Self)
            .ok_or(NumericError::Overflow)
    }

    // ========================================================================
    // Rounding
    // ========================================================================

    /// Round to `precision` fractional digits using `mode`.
    ///
    /// A precision at or above the current scale leaves the value unchanged.
    #[inline]
    pub fn round(self, mode: RoundingMode, precision: u32) -> Self {
        Self(self.0.round_dp_with_strategy(precision, mode.strategy()))
    }

    /// Round half to even (banker's rounding).
    pub fn round_to_nearest_even(self, precision: u32) -> Self {
        self.round(RoundingMode::ToNearestEven, precision)
    }

    /// Round half away from zero.
    pub fn round_to_nearest_away(self, precision: u32) -> Self {
        self.round(RoundingMode::ToNearestAway, precision)
    }

    /// Truncate the discarded digits.
    pub fn round_to_zero(self, precision: u32) -> Self {
        self.round(RoundingMode::ToZero, precision)
    }

    /// Increase magnitude whenever a discarded digit is non-zero.
    pub fn round_away_from_zero(self, precision: u32) -> Self {
        self.round(RoundingMode::AwayFromZero, precision)
    }

    /// Render with exactly `digits` fractional digits after rounding by `mode`.
    ///
    /// `digits` is capped at [`Decimal::MAX_SCALE`].
    pub fn to_fixed(self, mode: RoundingMode, digits: u32) -> String {
        let digits = digits.min(Self::MAX_SCALE) as usize;
        let mut text = self
            .0
            .round_dp_with_strategy(digits as u32, mode.strategy())
            .to_string();
        if digits == 0 {
            return text;
        }

        // Pad in text: the 96-bit mantissa may not hold the padded value
        let shown = match text.find('.') {
            Some(dot) => text.len() - dot - 1,
            None => {
                text.push('.');
                0
            }
        };
        text.extend(std::iter::repeat('0').take(digits.saturating_sub(shown)));
        text
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl From<rust_decimal::Decimal> for Decimal {
    #[inline]
    fn from(value: rust_decimal::Decimal) -> Self {
        Self(value)
    }
}

impl From<Decimal> for rust_decimal::Decimal {
    #[inline]
    fn from(value: Decimal) -> Self {
        value.0
    }
}

impl From<i64> for Decimal {
    #[inline]
    fn from(value: i64) -> Self {
        Self::from_integer(value)
    }
}

impl From<i32> for Decimal {
    #[inline]
    fn from(value: i32) -> Self {
        Self::from_integer(i64::from(value))
    }
}

impl Neg for Decimal {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Debug for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Decimal({})", self.0)
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl FromStr for Decimal {
    type Err = NumericError;

    /// Parse from a decimal string such as `"123.456"` or `"-0.001"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(NumericError::InvalidInput);
        }
        rust_decimal::Decimal::from_str(s)
            .map(Self)
            .map_err(|_| NumericError::InvalidInput)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn d(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_constants() {
        assert!(Decimal::ZERO.is_zero());
        assert_eq!(Decimal::ONE, Decimal::from_integer(1));
        assert_eq!(Decimal::default(), Decimal::ZERO);
    }

    #[test]
    fn test_new() {
        let x = Decimal::new(12345, 2).unwrap();
        assert_eq!(x.to_string(), "123.45");
        assert_eq!(x.scale(), 2);

        assert_eq!(Decimal::new(1, 29), Err(NumericError::InvalidInput));
    }

    #[test]
    fn test_from_f64_uses_shortest_text() {
        assert_eq!(Decimal::from_f64(2.34645).unwrap(), d("2.34645"));
        assert_eq!(Decimal::from_f64(0.1).unwrap(), d("0.1"));
        assert_eq!(Decimal::from_f64(-1234567890.125).unwrap(), d("-1234567890.125"));
        assert_eq!(Decimal::from_f64(100.0).unwrap(), Decimal::from_integer(100));
    }

    #[test]
    fn test_from_f64_invalid() {
        assert_eq!(Decimal::from_f64(f64::NAN), Err(NumericError::InvalidInput));
        assert_eq!(Decimal::from_f64(f64::INFINITY), Err(NumericError::InvalidInput));
        assert_eq!(Decimal::from_f64(1e40), Err(NumericError::Overflow));
    }

    #[test]
    fn test_to_f64() {
        assert_eq!(d("0.25").to_f64(), Ok(0.25));
        assert_eq!(d("-12.5").to_f64(), Ok(-12.5));
        assert_eq!(Decimal::ZERO.to_f64(), Ok(0.0));

        let max = Decimal::from(rust_decimal::Decimal::MAX).to_f64().unwrap();
        assert!(max > 7.9e28 && max.is_finite());
    }

    #[test]
    fn test_sign() {
        assert_eq!(d("-0.0001").sign(), -1);
        assert_eq!(d("0.000").sign(), 0);
        assert_eq!(d("3").sign(), 1);
        assert!(d("0").is_zero());
        assert!(d("-1").is_negative());
        assert!(d("1").is_positive());
    }

    #[test]
    fn test_checked_arithmetic() {
        assert_eq!(d("0.1").checked_add(d("0.2")).unwrap(), d("0.3"));
        assert_eq!(d("1").checked_sub(d("1.25")).unwrap(), d("-0.25"));
        assert_eq!(d("102.54321").checked_mul(d("2.5")).unwrap(), d("256.358025"));
        assert_eq!(d("102.54321").checked_div(d("2.5")).unwrap(), d("41.017284"));
    }

    #[test]
    fn test_division_keeps_working_precision() {
        let third = d("1").checked_div(d("3")).unwrap();
        assert_eq!(third.scale(), 28);
        assert_eq!(third.round_to_nearest_even(4), d("0.3333"));

        let back = third.checked_mul(d("3")).unwrap().round_to_nearest_even(4);
        assert_eq!(back, d("1"));
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(d("1").checked_div(Decimal::ZERO), Err(NumericError::DivisionByZero));
        assert_eq!(d("0").checked_div(d("0.000")), Err(NumericError::DivisionByZero));
    }

    #[test]
    fn test_overflow() {
        let max = Decimal::from(rust_decimal::Decimal::MAX);
        assert_eq!(max.checked_add(Decimal::ONE), Err(NumericError::Overflow));
        assert_eq!(max.checked_mul(d("2")), Err(NumericError::Overflow));
    }

    #[test]
    fn test_rounding_boundary() {
        assert_eq!(d("2.34645").round_to_nearest_even(4), d("2.3464"));
        assert_eq!(d("2.34655").round_to_nearest_even(4), d("2.3466"));
        assert_eq!(d("2.34645").round_to_nearest_away(4), d("2.3465"));
        assert_eq!(d("-2.34645").round_to_nearest_away(4), d("-2.3465"));
    }

    #[test]
    fn test_round_to_zero_and_away() {
        assert_eq!(d("1.23459").round_to_zero(4), d("1.2345"));
        assert_eq!(d("-1.23459").round_to_zero(4), d("-1.2345"));
        assert_eq!(d("1.23441").round_away_from_zero(4), d("1.2345"));
        assert_eq!(d("-1.23441").round_away_from_zero(4), d("-1.2345"));
        assert_eq!(d("1.2340").round_away_from_zero(3), d("1.234"));
    }

    #[test]
    fn test_round_beyond_scale_is_identity() {
        let x = d("1.5");
        assert_eq!(x.round_to_zero(4), x);
        assert_eq!(x.round_to_zero(4).scale(), 1);
    }

    #[test]
    fn test_to_fixed() {
        assert_eq!(d("22.22").to_fixed(RoundingMode::ToNearestEven, 4), "22.2200");
        assert_eq!(d("1234567890.125").to_fixed(RoundingMode::ToNearestEven, 2), "1234567890.12");
        assert_eq!(d("1234567890.126").to_fixed(RoundingMode::ToNearestEven, 2), "1234567890.13");
        assert_eq!(d("7.5").to_fixed(RoundingMode::ToNearestEven, 0), "8");
        assert_eq!(d("-3").to_fixed(RoundingMode::ToZero, 3), "-3.000");
    }

    #[test]
    fn test_to_fixed_pads_values_near_the_mantissa_limit() {
        // 26 integer digits leave no room in 96 bits for four zero decimals
        let large = d("12345678901234567890123456");
        assert_eq!(
            large.to_fixed(RoundingMode::ToNearestEven, 4),
            "12345678901234567890123456.0000"
        );

        let large = d("10000000000000000000000000.5");
        assert_eq!(
            large.to_fixed(RoundingMode::ToNearestEven, 4),
            "10000000000000000000000000.5000"
        );
    }

    #[test]
    fn test_comparison_ignores_scale() {
        assert_eq!(d("1.0"), d("1.00"));
        assert!(d("1.01") > d("1.009"));
        assert!(d("-2") < d("-1.5"));
    }

    #[test]
    fn test_from_str() {
        assert_eq!(d(" 42 "), Decimal::from_integer(42));
        assert_eq!("".parse::<Decimal>(), Err(NumericError::InvalidInput));
        assert_eq!("not_a_number".parse::<Decimal>(), Err(NumericError::InvalidInput));
    }

    #[test]
    fn test_rust_decimal_interop() {
        let x = Decimal::from(dec!(123.45));
        assert_eq!(*x.as_inner(), dec!(123.45));
        let back: rust_decimal::Decimal = x.into();
        assert_eq!(back, dec!(123.45));
    }

    #[test]
    fn test_negation() {
        assert_eq!(-d("100"), d("-100"));
        assert_eq!(-(-d("1.5")), d("1.5"));
        assert_eq!(d("-3.25").abs(), d("3.25"));
    }
}
