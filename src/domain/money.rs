// ============================================================================
// Money Domain Model
// A decimal amount tagged with an exchangeable currency
// ============================================================================

use super::config::MoneyConfig;
use super::currency::ExchangeableCurrency;
use crate::error::{MoneyError, MoneyResult};
use crate::format::CurrencyFormatter;
use crate::numeric::{Decimal, RoundingMode, RoundingPolicy};
use std::cmp::Ordering;
use std::fmt;

/// An amount of a specific currency.
///
/// `Money` is a mutable value object: `add`, `sub`, `mul`, `div` and
/// `exchange` update the receiver in place and return it for chaining.
/// The right-hand `Money` of `add`/`sub` is never modified; a copy of it is
/// exchanged into the receiver's currency.
///
/// Mutation takes `&mut self`; sharing one value between threads requires
/// external synchronisation.
///
/// # Example
/// ```
/// use money_format::prelude::*;
///
/// let registry = Registry::builtin();
/// let cny = ExchangeableCurrency::must_new(&registry, "CNY", 1.0);
/// let usd = ExchangeableCurrency::must_new(&registry, "USD", 0.15);
///
/// let mut total = Money::must_new(&cny, 100.0);
/// total.add(&Money::must_new(&usd, 100.0)).unwrap();
/// assert_eq!(total.to_string(), "CNY 766.6667");
/// ```
#[derive(Debug, Clone)]
pub struct Money {
    currency: ExchangeableCurrency,
    amount: Decimal,
    policy: RoundingPolicy,
}

impl Money {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from a native float amount with the default policy
    /// (half-to-even, 4 digits).
    ///
    /// The amount is stored exactly as given; rounding happens on the first
    /// arithmetic operation.
    ///
    /// # Errors
    /// Returns `InvalidAmount` for NaN, infinite or out-of-range values.
    pub fn new(currency: &ExchangeableCurrency, amount: f64) -> MoneyResult<Self> {
        let amount =
            Decimal::from_f64(amount).map_err(|_| MoneyError::InvalidAmount(amount.to_string()))?;
        Ok(Self::from_decimal(currency, amount))
    }

    /// Like [`Money::new`] but panics on error.
    ///
    /// Only for call sites whose inputs are already known to be valid.
    pub fn must_new(currency: &ExchangeableCurrency, amount: f64) -> Self {
        match Self::new(currency, amount) {
            Ok(money) => money,
            Err(err) => panic!("{err}"),
        }
    }

    /// Create from an exact decimal amount with the default policy.
    pub fn from_decimal(currency: &ExchangeableCurrency, amount: Decimal) -> Self {
        Self {
            currency: currency.clone(),
            amount,
            policy: RoundingPolicy::default(),
        }
    }

    /// Create with the precision and rounding mode of `config`.
    ///
    /// # Errors
    /// Returns `InvalidConfig` if `config` fails validation.
    pub fn from_config(
        currency: &ExchangeableCurrency,
        amount: Decimal,
        config: &MoneyConfig,
    ) -> MoneyResult<Self> {
        config.validate()?;
        Ok(Self::from_decimal(currency, amount).with_policy(config.policy()))
    }

    /// Builder method: Set the rounding policy
    pub fn with_policy(mut self, policy: RoundingPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Builder method: Set the rounding mode
    pub fn with_rounding_mode(mut self, mode: RoundingMode) -> Self {
        self.policy.mode = mode;
        self
    }

    /// Builder method: Set the precision
    pub fn with_precision(mut self, precision: u32) -> Self {
        self.policy.precision = precision;
        self
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn currency(&self) -> &ExchangeableCurrency {
        &self.currency
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn policy(&self) -> RoundingPolicy {
        self.policy
    }

    pub fn precision(&self) -> u32 {
        self.policy.precision
    }

    pub fn rounding_mode(&self) -> RoundingMode {
        self.policy.mode
    }

    /// Returns -1, 0 or +1 according to the sign of the amount.
    pub fn sign(&self) -> i32 {
        self.amount.sign()
    }

    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.amount.is_negative()
    }

    // ========================================================================
    // Exchange
    // ========================================================================

    /// Convert into `target`, pivoting through the common reference unit.
    ///
    /// The amount becomes `round(amount / source_rate * target_rate)` under
    /// this value's policy. Exchanging into the same currency (by code) is a
    /// no-op.
    pub fn exchange(&mut self, target: &ExchangeableCurrency) -> MoneyResult<&mut Self> {
        if self.currency == *target {
            return Ok(self);
        }
        let pivot = self.amount.checked_div(self.currency.rate())?;
        let amount = self.policy.apply(pivot.checked_mul(target.rate())?);

        tracing::debug!(
            from = %self.currency,
            to = %target,
            before = %self.amount,
            after = %amount,
            "exchanged money"
        );

        self.amount = amount;
        self.currency = target.clone();
        Ok(self)
    }

    /// A copy of this value exchanged into `target`; `self` is untouched.
    pub fn exchanged(&self, target: &ExchangeableCurrency) -> MoneyResult<Money> {
        let mut copy = self.clone();
        copy.exchange(target)?;
        Ok(copy)
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Add `other`, exchanged into this currency, then re-round.
    pub fn add(&mut self, other: &Money) -> MoneyResult<&mut Self> {
        let other = other.exchanged(&self.currency)?;
        self.amount = self.policy.apply(self.amount.checked_add(other.amount)?);
        Ok(self)
    }

    /// Subtract `other`, exchanged into this currency, then re-round.
    pub fn sub(&mut self, other: &Money) -> MoneyResult<&mut Self> {
        let other = other.exchanged(&self.currency)?;
        self.amount = self.policy.apply(self.amount.checked_sub(other.amount)?);
        Ok(self)
    }

    /// Multiply by a plain scalar and round.
    pub fn mul(&mut self, factor: Decimal) -> MoneyResult<&mut Self> {
        self.amount = self.policy.apply(self.amount.checked_mul(factor)?);
        Ok(self)
    }

    /// Divide by a plain scalar and round.
    ///
    /// # Errors
    /// Returns `DivideByZero` if `divisor` is zero.
    pub fn div(&mut self, divisor: Decimal) -> MoneyResult<&mut Self> {
        self.amount = self.policy.apply(self.amount.checked_div(divisor)?);
        Ok(self)
    }

    /// [`Money::mul`] with a native float factor.
    pub fn mul_f64(&mut self, factor: f64) -> MoneyResult<&mut Self> {
        let factor =
            Decimal::from_f64(factor).map_err(|_| MoneyError::InvalidAmount(factor.to_string()))?;
        self.mul(factor)
    }

    /// [`Money::div`] with a native float divisor.
    pub fn div_f64(&mut self, divisor: f64) -> MoneyResult<&mut Self> {
        let divisor =
            Decimal::from_f64(divisor).map_err(|_| MoneyError::InvalidAmount(divisor.to_string()))?;
        self.div(divisor)
    }

    /// Round the stored amount to this value's policy.
    pub fn round(&mut self) -> &mut Self {
        self.amount = self.policy.apply(self.amount);
        self
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    /// Compare amounts after exchanging a copy of `other` into this currency.
    pub fn compare(&self, other: &Money) -> MoneyResult<Ordering> {
        let other = other.exchanged(&self.currency)?;
        Ok(self.amount.cmp(&other.amount))
    }

    // ========================================================================
    // Formatting
    // ========================================================================

    /// Render with `formatter`.
    ///
    /// When the formatter shows fewer digits than this value's precision, a
    /// copy of the amount is first rounded to the formatter's digits under
    /// this value's rounding mode. The stored amount never changes.
    pub fn format(&self, formatter: &CurrencyFormatter) -> String {
        let amount = if formatter.decimal_digits < self.policy.precision {
            self.policy
                .apply_with_precision(self.amount, formatter.decimal_digits)
        } else {
            self.amount
        };
        formatter.format(amount)
    }
}

/// Equal when currencies match by code and amounts are exactly equal.
impl PartialEq for Money {
    fn eq(&self, other: &Self) -> bool {
        self.currency == other.currency && self.amount == other.amount
    }
}

impl Eq for Money {}

/// `"<CODE> <amount>"`, with exactly `precision` fractional digits.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}",
            self.currency.code(),
            self.amount.to_fixed(self.policy.mode, self.policy.precision)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Currency;
    use crate::reference::Registry;
    use proptest::prelude::*;
    use std::sync::Arc;

    struct Fixture {
        cny: ExchangeableCurrency,
        hkd: ExchangeableCurrency,
        usd: ExchangeableCurrency,
        eur: ExchangeableCurrency,
    }

    fn fixture() -> Fixture {
        let registry = Registry::builtin();
        Fixture {
            cny: ExchangeableCurrency::must_new(&registry, "CNY", 1.0),
            hkd: ExchangeableCurrency::must_new(&registry, "hkd", 1.13),
            usd: ExchangeableCurrency::must_new(&registry, "usd", 0.15),
            eur: ExchangeableCurrency::must_new(&registry, "eur", 0.14),
        }
    }

    fn d(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn exchanged(from: &ExchangeableCurrency, amount: f64, to: &ExchangeableCurrency) -> String {
        Money::must_new(from, amount).exchange(to).unwrap().to_string()
    }

    #[test]
    fn test_exchange_from_reference_currency() {
        let f = fixture();
        assert_eq!(exchanged(&f.cny, 5.2, &f.hkd), "HKD 5.8760");
        assert_eq!(exchanged(&f.cny, 5.2, &f.usd), "USD 0.7800");
        assert_eq!(exchanged(&f.cny, 5.2, &f.eur), "EUR 0.7280");
        assert_eq!(exchanged(&f.cny, 132.25, &f.hkd), "HKD 149.4425");
        assert_eq!(exchanged(&f.cny, 132.25, &f.usd), "USD 19.8375");
        assert_eq!(exchanged(&f.cny, 132.25, &f.eur), "EUR 18.5150");
    }

    #[test]
    fn test_exchange_between_quoted_currencies() {
        let f = fixture();
        assert_eq!(exchanged(&f.hkd, 5.2, &f.hkd), "HKD 5.2000");
        assert_eq!(exchanged(&f.hkd, 5.2, &f.cny), "CNY 4.6018");
        assert_eq!(exchanged(&f.hkd, 5.2, &f.usd), "USD 0.6903");
        assert_eq!(exchanged(&f.hkd, 5.2, &f.eur), "EUR 0.6442");
    }

    #[test]
    fn test_exchange_same_currency_is_unchanged() {
        let f = fixture();
        let mut money = Money::must_new(&f.usd, 1.23456);
        money.exchange(&f.usd).unwrap();
        assert_eq!(money.amount(), d("1.23456"));
    }

    #[test]
    fn test_exchange_round_trip_within_one_unit() {
        let f = fixture();
        let original = Money::must_new(&f.usd, 123.4567);
        let mut money = original.clone();
        money.exchange(&f.cny).unwrap().exchange(&f.usd).unwrap();

        assert_eq!(money.currency(), original.currency());
        let diff = money.amount().checked_sub(original.amount()).unwrap().abs();
        assert!(diff <= d("0.0001"), "difference {diff} exceeds one unit");
    }

    #[test]
    fn test_add_and_sub_exchange_operand() {
        let f = fixture();
        assert_eq!(
            Money::must_new(&f.cny, 100.0)
                .add(&Money::must_new(&f.usd, 100.0))
                .unwrap()
                .to_string(),
            "CNY 766.6667"
        );
        assert_eq!(
            Money::must_new(&f.cny, 100.0)
                .sub(&Money::must_new(&f.usd, 100.0))
                .unwrap()
                .to_string(),
            "CNY -566.6667"
        );
    }

    #[test]
    fn test_operand_is_not_mutated() {
        let f = fixture();
        let usd = Money::must_new(&f.usd, 100.0);
        let mut cny = Money::must_new(&f.cny, 100.0);
        cny.add(&usd).unwrap().sub(&usd).unwrap();

        assert_eq!(usd.currency().code(), "USD");
        assert_eq!(usd.amount(), d("100"));
        assert_eq!(cny.to_string(), "CNY 100.0000");
    }

    #[test]
    fn test_mul_and_div() {
        let f = fixture();
        assert_eq!(
            Money::must_new(&f.cny, 102.54321).mul_f64(2.5).unwrap().to_string(),
            "CNY 256.3580"
        );
        assert_eq!(
            Money::must_new(&f.cny, 102.54321).div_f64(2.5).unwrap().to_string(),
            "CNY 41.0173"
        );
    }

    #[test]
    fn test_div_by_zero() {
        let f = fixture();
        let mut money = Money::must_new(&f.cny, 10.0);
        assert_eq!(money.div(Decimal::ZERO).unwrap_err(), MoneyError::DivideByZero);
        assert_eq!(money.div_f64(0.0).unwrap_err(), MoneyError::DivideByZero);
        assert_eq!(money.amount(), d("10"));
    }

    #[test]
    fn test_invalid_amount() {
        let f = fixture();
        assert!(matches!(
            Money::new(&f.usd, f64::INFINITY),
            Err(MoneyError::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_rounding_policy_is_applied() {
        let f = fixture();
        let mut money = Money::from_decimal(&f.usd, d("10"))
            .with_precision(2)
            .with_rounding_mode(RoundingMode::ToZero);
        money.div(d("3")).unwrap();
        assert_eq!(money.amount(), d("3.33"));
        assert_eq!(money.to_string(), "USD 3.33");

        let mut away = Money::from_decimal(&f.usd, d("10"))
            .with_policy(RoundingPolicy::new(RoundingMode::AwayFromZero, 2));
        away.div(d("3")).unwrap();
        assert_eq!(away.amount(), d("3.34"));
    }

    #[test]
    fn test_from_config() {
        let f = fixture();
        let money = Money::from_config(&f.eur, d("1.005"), &MoneyConfig::accounting()).unwrap();
        assert_eq!(money.precision(), 2);
        assert_eq!(money.to_string(), "EUR 1.01");

        let bad = MoneyConfig::default().with_precision(99);
        assert!(Money::from_config(&f.eur, d("1"), &bad).is_err());
    }

    #[test]
    fn test_sign_and_zero() {
        let f = fixture();
        assert_eq!(Money::must_new(&f.usd, -0.5).sign(), -1);
        assert_eq!(Money::must_new(&f.usd, 0.0).sign(), 0);
        assert!(Money::must_new(&f.usd, 0.0).is_zero());
        assert!(Money::must_new(&f.usd, -1.0).is_negative());
        assert_eq!(Money::must_new(&f.usd, 3.0).sign(), 1);
    }

    #[test]
    fn test_format() {
        let f = fixture();
        let cf = CurrencyFormatter::new("$", "$n", "-$n", 4).with_grouping(&[3, 3, 3], ",");
        let cases = [
            (0.8250, "$0.8250"),
            (-0.8250, "-$0.8250"),
            (22.22, "$22.2200"),
            (-22.22, "-$22.2200"),
            (2222.2222, "$2,222.2222"),
            (-2222.2222, "-$2,222.2222"),
            (2222.222251, "$2,222.2223"),
            (-2222.222251, "-$2,222.2223"),
        ];
        for (amount, expected) in cases {
            assert_eq!(Money::must_new(&f.usd, amount).format(&cf), expected);
        }
    }

    #[test]
    fn test_format_with_fewer_digits_uses_money_policy() {
        let f = fixture();
        let cf = CurrencyFormatter::new("$", "$n", "-$n", 2);
        let money = Money::from_decimal(&f.usd, d("1.2349")).with_rounding_mode(RoundingMode::ToZero);

        assert_eq!(money.format(&cf), "$1.23");
        assert_eq!(money.amount(), d("1.2349"));
    }

    #[test]
    fn test_equality_and_compare() {
        let f = fixture();
        let a = Money::from_decimal(&f.usd, d("1.50"));
        let b = Money::from_decimal(&f.usd, d("1.5"));
        assert_eq!(a, b);
        assert_ne!(a, Money::from_decimal(&f.eur, d("1.5")));

        let cny = Money::must_new(&f.cny, 10.0);
        let usd = Money::must_new(&f.usd, 1.0);
        assert_eq!(cny.compare(&usd).unwrap(), Ordering::Greater);
        assert_eq!(usd.compare(&cny).unwrap(), Ordering::Less);
    }

    #[test]
    fn test_display_pads_large_amounts() {
        let f = fixture();
        let money = Money::from_decimal(&f.usd, d("10000000000000000000000000"));
        assert_eq!(money.to_string(), "USD 10000000000000000000000000.0000");
    }

    #[test]
    fn test_round() {
        let f = fixture();
        let mut money = Money::must_new(&f.usd, 2.34645);
        money.round();
        assert_eq!(money.amount(), d("2.3464"));
    }

    fn quoted(code: &str, rate_cents: i64) -> ExchangeableCurrency {
        let rate = Decimal::new(rate_cents, 2).unwrap();
        ExchangeableCurrency::from_currency(Arc::new(Currency::new(code)), rate).unwrap()
    }

    proptest! {
        // Each leg rounds by at most half a unit, and the first leg's error is
        // scaled by source/target on the way back.
        #[test]
        fn prop_exchange_round_trip_is_bounded(
            mantissa in 1i64..10_000_000,
            scale in 0u32..=4,
            source_cents in 1i64..=10_000,
            target_cents in 1i64..=10_000,
        ) {
            let source = quoted("AAA", source_cents);
            let target = quoted("BBB", target_cents);
            let original = Money::from_decimal(&source, Decimal::new(mantissa, scale).unwrap());

            let mut money = original.clone();
            money.exchange(&target).unwrap().exchange(&source).unwrap();

            let unit = Decimal::new(1, money.precision()).unwrap();
            let ratio = source.rate().checked_div(target.rate()).unwrap();
            let bound = unit.checked_mul(std::cmp::max(Decimal::ONE, ratio)).unwrap();
            let diff = money.amount().checked_sub(original.amount()).unwrap().abs();
            prop_assert!(diff <= bound, "difference {} exceeds {}", diff, bound);
        }
    }
}
