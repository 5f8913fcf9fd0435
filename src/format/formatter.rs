// ============================================================================
// Number and Currency Formatters
// Pattern-driven rendering of decimal values
// ============================================================================

use super::grouping::group_digits;
use crate::error::{MoneyError, MoneyResult};
use crate::numeric::{Decimal, NumericResult, RoundingMode};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Placeholder replaced by the rendered number in a pattern.
pub const VALUE_PLACEHOLDER: char = 'n';

/// Placeholder replaced by the currency symbol in a currency pattern.
pub const SYMBOL_PLACEHOLDER: char = '$';

// ============================================================================
// Shared Rendering
// ============================================================================

/// Numeric layout shared by number and currency formatters.
struct Layout<'a> {
    decimal_digits: u32,
    decimal_separator: &'a str,
    group_sizes: &'a [usize],
    group_separator: &'a str,
}

impl Layout<'_> {
    /// Render `|value|` and report whether the negative pattern applies.
    ///
    /// The pattern follows the sign of `value` before rounding, so `-0.001`
    /// at two digits still uses the negative pattern.
    fn render(&self, value: Decimal) -> (bool, String) {
        let digits = self.decimal_digits.min(Decimal::MAX_SCALE);
        let fixed = value.abs().to_fixed(RoundingMode::ToNearestEven, digits);
        let negative = value.is_negative();

        let (integer, fraction) = match fixed.split_once('.') {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (fixed.as_str(), None),
        };

        let mut text = group_digits(integer, self.group_sizes, self.group_separator);
        if let Some(fraction) = fraction {
            text.push_str(self.decimal_separator);
            text.push_str(fraction);
        }
        (negative, text)
    }
}

/// Substitute the placeholders of `pattern` in a single pass.
///
/// Text already substituted is never scanned again, so a symbol or separator
/// containing a placeholder character is emitted verbatim.
fn fill_pattern(pattern: &str, number: &str, symbol: Option<&str>) -> String {
    let mut out = String::with_capacity(pattern.len() + number.len() + 4);
    for ch in pattern.chars() {
        match (ch, symbol) {
            (VALUE_PLACEHOLDER, _) => out.push_str(number),
            (SYMBOL_PLACEHOLDER, Some(symbol)) => out.push_str(symbol),
            _ => out.push(ch),
        }
    }
    out
}

fn validate_layout(
    positive_pattern: &str,
    negative_pattern: &str,
    decimal_digits: u32,
) -> MoneyResult<()> {
    if decimal_digits > Decimal::MAX_SCALE {
        return Err(MoneyError::InvalidConfig(format!(
            "decimal digits {} exceed the maximum of {}",
            decimal_digits,
            Decimal::MAX_SCALE
        )));
    }
    for pattern in [positive_pattern, negative_pattern] {
        if !pattern.contains(VALUE_PLACEHOLDER) {
            return Err(MoneyError::InvalidConfig(format!(
                "pattern {:?} has no value placeholder",
                pattern
            )));
        }
    }
    Ok(())
}

// ============================================================================
// Number Formatter
// ============================================================================

/// Renders plain numbers, e.g. `-12,345.68`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NumberFormatter {
    /// Template for values >= 0; `n` marks the number
    pub positive_pattern: String,
    /// Template for values < 0; the number is inserted without its sign
    pub negative_pattern: String,
    /// Fractional digits to render
    pub decimal_digits: u32,
    pub decimal_separator: String,
    /// Group widths from the decimal point outward
    pub group_sizes: Vec<usize>,
    pub group_separator: String,
}

impl NumberFormatter {
    pub fn new(
        positive_pattern: impl Into<String>,
        negative_pattern: impl Into<String>,
        decimal_digits: u32,
    ) -> Self {
        Self {
            positive_pattern: positive_pattern.into(),
            negative_pattern: negative_pattern.into(),
            decimal_digits,
            ..Self::default()
        }
    }

    /// Builder method: Set the decimal separator
    pub fn with_decimal_separator(mut self, separator: impl Into<String>) -> Self {
        self.decimal_separator = separator.into();
        self
    }

    /// Builder method: Set group sizes and separator
    pub fn with_grouping(mut self, sizes: &[usize], separator: impl Into<String>) -> Self {
        self.group_sizes = sizes.to_vec();
        self.group_separator = separator.into();
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> MoneyResult<()> {
        validate_layout(&self.positive_pattern, &self.negative_pattern, self.decimal_digits)
    }

    fn layout(&self) -> Layout<'_> {
        Layout {
            decimal_digits: self.decimal_digits,
            decimal_separator: &self.decimal_separator,
            group_sizes: &self.group_sizes,
            group_separator: &self.group_separator,
        }
    }

    /// Format `value`, rounding half-to-even to `decimal_digits`.
    pub fn format(&self, value: Decimal) -> String {
        let (negative, number) = self.layout().render(value);
        let pattern = if negative {
            &self.negative_pattern
        } else {
            &self.positive_pattern
        };
        let out = fill_pattern(pattern, &number, None);
        tracing::trace!(%value, %out, "formatted number");
        out
    }

    /// Format a native float.
    ///
    /// # Errors
    /// Returns an error for NaN, infinite or out-of-range values.
    pub fn format_f64(&self, value: f64) -> NumericResult<String> {
        Ok(self.format(Decimal::from_f64(value)?))
    }
}

impl Default for NumberFormatter {
    fn default() -> Self {
        Self {
            positive_pattern: "n".to_string(),
            negative_pattern: "-n".to_string(),
            decimal_digits: 2,
            decimal_separator: ".".to_string(),
            group_sizes: vec![3],
            group_separator: ",".to_string(),
        }
    }
}

// ============================================================================
// Currency Formatter
// ============================================================================

/// Renders currency amounts, e.g. `-$1,234.57`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CurrencyFormatter {
    /// Text substituted for `$` in the patterns
    pub symbol: String,
    /// Template for values >= 0; `n` marks the number, `$` the symbol
    pub positive_pattern: String,
    /// Template for values < 0; the number is inserted without its sign
    pub negative_pattern: String,
    pub decimal_digits: u32,
    pub decimal_separator: String,
    pub group_sizes: Vec<usize>,
    pub group_separator: String,
}

impl CurrencyFormatter {
    pub fn new(
        symbol: impl Into<String>,
        positive_pattern: impl Into<String>,
        negative_pattern: impl Into<String>,
        decimal_digits: u32,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            positive_pattern: positive_pattern.into(),
            negative_pattern: negative_pattern.into(),
            decimal_digits,
            ..Self::default()
        }
    }

    /// Builder method: Set the decimal separator
    pub fn with_decimal_separator(mut self, separator: impl Into<String>) -> Self {
        self.decimal_separator = separator.into();
        self
    }

    /// Builder method: Set group sizes and separator
    pub fn with_grouping(mut self, sizes: &[usize], separator: impl Into<String>) -> Self {
        self.group_sizes = sizes.to_vec();
        self.group_separator = separator.into();
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> MoneyResult<()> {
        validate_layout(&self.positive_pattern, &self.negative_pattern, self.decimal_digits)
    }

    fn layout(&self) -> Layout<'_> {
        Layout {
            decimal_digits: self.decimal_digits,
            decimal_separator: &self.decimal_separator,
            group_sizes: &self.group_sizes,
            group_separator: &self.group_separator,
        }
    }

    /// Format `value`, rounding half-to-even to `decimal_digits`.
    pub fn format(&self, value: Decimal) -> String {
        let (negative, number) = self.layout().render(value);
        let pattern = if negative {
            &self.negative_pattern
        } else {
            &self.positive_pattern
        };
        let out = fill_pattern(pattern, &number, Some(&self.symbol));
        tracing::trace!(%value, %out, "formatted currency");
        out
    }

    /// Format a native float.
    ///
    /// # Errors
    /// Returns an error for NaN, infinite or out-of-range values.
    pub fn format_f64(&self, value: f64) -> NumericResult<String> {
        Ok(self.format(Decimal::from_f64(value)?))
    }
}

impl Default for CurrencyFormatter {
    fn default() -> Self {
        Self {
            symbol: "\u{a4}".to_string(),
            positive_pattern: "$n".to_string(),
            negative_pattern: "-$n".to_string(),
            decimal_digits: 2,
            decimal_separator: ".".to_string(),
            group_sizes: vec![3],
            group_separator: ",".to_string(),
        }
    }
}

// ============================================================================
// Formatter Pair
// ============================================================================

/// Number and currency formatting rules of one culture.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Formatter {
    pub number: NumberFormatter,
    pub currency: CurrencyFormatter,
}

impl Formatter {
    pub fn new(number: NumberFormatter, currency: CurrencyFormatter) -> Self {
        Self { number, currency }
    }

    /// Validate both formatters
    pub fn validate(&self) -> MoneyResult<()> {
        self.number.validate()?;
        self.currency.validate()
    }
}
