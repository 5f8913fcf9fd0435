// ============================================================================
// Currency Domain Model
// ISO 4217 identity and exchange rates against a common reference unit
// ============================================================================

use crate::error::{MoneyError, MoneyResult};
use crate::interfaces::CurrencyLookup;
use crate::numeric::Decimal;
use crate::reference::{Language, MultiLanguageString};
use std::fmt;
use std::sync::Arc;

/// A currency identified by its ISO 4217 alpha-3 code.
///
/// Currencies are owned by a registry and handed out as `Arc<Currency>`.
#[derive(Debug, Clone)]
pub struct Currency {
    code: String,
    name: MultiLanguageString,
}

impl Currency {
    /// Create a currency; the code is trimmed and upper-cased.
    pub fn new(code: &str) -> Self {
        Self {
            code: code.trim().to_ascii_uppercase(),
            name: MultiLanguageString::new(),
        }
    }

    /// Builder method: set the localized names
    pub fn with_name(mut self, name: MultiLanguageString) -> Self {
        self.name = name;
        self
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &MultiLanguageString {
        &self.name
    }

    /// Localized display name, falling back to the code.
    pub fn display_name(&self, language: &Language) -> &str {
        match self.name.value(language) {
            "" => &self.code,
            name => name,
        }
    }
}

/// Two currencies are equal when their codes match, ignoring case.
impl PartialEq for Currency {
    fn eq(&self, other: &Self) -> bool {
        self.code.eq_ignore_ascii_case(&other.code)
    }
}

impl Eq for Currency {}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

// ============================================================================
// Exchangeable Currency
// ============================================================================

/// A currency paired with its rate against a common reference unit.
///
/// Every rate used together must be quoted against the same reference
/// currency; exchange pivots through that unit rather than using pairwise
/// rates. The rate is always strictly positive.
#[derive(Debug, Clone)]
pub struct ExchangeableCurrency {
    currency: Arc<Currency>,
    rate: Decimal,
}

impl ExchangeableCurrency {
    /// Look up `code` and attach `rate`.
    ///
    /// # Errors
    /// - `InvalidCurrency` if `lookup` does not know the code
    /// - `InvalidRate` if `rate` is zero or negative
    pub fn new(lookup: &impl CurrencyLookup, code: &str, rate: Decimal) -> MoneyResult<Self> {
        let currency = lookup
            .lookup_currency(code)
            .ok_or_else(|| MoneyError::InvalidCurrency(code.to_string()))?;
        Self::from_currency(currency, rate)
    }

    /// Like [`ExchangeableCurrency::new`] with a native float rate.
    ///
    /// # Errors
    /// Also returns `InvalidRate` for NaN or infinite rates.
    pub fn from_f64_rate(lookup: &impl CurrencyLookup, code: &str, rate: f64) -> MoneyResult<Self> {
        let rate = Decimal::from_f64(rate).map_err(|_| MoneyError::InvalidRate(rate.to_string()))?;
        Self::new(lookup, code, rate)
    }

    /// Attach `rate` to an already resolved currency.
    ///
    /// # Errors
    /// Returns `InvalidRate` if `rate` is zero or negative.
    pub fn from_currency(currency: Arc<Currency>, rate: Decimal) -> MoneyResult<Self> {
        if rate.sign() <= 0 {
            return Err(MoneyError::InvalidRate(rate.to_string()));
        }
        Ok(Self { currency, rate })
    }

    /// Like [`ExchangeableCurrency::from_f64_rate`] but panics on error.
    ///
    /// Only for call sites whose inputs are already known to be valid.
    pub fn must_new(lookup: &impl CurrencyLookup, code: &str, rate: f64) -> Self {
        match Self::from_f64_rate(lookup, code, rate) {
            Ok(currency) => currency,
            Err(err) => panic!("{err}"),
        }
    }

    pub fn currency(&self) -> &Arc<Currency> {
        &self.currency
    }

    pub fn code(&self) -> &str {
        self.currency.code()
    }

    pub fn rate(&self) -> Decimal {
        self.rate
    }
}

/// Equality compares the currency only, never the rate.
impl PartialEq for ExchangeableCurrency {
    fn eq(&self, other: &Self) -> bool {
        *self.currency == *other.currency
    }
}

impl Eq for ExchangeableCurrency {}

impl fmt::Display for ExchangeableCurrency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.currency, self.rate)
    }
}
