// ============================================================================
// Culture Reference Data (RFC 4646 style "xx-YY" tags)
// ============================================================================

use super::{Country, Language, MultiLanguageString};
use crate::domain::Currency;
use crate::format::Formatter;
use crate::numeric::{Decimal, NumericResult};
use std::sync::Arc;

/// A language/country pair with its currency and formatting rules.
#[derive(Debug, Clone)]
pub struct Culture {
    /// Tag in `xx-YY` form, e.g. `en-US`
    pub code: String,
    pub native_name: String,
    pub name: MultiLanguageString,
    pub country: Option<Arc<Country>>,
    pub language: Option<Arc<Language>>,
    pub currency: Option<Arc<Currency>>,
    pub formatter: Formatter,
}

impl Culture {
    /// Format a number with this culture's number rules.
    pub fn format_number(&self, value: Decimal) -> String {
        self.formatter.number.format(value)
    }

    /// Format an amount with this culture's currency rules.
    pub fn format_currency(&self, value: Decimal) -> String {
        self.formatter.currency.format(value)
    }

    /// [`Culture::format_number`] for a native float.
    pub fn format_number_f64(&self, value: f64) -> NumericResult<String> {
        self.formatter.number.format_f64(value)
    }

    /// [`Culture::format_currency`] for a native float.
    pub fn format_currency_f64(&self, value: f64) -> NumericResult<String> {
        self.formatter.currency.format_f64(value)
    }
}

/// Two cultures are equal when their tags match, ignoring case.
impl PartialEq for Culture {
    fn eq(&self, other: &Self) -> bool {
        self.code.eq_ignore_ascii_case(&other.code)
    }
}

impl Eq for Culture {}
