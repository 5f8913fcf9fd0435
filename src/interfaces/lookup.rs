// ============================================================================
// Reference Data Lookup Interface
// Contracts through which the money core resolves codes
// ============================================================================

use crate::domain::Currency;
use crate::reference::Language;
use std::sync::Arc;

/// Resolves ISO 4217 currency codes.
///
/// Implementations must be read-only once shared: lookups take `&self` and
/// are expected to be safe for concurrent readers.
pub trait CurrencyLookup: Send + Sync {
    /// Find a currency by code; surrounding whitespace and case are ignored.
    fn lookup_currency(&self, code: &str) -> Option<Arc<Currency>>;
}

/// Resolves ISO 639-1 language codes.
pub trait LanguageLookup: Send + Sync {
    /// Find a language by code; surrounding whitespace and case are ignored.
    fn lookup_language(&self, code: &str) -> Option<Arc<Language>>;
}

impl<T: CurrencyLookup + ?Sized> CurrencyLookup for Arc<T> {
    fn lookup_currency(&self, code: &str) -> Option<Arc<Currency>> {
        (**self).lookup_currency(code)
    }
}

impl<T: LanguageLookup + ?Sized> LanguageLookup for Arc<T> {
    fn lookup_language(&self, code: &str) -> Option<Arc<Language>> {
        (**self).lookup_language(code)
    }
}
