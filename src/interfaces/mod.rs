// ============================================================================
// Interfaces Module
// Contains the lookup contracts consumed by the money core
// ============================================================================

mod lookup;

pub use lookup::{CurrencyLookup, LanguageLookup};
