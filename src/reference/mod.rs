// ============================================================================
// Reference Data Module
// Languages, currencies, countries and cultures consumed by the money core
// ============================================================================
//
// Everything here is static lookup data: a Registry is populated once at
// startup and read-only afterwards. The numeric core only reaches it through
// the lookup traits in `interfaces`.

mod country;
mod culture;
mod data;
mod language;
mod multi_language;
mod registry;
pub mod sorting;

pub use country::{Country, ALIAS_SEPARATOR};
pub use culture::Culture;
pub use language::Language;
pub use multi_language::{MultiLanguageString, MultiLanguageStringArray};
pub use registry::Registry;
pub use sorting::Coded;
