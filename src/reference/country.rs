// ============================================================================
// Country Reference Data (ISO 3166-1)
// ============================================================================

use super::{MultiLanguageString, MultiLanguageStringArray};

/// Separator used between country aliases.
pub const ALIAS_SEPARATOR: &str = "|";

/// A country identified by its ISO 3166-1 codes.
#[derive(Debug, Clone)]
pub struct Country {
    /// Two-letter code, e.g. `US`
    pub alpha2_code: String,
    /// Three-letter code, e.g. `USA`
    pub alpha3_code: String,
    /// Three-digit numeric code, e.g. `840`
    pub numeric_code: String,
    pub name: MultiLanguageString,
    /// Alternative names, `|` separated per language
    pub aliases: MultiLanguageStringArray,
}

impl Country {
    pub fn new(alpha2_code: &str, alpha3_code: &str, numeric_code: &str) -> Self {
        Self {
            alpha2_code: alpha2_code.trim().to_ascii_uppercase(),
            alpha3_code: alpha3_code.trim().to_ascii_uppercase(),
            numeric_code: numeric_code.trim().to_string(),
            name: MultiLanguageString::new(),
            aliases: MultiLanguageStringArray::new(ALIAS_SEPARATOR),
        }
    }

    /// Builder method: set the localized names
    pub fn with_name(mut self, name: MultiLanguageString) -> Self {
        self.name = name;
        self
    }

    /// Builder method: set the aliases
    pub fn with_aliases(mut self, aliases: MultiLanguageStringArray) -> Self {
        self.aliases = aliases;
        self
    }
}

/// Two countries are equal when their alpha-2 codes match.
impl PartialEq for Country {
    fn eq(&self, other: &Self) -> bool {
        self.alpha2_code.eq_ignore_ascii_case(&other.alpha2_code)
    }
}

impl Eq for Country {}
