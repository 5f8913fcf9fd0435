// ============================================================================
// Multi-Language Strings
// Text values keyed by language code
// ============================================================================

use super::Language;
use crate::interfaces::LanguageLookup;
use std::collections::BTreeMap;
use std::sync::Arc;

/// A string with one value per language.
///
/// Language codes are stored lower-cased, so lookups are case-insensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultiLanguageString {
    values: BTreeMap<String, String>,
}

impl MultiLanguageString {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set the value for a language code
    pub fn with_value(mut self, language_code: &str, value: impl Into<String>) -> Self {
        self.set_code_value(language_code, value.into());
        self
    }

    /// Value for `language`, or `""` when none is stored.
    pub fn value(&self, language: &Language) -> &str {
        self.value_for_code(&language.code)
    }

    /// Value for a raw language code, or `""` when none is stored.
    pub fn value_for_code(&self, language_code: &str) -> &str {
        self.values
            .get(&language_code.trim().to_ascii_lowercase())
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Set the value for `language`. An empty value removes the entry.
    pub fn set_value(&mut self, language: &Language, value: impl Into<String>) {
        self.set_code_value(&language.code, value.into());
    }

    fn set_code_value(&mut self, language_code: &str, value: String) {
        let key = language_code.trim().to_ascii_lowercase();
        if value.is_empty() {
            self.values.remove(&key);
        } else {
            self.values.insert(key, value);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Languages that have a value, resolved through `lookup`.
    ///
    /// Codes the lookup does not know are skipped.
    pub fn supported_languages(&self, lookup: &impl LanguageLookup) -> Vec<Arc<Language>> {
        self.values
            .keys()
            .filter_map(|code| lookup.lookup_language(code))
            .collect()
    }
}

/// A list of strings per language, stored joined by a separator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiLanguageStringArray {
    inner: MultiLanguageString,
    separator: String,
}

impl MultiLanguageStringArray {
    /// Create an empty array; an empty separator falls back to `,`.
    pub fn new(separator: &str) -> Self {
        let separator = if separator.is_empty() { "," } else { separator };
        Self {
            inner: MultiLanguageString::new(),
            separator: separator.to_string(),
        }
    }

    /// Builder method: set the joined value for a language code
    pub fn with_joined(mut self, language_code: &str, joined: &str) -> Self {
        self.inner.set_code_value(language_code, joined.to_string());
        self
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Raw joined value for `language`.
    pub fn value(&self, language: &Language) -> &str {
        self.inner.value(language)
    }

    /// Individual values for `language`; empty when none are stored.
    pub fn values(&self, language: &Language) -> Vec<&str> {
        let joined = self.inner.value(language);
        if joined.is_empty() {
            return Vec::new();
        }
        joined.split(self.separator.as_str()).collect()
    }

    pub fn set_values<S: AsRef<str>>(&mut self, language: &Language, values: &[S]) {
        let joined = values
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join(&self.separator);
        self.inner.set_value(language, joined);
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
