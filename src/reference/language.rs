// ============================================================================
// Language Reference Data (ISO 639-1)
// ============================================================================

use super::MultiLanguageString;

/// A language identified by its ISO 639-1 code.
#[derive(Debug, Clone)]
pub struct Language {
    /// Lower-case ISO 639-1 code, e.g. `en`
    pub code: String,
    /// Name of the language in the language itself
    pub native_name: String,
    /// Localized names
    pub name: MultiLanguageString,
}

impl Language {
    pub fn new(code: &str, native_name: impl Into<String>) -> Self {
        Self {
            code: code.trim().to_ascii_lowercase(),
            native_name: native_name.into(),
            name: MultiLanguageString::new(),
        }
    }

    /// Builder method: set the localized names
    pub fn with_name(mut self, name: MultiLanguageString) -> Self {
        self.name = name;
        self
    }
}

/// Two languages are equal when their codes match, ignoring case.
impl PartialEq for Language {
    fn eq(&self, other: &Self) -> bool {
        self.code.eq_ignore_ascii_case(&other.code)
    }
}

impl Eq for Language {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_code_is_normalized() {
        let lang = Language::new(" ZH ", "中文");
        assert_eq!(lang.code, "zh");
        assert_eq!(lang.native_name, "中文");
    }

    #[test]
    fn test_equality_by_code() {
        let a = Language::new("en", "English");
        let b = Language::new("EN", "english").with_name(MultiLanguageString::new().with_value("en", "English"));
        assert_eq!(a, b);
        assert_ne!(a, Language::new("fr", "Français"));
    }
}
