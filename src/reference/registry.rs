// ============================================================================
// Reference Data Registry
// Read-only tables of languages, currencies, countries and cultures
// ============================================================================

use super::data::{COUNTRY_CODES, COUNTRY_NAMES, CULTURES, CURRENCIES, LANGUAGES};
use super::{Country, Culture, Language, MultiLanguageString, MultiLanguageStringArray};
use crate::domain::Currency;
use crate::format::Formatter;
use crate::interfaces::{CurrencyLookup, LanguageLookup};
use std::collections::HashMap;
use std::sync::Arc;

/// Process-wide reference tables.
///
/// Build it once at startup (with [`Registry::builtin`] or by registering
/// entries on [`Registry::new`]), then share it behind an `Arc`. All lookups
/// take `&self`; there is no mutation after construction.
#[derive(Debug, Default)]
pub struct Registry {
    languages: HashMap<String, Arc<Language>>,
    language_list: Vec<Arc<Language>>,

    currencies: HashMap<String, Arc<Currency>>,
    currency_list: Vec<Arc<Currency>>,

    countries_alpha2: HashMap<String, Arc<Country>>,
    countries_alpha3: HashMap<String, Arc<Country>>,
    countries_numeric: HashMap<String, Arc<Country>>,
    country_list: Vec<Arc<Country>>,

    cultures: HashMap<String, Arc<Culture>>,
    culture_list: Vec<Arc<Culture>>,
}

impl Registry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry seeded from the embedded tables, with English names.
    pub fn builtin() -> Self {
        let mut registry = Self::new();

        for &(code, native_name, english_name) in LANGUAGES {
            registry.register_language(
                Language::new(code, native_name)
                    .with_name(MultiLanguageString::new().with_value("en", english_name)),
            );
        }

        for &(code, english_name) in CURRENCIES {
            registry.register_currency(
                Currency::new(code)
                    .with_name(MultiLanguageString::new().with_value("en", english_name)),
            );
        }

        for &(alpha2, alpha3, numeric) in COUNTRY_CODES {
            let mut country = Country::new(alpha2, alpha3, numeric);
            if let Ok(i) = COUNTRY_NAMES.binary_search_by(|row| row.0.cmp(alpha2)) {
                let (_, english_name, aliases) = COUNTRY_NAMES[i];
                country = country
                    .with_name(MultiLanguageString::new().with_value("en", english_name))
                    .with_aliases(
                        MultiLanguageStringArray::new(super::ALIAS_SEPARATOR)
                            .with_joined("en", aliases),
                    );
            }
            registry.register_country(country);
        }

        for seed in CULTURES {
            registry.register_culture(
                seed.code,
                seed.native_name,
                MultiLanguageString::new().with_value("en", seed.english_name),
                Some(seed.currency),
                (seed.formatter)(),
            );
        }

        tracing::debug!(
            languages = registry.language_list.len(),
            currencies = registry.currency_list.len(),
            countries = registry.country_list.len(),
            cultures = registry.culture_list.len(),
            "loaded builtin reference data"
        );

        registry
    }

    // ========================================================================
    // Registration (startup only)
    // ========================================================================

    /// Add or replace a language.
    pub fn register_language(&mut self, language: Language) -> Arc<Language> {
        let language = Arc::new(language);
        self.languages.insert(language.code.clone(), Arc::clone(&language));
        replace_or_push(&mut self.language_list, Arc::clone(&language));
        language
    }

    /// Add or replace a currency.
    pub fn register_currency(&mut self, currency: Currency) -> Arc<Currency> {
        let currency = Arc::new(currency);
        self.currencies
            .insert(currency.code().to_string(), Arc::clone(&currency));
        replace_or_push(&mut self.currency_list, Arc::clone(&currency));
        currency
    }

    /// Add or replace a country under all three of its codes.
    pub fn register_country(&mut self, country: Country) -> Arc<Country> {
        let country = Arc::new(country);
        self.countries_alpha2
            .insert(country.alpha2_code.clone(), Arc::clone(&country));
        self.countries_alpha3
            .insert(country.alpha3_code.clone(), Arc::clone(&country));
        self.countries_numeric
            .insert(country.numeric_code.clone(), Arc::clone(&country));
        replace_or_push(&mut self.country_list, Arc::clone(&country));
        country
    }

    /// Add or replace a culture.
    ///
    /// The language and country are resolved from the `xx-YY` tag and the
    /// currency from `currency_code`; parts this registry does not know are
    /// left empty.
    pub fn register_culture(
        &mut self,
        code: &str,
        native_name: &str,
        name: MultiLanguageString,
        currency_code: Option<&str>,
        formatter: Formatter,
    ) -> Arc<Culture> {
        let code = code.trim();
        let (language_code, country_code) = match code.split_once('-') {
            Some((language, _)) => (language, &code[code.rfind('-').unwrap_or(0) + 1..]),
            None => (code, ""),
        };

        let culture = Arc::new(Culture {
            code: code.to_string(),
            native_name: native_name.to_string(),
            name,
            country: self.lookup_country(None, country_code),
            language: self.lookup_language(language_code),
            currency: currency_code.and_then(|c| self.lookup_currency(c)),
            formatter,
        });
        self.cultures
            .insert(code.to_ascii_lowercase(), Arc::clone(&culture));
        replace_or_push(&mut self.culture_list, Arc::clone(&culture));
        culture
    }

    // ========================================================================
    // Lookups
    // ========================================================================

    /// Find a language by ISO 639-1 code (case-insensitive).
    pub fn lookup_language(&self, code: &str) -> Option<Arc<Language>> {
        let code = code.trim();
        if code.is_empty() {
            return None;
        }
        self.languages.get(&code.to_ascii_lowercase()).cloned()
    }

    /// Find a currency by ISO 4217 code (case-insensitive).
    pub fn lookup_currency(&self, code: &str) -> Option<Arc<Currency>> {
        let code = code.trim();
        if code.is_empty() {
            return None;
        }
        self.currencies.get(&code.to_ascii_uppercase()).cloned()
    }

    /// Find a country by alpha-2, alpha-3 or numeric code, or, when a
    /// language is given, by its localized name or one of its aliases.
    pub fn lookup_country(&self, language: Option<&Language>, keyword: &str) -> Option<Arc<Country>> {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return None;
        }

        let upper = keyword.to_ascii_uppercase();
        let by_code = match keyword.len() {
            2 => self.countries_alpha2.get(&upper),
            3 => self
                .countries_alpha3
                .get(&upper)
                .or_else(|| self.countries_numeric.get(&upper)),
            _ => None,
        };
        if let Some(country) = by_code {
            return Some(Arc::clone(country));
        }

        let language = language?;
        let lower = keyword.to_lowercase();
        self.country_list
            .iter()
            .find(|country| {
                country.name.value(language).eq_ignore_ascii_case(keyword)
                    || country
                        .aliases
                        .values(language)
                        .iter()
                        .any(|alias| alias.to_lowercase() == lower)
            })
            .cloned()
    }

    /// Find a culture by `xx-YY` tag (case-insensitive).
    pub fn lookup_culture(&self, code: &str) -> Option<Arc<Culture>> {
        let code = code.trim();
        if code.is_empty() {
            return None;
        }
        self.cultures.get(&code.to_ascii_lowercase()).cloned()
    }

    // ========================================================================
    // Listings (registration order)
    // ========================================================================

    pub fn all_languages(&self) -> Vec<Arc<Language>> {
        self.language_list.clone()
    }

    pub fn all_currencies(&self) -> Vec<Arc<Currency>> {
        self.currency_list.clone()
    }

    pub fn all_countries(&self) -> Vec<Arc<Country>> {
        self.country_list.clone()
    }

    pub fn all_cultures(&self) -> Vec<Arc<Culture>> {
        self.culture_list.clone()
    }
}

/// Replace the entry equal to `item`, or append it.
fn replace_or_push<T: PartialEq>(list: &mut Vec<Arc<T>>, item: Arc<T>) {
    match list.iter_mut().find(|existing| ***existing == *item) {
        Some(slot) => *slot = item,
        None => list.push(item),
    }
}

impl CurrencyLookup for Registry {
    fn lookup_currency(&self, code: &str) -> Option<Arc<Currency>> {
        Registry::lookup_currency(self, code)
    }
}

impl LanguageLookup for Registry {
    fn lookup_language(&self, code: &str) -> Option<Arc<Language>> {
        Registry::lookup_language(self, code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_counts() {
        let registry = Registry::builtin();
        assert_eq!(registry.all_languages().len(), LANGUAGES.len());
        assert_eq!(registry.all_currencies().len(), CURRENCIES.len());
        assert_eq!(registry.all_countries().len(), COUNTRY_CODES.len());
        assert_eq!(registry.all_cultures().len(), CULTURES.len());
    }

    #[test]
    fn test_lookup_currency_is_case_insensitive() {
        let registry = Registry::builtin();
        let usd = registry.lookup_currency(" usd ").unwrap();
        assert_eq!(usd.code(), "USD");
        assert!(registry.lookup_currency("XYZ").is_none());
        assert!(registry.lookup_currency("").is_none());
    }

    #[test]
    fn test_lookup_language() {
        let registry = Registry::builtin();
        let zh = registry.lookup_language("ZH").unwrap();
        assert_eq!(zh.native_name, "中文");
        assert_eq!(zh.name.value_for_code("en"), "Chinese");
        assert!(registry.lookup_language("xx").is_none());
    }

    #[test]
    fn test_lookup_country_by_codes() {
        let registry = Registry::builtin();
        let by_alpha2 = registry.lookup_country(None, "us").unwrap();
        let by_alpha3 = registry.lookup_country(None, "USA").unwrap();
        let by_numeric = registry.lookup_country(None, "840").unwrap();
        assert_eq!(by_alpha2, by_alpha3);
        assert_eq!(by_alpha3, by_numeric);
    }

    #[test]
    fn test_every_iso_country_resolves_by_code() {
        let registry = Registry::builtin();
        assert_eq!(registry.all_countries().len(), 249);

        for &(alpha2, alpha3, numeric) in COUNTRY_CODES {
            let country = registry.lookup_country(None, alpha2).unwrap();
            assert_eq!(registry.lookup_country(None, alpha3).unwrap(), country);
            assert_eq!(registry.lookup_country(None, numeric).unwrap(), country);
        }

        // Codes without an embedded English name still resolve
        let aland = registry.lookup_country(None, "ala").unwrap();
        assert_eq!(aland.alpha2_code, "AX");
        assert!(aland.name.is_empty());
    }

    #[test]
    fn test_lookup_country_by_name_and_alias() {
        let registry = Registry::builtin();
        let en = registry.lookup_language("en").unwrap();

        let germany = registry.lookup_country(Some(&*en), "germany").unwrap();
        assert_eq!(germany.alpha2_code, "DE");

        let britain = registry.lookup_country(Some(&*en), "Great Britain").unwrap();
        assert_eq!(britain.alpha2_code, "GB");

        assert!(registry.lookup_country(None, "Germany").is_none());
        assert!(registry.lookup_country(Some(&*en), "Atlantis").is_none());
    }

    #[test]
    fn test_lookup_culture_resolves_parts() {
        let registry = Registry::builtin();
        let culture = registry.lookup_culture("EN-us").unwrap();
        assert_eq!(culture.code, "en-US");
        assert_eq!(culture.language.as_ref().unwrap().code, "en");
        assert_eq!(culture.country.as_ref().unwrap().alpha2_code, "US");
        assert_eq!(culture.currency.as_ref().unwrap().code(), "USD");
        assert_eq!(culture.format_currency_f64(-1234.5).unwrap(), "($1,234.50)");
    }

    #[test]
    fn test_builtin_culture_formatting() {
        let registry = Registry::builtin();
        let value = "1234567.891".parse().unwrap();

        let de = registry.lookup_culture("de-DE").unwrap();
        assert_eq!(de.format_currency(value), "1.234.567,89 €");

        let fr = registry.lookup_culture("fr-FR").unwrap();
        assert_eq!(fr.format_number(value), "1\u{a0}234\u{a0}567,89");

        let ja = registry.lookup_culture("ja-JP").unwrap();
        assert_eq!(ja.format_currency(value), "¥1,234,568");

        let hi = registry.lookup_culture("hi-IN").unwrap();
        assert_eq!(hi.format_currency(value), "₹ 12,34,567.89");
    }

    #[test]
    fn test_register_replaces_existing() {
        let mut registry = Registry::new();
        registry.register_currency(Currency::new("USD"));
        registry.register_currency(
            Currency::new("usd").with_name(MultiLanguageString::new().with_value("en", "Dollar")),
        );

        assert_eq!(registry.all_currencies().len(), 1);
        let usd = registry.lookup_currency("USD").unwrap();
        assert_eq!(usd.name().value_for_code("en"), "Dollar");
    }

    #[test]
    fn test_culture_with_unknown_parts() {
        let mut registry = Registry::new();
        let culture = registry.register_culture(
            "xx-QQ",
            "Test",
            MultiLanguageString::new(),
            Some("XTS"),
            Formatter::default(),
        );
        assert!(culture.language.is_none());
        assert!(culture.country.is_none());
        assert!(culture.currency.is_none());
    }

    #[test]
    fn test_supported_languages() {
        let registry = Registry::builtin();
        let usd = registry.lookup_currency("USD").unwrap();
        let languages = usd.name().supported_languages(&registry);
        assert_eq!(languages.len(), 1);
        assert_eq!(languages[0].code, "en");
    }

    #[test]
    fn test_registry_as_lookup_trait_object() {
        let registry: Arc<dyn CurrencyLookup> = Arc::new(Registry::builtin());
        assert!(registry.lookup_currency("eur").is_some());
    }
}
