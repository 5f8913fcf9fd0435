// ============================================================================
// Reference Data Sorting
// Key-based ordering for lists handed out by the registry
// ============================================================================

use super::{Country, Culture, Language, MultiLanguageString};
use crate::domain::Currency;
use std::sync::Arc;

/// Reference entries that carry a code and localized names.
pub trait Coded {
    /// Primary code used for ordering
    fn code(&self) -> &str;

    fn name(&self) -> &MultiLanguageString;
}

impl Coded for Language {
    fn code(&self) -> &str {
        &self.code
    }

    fn name(&self) -> &MultiLanguageString {
        &self.name
    }
}

impl Coded for Currency {
    fn code(&self) -> &str {
        Currency::code(self)
    }

    fn name(&self) -> &MultiLanguageString {
        Currency::name(self)
    }
}

impl Coded for Country {
    fn code(&self) -> &str {
        &self.alpha2_code
    }

    fn name(&self) -> &MultiLanguageString {
        &self.name
    }
}

impl Coded for Culture {
    fn code(&self) -> &str {
        &self.code
    }

    fn name(&self) -> &MultiLanguageString {
        &self.name
    }
}

/// Sort by code.
pub fn sort_by_code<T: Coded>(list: &mut [Arc<T>]) {
    list.sort_by(|a, b| a.code().cmp(b.code()));
}

/// Sort by the name localized in `language`; missing names sort first.
pub fn sort_by_name<T: Coded>(list: &mut [Arc<T>], language: &Language) {
    list.sort_by(|a, b| a.name().value(language).cmp(b.name().value(language)));
}

/// Sort cultures by country code; cultures without a country sort first.
pub fn sort_by_country_code(list: &mut [Arc<Culture>]) {
    list.sort_by(|a, b| {
        let ka = a.country.as_ref().map(|c| c.alpha2_code.as_str());
        let kb = b.country.as_ref().map(|c| c.alpha2_code.as_str());
        ka.cmp(&kb)
    });
}

/// Sort cultures by localized country name; cultures without a country sort first.
pub fn sort_by_country_name(list: &mut [Arc<Culture>], language: &Language) {
    list.sort_by(|a, b| {
        let ka = a.country.as_ref().map(|c| c.name.value(language));
        let kb = b.country.as_ref().map(|c| c.name.value(language));
        ka.cmp(&kb)
    });
}

/// Sort cultures by language code; cultures without a language sort first.
pub fn sort_by_language_code(list: &mut [Arc<Culture>]) {
    list.sort_by(|a, b| {
        let ka = a.language.as_ref().map(|l| l.code.as_str());
        let kb = b.language.as_ref().map(|l| l.code.as_str());
        ka.cmp(&kb)
    });
}
