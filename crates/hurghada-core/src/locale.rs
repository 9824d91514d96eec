//! Locale resolution for availability formatting.
//!
//! Only the short month name varies between locales; the range patterns
//! themselves (`"Aug 20–21, 2025"`) are fixed. Locale codes are resolved by
//! their primary language subtag, so `en-US`, `en_GB` and `EN` all select the
//! English table. Unknown codes fall back to English.

use std::{convert::Infallible, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Locale code used when none is configured.
pub const DEFAULT_LOCALE: &str = "en-US";

/// Languages with a short month-name table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    German,
    French,
    Spanish,
    Italian,
    Russian,
    Arabic,
    Dutch,
}

impl Language {
    /// Looks up a language by its primary subtag (`"de"`, `"fr"`, ...).
    pub fn from_subtag(subtag: &str) -> Option<Self> {
        match subtag.to_ascii_lowercase().as_str() {
            "en" => Some(Language::English),
            "de" => Some(Language::German),
            "fr" => Some(Language::French),
            "es" => Some(Language::Spanish),
            "it" => Some(Language::Italian),
            "ru" => Some(Language::Russian),
            "ar" => Some(Language::Arabic),
            "nl" => Some(Language::Dutch),
            _ => None,
        }
    }

    fn short_months(&self) -> &'static [&'static str; 12] {
        match self {
            Language::English => &[
                "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov",
                "Dec",
            ],
            Language::German => &[
                "Jan.", "Feb.", "März", "Apr.", "Mai", "Juni", "Juli", "Aug.", "Sept.", "Okt.",
                "Nov.", "Dez.",
            ],
            Language::French => &[
                "janv.", "févr.", "mars", "avr.", "mai", "juin", "juil.", "août", "sept.", "oct.",
                "nov.", "déc.",
            ],
            Language::Spanish => &[
                "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sept", "oct", "nov",
                "dic",
            ],
            Language::Italian => &[
                "gen", "feb", "mar", "apr", "mag", "giu", "lug", "ago", "set", "ott", "nov",
                "dic",
            ],
            Language::Russian => &[
                "янв.", "февр.", "март", "апр.", "май", "июнь", "июль", "авг.", "сент.", "окт.",
                "нояб.", "дек.",
            ],
            Language::Arabic => &[
                "يناير",
                "فبراير",
                "مارس",
                "أبريل",
                "مايو",
                "يونيو",
                "يوليو",
                "أغسطس",
                "سبتمبر",
                "أكتوبر",
                "نوفمبر",
                "ديسمبر",
            ],
            Language::Dutch => &[
                "jan", "feb", "mrt", "apr", "mei", "jun", "jul", "aug", "sep", "okt", "nov",
                "dec",
            ],
        }
    }
}

/// A resolved locale: the tag as given plus the language it selects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    tag: String,
    language: Language,
}

impl Locale {
    /// Resolves a locale code, falling back to English for unknown or empty
    /// codes. The original tag text is kept for display.
    pub fn resolve(tag: &str) -> Self {
        let tag = tag.trim();
        let primary = tag.split(['-', '_']).next().unwrap_or_default();
        let language = Language::from_subtag(primary).unwrap_or_default();
        let tag = if tag.is_empty() {
            DEFAULT_LOCALE.to_string()
        } else {
            tag.to_string()
        };
        Self { tag, language }
    }

    /// The locale code this locale was resolved from.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Short month name for `month` (1-12). Out-of-range months yield an
    /// empty string; `jiff::civil::Date` never produces one.
    pub fn short_month(&self, month: i8) -> &'static str {
        usize::try_from(month)
            .ok()
            .and_then(|m| m.checked_sub(1))
            .and_then(|idx| self.language.short_months().get(idx))
            .copied()
            .unwrap_or_default()
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::resolve(DEFAULT_LOCALE)
    }
}

impl FromStr for Locale {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::resolve(s))
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag)
    }
}
