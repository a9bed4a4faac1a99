//! Bilingual text value object.
//!
//! Most content fields exist as Turkish/English pairs; the UI picks the
//! active-language variant at render time.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Content locale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    Tr,
    En,
}

impl Default for Locale {
    fn default() -> Self {
        Locale::Tr
    }
}

impl std::str::FromStr for Locale {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tr" => Ok(Locale::Tr),
            "en" => Ok(Locale::En),
            _ => Err(()),
        }
    }
}

/// A Turkish/English text pair.
///
/// Both variants are mandatory wherever the field itself is mandatory
/// (e.g. blog titles); optional fields carry an `Option<Bilingual>`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Bilingual {
    pub tr: String,
    pub en: String,
}

impl Bilingual {
    pub fn new(tr: impl Into<String>, en: impl Into<String>) -> Self {
        Self {
            tr: tr.into(),
            en: en.into(),
        }
    }

    /// Select the variant for a locale
    pub fn get(&self, locale: Locale) -> &str {
        match locale {
            Locale::Tr => &self.tr,
            Locale::En => &self.en,
        }
    }

    /// True when both variants are non-empty
    pub fn is_complete(&self) -> bool {
        !self.tr.trim().is_empty() && !self.en.trim().is_empty()
    }

    /// Rebuild from a nullable column pair, dropping fully empty pairs
    pub fn from_columns(tr: Option<String>, en: Option<String>) -> Option<Self> {
        match (tr, en) {
            (None, None) => None,
            (tr, en) => Some(Self {
                tr: tr.unwrap_or_default(),
                en: en.unwrap_or_default(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_selection() {
        let pair = Bilingual::new("Merhaba", "Hello");
        assert_eq!(pair.get(Locale::Tr), "Merhaba");
        assert_eq!(pair.get(Locale::En), "Hello");
    }

    #[test]
    fn test_completeness() {
        assert!(Bilingual::new("a", "b").is_complete());
        assert!(!Bilingual::new("a", " ").is_complete());
    }

    #[test]
    fn test_from_columns() {
        assert!(Bilingual::from_columns(None, None).is_none());
        let pair = Bilingual::from_columns(Some("t".into()), None).unwrap();
        assert_eq!(pair.tr, "t");
        assert_eq!(pair.en, "");
    }
}
