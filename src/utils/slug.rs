//! URL slug generation with Turkish transliteration.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::MAX_SLUG_LENGTH;

static NON_SLUG_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9]+").expect("invalid slug regex"));
static EDGE_DASHES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-+|-+$").expect("invalid slug regex"));

/// Turn arbitrary text into a URL-safe slug.
///
/// Turkish letters map to their ASCII counterparts before everything
/// else collapses to single dashes. Output is lowercase, at most
/// [`MAX_SLUG_LENGTH`] characters, with no leading or trailing dash.
pub fn slugify(text: &str) -> String {
    let transliterated: String = text
        .chars()
        .map(|c| match c {
            'ç' | 'Ç' => 'c',
            'ğ' | 'Ğ' => 'g',
            'ı' | 'I' => 'i',
            'İ' => 'i',
            'ö' | 'Ö' => 'o',
            'ş' | 'Ş' => 's',
            'ü' | 'Ü' => 'u',
            other => other,
        })
        .collect();

    let lowered = transliterated.to_lowercase();
    let dashed = NON_SLUG_CHARS.replace_all(&lowered, "-");
    let trimmed = EDGE_DASHES.replace_all(&dashed, "");

    let mut slug: String = trimmed.chars().take(MAX_SLUG_LENGTH).collect();
    // Truncation can land on a dash
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_slugify() {
        assert_eq!(slugify("Hello World"), "hello-world");
    }

    #[test]
    fn test_turkish_characters_transliterate() {
        assert_eq!(slugify("Yazılım Geliştirme"), "yazilim-gelistirme");
        assert_eq!(slugify("Çok Güzel Şeyler"), "cok-guzel-seyler");
        assert_eq!(slugify("İstanbul'da Öğrenmek"), "istanbul-da-ogrenmek");
    }

    #[test]
    fn test_punctuation_collapses_to_single_dash() {
        assert_eq!(slugify("rust -- why & how?"), "rust-why-how");
    }

    #[test]
    fn test_edges_are_trimmed() {
        assert_eq!(slugify("  !hello!  "), "hello");
    }

    #[test]
    fn test_long_input_is_truncated() {
        let long = "a ".repeat(200);
        let slug = slugify(&long);
        assert!(slug.len() <= MAX_SLUG_LENGTH);
        assert!(!slug.ends_with('-'));
    }

    #[test]
    fn test_symbols_only_yields_empty() {
        assert_eq!(slugify("!!??"), "");
    }
}
