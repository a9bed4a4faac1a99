//! HTML sanitization for campaign bodies.

use ammonia::Builder;
use once_cell::sync::Lazy;

// Email-safe subset: structural and inline formatting tags plus images
// and links. Scripts, styles, and event handlers never survive.
static CLEANER: Lazy<Builder<'static>> = Lazy::new(|| {
    let mut builder = Builder::default();
    builder
        .add_generic_attributes(&["style"])
        .add_tag_attributes("img", &["src", "alt", "width", "height"])
        .add_tag_attributes("a", &["href", "target"]);
    builder
});

/// Strip unsafe markup from untrusted HTML.
pub fn clean_html(html: &str) -> String {
    CLEANER.clean(html).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_tags_are_stripped() {
        let out = clean_html("<p>hi</p><script>alert(1)</script>");
        assert!(out.contains("<p>hi</p>"));
        assert!(!out.contains("script"));
    }

    #[test]
    fn test_event_handlers_are_stripped() {
        let out = clean_html(r#"<a href="https://example.com" onclick="steal()">x</a>"#);
        assert!(out.contains("href"));
        assert!(!out.contains("onclick"));
    }

    #[test]
    fn test_plain_formatting_survives() {
        let input = "<h1>Title</h1><p><strong>bold</strong> and <em>italic</em></p>";
        assert_eq!(clean_html(input), input);
    }
}
