//! Theme color adaptation for rendered SVGs.
//!
//! The rendering engine emits literal black strokes and white fills.
//! Those are replaced with theme-relative tokens so a diagram rendered
//! once stays legible after the host switches between light and dark
//! themes, without a re-render.

use std::sync::LazyLock;

use regex::Regex;

/// Token meaning "inherit the current foreground color".
pub const FOREGROUND_TOKEN: &str = "currentColor";

/// Token meaning "use the current theme background color".
pub const BACKGROUND_TOKEN: &str = "var(--background-primary)";

/// Regex to match quoted literal black values (`"black"` or `"#000"`).
static BLACK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""(?:black|#000)""#).unwrap());

/// Regex to match quoted literal white values (`"white"` or `"#fff"`).
static WHITE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""(?:white|#fff)""#).unwrap());

/// Replace literal black/white color values with theme-relative tokens.
///
/// Matches only quoted attribute-value forms (`stroke="black"`,
/// `fill="#000"`), so occurrences of the word "black" inside text content
/// are left untouched. Must run before structural optimization, which may
/// merge color attributes into forms these patterns no longer match.
#[must_use]
pub fn adapt_theme_colors(svg: &str) -> String {
    let result = BLACK_RE.replace_all(svg, format!(r#""{FOREGROUND_TOKEN}""#));
    WHITE_RE
        .replace_all(&result, format!(r#""{BACKGROUND_TOKEN}""#))
        .into_owned()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_black_name_becomes_foreground_token() {
        let svg = r#"<path stroke="black" d="M0 0"/>"#;
        let result = adapt_theme_colors(svg);
        assert_eq!(result, r#"<path stroke="currentColor" d="M0 0"/>"#);
    }

    #[test]
    fn test_black_hex_becomes_foreground_token() {
        let svg = r##"<path fill="#000"/>"##;
        let result = adapt_theme_colors(svg);
        assert_eq!(result, r#"<path fill="currentColor"/>"#);
    }

    #[test]
    fn test_white_becomes_background_token() {
        let svg = r##"<rect fill="white" stroke="#fff"/>"##;
        let result = adapt_theme_colors(svg);
        assert_eq!(
            result,
            r#"<rect fill="var(--background-primary)" stroke="var(--background-primary)"/>"#
        );
    }

    #[test]
    fn test_word_black_in_text_content_untouched() {
        let svg = r#"<text x="0" y="0">black cat</text>"#;
        let result = adapt_theme_colors(svg);
        assert_eq!(result, svg);
    }

    #[test]
    fn test_other_colors_untouched() {
        let svg = r##"<path stroke="#ff0000" fill="blue"/>"##;
        let result = adapt_theme_colors(svg);
        assert_eq!(result, svg);
    }

    #[test]
    fn test_multiple_occurrences_all_replaced() {
        let svg = r##"<g stroke="black"><path fill="#000"/><path stroke="black"/></g>"##;
        let result = adapt_theme_colors(svg);
        assert!(!result.contains("black"));
        assert_eq!(result.matches(FOREGROUND_TOKEN).count(), 3);
    }

    #[test]
    fn test_no_colors_no_change() {
        let svg = r#"<circle cx="1" cy="1" r="1"/>"#;
        let result = adapt_theme_colors(svg);
        assert_eq!(result, svg);
    }
}
