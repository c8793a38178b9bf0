//! Diagram source normalization.
//!
//! Editors paste non-breaking-space entities into code blocks, and block
//! source arrives with uneven indentation and blank lines. The engine is
//! sensitive to both, so every diagram block is cleaned up once before it
//! is handed over for rendering.

/// Non-breaking-space escape sequence removed from diagram source.
const NBSP_ENTITY: &str = "&nbsp;";

/// Normalize raw diagram source.
///
/// Removes every `&nbsp;` occurrence, trims each line, drops lines that
/// are empty after trimming and rejoins with single newlines. Total over
/// arbitrary input and idempotent.
#[must_use]
pub fn normalize_source(source: &str) -> String {
    source
        .replace(NBSP_ENTITY, "")
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_trims_lines_and_drops_empties() {
        let source = "  \\draw (0,0) circle (1in);  \n&nbsp;\n";
        assert_eq!(normalize_source(source), "\\draw (0,0) circle (1in);");
    }

    #[test]
    fn test_removes_nbsp_inside_lines() {
        let source = "\\draw&nbsp;(0,0);";
        assert_eq!(normalize_source(source), "\\draw(0,0);");
    }

    #[test]
    fn test_joins_with_single_newlines() {
        let source = "a\n\n\nb\r\nc";
        assert_eq!(normalize_source(source), "a\nb\nc");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize_source(""), "");
        assert_eq!(normalize_source("   \n \t \n"), "");
    }

    #[test]
    fn test_idempotent() {
        let inputs = [
            "  \\draw (0,0) circle (1in);  \n&nbsp;\n",
            "a\n\nb",
            "",
            "&nbsp;&nbsp;",
            "\\begin{tikzpicture}\n  \\node {x};\n\\end{tikzpicture}",
        ];
        for input in inputs {
            let once = normalize_source(input);
            assert_eq!(normalize_source(&once), once, "not idempotent for {input:?}");
        }
    }
}
