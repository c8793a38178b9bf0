//! Diagram block recognition.
//!
//! A diagram block is a fenced code region tagged with the fixed `tikz`
//! language. Its content passes through unchanged except for
//! normalization; the core never validates diagram-source correctness.

use inklet_config::Settings;

use crate::marker::DiagramMarker;
use crate::normalize::normalize_source;
use crate::window::WindowId;

/// The fence language identifying diagram source.
pub const BLOCK_LANGUAGE: &str = "tikz";

/// Whether a code fence language tags a diagram block.
#[must_use]
pub fn is_diagram_block(language: &str) -> bool {
    language == BLOCK_LANGUAGE
}

/// One recognized diagram block: raw source plus the window whose
/// document it belongs to.
///
/// Consumed once, transformed into a marker element; not retained
/// afterward.
#[derive(Debug, Clone)]
pub struct DiagramBlock {
    /// Window owning the document the block was parsed from.
    pub window: WindowId,
    /// Raw source text as written in the fence.
    pub source: String,
}

impl DiagramBlock {
    /// Create a block from a fence's raw content.
    #[must_use]
    pub fn new(window: WindowId, source: impl Into<String>) -> Self {
        Self {
            window,
            source: source.into(),
        }
    }

    /// Convert the block into the marker element the engine scans for,
    /// normalizing the source on the way.
    #[must_use]
    pub fn into_marker(self, settings: Settings) -> DiagramMarker {
        DiagramMarker::new(normalize_source(&self.source), settings.show_console)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_recognizes_block_language() {
        assert!(is_diagram_block("tikz"));
        assert!(!is_diagram_block("rust"));
        assert!(!is_diagram_block("tikzcd"));
        assert!(!is_diagram_block(""));
    }

    #[test]
    fn test_into_marker_normalizes_source() {
        let block = DiagramBlock::new(WindowId::new(1), "  \\draw (0,0);  \n&nbsp;\n");
        let marker = block.into_marker(Settings::default());

        assert_eq!(marker.source(), "\\draw (0,0);");
    }

    #[test]
    fn test_into_marker_carries_console_setting() {
        let settings = Settings {
            show_console: true,
            ..Settings::default()
        };
        let block = DiagramBlock::new(WindowId::new(1), "\\draw;");
        let marker = block.into_marker(settings);

        assert!(marker.show_console());
    }
}
