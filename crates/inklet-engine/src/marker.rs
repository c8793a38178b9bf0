//! Marker elements the rendering engine scans for.
//!
//! Each diagram block becomes a `<script type="text/tikz">` element whose
//! text content is the normalized source. The engine converts these in
//! place and dispatches a completion event per diagram once the graphic
//! has been spliced into the document.

use std::fmt::Write;

/// The type attribute value the engine scans for.
pub const MARKER_TYPE: &str = "text/tikz";

/// Name of the completion event dispatched on the document once a marker
/// has been converted into a graphic.
pub const RENDER_COMPLETE_EVENT: &str = "tikzjax-load-finished";

/// Per-diagram marker element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagramMarker {
    source: String,
    show_console: bool,
}

impl DiagramMarker {
    /// Create a marker for already-normalized source.
    #[must_use]
    pub fn new(source: String, show_console: bool) -> Self {
        Self {
            source,
            show_console,
        }
    }

    /// The normalized diagram source carried as text content.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Whether the engine should log conversion output.
    #[must_use]
    pub fn show_console(&self) -> bool {
        self.show_console
    }

    /// Serialize the marker element.
    ///
    /// Script elements carry raw text content, so the source is embedded
    /// unescaped, exactly as the engine expects to read it back.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut html = format!(r#"<script type="{MARKER_TYPE}""#);
        if self.show_console {
            html.push_str(r#" data-show-console="true""#);
        }
        write!(html, ">{}</script>", self.source).expect("writing to String cannot fail");
        html
    }
}
