//! Render-completion handling.
//!
//! The engine emits one completion event per diagram, asynchronously and
//! out of order relative to document position. Each event's processing
//! is synchronous string work on the window's own event loop: read the
//! graphic's markup, run the transform pipeline, write the result back.
//! Concurrently completing diagrams never share state and cannot
//! interfere with one another.

use inklet_config::Settings;
use inklet_svg::SvgPipeline;

use crate::window::WindowId;

/// Owned handle over one converted graphic spliced into a document.
///
/// Modeling the graphic as a replace-markup handle rather than a live
/// tree reference keeps the transform stages testable on plain text.
pub trait GraphicSlot: Send {
    /// The graphic's current serialized markup.
    fn markup(&self) -> String;

    /// Replace the graphic's serialized content.
    fn replace(&mut self, markup: String);
}

/// Completion event payload: the window and the produced graphic.
pub struct RenderEvent {
    /// Window whose document the graphic was rendered into.
    pub window: WindowId,
    /// The graphic, already spliced in place of its marker.
    pub graphic: Box<dyn GraphicSlot>,
}

/// Terminal handler fired once per converted diagram.
pub struct RenderCompletionHandler {
    pipeline: SvgPipeline,
}

impl RenderCompletionHandler {
    /// Create a handler with a pipeline configured from settings.
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        Self::with_pipeline(SvgPipeline::new(settings.invert_colors_in_dark_mode))
    }

    /// Create a handler over an explicit pipeline.
    #[must_use]
    pub fn with_pipeline(pipeline: SvgPipeline) -> Self {
        Self { pipeline }
    }

    /// Process one completion event.
    ///
    /// Side-effecting and infallible from the caller's perspective:
    /// transform failures are contained inside the pipeline and the
    /// graphic always ends up with the best available markup.
    pub fn handle(&self, event: RenderEvent) {
        let mut graphic = event.graphic;
        let transformed = self.pipeline.run(&graphic.markup());
        graphic.replace(transformed);
        tracing::debug!(window = %event.window, "Processed diagram completion");
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use pretty_assertions::assert_eq;

    use super::*;

    struct TestSlot {
        markup: Arc<Mutex<String>>,
    }

    impl TestSlot {
        fn new(markup: &str) -> (Self, Arc<Mutex<String>>) {
            let shared = Arc::new(Mutex::new(markup.to_owned()));
            (
                Self {
                    markup: Arc::clone(&shared),
                },
                shared,
            )
        }
    }

    impl GraphicSlot for TestSlot {
        fn markup(&self) -> String {
            self.markup.lock().unwrap().clone()
        }

        fn replace(&mut self, markup: String) {
            *self.markup.lock().unwrap() = markup;
        }
    }

    fn dark_mode_settings() -> Settings {
        Settings {
            invert_colors_in_dark_mode: true,
            ..Settings::default()
        }
    }

    #[test]
    fn test_handle_adapts_and_optimizes() {
        let handler = RenderCompletionHandler::new(dark_mode_settings());
        let (slot, markup) = TestSlot::new(
            "<svg>\n  <!-- engine -->\n  <path stroke=\"black\"/>\n</svg>",
        );

        handler.handle(RenderEvent {
            window: WindowId::new(1),
            graphic: Box::new(slot),
        });

        assert_eq!(
            *markup.lock().unwrap(),
            r#"<svg><path stroke="currentColor"/></svg>"#
        );
    }

    #[test]
    fn test_handle_without_color_inversion() {
        let settings = Settings {
            invert_colors_in_dark_mode: false,
            ..Settings::default()
        };
        let handler = RenderCompletionHandler::new(settings);
        let (slot, markup) = TestSlot::new(r#"<svg><path stroke="black"/></svg>"#);

        handler.handle(RenderEvent {
            window: WindowId::new(1),
            graphic: Box::new(slot),
        });

        assert_eq!(
            *markup.lock().unwrap(),
            r#"<svg><path stroke="black"/></svg>"#
        );
    }

    #[test]
    fn test_handle_malformed_markup_keeps_best_available() {
        let handler = RenderCompletionHandler::new(dark_mode_settings());
        let (slot, markup) = TestSlot::new(r#"<svg><path stroke="black"></svg>"#);

        handler.handle(RenderEvent {
            window: WindowId::new(1),
            graphic: Box::new(slot),
        });

        // Optimizer rejects the unbalanced markup; color adaptation still applies.
        assert_eq!(
            *markup.lock().unwrap(),
            r#"<svg><path stroke="currentColor"></svg>"#
        );
    }

    #[test]
    fn test_events_processed_independently() {
        let handler = RenderCompletionHandler::new(dark_mode_settings());
        let (first, first_markup) = TestSlot::new(r#"<svg><marker id="tip"/></svg>"#);
        let (second, second_markup) = TestSlot::new(r#"<svg><marker id="tip"/></svg>"#);

        // Two diagrams in the same document may both declare id="tip";
        // neither handling renames it, so inlining both stays consistent.
        handler.handle(RenderEvent {
            window: WindowId::new(1),
            graphic: Box::new(first),
        });
        handler.handle(RenderEvent {
            window: WindowId::new(1),
            graphic: Box::new(second),
        });

        assert_eq!(
            *first_markup.lock().unwrap(),
            *second_markup.lock().unwrap()
        );
        assert!(first_markup.lock().unwrap().contains(r#"id="tip""#));
    }
}
