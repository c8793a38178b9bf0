//! The two-stage transform applied to every rendered graphic.

use crate::optimize::SvgOptimizer;
use crate::theme::adapt_theme_colors;

/// Applies color adaptation and structural optimization, in that order.
///
/// Color adaptation runs first, on the raw markup: the optimizer may
/// rewrite or merge color attributes into forms the literal black/white
/// patterns no longer match.
///
/// An optimizer failure is contained to the one graphic being processed:
/// the pipeline falls back to the color-adapted markup and logs a
/// warning, so a malformed graphic never aborts the completion pathway
/// for unrelated diagrams.
pub struct SvgPipeline {
    adapt_colors: bool,
    optimizer: SvgOptimizer,
}

impl SvgPipeline {
    /// Create a pipeline with the default safe optimizer.
    ///
    /// `adapt_colors` comes from the "invert colors for dark theme"
    /// setting and controls whether the color adaptation stage runs.
    #[must_use]
    pub fn new(adapt_colors: bool) -> Self {
        Self {
            adapt_colors,
            optimizer: SvgOptimizer::safe(),
        }
    }

    /// Create a pipeline with a custom optimizer.
    #[must_use]
    pub fn with_optimizer(adapt_colors: bool, optimizer: SvgOptimizer) -> Self {
        Self {
            adapt_colors,
            optimizer,
        }
    }

    /// Run both stages over one graphic's markup.
    #[must_use]
    pub fn run(&self, svg: &str) -> String {
        let adapted = if self.adapt_colors {
            adapt_theme_colors(svg)
        } else {
            svg.to_owned()
        };

        match self.optimizer.optimize(&adapted) {
            Ok(optimized) => optimized,
            Err(error) => {
                tracing::warn!(%error, "SVG optimization failed, keeping unoptimized markup");
                adapted
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_runs_both_stages() {
        let svg = "<svg>\n  <!-- engine -->\n  <path stroke=\"black\"/>\n</svg>";
        let result = SvgPipeline::new(true).run(svg);
        assert_eq!(result, r#"<svg><path stroke="currentColor"/></svg>"#);
    }

    #[test]
    fn test_color_adaptation_disabled() {
        let svg = r#"<svg><path stroke="black"/></svg>"#;
        let result = SvgPipeline::new(false).run(svg);
        assert_eq!(result, svg);
    }

    #[test]
    fn test_optimizer_failure_falls_back_to_adapted_markup() {
        // Unbalanced tags make the optimizer fail; the color-adapted
        // markup must survive.
        let svg = r#"<svg><path stroke="black"></svg>"#;
        let result = SvgPipeline::new(true).run(svg);
        assert_eq!(result, r#"<svg><path stroke="currentColor"></svg>"#);
    }

    #[test]
    fn test_optimizer_failure_without_adaptation_returns_input() {
        let svg = "<svg><g></svg>";
        let result = SvgPipeline::new(false).run(svg);
        assert_eq!(result, svg);
    }

    #[test]
    fn test_id_set_preserved_end_to_end() {
        let svg = r##"<svg><marker id="tip"/><path stroke="black" marker-end="url(#tip)"/></svg>"##;
        let result = SvgPipeline::new(true).run(svg);
        assert!(result.contains(r#"id="tip""#));
        assert!(result.contains("url(#tip)"));
    }
}
