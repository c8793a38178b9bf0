//! SVG post-processing for rendered diagrams.
//!
//! Diagrams are converted to SVG once, by an external engine, and then
//! inlined into documents that may switch visual themes at any time.
//! This crate provides the two-stage transform applied to every rendered
//! graphic:
//!
//! 1. [`theme`]: replace literal black/white color values with
//!    theme-relative tokens (`currentColor`, the theme background variable)
//! 2. [`optimize`]: structural cleanup via a streaming XML rewrite, with
//!    id renumbering disabled so identifiers stay unique across the many
//!    diagrams inlined side by side in one document
//!
//! Stage order is fixed: color adaptation runs on the raw markup because
//! optimization may rewrite color attributes into forms the literal
//! patterns no longer match. [`SvgPipeline`] applies both stages and
//! isolates optimizer failures per diagram.

mod error;
pub mod optimize;
mod pipeline;
pub mod theme;

pub use error::OptimizeError;
pub use optimize::{OptimizeProfile, SvgOptimizer};
pub use pipeline::SvgPipeline;
pub use theme::{BACKGROUND_TOKEN, FOREGROUND_TOKEN, adapt_theme_colors};
