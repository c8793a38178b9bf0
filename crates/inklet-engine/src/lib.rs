//! Per-window rendering-engine lifecycle for the inklet diagram plugin.
//!
//! The host application presents multiple independent top-level windows,
//! each with its own document. This crate coordinates one rendering-engine
//! instance per window:
//!
//! - [`window`]: window enumeration behind the narrow [`WindowTopology`]
//!   adapter trait (main window first, then genuine floating windows)
//! - [`lifecycle`]: [`EngineLifecycleManager`] injects the engine and its
//!   completion listener into every window at startup and into each newly
//!   opened window, and removes them symmetrically at shutdown
//! - [`normalize`]: deterministic cleanup of raw diagram source before it
//!   is handed to the engine
//! - [`block`] / [`marker`]: the recognized fence language and the marker
//!   element the engine scans for and converts in place
//! - [`completion`]: the asynchronous per-diagram completion handler that
//!   drives the [`inklet_svg`] transform pipeline
//!
//! Each window owns an independent engine and document; there is no shared
//! mutable state across windows. Completion events arrive out of order
//! relative to document position, and events delivered after a window's
//! surface has been unloaded are dropped via its [`SubscriptionToken`].

pub mod block;
pub mod completion;
pub mod host;
pub mod lifecycle;
pub mod marker;
pub mod normalize;
mod subscription;
pub mod window;

pub use block::{BLOCK_LANGUAGE, DiagramBlock, is_diagram_block};
pub use completion::{GraphicSlot, RenderCompletionHandler, RenderEvent};
pub use host::{DocumentHost, HostError, ListenerId, RenderListener};
pub use lifecycle::{ENGINE_SCRIPT_ID, EngineLifecycleManager, LifecycleError};
pub use marker::{DiagramMarker, MARKER_TYPE, RENDER_COMPLETE_EVENT};
pub use normalize::normalize_source;
pub use subscription::SubscriptionToken;
pub use window::{WindowId, WindowRegistry, WindowTopology};
