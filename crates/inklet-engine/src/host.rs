//! Host document adapter.
//!
//! The core never touches the host's document tree directly. Everything
//! it needs per window — inserting the engine bootstrap element,
//! removing it, and attaching/detaching a render-completion listener —
//! goes through the [`DocumentHost`] trait, keeping the real host
//! binding a single external adapter with a test double in tests.

use std::sync::Arc;

use crate::completion::RenderEvent;
use crate::window::WindowId;

/// Handle for a registered render-completion listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

impl ListenerId {
    /// Create a listener id from the host's raw identifier.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }
}

/// Callback invoked once per diagram when the engine finishes converting
/// a marker into a graphic.
pub type RenderListener = Arc<dyn Fn(RenderEvent) + Send + Sync>;

/// Error from host document operations.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    /// The window's document is gone or was never available.
    #[error("{0} has no document")]
    WindowGone(WindowId),

    /// Host-specific failure.
    #[error("host error: {0}")]
    Other(String),
}

/// Document operations the plugin needs, per window.
///
/// Removal operations are no-ops for absent targets: the lifecycle
/// manager unloads unconditionally at shutdown and must never fail on a
/// window that was already torn down.
pub trait DocumentHost: Send + Sync {
    /// Insert the engine bootstrap element into the window's document
    /// under the given element id.
    ///
    /// # Errors
    ///
    /// Returns an error if the window has no live document.
    fn insert_engine(&self, window: WindowId, script_id: &str) -> Result<(), HostError>;

    /// Remove an element by id from the window's document. Absent
    /// elements and gone windows are ignored.
    fn remove_element(&self, window: WindowId, element_id: &str);

    /// Attach a render-completion listener to the window's document.
    ///
    /// # Errors
    ///
    /// Returns an error if the window has no live document.
    fn add_render_listener(
        &self,
        window: WindowId,
        listener: RenderListener,
    ) -> Result<ListenerId, HostError>;

    /// Detach a previously attached listener. Unknown ids are ignored.
    fn remove_render_listener(&self, window: WindowId, listener: ListenerId);
}
