//! Engine lifecycle management.
//!
//! One rendering-engine instance per window: [`EngineLifecycleManager`]
//! injects the engine bootstrap element and attaches a completion
//! listener when a window is loaded, and removes both symmetrically when
//! it is unloaded. Loading runs for every window at plugin startup and
//! for each newly opened window; unloading runs for every window at
//! shutdown, unconditionally, so no listener or injected element remains
//! referenced after teardown.

use std::collections::HashMap;
use std::sync::Arc;

use crate::completion::RenderCompletionHandler;
use crate::host::{DocumentHost, HostError, ListenerId};
use crate::subscription::SubscriptionToken;
use crate::window::{WindowId, WindowRegistry};

/// Element id of the engine bootstrap script, unique within a document.
pub const ENGINE_SCRIPT_ID: &str = "tikz-engine";

/// Lifecycle error.
#[derive(Debug, thiserror::Error)]
pub enum LifecycleError {
    /// `load` called on a window that already has a live surface.
    #[error("{window} already has a rendering engine loaded")]
    AlreadyLoaded {
        /// The offending window.
        window: WindowId,
    },

    /// Host document operation failed.
    #[error(transparent)]
    Host(#[from] HostError),
}

/// Per-window binding of one engine instance to the window's document.
///
/// Exactly one may exist per window at any time, and it never outlives
/// the window. The listener and the surface share a lifetime: neither
/// exists without the other.
struct RenderSurface {
    listener: ListenerId,
    token: SubscriptionToken,
}

/// Loads and unloads the rendering engine across the host's windows.
pub struct EngineLifecycleManager {
    host: Arc<dyn DocumentHost>,
    handler: Arc<RenderCompletionHandler>,
    surfaces: HashMap<WindowId, RenderSurface>,
}

impl EngineLifecycleManager {
    /// Create a manager over the host adapter and completion handler.
    #[must_use]
    pub fn new(host: Arc<dyn DocumentHost>, handler: Arc<RenderCompletionHandler>) -> Self {
        Self {
            host,
            handler,
            surfaces: HashMap::new(),
        }
    }

    /// Whether a window currently has a live surface.
    #[must_use]
    pub fn is_loaded(&self, window: WindowId) -> bool {
        self.surfaces.contains_key(&window)
    }

    /// Inject the engine and attach a completion listener to a window.
    ///
    /// # Errors
    ///
    /// Returns [`LifecycleError::AlreadyLoaded`] if the window already
    /// has a live surface, or a host error if the window's document is
    /// unavailable. A failed load leaves no partial surface behind.
    pub fn load(&mut self, window: WindowId) -> Result<(), LifecycleError> {
        if self.surfaces.contains_key(&window) {
            return Err(LifecycleError::AlreadyLoaded { window });
        }

        let token = SubscriptionToken::new();
        let listener = {
            let handler = Arc::clone(&self.handler);
            let token = token.clone();
            Arc::new(move |event| {
                // Events arriving after unload are dropped: the surface
                // they belong to is gone.
                if token.is_active() {
                    handler.handle(event);
                }
            })
        };

        let listener_id = self.host.add_render_listener(window, listener)?;
        if let Err(error) = self.host.insert_engine(window, ENGINE_SCRIPT_ID) {
            // Roll back the listener so the surface invariant holds.
            self.host.remove_render_listener(window, listener_id);
            token.revoke();
            return Err(error.into());
        }

        self.surfaces.insert(
            window,
            RenderSurface {
                listener: listener_id,
                token,
            },
        );
        tracing::info!(%window, "Loaded rendering engine");
        Ok(())
    }

    /// Remove the engine and detach the listener from a window.
    ///
    /// Safe no-op for windows with no live surface.
    pub fn unload(&mut self, window: WindowId) {
        let Some(surface) = self.surfaces.remove(&window) else {
            return;
        };
        surface.token.revoke();
        self.host.remove_render_listener(window, surface.listener);
        self.host.remove_element(window, ENGINE_SCRIPT_ID);
        tracing::info!(%window, "Unloaded rendering engine");
    }

    /// Load every window the registry reports. Called at plugin startup.
    ///
    /// Per-window failures are logged and skipped so one window never
    /// prevents the others from functioning.
    pub fn attach_all(&mut self, registry: &WindowRegistry) {
        for window in registry.list_windows() {
            self.load_logged(window);
        }
    }

    /// Incremental load for the host's "new window opened" notification.
    pub fn on_window_open(&mut self, window: WindowId) {
        self.load_logged(window);
    }

    /// Unload every window the registry reports, then tear down any
    /// surfaces left for windows the host no longer enumerates. Called
    /// at plugin shutdown.
    pub fn detach_all(&mut self, registry: &WindowRegistry) {
        for window in registry.list_windows() {
            self.unload(window);
        }
        for (window, surface) in self.surfaces.drain() {
            surface.token.revoke();
            self.host.remove_render_listener(window, surface.listener);
            self.host.remove_element(window, ENGINE_SCRIPT_ID);
            tracing::debug!(%window, "Dropped surface for closed window");
        }
    }

    fn load_logged(&mut self, window: WindowId) {
        if let Err(error) = self.load(window) {
            tracing::warn!(%window, %error, "Skipping window");
        }
    }
}
