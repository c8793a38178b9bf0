//! Window enumeration.
//!
//! The host may present multiple independent top-level windows at once:
//! the main window plus any number of detached/floating windows. The core
//! only needs to enumerate them, so the host binding is isolated behind
//! the narrow [`WindowTopology`] trait with a documented contract.

use std::fmt;
use std::sync::Arc;

/// Opaque handle identifying one top-level window of the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WindowId(u64);

impl WindowId {
    /// Create a window id from the host's raw identifier.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The host's raw identifier.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "window-{}", self.0)
    }
}

/// Host adapter reporting the current window topology.
///
/// Contract: [`main_window`](Self::main_window) is always live, and
/// [`floating_windows`](Self::floating_windows) contains only genuine
/// separate windows (in-window panes are already filtered out). No
/// ordering is required beyond that. Implementations must reflect the
/// topology at call time rather than a cached snapshot.
pub trait WindowTopology: Send + Sync {
    /// The main window handle.
    fn main_window(&self) -> WindowId;

    /// Currently open floating windows, if any.
    fn floating_windows(&self) -> Vec<WindowId>;
}

/// Enumerates all currently open top-level windows.
pub struct WindowRegistry {
    topology: Arc<dyn WindowTopology>,
}

impl WindowRegistry {
    /// Create a registry over the given host topology adapter.
    #[must_use]
    pub fn new(topology: Arc<dyn WindowTopology>) -> Self {
        Self { topology }
    }

    /// List all open windows: the main window first, then every floating
    /// window, with no duplicates.
    ///
    /// Computed fresh on every call. With zero floating windows the
    /// result contains exactly the main window.
    #[must_use]
    pub fn list_windows(&self) -> Vec<WindowId> {
        let main = self.topology.main_window();
        let mut windows = vec![main];
        for window in self.topology.floating_windows() {
            if !windows.contains(&window) {
                windows.push(window);
            }
        }
        windows
    }
}
