//! Cancellable completion subscriptions.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Revocable capability tied to one render surface's listener.
///
/// The listener closure checks the token before acting, so completion
/// events delivered after `unload` are simply dropped. Clones share the
/// same revocation state.
#[derive(Debug, Clone)]
pub struct SubscriptionToken {
    active: Arc<AtomicBool>,
}

impl SubscriptionToken {
    /// Create an active token.
    #[must_use]
    pub fn new() -> Self {
        Self {
            active: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Whether the subscription is still live.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }

    /// Revoke the subscription. Idempotent.
    pub fn revoke(&self) {
        self.active.store(false, Ordering::Release);
    }
}

impl Default for SubscriptionToken {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_token_is_active() {
        assert!(SubscriptionToken::new().is_active());
    }

    #[test]
    fn test_revocation_is_shared_across_clones() {
        let token = SubscriptionToken::new();
        let clone = token.clone();

        token.revoke();

        assert!(!clone.is_active());
    }

    #[test]
    fn test_revoke_is_idempotent() {
        let token = SubscriptionToken::new();
        token.revoke();
        token.revoke();
        assert!(!token.is_active());
    }
}
