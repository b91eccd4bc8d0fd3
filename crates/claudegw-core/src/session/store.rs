//! Holder of the current provider handle ("login state").
//!
//! The store is request-scoped state rather than a process global: the
//! composition root creates one and hands it to the router. A login swaps
//! the whole handle under the write lock, so readers see either the old
//! handle or the new one.

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::RwLock;

use crate::ports::ProviderPort;

/// Returned when an operation needs a provider handle and none is present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Not authenticated")]
pub struct NotAuthenticated;

/// Shared slot for the provider handle.
#[derive(Debug, Default)]
pub struct SessionStore {
    handle: RwLock<Option<Arc<dyn ProviderPort>>>,
}

impl SessionStore {
    /// Create an empty (unauthenticated) store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clone out the current handle, if any.
    ///
    /// The lock is released before this returns, so callers may hold the
    /// handle across provider calls without blocking a concurrent login.
    pub async fn current(&self) -> Option<Arc<dyn ProviderPort>> {
        self.handle.read().await.clone()
    }

    /// Clone out the current handle or fail with [`NotAuthenticated`].
    pub async fn require(&self) -> Result<Arc<dyn ProviderPort>, NotAuthenticated> {
        self.current().await.ok_or(NotAuthenticated)
    }

    /// Whether a handle is present.
    pub async fn is_authenticated(&self) -> bool {
        self.handle.read().await.is_some()
    }

    /// Install a new handle, returning the one it replaced.
    pub async fn replace(&self, handle: Arc<dyn ProviderPort>) -> Option<Arc<dyn ProviderPort>> {
        let expires = handle.session_expires();
        let previous = self.handle.write().await.replace(handle);
        tracing::debug!(
            %expires,
            replaced = previous.is_some(),
            "Provider handle installed"
        );
        previous
    }
}
