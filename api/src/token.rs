//! Shared bearer-token storage

use std::sync::Arc;
use tokio::sync::RwLock;

/// Shared handle to the session token
///
/// Cloning the handle shares the underlying storage, so installing or
/// clearing a token through any clone is visible to every request the
/// client sends afterwards. This is what lets a 401 observed anywhere
/// stop the `Authorization` header everywhere.
///
/// # Example
///
/// ```
/// use bookstay_api::TokenHandle;
///
/// # tokio_test::block_on(async {
/// let handle = TokenHandle::new();
/// assert!(handle.current().await.is_none());
///
/// handle.install("jwt-token".to_string()).await;
/// assert_eq!(handle.current().await.as_deref(), Some("jwt-token"));
///
/// handle.clear().await;
/// assert!(handle.current().await.is_none());
/// # });
/// ```
#[derive(Clone, Default)]
pub struct TokenHandle {
    inner: Arc<RwLock<Option<String>>>,
}

impl TokenHandle {
    /// Create an empty handle
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a token, replacing any previous one
    pub async fn install(&self, token: String) {
        *self.inner.write().await = Some(token);
    }

    /// Drop the stored token
    pub async fn clear(&self) {
        *self.inner.write().await = None;
    }

    /// Current token, if one is installed
    pub async fn current(&self) -> Option<String> {
        self.inner.read().await.clone()
    }
}

impl std::fmt::Debug for TokenHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never print the token itself
        f.debug_struct("TokenHandle").finish_non_exhaustive()
    }
}
