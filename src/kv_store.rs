use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory holder for the single API key.
///
/// Clones share the same slot, so one store built at startup can be handed
/// to every worker. Each `set` swaps in a whole new `Arc<str>`; a reader
/// sees either the previous value or the new one, never a mix.
#[derive(Clone, Default)]
pub struct KeyStore {
    inner: Arc<RwLock<Option<Arc<str>>>>,
}

impl KeyStore {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(None)),
        }
    }

    /// Returns the stored key, or an empty string if nothing was set.
    pub async fn get(&self) -> String {
        let slot = self.inner.read().await;
        slot.as_deref().unwrap_or_default().to_string()
    }

    /// Replaces the stored key. No validation happens here.
    pub async fn set(&self, value: impl Into<String>) {
        let value: Arc<str> = Arc::from(value.into());
        let mut slot = self.inner.write().await;
        *slot = Some(value);
    }
}
