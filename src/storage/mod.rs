//! Storage Layer - Backends
//!
//! A key-value slot shared between page instances of the same origin,
//! with notifications for writes made by *other* instances.
//! Implementations: browser Web Storage and an in-process memory hub.

mod browser;
mod memory;

use std::sync::Arc;

use thiserror::Error;

pub use browser::BrowserStorage;
pub use memory::MemoryBackend;

/// Called when another instance changes a watched key
pub type ChangeCallback = Arc<dyn Fn() + Send + Sync>;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("storage is not available in this browser")]
    Unavailable,

    #[error("failed to read storage: {0}")]
    Read(String),

    #[error("failed to write storage: {0}")]
    Write(String),

    #[error("failed to serialize content: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A shared key-value slot with cross-instance change notifications
pub trait StorageBackend: Send + Sync {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replace the value in one step
    fn write(&self, key: &str, value: &str) -> Result<(), StoreError>;

    fn remove(&self, key: &str) -> Result<(), StoreError>;

    /// Watch `key` for changes made by other instances.
    /// The writer itself is not notified.
    fn subscribe(&self, key: &str, on_change: ChangeCallback) -> Subscription;
}

/// Registered change listener, released on drop
#[must_use = "dropping a subscription unsubscribes immediately"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// A subscription that never fires
    pub fn inert() -> Self {
        Self { cancel: None }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}
