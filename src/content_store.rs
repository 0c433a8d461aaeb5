//! Content Store
//!
//! The one named slot holding the serialized site document, plus change
//! notifications from other page instances.

use std::sync::Arc;

use crate::config::SiteConfig;
use crate::models::SiteContent;
use crate::storage::{BrowserStorage, MemoryBackend, StorageBackend, StoreError, Subscription};

#[derive(Clone)]
pub struct ContentStore {
    backend: Arc<dyn StorageBackend>,
    key: String,
}

impl ContentStore {
    pub fn new(backend: Arc<dyn StorageBackend>, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    /// `localStorage`, or a tab-local memory slot when the browser refuses it
    pub fn browser(config: &SiteConfig) -> Self {
        if BrowserStorage::Local.is_available() {
            Self::new(Arc::new(BrowserStorage::Local), config.storage_key.clone())
        } else {
            log::warn!("localStorage unavailable, edits will not outlive this tab");
            Self::new(Arc::new(MemoryBackend::new()), config.storage_key.clone())
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Current document. Missing or unreadable data yields the default document.
    pub fn load(&self) -> SiteContent {
        let raw = match self.backend.read(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                log::debug!("no stored content under {:?}, using defaults", self.key);
                return SiteContent::default();
            }
            Err(err) => {
                log::error!("failed to load content from storage: {}", err);
                return SiteContent::default();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(doc) => doc,
            Err(err) => {
                log::error!("stored content is not a valid document, using defaults: {}", err);
                SiteContent::default()
            }
        }
    }

    /// Serialize the whole document, then write it in a single call
    pub fn save(&self, doc: &SiteContent) -> Result<(), StoreError> {
        let raw = serde_json::to_string(doc)?;
        self.backend.write(&self.key, &raw)?;
        log::info!("saved content ({} bytes)", raw.len());
        Ok(())
    }

    /// Run `on_change` when another page instance saves.
    /// Call [`ContentStore::load`] inside it to get the new document.
    pub fn subscribe<F>(&self, on_change: F) -> Subscription
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.backend.subscribe(&self.key, Arc::new(on_change))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::{apply, EditCommand, Field, ListSection};
    use crate::storage::ChangeCallback;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    const KEY: &str = "mansaj-content";

    fn pair() -> (ContentStore, ContentStore, MemoryBackend) {
        let tab_a = MemoryBackend::new();
        let tab_b = tab_a.connect();
        let raw = tab_a.clone();
        (
            ContentStore::new(Arc::new(tab_a), KEY),
            ContentStore::new(Arc::new(tab_b), KEY),
            raw,
        )
    }

    fn edited() -> SiteContent {
        let doc = apply(
            &SiteContent::default(),
            &EditCommand::SetField {
                field: Field::ContactEmail,
                value: "sales@mansaj.sa".to_string(),
            },
            0,
        )
        .unwrap();
        apply(&doc, &EditCommand::AddItem { section: ListSection::Clients }, 42).unwrap()
    }

    /// Backend whose writes always fail, like a full quota
    struct FullStorage;

    impl StorageBackend for FullStorage {
        fn read(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Ok(None)
        }

        fn write(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Write("QuotaExceededError".to_string()))
        }

        fn remove(&self, _key: &str) -> Result<(), StoreError> {
            Ok(())
        }

        fn subscribe(&self, _key: &str, _on_change: ChangeCallback) -> Subscription {
            Subscription::inert()
        }
    }

    #[test]
    fn test_first_run_loads_defaults() {
        let (store, _, _) = pair();
        assert_eq!(store.load(), SiteContent::default());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let (store, _, _) = pair();
        let doc = edited();
        store.save(&doc).unwrap();
        assert_eq!(store.load(), doc);
    }

    #[test]
    fn test_malformed_storage_falls_back() {
        let (store, _, raw) = pair();
        let valid = serde_json::to_string(&edited()).unwrap();
        let truncated = &valid[..valid.len() / 2];

        for bad in ["", "   ", "{", truncated, "null", "42", r#"{"hero": "title"}"#, r#"{"furniture": {"items": 3}}"#] {
            raw.write(KEY, bad).unwrap();
            assert_eq!(store.load(), SiteContent::default(), "input {:?}", bad);
        }
    }

    #[test]
    fn test_write_failure_is_reported() {
        let store = ContentStore::new(Arc::new(FullStorage), KEY);
        let err = store.save(&edited()).unwrap_err();
        assert!(matches!(err, StoreError::Write(_)));
        assert_eq!(store.load(), SiteContent::default());
    }

    #[test]
    fn test_other_instance_is_notified_and_reloads() {
        let (admin, public, _) = pair();
        let admin_hits = Arc::new(AtomicUsize::new(0));
        let seen = Arc::new(Mutex::new(None::<SiteContent>));

        let _admin_sub = {
            let hits = Arc::clone(&admin_hits);
            admin.subscribe(move || {
                hits.fetch_add(1, Ordering::SeqCst);
            })
        };
        let _public_sub = {
            let seen = Arc::clone(&seen);
            let reader = public.clone();
            public.subscribe(move || {
                *seen.lock().unwrap() = Some(reader.load());
            })
        };

        let doc = edited();
        admin.save(&doc).unwrap();

        assert_eq!(seen.lock().unwrap().as_ref(), Some(&doc));
        assert_eq!(public.load(), doc);
        assert_eq!(admin_hits.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_observer_sees_last_write() {
        let (admin, public, _) = pair();
        let first = edited();
        let second = apply(&first, &EditCommand::AddItem { section: ListSection::Furniture }, 7).unwrap();

        admin.save(&first).unwrap();
        admin.save(&second).unwrap();
        assert_eq!(public.load(), second);
    }
}
