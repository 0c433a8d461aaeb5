//! In-Memory Backend
//!
//! A hub of values shared by any number of connected instances.
//! Stands in for Web Storage when the browser refuses it, and lets tests
//! run several "tabs" side by side.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use super::{ChangeCallback, StorageBackend, StoreError, Subscription};

#[derive(Default)]
struct Hub {
    values: HashMap<String, String>,
    subscribers: Vec<Subscriber>,
    next_token: u64,
    next_instance: u64,
}

struct Subscriber {
    token: u64,
    instance: u64,
    key: String,
    callback: ChangeCallback,
}

/// One instance's handle on a shared hub. Clones are the same instance;
/// use [`MemoryBackend::connect`] for another one.
#[derive(Clone)]
pub struct MemoryBackend {
    hub: Arc<Mutex<Hub>>,
    instance: u64,
}

impl Default for MemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBackend {
    pub fn new() -> Self {
        let hub = Hub {
            next_instance: 1,
            ..Hub::default()
        };
        Self {
            hub: Arc::new(Mutex::new(hub)),
            instance: 0,
        }
    }

    /// A new instance on the same hub, like another tab of the same origin
    pub fn connect(&self) -> Self {
        let mut hub = self.lock();
        let instance = hub.next_instance;
        hub.next_instance += 1;
        Self {
            hub: Arc::clone(&self.hub),
            instance,
        }
    }

    fn lock(&self) -> MutexGuard<'_, Hub> {
        self.hub.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn notify_others(&self, hub: MutexGuard<'_, Hub>, key: &str) {
        let callbacks: Vec<ChangeCallback> = hub
            .subscribers
            .iter()
            .filter(|sub| sub.instance != self.instance && sub.key == key)
            .map(|sub| Arc::clone(&sub.callback))
            .collect();
        // Callbacks usually read the store again
        drop(hub);
        for callback in callbacks {
            callback();
        }
    }
}

impl StorageBackend for MemoryBackend {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.lock().values.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut hub = self.lock();
        hub.values.insert(key.to_string(), value.to_string());
        self.notify_others(hub, key);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut hub = self.lock();
        if hub.values.remove(key).is_some() {
            self.notify_others(hub, key);
        }
        Ok(())
    }

    fn subscribe(&self, key: &str, on_change: ChangeCallback) -> Subscription {
        let token = {
            let mut hub = self.lock();
            let token = hub.next_token;
            hub.next_token += 1;
            hub.subscribers.push(Subscriber {
                token,
                instance: self.instance,
                key: key.to_string(),
                callback: on_change,
            });
            token
        };

        let hub = Arc::downgrade(&self.hub);
        Subscription::new(move || {
            if let Some(hub) = hub.upgrade() {
                let mut hub = hub.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
                hub.subscribers.retain(|sub| sub.token != token);
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counter() -> (Arc<AtomicUsize>, ChangeCallback) {
        let count = Arc::new(AtomicUsize::new(0));
        let hits = Arc::clone(&count);
        (count, Arc::new(move || {
            hits.fetch_add(1, Ordering::SeqCst);
        }))
    }

    #[test]
    fn test_values_are_shared_between_instances() {
        let tab_a = MemoryBackend::new();
        let tab_b = tab_a.connect();
        tab_a.write("k", "v").unwrap();
        assert_eq!(tab_b.read("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn test_writer_is_not_notified() {
        let tab_a = MemoryBackend::new();
        let tab_b = tab_a.connect();
        let (a_hits, a_cb) = counter();
        let (b_hits, b_cb) = counter();
        let _a = tab_a.subscribe("k", a_cb);
        let _b = tab_b.subscribe("k", b_cb);

        tab_a.write("k", "1").unwrap();
        assert_eq!(a_hits.load(Ordering::SeqCst), 0);
        assert_eq!(b_hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_other_keys_are_ignored() {
        let tab_a = MemoryBackend::new();
        let tab_b = tab_a.connect();
        let (hits, cb) = counter();
        let _sub = tab_b.subscribe("watched", cb);

        tab_a.write("other", "x").unwrap();
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_dropped_subscription_stops_notifications() {
        let tab_a = MemoryBackend::new();
        let tab_b = tab_a.connect();
        let (hits, cb) = counter();
        let sub = tab_b.subscribe("k", cb);

        tab_a.write("k", "1").unwrap();
        drop(sub);
        tab_a.write("k", "2").unwrap();
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_remove_notifies_only_when_present() {
        let tab_a = MemoryBackend::new();
        let tab_b = tab_a.connect();
        let (hits, cb) = counter();
        let _sub = tab_b.subscribe("k", cb);

        tab_a.remove("k").unwrap();
        assert_eq!(hits.load(Ordering::SeqCst), 0);

        tab_a.write("k", "1").unwrap();
        tab_a.remove("k").unwrap();
        assert_eq!(hits.load(Ordering::SeqCst), 2);
        assert_eq!(tab_b.read("k").unwrap(), None);
    }
}
