//! Web Storage Backend
//!
//! `localStorage` / `sessionStorage`. The platform `storage` event already
//! fires in every other same-origin document after a write, so writes need
//! no explicit broadcast.

use wasm_bindgen::{JsCast, JsValue};

use super::{ChangeCallback, StorageBackend, StoreError, Subscription};
use leptos_carousel::EventListener;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BrowserStorage {
    /// Persistent, shared by all tabs of the origin
    Local,
    /// Scoped to the current tab session
    Session,
}

impl BrowserStorage {
    fn area(&self) -> Result<web_sys::Storage, StoreError> {
        let window = web_sys::window().ok_or(StoreError::Unavailable)?;
        let area = match self {
            BrowserStorage::Local => window.local_storage(),
            BrowserStorage::Session => window.session_storage(),
        };
        // Access throws when storage is disabled by the user agent
        area.map_err(|_| StoreError::Unavailable)?
            .ok_or(StoreError::Unavailable)
    }

    pub fn is_available(&self) -> bool {
        self.area().is_ok()
    }
}

fn describe(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

impl StorageBackend for BrowserStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.area()?
            .get_item(key)
            .map_err(|err| StoreError::Read(describe(err)))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.area()?
            .set_item(key, value)
            .map_err(|err| StoreError::Write(describe(err)))
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.area()?
            .remove_item(key)
            .map_err(|err| StoreError::Write(describe(err)))
    }

    fn subscribe(&self, key: &str, on_change: ChangeCallback) -> Subscription {
        let Some(window) = web_sys::window() else {
            return Subscription::inert();
        };
        let own_area = self.area().ok().map(JsValue::from);
        let key = key.to_string();

        let listener = EventListener::new(&window, "storage", move |event: web_sys::Event| {
            let Some(event) = event.dyn_ref::<web_sys::StorageEvent>() else {
                return;
            };
            let same_area = match (event.storage_area(), &own_area) {
                (Some(area), Some(own)) => JsValue::from(area) == *own,
                _ => true,
            };
            // No key means the whole area was cleared
            let same_key = event.key().map_or(true, |changed| changed == key);
            if same_area && same_key {
                on_change();
            }
        });

        match listener {
            Some(listener) => Subscription::new(move || drop(listener)),
            None => Subscription::inert(),
        }
    }
}
