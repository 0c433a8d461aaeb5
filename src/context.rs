//! Application Context
//!
//! Services shared by every component, provided via Leptos Context API.

use leptos::prelude::*;

use crate::auth::AdminGate;
use crate::config::SiteConfig;
use crate::content_store::ContentStore;

#[derive(Clone)]
pub struct AppContext {
    pub store: ContentStore,
    pub gate: AdminGate,
    pub config: SiteConfig,
}

impl AppContext {
    pub fn new(store: ContentStore, gate: AdminGate, config: SiteConfig) -> Self {
        Self { store, gate, config }
    }

    /// Services backed by the browser's storage areas
    pub fn browser(config: SiteConfig) -> Self {
        Self::new(ContentStore::browser(&config), AdminGate::browser(&config), config)
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

/// Milliseconds since the epoch, used to seed new item ids
pub fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}
