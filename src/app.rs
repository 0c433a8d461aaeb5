//! Mansaj Site App
//!
//! Root component. Picks the public site or the admin page once per page
//! load from the location's pathname.

use leptos::prelude::*;

use crate::components::{AdminPage, PublicSite};
use crate::config::SiteConfig;
use crate::context::AppContext;

fn current_pathname() -> String {
    web_sys::window()
        .and_then(|win| win.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

#[component]
pub fn App(config: SiteConfig) -> impl IntoView {
    let pathname = current_pathname();
    let is_admin = config.is_admin_path(&pathname);
    log::debug!("routing {} to the {} page", pathname, if is_admin { "admin" } else { "public" });

    provide_context(AppContext::browser(config));

    if is_admin {
        view! { <AdminPage /> }.into_any()
    } else {
        view! { <PublicSite /> }.into_any()
    }
}
