//! Public Site Component
//!
//! The marketing page. Renders the stored document and reloads it whenever
//! the admin saves from another tab.

use leptos::prelude::*;

use crate::components::{
    AboutSection, ClientsSection, ContactSection, FurnitureSection, HeroSection, SiteFooter, SiteHeader,
    StoreSection,
};
use crate::context::use_app_context;
use crate::reveal::RevealWatch;
use crate::storage::Subscription;

#[component]
pub fn PublicSite() -> impl IntoView {
    let ctx = use_app_context();
    let (content, set_content) = signal(ctx.store.load());

    let subscription = {
        let store = ctx.store.clone();
        ctx.store.subscribe(move || {
            log::info!("content changed in another tab, reloading");
            set_content.set(store.load());
        })
    };
    let subscription = StoredValue::new_local(Some(subscription));
    on_cleanup(move || {
        subscription.try_update_value(|current: &mut Option<Subscription>| {
            current.take();
        });
    });

    // Re-run after every reload so freshly rendered cards are observed too
    let main_ref = NodeRef::<leptos::html::Main>::new();
    let reveal = StoredValue::new_local(None::<RevealWatch>);
    Effect::new(move |_| {
        content.track();
        if let Some(main) = main_ref.get() {
            reveal.set_value(None);
            reveal.set_value(RevealWatch::observe(&main));
        }
    });
    on_cleanup(move || {
        reveal.try_update_value(|current| {
            current.take();
        });
    });

    view! {
        <div class="public-site" dir="rtl">
            <SiteHeader />
            <main node_ref=main_ref>
                <HeroSection content=content />
                <AboutSection content=content />
                <FurnitureSection content=content />
                <StoreSection content=content />
                <ClientsSection content=content />
                <ContactSection content=content />
            </main>
            <SiteFooter />
        </div>
    }
}
