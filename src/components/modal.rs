//! Modal Component
//!
//! Full-screen dialog over the page. While it is mounted the page behind it
//! cannot scroll; Escape, the close button and a click on the backdrop all
//! close it.

use leptos::prelude::*;
use leptos_carousel::{window_listener, EventListener};
use wasm_bindgen::JsCast;

use crate::scroll_lock::{lock_body_scroll, BodyStyle, ScrollLock};

/// Registrations that live exactly as long as the open modal
struct ModalGuards {
    _scroll: Option<ScrollLock<BodyStyle>>,
    _escape: Option<EventListener>,
}

#[component]
pub fn Modal(
    #[prop(into)] on_close: Callback<()>,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    let guards = StoredValue::new_local(Some(ModalGuards {
        _scroll: lock_body_scroll(),
        _escape: window_listener("keydown", move |ev| {
            if ev.dyn_ref::<web_sys::KeyboardEvent>().is_some_and(|key| key.key() == "Escape") {
                on_close.run(());
            }
        }),
    }));
    on_cleanup(move || {
        guards.try_update_value(|current| {
            current.take();
        });
    });

    let on_backdrop = move |ev: web_sys::MouseEvent| {
        if ev.target() == ev.current_target() {
            on_close.run(());
        }
    };

    view! {
        <div class="modal-backdrop" role="dialog" aria-modal="true" on:click=on_backdrop>
            <div class=format!("modal-panel {}", class)>
                <button type="button" class="modal-close" aria-label="إغلاق" on:click=move |_| on_close.run(())>
                    "✕"
                </button>
                {children()}
            </div>
        </div>
    }
}
