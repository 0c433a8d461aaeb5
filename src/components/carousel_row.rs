//! Carousel Row Component
//!
//! Horizontally scrolling, snap-aligned row with previous/next buttons.
//! Children must render as direct children of the track: every element
//! there counts as one item.

use leptos::prelude::*;
use leptos_carousel::{make_on_nav, use_carousel_with_delay, NavDirection};

use crate::context::use_app_context;

#[component]
pub fn CarouselRow(#[prop(into)] class: String, children: Children) -> impl IntoView {
    let settle_ms = use_app_context().config.carousel_settle_ms;
    let scroller = NodeRef::<leptos::html::Div>::new();
    let carousel = use_carousel_with_delay(scroller, settle_ms);

    view! {
        <div class=format!("carousel {}", class)>
            <div class="carousel-track" node_ref=scroller>
                {children()}
            </div>
            <button
                type="button"
                class="carousel-btn carousel-prev"
                aria-label="السابق"
                disabled=move || !carousel.can_prev()
                on:click=make_on_nav(scroller, NavDirection::Prev)
            >
                "›"
            </button>
            <button
                type="button"
                class="carousel-btn carousel-next"
                aria-label="التالي"
                disabled=move || !carousel.can_next()
                on:click=make_on_nav(scroller, NavDirection::Next)
            >
                "‹"
            </button>
        </div>
    }
}
