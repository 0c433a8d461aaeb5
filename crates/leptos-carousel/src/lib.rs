//! Leptos Carousel Utilities
//!
//! Paged, snap-aligned horizontal rows for Leptos.
//! Geometry is read from the live container and turned into prev/next
//! affordances by the pure functions in [`geometry`].

pub mod dom;
pub mod gallery;
pub mod geometry;

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

pub use dom::{window_listener, EventListener, MutationWatch};
pub use gallery::Gallery;
pub use geometry::{
    affordances, page_step, scroll_delta, Affordances, ConventionTracker, NavDirection, RtlConvention,
    ScrollMetrics, TextDirection, SCROLL_END_TOLERANCE_PX,
};

/// Delay before the first boundary check, geometry read before paint is unreliable
pub const SETTLE_DELAY_MS: u32 = 100;

/// Carousel state signals
#[derive(Clone, Copy)]
pub struct CarouselSignals {
    pub affordances_read: ReadSignal<Affordances>,
    pub affordances_write: WriteSignal<Affordances>,
}

impl CarouselSignals {
    pub fn can_prev(&self) -> bool {
        self.affordances_read.get().can_scroll_prev
    }

    pub fn can_next(&self) -> bool {
        self.affordances_read.get().can_scroll_next
    }
}

/// Both buttons stay disabled until the first check measures the row
pub fn create_carousel_signals() -> CarouselSignals {
    let (affordances_read, affordances_write) = signal(Affordances::default());
    CarouselSignals {
        affordances_read,
        affordances_write,
    }
}

/// Read the container's current geometry
pub fn read_metrics(el: &web_sys::HtmlElement) -> ScrollMetrics {
    let direction = web_sys::window()
        .and_then(|win| win.get_computed_style(el).ok().flatten())
        .and_then(|style| style.get_property_value("direction").ok())
        .map(|value| TextDirection::from_css(&value))
        .unwrap_or_default();

    ScrollMetrics {
        scroll_left: el.scroll_left() as f64,
        scroll_width: el.scroll_width() as f64,
        client_width: el.client_width() as f64,
        direction,
        item_count: el.child_element_count() as usize,
        rtl_convention: RtlConvention::Unknown,
    }
}

fn update_affordances(el: &web_sys::HtmlElement, signals: CarouselSignals, tracker: &Cell<ConventionTracker>) {
    let mut metrics = read_metrics(el);
    let mut known = tracker.get();
    known.observe(&mut metrics);
    tracker.set(known);

    let next = affordances(&metrics);
    if signals.affordances_read.get_untracked() != next {
        signals.affordances_write.set(next);
    }
}

/// Every registration that keeps a carousel's affordances current.
/// Dropping it removes the listeners, disconnects the observer and
/// cancels a pending settle check.
pub struct CarouselBinding {
    _settle: Timeout,
    _scroll: Option<EventListener>,
    _resize: Option<EventListener>,
    _children: Option<MutationWatch>,
}

/// Recompute on settle, scroll, resize and child-list changes
pub fn bind_carousel(el: &web_sys::HtmlElement, signals: CarouselSignals, settle_delay_ms: u32) -> CarouselBinding {
    let tracker = Rc::new(Cell::new(ConventionTracker::default()));
    let check = {
        let el = el.clone();
        move || update_affordances(&el, signals, &tracker)
    };

    let settle = {
        let check = check.clone();
        Timeout::new(settle_delay_ms, move || check())
    };
    let scroll = {
        let check = check.clone();
        EventListener::passive(el, "scroll", move |_| check())
    };
    let resize = {
        let check = check.clone();
        window_listener("resize", move |_| check())
    };
    let children = MutationWatch::children(el, check);

    CarouselBinding {
        _settle: settle,
        _scroll: scroll,
        _resize: resize,
        _children: children,
    }
}

/// Smoothly scroll one page. No-op with fewer than two items.
pub fn page(el: &web_sys::HtmlElement, nav: NavDirection) {
    let children = el.children();
    let offset = |index: u32| {
        children
            .item(index)
            .and_then(|child| child.dyn_into::<web_sys::HtmlElement>().ok())
            .map(|child| child.offset_left() as f64)
    };

    let metrics = read_metrics(el);
    let Some(step) = page_step(metrics.item_count, offset(0), offset(1), metrics.client_width) else {
        return;
    };

    let options = web_sys::ScrollToOptions::new();
    options.set_left(scroll_delta(nav, step, metrics.direction));
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    el.scroll_by_with_scroll_to_options(&options);
}

/// Wire a carousel to its scroll container.
///
/// The binding is rebuilt whenever the container is (re)mounted and
/// released with the owning component.
pub fn use_carousel(scroller: NodeRef<leptos::html::Div>) -> CarouselSignals {
    use_carousel_with_delay(scroller, SETTLE_DELAY_MS)
}

pub fn use_carousel_with_delay(scroller: NodeRef<leptos::html::Div>, settle_delay_ms: u32) -> CarouselSignals {
    let signals = create_carousel_signals();
    let binding = StoredValue::new_local(None::<CarouselBinding>);

    Effect::new(move |_| {
        if let Some(el) = scroller.get() {
            binding.set_value(Some(bind_carousel(&el, signals, settle_delay_ms)));
        }
    });

    on_cleanup(move || {
        binding.try_update_value(|current| {
            current.take();
        });
    });

    signals
}

/// Create click handler for a prev/next button
pub fn make_on_nav(scroller: NodeRef<leptos::html::Div>, nav: NavDirection) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if let Some(el) = scroller.get_untracked() {
            page(&el, nav);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signals_start_with_both_buttons_disabled() {
        let owner = Owner::new();
        owner.with(|| {
            let signals = create_carousel_signals();
            assert_eq!(signals.affordances_read.get_untracked(), Affordances::default());
            assert!(!signals.affordances_read.get_untracked().can_scroll_next);
        });
    }
}
