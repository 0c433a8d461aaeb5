//! Reveal On Scroll
//!
//! Elements marked `animate-on-scroll` get `is-visible` while they
//! intersect the viewport; the stylesheet animates the transition.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

pub const REVEAL_SELECTOR: &str = ".animate-on-scroll";
pub const VISIBLE_CLASS: &str = "is-visible";

/// Fraction of an element that must be visible before it is revealed
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Intersection observer over the marked descendants of a root, disconnected on drop
pub struct RevealWatch {
    observer: web_sys::IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>,
}

impl RevealWatch {
    pub fn observe(root: &web_sys::Element) -> Option<Self> {
        let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
            |entries: js_sys::Array, _observer: web_sys::IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                    let classes = entry.target().class_list();
                    let result = if entry.is_intersecting() {
                        classes.add_1(VISIBLE_CLASS)
                    } else {
                        classes.remove_1(VISIBLE_CLASS)
                    };
                    if result.is_err() {
                        log::warn!("failed to toggle {:?} on revealed element", VISIBLE_CLASS);
                    }
                }
            },
        );

        let init = web_sys::IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
        let observer =
            web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init).ok()?;

        let targets = root.query_selector_all(REVEAL_SELECTOR).ok()?;
        for index in 0..targets.length() {
            if let Some(target) = targets.item(index).and_then(|node| node.dyn_into::<web_sys::Element>().ok()) {
                observer.observe(&target);
            }
        }
        log::debug!("watching {} elements for reveal", targets.length());

        Some(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for RevealWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
