//! DOM Registration Guards
//!
//! Event listeners and mutation observers that unregister themselves when
//! dropped. Holding one of these in component state ties the registration
//! to the component's lifetime.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Registered DOM event listener, removed on drop
pub struct EventListener {
    target: web_sys::EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(web_sys::Event)>,
}

impl EventListener {
    pub fn new<F>(target: &web_sys::EventTarget, event: &'static str, callback: F) -> Option<Self>
    where
        F: FnMut(web_sys::Event) + 'static,
    {
        Self::register(target, event, callback, false)
    }

    /// Listener that promises not to call `preventDefault`, so scrolling is never blocked
    pub fn passive<F>(target: &web_sys::EventTarget, event: &'static str, callback: F) -> Option<Self>
    where
        F: FnMut(web_sys::Event) + 'static,
    {
        Self::register(target, event, callback, true)
    }

    fn register<F>(target: &web_sys::EventTarget, event: &'static str, callback: F, passive: bool) -> Option<Self>
    where
        F: FnMut(web_sys::Event) + 'static,
    {
        let callback = Closure::<dyn FnMut(web_sys::Event)>::new(callback);
        let options = web_sys::AddEventListenerOptions::new();
        options.set_passive(passive);
        if let Err(err) = target.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            callback.as_ref().unchecked_ref(),
            &options,
        ) {
            log::warn!("failed to listen for {}: {:?}", event, err);
            return None;
        }
        Some(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

/// Listen on `window`, if there is one
pub fn window_listener<F>(event: &'static str, callback: F) -> Option<EventListener>
where
    F: FnMut(web_sys::Event) + 'static,
{
    let window = web_sys::window()?;
    EventListener::new(&window, event, callback)
}

/// Subtree structure watcher, disconnected on drop
pub struct MutationWatch {
    observer: web_sys::MutationObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, web_sys::MutationObserver)>,
}

impl MutationWatch {
    /// Call `on_change` whenever children are added or removed anywhere under `node`
    pub fn children<F>(node: &web_sys::Node, mut on_change: F) -> Option<Self>
    where
        F: FnMut() + 'static,
    {
        let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::MutationObserver)>::new(
            move |_records: js_sys::Array, _observer: web_sys::MutationObserver| on_change(),
        );
        let observer = web_sys::MutationObserver::new(callback.as_ref().unchecked_ref()).ok()?;

        let init = web_sys::MutationObserverInit::new();
        init.set_child_list(true);
        init.set_subtree(true);
        observer.observe_with_options(node, &init).ok()?;

        Some(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for MutationWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
