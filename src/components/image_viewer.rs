//! Image Viewer Component
//!
//! Modal gallery over a list of images with wrap-around paging and a
//! loading state per image.

use leptos::prelude::*;
use leptos_carousel::{window_listener, EventListener, Gallery};
use wasm_bindgen::JsCast;

use crate::components::Modal;

#[derive(Clone, Debug, PartialEq)]
pub struct ViewerImage {
    pub src: String,
    pub caption: String,
    /// Optional call to action under the caption
    pub link: Option<(String, String)>,
}

impl ViewerImage {
    pub fn new(src: &str, caption: &str) -> Self {
        Self {
            src: large_image_url(src),
            caption: caption.to_string(),
            link: None,
        }
    }

    pub fn with_link(mut self, href: &str, label: &str) -> Self {
        if !href.trim().is_empty() {
            self.link = Some((href.to_string(), label.to_string()));
        }
        self
    }
}

/// Catalog images are stored at card width; ask the CDN for a larger one
pub fn large_image_url(url: &str) -> String {
    url.replace("w=800", "w=1200")
}

#[component]
pub fn ImageViewer(
    #[prop(into)] images: Signal<Vec<ViewerImage>>,
    start: usize,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let gallery = RwSignal::new(Gallery::open(start, images.with_untracked(Vec::len)));
    let index = Memo::new(move |_| gallery.with(Gallery::index));

    // Content can be reloaded from another tab while the viewer is open
    Effect::new(move |_| {
        let len = images.with(Vec::len);
        gallery.update(|g| g.resize(len));
    });

    // In a right-to-left page the left arrow moves forward
    let keys = StoredValue::new_local(window_listener("keydown", move |ev| {
        let Some(key) = ev.dyn_ref::<web_sys::KeyboardEvent>() else {
            return;
        };
        match key.key().as_str() {
            "ArrowLeft" => gallery.update(Gallery::next),
            "ArrowRight" => gallery.update(Gallery::prev),
            _ => {}
        }
    }));
    on_cleanup(move || {
        keys.try_update_value(|listener: &mut Option<EventListener>| {
            listener.take();
        });
    });

    let figure_class = move || {
        if gallery.with(Gallery::is_loading) {
            "viewer-figure loading"
        } else {
            "viewer-figure"
        }
    };

    view! {
        <Modal class="image-viewer" on_close=on_close>
            <figure class=figure_class>
                <Show when=move || gallery.with(Gallery::is_loading)>
                    <div class="viewer-spinner" aria-hidden="true"></div>
                </Show>
                {move || {
                    let current = index.get();
                    images.with(|list| list.get(current).cloned()).map(|image| view! {
                        <img
                            src=image.src
                            alt=image.caption.clone()
                            on:load=move |_| gallery.update(|g| g.image_loaded(current))
                        />
                        <figcaption>
                            <span class="viewer-caption">{image.caption}</span>
                            {image.link.map(|(href, label)| view! {
                                <a class="viewer-link" href=href target="_blank" rel="noopener noreferrer">{label}</a>
                            })}
                        </figcaption>
                    })
                }}
            </figure>
            <Show when=move || gallery.with(|g| g.len() > 1)>
                <div class="viewer-nav">
                    <button type="button" class="viewer-btn" aria-label="السابق" on:click=move |_| gallery.update(Gallery::prev)>
                        "›"
                    </button>
                    <span class="viewer-counter">
                        {move || format!("{} / {}", index.get() + 1, gallery.with(Gallery::len))}
                    </span>
                    <button type="button" class="viewer-btn" aria-label="التالي" on:click=move |_| gallery.update(Gallery::next)>
                        "‹"
                    </button>
                </div>
            </Show>
        </Modal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_large_image_url() {
        assert_eq!(
            large_image_url("https://images.unsplash.com/photo-1?q=80&w=800&auto=format"),
            "https://images.unsplash.com/photo-1?q=80&w=1200&auto=format"
        );
        assert_eq!(large_image_url("https://picsum.photos/200/100"), "https://picsum.photos/200/100");
    }

    #[test]
    fn test_blank_link_is_dropped() {
        let image = ViewerImage::new("a.jpg", "كرسي").with_link("  ", "اطلب الآن");
        assert_eq!(image.link, None);

        let image = ViewerImage::new("a.jpg", "كرسي").with_link("https://example.com/store/product1", "اطلب الآن");
        assert!(image.link.is_some());
    }
}
