//! Catalog Sections
//!
//! The furniture and store carousels. Clicking a card opens the image
//! viewer on that item.

use leptos::prelude::*;

use crate::components::{CarouselRow, ImageViewer, ViewerImage};
use crate::models::SiteContent;

#[component]
pub fn FurnitureSection(content: ReadSignal<SiteContent>) -> impl IntoView {
    let (viewing, set_viewing) = signal(None::<usize>);
    let images = Memo::new(move |_| {
        content.with(|c| {
            c.furniture
                .items
                .iter()
                .map(|item| ViewerImage::new(&item.image_url, &item.name))
                .collect::<Vec<_>>()
        })
    });

    let cards = move || {
        content.with(|c| {
            c.furniture
                .items
                .iter()
                .enumerate()
                .map(|(index, item)| {
                    view! {
                        <button
                            type="button"
                            class="furniture-card"
                            aria-label=format!("عرض {}", item.name)
                            on:click=move |_| set_viewing.set(Some(index))
                        >
                            <img src=item.image_url.clone() alt=item.name.clone() loading="lazy" />
                            <div class="card-shade"></div>
                            <h3 class="card-title">{item.name.clone()}</h3>
                        </button>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <section id="furniture" class="section furniture">
            <div class="container">
                <h2 class="section-title animate-on-scroll">{move || content.with(|c| c.furniture.title.clone())}</h2>
                <CarouselRow class="furniture-carousel animate-on-scroll">{cards}</CarouselRow>
            </div>
            <Show when=move || viewing.get().is_some()>
                <ImageViewer
                    images=images
                    start=viewing.get_untracked().unwrap_or_default()
                    on_close=move || set_viewing.set(None)
                />
            </Show>
        </section>
    }
}

#[component]
pub fn StoreSection(content: ReadSignal<SiteContent>) -> impl IntoView {
    let (viewing, set_viewing) = signal(None::<usize>);
    let images = Memo::new(move |_| {
        content.with(|c| {
            c.store
                .items
                .iter()
                .map(|product| {
                    ViewerImage::new(&product.image_url, &product.name).with_link(&product.product_url, "اطلب الآن")
                })
                .collect::<Vec<_>>()
        })
    });

    let cards = move || {
        content.with(|c| {
            c.store
                .items
                .iter()
                .enumerate()
                .map(|(index, product)| {
                    view! {
                        <article class="product-card">
                            <button
                                type="button"
                                class="product-image"
                                aria-label=format!("عرض {}", product.name)
                                on:click=move |_| set_viewing.set(Some(index))
                            >
                                <img src=product.image_url.clone() alt=product.name.clone() loading="lazy" />
                            </button>
                            <div class="product-body">
                                <h3>{product.name.clone()}</h3>
                                <p class="product-price">{product.price.clone()}</p>
                                <a
                                    class="product-link"
                                    href=product.product_url.clone()
                                    target="_blank"
                                    rel="noopener noreferrer"
                                >
                                    "اطلب الآن"
                                </a>
                            </div>
                        </article>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <section id="store" class="section store">
            <div class="container">
                <div class="section-heading animate-on-scroll">
                    <h2 class="section-title">{move || content.with(|c| c.store.title.clone())}</h2>
                    <p class="section-subtitle">{move || content.with(|c| c.store.subtitle.clone())}</p>
                </div>
                <CarouselRow class="store-carousel animate-on-scroll">{cards}</CarouselRow>
            </div>
            <Show when=move || viewing.get().is_some()>
                <ImageViewer
                    images=images
                    start=viewing.get_untracked().unwrap_or_default()
                    on_close=move || set_viewing.set(None)
                />
            </Show>
        </section>
    }
}
