//! Clients Section
//!
//! Logo grid of partner companies; a logo opens the client's details.

use leptos::prelude::*;

use crate::components::Modal;
use crate::models::{Client, SiteContent};

#[component]
pub fn ClientsSection(content: ReadSignal<SiteContent>) -> impl IntoView {
    let (selected, set_selected) = signal(None::<Client>);

    let logos = move || {
        content.with(|c| {
            c.clients
                .items
                .iter()
                .enumerate()
                .map(|(index, client)| {
                    let open = {
                        let client = client.clone();
                        move || set_selected.set(Some(client.clone()))
                    };
                    let on_key = {
                        let open = open.clone();
                        move |ev: web_sys::KeyboardEvent| {
                            if ev.key() == "Enter" || ev.key() == " " {
                                ev.prevent_default();
                                open();
                            }
                        }
                    };
                    view! {
                        <div class="client-logo animate-on-scroll" style=format!("transition-delay: {}ms", index * 100)>
                            <div
                                role="button"
                                tabindex="0"
                                aria-label=format!("عرض تفاصيل {}", client.name)
                                on:click=move |_| open()
                                on:keydown=on_key
                            >
                                <img src=client.logo_url.clone() alt=client.name.clone() loading="lazy" />
                            </div>
                        </div>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <section id="clients" class="section clients">
            <div class="container">
                <div class="section-heading animate-on-scroll">
                    <h2 class="section-title">{move || content.with(|c| c.clients.title.clone())}</h2>
                    <p class="section-subtitle">"موثوق به من قبل كبرى الشركات والمشاريع في المملكة"</p>
                </div>
                <div class="client-grid">{logos}</div>
            </div>
            {move || selected.get().map(|client| view! {
                <ClientDetails client=client on_close=move || set_selected.set(None) />
            })}
        </section>
    }
}

#[component]
fn ClientDetails(client: Client, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let website = client.website().map(str::to_string);
    let description = client.description.clone().filter(|text| !text.trim().is_empty());

    view! {
        <Modal class="client-modal" on_close=on_close>
            <div class="client-details">
                <img class="client-details-logo" src=client.logo_url.clone() alt=client.name.clone() />
                <h3>{client.name.clone()}</h3>
                {description.map(|text| view! { <p class="client-description">{text}</p> })}
                {website.map(|href| view! {
                    <a class="client-website" href=href target="_blank" rel="noopener noreferrer">
                        "زيارة الموقع الإلكتروني"
                    </a>
                })}
            </div>
        </Modal>
    }
}
