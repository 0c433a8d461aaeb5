//! Contact Section and Footer

use leptos::prelude::*;
use leptos_carousel::EventListener;
use wasm_bindgen::JsCast;

use crate::models::SiteContent;

pub const MAP_URL: &str = "https://maps.app.goo.gl/GJR8QAKzja6ZHURQ9";

/// Closes the phone menu on a press anywhere outside `card`
fn close_on_outside_press(card: NodeRef<leptos::html::Div>, set_open: WriteSignal<bool>) -> Option<EventListener> {
    let document = web_sys::window()?.document()?;
    EventListener::new(&document, "mousedown", move |ev| {
        let Some(card) = card.get_untracked() else {
            return;
        };
        let target = ev.target().and_then(|target| target.dyn_into::<web_sys::Node>().ok());
        if !card.contains(target.as_ref()) {
            set_open.set(false);
        }
    })
}

#[component]
pub fn ContactSection(content: ReadSignal<SiteContent>) -> impl IntoView {
    let (phone_menu, set_phone_menu) = signal(false);
    let phone_card = NodeRef::<leptos::html::Div>::new();

    let outside = StoredValue::new_local(close_on_outside_press(phone_card, set_phone_menu));
    on_cleanup(move || {
        outside.try_update_value(|listener| {
            listener.take();
        });
    });

    view! {
        <section id="contact" class="section contact">
            <div class="container">
                <h2 class="section-title animate-on-scroll">"تواصل معنا"</h2>
                <div class="contact-grid">
                    <div class="contact-card phone animate-on-scroll" node_ref=phone_card>
                        <div class="contact-card-toggle" on:click=move |_| set_phone_menu.update(|open| *open = !*open)>
                            <span class="contact-icon" aria-hidden="true">"📞"</span>
                            <h3>"الهاتف"</h3>
                            <p dir="ltr">{move || content.with(|c| c.contact.phone.clone())}</p>
                        </div>
                        <Show when=move || phone_menu.get()>
                            <div class="phone-options">
                                <a href=move || content.with(|c| c.contact.tel_href())>"اتصال"</a>
                                <a
                                    href=move || content.with(|c| c.contact.whatsapp_href())
                                    target="_blank"
                                    rel="noopener noreferrer"
                                >
                                    "واتساب"
                                </a>
                            </div>
                        </Show>
                    </div>
                    <div class="contact-card animate-on-scroll">
                        <span class="contact-icon" aria-hidden="true">"✉"</span>
                        <h3>"البريد الإلكتروني"</h3>
                        <a href=move || content.with(|c| c.contact.mailto_href())>
                            {move || content.with(|c| c.contact.email.clone())}
                        </a>
                    </div>
                    <div class="contact-card animate-on-scroll">
                        <span class="contact-icon" aria-hidden="true">"📍"</span>
                        <h3>"العنوان"</h3>
                        <a href=MAP_URL target="_blank" rel="noopener noreferrer">
                            {move || content.with(|c| c.contact.address.clone())}
                        </a>
                    </div>
                </div>
            </div>
        </section>
    }
}

pub fn copyright_line(year: i32) -> String {
    format!("© {} شركة منسج للأثاث. جميع الحقوق محفوظة.", year)
}

#[component]
pub fn SiteFooter() -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year() as i32;
    view! {
        <footer class="site-footer">
            <div class="container">
                <p>{copyright_line(year)}</p>
            </div>
        </footer>
    }
}
