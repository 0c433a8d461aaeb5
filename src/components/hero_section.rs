//! Hero and About Sections

use leptos::prelude::*;

use crate::models::SiteContent;
use crate::scrollspy::scroll_to_section;

#[component]
pub fn HeroSection(content: ReadSignal<SiteContent>) -> impl IntoView {
    let background = move || content.with(|c| format!("background-image: url('{}')", c.hero.background_image));

    view! {
        <section id="hero" class="hero" style=background>
            <div class="hero-overlay"></div>
            <div class="hero-content animate-on-scroll">
                <h1>{move || content.with(|c| c.hero.title.clone())}</h1>
                <p>{move || content.with(|c| c.hero.subtitle.clone())}</p>
                <a
                    href="#furniture"
                    class="cta"
                    on:click=move |ev: web_sys::MouseEvent| {
                        ev.prevent_default();
                        scroll_to_section("furniture");
                    }
                >
                    "اكتشف إبداعاتنا"
                </a>
            </div>
        </section>
    }
}

#[component]
pub fn AboutSection(content: ReadSignal<SiteContent>) -> impl IntoView {
    view! {
        <section id="about" class="section about">
            <div class="container about-grid">
                <div class="about-image animate-on-scroll">
                    <img
                        src=move || content.with(|c| c.about.image_url.clone())
                        alt="عن منسج"
                        loading="lazy"
                    />
                </div>
                <div class="about-text animate-on-scroll">
                    <h2 class="section-title">{move || content.with(|c| c.about.title.clone())}</h2>
                    <p>{move || content.with(|c| c.about.text.clone())}</p>
                </div>
            </div>
        </section>
    }
}
