//! Site Header Component
//!
//! Fixed header with section navigation, scroll-spy highlighting and the
//! reading progress bar.

use leptos::prelude::*;
use leptos_carousel::EventListener;

use crate::scrollspy::{read_page_scroll, scroll_to_section, PageScroll};

/// (section id, label)
pub const NAV_LINKS: &[(&str, &str)] = &[
    ("about", "عن الشركة"),
    ("furniture", "منتجاتنا"),
    ("clients", "شركاؤنا"),
    ("contact", "تواصل معنا"),
];

/// Scroll and resize listeners keeping `PageScroll` current
struct ScrollWatch {
    _scroll: Option<EventListener>,
    _resize: Option<EventListener>,
}

fn watch_page_scroll(page: ReadSignal<PageScroll>, set_page: WriteSignal<PageScroll>) -> Option<ScrollWatch> {
    let window = web_sys::window()?;
    let refresh = move || {
        if let Some(next) = read_page_scroll() {
            if page.get_untracked() != next {
                set_page.set(next);
            }
        }
    };
    refresh();

    Some(ScrollWatch {
        _scroll: EventListener::passive(&window, "scroll", move |_| refresh()),
        _resize: EventListener::new(&window, "resize", move |_| refresh()),
    })
}

#[component]
pub fn SiteHeader() -> impl IntoView {
    let (page, set_page) = signal(PageScroll::default());
    let (menu_open, set_menu_open) = signal(false);

    let watch = StoredValue::new_local(None::<ScrollWatch>);
    Effect::new(move |_| {
        watch.set_value(watch_page_scroll(page, set_page));
    });
    on_cleanup(move || {
        watch.try_update_value(|current| {
            current.take();
        });
    });

    let go_to = move |id: &'static str| {
        move |ev: web_sys::MouseEvent| {
            ev.prevent_default();
            set_menu_open.set(false);
            scroll_to_section(id);
        }
    };

    let header_class = move || {
        if page.with(|p| p.scrolled) {
            "site-header scrolled"
        } else {
            "site-header"
        }
    };

    view! {
        <header class=header_class>
            <div class="progress-bar" style=move || format!("width: {:.2}%", page.with(|p| p.progress))></div>
            <nav class="container nav">
                <a href="#hero" class="brand" on:click=go_to("hero")>"منسج"</a>
                <ul class=move || if menu_open.get() { "nav-links open" } else { "nav-links" }>
                    {NAV_LINKS.iter().map(|(id, label)| {
                        let id = *id;
                        let link_class = move || {
                            if page.with(|p| p.active_section == id) { "nav-link active" } else { "nav-link" }
                        };
                        view! {
                            <li>
                                <a href=format!("#{}", id) class=link_class on:click=go_to(id)>{*label}</a>
                            </li>
                        }
                    }).collect_view()}
                </ul>
                <button
                    type="button"
                    class="menu-toggle"
                    aria-label="القائمة"
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    "☰"
                </button>
            </nav>
        </header>
    }
}
