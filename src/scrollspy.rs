//! Scroll Spy
//!
//! Header state derived from the window's vertical scroll: whether the
//! header is compacted, which section is being read, and the reading
//! progress bar.

use wasm_bindgen::JsCast;

/// Scroll distance after which the header switches to its compact style
pub const SCROLLED_THRESHOLD_PX: f64 = 50.0;

/// Height of the fixed header; sections count as reached this early
pub const HEADER_OFFSET_PX: f64 = 80.0;

pub const FIRST_SECTION: &str = "hero";

#[derive(Clone, Debug, PartialEq)]
pub struct PageScroll {
    pub scrolled: bool,
    pub active_section: String,
    /// 0..=100
    pub progress: f64,
}

impl Default for PageScroll {
    fn default() -> Self {
        Self {
            scrolled: false,
            active_section: FIRST_SECTION.to_string(),
            progress: 0.0,
        }
    }
}

/// The last section (in document order) whose top has passed under the header
pub fn active_section<'a>(scroll_y: f64, sections: &[(&'a str, f64)]) -> &'a str {
    sections
        .iter()
        .filter(|(_, top)| scroll_y >= top - HEADER_OFFSET_PX)
        .last()
        .map(|(id, _)| *id)
        .unwrap_or(FIRST_SECTION)
}

/// Percentage of the scrollable height already scrolled
pub fn scroll_progress(scroll_y: f64, scroll_height: f64, client_height: f64) -> f64 {
    let total = scroll_height - client_height;
    if total > 0.0 {
        (scroll_y / total * 100.0).clamp(0.0, 100.0)
    } else {
        0.0
    }
}

pub fn page_scroll(scroll_y: f64, sections: &[(&str, f64)], scroll_height: f64, client_height: f64) -> PageScroll {
    PageScroll {
        scrolled: scroll_y > SCROLLED_THRESHOLD_PX,
        active_section: active_section(scroll_y, sections).to_string(),
        progress: scroll_progress(scroll_y, scroll_height, client_height),
    }
}

/// Measure the live page
pub fn read_page_scroll() -> Option<PageScroll> {
    let window = web_sys::window()?;
    let document = window.document()?;
    let root = document.document_element()?;
    let scroll_y = window.scroll_y().unwrap_or(0.0);

    let nodes = document.query_selector_all("section[id]").ok()?;
    let mut sections = Vec::with_capacity(nodes.length() as usize);
    for index in 0..nodes.length() {
        if let Some(section) = nodes.item(index).and_then(|node| node.dyn_into::<web_sys::HtmlElement>().ok()) {
            sections.push((section.id(), section.offset_top() as f64));
        }
    }
    let sections: Vec<(&str, f64)> = sections.iter().map(|(id, top)| (id.as_str(), *top)).collect();

    Some(page_scroll(
        scroll_y,
        &sections,
        root.scroll_height() as f64,
        root.client_height() as f64,
    ))
}

/// Smoothly bring the element with `id` to the top of the viewport
pub fn scroll_to_section(id: &str) {
    let Some(target) = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.get_element_by_id(id))
    else {
        return;
    };
    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    options.set_block(web_sys::ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}
