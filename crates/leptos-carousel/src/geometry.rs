//! Carousel Geometry
//!
//! Pure boundary detection and paging math for a horizontally scrolling row.
//! Works for both RTL `scrollLeft` conventions: positive offsets that run
//! from `maxScroll` down to `0`, and non-positive offsets that run from `0`
//! down to `-maxScroll`.

/// Distance in pixels within which an edge counts as reached
pub const SCROLL_END_TOLERANCE_PX: f64 = 5.0;

/// Share of the visible width used as a page when items cannot be measured
pub const FALLBACK_PAGE_FRACTION: f64 = 0.8;

/// Resolved text direction of the scroll container
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextDirection {
    #[default]
    Ltr,
    Rtl,
}

impl TextDirection {
    /// Parse a computed `direction` style value
    pub fn from_css(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("rtl") {
            TextDirection::Rtl
        } else {
            TextDirection::Ltr
        }
    }
}

/// How the engine reports `scrollLeft` for an RTL container
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RtlConvention {
    /// Not observed yet; non-positive offsets are read as `0 → -maxScroll`
    #[default]
    Unknown,
    /// Offsets seen above zero: they run from `maxScroll` down to `0`
    PositiveDescending,
}

/// Navigation request
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavDirection {
    Prev,
    Next,
}

/// Live geometry of the scroll container
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_left: f64,
    pub scroll_width: f64,
    pub client_width: f64,
    pub direction: TextDirection,
    pub item_count: usize,
    pub rtl_convention: RtlConvention,
}

impl ScrollMetrics {
    pub fn max_scroll(&self) -> f64 {
        self.scroll_width - self.client_width
    }
}

/// Navigation affordances derived from geometry
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Affordances {
    pub can_scroll_prev: bool,
    pub can_scroll_next: bool,
}

/// Compute which navigation buttons are enabled.
///
/// "Prev" is disabled at the reading start and "next" at the reading end,
/// whatever physical side that is under RTL.
pub fn affordances(metrics: &ScrollMetrics) -> Affordances {
    let tol = SCROLL_END_TOLERANCE_PX;
    let max_scroll = metrics.max_scroll();
    let left = metrics.scroll_left;

    let (at_start, at_end) = if metrics.item_count < 2 || max_scroll < tol {
        (true, true)
    } else if metrics.direction == TextDirection::Rtl {
        if left <= 0.0 && metrics.rtl_convention == RtlConvention::Unknown {
            (left.abs() < tol, left.abs() >= max_scroll - tol)
        } else {
            (left >= max_scroll - tol, left < tol)
        }
    } else {
        (left < tol, left >= max_scroll - tol)
    };

    Affordances {
        can_scroll_prev: !at_start,
        can_scroll_next: !at_end,
    }
}

/// Remembers which RTL offset convention a container uses.
///
/// An offset of exactly `0` is the start under one convention and the end
/// under the other. Once a positive offset has been seen the container is
/// known to count down from `maxScroll`, and `0` reads as the end.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConventionTracker {
    convention: RtlConvention,
}

impl ConventionTracker {
    pub fn observe(&mut self, metrics: &mut ScrollMetrics) {
        if metrics.direction == TextDirection::Rtl && metrics.scroll_left > 0.0 {
            self.convention = RtlConvention::PositiveDescending;
        }
        metrics.rtl_convention = self.convention;
    }

    pub fn convention(&self) -> RtlConvention {
        self.convention
    }
}

/// Width of one page: the distance between the first two items' offsets,
/// which covers one card plus the gap. Falls back to a fraction of the
/// visible width when the offsets are not usable yet.
///
/// Returns `None` when there is nothing to page through.
pub fn page_step(
    item_count: usize,
    first_offset: Option<f64>,
    second_offset: Option<f64>,
    client_width: f64,
) -> Option<f64> {
    if item_count < 2 {
        return None;
    }
    let measured = match (first_offset, second_offset) {
        (Some(first), Some(second)) => (second - first).abs(),
        _ => 0.0,
    };
    if measured > 0.0 {
        Some(measured)
    } else if client_width > 0.0 {
        Some(client_width * FALLBACK_PAGE_FRACTION)
    } else {
        None
    }
}

/// Signed `scrollBy` distance for one page.
/// Under RTL "next" moves towards decreasing offsets.
pub fn scroll_delta(nav: NavDirection, step: f64, direction: TextDirection) -> f64 {
    let forward = match direction {
        TextDirection::Ltr => step,
        TextDirection::Rtl => -step,
    };
    match nav {
        NavDirection::Next => forward,
        NavDirection::Prev => -forward,
    }
}
