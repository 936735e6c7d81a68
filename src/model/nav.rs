// Scroll-position projections for the navigation bar.

pub const SCROLLED_THRESHOLD_PX: f64 = 50.0;
// Sections count as current slightly before their top reaches the viewport.
pub const SECTION_OFFSET_PX: f64 = 100.0;

#[inline]
pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_THRESHOLD_PX
}

#[derive(Clone, Debug, PartialEq)]
pub struct SectionBox {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

/// Id of the section containing `scroll_y`; later sections win on overlap.
pub fn active_section(scroll_y: f64, sections: &[SectionBox]) -> Option<&str> {
    let mut current = None;
    for s in sections {
        if s.id.is_empty() {
            continue;
        }
        let top = s.top - SECTION_OFFSET_PX;
        if scroll_y >= top && scroll_y < top + s.height {
            current = Some(s.id.as_str());
        }
    }
    current
}

#[inline]
pub fn link_is_active(href: &str, current: Option<&str>) -> bool {
    match (href.strip_prefix('#'), current) {
        (Some(target), Some(id)) => target == id,
        _ => false,
    }
}

/// Selector for an in-page anchor href; bare `#` has no target.
#[inline]
pub fn anchor_target(href: &str) -> Option<&str> {
    match href.strip_prefix('#') {
        Some(rest) if !rest.is_empty() => Some(href),
        _ => None,
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Page scrolling is locked while the menu covers it.
    pub fn body_overflow(&self) -> &'static str {
        if self.open {
            "hidden"
        } else {
            ""
        }
    }
}
