use crate::constants::{
    REVEAL_CLASSES, REVEAL_CSS, REVEAL_SELECTOR, STAGGER_REVEAL_SELECTOR, STAGGER_TRANSITION,
};
use crate::dom;
use crate::model::{stagger_delay, CancelToken, RevealTracker};
use crate::timer;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Base "hidden until revealed" styles for the tracked cards.
pub fn inject_styles(document: &web::Document) -> anyhow::Result<()> {
    let head = document
        .head()
        .ok_or_else(|| anyhow::anyhow!("no <head>"))?;
    let style = document
        .create_element("style")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    style.set_text_content(Some(REVEAL_CSS));
    head.append_child(&style)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(())
}

struct Tracked<E> {
    elements: Vec<E>,
    tracker: RevealTracker,
}

impl<E> Tracked<E> {
    fn new(elements: Vec<E>) -> Self {
        let tracker = RevealTracker::new(elements.len());
        Self { elements, tracker }
    }
}

struct Revealer {
    window: web::Window,
    classed: Tracked<web::Element>,
    staggered: Tracked<web::HtmlElement>,
    token: CancelToken,
}

impl Revealer {
    fn reveal_classed(&mut self) {
        let vh = dom::viewport_height(&self.window);
        let tops: Vec<f64> = self
            .classed
            .elements
            .iter()
            .map(|el| el.get_bounding_client_rect().top())
            .collect();
        let fresh = self.classed.tracker.scan(tops, vh);
        for &i in &fresh {
            let cl = self.classed.elements[i].class_list();
            for class in REVEAL_CLASSES {
                _ = cl.add_1(class);
            }
        }
        if !fresh.is_empty() {
            log::debug!(
                "[reveal] {}/{} revealed",
                self.classed.tracker.revealed_count(),
                self.classed.tracker.len()
            );
        }
    }

    fn reveal_staggered(&mut self) {
        let vh = dom::viewport_height(&self.window);
        let tops: Vec<f64> = self
            .staggered
            .elements
            .iter()
            .map(|el| el.get_bounding_client_rect().top())
            .collect();
        for i in self.staggered.tracker.scan(tops, vh) {
            let el = self.staggered.elements[i].clone();
            timer::after(&self.token, stagger_delay(i), move || {
                dom::set_style(&el, "transform", "translateY(0) scale(1)");
                dom::set_style(&el, "opacity", "1");
            });
        }
    }
}

/// Class-based reveal runs on scroll and load; the staggered variant runs on
/// scroll, with its transition installed at load.
pub fn wire(window: &web::Window, document: &web::Document, token: CancelToken) {
    if let Err(e) = inject_styles(document) {
        log::warn!("[reveal] style injection failed: {:?}", e);
    }
    let state = Rc::new(RefCell::new(Revealer {
        window: window.clone(),
        classed: Tracked::new(dom::query_all(document, REVEAL_SELECTOR)),
        staggered: Tracked::new(dom::query_all_html(document, STAGGER_REVEAL_SELECTOR)),
        token,
    }));
    if state.borrow().classed.tracker.is_empty() && state.borrow().staggered.tracker.is_empty() {
        return;
    }

    let on_scroll = state.clone();
    dom::on_event(window, "scroll", move |_| {
        let mut r = on_scroll.borrow_mut();
        r.reveal_classed();
        r.reveal_staggered();
    });

    let on_load = state.clone();
    dom::on_load(window, move || {
        let mut r = on_load.borrow_mut();
        for el in &r.staggered.elements {
            dom::set_style(el, "transition", STAGGER_TRANSITION);
        }
        r.reveal_classed();
    });
    log::info!(
        "[reveal] tracking {} + {} elements",
        state.borrow().classed.tracker.len(),
        state.borrow().staggered.tracker.len()
    );
}
