use crate::audio::Sfx;
use crate::constants::{
    BUTTON_SELECTOR, EXTERNAL_LINK_SELECTOR, PROFILE_HOVER_SCALE, PROFILE_IMAGE_SELECTOR,
    PROFILE_REST_SCALE, PROFILE_TRANSITION, SPARKLE_CONTAINER_ID,
};
use crate::dom;
use crate::effects;
use crate::model::{BurstSpec, SparkleSpec, Throttle, BURST_NAVIGATE_DELAY_MS, SPARKLE_THROTTLE_MS};
use crate::timer;
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
fn burst_at(el: &web::Element) -> BurstSpec {
    let rect = el.get_bounding_client_rect();
    BurstSpec::from_rect(rect.left(), rect.top(), rect.width(), rect.height())
}

pub fn wire_sparkle_trail(document: &web::Document) {
    let Some(container) = document.get_element_by_id(SPARKLE_CONTAINER_ID) else {
        return;
    };
    let mut throttle = Throttle::new(Duration::from_millis(SPARKLE_THROTTLE_MS));
    let mut rng = StdRng::from_entropy();
    let doc = document.clone();
    dom::on_mouse_event(document, "mousemove", move |ev| {
        if !throttle.ready(Instant::now()) {
            return;
        }
        let spec = SparkleSpec::random(&mut rng, ev.client_x() as f64, ev.client_y() as f64);
        effects::spawn_sparkle(&doc, &container, &spec);
    });
    log::info!("[fx] sparkle trail ready");
}

/// External links burst, then open in a new tab once the animation has played.
/// Buttons burst without holding up their own action.
pub fn wire_burst_links(document: &web::Document, sfx: &Rc<Sfx>) {
    let links = dom::query_all(document, EXTERNAL_LINK_SELECTOR);
    for link in &links {
        let doc = document.clone();
        let sfx = sfx.clone();
        let el = link.clone();
        dom::on_event(link, "click", move |ev| {
            ev.prevent_default();
            let href = el.get_attribute("href").unwrap_or_default();
            effects::power_burst(&doc, &sfx, burst_at(&el));
            if href.is_empty() {
                return;
            }
            timer::set_timeout(Duration::from_millis(BURST_NAVIGATE_DELAY_MS), move || {
                if let Some(w) = web::window() {
                    if let Err(e) = w.open_with_url_and_target(&href, "_blank") {
                        log::warn!("[fx] open {} failed: {}", href, dom::js_error_text(&e));
                    }
                }
            });
        });
    }

    let buttons = dom::query_all(document, BUTTON_SELECTOR);
    for btn in &buttons {
        let doc = document.clone();
        let sfx = sfx.clone();
        let el = btn.clone();
        dom::on_event(btn, "click", move |_| {
            effects::power_burst(&doc, &sfx, burst_at(&el));
        });
    }
    log::info!(
        "[fx] burst bound to {} links and {} buttons",
        links.len(),
        buttons.len()
    );
}

pub fn wire_profile_hover(document: &web::Document) {
    let Some(wrapper) = dom::query_one(document, PROFILE_IMAGE_SELECTOR)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    else {
        return;
    };
    let w = wrapper.clone();
    dom::on_event(&wrapper, "mouseenter", move |_| {
        dom::set_style(&w, "transform", PROFILE_HOVER_SCALE);
        dom::set_style(&w, "transition", PROFILE_TRANSITION);
    });
    let w = wrapper.clone();
    dom::on_event(&wrapper, "mouseleave", move |_| {
        dom::set_style(&w, "transform", PROFILE_REST_SCALE);
    });
}
