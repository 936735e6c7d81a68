use crate::audio::Sfx;
use crate::constants::{BURST_CONTAINER_ID, PARTICLES_ID};
use crate::model::{
    BurstSpec, CancelToken, Cue, ParticleSpec, SparkleSpec, BURST_CLEANUP_MS, BURST_MARKUP,
    PARTICLE_COUNT, PARTICLE_SPAWN_GAP_MS, SPARKLE_LIFETIME_MS,
};
use crate::timer;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::JsCast;
use web_sys as web;

fn div_with_class(document: &web::Document, class: &str) -> Option<web::Element> {
    let el = document.create_element("div").ok()?;
    el.set_class_name(class);
    Some(el)
}

/// Drip-feed floating particles into `#particles`, one every spawn gap.
pub fn spawn_particles(document: &web::Document, colors: &[String], token: &CancelToken) {
    let Some(container) = document.get_element_by_id(PARTICLES_ID) else {
        return;
    };
    let rng = Rc::new(RefCell::new(StdRng::from_entropy()));
    let colors: Rc<[String]> = colors.into();
    for i in 0..PARTICLE_COUNT {
        let doc = document.clone();
        let container = container.clone();
        let rng = rng.clone();
        let colors = colors.clone();
        let delay = Duration::from_millis(PARTICLE_SPAWN_GAP_MS * i as u64);
        timer::after(token, delay, move || {
            let Some(spec) = ParticleSpec::random(&mut *rng.borrow_mut(), &colors) else {
                return;
            };
            if let Some(p) = div_with_class(&doc, "particle") {
                _ = p.set_attribute("style", &spec.css());
                _ = container.append_child(&p);
            }
        });
    }
    log::info!("[fx] spawning {} particles", PARTICLE_COUNT);
}

pub fn spawn_sparkle(document: &web::Document, container: &web::Element, spec: &SparkleSpec) {
    let Some(sparkle) = div_with_class(document, "sparkle") else {
        return;
    };
    sparkle.set_text_content(Some(spec.glyph));
    _ = sparkle.set_attribute("style", &spec.css());
    if container.append_child(&sparkle).is_ok() {
        timer::set_timeout(Duration::from_millis(SPARKLE_LIFETIME_MS), move || {
            sparkle.remove();
        });
    }
}

/// Full-screen flash plus a burst node at `spec`, with sound and vibration.
pub fn power_burst(document: &web::Document, sfx: &Sfx, spec: BurstSpec) {
    let Some(container) = document.get_element_by_id(BURST_CONTAINER_ID) else {
        return;
    };
    sfx.feedback(Cue::PowerUp);

    let flash = div_with_class(document, "rasengan-fullscreen")
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok());
    if let (Some(flash), Some(body)) = (&flash, document.body()) {
        for (name, value) in spec.css_vars() {
            _ = flash.style().set_property(name, &value);
        }
        _ = body.append_child(flash);
    }

    let burst = div_with_class(document, "rasengan")
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok());
    if let Some(burst) = &burst {
        _ = burst.style().set_property("left", &format!("{}px", spec.x));
        _ = burst.style().set_property("top", &format!("{}px", spec.y));
        burst.set_inner_html(BURST_MARKUP);
        _ = container.append_child(burst);
    }

    timer::set_timeout(Duration::from_millis(BURST_CLEANUP_MS), move || {
        for el in [burst, flash].into_iter().flatten() {
            el.remove();
        }
    });
}
