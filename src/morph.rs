use crate::constants::{
    DYNAMIC_LETTER_SELECTOR, DYNAMIC_NAME_ID, MORPH_TEXT_SELECTOR, NAME_COLOR_PERIOD_MS,
};
use crate::dom;
use crate::model::{
    glow_shadow, letters_markup, split_letters, CancelToken, ColorCycler, Phase, Typewriter,
    TypewriterTiming, RECOLOR_PROBABILITY,
};
use crate::timer;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Typewriter rotation of `roles` inside `.morph-text`.
pub fn start_rotator(document: &web::Document, roles: &[String], token: CancelToken) {
    let Some(target) = dom::query_one(document, MORPH_TEXT_SELECTOR) else {
        return;
    };
    let Some(mut rotator) = Typewriter::new(roles, TypewriterTiming::default()) else {
        log::warn!("[morph] no roles configured; rotator disabled");
        return;
    };
    let first = rotator.timing().start_delay;
    timer::run_loop(token, first, move || {
        let frame = rotator.tick();
        target.set_text_content(Some(&frame.text));
        if frame.phase == Phase::PausedAtFull {
            log::debug!("[morph] showing role {}", rotator.phrase_index());
        }
        Some(frame.delay)
    });
    log::info!("[morph] rotator started with {} roles", roles.len());
}

/// Split `#dynamic-name` into letter spans and recolor a random subset every period.
pub fn start_name_colors(document: &web::Document, palette: &[String], token: CancelToken) {
    let Some(name) = document.get_element_by_id(DYNAMIC_NAME_ID) else {
        return;
    };
    let text = name.text_content().unwrap_or_default();
    name.set_inner_html(&letters_markup(&split_letters(&text)));

    let letters: Vec<web::HtmlElement> = name
        .query_selector_all(DYNAMIC_LETTER_SELECTOR)
        .map(dom::collect_elements)
        .unwrap_or_default()
        .into_iter()
        .filter_map(|el| el.dyn_into::<web::HtmlElement>().ok())
        .collect();
    let Some(cycler) = ColorCycler::new(palette.to_vec(), letters.len(), RECOLOR_PROBABILITY)
    else {
        log::warn!("[morph] empty name palette; color cycling disabled");
        return;
    };

    let mut rng = StdRng::from_entropy();
    let mut recolor = move || {
        for change in cycler.step(&mut rng) {
            if let Some(letter) = letters.get(change.letter) {
                dom::set_style(letter, "color", change.color);
                dom::set_style(letter, "text-shadow", &glow_shadow(change.color));
            }
        }
    };
    recolor();
    timer::every(token, Duration::from_millis(NAME_COLOR_PERIOD_MS), recolor);
    let count = text.chars().filter(|c| *c != ' ').count();
    log::info!("[morph] name color cycling on {} letters", count);
}
