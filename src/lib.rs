#![cfg(target_arch = "wasm32")]
use crate::config::SiteConfig;
use crate::model::CancelToken;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod audio;
mod config;
mod constants;
mod contact;
mod dom;
mod effects;
mod events;
mod model;
mod morph;
mod reveal;
mod timer;

// Optional `<script id="site-config" type="application/json">` overrides
fn read_site_config(document: &web::Document) -> SiteConfig {
    let Some(raw) = document
        .get_element_by_id(constants::SITE_CONFIG_ID)
        .and_then(|el| el.text_content())
    else {
        return SiteConfig::default();
    };
    match SiteConfig::from_json(&raw) {
        Ok(cfg) => {
            log::info!("[config] loaded page overrides");
            cfg
        }
        Err(e) => {
            log::warn!("[config] {}; using defaults", e);
            SiteConfig::default()
        }
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let config = read_site_config(&document);
    let root = CancelToken::new();
    timer::cancel_on_pagehide(&window, root.clone());

    // Sound is armed by the first click; everything else is independent.
    let sfx = Rc::new(audio::Sfx::new(config.sound_enabled));
    audio::arm_on_first_click(&document, sfx.clone());

    events::nav::wire(&window, &document);
    reveal::wire(&window, &document, root.child());
    morph::start_rotator(&document, &config.roles, root.child());
    morph::start_name_colors(&document, &config.name_palette, root.child());
    events::pointer::wire_profile_hover(&document);

    {
        let doc = document.clone();
        let sfx = sfx.clone();
        let colors = config.particle_colors.clone();
        let token = root.child();
        dom::on_load(&window, move || {
            effects::spawn_particles(&doc, &colors, &token);
            events::pointer::wire_sparkle_trail(&doc);
            events::pointer::wire_burst_links(&doc, &sfx);
        });
    }

    if let Err(e) = contact::wire(&document, &config.emailjs, sfx) {
        log::warn!("[contact] disabled: {:?}", e);
    }

    log::info!("portfolio-web ready");
    Ok(())
}
