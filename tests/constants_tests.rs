// Host-side tests for page hooks and their relationships.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
fn ids_are_bare_and_selectors_are_non_empty() {
    for id in [
        NAVBAR_ID,
        NAV_TOGGLE_ID,
        NAV_MENU_ID,
        DYNAMIC_NAME_ID,
        PARTICLES_ID,
        SPARKLE_CONTAINER_ID,
        BURST_CONTAINER_ID,
        CONTACT_FORM_ID,
        FIELD_NAME_ID,
        FIELD_EMAIL_ID,
        FIELD_SUBJECT_ID,
        FIELD_MESSAGE_ID,
        SITE_CONFIG_ID,
    ] {
        assert!(!id.is_empty());
        assert!(!id.starts_with('#'), "{id} should be passed to getElementById as-is");
        assert!(!id.contains(' '));
    }
    for sel in [
        NAV_LINK_SELECTOR,
        SECTION_SELECTOR,
        ANCHOR_SELECTOR,
        CLICK_SOUND_SELECTOR,
        HOVER_SOUND_SELECTOR,
        REVEAL_SELECTOR,
        STAGGER_REVEAL_SELECTOR,
        MORPH_TEXT_SELECTOR,
        DYNAMIC_LETTER_SELECTOR,
        EXTERNAL_LINK_SELECTOR,
        BUTTON_SELECTOR,
        PROFILE_IMAGE_SELECTOR,
        SUBMIT_BUTTON_SELECTOR,
    ] {
        assert!(!sel.trim().is_empty());
    }
}

#[test]
fn reveal_css_covers_every_reveal_target() {
    for class in REVEAL_SELECTOR.split(',').map(str::trim) {
        assert!(
            REVEAL_CSS.contains(&format!("{class}.active")),
            "{class} has no active rule"
        );
    }
    assert!(REVEAL_CLASSES.contains(&"active"));
}

#[test]
fn active_class_is_shared_by_nav_and_reveal() {
    assert_eq!(ACTIVE_CLASS, "active");
    assert!(REVEAL_CLASSES.contains(&ACTIVE_CLASS));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn name_color_period_is_one_second() {
    assert_eq!(NAME_COLOR_PERIOD_MS, 1000);
}
