// Host-side tests for site configuration parsing.

#![allow(dead_code)]
mod config {
    include!("../src/config.rs");
}

use config::*;

#[test]
fn defaults_describe_stock_page() {
    let cfg = SiteConfig::default();
    assert_eq!(cfg.roles.len(), 5);
    assert_eq!(cfg.roles[0], "ECE Student");
    assert_eq!(cfg.name_palette.len(), 9);
    assert_eq!(cfg.particle_colors.len(), 5);
    assert!(cfg.sound_enabled);
    assert_eq!(cfg.emailjs.service_id, "service_yulvvxm");
    assert_eq!(cfg.emailjs.template_id, "template_5r2n46l");
}

#[test]
fn empty_object_is_all_defaults() {
    assert_eq!(SiteConfig::from_json("{}").unwrap(), SiteConfig::default());
}

#[test]
fn partial_override_keeps_other_fields() {
    let cfg = SiteConfig::from_json(
        r#"{"roles": ["Rustacean"], "sound_enabled": false, "emailjs": {"to_name": "Me"}}"#,
    )
    .unwrap();
    assert_eq!(cfg.roles, vec!["Rustacean".to_string()]);
    assert!(!cfg.sound_enabled);
    assert_eq!(cfg.emailjs.to_name, "Me");
    assert_eq!(cfg.emailjs.public_key, EmailJsConfig::default().public_key);
    assert_eq!(cfg.name_palette, SiteConfig::default().name_palette);
}

#[test]
fn blank_colors_are_dropped_and_empty_lists_fall_back() {
    let cfg = SiteConfig::from_json(
        r#"{"roles": [], "name_palette": ["  #123456 ", "", "   "], "particle_colors": [" "]}"#,
    )
    .unwrap();
    assert_eq!(cfg.name_palette, vec!["#123456".to_string()]);
    assert_eq!(cfg.particle_colors, SiteConfig::default().particle_colors);
    assert_eq!(cfg.roles, SiteConfig::default().roles);
}

#[test]
fn malformed_json_is_an_error() {
    let err = SiteConfig::from_json("{roles: nope").unwrap_err();
    assert!(err.to_string().starts_with("invalid site config"));
    assert!(SiteConfig::from_json(r#"{"roles": "not a list"}"#).is_err());
}
