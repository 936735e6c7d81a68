// Host-side tests for name letter splitting and random recoloring.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod palette {
    include!("../src/model/palette.rs");
}

use palette::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn colors() -> Vec<String> {
    ["#00CED1", "#4169E1", "#9370DB", "#FFB347"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

#[test]
fn split_keeps_spaces_bare_and_indexes_by_char() {
    let glyphs = split_letters("Al B");
    assert_eq!(
        glyphs,
        vec![
            Glyph::Letter { index: 0, ch: 'A' },
            Glyph::Letter { index: 1, ch: 'l' },
            Glyph::Space,
            Glyph::Letter { index: 3, ch: 'B' },
        ]
    );
}

#[test]
fn markup_wraps_letters_only() {
    let html = letters_markup(&split_letters("A B"));
    assert_eq!(
        html,
        "<span class=\"dynamic-letter\" data-index=\"0\">A</span> \
         <span class=\"dynamic-letter\" data-index=\"2\">B</span>"
    );
}

#[test]
fn markup_escapes_html_significant_chars() {
    let html = letters_markup(&split_letters("<&>"));
    assert!(html.contains(">&lt;</span>"));
    assert!(html.contains(">&amp;</span>"));
    assert!(html.contains(">&gt;</span>"));
    assert!(!html.contains("><</span>"));
}

#[test]
fn empty_palette_is_rejected() {
    assert!(ColorCycler::new(Vec::new(), 10, 0.3).is_none());
}

#[test]
fn colors_always_come_from_palette() {
    let palette = colors();
    let cycler = ColorCycler::new(palette.clone(), 21, RECOLOR_PROBABILITY).unwrap();
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..500 {
        for change in cycler.step(&mut rng) {
            assert!(change.letter < 21);
            assert!(palette.iter().any(|c| c == change.color), "{} not in palette", change.color);
        }
    }
}

#[test]
fn probability_bounds_are_respected() {
    let mut rng = StdRng::seed_from_u64(7);
    let never = ColorCycler::new(colors(), 12, 0.0).unwrap();
    assert!(never.step(&mut rng).is_empty());

    let always = ColorCycler::new(colors(), 12, 1.0).unwrap();
    let changes = always.step(&mut rng);
    let letters: Vec<usize> = changes.iter().map(|c| c.letter).collect();
    assert_eq!(letters, (0..12).collect::<Vec<_>>());
}

#[test]
fn out_of_range_probability_is_clamped() {
    let mut rng = StdRng::seed_from_u64(1);
    let over = ColorCycler::new(colors(), 5, 4.0).unwrap();
    assert_eq!(over.step(&mut rng).len(), 5);
    let nan = ColorCycler::new(colors(), 5, f64::NAN).unwrap();
    assert!(nan.step(&mut rng).is_empty());
}

#[test]
fn roughly_thirty_percent_recolored_per_tick() {
    let cycler = ColorCycler::new(colors(), 100, RECOLOR_PROBABILITY).unwrap();
    let mut rng = StdRng::seed_from_u64(2024);
    let ticks = 200;
    let total: usize = (0..ticks).map(|_| cycler.step(&mut rng).len()).sum();
    let rate = total as f64 / (ticks * 100) as f64;
    assert!((rate - 0.3).abs() < 0.03, "recolor rate {rate}");
}

#[test]
fn glow_uses_color_twice() {
    assert_eq!(glow_shadow("#fff"), "0 0 20px #fff, 0 0 40px #fff");
}
