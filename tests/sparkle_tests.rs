// Host-side tests for particle, sparkle and burst specs.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod sparkle {
    include!("../src/model/sparkle.rs");
}

use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use sparkle::*;
use std::time::Duration;

#[test]
fn particles_stay_in_ranges() {
    let colors: Vec<String> = vec!["#00CED1".into(), "#FFD700".into()];
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..200 {
        let p = ParticleSpec::random(&mut rng, &colors).unwrap();
        assert!((4.0..12.0).contains(&p.size_px));
        assert!((0.0..100.0).contains(&p.left_pct));
        assert!((0.0..8.0).contains(&p.delay_sec));
        assert!((6.0..10.0).contains(&p.duration_sec));
        assert!(colors.contains(&p.color));
    }
}

#[test]
fn no_colors_no_particle() {
    let mut rng = StdRng::seed_from_u64(3);
    assert!(ParticleSpec::random(&mut rng, &[]).is_none());
}

#[test]
fn particle_css_carries_glow() {
    let p = ParticleSpec {
        size_px: 5.0,
        color: "#fff".into(),
        left_pct: 12.5,
        delay_sec: 1.0,
        duration_sec: 7.0,
    };
    let css = p.css();
    assert!(css.contains("width:5.00px"));
    assert!(css.contains("left:12.50%"));
    assert!(css.contains("box-shadow:0 0 10.00px #fff"));
}

#[test]
fn sparkle_uses_known_glyph() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..50 {
        let s = SparkleSpec::random(&mut rng, 10.0, 20.0);
        assert!(SPARKLE_GLYPHS.contains(&s.glyph));
        assert!((10.0..22.0).contains(&s.font_px));
        assert_eq!((s.x, s.y), (10.0, 20.0));
    }
}

#[test]
fn throttle_allows_one_event_per_gap() {
    let mut t = Throttle::new(Duration::from_millis(SPARKLE_THROTTLE_MS));
    let t0 = Instant::now();
    assert!(t.ready(t0));
    assert!(!t.ready(t0 + Duration::from_millis(10)));
    assert!(!t.ready(t0 + Duration::from_millis(49)));
    assert!(t.ready(t0 + Duration::from_millis(50)));
    assert!(!t.ready(t0 + Duration::from_millis(70)));
    assert!(t.ready(t0 + Duration::from_millis(101)));
}

#[test]
fn burst_centers_on_rect() {
    let b = BurstSpec::from_rect(100.0, 40.0, 60.0, 20.0);
    assert_eq!(b, BurstSpec { x: 130.0, y: 50.0 });
    let vars = b.css_vars();
    assert_eq!(vars[0], ("--x", "130px".to_string()));
    assert_eq!(vars[1], ("--y", "50px".to_string()));
}

#[test]
fn burst_navigates_before_cleanup() {
    assert!(BURST_NAVIGATE_DELAY_MS < BURST_CLEANUP_MS);
    assert_eq!(BURST_MARKUP.matches("rasengan-spiral").count(), 3);
    assert_eq!(BURST_MARKUP.matches("rasengan-ring").count(), 3);
}
