// Randomized specs for the decorative particles, cursor sparkles and the
// click power-burst. DOM creation lives in the browser layer.

use instant::Instant;
use rand::seq::SliceRandom;
use rand::Rng;
use std::time::Duration;

pub const PARTICLE_COUNT: usize = 20;
pub const PARTICLE_SPAWN_GAP_MS: u64 = 200;

#[derive(Clone, Debug, PartialEq)]
pub struct ParticleSpec {
    pub size_px: f64,
    pub color: String,
    pub left_pct: f64,
    pub delay_sec: f64,
    pub duration_sec: f64,
}

impl ParticleSpec {
    pub fn random<R: Rng + ?Sized>(rng: &mut R, colors: &[String]) -> Option<Self> {
        let color = colors.choose(rng)?.clone();
        Some(Self {
            size_px: rng.gen_range(4.0..12.0),
            color,
            left_pct: rng.gen_range(0.0..100.0),
            delay_sec: rng.gen_range(0.0..8.0),
            duration_sec: rng.gen_range(6.0..10.0),
        })
    }

    pub fn css(&self) -> String {
        format!(
            "width:{size:.2}px;height:{size:.2}px;background:{color};left:{left:.2}%;\
             animation-delay:{delay:.2}s;animation-duration:{dur:.2}s;\
             box-shadow:0 0 {glow:.2}px {color}",
            size = self.size_px,
            color = self.color,
            left = self.left_pct,
            delay = self.delay_sec,
            dur = self.duration_sec,
            glow = self.size_px * 2.0,
        )
    }
}

pub const SPARKLE_GLYPHS: [&str; 6] = ["✨", "⭐", "💫", "🌟", "✦", "★"];
pub const SPARKLE_THROTTLE_MS: u64 = 50;
pub const SPARKLE_LIFETIME_MS: u64 = 1000;

#[derive(Clone, Debug, PartialEq)]
pub struct SparkleSpec {
    pub glyph: &'static str,
    pub x: f64,
    pub y: f64,
    pub font_px: f64,
}

impl SparkleSpec {
    pub fn random<R: Rng + ?Sized>(rng: &mut R, x: f64, y: f64) -> Self {
        let glyph = SPARKLE_GLYPHS.choose(rng).copied().unwrap_or("✨");
        Self {
            glyph,
            x,
            y,
            font_px: rng.gen_range(10.0..22.0),
        }
    }

    pub fn css(&self) -> String {
        format!(
            "left:{:.0}px;top:{:.0}px;font-size:{:.1}px",
            self.x, self.y, self.font_px
        )
    }
}

/// Lets at most one event through per `gap`.
#[derive(Clone, Debug)]
pub struct Throttle {
    gap: Duration,
    last: Option<Instant>,
}

impl Throttle {
    pub fn new(gap: Duration) -> Self {
        Self { gap, last: None }
    }

    pub fn ready(&mut self, now: Instant) -> bool {
        match self.last {
            Some(prev) if now < prev + self.gap => false,
            _ => {
                self.last = Some(now);
                true
            }
        }
    }
}

pub const BURST_CLEANUP_MS: u64 = 800;
pub const BURST_NAVIGATE_DELAY_MS: u64 = 700;

pub const BURST_MARKUP: &str = concat!(
    "<div class=\"rasengan-core\">",
    "<div class=\"rasengan-spiral\"></div>",
    "<div class=\"rasengan-spiral\"></div>",
    "<div class=\"rasengan-spiral\"></div>",
    "<div class=\"rasengan-particles\"></div>",
    "</div>",
    "<div class=\"rasengan-ring\"></div>",
    "<div class=\"rasengan-ring\"></div>",
    "<div class=\"rasengan-ring\"></div>",
);

/// Viewport position of a power-burst.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BurstSpec {
    pub x: f64,
    pub y: f64,
}

impl BurstSpec {
    /// Centered on an element's client rect.
    pub fn from_rect(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            x: left + width / 2.0,
            y: top + height / 2.0,
        }
    }

    pub fn css_vars(&self) -> [(&'static str, String); 2] {
        [("--x", format!("{}px", self.x)), ("--y", format!("{}px", self.y))]
    }
}
