// Random recoloring of the letters of a name.

use rand::seq::SliceRandom;
use rand::Rng;

/// Chance that a single letter is recolored on a given tick.
pub const RECOLOR_PROBABILITY: f64 = 0.3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Glyph {
    Space,
    /// `index` is the character position in the original text.
    Letter { index: usize, ch: char },
}

pub fn split_letters(text: &str) -> Vec<Glyph> {
    text.chars()
        .enumerate()
        .map(|(index, ch)| {
            if ch == ' ' {
                Glyph::Space
            } else {
                Glyph::Letter { index, ch }
            }
        })
        .collect()
}

/// Markup replacing the name's text: one span per letter, spaces kept bare.
pub fn letters_markup(glyphs: &[Glyph]) -> String {
    let mut out = String::with_capacity(glyphs.len() * 48);
    for g in glyphs {
        match *g {
            Glyph::Space => out.push(' '),
            Glyph::Letter { index, ch } => {
                out.push_str("<span class=\"dynamic-letter\" data-index=\"");
                out.push_str(&index.to_string());
                out.push_str("\">");
                match ch {
                    '<' => out.push_str("&lt;"),
                    '>' => out.push_str("&gt;"),
                    '&' => out.push_str("&amp;"),
                    '"' => out.push_str("&quot;"),
                    c => out.push(c),
                }
                out.push_str("</span>");
            }
        }
    }
    out
}

/// A single color change; `letter` indexes the letter spans in document order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Recolor<'a> {
    pub letter: usize,
    pub color: &'a str,
}

pub struct ColorCycler {
    palette: Vec<String>,
    letters: usize,
    probability: f64,
}

impl ColorCycler {
    pub fn new(palette: Vec<String>, letters: usize, probability: f64) -> Option<Self> {
        if palette.is_empty() {
            return None;
        }
        let probability = if probability.is_finite() {
            probability.clamp(0.0, 1.0)
        } else {
            0.0
        };
        Some(Self {
            palette,
            letters,
            probability,
        })
    }

    /// Each letter independently rolls for a new color; no memory of the last one.
    pub fn step<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Recolor<'_>> {
        let mut out = Vec::new();
        for letter in 0..self.letters {
            if rng.gen_bool(self.probability) {
                if let Some(color) = self.palette.choose(rng) {
                    out.push(Recolor { letter, color });
                }
            }
        }
        out
    }
}

#[inline]
pub fn glow_shadow(color: &str) -> String {
    format!("0 0 20px {color}, 0 0 40px {color}")
}
