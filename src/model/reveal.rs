// Scroll-triggered reveal bookkeeping.

use std::time::Duration;

pub const REVEAL_MARGIN_PX: f64 = 100.0;
pub const STAGGER_STEP_MS: u64 = 100;

#[inline]
pub fn in_reveal_zone(element_top: f64, viewport_height: f64) -> bool {
    element_top < viewport_height - REVEAL_MARGIN_PX
}

#[inline]
pub fn stagger_delay(index: usize) -> Duration {
    Duration::from_millis(STAGGER_STEP_MS * index as u64)
}

/// Per-element reveal flags. Once set a flag never clears.
#[derive(Clone, Debug, Default)]
pub struct RevealTracker {
    revealed: Vec<bool>,
}

impl RevealTracker {
    pub fn new(len: usize) -> Self {
        Self {
            revealed: vec![false; len],
        }
    }

    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.iter().filter(|r| **r).count()
    }

    /// Returns true only the first time `index` is marked.
    pub fn mark(&mut self, index: usize) -> bool {
        match self.revealed.get_mut(index) {
            Some(r) if !*r => {
                *r = true;
                true
            }
            _ => false,
        }
    }

    /// Marks every element whose top lies in the reveal zone and returns the
    /// indices that were newly revealed by this scan.
    pub fn scan<I>(&mut self, tops: I, viewport_height: f64) -> Vec<usize>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut fresh = Vec::new();
        for (i, top) in tops.into_iter().enumerate() {
            if in_reveal_zone(top, viewport_height) && self.mark(i) {
                fresh.push(i);
            }
        }
        fresh
    }
}
