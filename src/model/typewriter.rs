// Typewriter-style role rotator.
//
// Pure state machine: the browser side calls `Typewriter::tick`, writes the
// returned text and schedules the next tick after `Frame::delay`.

use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Typing,
    PausedAtFull,
    Deleting,
    PausedAtEmpty,
}

/// Tick pacing for the rotator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypewriterTiming {
    pub type_step: Duration,
    pub delete_step: Duration,
    pub hold_full: Duration,
    pub hold_empty: Duration,
    pub start_delay: Duration,
}

impl Default for TypewriterTiming {
    fn default() -> Self {
        Self {
            type_step: Duration::from_millis(100),
            delete_step: Duration::from_millis(50),
            hold_full: Duration::from_millis(2000),
            hold_empty: Duration::from_millis(500),
            start_delay: Duration::from_millis(1000),
        }
    }
}

/// Output of one tick: what to display and how long until the next tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    pub text: String,
    pub delay: Duration,
    pub phase: Phase,
}

pub struct Typewriter {
    phrases: Vec<Vec<char>>,
    timing: TypewriterTiming,
    index: usize,
    chars: usize,
    phase: Phase,
}

impl Typewriter {
    /// Returns `None` when there is nothing to rotate through.
    pub fn new<S: AsRef<str>>(phrases: &[S], timing: TypewriterTiming) -> Option<Self> {
        if phrases.is_empty() {
            return None;
        }
        let phrases = phrases
            .iter()
            .map(|p| p.as_ref().chars().collect::<Vec<_>>())
            .collect();
        Some(Self {
            phrases,
            timing,
            index: 0,
            chars: 0,
            phase: Phase::PausedAtEmpty,
        })
    }

    pub fn timing(&self) -> TypewriterTiming {
        self.timing
    }

    pub fn phrase_index(&self) -> usize {
        self.index
    }

    // Currently displayed prefix of the active phrase.
    fn text(&self) -> String {
        self.phrases[self.index][..self.chars].iter().collect()
    }

    pub fn tick(&mut self) -> Frame {
        let len = self.phrases[self.index].len();
        let delay = match self.phase {
            Phase::PausedAtEmpty | Phase::Typing => {
                if len == 0 {
                    // nothing to type: pause and move on
                    self.advance();
                    self.timing.hold_empty
                } else {
                    self.chars = (self.chars + 1).min(len);
                    if self.chars == len {
                        self.phase = Phase::PausedAtFull;
                        self.timing.hold_full
                    } else {
                        self.phase = Phase::Typing;
                        self.timing.type_step
                    }
                }
            }
            Phase::PausedAtFull | Phase::Deleting => {
                self.chars = self.chars.saturating_sub(1);
                if self.chars == 0 {
                    self.advance();
                    self.timing.hold_empty
                } else {
                    self.phase = Phase::Deleting;
                    self.timing.delete_step
                }
            }
        };
        Frame {
            text: self.text(),
            delay,
            phase: self.phase,
        }
    }

    fn advance(&mut self) {
        self.chars = 0;
        self.index = (self.index + 1) % self.phrases.len();
        self.phase = Phase::PausedAtEmpty;
    }
}
