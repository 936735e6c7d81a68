// One-shot synth tones used for UI feedback.
//
// Each tone is a single oscillator with an exponential gain decay. Specs are
// plain data so the envelope math can be checked off-browser.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Sawtooth,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Sweep {
    Fixed(f32),
    /// Exponential glide from `from` to `to` Hz, then held.
    Exponential { from: f32, to: f32, over_sec: f64 },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ToneSpec {
    pub waveform: Waveform,
    pub sweep: Sweep,
    pub gain: f32,
    pub floor_gain: f32,
    pub duration_sec: f64,
}

// Exponential ramps cannot reach zero, so envelopes decay to this floor.
pub const GAIN_FLOOR: f32 = 0.01;

pub const CLICK_TONE: ToneSpec = ToneSpec {
    waveform: Waveform::Sine,
    sweep: Sweep::Fixed(800.0),
    gain: 0.3,
    floor_gain: GAIN_FLOOR,
    duration_sec: 0.1,
};

pub const HOVER_TONE: ToneSpec = ToneSpec {
    waveform: Waveform::Sine,
    sweep: Sweep::Fixed(1200.0),
    gain: 0.1,
    floor_gain: GAIN_FLOOR,
    duration_sec: 0.05,
};

pub const POWER_UP_TONE: ToneSpec = ToneSpec {
    waveform: Waveform::Sawtooth,
    sweep: Sweep::Exponential {
        from: 200.0,
        to: 1000.0,
        over_sec: 0.3,
    },
    gain: 0.2,
    floor_gain: GAIN_FLOOR,
    duration_sec: 0.5,
};

// C5
pub const SUCCESS_TONE: ToneSpec = ToneSpec {
    waveform: Waveform::Sine,
    sweep: Sweep::Fixed(523.25),
    gain: 0.3,
    floor_gain: GAIN_FLOOR,
    duration_sec: 0.3,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cue {
    Click,
    Hover,
    PowerUp,
    Success,
}

impl Cue {
    pub fn tone(self) -> &'static ToneSpec {
        match self {
            Cue::Click => &CLICK_TONE,
            Cue::Hover => &HOVER_TONE,
            Cue::PowerUp => &POWER_UP_TONE,
            Cue::Success => &SUCCESS_TONE,
        }
    }

    /// Haptic pulse paired with the cue, if any.
    pub fn vibration_ms(self) -> Option<u32> {
        match self {
            Cue::Click => Some(30),
            Cue::PowerUp => Some(100),
            Cue::Hover | Cue::Success => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToneParam {
    Frequency,
    Gain,
}

/// One `AudioParam` automation event, timed from the tone start.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Automation {
    SetAt {
        param: ToneParam,
        value: f32,
        at_sec: f64,
    },
    /// Exponential glide that reaches `value` at `at_sec`.
    RampTo {
        param: ToneParam,
        value: f32,
        at_sec: f64,
    },
}

impl ToneSpec {
    /// Automation events in the order they must be scheduled.
    pub fn schedule(&self) -> Vec<Automation> {
        use Automation::{RampTo, SetAt};
        let mut events = Vec::with_capacity(4);
        match self.sweep {
            Sweep::Fixed(hz) => events.push(SetAt {
                param: ToneParam::Frequency,
                value: hz,
                at_sec: 0.0,
            }),
            Sweep::Exponential { from, to, over_sec } => {
                events.push(SetAt {
                    param: ToneParam::Frequency,
                    value: from,
                    at_sec: 0.0,
                });
                events.push(RampTo {
                    param: ToneParam::Frequency,
                    value: to,
                    at_sec: over_sec,
                });
            }
        }
        events.push(SetAt {
            param: ToneParam::Gain,
            value: self.gain,
            at_sec: 0.0,
        });
        events.push(RampTo {
            param: ToneParam::Gain,
            value: self.floor_gain,
            at_sec: self.duration_sec,
        });
        events
    }

    /// When the oscillator is stopped, relative to its start.
    #[inline]
    pub fn stop_at(&self) -> f64 {
        self.duration_sec
    }
}
