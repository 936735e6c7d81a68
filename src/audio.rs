use crate::constants::{CLICK_SOUND_SELECTOR, HOVER_SOUND_SELECTOR};
use crate::dom;
use crate::model::{Automation, Capability, Cue, ToneParam, ToneSpec, Waveform};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Sound and haptic feedback for UI interactions.
///
/// The audio context is created lazily on the first user click (autoplay
/// policy). Each capability is probed once; `Unsupported` turns requests into
/// silent no-ops.
pub struct Sfx {
    enabled: bool,
    ctx: RefCell<Option<web::AudioContext>>,
    audio: Cell<Capability>,
    vibration: Cell<Capability>,
}

impl Sfx {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            ctx: RefCell::new(None),
            audio: Cell::new(Capability::Unknown),
            vibration: Cell::new(Capability::Unknown),
        }
    }

    /// Create the audio context. Must run inside a user gesture handler.
    pub fn probe_audio(&self) -> Capability {
        let mut cap = self.audio.get();
        let resolved = cap.resolve_with(|| match web::AudioContext::new() {
            Ok(ctx) => {
                _ = ctx.resume();
                *self.ctx.borrow_mut() = Some(ctx);
                true
            }
            Err(e) => {
                log::warn!("[sfx] audio not supported: {}", dom::js_error_text(&e));
                false
            }
        });
        self.audio.set(resolved);
        resolved
    }

    fn probe_vibration(&self) -> Capability {
        let mut cap = self.vibration.get();
        let resolved = cap.resolve_with(|| {
            web::window()
                .map(|w| w.navigator())
                .and_then(|n| js_sys::Reflect::has(&n, &JsValue::from_str("vibrate")).ok())
                .unwrap_or(false)
        });
        self.vibration.set(resolved);
        resolved
    }

    pub fn play(&self, cue: Cue) {
        if !self.enabled || !self.audio.get().is_supported() {
            return;
        }
        let ctx = self.ctx.borrow();
        let Some(ctx) = ctx.as_ref() else {
            return;
        };
        if let Err(e) = synth_tone(ctx, cue.tone()) {
            log::debug!("[sfx] {:?} tone failed: {}", cue, dom::js_error_text(&e));
        }
    }

    pub fn vibrate(&self, duration_ms: u32) {
        if !self.probe_vibration().is_supported() {
            return;
        }
        if let Some(w) = web::window() {
            _ = w.navigator().vibrate_with_duration(duration_ms);
        }
    }

    /// Tone plus the cue's haptic pulse.
    pub fn feedback(&self, cue: Cue) {
        self.play(cue);
        if let Some(ms) = cue.vibration_ms() {
            self.vibrate(ms);
        }
    }
}

// Fire a single oscillator through an exponentially decaying gain
fn synth_tone(ctx: &web::AudioContext, spec: &ToneSpec) -> Result<(), JsValue> {
    let osc = web::OscillatorNode::new(ctx)?;
    let gain = web::GainNode::new(ctx)?;
    osc.connect_with_audio_node(&gain)?;
    gain.connect_with_audio_node(&ctx.destination())?;

    osc.set_type(match spec.waveform {
        Waveform::Sine => web::OscillatorType::Sine,
        Waveform::Sawtooth => web::OscillatorType::Sawtooth,
    });
    let (frequency, level) = (osc.frequency(), gain.gain());
    let target = |param: ToneParam| match param {
        ToneParam::Frequency => frequency.clone(),
        ToneParam::Gain => level.clone(),
    };
    let now = ctx.current_time();
    for event in spec.schedule() {
        match event {
            Automation::SetAt {
                param,
                value,
                at_sec,
            } => target(param).set_value_at_time(value, now + at_sec)?,
            Automation::RampTo {
                param,
                value,
                at_sec,
            } => target(param).exponential_ramp_to_value_at_time(value, now + at_sec)?,
        };
    }
    osc.start_with_when(now)?;
    osc.stop_with_when(now + spec.stop_at())?;
    Ok(())
}

/// Install click/hover sounds on the interactive elements.
pub fn wire_sound_bindings(document: &web::Document, sfx: &Rc<Sfx>) {
    let clickables = dom::query_all(document, CLICK_SOUND_SELECTOR);
    for el in &clickables {
        let sfx = sfx.clone();
        dom::on_event(el, "click", move |_| sfx.feedback(Cue::Click));
    }
    let hoverables = dom::query_all(document, HOVER_SOUND_SELECTOR);
    for el in &hoverables {
        let sfx = sfx.clone();
        dom::on_event(el, "mouseenter", move |_| sfx.play(Cue::Hover));
    }
    log::info!(
        "[sfx] bound {} click and {} hover targets",
        clickables.len(),
        hoverables.len()
    );
}

/// Audio may only start from a user gesture: probe and bind on the first click.
pub fn arm_on_first_click(document: &web::Document, sfx: Rc<Sfx>) {
    let doc = document.clone();
    let once = wasm_bindgen::closure::Closure::once_into_js(move || {
        if sfx.probe_audio().is_supported() {
            log::info!("[sfx] audio ready");
        }
        wire_sound_bindings(&doc, &sfx);
    });
    let opts = web::AddEventListenerOptions::new();
    opts.set_once(true);
    _ = document.add_event_listener_with_callback_and_add_event_listener_options(
        "click",
        once.unchecked_ref(),
        &opts,
    );
}
