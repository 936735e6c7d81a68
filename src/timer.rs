use crate::model::CancelToken;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
fn millis(delay: Duration) -> i32 {
    delay.as_millis().min(i32::MAX as u128) as i32
}

/// One-shot `setTimeout`. Returns the timer handle when scheduling succeeded.
pub fn set_timeout(delay: Duration, f: impl FnOnce() + 'static) -> Option<i32> {
    let window = web::window()?;
    let cb = Closure::once_into_js(f);
    window
        .set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), millis(delay))
        .ok()
}

/// Like [`set_timeout`] but skipped once `token` is cancelled.
pub fn after(token: &CancelToken, delay: Duration, f: impl FnOnce() + 'static) {
    let token = token.clone();
    set_timeout(delay, move || {
        if !token.is_cancelled() {
            f();
        }
    });
}

type Step = Rc<RefCell<dyn FnMut() -> Option<Duration>>>;

/// Self-rescheduling loop: `step` runs after `first_delay` and returns the
/// delay before its next run, or `None` to stop. Cancelling `token` stops the
/// loop before the next step.
pub fn run_loop(
    token: CancelToken,
    first_delay: Duration,
    step: impl FnMut() -> Option<Duration> + 'static,
) {
    let step: Step = Rc::new(RefCell::new(step));
    schedule(token, first_delay, step);
}

fn schedule(token: CancelToken, delay: Duration, step: Step) {
    set_timeout(delay, move || {
        if token.is_cancelled() {
            log::debug!("[timer] loop cancelled");
            return;
        }
        let next = {
            let mut f = step.borrow_mut();
            (&mut *f)()
        };
        if let Some(d) = next {
            schedule(token, d, step);
        }
    });
}

/// Fixed-period loop, first run after one period.
pub fn every(token: CancelToken, period: Duration, mut step: impl FnMut() + 'static) {
    run_loop(token, period, move || {
        step();
        Some(period)
    });
}

/// Cancel `token` when the page is being torn down. Pages entering the
/// back/forward cache (`persisted`) keep their loops.
pub fn cancel_on_pagehide(window: &web::Window, token: CancelToken) {
    crate::dom::on_event(window, "pagehide", move |ev| {
        let persisted = js_sys::Reflect::get(&ev, &"persisted".into())
            .ok()
            .and_then(|v| v.as_bool())
            .unwrap_or(false);
        if !persisted && !token.is_cancelled() {
            log::info!("[timer] pagehide: stopping scheduled loops");
            token.cancel();
        }
    });
}
