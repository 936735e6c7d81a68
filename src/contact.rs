use crate::audio::Sfx;
use crate::config::EmailJsConfig;
use crate::constants::{
    CONTACT_FORM_ID, FIELD_EMAIL_ID, FIELD_MESSAGE_ID, FIELD_NAME_ID, FIELD_SUBJECT_ID,
    SUBMIT_BUTTON_SELECTOR,
};
use crate::dom;
use crate::model::{
    ButtonView, Cue, EmailPayload, SendError, SendOutcome, SendReceipt, Submission,
    SubmitController, RESET_DELAY,
};
use crate::timer;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = emailjs, js_name = init, catch)]
    fn emailjs_init(public_key: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(js_namespace = emailjs, js_name = send, catch)]
    fn emailjs_send(
        service_id: &str,
        template_id: &str,
        params: &JsValue,
    ) -> Result<js_sys::Promise, JsValue>;
}

fn emailjs_loaded() -> bool {
    js_sys::Reflect::has(&js_sys::global(), &JsValue::from_str("emailjs")).unwrap_or(false)
}

/// Deliver `payload` through EmailJS and wait for its verdict.
async fn send_email(cfg: &EmailJsConfig, payload: &EmailPayload) -> SendOutcome {
    let json = serde_json::to_string(payload).map_err(|e| SendError::new(e.to_string()))?;
    let params =
        js_sys::JSON::parse(&json).map_err(|e| SendError::new(dom::js_error_text(&e)))?;
    let promise = emailjs_send(&cfg.service_id, &cfg.template_id, &params)
        .map_err(|e| SendError::new(dom::js_error_text(&e)))?;
    let response = JsFuture::from(promise)
        .await
        .map_err(|e| SendError::new(dom::js_error_text(&e)))?;
    let status = js_sys::Reflect::get(&response, &JsValue::from_str("status"))
        .ok()
        .and_then(|v| v.as_f64());
    let text = js_sys::Reflect::get(&response, &JsValue::from_str("text"))
        .ok()
        .and_then(|v| v.as_string());
    Ok(SendReceipt::from_parts(status, text))
}

fn field_value(document: &web::Document, id: &str) -> String {
    let Some(el) = document.get_element_by_id(id) else {
        return String::new();
    };
    if let Some(input) = el.dyn_ref::<web::HtmlInputElement>() {
        input.value()
    } else if let Some(area) = el.dyn_ref::<web::HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}

fn read_submission(document: &web::Document) -> Submission {
    Submission {
        name: field_value(document, FIELD_NAME_ID),
        email: field_value(document, FIELD_EMAIL_ID),
        subject: field_value(document, FIELD_SUBJECT_ID),
        message: field_value(document, FIELD_MESSAGE_ID),
    }
}

fn apply_view(button: &web::HtmlButtonElement, view: &ButtonView) {
    button.set_text_content(Some(&view.label));
    button.set_disabled(view.disabled);
    match view.background {
        Some(bg) => dom::set_style(button, "background", bg),
        None => dom::clear_style(button, "background"),
    }
}

// Timers may fire a touch early relative to `Instant`; re-arm for the remainder.
fn schedule_restore(
    controller: Rc<RefCell<SubmitController>>,
    button: web::HtmlButtonElement,
    delay: Duration,
) {
    timer::set_timeout(delay, move || {
        let now = Instant::now();
        let remaining = {
            let mut c = controller.borrow_mut();
            if let Some(view) = c.expire(now) {
                apply_view(&button, &view);
                return;
            }
            c.remaining(now)
        };
        if let Some(rest) = remaining {
            schedule_restore(controller, button, rest.max(Duration::from_millis(1)));
        }
    });
}

struct ContactForm {
    document: web::Document,
    form: web::HtmlFormElement,
    button: web::HtmlButtonElement,
    controller: Rc<RefCell<SubmitController>>,
    cfg: Rc<EmailJsConfig>,
    sfx: Rc<Sfx>,
}

impl ContactForm {
    fn submit(&self) {
        let sending = match self.controller.borrow_mut().begin() {
            Ok(view) => view,
            Err(e) => {
                log::warn!("[contact] submit ignored: {}", e);
                return;
            }
        };
        apply_view(&self.button, &sending);
        self.sfx.play(Cue::Click);

        let payload = read_submission(&self.document).into_payload(&self.cfg.to_name);
        let form = self.form.clone();
        let button = self.button.clone();
        let controller = self.controller.clone();
        let cfg = self.cfg.clone();
        let sfx = self.sfx.clone();
        spawn_local(async move {
            let outcome = send_email(&cfg, &payload).await;
            match &outcome {
                Ok(r) => log::info!("[contact] sent: {}", r),
                Err(e) => log::warn!("[contact] {}", e),
            }
            let resolved = controller.borrow_mut().resolve(&outcome, Instant::now());
            let resolution = match resolved {
                Ok(r) => r,
                Err(e) => {
                    log::error!("[contact] unexpected resolution: {}", e);
                    return;
                }
            };
            apply_view(&button, &resolution.button);
            if resolution.play_success_tone {
                sfx.play(Cue::Success);
            }
            if resolution.clear_fields {
                form.reset();
            }
            let delay = controller.borrow().reset_delay();
            schedule_restore(controller, button, delay);
        });
    }
}

/// Hook `#contactForm` up to EmailJS. Missing form, button or EmailJS script
/// leaves the form to the browser's default behavior.
pub fn wire(document: &web::Document, cfg: &EmailJsConfig, sfx: Rc<Sfx>) -> anyhow::Result<()> {
    let Some(form) = document
        .get_element_by_id(CONTACT_FORM_ID)
        .and_then(|el| el.dyn_into::<web::HtmlFormElement>().ok())
    else {
        return Ok(());
    };
    let button = form
        .query_selector(SUBMIT_BUTTON_SELECTOR)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .and_then(|el| el.dyn_into::<web::HtmlButtonElement>().ok())
        .ok_or_else(|| anyhow::anyhow!("contact form has no submit button"))?;
    if !emailjs_loaded() {
        anyhow::bail!("emailjs script not loaded");
    }
    emailjs_init(&cfg.public_key).map_err(|e| anyhow::anyhow!(dom::js_error_text(&e)))?;

    let label = button.text_content().unwrap_or_default();
    let handler = ContactForm {
        document: document.clone(),
        form: form.clone(),
        button,
        controller: Rc::new(RefCell::new(SubmitController::new(label, RESET_DELAY))),
        cfg: Rc::new(cfg.clone()),
        sfx,
    };
    dom::on_event(&form, "submit", move |ev| {
        ev.prevent_default();
        handler.submit();
    });
    log::info!("[contact] form ready");
    Ok(())
}
