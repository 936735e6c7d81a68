// Host-side tests for the contact form submission lifecycle.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod contact {
    include!("../src/model/contact.rs");
}

use contact::*;
use instant::Instant;
use std::time::Duration;

fn controller() -> SubmitController {
    SubmitController::new("Send Message", RESET_DELAY)
}

fn ok() -> SendOutcome {
    Ok(SendReceipt::from_parts(Some(200.0), Some("OK".into())))
}

#[test]
fn begin_disables_button_and_shows_sending() {
    let mut c = controller();
    let view = c.begin().unwrap();
    assert_eq!(view.label, SENDING_LABEL);
    assert!(view.disabled);
}

#[test]
fn second_submit_while_sending_is_rejected() {
    let mut c = controller();
    c.begin().unwrap();
    assert_eq!(c.begin(), Err(SubmitError::InFlight));
}

#[test]
fn success_clears_fields_and_plays_tone() {
    let mut c = controller();
    c.begin().unwrap();
    let now = Instant::now();
    let r = c.resolve(&ok(), now).unwrap();
    assert!(r.clear_fields);
    assert!(r.play_success_tone);
    assert_eq!(r.button.label, SENT_LABEL);
    assert_eq!(r.button.background, Some(SENT_BACKGROUND));
    assert_eq!(r.reset_at, now + Duration::from_millis(3000));
    assert_eq!(c.begin(), Err(SubmitError::CoolingDown));
}

#[test]
fn failure_keeps_fields() {
    let mut c = controller();
    c.begin().unwrap();
    let r = c
        .resolve(&Err(SendError::new("network down")), Instant::now())
        .unwrap();
    assert!(!r.clear_fields);
    assert!(!r.play_success_tone);
    assert_eq!(r.button.label, FAILED_LABEL);
    assert_eq!(r.button.background, Some(FAILED_BACKGROUND));
    assert_eq!(c.begin(), Err(SubmitError::CoolingDown));
}

#[test]
fn resolve_without_send_is_an_error() {
    let mut c = controller();
    assert_eq!(c.resolve(&ok(), Instant::now()), Err(SubmitError::NotSending));
}

#[test]
fn button_restores_exactly_at_reset_delay() {
    let mut c = controller();
    c.begin().unwrap();
    let t0 = Instant::now();
    c.resolve(&ok(), t0).unwrap();

    let early = t0 + Duration::from_millis(2999);
    assert_eq!(c.remaining(early), Some(Duration::from_millis(1)));
    assert!(c.expire(early).is_none());

    let view = c.expire(t0 + Duration::from_millis(3000)).unwrap();
    assert_eq!(view.label, "Send Message");
    assert_eq!(view.background, None);
    assert!(!view.disabled);
    assert_eq!(c.remaining(t0 + Duration::from_secs(10)), None);

    // the form is usable again
    assert!(c.begin().is_ok());
}

#[test]
fn expire_is_noop_while_idle_or_sending() {
    let mut c = controller();
    let now = Instant::now();
    assert!(c.expire(now).is_none());
    c.begin().unwrap();
    assert!(c.expire(now + Duration::from_secs(60)).is_none());
    assert_eq!(c.begin(), Err(SubmitError::InFlight));
}

#[test]
fn payload_serializes_template_fields() {
    let sub = Submission {
        name: "Ada".into(),
        email: "ada@example.com".into(),
        subject: "Hi".into(),
        message: "Hello\nthere".into(),
    };
    let payload = sub.into_payload("Site Owner");
    let json = serde_json::to_value(&payload).unwrap();
    assert_eq!(json["from_name"], "Ada");
    assert_eq!(json["from_email"], "ada@example.com");
    assert_eq!(json["subject"], "Hi");
    assert_eq!(json["message"], "Hello\nthere");
    assert_eq!(json["to_name"], "Site Owner");
    assert_eq!(json.as_object().unwrap().len(), 5);
}

#[test]
fn send_error_displays_message() {
    let e = SendError::new("status 412");
    assert_eq!(e.to_string(), "email send failed: status 412");
}

#[test]
fn receipt_keeps_only_reported_parts() {
    let full = SendReceipt::from_parts(Some(200.0), Some("OK".into()));
    assert_eq!(full.status, Some(200));
    assert_eq!(full.to_string(), "200 OK");

    let missing = SendReceipt::from_parts(None, None);
    assert_eq!(missing.status, None);
    assert_eq!(missing.to_string(), "no details");

    let text_only = SendReceipt::from_parts(None, Some("OK".into()));
    assert_eq!(text_only.to_string(), "OK");

    let status_only = SendReceipt::from_parts(Some(202.0), Some(String::new()));
    assert_eq!(status_only.text, None);
    assert_eq!(status_only.to_string(), "202");
}

#[test]
fn odd_status_values_are_dropped_not_zeroed() {
    for raw in [f64::NAN, -1.0, 70_000.0, 200.5, f64::INFINITY] {
        let r = SendReceipt::from_parts(Some(raw), None);
        assert_eq!(r.status, None, "{raw} should not map to a status");
        assert!(!r.to_string().contains('0'));
    }
}
