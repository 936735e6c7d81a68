// Contact form submission lifecycle.
//
// `SubmitController` tracks one send at a time and decides what the submit
// button shows. Timing is passed in as `Instant`s so the reset delay can be
// checked without a browser.

use instant::Instant;
use serde::Serialize;
use std::fmt;
use std::time::Duration;
use thiserror::Error;

pub const RESET_DELAY: Duration = Duration::from_millis(3000);

pub const SENDING_LABEL: &str = "⚡ Sending...";
pub const SENT_LABEL: &str = "✅ Message Sent!";
pub const FAILED_LABEL: &str = "❌ Failed to send";
pub const SENT_BACKGROUND: &str = "linear-gradient(135deg, #00CED1, #48D1CC)";
pub const FAILED_BACKGROUND: &str = "linear-gradient(135deg, #ff6b6b, #ee5a5a)";

/// Raw field values read from the form at submit time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl Submission {
    pub fn into_payload(self, to_name: &str) -> EmailPayload {
        EmailPayload {
            from_name: self.name,
            from_email: self.email,
            subject: self.subject,
            message: self.message,
            to_name: to_name.to_string(),
        }
    }
}

/// Template parameters handed to the email service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EmailPayload {
    pub from_name: String,
    pub from_email: String,
    pub subject: String,
    pub message: String,
    pub to_name: String,
}

/// What the email service reported back. Either part may be absent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SendReceipt {
    pub status: Option<u16>,
    pub text: Option<String>,
}

impl SendReceipt {
    /// Keeps `status` only when it is a whole number in `u16` range.
    pub fn from_parts(status: Option<f64>, text: Option<String>) -> Self {
        let status = status
            .filter(|s| s.fract() == 0.0 && (0.0..=u16::MAX as f64).contains(s))
            .map(|s| s as u16);
        let text = text.filter(|t| !t.is_empty());
        Self { status, text }
    }
}

impl fmt::Display for SendReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.status, &self.text) {
            (Some(status), Some(text)) => write!(f, "{status} {text}"),
            (Some(status), None) => write!(f, "{status}"),
            (None, Some(text)) => f.write_str(text),
            (None, None) => f.write_str("no details"),
        }
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("email send failed: {message}")]
pub struct SendError {
    pub message: String,
}

impl SendError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

pub type SendOutcome = Result<SendReceipt, SendError>;

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("a message is already being sent")]
    InFlight,
    #[error("submit button is still showing the last result")]
    CoolingDown,
    #[error("no send in progress")]
    NotSending,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ButtonView {
    pub label: String,
    pub background: Option<&'static str>,
    pub disabled: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitPhase {
    Idle,
    Sending,
    Sent { reset_at: Instant },
    Failed { reset_at: Instant },
}

/// What the page should do once the send settles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    pub button: ButtonView,
    pub clear_fields: bool,
    pub play_success_tone: bool,
    pub reset_at: Instant,
}

pub struct SubmitController {
    original_label: String,
    reset_delay: Duration,
    phase: SubmitPhase,
}

impl SubmitController {
    pub fn new(original_label: impl Into<String>, reset_delay: Duration) -> Self {
        Self {
            original_label: original_label.into(),
            reset_delay,
            phase: SubmitPhase::Idle,
        }
    }

    pub fn reset_delay(&self) -> Duration {
        self.reset_delay
    }

    pub fn idle_view(&self) -> ButtonView {
        ButtonView {
            label: self.original_label.clone(),
            background: None,
            disabled: false,
        }
    }

    /// Starts a send. Rejected while another send or its result display is active.
    pub fn begin(&mut self) -> Result<ButtonView, SubmitError> {
        match self.phase {
            SubmitPhase::Idle => {
                self.phase = SubmitPhase::Sending;
                Ok(ButtonView {
                    label: SENDING_LABEL.to_string(),
                    background: None,
                    disabled: true,
                })
            }
            SubmitPhase::Sending => Err(SubmitError::InFlight),
            SubmitPhase::Sent { .. } | SubmitPhase::Failed { .. } => Err(SubmitError::CoolingDown),
        }
    }

    pub fn resolve(
        &mut self,
        outcome: &SendOutcome,
        now: Instant,
    ) -> Result<Resolution, SubmitError> {
        if self.phase != SubmitPhase::Sending {
            return Err(SubmitError::NotSending);
        }
        let reset_at = now + self.reset_delay;
        let resolution = match outcome {
            Ok(_) => {
                self.phase = SubmitPhase::Sent { reset_at };
                Resolution {
                    button: ButtonView {
                        label: SENT_LABEL.to_string(),
                        background: Some(SENT_BACKGROUND),
                        disabled: true,
                    },
                    clear_fields: true,
                    play_success_tone: true,
                    reset_at,
                }
            }
            Err(_) => {
                self.phase = SubmitPhase::Failed { reset_at };
                Resolution {
                    button: ButtonView {
                        label: FAILED_LABEL.to_string(),
                        background: Some(FAILED_BACKGROUND),
                        disabled: true,
                    },
                    clear_fields: false,
                    play_success_tone: false,
                    reset_at,
                }
            }
        };
        Ok(resolution)
    }

    /// Time left before the button may be restored.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        match self.phase {
            SubmitPhase::Sent { reset_at } | SubmitPhase::Failed { reset_at } => {
                if now < reset_at {
                    Some(reset_at - now)
                } else {
                    Some(Duration::ZERO)
                }
            }
            _ => None,
        }
    }

    /// Restores the idle button once the reset deadline has passed.
    pub fn expire(&mut self, now: Instant) -> Option<ButtonView> {
        match self.phase {
            SubmitPhase::Sent { reset_at } | SubmitPhase::Failed { reset_at }
                if now >= reset_at =>
            {
                self.phase = SubmitPhase::Idle;
                Some(self.idle_view())
            }
            _ => None,
        }
    }
}
