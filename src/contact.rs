//! Contact form state and the submission lifecycle:
//! `Idle -> Submitting -> {Success, Error} -> Idle`.
//!
//! [`ContactState`] is a plain value. The contact section keeps it in a
//! signal, runs delivery through a [`ContactSink`] and schedules the status
//! reset.

mod form;
mod sink;

pub use form::{ContactForm, ContactMessage, FormField};
pub use sink::{ContactSink, SimulatedSink};

use std::time::Duration;

use thiserror::Error;

pub const SUBMIT_LATENCY: Duration = Duration::from_millis(1500);
pub const STATUS_DISPLAY: Duration = Duration::from_millis(3000);

pub const SUCCESS_NOTICE: &str = "Message sent successfully!";
pub const FAILURE_NOTICE: &str = "Failed to send message. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactTiming {
    /// How long the simulated delivery takes
    pub latency: Duration,
    /// How long a success or error notice stays up before reverting to idle
    pub status_display: Duration,
}

impl ContactTiming {
    /// Status display delay in milliseconds, for the browser timer API.
    pub fn status_display_ms(&self) -> f64 {
        self.status_display.as_secs_f64() * 1000.0
    }
}

impl Default for ContactTiming {
    fn default() -> Self {
        Self {
            latency: SUBMIT_LATENCY,
            status_display: STATUS_DISPLAY,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("Failed to send message. Please try again.")]
    SubmissionFailed(String),
    #[error("{0} is required")]
    MissingField(FormField),
    #[error("A message is already being sent")]
    AlreadySubmitting,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

impl SubmissionPhase {
    pub fn is_terminal(self) -> bool {
        matches!(self, SubmissionPhase::Success | SubmissionPhase::Error)
    }

    /// Inline notice shown under the form.
    pub fn notice(self) -> Option<&'static str> {
        match self {
            SubmissionPhase::Success => Some(SUCCESS_NOTICE),
            SubmissionPhase::Error => Some(FAILURE_NOTICE),
            SubmissionPhase::Idle | SubmissionPhase::Submitting => None,
        }
    }
}

/// Identifies one submission, so late timers can't touch a newer one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub ticket: Ticket,
    pub message: ContactMessage,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactState {
    form: ContactForm,
    phase: SubmissionPhase,
    last_error: Option<ContactError>,
    issued: u64,
}

impl ContactState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn field(&self, field: FormField) -> &str {
        self.form.get(field)
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    /// The in-flight flag. Derived from the phase so the two can't disagree.
    pub fn is_submitting(&self) -> bool {
        self.phase == SubmissionPhase::Submitting
    }

    pub fn last_error(&self) -> Option<&ContactError> {
        self.last_error.as_ref()
    }

    /// Stores `value` as typed. Input stays live while a submission is in flight.
    pub fn input(&mut self, field: FormField, value: impl Into<String>) {
        self.form.set(field, value.into());
    }

    /// Idle (or a terminal phase) to Submitting. Nothing changes on error.
    pub fn begin_submit(&mut self) -> Result<Submission, ContactError> {
        if self.is_submitting() {
            return Err(ContactError::AlreadySubmitting);
        }
        if let Some(field) = self.form.missing() {
            return Err(ContactError::MissingField(field));
        }

        self.issued += 1;
        self.phase = SubmissionPhase::Submitting;
        self.last_error = None;
        Ok(Submission {
            ticket: Ticket(self.issued),
            message: self.form.to_message(),
        })
    }

    /// Applies the delivery outcome for `ticket`. Returns false when the
    /// ticket is stale or nothing is in flight; the caller schedules the
    /// status reset only on true.
    pub fn settle(&mut self, ticket: Ticket, outcome: Result<(), ContactError>) -> bool {
        if !self.is_submitting() || ticket != self.current() {
            return false;
        }
        match outcome {
            Ok(()) => {
                self.form.clear();
                self.phase = SubmissionPhase::Success;
            }
            Err(err) => {
                self.phase = SubmissionPhase::Error;
                self.last_error = Some(err);
            }
        }
        true
    }

    /// Terminal phase back to Idle. Only the latest submission's reset applies,
    /// and only once.
    pub fn reset_status(&mut self, ticket: Ticket) -> bool {
        if !self.phase.is_terminal() || ticket != self.current() {
            return false;
        }
        self.phase = SubmissionPhase::Idle;
        true
    }

    fn current(&self) -> Ticket {
        Ticket(self.issued)
    }
}
