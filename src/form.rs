//! Simulated contact-form submission.
//!
//! Idle -> Sending on submit, Sending -> Sent after [`SEND_DELAY_MS`], and
//! Sent -> Idle after a further [`ACK_HOLD_MS`]. Nothing is transmitted.

/// Time spent in the "Sending…" phase.
pub const SEND_DELAY_MS: u32 = 800;
/// Time the "Message Sent!" acknowledgement stays up.
pub const ACK_HOLD_MS: u32 = 3000;

pub const SENDING_LABEL: &str = "Sending…";
pub const SENT_LABEL: &str = "Message Sent!";
pub const SENT_BACKGROUND: &str = "#19C2C2";
/// Label restored when the form has no submit button to read it from.
pub const FALLBACK_LABEL: &str = "Submit";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Idle,
    Sending,
    Sent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEvent {
    Submit,
    /// The send delay elapsed.
    Delivered,
    /// The acknowledgement hold elapsed.
    AckExpired,
}

impl FormPhase {
    /// Next phase, or `None` when `event` does not apply. A submit while a
    /// cycle is in flight is ignored.
    pub fn next(self, event: FormEvent) -> Option<FormPhase> {
        match (self, event) {
            (FormPhase::Idle, FormEvent::Submit) => Some(FormPhase::Sending),
            (FormPhase::Sending, FormEvent::Delivered) => Some(FormPhase::Sent),
            (FormPhase::Sent, FormEvent::AckExpired) => Some(FormPhase::Idle),
            _ => None,
        }
    }
}

/// How the submit button looks in a phase. `Some("")` clears the inline
/// background; `None` leaves it alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonView<'a> {
    pub label: &'a str,
    pub disabled: bool,
    pub background: Option<&'a str>,
}

/// One form's submission cycle together with the label captured at submit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Submission {
    phase: FormPhase,
    original_label: String,
}

impl Submission {
    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    /// Starts a cycle, remembering the button's current label.
    /// Returns `false` if a cycle is already running.
    pub fn submit(&mut self, current_label: Option<String>) -> bool {
        if self.apply(FormEvent::Submit).is_none() {
            return false;
        }
        self.original_label = current_label.unwrap_or_else(|| FALLBACK_LABEL.to_string());
        true
    }

    /// Applies `event` and returns the new phase if it changed.
    pub fn apply(&mut self, event: FormEvent) -> Option<FormPhase> {
        let next = self.phase.next(event)?;
        self.phase = next;
        Some(next)
    }

    pub fn view(&self) -> ButtonView<'_> {
        match self.phase {
            FormPhase::Idle => ButtonView {
                label: &self.original_label,
                disabled: false,
                background: Some(""),
            },
            FormPhase::Sending => ButtonView {
                label: SENDING_LABEL,
                disabled: true,
                background: None,
            },
            FormPhase::Sent => ButtonView {
                label: SENT_LABEL,
                disabled: true,
                background: Some(SENT_BACKGROUND),
            },
        }
    }
}
