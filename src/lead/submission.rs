use super::dispatch::Dispatch;
use super::feedback::{Feedback, FeedbackSlot, FeedbackTicket};
use super::form::{Field, FormState, Lead};

/// A feedback message that was just put on screen and needs a clear timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Shown {
    pub ticket: FeedbackTicket,
    pub lifetime_ms: u32,
}

#[derive(Debug, PartialEq, Eq)]
pub enum SubmitStep {
    /// Already sending; nothing changed.
    Ignored,
    Rejected(Shown),
    Send(Lead),
}

/// Per-form submission state: field values, the sending flag and the
/// feedback message.
#[derive(Debug, Default)]
pub struct Submission {
    form: FormState,
    sending: bool,
    feedback: FeedbackSlot,
}

impl Submission {
    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn is_sending(&self) -> bool {
        self.sending
    }

    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.current()
    }

    pub fn edit(&mut self, field: Field, value: &str) {
        self.form.set(field, value);
    }

    pub fn submit(&mut self) -> SubmitStep {
        if self.sending {
            return SubmitStep::Ignored;
        }
        match Lead::from_form(&self.form) {
            Err(e) => SubmitStep::Rejected(self.show(Feedback::rejected(&e))),
            Ok(lead) => {
                self.sending = true;
                SubmitStep::Send(lead)
            }
        }
    }

    /// Settles a finished dispatch. Returns the feedback to time out, if any.
    pub fn dispatched(&mut self, dispatch: Dispatch) -> Option<Shown> {
        self.sending = false;
        match dispatch {
            Dispatch::Busy => None,
            Dispatch::Delivered(delivery) => {
                self.form.clear();
                Some(self.show(Feedback::delivered(&delivery.outcome)))
            }
        }
    }

    pub fn expire(&mut self, ticket: FeedbackTicket) -> bool {
        self.feedback.expire(ticket)
    }

    fn show(&mut self, feedback: Feedback) -> Shown {
        let lifetime_ms = feedback.lifetime_ms();
        Shown {
            ticket: self.feedback.show(feedback),
            lifetime_ms,
        }
    }
}
