use super::form::ValidationError;
use super::relay::RelayOutcome;
use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedbackKind {
    Error,
    Success,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Feedback {
    pub text: String,
    pub kind: FeedbackKind,
}

impl Feedback {
    pub fn rejected(error: &ValidationError) -> Self {
        Self {
            text: error.to_string(),
            kind: FeedbackKind::Error,
        }
    }

    pub fn delivered(outcome: &RelayOutcome) -> Self {
        let text = match outcome {
            RelayOutcome::Accepted => "Recebemos seus dados! Abrindo o WhatsApp...",
            RelayOutcome::Declined(_) | RelayOutcome::Failed(_) => "Redirecionando para o WhatsApp...",
        };
        Self {
            text: text.to_string(),
            kind: FeedbackKind::Success,
        }
    }

    /// Milliseconds the message stays on screen.
    pub fn lifetime_ms(&self) -> u32 {
        match self.kind {
            FeedbackKind::Error => config::ERROR_FEEDBACK_MS,
            FeedbackKind::Success => config::SUCCESS_FEEDBACK_MS,
        }
    }
}

/// Identifies one `show` call. Only the latest ticket may clear the slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeedbackTicket(u64);

#[derive(Debug, Default)]
pub struct FeedbackSlot {
    current: Option<Feedback>,
    generation: u64,
}

impl FeedbackSlot {
    pub fn show(&mut self, feedback: Feedback) -> FeedbackTicket {
        self.generation += 1;
        self.current = Some(feedback);
        FeedbackTicket(self.generation)
    }

    /// Clears the message if `ticket` is still current. Returns whether
    /// anything changed.
    pub fn expire(&mut self, ticket: FeedbackTicket) -> bool {
        if ticket.0 != self.generation || self.current.is_none() {
            return false;
        }
        self.current = None;
        true
    }

    pub fn current(&self) -> Option<&Feedback> {
        self.current.as_ref()
    }
}
