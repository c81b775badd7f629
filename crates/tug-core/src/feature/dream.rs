//! Dream interpreter.

use crate::error::{GuidanceError, Result};
use crate::feature::Back;
use crate::provider::DreamInterpretation;
use crate::request::{Request, StatusRotation, Ticket};

/// Minimum number of characters (after trimming) a dream description needs.
pub const MIN_DREAM_CHARS: usize = 10;

pub const FAILURE_MESSAGE: &str =
    "The realm of dreams is misty right now. We couldn't catch the meaning. Please try again later.";

pub static STATUS_MESSAGES: [&str; 4] = [
    "Entering the dream realm...",
    "Consulting cosmic symbols...",
    "Unraveling the message...",
    "Translating subconscious whispers...",
];

/// Screen shown by the dream interpreter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DreamStage {
    /// Description input.
    Idle,
    Interpreting,
    /// Interpretation or failure message.
    Result,
}

#[derive(Debug, Clone)]
pub struct DreamInterpreter {
    description: String,
    request: Request<DreamInterpretation>,
    rotation: StatusRotation,
}

impl Default for DreamInterpreter {
    fn default() -> Self {
        Self {
            description: String::new(),
            request: Request::new(),
            rotation: StatusRotation::new(&STATUS_MESSAGES),
        }
    }
}

impl DreamInterpreter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_description(&mut self, text: impl Into<String>) {
        self.description = text.into();
    }

    pub fn stage(&self) -> DreamStage {
        if self.request.is_pending() {
            DreamStage::Interpreting
        } else if self.request.data().is_some() || self.request.error().is_some() {
            DreamStage::Result
        } else {
            DreamStage::Idle
        }
    }

    pub fn request(&self) -> &Request<DreamInterpretation> {
        &self.request
    }

    pub fn status_message(&self) -> &'static str {
        self.rotation.current()
    }

    /// Check if the description is long enough to interpret.
    pub fn can_submit(&self) -> bool {
        self.description.trim().chars().count() >= MIN_DREAM_CHARS
    }

    /// Start interpreting the current description.
    ///
    /// Returns the ticket and the text to send, or `Ok(None)` if an
    /// interpretation is already running.
    pub fn submit(&mut self) -> Result<Option<(Ticket, String)>> {
        if !self.can_submit() {
            return Err(GuidanceError::validation(
                "dream",
                "Please describe your dream in at least 10 characters.",
            ));
        }
        let Some(ticket) = self.request.begin() else {
            return Ok(None);
        };
        self.rotation.reset();
        Ok(Some((ticket, self.description.clone())))
    }

    pub fn settle(&mut self, ticket: Ticket, result: Result<DreamInterpretation>) {
        self.request.settle(ticket, result, FAILURE_MESSAGE);
    }

    /// Advance the status text. Ignored unless interpreting.
    pub fn tick(&mut self) {
        if self.request.is_pending() {
            self.rotation.advance();
        }
    }

    /// Step back: from interpreting or result to a blank input, or out of
    /// the page when already idle.
    pub fn go_back(&mut self) -> Back {
        if self.stage() == DreamStage::Idle {
            return Back::Delegate;
        }
        self.request.reset();
        self.rotation.reset();
        self.description.clear();
        Back::Handled
    }

    /// Clear everything when the page is left.
    pub fn leave(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn interpretation() -> DreamInterpretation {
        DreamInterpretation {
            main_themes: "Change".to_string(),
            symbolism: "Water means emotion.".to_string(),
            guidance: "Let it flow.".to_string(),
        }
    }

    #[test]
    fn test_short_description_is_rejected() {
        let mut dream = DreamInterpreter::new();
        dream.set_description("   123456789   ");
        assert!(!dream.can_submit());
        assert!(matches!(
            dream.submit(),
            Err(GuidanceError::Validation { field: "dream", .. })
        ));
        assert_eq!(dream.stage(), DreamStage::Idle);

        dream.set_description("  1234567890 ");
        let (_, text) = dream.submit().unwrap().unwrap();
        assert_eq!(text, "  1234567890 ");
        assert_eq!(dream.stage(), DreamStage::Interpreting);
    }

    #[test]
    fn test_failure_shows_fixed_message() {
        let mut dream = DreamInterpreter::new();
        dream.set_description("I was flying over the sea");
        let (ticket, _) = dream.submit().unwrap().unwrap();
        dream.settle(ticket, Err(GuidanceError::malformed("no symbolism")));
        assert_eq!(dream.stage(), DreamStage::Result);
        assert_eq!(dream.request().error(), Some(FAILURE_MESSAGE));
    }

    #[test]
    fn test_back_from_result_resets_then_delegates() {
        let mut dream = DreamInterpreter::new();
        dream.set_description("I was flying over the sea");
        let (ticket, _) = dream.submit().unwrap().unwrap();
        dream.settle(ticket, Ok(interpretation()));
        assert_eq!(dream.go_back(), Back::Handled);
        assert_eq!(dream.stage(), DreamStage::Idle);
        assert!(dream.description().is_empty());
        assert_eq!(dream.go_back(), Back::Delegate);
    }

    #[test]
    fn test_back_while_interpreting_drops_late_result() {
        let mut dream = DreamInterpreter::new();
        dream.set_description("I was flying over the sea");
        let (ticket, _) = dream.submit().unwrap().unwrap();
        dream.tick();
        assert_eq!(dream.status_message(), STATUS_MESSAGES[1]);
        assert_eq!(dream.go_back(), Back::Handled);
        dream.settle(ticket, Ok(interpretation()));
        assert_eq!(dream.stage(), DreamStage::Idle);
        assert_eq!(dream.status_message(), STATUS_MESSAGES[0]);
    }
}
