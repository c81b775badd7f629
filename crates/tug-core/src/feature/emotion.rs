//! Guidance for a selected emotion.

use crate::catalog::{EmotionCard, SwitchWordCategory};
use crate::error::Result;
use crate::provider::EmotionalGuidance;
use crate::request::{Request, StatusRotation, Ticket};
use crate::share::{self, SharePayload};

pub const FAILURE_MESSAGE: &str = "The cosmos is quiet right now. Please try again later.";

pub const NO_EMOTION_MESSAGE: &str = "No emotion selected.";

pub static STATUS_MESSAGES: [&str; 3] = [
    "Connecting with your inner self...",
    "Listening to the whispers of the cosmos...",
    "Translating celestial wisdom...",
];

#[derive(Debug, Clone)]
pub struct EmotionGuidanceView {
    emotion: Option<EmotionCard>,
    request: Request<EmotionalGuidance>,
    rotation: StatusRotation,
}

impl Default for EmotionGuidanceView {
    fn default() -> Self {
        Self {
            emotion: None,
            request: Request::new(),
            rotation: StatusRotation::new(&STATUS_MESSAGES),
        }
    }
}

impl EmotionGuidanceView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emotion(&self) -> Option<EmotionCard> {
        self.emotion
    }

    pub fn request(&self) -> &Request<EmotionalGuidance> {
        &self.request
    }

    pub fn status_message(&self) -> &'static str {
        self.rotation.current()
    }

    /// Start fetching guidance when the page is entered.
    ///
    /// Without an emotion the view fails right away and no call is made.
    pub fn start(&mut self, emotion: Option<EmotionCard>) -> Option<(Ticket, EmotionCard)> {
        self.request.reset();
        self.rotation.reset();
        self.emotion = emotion;
        let Some(emotion) = emotion else {
            self.request.fail(NO_EMOTION_MESSAGE);
            return None;
        };
        let ticket = self.request.begin()?;
        Some((ticket, emotion))
    }

    pub fn settle(&mut self, ticket: Ticket, result: Result<EmotionalGuidance>) {
        self.request.settle(ticket, result, FAILURE_MESSAGE);
    }

    pub fn tick(&mut self) {
        if self.request.is_pending() {
            self.rotation.advance();
        }
    }

    /// Drop any call in flight when the page is left.
    pub fn leave(&mut self) {
        self.request.reset();
    }

    /// Switch-word category matching the guidance theme.
    pub fn suggested_category(&self) -> Option<&'static SwitchWordCategory> {
        self.request.data().and_then(|g| g.theme.category())
    }

    pub fn share_payload(&self) -> Option<SharePayload> {
        let guidance = self.request.data()?;
        let emotion = self.emotion?;
        Some(share::guidance_share(emotion.title, &guidance.guidance))
    }

    pub fn export_file_name(&self) -> Option<String> {
        self.emotion
            .map(|emotion| share::guidance_export_file_name(emotion.title))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::EMOTION_CARDS;
    use crate::provider::GuidanceTheme;

    #[test]
    fn test_missing_emotion_fails_without_call() {
        let mut view = EmotionGuidanceView::new();
        assert!(view.start(None).is_none());
        assert_eq!(view.request().error(), Some(NO_EMOTION_MESSAGE));
    }

    #[test]
    fn test_suggested_category_and_share() {
        let mut view = EmotionGuidanceView::new();
        let (ticket, emotion) = view.start(Some(EMOTION_CARDS[2])).unwrap();
        assert_eq!(emotion.title, "Lost");
        view.settle(
            ticket,
            Ok(EmotionalGuidance {
                guidance: "Every path begins with one step.".to_string(),
                theme: GuidanceTheme::SuccessCareer,
            }),
        );
        assert_eq!(
            view.suggested_category().map(|c| c.name),
            Some("Success & Career")
        );
        let payload = view.share_payload().unwrap();
        assert!(payload.text.starts_with("Feeling Lost, I received this guidance:"));
        assert_eq!(
            view.export_file_name().as_deref(),
            Some("cosmic-guidance-lost.png")
        );
    }
}
