//! Palm reading from a photo.

use crate::error::{GuidanceError, Result};
use crate::provider::{PalmImage, PalmReading};
use crate::request::{Request, Ticket};

pub const FAILURE_MESSAGE: &str =
    "The lines of your palm are hidden from us right now. Please try again later.";

#[derive(Debug, Clone, Default)]
pub struct PalmReadingView {
    image: Option<PalmImage>,
    question: String,
    request: Request<PalmReading>,
}

impl PalmReadingView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn image(&self) -> Option<&PalmImage> {
        self.image.as_ref()
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn request(&self) -> &Request<PalmReading> {
        &self.request
    }

    /// Replace the chosen photo, dropping the previous reading.
    pub fn set_image(&mut self, image: PalmImage) {
        self.image = Some(image);
        self.request.reset();
    }

    pub fn set_question(&mut self, question: impl Into<String>) {
        self.question = question.into();
    }

    /// Start a reading of the chosen photo.
    ///
    /// A blank question is sent as no question.
    #[allow(clippy::type_complexity)]
    pub fn submit(&mut self) -> Result<Option<(Ticket, PalmImage, Option<String>)>> {
        let Some(image) = self.image.clone() else {
            return Err(GuidanceError::validation(
                "palm image",
                "Please choose a photo of your palm first.",
            ));
        };
        let Some(ticket) = self.request.begin() else {
            return Ok(None);
        };
        let question = Some(self.question.trim())
            .filter(|q| !q.is_empty())
            .map(str::to_string);
        Ok(Some((ticket, image, question)))
    }

    pub fn settle(&mut self, ticket: Ticket, result: Result<PalmReading>) {
        self.request.settle(ticket, result, FAILURE_MESSAGE);
    }

    /// Clear everything when the page is left.
    pub fn leave(&mut self) {
        *self = Self::default();
    }
}
