//! Kundali (Vedic birth chart) reading.

use crate::error::Result;
use crate::provider::{KundaliDetails, KundaliReading};
use crate::request::{Request, Ticket};

pub const FAILURE_MESSAGE: &str =
    "The stars are veiled at the moment. We couldn't prepare your kundali. Please try again later.";

/// Field of the birth-details form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KundaliField {
    Name,
    DateOfBirth,
    TimeOfBirth,
    PlaceOfBirth,
}

#[derive(Debug, Clone, Default)]
pub struct KundaliView {
    details: KundaliDetails,
    request: Request<KundaliReading>,
}

impl KundaliView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn details(&self) -> &KundaliDetails {
        &self.details
    }

    pub fn request(&self) -> &Request<KundaliReading> {
        &self.request
    }

    pub fn set_field(&mut self, field: KundaliField, value: String) {
        let slot = match field {
            KundaliField::Name => &mut self.details.name,
            KundaliField::DateOfBirth => &mut self.details.date_of_birth,
            KundaliField::TimeOfBirth => &mut self.details.time_of_birth,
            KundaliField::PlaceOfBirth => &mut self.details.place_of_birth,
        };
        *slot = value;
    }

    pub fn can_submit(&self) -> bool {
        self.details.validate().is_ok()
    }

    /// Validate the form and start a reading.
    pub fn submit(&mut self) -> Result<Option<(Ticket, KundaliDetails)>> {
        self.details.validate()?;
        Ok(self
            .request
            .begin()
            .map(|ticket| (ticket, self.details.clone())))
    }

    pub fn settle(&mut self, ticket: Ticket, result: Result<KundaliReading>) {
        self.request.settle(ticket, result, FAILURE_MESSAGE);
    }

    /// Start over with the same details.
    pub fn reset(&mut self) {
        self.request.reset();
    }

    pub fn leave(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GuidanceError;

    #[test]
    fn test_submit_validates_form() {
        let mut view = KundaliView::new();
        view.set_field(KundaliField::Name, "Asha".to_string());
        assert!(!view.can_submit());
        assert!(matches!(
            view.submit(),
            Err(GuidanceError::Validation { .. })
        ));

        view.set_field(KundaliField::DateOfBirth, "1990-04-12".to_string());
        view.set_field(KundaliField::TimeOfBirth, "06:30".to_string());
        view.set_field(KundaliField::PlaceOfBirth, "Udupi".to_string());
        let (_, details) = view.submit().unwrap().unwrap();
        assert_eq!(details.place_of_birth, "Udupi");
        assert!(view.request().is_pending());
    }
}
