//! Kundali handler.

use std::sync::Arc;

use iced::Task;

use super::MessageHandler;
use crate::component::ToastState;
use crate::message::{KundaliMessage, Message};
use crate::state::AppState;

/// Handler for kundali messages.
pub struct KundaliHandler;

impl MessageHandler<KundaliMessage> for KundaliHandler {
    fn handle(&self, state: &mut AppState, msg: KundaliMessage) -> Task<Message> {
        match msg {
            KundaliMessage::FieldChanged(field, value) => {
                state.kundali.set_field(field, value);
                Task::none()
            }

            KundaliMessage::Submit => match state.kundali.submit() {
                Ok(Some((ticket, details))) => {
                    tracing::info!(ticket = ticket.id(), "Generating kundali");
                    let provider = Arc::clone(&state.services.provider);
                    Task::perform(
                        async move { provider.generate_kundali(details).await },
                        move |result| Message::Kundali(KundaliMessage::Generated(ticket, result)),
                    )
                }
                Ok(None) => Task::none(),
                Err(err) => {
                    state.toast = Some(ToastState::info(err.user_message()));
                    Task::none()
                }
            },

            KundaliMessage::Generated(ticket, result) => {
                if let Err(err) = &result {
                    tracing::warn!(ticket = ticket.id(), error = %err, "Kundali generation failed");
                }
                state.kundali.settle(ticket, result);
                Task::none()
            }

            KundaliMessage::StartOver => {
                state.kundali.reset();
                Task::none()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::state::Services;
    use chrono::NaiveDate;
    use tug_core::feature::kundali::KundaliField;

    fn state() -> AppState {
        AppState::new(
            Settings::default(),
            Services::offline(),
            NaiveDate::from_ymd_opt(2026, 4, 15).unwrap(),
        )
    }

    fn fill(state: &mut AppState) {
        let fields = [
            (KundaliField::Name, "Asha"),
            (KundaliField::DateOfBirth, "1990-04-12"),
            (KundaliField::TimeOfBirth, "06:30"),
            (KundaliField::PlaceOfBirth, "Udupi"),
        ];
        for (field, value) in fields {
            let _ = KundaliHandler.handle(
                state,
                KundaliMessage::FieldChanged(field, value.to_string()),
            );
        }
    }

    #[test]
    fn test_incomplete_form_is_not_sent() {
        let mut state = state();
        let _ = KundaliHandler.handle(
            &mut state,
            KundaliMessage::FieldChanged(KundaliField::Name, "Asha".to_string()),
        );
        let _ = KundaliHandler.handle(&mut state, KundaliMessage::Submit);

        assert!(!state.kundali.request().is_pending());
        assert_eq!(
            state.toast,
            Some(ToastState::info("Please fill in all your birth details."))
        );
    }

    #[test]
    fn test_start_over_keeps_details() {
        let mut state = state();
        fill(&mut state);
        let _ = KundaliHandler.handle(&mut state, KundaliMessage::Submit);
        assert!(state.kundali.request().is_pending());

        let _ = KundaliHandler.handle(&mut state, KundaliMessage::StartOver);
        assert!(!state.kundali.request().is_pending());
        assert_eq!(state.kundali.details().place_of_birth, "Udupi");
    }
}
