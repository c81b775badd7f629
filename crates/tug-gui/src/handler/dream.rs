//! Dream interpreter handler.

use std::sync::Arc;

use iced::Task;

use super::MessageHandler;
use crate::component::ToastState;
use crate::message::{DreamMessage, Message};
use crate::state::AppState;

/// Handler for dream interpreter messages.
pub struct DreamHandler;

impl MessageHandler<DreamMessage> for DreamHandler {
    fn handle(&self, state: &mut AppState, msg: DreamMessage) -> Task<Message> {
        match msg {
            DreamMessage::DescriptionChanged(text) => {
                state.dream.set_description(text);
                Task::none()
            }

            DreamMessage::Submit => match state.dream.submit() {
                Ok(Some((ticket, dream))) => {
                    tracing::info!(ticket = ticket.id(), "Interpreting dream");
                    let provider = Arc::clone(&state.services.provider);
                    Task::perform(
                        async move { provider.interpret_dream(dream).await },
                        move |result| Message::Dream(DreamMessage::Interpreted(ticket, result)),
                    )
                }
                Ok(None) => Task::none(),
                Err(err) => {
                    state.toast = Some(ToastState::info(err.user_message()));
                    Task::none()
                }
            },

            DreamMessage::Interpreted(ticket, result) => {
                if let Err(err) = &result {
                    tracing::warn!(ticket = ticket.id(), error = %err, "Dream interpretation failed");
                }
                state.dream.settle(ticket, result);
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
    use tug_core::feature::DreamStage;
    use tug_core::feature::dream::FAILURE_MESSAGE;
    use tug_core::provider::DreamInterpretation;

    fn state() -> AppState {
        AppState::new(
            Settings::default(),
            Services::offline(),
            NaiveDate::from_ymd_opt(2026, 4, 15).unwrap(),
        )
    }

    #[test]
    fn test_short_dream_shows_notice() {
        let mut state = state();
        let _ = DreamHandler.handle(&mut state, DreamMessage::DescriptionChanged("rain".into()));
        let _ = DreamHandler.handle(&mut state, DreamMessage::Submit);

        assert_eq!(state.dream.stage(), DreamStage::Idle);
        assert!(state.toast.is_some());
    }

    #[test]
    fn test_result_of_submitted_dream_is_shown() {
        let mut state = state();
        state.dream.set_description("I was walking through a silver forest");
        let (ticket, _) = state.dream.submit().unwrap().unwrap();

        let interpretation = DreamInterpretation {
            main_themes: "Renewal".to_string(),
            symbolism: "Silver trees mean clarity.".to_string(),
            guidance: "Trust the path.".to_string(),
        };
        let _ = DreamHandler.handle(
            &mut state,
            DreamMessage::Interpreted(ticket, Ok(interpretation.clone())),
        );

        assert_eq!(state.dream.request().data(), Some(&interpretation));
    }

    #[test]
    fn test_failure_uses_fixed_message() {
        let mut state = state();
        state.dream.set_description("I was walking through a silver forest");
        let (ticket, _) = state.dream.submit().unwrap().unwrap();

        let _ = DreamHandler.handle(
            &mut state,
            DreamMessage::Interpreted(ticket, Err(tug_core::GuidanceError::NotConfigured)),
        );

        assert_eq!(state.dream.request().error(), Some(FAILURE_MESSAGE));
    }
}
