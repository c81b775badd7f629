//! Voice assistant handler.
//!
//! The assistant state machine decides what happens next; this handler only
//! runs the [`VoiceEffect`] it returns and feeds the result back tagged with
//! the session.

use std::sync::Arc;

use iced::Task;
use tug_core::feature::VoiceEffect;

use super::MessageHandler;
use crate::message::{Message, VoiceMessage};
use crate::state::AppState;

/// Handler for voice assistant messages.
pub struct VoiceHandler;

impl MessageHandler<VoiceMessage> for VoiceHandler {
    fn handle(&self, state: &mut AppState, msg: VoiceMessage) -> Task<Message> {
        match msg {
            VoiceMessage::Open => {
                state.voice.open();
                Task::none()
            }

            VoiceMessage::Close => {
                let effect = state.voice.close();
                run_effect(state, effect)
            }

            VoiceMessage::OrbClicked => {
                let effect = state.voice.orb_clicked();
                run_effect(state, effect)
            }

            VoiceMessage::SelectLanguage(language) => {
                let effect = state.voice.select_language(language);
                state.settings.general.voice_language = language.code.to_string();
                state.save_settings();
                match effect {
                    Some(effect) => run_effect(state, effect),
                    None => Task::none(),
                }
            }

            VoiceMessage::Heard(session, result) => match state.voice.heard(session, result) {
                Some(effect) => run_effect(state, effect),
                None => Task::none(),
            },

            VoiceMessage::Answered(session, result) => {
                match state.voice.answered(session, result) {
                    Some(effect) => run_effect(state, effect),
                    None => Task::none(),
                }
            }

            VoiceMessage::Spoken(session, result) => {
                state.voice.spoken(session, result);
                Task::none()
            }
        }
    }
}

fn run_effect(state: &AppState, effect: VoiceEffect) -> Task<Message> {
    match effect {
        VoiceEffect::Listen { session, language } => {
            tracing::debug!(session, language, "Listening");
            let voice = Arc::clone(&state.services.voice);
            Task::perform(
                async move { voice.listen(language.to_string()).await },
                move |result| Message::Voice(VoiceMessage::Heard(session, result)),
            )
        }

        VoiceEffect::Ask {
            session,
            text,
            language,
        } => {
            let provider = Arc::clone(&state.services.provider);
            Task::perform(
                async move { provider.freeform_query(text, language.to_string()).await },
                move |result| Message::Voice(VoiceMessage::Answered(session, result)),
            )
        }

        VoiceEffect::Speak {
            session,
            text,
            language,
        } => {
            let voice = Arc::clone(&state.services.voice);
            Task::perform(
                async move { voice.speak(text, language.to_string()).await },
                move |result| Message::Voice(VoiceMessage::Spoken(session, result)),
            )
        }

        VoiceEffect::StopListening { session } => {
            tracing::debug!(session, "Stop listening");
            state.services.voice.stop_listening();
            Task::none()
        }

        VoiceEffect::Cancel => {
            state.services.voice.cancel();
            Task::none()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::state::Services;
    use chrono::NaiveDate;
    use tug_core::catalog::VOICE_LANGUAGES;
    use std::sync::Mutex;
    use tug_core::VoiceProvider;
    use tug_core::feature::VoiceStatus;

    /// Voice provider that records control calls.
    #[derive(Default)]
    struct RecordingVoice {
        calls: Mutex<Vec<&'static str>>,
    }

    #[async_trait::async_trait]
    impl VoiceProvider for RecordingVoice {
        async fn listen(&self, _: String) -> tug_core::Result<String> {
            Ok(String::new())
        }

        async fn speak(&self, _: String, _: String) -> tug_core::Result<()> {
            Ok(())
        }

        fn stop_listening(&self) {
            self.calls.lock().unwrap().push("stop_listening");
        }

        fn cancel(&self) {
            self.calls.lock().unwrap().push("cancel");
        }
    }

    fn state() -> AppState {
        AppState::new(
            Settings::default(),
            Services::offline(),
            NaiveDate::from_ymd_opt(2026, 4, 15).unwrap(),
        )
    }

    #[test]
    fn test_language_choice_is_remembered() {
        let mut state = state();
        let _ = VoiceHandler.handle(&mut state, VoiceMessage::SelectLanguage(&VOICE_LANGUAGES[1]));

        assert_eq!(state.voice.language().code, VOICE_LANGUAGES[1].code);
        assert_eq!(state.settings.general.voice_language, VOICE_LANGUAGES[1].code);
    }

    #[test]
    fn test_result_of_closed_session_is_dropped() {
        let mut state = state();
        let _ = VoiceHandler.handle(&mut state, VoiceMessage::Open);
        let _ = VoiceHandler.handle(&mut state, VoiceMessage::OrbClicked);
        assert_eq!(state.voice.status(), VoiceStatus::Listening);

        let _ = VoiceHandler.handle(&mut state, VoiceMessage::Close);
        let _ = VoiceHandler.handle(
            &mut state,
            VoiceMessage::Heard(1, Ok("Will I travel?".to_string())),
        );

        assert!(!state.voice.is_open());
        assert_eq!(state.voice.status(), VoiceStatus::Idle);
        assert_eq!(state.voice.transcript(), None);
    }

    #[test]
    fn test_unavailable_voice_shows_error() {
        let mut state = state();
        let _ = VoiceHandler.handle(&mut state, VoiceMessage::OrbClicked);
        let _ = VoiceHandler.handle(
            &mut state,
            VoiceMessage::Heard(
                1,
                Err(tug_core::GuidanceError::Unsupported {
                    capability: "Voice input",
                }),
            ),
        );

        assert_eq!(state.voice.status(), VoiceStatus::Error);
    }

    #[test]
    fn test_second_orb_click_finishes_the_question() {
        let voice = Arc::new(RecordingVoice::default());
        let services = Services {
            voice: Arc::clone(&voice) as Arc<dyn VoiceProvider>,
            ..Services::offline()
        };
        let mut state = AppState::new(
            Settings::default(),
            services,
            NaiveDate::from_ymd_opt(2026, 4, 15).unwrap(),
        );
        let _ = VoiceHandler.handle(&mut state, VoiceMessage::Open);
        let _ = VoiceHandler.handle(&mut state, VoiceMessage::OrbClicked);
        let _ = VoiceHandler.handle(&mut state, VoiceMessage::OrbClicked);
        assert_eq!(*voice.calls.lock().unwrap(), vec!["stop_listening"]);

        let _ = VoiceHandler.handle(
            &mut state,
            VoiceMessage::Heard(1, Ok("What is my path?".to_string())),
        );

        assert_eq!(state.voice.status(), VoiceStatus::Processing);
        assert_eq!(state.voice.transcript(), Some("What is my path?"));
    }
}
