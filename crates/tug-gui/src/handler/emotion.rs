//! Emotion guidance handler.
//!
//! Export is a three-step flow: ask for a path, capture the window, encode
//! the capture as PNG on the blocking pool.

use iced::{Task, window};

use super::{MessageHandler, PlatformHandler};
use crate::component::ToastState;
use crate::message::{EmotionMessage, Message, PlatformMessage};
use crate::service::export::choose_export_path;
use crate::service::save_screenshot_png;
use crate::state::AppState;

/// Handler for emotion guidance messages.
pub struct EmotionHandler;

impl MessageHandler<EmotionMessage> for EmotionHandler {
    fn handle(&self, state: &mut AppState, msg: EmotionMessage) -> Task<Message> {
        match msg {
            EmotionMessage::GuidanceLoaded(ticket, result) => {
                if let Err(err) = &result {
                    tracing::warn!(ticket = ticket.id(), error = %err, "Emotional guidance failed");
                }
                state.emotion.settle(ticket, result);
                Task::none()
            }

            EmotionMessage::Share => match state.emotion.share_payload() {
                Some(payload) => PlatformHandler.handle(state, PlatformMessage::Share(payload)),
                None => Task::none(),
            },

            EmotionMessage::Export => {
                if state.emotion.request().data().is_none() {
                    return Task::none();
                }
                let Some(file_name) = state.emotion.export_file_name() else {
                    return Task::none();
                };
                Task::perform(choose_export_path(file_name), |path| {
                    Message::Emotion(EmotionMessage::ExportPathChosen(path))
                })
            }

            EmotionMessage::ExportPathChosen(Some(path)) => window::latest()
                .and_then(window::screenshot)
                .map(move |screenshot| {
                    Message::Emotion(EmotionMessage::Captured(path.clone(), screenshot))
                }),

            // Dialog cancelled
            EmotionMessage::ExportPathChosen(None) => Task::none(),

            EmotionMessage::Captured(path, screenshot) => {
                Task::perform(save_screenshot_png(path, screenshot), |result| {
                    Message::Emotion(EmotionMessage::Exported(result))
                })
            }

            EmotionMessage::Exported(Ok(path)) => {
                let name = path
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                state.toast = Some(ToastState::success(format!("Guidance saved as {name}")));
                Task::none()
            }

            EmotionMessage::Exported(Err(err)) => {
                tracing::warn!(error = %err, "Guidance export failed");
                state.toast = Some(ToastState::error(err));
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
    use std::path::PathBuf;
    use tug_core::catalog::EMOTION_CARDS;
    use tug_core::provider::{EmotionalGuidance, GuidanceTheme};

    fn state() -> AppState {
        AppState::new(
            Settings::default(),
            Services::offline(),
            NaiveDate::from_ymd_opt(2026, 4, 15).unwrap(),
        )
    }

    #[test]
    fn test_stale_guidance_is_dropped() {
        let mut state = state();
        let (old, _) = state.emotion.start(Some(EMOTION_CARDS[0])).unwrap();
        let (current, _) = state.emotion.start(Some(EMOTION_CARDS[1])).unwrap();

        let guidance = EmotionalGuidance {
            guidance: "Rest now.".to_string(),
            theme: GuidanceTheme::HealthHealing,
        };
        let _ = EmotionHandler.handle(
            &mut state,
            EmotionMessage::GuidanceLoaded(old, Ok(guidance.clone())),
        );
        assert!(state.emotion.request().is_pending());

        let _ = EmotionHandler.handle(
            &mut state,
            EmotionMessage::GuidanceLoaded(current, Ok(guidance.clone())),
        );
        assert_eq!(state.emotion.request().data(), Some(&guidance));
    }

    #[test]
    fn test_export_result_is_reported() {
        let mut state = state();
        let _ = EmotionHandler.handle(
            &mut state,
            EmotionMessage::Exported(Ok(PathBuf::from("/tmp/cosmic-guidance-lost.png"))),
        );
        assert_eq!(
            state.toast,
            Some(ToastState::success("Guidance saved as cosmic-guidance-lost.png"))
        );

        let _ = EmotionHandler.handle(
            &mut state,
            EmotionMessage::Exported(Err("Failed to save image".to_string())),
        );
        assert_eq!(state.toast, Some(ToastState::error("Failed to save image")));
    }
}
