//! Share and external-link handler.

use iced::Task;

use super::MessageHandler;
use crate::component::ToastState;
use crate::message::{Message, PlatformMessage};
use crate::service::{ShareOutcome, share};
use crate::state::AppState;

/// Handler for platform messages.
pub struct PlatformHandler;

impl MessageHandler<PlatformMessage> for PlatformHandler {
    fn handle(&self, state: &mut AppState, msg: PlatformMessage) -> Task<Message> {
        match msg {
            PlatformMessage::Share(payload) => Task::perform(share(payload), |outcome| {
                Message::Platform(PlatformMessage::Shared(outcome))
            }),

            PlatformMessage::Shared(ShareOutcome::Opened) => Task::none(),

            PlatformMessage::Shared(ShareOutcome::CopyToClipboard(text)) => {
                state.toast = Some(ToastState::info("Copied to the clipboard"));
                iced::clipboard::write(text)
            }

            PlatformMessage::OpenUrl(url) => {
                if let Err(err) = open::that_detached(&url) {
                    tracing::warn!(%url, error = %err, "Failed to open URL");
                    state.toast = Some(ToastState::error("Could not open the browser"));
                }
                Task::none()
            }
        }
    }
}
