//! Sacred teachings handler.

use std::sync::Arc;

use iced::Task;

use super::{MessageHandler, PlatformHandler};
use crate::message::{Message, PlatformMessage, TeachingsMessage};
use crate::state::AppState;

/// Handler for sacred teachings messages.
pub struct TeachingsHandler;

impl MessageHandler<TeachingsMessage> for TeachingsHandler {
    fn handle(&self, state: &mut AppState, msg: TeachingsMessage) -> Task<Message> {
        match msg {
            TeachingsMessage::SelectCategory(category) => {
                state.teachings.select_category(Some(category));
                Task::none()
            }

            TeachingsMessage::SelectVideo(video) => {
                state.teachings.select_video(Some(video));
                Task::none()
            }

            TeachingsMessage::WatchVideo => match state.teachings.video_url() {
                Some(url) => PlatformHandler.handle(state, PlatformMessage::OpenUrl(url)),
                None => Task::none(),
            },

            TeachingsMessage::RequestTakeaways => {
                let Some((ticket, video)) = state.teachings.request_takeaways() else {
                    return Task::none();
                };
                let provider = Arc::clone(&state.services.provider);
                Task::perform(
                    async move { provider.video_takeaways(video.title.to_string()).await },
                    move |result| {
                        Message::Teachings(TeachingsMessage::TakeawaysLoaded(ticket, result))
                    },
                )
            }

            TeachingsMessage::TakeawaysLoaded(ticket, result) => {
                if let Err(err) = &result {
                    tracing::warn!(ticket = ticket.id(), error = %err, "Video takeaways failed");
                }
                state.teachings.settle_takeaways(ticket, result);
                Task::none()
            }
        }
    }
}
