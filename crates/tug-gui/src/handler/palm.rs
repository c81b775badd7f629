//! Palm reading handler.

use std::sync::Arc;

use iced::Task;
use tug_core::provider::PalmImage;

use super::MessageHandler;
use crate::component::ToastState;
use crate::message::{Message, PalmMessage};
use crate::state::AppState;

/// Handler for palm reading messages.
pub struct PalmHandler;

impl MessageHandler<PalmMessage> for PalmHandler {
    fn handle(&self, state: &mut AppState, msg: PalmMessage) -> Task<Message> {
        match msg {
            PalmMessage::PickImage => Task::perform(
                async {
                    let handle = rfd::AsyncFileDialog::new()
                        .set_title("Choose a Photo of Your Palm")
                        .add_filter("Images", &["jpg", "jpeg", "png"])
                        .pick_file()
                        .await?;
                    Some(handle.read().await)
                },
                |bytes| Message::Palm(PalmMessage::ImagePicked(bytes)),
            ),

            PalmMessage::ImagePicked(Some(bytes)) => {
                match PalmImage::from_bytes(bytes) {
                    Ok(image) => {
                        tracing::debug!(
                            mime = %image.mime_type,
                            size = image.bytes.len(),
                            "Palm image chosen"
                        );
                        state.palm.set_image(image);
                    }
                    Err(err) => state.toast = Some(ToastState::error(err.user_message())),
                }
                Task::none()
            }

            // Dialog cancelled
            PalmMessage::ImagePicked(None) => Task::none(),

            PalmMessage::QuestionChanged(question) => {
                state.palm.set_question(question);
                Task::none()
            }

            PalmMessage::Submit => match state.palm.submit() {
                Ok(Some((ticket, image, question))) => {
                    tracing::info!(ticket = ticket.id(), "Analyzing palm");
                    let provider = Arc::clone(&state.services.provider);
                    Task::perform(
                        async move { provider.analyze_palm(image, question).await },
                        move |result| Message::Palm(PalmMessage::Analyzed(ticket, result)),
                    )
                }
                Ok(None) => Task::none(),
                Err(err) => {
                    state.toast = Some(ToastState::info(err.user_message()));
                    Task::none()
                }
            },

            PalmMessage::Analyzed(ticket, result) => {
                if let Err(err) = &result {
                    tracing::warn!(ticket = ticket.id(), error = %err, "Palm reading failed");
                }
                state.palm.settle(ticket, result);
                Task::none()
            }
        }
    }
}
