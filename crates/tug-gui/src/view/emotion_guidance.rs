//! Emotion guidance page.
//!
//! The request starts when the page is entered. A result shows the
//! guidance card with share and export actions, and a link to the switch
//! words matching the guidance theme.

use iced::widget::{Space, button, column, container, row, text};
use iced::{Alignment, Element, Length};
use iced_fonts::lucide;
use tug_core::RequestState;

use crate::component::{view_failure, view_page_header, view_pending};
use crate::message::{EmotionMessage, Message, NavigationMessage};
use crate::state::AppState;
use crate::theme::{
    AMBER_300, SLATE_100, SLATE_400, SPACING_LG, SPACING_MD, SPACING_SM, SPACING_XS,
    button_primary, button_secondary, card,
};

/// Render the emotion guidance page.
pub fn view_emotion_guidance(state: &AppState) -> Element<'_, Message> {
    let view = &state.emotion;

    let body: Element<'_, Message> = match view.request().state() {
        RequestState::Idle => Space::new().into(),
        RequestState::Pending => view_pending(view.status_message()),
        RequestState::Failed(message) => view_failure(message),
        RequestState::Succeeded(guidance) => {
            let (emoji, title) = view
                .emotion()
                .map(|emotion| (emotion.emoji, emotion.title))
                .unwrap_or_default();

            let guidance_card = container(
                column![
                    text(emoji).size(40),
                    text(format!("Feeling {title}")).size(14).color(SLATE_400),
                    text(&guidance.guidance).size(18).color(SLATE_100),
                ]
                .spacing(SPACING_SM)
                .align_x(Alignment::Center),
            )
            .padding(SPACING_LG)
            .width(Length::Fill)
            .style(card);

            let actions = row![
                button(
                    row![lucide::users().size(16), text("Share").size(14)]
                        .spacing(SPACING_XS)
                        .align_y(Alignment::Center),
                )
                .on_press(Message::Emotion(EmotionMessage::Share))
                .padding([SPACING_SM, SPACING_MD])
                .style(button_secondary),
                button(
                    row![lucide::download().size(16), text("Save Image").size(14)]
                        .spacing(SPACING_XS)
                        .align_y(Alignment::Center),
                )
                .on_press(Message::Emotion(EmotionMessage::Export))
                .padding([SPACING_SM, SPACING_MD])
                .style(button_secondary),
            ]
            .spacing(SPACING_SM);

            let mut content = column![guidance_card, Space::new().height(SPACING_MD), actions]
                .align_x(Alignment::Center);

            if let Some(category) = view.suggested_category() {
                content = content.push(Space::new().height(SPACING_LG)).push(
                    button(
                        text(format!("Try the {} switch words", category.name)).size(14),
                    )
                    .on_press(Message::Navigation(NavigationMessage::OpenSwitchWords(
                        category,
                    )))
                    .padding([SPACING_SM, SPACING_MD])
                    .style(button_primary),
                );
            }

            content.into()
        }
    };

    column![
        view_page_header("Guidance"),
        Space::new().height(SPACING_LG),
        text("A message from the cosmos").size(14).color(AMBER_300),
        Space::new().height(SPACING_MD),
        body,
    ]
    .into()
}
