//! Emotions page: pick how you feel.

use iced::widget::{Space, button, column, row, text};
use iced::{Alignment, Element, Length};
use tug_core::catalog::EMOTION_CARDS;

use crate::message::{Message, NavigationMessage};
use crate::theme::{AMBER_300, SLATE_400, SPACING_LG, SPACING_MD, SPACING_XS, button_secondary};

/// Render the emotions page.
pub fn view_emotions() -> Element<'static, Message> {
    let cards = EMOTION_CARDS.chunks(2).map(|pair| {
        row(pair.iter().map(|&emotion| {
            button(
                column![text(emotion.emoji).size(32), text(emotion.title).size(16)]
                    .spacing(SPACING_XS)
                    .align_x(Alignment::Center),
            )
            .on_press(Message::Navigation(NavigationMessage::ShowEmotionGuidance(
                emotion,
            )))
            .padding(SPACING_LG)
            .width(Length::Fill)
            .style(button_secondary)
            .into()
        }))
        .spacing(SPACING_MD)
        .into()
    });

    column![
        text("How are you feeling?").size(28).color(AMBER_300),
        text("Choose an emotion to receive guidance from the cosmos.")
            .size(14)
            .color(SLATE_400),
        Space::new().height(SPACING_LG),
        column(cards).spacing(SPACING_MD),
    ]
    .spacing(SPACING_XS)
    .into()
}
