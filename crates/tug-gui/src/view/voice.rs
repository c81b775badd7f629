//! Voice assistant overlay.
//!
//! Drawn above the current page while open. The orb starts a question or
//! stops listening; the language row switches the locale used for both
//! listening and answering.

use iced::widget::{Space, button, column, container, row, text};
use iced::{Alignment, Border, Element, Length};
use iced_fonts::lucide;
use tug_core::catalog::VOICE_LANGUAGES;
use tug_core::feature::{VoiceAssistant, VoiceStatus};

use crate::message::{Message, VoiceMessage};
use crate::theme::{
    AMBER_300, AMBER_500, BORDER_RADIUS_FULL, NIGHT_700, NIGHT_900, ORB_SIZE, ROSE_400, SLATE_100,
    SLATE_300, SLATE_400, SPACING_LG, SPACING_MD, SPACING_SM, button_ghost,
    button_ghost_selected, overlay,
};

/// Render the voice assistant overlay.
pub fn view_voice_overlay(voice: &VoiceAssistant) -> Element<'_, Message> {
    let close = button(lucide::x().size(24))
        .on_press(Message::Voice(VoiceMessage::Close))
        .style(button_ghost);

    let languages = row(VOICE_LANGUAGES.iter().map(|language| {
        let style = if language == voice.language() {
            button_ghost_selected
        } else {
            button_ghost
        };
        button(text(language.native).size(14))
            .on_press(Message::Voice(VoiceMessage::SelectLanguage(language)))
            .style(style)
            .into()
    }))
    .spacing(SPACING_MD);

    let orb_color = match voice.status() {
        VoiceStatus::Listening => AMBER_300,
        VoiceStatus::Error => ROSE_400,
        VoiceStatus::Idle | VoiceStatus::Processing | VoiceStatus::Speaking => AMBER_500,
    };
    let orb = button(
        container(lucide::message_square().size(40).color(NIGHT_900))
            .center_x(ORB_SIZE)
            .center_y(ORB_SIZE),
    )
    .on_press(Message::Voice(VoiceMessage::OrbClicked))
    .padding(0.0)
    .style(move |_, _| button::Style {
        background: Some(orb_color.into()),
        border: Border {
            radius: BORDER_RADIUS_FULL.into(),
            width: 4.0,
            color: NIGHT_700,
        },
        ..Default::default()
    });

    let status_color = if voice.status() == VoiceStatus::Error {
        ROSE_400
    } else {
        SLATE_300
    };
    let mut content = column![
        row![Space::new().width(Length::Fill), close],
        Space::new().height(SPACING_LG),
        text("Ask the Universe").size(24).color(AMBER_300),
        languages,
        Space::new().height(SPACING_LG),
        orb,
        Space::new().height(SPACING_MD),
        text(voice.status().message()).size(16).color(status_color),
    ]
    .spacing(SPACING_SM)
    .align_x(Alignment::Center);

    if let Some(error) = voice.error().filter(|_| voice.status() == VoiceStatus::Error) {
        content = content.push(text(error).size(14).color(ROSE_400));
    }
    if let Some(transcript) = voice.transcript() {
        content = content.push(
            text(format!("\u{201c}{transcript}\u{201d}"))
                .size(14)
                .color(SLATE_400),
        );
    }
    if let Some(response) = voice.response() {
        content = content.push(text(response).size(16).color(SLATE_100));
    }

    container(content.max_width(480.0).padding(SPACING_LG))
        .center_x(Length::Fill)
        .height(Length::Fill)
        .style(overlay)
        .into()
}
