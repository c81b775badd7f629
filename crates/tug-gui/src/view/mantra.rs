//! Mantra soundscape page.
//!
//! Three levels: category list, mantras of a category, and the player of
//! one mantra. The back arrow steps up one level before leaving the page.

use iced::widget::{Space, button, column, container, row, text};
use iced::{Alignment, Element, Length};
use iced_fonts::lucide;
use tug_core::RequestState;
use tug_core::catalog::{MANTRA_CATEGORIES, Mantra, MantraCategory};
use tug_core::feature::MantraSoundscape;

use crate::component::{view_failure, view_page_header, view_pending};
use crate::message::{MantraMessage, Message};
use crate::state::AppState;
use crate::theme::{
    AMBER_300, BORDER_RADIUS_FULL, SLATE_100, SLATE_300, SLATE_400, SPACING_LG, SPACING_MD,
    SPACING_SM, SPACING_XS, button_primary, button_secondary, card,
};

/// Render the mantra soundscape page.
pub fn view_mantra(state: &AppState) -> Element<'_, Message> {
    let view = &state.mantra;

    let body = match (view.category(), view.mantra()) {
        (_, Some(mantra)) => view_player(view, mantra),
        (Some(category), None) => view_mantras(category),
        (None, None) => view_categories(),
    };

    column![
        view_page_header("Mantra Soundscape"),
        Space::new().height(SPACING_LG),
        body,
    ]
    .into()
}

fn view_categories() -> Element<'static, Message> {
    column(MANTRA_CATEGORIES.iter().map(|category| {
        button(
            row![
                text(category.icon).size(28),
                column![
                    text(category.name).size(18).color(AMBER_300),
                    text(category.description).size(13).color(SLATE_400),
                ]
                .spacing(SPACING_XS),
            ]
            .spacing(SPACING_MD)
            .align_y(Alignment::Center),
        )
        .on_press(Message::Mantra(MantraMessage::SelectCategory(category)))
        .padding(SPACING_MD)
        .width(Length::Fill)
        .style(button_secondary)
        .into()
    }))
    .spacing(SPACING_SM)
    .into()
}

fn view_mantras(category: &'static MantraCategory) -> Element<'static, Message> {
    let mantras = category.mantras.iter().map(|mantra| {
        button(
            column![
                text(mantra.name).size(18),
                text(mantra.sanskrit).size(14).color(SLATE_400),
            ]
            .spacing(SPACING_XS),
        )
        .on_press(Message::Mantra(MantraMessage::SelectMantra(mantra)))
        .padding(SPACING_MD)
        .width(Length::Fill)
        .style(button_secondary)
        .into()
    });

    column![
        text(category.name).size(22).color(AMBER_300),
        Space::new().height(SPACING_MD),
        column(mantras).spacing(SPACING_SM),
    ]
    .into()
}

fn view_player<'a>(view: &'a MantraSoundscape, mantra: &'static Mantra) -> Element<'a, Message> {
    let (icon, label) = if view.is_playing() {
        (lucide::pause(), "Pause")
    } else {
        (lucide::play(), "Play")
    };

    let toggle = button(
        row![icon.size(20), text(label).size(16)]
            .spacing(SPACING_SM)
            .align_y(Alignment::Center),
    )
    .on_press(Message::Mantra(MantraMessage::TogglePlayback))
    .padding([12.0, 32.0])
    .style(|theme, status| {
        let mut style = button_primary(theme, status);
        style.border.radius = BORDER_RADIUS_FULL.into();
        style
    });

    let insight: Element<'a, Message> = match view.insight().state() {
        RequestState::Idle => button(text("Reveal Spiritual Insight").size(14))
            .on_press(Message::Mantra(MantraMessage::RequestInsight))
            .padding([SPACING_SM, SPACING_MD])
            .style(button_secondary)
            .into(),
        RequestState::Pending => view_pending("Seeking deeper meaning..."),
        RequestState::Failed(message) => view_failure(message),
        RequestState::Succeeded(text_body) => container(text(text_body).size(15).color(SLATE_100))
            .padding(SPACING_MD)
            .width(Length::Fill)
            .style(card)
            .into(),
    };

    column![
        container(
            column![
                text(mantra.sanskrit).size(28).color(AMBER_300),
                text(mantra.name).size(18),
                text(mantra.meaning).size(14).color(SLATE_300),
                Space::new().height(SPACING_MD),
                toggle,
            ]
            .spacing(SPACING_SM)
            .align_x(Alignment::Center),
        )
        .padding(SPACING_LG)
        .width(Length::Fill)
        .style(card),
        Space::new().height(SPACING_LG),
        insight,
    ]
    .align_x(Alignment::Center)
    .into()
}
