//! Pending and failed states of a provider request.

use iced::widget::{column, container, row, text};
use iced::{Alignment, Element, Length};
use iced_fonts::lucide;

use crate::message::Message;
use crate::theme::{AMBER_300, ROSE_400, SLATE_300, SPACING_MD, SPACING_SM, card};

/// Spinner icon with the rotating status text.
pub fn view_pending<'a>(status: &'a str) -> Element<'a, Message> {
    container(
        column![
            lucide::loader().size(32).color(AMBER_300),
            text(status).size(16).color(SLATE_300),
        ]
        .spacing(SPACING_MD)
        .align_x(Alignment::Center),
    )
    .width(Length::Fill)
    .center_x(Length::Fill)
    .padding(SPACING_MD)
    .into()
}

/// The fixed failure message of a feature.
pub fn view_failure<'a>(message: &'a str) -> Element<'a, Message> {
    container(
        row![
            lucide::circle_alert().size(18).color(ROSE_400),
            text(message).size(14).color(ROSE_400),
        ]
        .spacing(SPACING_SM)
        .align_y(Alignment::Center),
    )
    .padding(SPACING_MD)
    .width(Length::Fill)
    .style(card)
    .into()
}
