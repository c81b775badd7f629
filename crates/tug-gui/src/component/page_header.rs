//! Page header with back arrow.

use iced::widget::{button, row, text};
use iced::{Alignment, Element};
use iced_fonts::lucide;

use crate::message::Message;
use crate::theme::{AMBER_300, SLATE_400, SPACING_SM, button_ghost};

/// Back arrow followed by the page title.
pub fn view_page_header<'a>(title: &'a str) -> Element<'a, Message> {
    let back = button(lucide::chevron_left().size(24))
        .on_press(Message::back())
        .style(button_ghost);

    row![back, text(title).size(24).color(AMBER_300)]
        .spacing(SPACING_SM)
        .align_y(Alignment::Center)
        .into()
}

/// Small uppercase section title.
pub fn view_section_title<'a>(title: &'a str) -> Element<'a, Message> {
    text(title.to_uppercase()).size(12).color(SLATE_400).into()
}
