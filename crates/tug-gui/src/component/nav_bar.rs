//! Bottom navigation bar.

use iced::widget::{button, column, container, row, text};
use iced::{Alignment, Element, Length};
use iced_fonts::lucide;
use tug_core::Page;
use tug_core::catalog::NAV_ITEMS;

use crate::message::Message;
use crate::theme::{
    ICON_SIZE_MD, SPACING_SM, SPACING_XS, button_ghost, button_ghost_selected, nav_bar,
};

/// One entry per navigation root. The entry of `current` is highlighted.
pub fn view_nav_bar(current: Page) -> Element<'static, Message> {
    let entries = NAV_ITEMS.iter().map(|item| {
        let icon = match item.page {
            Page::Home => lucide::house(),
            Page::Calendar => lucide::calendar_days(),
            Page::SwitchWords => lucide::refresh_cw(),
            Page::Emotions => lucide::message_square(),
            _ => lucide::user(),
        };
        let style = if item.page == current {
            button_ghost_selected
        } else {
            button_ghost
        };

        button(
            column![icon.size(ICON_SIZE_MD), text(item.label).size(11)]
                .spacing(SPACING_XS)
                .align_x(Alignment::Center),
        )
        .on_press(Message::navigate(item.page))
        .style(style)
        .width(Length::Fill)
        .into()
    });

    container(row(entries).spacing(SPACING_SM).align_y(Alignment::Center))
        .padding(SPACING_SM)
        .width(Length::Fill)
        .style(nav_bar)
        .into()
}
