//! Home page.
//!
//! Shows today's date, the horoscope of the remembered sign and the entry
//! points of the guidance features.

use iced::widget::{Space, button, column, container, row, text};
use iced::{Alignment, Element, Length};
use iced_fonts::lucide;
use tug_core::Page;

use crate::message::{Message, VoiceMessage};
use crate::state::AppState;
use crate::theme::{
    AMBER_300, SLATE_300, SLATE_400, SPACING_LG, SPACING_MD, SPACING_SM, SPACING_XS,
    button_primary, button_secondary, card,
};

/// Feature tiles in display order.
static TILES: [(Page, &str); 4] = [
    (Page::DailyHoroscope, "Your stars for today"),
    (Page::PalmReading, "Read the lines of your hand"),
    (Page::Kundali, "Your Vedic birth chart"),
    (Page::DreamInterpreter, "Uncover what your dreams mean"),
];

/// Render the home page.
pub fn view_home(state: &AppState) -> Element<'_, Message> {
    let header = column![
        text(state.horoscope.header(state.today)).size(28).color(AMBER_300),
        text("Welcome back. The universe has a message for you.")
            .size(14)
            .color(SLATE_400),
    ]
    .spacing(SPACING_XS);

    let sign = state.horoscope.sign();
    let highlight = button(
        container(
            column![
                text(format!("{} {}", sign.icon, sign.name)).size(18),
                text(state.horoscope.reading()).size(14).color(SLATE_300),
            ]
            .spacing(SPACING_SM),
        )
        .padding(SPACING_MD)
        .width(Length::Fill)
        .style(card),
    )
    .on_press(Message::navigate(Page::DailyHoroscope))
    .padding(0.0)
    .style(button_secondary);

    let tiles = TILES.chunks(2).map(|pair| {
        row(pair.iter().map(|&(page, caption)| view_tile(page, caption)))
            .spacing(SPACING_MD)
            .into()
    });

    let ask = button(
        row![lucide::message_square().size(18), text("Ask the Universe").size(16)]
            .spacing(SPACING_SM)
            .align_y(Alignment::Center),
    )
    .on_press(Message::Voice(VoiceMessage::Open))
    .padding([12.0, 24.0])
    .style(button_primary);

    column![
        header,
        Space::new().height(SPACING_LG),
        highlight,
        Space::new().height(SPACING_LG),
        column(tiles).spacing(SPACING_MD),
        Space::new().height(SPACING_LG),
        container(ask).center_x(Length::Fill),
    ]
    .into()
}

fn view_tile(page: Page, caption: &'static str) -> Element<'static, Message> {
    button(
        column![
            text(page.title()).size(16).color(AMBER_300),
            text(caption).size(12).color(SLATE_400),
        ]
        .spacing(SPACING_XS),
    )
    .on_press(Message::navigate(page))
    .padding(SPACING_MD)
    .width(Length::Fill)
    .style(button_secondary)
    .into()
}
