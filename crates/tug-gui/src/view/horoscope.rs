//! Daily horoscope page.

use iced::widget::{Space, button, column, container, row, text};
use iced::{Alignment, Element, Length};
use tug_core::HoroscopeTab;
use tug_core::catalog::ZODIAC_SIGNS;

use crate::component::view_page_header;
use crate::message::{HoroscopeMessage, Message};
use crate::state::AppState;
use crate::theme::{
    SLATE_100, SLATE_400, SPACING_LG, SPACING_MD, SPACING_SM, button_ghost,
    button_ghost_selected, button_primary, button_secondary, card,
};

const SIGNS_PER_ROW: usize = 4;

/// Render the daily horoscope page.
pub fn view_horoscope(state: &AppState) -> Element<'_, Message> {
    let view = &state.horoscope;

    let dates = column![
        text(view.header(state.today)).size(18).color(SLATE_100),
        text(view.subheader(state.today)).size(13).color(SLATE_400),
    ]
    .spacing(2);

    let signs = ZODIAC_SIGNS.chunks(SIGNS_PER_ROW).map(|chunk| {
        row(chunk.iter().map(|sign| {
            let style = if sign == view.sign() {
                button_primary
            } else {
                button_secondary
            };
            button(
                column![text(sign.icon).size(20), text(sign.name).size(11)]
                    .align_x(Alignment::Center),
            )
            .on_press(Message::Horoscope(HoroscopeMessage::SelectSign(sign)))
            .width(Length::Fill)
            .padding(SPACING_SM)
            .style(style)
            .into()
        }))
        .spacing(SPACING_SM)
        .into()
    });

    let tabs = row(HoroscopeTab::all().iter().map(|&tab| {
        let style = if tab == view.tab() {
            button_ghost_selected
        } else {
            button_ghost
        };
        button(text(tab.name()).size(14))
            .on_press(Message::Horoscope(HoroscopeMessage::SelectTab(tab)))
            .style(style)
            .into()
    }))
    .spacing(SPACING_MD);

    let reading = container(text(view.reading()).size(15))
        .padding(SPACING_MD)
        .width(Length::Fill)
        .style(card);

    column![
        view_page_header("Daily Horoscope"),
        Space::new().height(SPACING_MD),
        dates,
        Space::new().height(SPACING_LG),
        column(signs).spacing(SPACING_SM),
        Space::new().height(SPACING_LG),
        tabs,
        Space::new().height(SPACING_SM),
        reading,
    ]
    .into()
}
