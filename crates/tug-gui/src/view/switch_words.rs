//! Switch words page: category list, or the words of one category.

use iced::widget::{Space, button, column, container, row, text};
use iced::{Alignment, Element, Length};
use iced_fonts::lucide;
use tug_core::catalog::{SWITCH_WORD_CATEGORIES, SwitchWordCategory};

use crate::message::{Message, NavigationMessage};
use crate::state::AppState;
use crate::theme::{
    AMBER_300, SLATE_300, SLATE_400, SPACING_LG, SPACING_MD, SPACING_SM, SPACING_XS,
    button_ghost, button_secondary, card,
};

/// Render the switch words page.
pub fn view_switch_words(state: &AppState) -> Element<'_, Message> {
    match state.navigator.selected_switch_word_category() {
        Some(category) => view_category(category),
        None => view_categories(),
    }
}

fn view_categories() -> Element<'static, Message> {
    let categories = SWITCH_WORD_CATEGORIES.iter().map(|category| {
        button(
            column![
                text(category.name).size(18).color(AMBER_300),
                text(category.description).size(13).color(SLATE_400),
            ]
            .spacing(SPACING_XS),
        )
        .on_press(Message::Navigation(
            NavigationMessage::SelectSwitchWordCategory(category),
        ))
        .padding(SPACING_MD)
        .width(Length::Fill)
        .style(button_secondary)
        .into()
    });

    column![
        text("Switch Words").size(28).color(AMBER_300),
        text("Simple words that unlock the power of your subconscious mind.")
            .size(14)
            .color(SLATE_400),
        Space::new().height(SPACING_LG),
        column(categories).spacing(SPACING_SM),
    ]
    .spacing(SPACING_XS)
    .into()
}

fn view_category(category: &'static SwitchWordCategory) -> Element<'static, Message> {
    let back = button(
        row![lucide::chevron_left().size(16), text("All categories").size(14)]
            .spacing(SPACING_XS)
            .align_y(Alignment::Center),
    )
    .on_press(Message::Navigation(NavigationMessage::ResetSwitchWordCategory))
    .style(button_ghost);

    let words = category.words.iter().map(|word| {
        container(
            column![
                text(word.word).size(22).color(AMBER_300),
                text(word.purpose).size(14).color(SLATE_300),
            ]
            .spacing(SPACING_XS),
        )
        .padding(SPACING_MD)
        .width(Length::Fill)
        .style(card)
        .into()
    });

    column![
        back,
        Space::new().height(SPACING_SM),
        text(category.name).size(28).color(AMBER_300),
        text(category.description).size(14).color(SLATE_400),
        Space::new().height(SPACING_LG),
        column(words).spacing(SPACING_SM),
    ]
    .spacing(SPACING_XS)
    .into()
}
