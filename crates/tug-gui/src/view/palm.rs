//! Palm reading page.

use iced::widget::{Space, button, column, container, image, row, text, text_input};
use iced::{Alignment, Element, Length};
use iced_fonts::lucide;
use tug_core::RequestState;

use crate::component::{view_failure, view_page_header, view_pending, view_section_title};
use crate::message::{Message, PalmMessage};
use crate::state::AppState;
use crate::theme::{
    SLATE_100, SLATE_400, SPACING_LG, SPACING_MD, SPACING_SM, button_primary, button_secondary,
    card,
};

const PREVIEW_HEIGHT: f32 = 220.0;

/// Render the palm reading page.
pub fn view_palm(state: &AppState) -> Element<'_, Message> {
    let view = &state.palm;
    let pending = view.request().is_pending();

    let preview: Element<'_, Message> = match view.image() {
        Some(palm) => image(image::Handle::from_bytes(palm.bytes.clone()))
            .height(PREVIEW_HEIGHT)
            .into(),
        None => container(
            column![
                lucide::upload().size(32).color(SLATE_400),
                text("No photo chosen yet").size(13).color(SLATE_400),
            ]
            .spacing(SPACING_SM)
            .align_x(Alignment::Center),
        )
        .center_x(Length::Fill)
        .center_y(PREVIEW_HEIGHT)
        .style(card)
        .into(),
    };

    let pick = button(
        row![lucide::folder_open().size(16), text("Choose Palm Photo").size(14)]
            .spacing(SPACING_SM)
            .align_y(Alignment::Center),
    )
    .on_press_maybe((!pending).then_some(Message::Palm(PalmMessage::PickImage)))
    .padding([SPACING_SM, SPACING_MD])
    .style(button_secondary);

    let question = text_input("Anything specific you want to know? (optional)", view.question())
        .on_input(|text| Message::Palm(PalmMessage::QuestionChanged(text)))
        .padding(SPACING_MD)
        .size(15);

    let submit = button(text("Read My Palm").size(16))
        .on_press_maybe(
            (view.image().is_some() && !pending).then_some(Message::Palm(PalmMessage::Submit)),
        )
        .padding([12.0, 24.0])
        .style(button_primary);

    let result: Element<'_, Message> = match view.request().state() {
        RequestState::Idle => Space::new().into(),
        RequestState::Pending => view_pending("Reading the lines of your palm..."),
        RequestState::Failed(message) => view_failure(message),
        RequestState::Succeeded(reading) => column![
            view_line("Life Line", &reading.life_line),
            view_line("Heart Line", &reading.heart_line),
            view_line("Head Line", &reading.head_line),
            view_line("Fate Line", &reading.fate_line),
        ]
        .spacing(SPACING_MD)
        .into(),
    };

    column![
        view_page_header("Palm Reading"),
        Space::new().height(SPACING_LG),
        container(preview).center_x(Length::Fill),
        Space::new().height(SPACING_MD),
        pick,
        Space::new().height(SPACING_MD),
        question,
        Space::new().height(SPACING_MD),
        submit,
        Space::new().height(SPACING_LG),
        result,
    ]
    .into()
}

fn view_line<'a>(title: &'a str, body: &'a str) -> Element<'a, Message> {
    container(
        column![
            view_section_title(title),
            text(body).size(15).color(SLATE_100),
        ]
        .spacing(SPACING_SM),
    )
    .padding(SPACING_MD)
    .width(Length::Fill)
    .style(card)
    .into()
}
