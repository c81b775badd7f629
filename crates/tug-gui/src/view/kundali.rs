//! Kundali page: birth details form, then the reading.

use iced::widget::{Space, button, column, container, text, text_input};
use iced::{Element, Length};
use tug_core::RequestState;
use tug_core::feature::kundali::KundaliField;

use crate::component::{view_failure, view_page_header, view_pending, view_section_title};
use crate::message::{KundaliMessage, Message};
use crate::state::AppState;
use crate::theme::{
    SLATE_100, SLATE_400, SPACING_LG, SPACING_MD, SPACING_SM, button_primary, button_secondary,
    card,
};

/// Render the kundali page.
pub fn view_kundali(state: &AppState) -> Element<'_, Message> {
    let view = &state.kundali;

    let body: Element<'_, Message> = match view.request().state() {
        RequestState::Idle => view_form(state),
        RequestState::Pending => view_pending("Aligning the planets of your birth..."),
        RequestState::Failed(message) => column![view_failure(message), view_start_over()]
            .spacing(SPACING_LG)
            .into(),
        RequestState::Succeeded(reading) => column![
            view_section("Lagna Chart", &reading.lagna_chart),
            view_section("Kundali Analysis", &reading.kundali_analysis),
            view_section("Palm Leaf Insights", &reading.palm_leaf_insights),
            view_section("Remedies", &reading.remedies),
            view_start_over(),
        ]
        .spacing(SPACING_MD)
        .into(),
    };

    column![
        view_page_header("Kundali"),
        Space::new().height(SPACING_LG),
        body,
    ]
    .into()
}

fn view_form(state: &AppState) -> Element<'_, Message> {
    let details = state.kundali.details();

    let fields = [
        (KundaliField::Name, "Full name", &details.name),
        (KundaliField::DateOfBirth, "Date of birth (YYYY-MM-DD)", &details.date_of_birth),
        (KundaliField::TimeOfBirth, "Time of birth (HH:MM)", &details.time_of_birth),
        (KundaliField::PlaceOfBirth, "Place of birth", &details.place_of_birth),
    ];

    let inputs = fields.into_iter().map(|(field, placeholder, value)| {
        text_input(placeholder, value)
            .on_input(move |text| Message::Kundali(KundaliMessage::FieldChanged(field, text)))
            .padding(SPACING_MD)
            .size(15)
            .into()
    });

    let submit = button(text("Generate Kundali").size(16))
        .on_press_maybe(
            state
                .kundali
                .can_submit()
                .then_some(Message::Kundali(KundaliMessage::Submit)),
        )
        .padding([12.0, 24.0])
        .style(button_primary);

    column![
        text("Enter your birth details for a Vedic reading.")
            .size(14)
            .color(SLATE_400),
        column(inputs).spacing(SPACING_SM),
        submit,
    ]
    .spacing(SPACING_MD)
    .into()
}

fn view_section<'a>(title: &'a str, body: &'a str) -> Element<'a, Message> {
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

fn view_start_over() -> Element<'static, Message> {
    button(text("Start Over").size(14))
        .on_press(Message::Kundali(KundaliMessage::StartOver))
        .padding([SPACING_SM, SPACING_MD])
        .style(button_secondary)
        .into()
}
