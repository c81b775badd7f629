//! Dream interpreter page.

use iced::widget::{Space, button, column, container, text, text_input};
use iced::{Element, Length};
use tug_core::RequestState;
use tug_core::feature::DreamStage;

use crate::component::{view_failure, view_page_header, view_pending, view_section_title};
use crate::message::{DreamMessage, Message};
use crate::state::AppState;
use crate::theme::{
    SLATE_100, SLATE_400, SPACING_LG, SPACING_MD, SPACING_SM, button_primary,
    button_secondary, card,
};

/// Render the dream interpreter page.
pub fn view_dream(state: &AppState) -> Element<'_, Message> {
    let view = &state.dream;

    let body: Element<'_, Message> = match view.stage() {
        DreamStage::Idle => {
            let input = text_input("Last night I dreamt that...", view.description())
                .on_input(|text| Message::Dream(DreamMessage::DescriptionChanged(text)))
                .on_submit(Message::Dream(DreamMessage::Submit))
                .padding(SPACING_MD)
                .size(16);

            let submit = button(text("Interpret My Dream").size(16))
                .on_press_maybe(
                    view.can_submit()
                        .then_some(Message::Dream(DreamMessage::Submit)),
                )
                .padding([12.0, 24.0])
                .style(button_primary);

            column![
                text("Describe your dream in as much detail as you remember.")
                    .size(14)
                    .color(SLATE_400),
                input,
                submit,
            ]
            .spacing(SPACING_MD)
            .into()
        }

        DreamStage::Interpreting => view_pending(view.status_message()),

        DreamStage::Result => {
            let result: Element<'_, Message> = match view.request().state() {
                RequestState::Succeeded(interpretation) => column![
                    view_section("Main Themes", &interpretation.main_themes),
                    view_section("Symbolism", &interpretation.symbolism),
                    view_section("Guidance", &interpretation.guidance),
                ]
                .spacing(SPACING_MD)
                .into(),
                RequestState::Failed(message) => view_failure(message),
                RequestState::Idle | RequestState::Pending => Space::new().into(),
            };

            column![
                result,
                button(text("Interpret Another Dream").size(14))
                    .on_press(Message::back())
                    .padding([SPACING_SM, SPACING_MD])
                    .style(button_secondary),
            ]
            .spacing(SPACING_LG)
            .into()
        }
    };

    column![
        view_page_header("Dream Interpreter"),
        Space::new().height(SPACING_LG),
        body,
    ]
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
