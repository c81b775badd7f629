//! Sacred teachings page: categories, videos, and the selected video with
//! its key takeaways.

use iced::widget::{Space, button, column, container, row, text};
use iced::{Alignment, Element, Length};
use iced_fonts::lucide;
use tug_core::RequestState;
use tug_core::catalog::{VIDEO_CATEGORIES, Video, VideoCategory};
use tug_core::feature::SacredTeachings;

use crate::component::{view_failure, view_page_header, view_pending, view_section_title};
use crate::message::{Message, TeachingsMessage};
use crate::state::AppState;
use crate::theme::{
    AMBER_300, SLATE_100, SLATE_400, SPACING_LG, SPACING_MD, SPACING_SM, SPACING_XS,
    button_primary, button_secondary, card,
};

/// Render the sacred teachings page.
pub fn view_teachings(state: &AppState) -> Element<'_, Message> {
    let view = &state.teachings;

    let body = match (view.category(), view.video()) {
        (_, Some(video)) => view_player(view, video),
        (Some(category), None) => view_videos(category),
        (None, None) => view_categories(),
    };

    column![
        view_page_header("Sacred Teachings"),
        Space::new().height(SPACING_LG),
        body,
    ]
    .into()
}

fn view_categories() -> Element<'static, Message> {
    column(VIDEO_CATEGORIES.iter().map(|category| {
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
        .on_press(Message::Teachings(TeachingsMessage::SelectCategory(category)))
        .padding(SPACING_MD)
        .width(Length::Fill)
        .style(button_secondary)
        .into()
    }))
    .spacing(SPACING_SM)
    .into()
}

fn view_videos(category: &'static VideoCategory) -> Element<'static, Message> {
    let videos = category.videos.iter().map(|video| {
        button(
            row![
                lucide::play().size(18).color(AMBER_300),
                column![
                    text(video.title).size(16),
                    text(video.speaker).size(13).color(SLATE_400),
                ]
                .spacing(SPACING_XS),
            ]
            .spacing(SPACING_MD)
            .align_y(Alignment::Center),
        )
        .on_press(Message::Teachings(TeachingsMessage::SelectVideo(video)))
        .padding(SPACING_MD)
        .width(Length::Fill)
        .style(button_secondary)
        .into()
    });

    column![
        text(category.name).size(22).color(AMBER_300),
        Space::new().height(SPACING_MD),
        column(videos).spacing(SPACING_SM),
    ]
    .into()
}

fn view_player<'a>(view: &'a SacredTeachings, video: &'static Video) -> Element<'a, Message> {
    let watch = button(
        row![lucide::external_link().size(16), text("Watch on YouTube").size(14)]
            .spacing(SPACING_SM)
            .align_y(Alignment::Center),
    )
    .on_press(Message::Teachings(TeachingsMessage::WatchVideo))
    .padding([SPACING_SM, SPACING_MD])
    .style(button_primary);

    let takeaways: Element<'a, Message> = match view.takeaways().state() {
        RequestState::Idle => button(text("Get Key Takeaways").size(14))
            .on_press(Message::Teachings(TeachingsMessage::RequestTakeaways))
            .padding([SPACING_SM, SPACING_MD])
            .style(button_secondary)
            .into(),
        RequestState::Pending => view_pending("Distilling the wisdom..."),
        RequestState::Failed(message) => view_failure(message),
        RequestState::Succeeded(points) => container(
            column![view_section_title("Key Takeaways")]
                .extend(points.iter().map(|point| {
                    text(format!("• {point}")).size(15).color(SLATE_100).into()
                }))
                .spacing(SPACING_SM),
        )
        .padding(SPACING_MD)
        .width(Length::Fill)
        .style(card)
        .into(),
    };

    column![
        container(
            column![
                text(video.title).size(22).color(AMBER_300),
                text(video.speaker).size(14).color(SLATE_400),
                Space::new().height(SPACING_SM),
                watch,
            ]
            .spacing(SPACING_XS),
        )
        .padding(SPACING_LG)
        .width(Length::Fill)
        .style(card),
        Space::new().height(SPACING_LG),
        takeaways,
    ]
    .into()
}
