//! "More" page: secondary features and app links.

use iced::widget::{Space, button, column, row, text};
use iced::{Alignment, Element, Length};
use iced_fonts::lucide;
use tug_core::MoreLink;

use crate::message::{Message, NavigationMessage};
use crate::theme::{AMBER_300, SLATE_400, SPACING_LG, SPACING_MD, SPACING_SM, button_secondary};

/// Render the "More" page.
pub fn view_more() -> Element<'static, Message> {
    let links = MoreLink::all().iter().map(|&link| {
        let icon = match link {
            MoreLink::Mantras => lucide::play(),
            MoreLink::YoutubeVideos => lucide::book_open(),
            MoreLink::ShareWithFriends => lucide::users(),
            MoreLink::RateApp => lucide::check(),
            MoreLink::PrivacyPolicy => lucide::shield_check(),
        };
        let trailing = if link.target_page().is_some() {
            lucide::chevron_right()
        } else {
            lucide::external_link()
        };

        button(
            row![
                icon.size(18).color(AMBER_300),
                text(link.label()).size(16).width(Length::Fill),
                trailing.size(16).color(SLATE_400),
            ]
            .spacing(SPACING_MD)
            .align_y(Alignment::Center),
        )
        .on_press(Message::Navigation(NavigationMessage::More(link)))
        .padding(SPACING_MD)
        .width(Length::Fill)
        .style(button_secondary)
        .into()
    });

    column![
        text("More").size(28).color(AMBER_300),
        Space::new().height(SPACING_LG),
        column(links).spacing(SPACING_SM),
    ]
    .into()
}
