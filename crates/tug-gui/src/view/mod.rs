//! View module for The Universe Guidance.
//!
//! Views are pure functions of [`AppState`]. Each page renders its content
//! column; [`view_app`] adds scrolling, the content width limit and the
//! bottom navigation bar.
//!
//! The page content is keyed by [`Page`], so every page change starts a
//! fresh widget tree and the scroll position returns to the top.

mod calendar;
mod dream;
mod emotion_guidance;
mod emotions;
mod home;
mod horoscope;
mod kundali;
mod mantra;
mod more;
mod palm;
mod switch_words;
mod teachings;
mod voice;

use iced::widget::{column, container, keyed_column, scrollable};
use iced::{Element, Length};
use tug_core::Page;

use crate::component::view_nav_bar;
use crate::message::Message;
use crate::state::AppState;
use crate::theme::{CONTENT_WIDTH, SPACING_LG};

pub use voice::view_voice_overlay;

/// Render the current page with the navigation bar.
pub fn view_app(state: &AppState) -> Element<'_, Message> {
    let page = state.navigator.current();

    let content = match page {
        Page::Home => home::view_home(state),
        Page::DailyHoroscope => horoscope::view_horoscope(state),
        Page::Calendar => calendar::view_calendar(state),
        Page::Emotions => emotions::view_emotions(),
        Page::More => more::view_more(),
        Page::SwitchWords => switch_words::view_switch_words(state),
        Page::PalmReading => palm::view_palm(state),
        Page::Kundali => kundali::view_kundali(state),
        Page::EmotionGuidance => emotion_guidance::view_emotion_guidance(state),
        Page::MantraSoundscape => mantra::view_mantra(state),
        Page::SacredTeachings => teachings::view_teachings(state),
        Page::DreamInterpreter => dream::view_dream(state),
    };

    let body: Element<'_, Message> = scrollable(
        container(container(content).max_width(CONTENT_WIDTH))
            .center_x(Length::Fill)
            .padding(SPACING_LG),
    )
    .height(Length::Fill)
    .into();

    column![
        keyed_column([(page, body)]).height(Length::Fill),
        view_nav_bar(page),
    ]
    .into()
}
