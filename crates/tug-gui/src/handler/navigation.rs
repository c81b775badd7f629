//! Navigation handler.
//!
//! Applies navigator operations and runs the page lifecycle around them:
//! the page being left releases its view state (and the audio handle),
//! the page being entered starts whatever it loads on entry.

use std::sync::Arc;

use iced::Task;
use tug_core::feature::Back;
use tug_core::share::app_share;
use tug_core::{MoreAction, Page};

use super::mantra::playback_tasks;
use super::{MessageHandler, PlatformHandler};
use crate::component::ToastState;
use crate::message::{EmotionMessage, Message, NavigationMessage, PlatformMessage};
use crate::state::AppState;

/// Handler for navigation and selection-state messages.
pub struct NavigationHandler;

impl MessageHandler<NavigationMessage> for NavigationHandler {
    fn handle(&self, state: &mut AppState, msg: NavigationMessage) -> Task<Message> {
        let from = state.navigator.current();
        match msg {
            NavigationMessage::Navigate(page) => {
                if state.navigator.navigate_to(page).is_moved() {
                    transition(state, from, page)
                } else {
                    Task::none()
                }
            }

            NavigationMessage::Back => go_back(state),

            NavigationMessage::ShowEmotionGuidance(emotion) => {
                if state.navigator.show_emotion_guidance(emotion).is_moved() {
                    transition(state, from, Page::EmotionGuidance)
                } else {
                    Task::none()
                }
            }

            NavigationMessage::OpenSwitchWords(category) => {
                if state
                    .navigator
                    .navigate_to_switch_words_from_guidance(category)
                    .is_moved()
                {
                    transition(state, from, Page::SwitchWords)
                } else {
                    Task::none()
                }
            }

            NavigationMessage::SelectSwitchWordCategory(category) => {
                state.navigator.select_switch_word_category(category);
                Task::none()
            }

            NavigationMessage::ResetSwitchWordCategory => {
                state.navigator.reset_switch_word_category();
                Task::none()
            }

            NavigationMessage::More(link) => match state.navigator.open_more_link(link) {
                MoreAction::Navigated(navigation) => {
                    let to = state.navigator.current();
                    if navigation.is_moved() {
                        transition(state, from, to)
                    } else {
                        Task::none()
                    }
                }
                MoreAction::Share => {
                    PlatformHandler.handle(state, PlatformMessage::Share(app_share()))
                }
                MoreAction::OpenRating => {
                    let url = state.settings.general.rate_url.clone();
                    open_configured(state, url, "Rating")
                }
                MoreAction::OpenPrivacyPolicy => {
                    let url = state.settings.general.privacy_policy_url.clone();
                    open_configured(state, url, "The privacy policy")
                }
            },
        }
    }
}

/// Step back inside the current page, or out of it.
fn go_back(state: &mut AppState) -> Task<Message> {
    let current = state.navigator.current();
    let back = match current {
        Page::DreamInterpreter => state.dream.go_back(),
        Page::MantraSoundscape => state.mantra.go_back(&mut state.audio),
        Page::SacredTeachings => state.teachings.go_back(),
        _ => Back::Delegate,
    };
    let audio = playback_tasks(state);

    match back {
        Back::Handled => audio,
        Back::Delegate => match state.navigator.go_back() {
            Some(previous) => Task::batch([audio, transition(state, current, previous)]),
            None => audio,
        },
    }
}

/// Leave `from` and enter `to`.
fn transition(state: &mut AppState, from: Page, to: Page) -> Task<Message> {
    tracing::info!(from = ?from, to = ?to, "Page changed");
    let leave = leave_page(state, from);
    let enter = enter_page(state, to);
    Task::batch([leave, enter])
}

fn leave_page(state: &mut AppState, page: Page) -> Task<Message> {
    match page {
        Page::DreamInterpreter => state.dream.leave(),
        Page::EmotionGuidance => state.emotion.leave(),
        Page::PalmReading => state.palm.leave(),
        Page::Kundali => state.kundali.leave(),
        Page::SacredTeachings => state.teachings.leave(),
        Page::MantraSoundscape => {
            state.mantra.teardown(&mut state.audio);
            return playback_tasks(state);
        }
        Page::Home
        | Page::DailyHoroscope
        | Page::Calendar
        | Page::Emotions
        | Page::More
        | Page::SwitchWords => {}
    }
    Task::none()
}

fn enter_page(state: &mut AppState, page: Page) -> Task<Message> {
    match page {
        Page::EmotionGuidance => {
            let Some((ticket, emotion)) = state.emotion.start(state.navigator.selected_emotion())
            else {
                return Task::none();
            };
            let provider = Arc::clone(&state.services.provider);
            Task::perform(
                async move { provider.emotional_guidance(emotion.title.to_string()).await },
                move |result| Message::Emotion(EmotionMessage::GuidanceLoaded(ticket, result)),
            )
        }
        _ => Task::none(),
    }
}

/// Open an optional external link, or explain that it is not set up.
fn open_configured(state: &mut AppState, url: Option<String>, what: &str) -> Task<Message> {
    match url {
        Some(url) => PlatformHandler.handle(state, PlatformMessage::OpenUrl(url)),
        None => {
            state.toast = Some(ToastState::info(format!(
                "{what} is not available in this version."
            )));
            Task::none()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::state::Services;
    use chrono::NaiveDate;
    use tug_core::catalog::{EMOTION_CARDS, MANTRA_CATEGORIES, SWITCH_WORD_CATEGORIES};
    use tug_core::feature::MantraLevel;
    use tug_core::MoreLink;

    fn state() -> AppState {
        AppState::new(
            Settings::default(),
            Services::offline(),
            NaiveDate::from_ymd_opt(2026, 4, 15).unwrap(),
        )
    }

    fn nav(state: &mut AppState, msg: NavigationMessage) {
        let _ = NavigationHandler.handle(state, msg);
    }

    #[test]
    fn test_entering_emotion_guidance_starts_request() {
        let mut state = state();
        nav(&mut state, NavigationMessage::ShowEmotionGuidance(EMOTION_CARDS[0]));

        assert_eq!(state.navigator.current(), Page::EmotionGuidance);
        assert!(state.emotion.request().is_pending());
        assert!(state.has_rotating_status());
    }

    #[test]
    fn test_leaving_emotion_guidance_drops_request() {
        let mut state = state();
        nav(&mut state, NavigationMessage::ShowEmotionGuidance(EMOTION_CARDS[0]));
        nav(&mut state, NavigationMessage::Back);

        assert_eq!(state.navigator.current(), Page::Home);
        assert!(!state.emotion.request().is_pending());
        assert!(!state.has_rotating_status());
    }

    #[test]
    fn test_back_steps_through_mantra_levels_first() {
        let mut state = state();
        nav(&mut state, NavigationMessage::More(MoreLink::Mantras));
        let category = &MANTRA_CATEGORIES[0];
        state.mantra.select_category(Some(category));
        state
            .mantra
            .select_mantra(Some(&category.mantras[0]), &mut state.audio);

        nav(&mut state, NavigationMessage::Back);
        assert_eq!(state.mantra.level(), MantraLevel::CategorySelected);
        nav(&mut state, NavigationMessage::Back);
        assert_eq!(state.mantra.level(), MantraLevel::NoCategorySelected);
        assert_eq!(state.navigator.current(), Page::MantraSoundscape);
        nav(&mut state, NavigationMessage::Back);
        assert_eq!(state.navigator.current(), Page::Home);
    }

    #[test]
    fn test_leaving_mantras_releases_audio() {
        let mut state = state();
        nav(&mut state, NavigationMessage::More(MoreLink::Mantras));
        let category = &MANTRA_CATEGORIES[0];
        state.mantra.select_category(Some(category));
        state
            .mantra
            .select_mantra(Some(&category.mantras[0]), &mut state.audio);

        nav(&mut state, NavigationMessage::Navigate(Page::Calendar));

        assert_eq!(state.audio.source(), None);
        assert_eq!(state.mantra.level(), MantraLevel::NoCategorySelected);
    }

    #[test]
    fn test_switch_words_from_guidance() {
        let mut state = state();
        let category = &SWITCH_WORD_CATEGORIES[1];
        nav(&mut state, NavigationMessage::OpenSwitchWords(category));

        assert_eq!(state.navigator.current(), Page::SwitchWords);
        assert_eq!(state.navigator.selected_switch_word_category(), Some(category));
    }

    #[test]
    fn test_unconfigured_rating_shows_notice() {
        let mut state = state();
        nav(&mut state, NavigationMessage::More(MoreLink::RateApp));

        assert_eq!(state.navigator.current(), Page::Home);
        assert!(state.toast.is_some());
    }
}
