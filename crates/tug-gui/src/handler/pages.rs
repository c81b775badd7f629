//! Handlers of the content pages without provider calls.

use iced::Task;

use super::MessageHandler;
use crate::message::{CalendarMessage, HoroscopeMessage, Message};
use crate::state::AppState;

/// Handler for month calendar messages.
pub struct CalendarHandler;

impl MessageHandler<CalendarMessage> for CalendarHandler {
    fn handle(&self, state: &mut AppState, msg: CalendarMessage) -> Task<Message> {
        match msg {
            CalendarMessage::PreviousMonth => state.calendar.prev_month(),
            CalendarMessage::NextMonth => state.calendar.next_month(),
        }
        Task::none()
    }
}

/// Handler for daily horoscope messages.
pub struct HoroscopeHandler;

impl MessageHandler<HoroscopeMessage> for HoroscopeHandler {
    fn handle(&self, state: &mut AppState, msg: HoroscopeMessage) -> Task<Message> {
        match msg {
            HoroscopeMessage::SelectSign(sign) => {
                state.horoscope.select_sign(sign);
                state.settings.general.horoscope_sign = sign.name.to_string();
                state.save_settings();
            }
            HoroscopeMessage::SelectTab(tab) => state.horoscope.select_tab(tab),
        }
        Task::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::state::Services;
    use chrono::NaiveDate;
    use tug_core::catalog::ZODIAC_SIGNS;

    fn state() -> AppState {
        AppState::new(
            Settings::default(),
            Services::offline(),
            NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(),
        )
    }

    #[test]
    fn test_month_navigation_crosses_year() {
        let mut state = state();
        let _ = CalendarHandler.handle(&mut state, CalendarMessage::PreviousMonth);
        assert_eq!(state.calendar.title(), "December 2025");

        let _ = CalendarHandler.handle(&mut state, CalendarMessage::NextMonth);
        let _ = CalendarHandler.handle(&mut state, CalendarMessage::NextMonth);
        assert_eq!(state.calendar.title(), "February 2026");
    }

    #[test]
    fn test_sign_choice_is_remembered() {
        let mut state = state();
        let sign = &ZODIAC_SIGNS[4];
        let _ = HoroscopeHandler.handle(&mut state, HoroscopeMessage::SelectSign(sign));

        assert_eq!(state.horoscope.sign(), sign);
        assert_eq!(state.settings.general.horoscope_sign, sign.name);
    }
}
