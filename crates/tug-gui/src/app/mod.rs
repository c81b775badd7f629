//! Main application module for The Universe Guidance.
//!
//! This module implements the Iced 0.14.0 application using the builder pattern.
//! The architecture follows the Elm pattern: State → Message → Update → View.
//!
//! # Key Design Principles
//!
//! - **All state changes happen in `update()`** - Views are pure functions
//! - **No channels/polling** - Provider calls run through `Task::perform`
//! - **Navigation Core never sees provider results** - Each page view
//!   settles its own request

mod subscription;

use chrono::Local;
use iced::widget::{Space, column, container, row, stack};
use iced::{Element, Length, Subscription, Task, Theme};

use crate::component::view_toast;
use crate::handler::{
    CalendarHandler, DreamHandler, EmotionHandler, HoroscopeHandler, KundaliHandler,
    MantraHandler, MessageHandler, NavigationHandler, PalmHandler, PlatformHandler,
    TeachingsHandler, VoiceHandler,
};
use crate::message::{Message, NavigationMessage, ToastMessage, VoiceMessage};
use crate::service::prepare_offline_cache;
use crate::settings::Settings;
use crate::state::{AppState, Services};
use crate::theme::{SPACING_LG, universe_theme};

// =============================================================================
// APPLICATION
// =============================================================================

/// Main application struct.
///
/// This is the root of the Iced application. It holds the application state
/// and implements the Elm architecture methods.
pub struct App {
    /// All application state.
    pub state: AppState,
}

impl App {
    /// Create a new application instance.
    ///
    /// Called once at startup. Returns the initial state and the offline
    /// cache preparation task.
    pub fn new() -> (Self, Task<Message>) {
        let settings = Settings::load();
        let services = Services::from_settings(&settings);
        let today = Local::now().date_naive();

        let state = AppState::new(settings, services, today)
            .with_settings_path(Settings::config_path());

        let startup = match state.services.cache.clone() {
            Some(cache) => Task::perform(prepare_offline_cache(cache), Message::OfflineReady),
            None => Task::none(),
        };

        (Self { state }, startup)
    }

    /// Update application state in response to a message.
    ///
    /// This is the core of the Elm architecture - all state changes happen here.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            // =================================================================
            // Navigation
            // =================================================================
            Message::Navigation(msg) => NavigationHandler.handle(&mut self.state, msg),

            Message::EscapePressed => {
                if self.state.voice.is_open() {
                    VoiceHandler.handle(&mut self.state, VoiceMessage::Close)
                } else {
                    NavigationHandler.handle(&mut self.state, NavigationMessage::Back)
                }
            }

            // =================================================================
            // Page messages
            // =================================================================
            Message::Calendar(msg) => CalendarHandler.handle(&mut self.state, msg),

            Message::Horoscope(msg) => HoroscopeHandler.handle(&mut self.state, msg),

            Message::Dream(msg) => DreamHandler.handle(&mut self.state, msg),

            Message::Emotion(msg) => EmotionHandler.handle(&mut self.state, msg),

            Message::Palm(msg) => PalmHandler.handle(&mut self.state, msg),

            Message::Kundali(msg) => KundaliHandler.handle(&mut self.state, msg),

            Message::Mantra(msg) => MantraHandler.handle(&mut self.state, msg),

            Message::Teachings(msg) => TeachingsHandler.handle(&mut self.state, msg),

            Message::Voice(msg) => VoiceHandler.handle(&mut self.state, msg),

            // =================================================================
            // Platform actions
            // =================================================================
            Message::Platform(msg) => PlatformHandler.handle(&mut self.state, msg),

            // =================================================================
            // Background events
            // =================================================================
            Message::StatusTick => {
                self.state.dream.tick();
                self.state.emotion.tick();
                Task::none()
            }

            Message::DayChanged(today) => {
                if today != self.state.today {
                    tracing::info!(%today, "Date changed");
                    self.state.today = today;
                }
                Task::none()
            }

            Message::OfflineReady(result) => {
                match result {
                    Ok(count) => tracing::info!(entries = count, "Offline cache ready"),
                    Err(err) => tracing::warn!(error = %err, "Offline cache not available"),
                }
                Task::none()
            }

            // =================================================================
            // Toast notifications
            // =================================================================
            Message::Toast(ToastMessage::Dismiss) => {
                self.state.toast = None;
                Task::none()
            }

            Message::Toast(ToastMessage::Show(toast)) => {
                self.state.toast = Some(toast);
                Task::none()
            }

            Message::Noop => Task::none(),
        }
    }

    /// Render the main window.
    ///
    /// This is a pure function that produces UI based on current state.
    pub fn view(&self) -> Element<'_, Message> {
        let content = crate::view::view_app(&self.state);

        let mut layers = vec![
            container(content)
                .width(Length::Fill)
                .height(Length::Fill)
                .into(),
        ];

        if self.state.voice.is_open() {
            layers.push(crate::view::view_voice_overlay(&self.state.voice));
        }

        // Toast at the bottom, above the navigation bar
        if let Some(toast) = &self.state.toast {
            let toast_row = row![
                Space::new().width(Length::Fill),
                view_toast(toast),
                Space::new().width(Length::Fill),
            ];
            layers.push(
                column![Space::new().height(Length::Fill), toast_row]
                    .padding([96.0, SPACING_LG])
                    .into(),
            );
        }

        stack(layers).into()
    }

    /// Get the window title.
    pub fn title(&self) -> String {
        match self.state.navigator.current() {
            tug_core::Page::Home => "The Universe Guidance".to_string(),
            page => format!("{} - The Universe Guidance", page.title()),
        }
    }

    /// Get the application theme.
    pub fn theme(&self) -> Theme {
        universe_theme()
    }

    /// Subscribe to runtime events.
    pub fn subscription(&self) -> Subscription<Message> {
        subscription::create_subscription(&self.state)
    }
}
