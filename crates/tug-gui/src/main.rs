//! The Universe Guidance - Desktop GUI Application
//!
//! Daily horoscopes, switch words, emotion guidance, palm and kundali
//! readings, mantras, sacred teachings and a dream interpreter.
//!
//! Built with Iced 0.14.0 using the Elm architecture (State, Message, Update, View).

use iced::{Size, window};
use tracing_subscriber::EnvFilter;
use tug_gui::app::App;
use tug_gui::component::LUCIDE_FONT_BYTES;

/// Application entry point.
///
/// Initializes logging and runs the iced application.
pub fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Starting The Universe Guidance");

    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .subscription(App::subscription)
        .font(LUCIDE_FONT_BYTES)
        .window(window::Settings {
            size: Size::new(480.0, 860.0),
            min_size: Some(Size::new(380.0, 600.0)),
            ..Default::default()
        })
        .run()
}
