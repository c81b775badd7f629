//! Application subscriptions.
//!
//! # Subscription Overview
//!
//! | Subscription | Interval | Condition | Purpose |
//! |--------------|----------|-----------|---------|
//! | Keyboard | Continuous | Always | Escape closes the overlay or goes back |
//! | Status Rotation | 2.5 seconds | Dream or emotion request pending | Rotate the status text |
//! | Toast Dismiss | 5 seconds | Toast visible | Auto-dismiss notifications |
//! | Mantra Player | 250 ms | Mantra selected | Drain play, pause and end events |
//! | Clock | 60 seconds | Always | Keep "today" current past midnight |
//!
//! Conditional subscriptions return `Subscription::none()` when their
//! condition is not met, so no timer runs while nothing is pending.

use std::time::Duration;

use chrono::Local;
use iced::keyboard::{self, key};
use iced::{Subscription, time};
use tug_core::STATUS_ROTATION_PERIOD;

use crate::message::{MantraMessage, Message, ToastMessage};
use crate::state::AppState;

/// Create all application subscriptions.
pub fn create_subscription(state: &AppState) -> Subscription<Message> {
    Subscription::batch([
        keyboard_subscription(),
        status_rotation_subscription(state),
        toast_subscription(state),
        player_subscription(state),
        clock_subscription(),
    ])
}

/// Keyboard event subscription.
fn keyboard_subscription() -> Subscription<Message> {
    keyboard::listen().map(|event| match event {
        keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(key::Named::Escape),
            ..
        } => Message::EscapePressed,
        _ => Message::Noop,
    })
}

/// Status text rotation for pending requests.
///
/// The timer only exists while a request with rotating status is pending,
/// so it stops as soon as the result arrives or the page is left.
fn status_rotation_subscription(state: &AppState) -> Subscription<Message> {
    if state.has_rotating_status() {
        time::every(STATUS_ROTATION_PERIOD).map(|_| Message::StatusTick)
    } else {
        Subscription::none()
    }
}

/// Toast auto-dismiss subscription.
///
/// When a toast notification is visible, polls every 5 seconds to
/// trigger auto-dismissal. Returns no subscription when no toast exists.
fn toast_subscription(state: &AppState) -> Subscription<Message> {
    if state.toast.is_some() {
        time::every(Duration::from_secs(5)).map(|_| Message::Toast(ToastMessage::Dismiss))
    } else {
        Subscription::none()
    }
}

/// Mantra player event drain.
///
/// Runs while the player page shows a mantra; teardown clears the mantra,
/// which stops the timer.
fn player_subscription(state: &AppState) -> Subscription<Message> {
    if state.mantra.mantra().is_some() {
        time::every(Duration::from_millis(250)).map(|_| Message::Mantra(MantraMessage::PlayerTick))
    } else {
        Subscription::none()
    }
}

/// Local date check.
fn clock_subscription() -> Subscription<Message> {
    time::every(Duration::from_secs(60)).map(|_| Message::DayChanged(Local::now().date_naive()))
}
