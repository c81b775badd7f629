//! Toast notification component.
//!
//! Shows a temporary notice that auto-dismisses after a timeout. Used for
//! degraded platform capabilities (share, export, playback) and background
//! results that have no page of their own.

use iced::widget::{Space, button, container, row, text};
use iced::{Alignment, Border, Element, Length, Shadow, Vector};
use iced_fonts::lucide;

use crate::message::Message;
use crate::theme::{
    AMBER_300, BORDER_RADIUS_LG, EMERALD_400, NIGHT_700, NIGHT_800, ROSE_400, SLATE_100,
    SPACING_MD, SPACING_SM, SPACING_XS, button_ghost,
};

/// Toast notification state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastState {
    /// The message to display.
    pub message: String,
    /// Toast type determines the icon and color.
    pub toast_type: ToastType,
}

/// Type of toast notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastType {
    Success,
    Info,
    Error,
}

/// Toast message for handling toast events.
#[derive(Debug, Clone)]
pub enum ToastMessage {
    /// Dismiss the toast.
    Dismiss,
    /// Show a new toast.
    Show(ToastState),
}

impl ToastState {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            toast_type: ToastType::Success,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            toast_type: ToastType::Info,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            toast_type: ToastType::Error,
        }
    }
}

/// Renders a toast notification.
pub fn view_toast(state: &ToastState) -> Element<'_, Message> {
    let icon = match state.toast_type {
        ToastType::Success => lucide::circle_check().size(18).color(EMERALD_400),
        ToastType::Info => lucide::info().size(18).color(AMBER_300),
        ToastType::Error => lucide::circle_x().size(18).color(ROSE_400),
    };

    let dismiss_btn = button(lucide::x().size(14))
        .on_press(Message::Toast(ToastMessage::Dismiss))
        .padding(SPACING_XS)
        .style(button_ghost);

    let content = row![
        icon,
        Space::new().width(SPACING_SM),
        text(&state.message).size(14).color(SLATE_100),
        Space::new().width(SPACING_SM),
        dismiss_btn,
    ]
    .align_y(Alignment::Center)
    .spacing(SPACING_XS);

    container(content)
        .padding([SPACING_SM, SPACING_MD])
        .width(Length::Shrink)
        .style(|_| container::Style {
            background: Some(NIGHT_800.into()),
            border: Border {
                color: NIGHT_700,
                width: 1.0,
                radius: BORDER_RADIUS_LG.into(),
            },
            shadow: Shadow {
                color: iced::Color::from_rgba(0.0, 0.0, 0.0, 0.4),
                offset: Vector::new(0.0, 2.0),
                blur_radius: 8.0,
            },
            ..Default::default()
        })
        .into()
}
