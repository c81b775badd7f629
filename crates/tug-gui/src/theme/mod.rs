//! Theme module for The Universe Guidance.
//!
//! A single dark "cosmic" theme: deep indigo background, amber accent.
//!
//! - Color constants used by views for text and accents
//! - `universe_theme()` builds the iced [`Theme`]
//! - Widget style functions (`button_*`, `card`, `overlay`)
//! - Spacing constants (`spacing`)

pub mod spacing;

use iced::widget::{button, container};
use iced::{Border, Color, Shadow, Theme, Vector};

pub use spacing::{
    BORDER_RADIUS_FULL, BORDER_RADIUS_LG, BORDER_RADIUS_SM, CONTENT_WIDTH, ICON_SIZE_MD,
    ICON_SIZE_SM, ORB_SIZE, SPACING_LG, SPACING_MD, SPACING_SM, SPACING_XL, SPACING_XS,
};

// =============================================================================
// COLORS
// =============================================================================

pub const NIGHT_900: Color = Color::from_rgb(0.06, 0.05, 0.16);
pub const NIGHT_800: Color = Color::from_rgb(0.11, 0.10, 0.25);
pub const NIGHT_700: Color = Color::from_rgb(0.17, 0.16, 0.35);
pub const AMBER_300: Color = Color::from_rgb(0.99, 0.83, 0.30);
pub const AMBER_500: Color = Color::from_rgb(0.96, 0.62, 0.04);
pub const SLATE_100: Color = Color::from_rgb(0.95, 0.96, 0.98);
pub const SLATE_300: Color = Color::from_rgb(0.80, 0.84, 0.88);
pub const SLATE_400: Color = Color::from_rgb(0.58, 0.64, 0.72);
pub const ROSE_400: Color = Color::from_rgb(0.98, 0.44, 0.52);
pub const EMERALD_400: Color = Color::from_rgb(0.20, 0.83, 0.60);

const SHADOW: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.35);

// =============================================================================
// THEME CREATION
// =============================================================================

/// Creates the application theme.
pub fn universe_theme() -> Theme {
    Theme::custom(
        "Cosmic".to_string(),
        iced::theme::Palette {
            background: NIGHT_900,
            text: SLATE_100,
            primary: AMBER_500,
            success: EMERALD_400,
            warning: AMBER_300,
            danger: ROSE_400,
        },
    )
}

// =============================================================================
// BUTTON STYLES
// =============================================================================

/// Primary button style - submit and main actions.
pub fn button_primary(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Active => AMBER_500,
        button::Status::Hovered => AMBER_300,
        button::Status::Pressed => AMBER_500,
        button::Status::Disabled => NIGHT_700,
    };
    let text_color = if status == button::Status::Disabled {
        SLATE_400
    } else {
        NIGHT_900
    };
    button::Style {
        background: Some(background.into()),
        text_color,
        border: Border {
            radius: BORDER_RADIUS_SM.into(),
            width: 0.0,
            color: Color::TRANSPARENT,
        },
        shadow: Shadow {
            color: SHADOW,
            offset: Vector::new(0.0, 1.0),
            blur_radius: 2.0,
        },
        ..Default::default()
    }
}

/// Secondary button style - list entries and cards.
pub fn button_secondary(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => NIGHT_700,
        button::Status::Active | button::Status::Disabled => NIGHT_800,
    };
    button::Style {
        background: Some(background.into()),
        text_color: SLATE_100,
        border: Border {
            radius: BORDER_RADIUS_LG.into(),
            width: 1.0,
            color: NIGHT_700,
        },
        ..Default::default()
    }
}

/// Ghost button style - back arrow, navigation bar, tabs.
pub fn button_ghost(_theme: &Theme, status: button::Status) -> button::Style {
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => AMBER_300,
        button::Status::Active => SLATE_300,
        button::Status::Disabled => SLATE_400,
    };
    button::Style {
        background: None,
        text_color,
        ..Default::default()
    }
}

/// Ghost button style for the selected tab or navigation entry.
pub fn button_ghost_selected(_theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: None,
        text_color: AMBER_300,
        ..Default::default()
    }
}

// =============================================================================
// CONTAINER STYLES
// =============================================================================

/// Card container - guidance results and forms.
pub fn card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(NIGHT_800.into()),
        text_color: Some(SLATE_100),
        border: Border {
            radius: BORDER_RADIUS_LG.into(),
            width: 1.0,
            color: NIGHT_700,
        },
        ..Default::default()
    }
}

/// Full-screen overlay backdrop for the voice assistant.
pub fn overlay(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Color::from_rgba(0.02, 0.02, 0.08, 0.94).into()),
        text_color: Some(SLATE_100),
        ..Default::default()
    }
}

/// Bottom navigation bar.
pub fn nav_bar(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(NIGHT_800.into()),
        border: Border {
            width: 1.0,
            color: NIGHT_700,
            ..Default::default()
        },
        ..Default::default()
    }
}
