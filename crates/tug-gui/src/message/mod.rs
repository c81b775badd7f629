//! Message module for The Universe Guidance.
//!
//! This module defines the message hierarchy for the Elm-style architecture.
//! All user interactions and events flow through these message types.
//!
//! Results of provider calls carry the ticket (or voice session) they were
//! issued with, so handlers can drop stale results.

pub mod guidance;
pub mod media;
pub mod voice;

use chrono::NaiveDate;
use tug_core::catalog::{EmotionCard, SwitchWordCategory, ZodiacSign};
use tug_core::share::SharePayload;
use tug_core::{HoroscopeTab, MoreLink, Page};

use crate::service::ShareOutcome;

pub use crate::component::toast::ToastMessage;
pub use guidance::{DreamMessage, EmotionMessage, KundaliMessage, PalmMessage};
pub use media::{MantraMessage, TeachingsMessage};
pub use voice::VoiceMessage;

/// Root message enum for the application.
#[derive(Debug, Clone)]
pub enum Message {
    // =========================================================================
    // Navigation
    // =========================================================================
    Navigation(NavigationMessage),

    // =========================================================================
    // Page messages
    // =========================================================================
    Calendar(CalendarMessage),

    Horoscope(HoroscopeMessage),

    Dream(DreamMessage),

    Emotion(EmotionMessage),

    Palm(PalmMessage),

    Kundali(KundaliMessage),

    Mantra(MantraMessage),

    Teachings(TeachingsMessage),

    Voice(VoiceMessage),

    // =========================================================================
    // Platform actions
    // =========================================================================
    Platform(PlatformMessage),

    // =========================================================================
    // Background events
    // =========================================================================
    /// Status rotation timer for pending requests
    StatusTick,

    /// Local date observed by the clock subscription
    DayChanged(NaiveDate),

    /// Escape key: close the voice overlay or go back
    EscapePressed,

    /// Offline cache install and activate finished
    OfflineReady(Result<usize, String>),

    /// Toast notification events
    Toast(ToastMessage),

    /// No operation
    Noop,
}

/// Navigation and selection-state messages.
#[derive(Debug, Clone, Copy)]
pub enum NavigationMessage {
    /// Open a page (bottom bar, home tiles, in-page links)
    Navigate(Page),

    /// Back arrow of the current page
    Back,

    /// Emotion card picked on the emotions page
    ShowEmotionGuidance(EmotionCard),

    /// Suggested switch words from a guidance result
    OpenSwitchWords(&'static SwitchWordCategory),

    /// Category opened on the switch words page
    SelectSwitchWordCategory(&'static SwitchWordCategory),

    /// Back to the category list on the switch words page
    ResetSwitchWordCategory,

    /// Entry picked on the "More" page
    More(MoreLink),
}

impl Message {
    /// Creates a navigation message to open `page`.
    pub fn navigate(page: Page) -> Self {
        Self::Navigation(NavigationMessage::Navigate(page))
    }

    /// Creates a back navigation message.
    pub fn back() -> Self {
        Self::Navigation(NavigationMessage::Back)
    }
}

/// Share and external-link messages.
#[derive(Debug, Clone)]
pub enum PlatformMessage {
    /// Share through the platform share adapter
    Share(SharePayload),

    /// Share adapter finished
    Shared(ShareOutcome),

    /// Open a URL in the browser
    OpenUrl(String),
}

/// Month calendar messages.
#[derive(Debug, Clone, Copy)]
pub enum CalendarMessage {
    PreviousMonth,
    NextMonth,
}

/// Daily horoscope messages.
#[derive(Debug, Clone, Copy)]
pub enum HoroscopeMessage {
    SelectSign(&'static ZodiacSign),
    SelectTab(HoroscopeTab),
}
