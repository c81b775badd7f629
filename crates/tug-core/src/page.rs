//! Page identifiers.
//!
//! This module contains the enums that name the screens of the application:
//! - `Page`: One full-screen view
//! - `HoroscopeTab`: Tabs within the daily horoscope page
//! - `MoreLink`: Entries of the "More" page

// =============================================================================
// PAGE ENUM
// =============================================================================

/// One full-screen view in the application.
///
/// Pages carry no data. Anything a page needs from the page that opened it
/// travels through the selection state of the navigator.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    /// Landing page with the daily highlights
    #[default]
    Home,

    /// Horoscope for the selected zodiac sign
    DailyHoroscope,

    /// Month calendar
    Calendar,

    /// Emotion cards
    Emotions,

    /// Secondary links (mantras, videos, sharing)
    More,

    /// Switch-word categories and their words
    SwitchWords,

    /// AI palm reading from a photo
    PalmReading,

    /// AI Vedic birth chart reading
    Kundali,

    /// AI guidance for the selected emotion
    EmotionGuidance,

    /// Mantra categories, playback and insight
    MantraSoundscape,

    /// Video categories, player and takeaways
    SacredTeachings,

    /// AI dream interpretation
    DreamInterpreter,
}

impl Page {
    /// Get the display title for this page.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::DailyHoroscope => "Daily Horoscope",
            Self::Calendar => "Calendar",
            Self::Emotions => "Emotions",
            Self::More => "More",
            Self::SwitchWords => "Switch Words",
            Self::PalmReading => "Palm Reading",
            Self::Kundali => "Kundali",
            Self::EmotionGuidance => "Emotion Guidance",
            Self::MantraSoundscape => "Mantra Soundscape",
            Self::SacredTeachings => "Sacred Teachings",
            Self::DreamInterpreter => "Dream Interpreter",
        }
    }

    /// Check if this page is reachable from the bottom navigation bar.
    pub fn is_nav_root(&self) -> bool {
        matches!(
            self,
            Self::Home | Self::Calendar | Self::SwitchWords | Self::Emotions | Self::More
        )
    }

    /// Get all pages.
    pub const fn all() -> &'static [Page] {
        &[
            Self::Home,
            Self::DailyHoroscope,
            Self::Calendar,
            Self::Emotions,
            Self::More,
            Self::SwitchWords,
            Self::PalmReading,
            Self::Kundali,
            Self::EmotionGuidance,
            Self::MantraSoundscape,
            Self::SacredTeachings,
            Self::DreamInterpreter,
        ]
    }
}

// =============================================================================
// HOROSCOPE TAB ENUM
// =============================================================================

/// Tabs on the daily horoscope page.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HoroscopeTab {
    /// Love and relationships (default)
    #[default]
    Love,

    /// Career and finances
    Career,

    /// Health and wellbeing
    Health,
}

impl HoroscopeTab {
    /// Get the display name for this tab.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Love => "Love",
            Self::Career => "Career",
            Self::Health => "Health",
        }
    }

    /// Get all tabs in display order.
    pub const fn all() -> &'static [HoroscopeTab] {
        &[Self::Love, Self::Career, Self::Health]
    }
}

// =============================================================================
// MORE LINK ENUM
// =============================================================================

/// Entries listed on the "More" page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoreLink {
    Mantras,
    YoutubeVideos,
    ShareWithFriends,
    RateApp,
    PrivacyPolicy,
}

impl MoreLink {
    /// Get the display label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Mantras => "Mantras",
            Self::YoutubeVideos => "Youtube Videos",
            Self::ShareWithFriends => "Share with Friends",
            Self::RateApp => "Rate App",
            Self::PrivacyPolicy => "Privacy Policy",
        }
    }

    /// Get the page this link opens, if it is an in-app destination.
    pub fn target_page(&self) -> Option<Page> {
        match self {
            Self::Mantras => Some(Page::MantraSoundscape),
            Self::YoutubeVideos => Some(Page::SacredTeachings),
            Self::ShareWithFriends | Self::RateApp | Self::PrivacyPolicy => None,
        }
    }

    /// Get all links in display order.
    pub const fn all() -> &'static [MoreLink] {
        &[
            Self::Mantras,
            Self::YoutubeVideos,
            Self::ShareWithFriends,
            Self::RateApp,
            Self::PrivacyPolicy,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_roots() {
        let roots: Vec<Page> = Page::all()
            .iter()
            .copied()
            .filter(Page::is_nav_root)
            .collect();
        assert_eq!(
            roots,
            vec![
                Page::Home,
                Page::Calendar,
                Page::Emotions,
                Page::More,
                Page::SwitchWords,
            ]
        );
    }

    #[test]
    fn test_more_link_targets() {
        assert_eq!(MoreLink::Mantras.target_page(), Some(Page::MantraSoundscape));
        assert_eq!(
            MoreLink::YoutubeVideos.target_page(),
            Some(Page::SacredTeachings)
        );
        assert_eq!(MoreLink::RateApp.target_page(), None);
    }
}
