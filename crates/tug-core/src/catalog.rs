//! Static content catalog.
//!
//! Every table here is immutable and lives for the whole program. Pages and
//! selection state hold `&'static` references into these tables, so
//! selecting a category never copies its items.

use crate::page::{HoroscopeTab, Page};

// =============================================================================
// ENTITY TYPES
// =============================================================================

/// A sign of the zodiac.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZodiacSign {
    pub name: &'static str,
    pub icon: &'static str,
}

/// A feeling the user can pick on the emotions page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmotionCard {
    pub title: &'static str,
    pub emoji: &'static str,
}

/// A bottom navigation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub page: Page,
    pub icon: &'static str,
    pub label: &'static str,
}

/// A single switch word and what it is chanted for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwitchWord {
    pub word: &'static str,
    pub purpose: &'static str,
}

/// A themed group of switch words.
#[derive(Debug, PartialEq, Eq)]
pub struct SwitchWordCategory {
    pub name: &'static str,
    pub description: &'static str,
    pub words: &'static [SwitchWord],
}

/// A chantable mantra with its recording.
#[derive(Debug, PartialEq, Eq)]
pub struct Mantra {
    pub name: &'static str,
    pub sanskrit: &'static str,
    pub meaning: &'static str,
    pub audio_url: &'static str,
}

/// A themed group of mantras.
#[derive(Debug, PartialEq, Eq)]
pub struct MantraCategory {
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub mantras: &'static [Mantra],
}

/// A teaching video hosted on YouTube.
#[derive(Debug, PartialEq, Eq)]
pub struct Video {
    pub title: &'static str,
    pub speaker: &'static str,
    pub youtube_id: &'static str,
}

impl Video {
    /// Embeddable player URL for this video.
    pub fn embed_url(&self) -> String {
        format!("https://www.youtube.com/embed/{}", self.youtube_id)
    }
}

/// A themed group of videos.
#[derive(Debug, PartialEq, Eq)]
pub struct VideoCategory {
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub videos: &'static [Video],
}

/// A language the voice assistant can listen and answer in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoiceLanguage {
    /// BCP-47 locale passed to the voice provider.
    pub code: &'static str,
    pub name: &'static str,
    pub native: &'static str,
}

// =============================================================================
// TABLES
// =============================================================================

pub static ZODIAC_SIGNS: [ZodiacSign; 12] = [
    ZodiacSign { name: "Aries", icon: "♈" },
    ZodiacSign { name: "Taurus", icon: "♉" },
    ZodiacSign { name: "Gemini", icon: "♊" },
    ZodiacSign { name: "Cancer", icon: "♋" },
    ZodiacSign { name: "Leo", icon: "♌" },
    ZodiacSign { name: "Virgo", icon: "♍" },
    ZodiacSign { name: "Libra", icon: "♎" },
    ZodiacSign { name: "Scorpio", icon: "♏" },
    ZodiacSign { name: "Sagittarius", icon: "♐" },
    ZodiacSign { name: "Capricorn", icon: "♑" },
    ZodiacSign { name: "Aquarius", icon: "♒" },
    ZodiacSign { name: "Pisces", icon: "♓" },
];

pub static EMOTION_CARDS: [EmotionCard; 8] = [
    EmotionCard { title: "Anxious", emoji: "😥" },
    EmotionCard { title: "Grateful", emoji: "🙏" },
    EmotionCard { title: "Lost", emoji: "🧭" },
    EmotionCard { title: "Hopeful", emoji: "✨" },
    EmotionCard { title: "Angry", emoji: "😠" },
    EmotionCard { title: "Joyful", emoji: "😄" },
    EmotionCard { title: "Sad", emoji: "😢" },
    EmotionCard { title: "Confused", emoji: "🤔" },
];

pub static NAV_ITEMS: [NavItem; 5] = [
    NavItem { page: Page::Home, icon: "⌂", label: "Home" },
    NavItem { page: Page::Calendar, icon: "▦", label: "Calendar" },
    NavItem { page: Page::SwitchWords, icon: "⟲", label: "Switch Words" },
    NavItem { page: Page::Emotions, icon: "♡", label: "Emotions" },
    NavItem { page: Page::More, icon: "☰", label: "More" },
];

pub static SWITCH_WORD_CATEGORIES: [SwitchWordCategory; 5] = [
    SwitchWordCategory {
        name: "Money & Abundance",
        description: "Chant these words to attract wealth and prosperity into your life.",
        words: &[
            SwitchWord { word: "COUNT", purpose: "To attract money." },
            SwitchWord { word: "FIND", purpose: "To increase wealth." },
            SwitchWord { word: "DIVINE", purpose: "For unexpected miracles." },
            SwitchWord { word: "GIGGLE", purpose: "To enjoy the process." },
        ],
    },
    SwitchWordCategory {
        name: "Health & Healing",
        description: "Use these powerful words to promote physical and mental well-being.",
        words: &[
            SwitchWord { word: "BE", purpose: "For good health." },
            SwitchWord { word: "ADJUST", purpose: "To handle discomfort." },
            SwitchWord { word: "CHANGE", purpose: "To relieve pain." },
            SwitchWord { word: "CLEAR", purpose: "To reduce allergies." },
        ],
    },
    SwitchWordCategory {
        name: "Love & Relationships",
        description: "Attract and enhance loving connections in your life.",
        words: &[
            SwitchWord { word: "TOGETHER", purpose: "To build relationships." },
            SwitchWord { word: "LOVE", purpose: "To generate and attract love." },
            SwitchWord { word: "CONNECT", purpose: "To strengthen bonds." },
            SwitchWord { word: "PRAISE", purpose: "To feel beautiful." },
        ],
    },
    SwitchWordCategory {
        name: "Success & Career",
        description: "Chant these words to achieve your goals and advance in your career.",
        words: &[
            SwitchWord { word: "REACH", purpose: "To find what you are looking for." },
            SwitchWord { word: "JUDGE", purpose: "To get a promotion." },
            SwitchWord { word: "VICTORY", purpose: "For success in any endeavor." },
            SwitchWord { word: "ON", purpose: "To create new ideas." },
        ],
    },
    SwitchWordCategory {
        name: "Peace & Protection",
        description: "Find inner calm and shield yourself from negativity.",
        words: &[
            SwitchWord { word: "CANCEL", purpose: "To eliminate negativity." },
            SwitchWord { word: "GUARD", purpose: "For protection from harm." },
            SwitchWord { word: "CRYSTAL", purpose: "For clarity of mind." },
            SwitchWord { word: "UP", purpose: "To boost confidence." },
        ],
    },
];

pub static MANTRA_CATEGORIES: [MantraCategory; 1] = [MantraCategory {
    name: "Peace & Calm",
    description: "Mantras to soothe the mind and cultivate inner tranquility.",
    icon: "☮",
    mantras: &[Mantra {
        name: "Om Shanti Om",
        sanskrit: "ॐ शान्तिः ॐ",
        meaning: "The universal sound, peace, the universal sound.",
        audio_url: "https://cdn.chosic.com/wp-content/uploads/2021/07/OM-Mantra-Chant-For-Meditation.mp3",
    }],
}];

pub static VIDEO_CATEGORIES: [VideoCategory; 1] = [VideoCategory {
    name: "Discourses by Gurus",
    description: "Listen to the timeless wisdom of spiritual masters.",
    icon: "☸",
    videos: &[
        Video {
            title: "The Nature of Reality",
            speaker: "Sadhguru",
            youtube_id: "SQfx1O5i34A",
        },
        Video {
            title: "Finding Your Purpose",
            speaker: "Gaur Gopal Das",
            youtube_id: "169s_bEuTIQ",
        },
    ],
}];

pub static VOICE_LANGUAGES: [VoiceLanguage; 3] = [
    VoiceLanguage { code: "ta-IN", name: "Tamil", native: "தமிழ்" },
    VoiceLanguage { code: "kn-IN", name: "Kannada", native: "ಕನ್ನಡ" },
    VoiceLanguage { code: "tcy-IN", name: "Tulu", native: "ತುಳು" },
];

/// Weekday headers of the calendar grid, Sunday first.
pub const WEEKDAYS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

// =============================================================================
// LOOKUPS
// =============================================================================

/// Find a switch-word category by its exact name.
///
/// Guidance themes use the category names verbatim.
pub fn switch_word_category(name: &str) -> Option<&'static SwitchWordCategory> {
    SWITCH_WORD_CATEGORIES.iter().find(|c| c.name == name)
}

/// Find a zodiac sign by name, ignoring case.
pub fn zodiac_sign(name: &str) -> Option<&'static ZodiacSign> {
    ZODIAC_SIGNS
        .iter()
        .find(|s| s.name.eq_ignore_ascii_case(name))
}

/// Find a voice language by locale code.
pub fn voice_language(code: &str) -> Option<&'static VoiceLanguage> {
    VOICE_LANGUAGES.iter().find(|l| l.code == code)
}

/// Default voice language (Tamil).
pub fn default_voice_language() -> &'static VoiceLanguage {
    &VOICE_LANGUAGES[0]
}

/// Horoscope reading shown for a tab.
pub fn horoscope_reading(sign: &ZodiacSign, tab: HoroscopeTab) -> String {
    let body = match tab {
        HoroscopeTab::Love => {
            "Venus softens your words today. Reach out to someone you have been \
             thinking about and let the conversation unfold without expectations."
        }
        HoroscopeTab::Career => {
            "A steady Saturn rewards patience. Finish what is already on your desk \
             before chasing something new; recognition follows completed work."
        }
        HoroscopeTab::Health => {
            "The Moon asks for rest and rhythm. Drink water early, walk in the \
             evening light and let your breath settle before sleep."
        }
    };
    format!("{} {}: {}", sign.icon, sign.name, body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_switch_word_lookup_matches_theme_names() {
        for name in [
            "Money & Abundance",
            "Health & Healing",
            "Love & Relationships",
            "Success & Career",
            "Peace & Protection",
        ] {
            let category = switch_word_category(name).expect("theme should resolve");
            assert_eq!(category.name, name);
            assert_eq!(category.words.len(), 4);
        }
        assert!(switch_word_category("Unknown").is_none());
    }

    #[test]
    fn test_zodiac_lookup_is_case_insensitive() {
        assert_eq!(zodiac_sign("leo").map(|s| s.icon), Some("♌"));
        assert!(zodiac_sign("Ophiuchus").is_none());
    }

    #[test]
    fn test_nav_items_are_roots() {
        assert!(NAV_ITEMS.iter().all(|item| item.page.is_nav_root()));
    }

    #[test]
    fn test_video_embed_url() {
        let video = &VIDEO_CATEGORIES[0].videos[0];
        assert_eq!(video.embed_url(), "https://www.youtube.com/embed/SQfx1O5i34A");
    }
}
