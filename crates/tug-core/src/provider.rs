//! Provider boundaries.
//!
//! The guidance provider answers the AI-backed features. The voice provider
//! captures and speaks text. Both are async and object-safe so the GUI can
//! hold them as `Arc<dyn ...>` and hand clones to spawned tasks.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::catalog::{self, SwitchWordCategory};
use crate::error::{GuidanceError, Result};

// =============================================================================
// REQUEST TYPES
// =============================================================================

/// An image of the user's palm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PalmImage {
    /// `image/jpeg` or `image/png`.
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl PalmImage {
    /// Build an image from raw file bytes, detecting the format from its
    /// signature.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        let mime_type = if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
            "image/jpeg"
        } else if bytes.starts_with(b"\x89PNG\r\n\x1a\n") {
            "image/png"
        } else {
            return Err(GuidanceError::validation(
                "palm image",
                "Please choose a JPEG or PNG photo of your palm.",
            ));
        };
        Ok(Self {
            mime_type: mime_type.to_string(),
            bytes,
        })
    }
}

/// Birth details used for a kundali reading.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KundaliDetails {
    pub name: String,
    pub date_of_birth: String,
    pub time_of_birth: String,
    pub place_of_birth: String,
}

impl KundaliDetails {
    /// Check that every field holds something other than whitespace.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("name", &self.name),
            ("date of birth", &self.date_of_birth),
            ("time of birth", &self.time_of_birth),
            ("place of birth", &self.place_of_birth),
        ];
        for (field, value) in fields {
            if value.trim().is_empty() {
                return Err(GuidanceError::validation(
                    field,
                    "Please fill in all your birth details.",
                ));
            }
        }
        Ok(())
    }
}

// =============================================================================
// RESULT TYPES
// =============================================================================

/// Reading of the four major palm lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PalmReading {
    pub life_line: String,
    pub heart_line: String,
    pub head_line: String,
    pub fate_line: String,
}

/// Vedic birth-chart reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KundaliReading {
    pub lagna_chart: String,
    pub kundali_analysis: String,
    pub palm_leaf_insights: String,
    pub remedies: String,
}

/// Switch-word theme attached to emotional guidance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GuidanceTheme {
    #[serde(rename = "Money & Abundance")]
    MoneyAbundance,
    #[serde(rename = "Health & Healing")]
    HealthHealing,
    #[serde(rename = "Love & Relationships")]
    LoveRelationships,
    #[serde(rename = "Success & Career")]
    SuccessCareer,
    #[serde(rename = "Peace & Protection")]
    PeaceProtection,
}

impl GuidanceTheme {
    /// Category name as used by the switch-word catalog.
    pub fn category_name(&self) -> &'static str {
        match self {
            Self::MoneyAbundance => "Money & Abundance",
            Self::HealthHealing => "Health & Healing",
            Self::LoveRelationships => "Love & Relationships",
            Self::SuccessCareer => "Success & Career",
            Self::PeaceProtection => "Peace & Protection",
        }
    }

    /// The switch-word category suggested by this theme.
    pub fn category(&self) -> Option<&'static SwitchWordCategory> {
        catalog::switch_word_category(self.category_name())
    }

    pub const fn all() -> &'static [GuidanceTheme] {
        &[
            Self::MoneyAbundance,
            Self::HealthHealing,
            Self::LoveRelationships,
            Self::SuccessCareer,
            Self::PeaceProtection,
        ]
    }
}

/// Guidance for an emotion, tagged with a switch-word theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmotionalGuidance {
    pub guidance: String,
    pub theme: GuidanceTheme,
}

/// Interpretation of a dream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DreamInterpretation {
    pub main_themes: String,
    pub symbolism: String,
    pub guidance: String,
}

// =============================================================================
// PROVIDER TRAITS
// =============================================================================

/// AI guidance service.
///
/// Implementations validate structured answers before returning them: a
/// missing or blank field is a [`GuidanceError::MalformedResponse`].
#[async_trait]
pub trait GuidanceProvider: Send + Sync {
    async fn analyze_palm(&self, image: PalmImage, question: Option<String>)
    -> Result<PalmReading>;

    async fn generate_kundali(&self, details: KundaliDetails) -> Result<KundaliReading>;

    /// Answer a spoken question in `language` (a BCP-47 locale).
    async fn freeform_query(&self, text: String, language: String) -> Result<String>;

    async fn emotional_guidance(&self, emotion: String) -> Result<EmotionalGuidance>;

    async fn mantra_insight(&self, name: String, meaning: String) -> Result<String>;

    async fn video_takeaways(&self, title: String) -> Result<Vec<String>>;

    async fn interpret_dream(&self, dream: String) -> Result<DreamInterpretation>;
}

/// Speech capture and playback.
#[async_trait]
pub trait VoiceProvider: Send + Sync {
    /// Listen for one utterance in `language` and return its transcript.
    ///
    /// Capture runs until [`VoiceProvider::stop_listening`] is called or the
    /// provider decides the utterance is over.
    async fn listen(&self, language: String) -> Result<String>;

    async fn speak(&self, text: String, language: String) -> Result<()>;

    /// End the capture in progress. The pending [`VoiceProvider::listen`]
    /// call returns what was heard so far.
    fn stop_listening(&self);

    /// Abort any capture or speech in progress.
    fn cancel(&self);
}

/// Provider used when no client could be built.
///
/// Every call fails with [`GuidanceError::NotConfigured`].
#[derive(Debug, Default, Clone, Copy)]
pub struct UnconfiguredProvider;

#[async_trait]
impl GuidanceProvider for UnconfiguredProvider {
    async fn analyze_palm(&self, _: PalmImage, _: Option<String>) -> Result<PalmReading> {
        Err(GuidanceError::NotConfigured)
    }

    async fn generate_kundali(&self, _: KundaliDetails) -> Result<KundaliReading> {
        Err(GuidanceError::NotConfigured)
    }

    async fn freeform_query(&self, _: String, _: String) -> Result<String> {
        Err(GuidanceError::NotConfigured)
    }

    async fn emotional_guidance(&self, _: String) -> Result<EmotionalGuidance> {
        Err(GuidanceError::NotConfigured)
    }

    async fn mantra_insight(&self, _: String, _: String) -> Result<String> {
        Err(GuidanceError::NotConfigured)
    }

    async fn video_takeaways(&self, _: String) -> Result<Vec<String>> {
        Err(GuidanceError::NotConfigured)
    }

    async fn interpret_dream(&self, _: String) -> Result<DreamInterpretation> {
        Err(GuidanceError::NotConfigured)
    }
}

/// Voice provider for platforms without speech support.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableVoice;

#[async_trait]
impl VoiceProvider for UnavailableVoice {
    async fn listen(&self, _: String) -> Result<String> {
        Err(GuidanceError::Unsupported {
            capability: "Voice input",
        })
    }

    async fn speak(&self, _: String, _: String) -> Result<()> {
        Err(GuidanceError::Unsupported {
            capability: "Voice output",
        })
    }

    fn stop_listening(&self) {}

    fn cancel(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palm_image_format_detection() {
        let jpeg = PalmImage::from_bytes(vec![0xFF, 0xD8, 0xFF, 0xE0]).unwrap();
        assert_eq!(jpeg.mime_type, "image/jpeg");

        let png = PalmImage::from_bytes(b"\x89PNG\r\n\x1a\n0000".to_vec()).unwrap();
        assert_eq!(png.mime_type, "image/png");

        assert!(matches!(
            PalmImage::from_bytes(b"GIF89a".to_vec()),
            Err(GuidanceError::Validation { .. })
        ));
    }

    #[test]
    fn test_kundali_requires_every_field() {
        let mut details = KundaliDetails {
            name: "Asha".to_string(),
            date_of_birth: "1990-04-12".to_string(),
            time_of_birth: "06:30".to_string(),
            place_of_birth: "  ".to_string(),
        };
        assert!(matches!(
            details.validate(),
            Err(GuidanceError::Validation {
                field: "place of birth",
                ..
            })
        ));
        details.place_of_birth = "Mangaluru".to_string();
        assert!(details.validate().is_ok());
    }

    #[test]
    fn test_every_theme_resolves_to_a_category() {
        for theme in GuidanceTheme::all() {
            let category = theme.category().expect("category exists");
            assert_eq!(category.name, theme.category_name());
        }
    }

    #[test]
    fn test_theme_wire_names() {
        let guidance: EmotionalGuidance =
            serde_json::from_str(r#"{"guidance":"Breathe.","theme":"Peace & Protection"}"#)
                .unwrap();
        assert_eq!(guidance.theme, GuidanceTheme::PeaceProtection);
        assert!(
            serde_json::from_str::<EmotionalGuidance>(r#"{"guidance":"x","theme":"Other"}"#)
                .is_err()
        );
    }
}
