//! Configuration for the Gemini client.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Environment variables searched for the API key, in order.
pub const API_KEY_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

/// Default model used for every request.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Default model for spoken answers.
pub const DEFAULT_SPEECH_MODEL: &str = "gemini-2.5-flash-preview-tts";

/// Default prebuilt voice for spoken answers.
pub const DEFAULT_VOICE: &str = "Kore";

/// Default REST endpoint.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// User-editable Gemini settings.
///
/// The API key is never stored here; see [`api_key_from_env`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeminiSettings {
    /// Model name, e.g. `gemini-2.5-flash`.
    #[serde(default = "default_model")]
    pub model: String,

    /// Base URL of the REST API.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Text-to-speech model used by the voice assistant.
    #[serde(default = "default_speech_model")]
    pub speech_model: String,

    /// Prebuilt voice name for text-to-speech.
    #[serde(default = "default_voice")]
    pub voice: String,
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    60
}

fn default_speech_model() -> String {
    DEFAULT_SPEECH_MODEL.to_string()
}

fn default_voice() -> String {
    DEFAULT_VOICE.to_string()
}

impl Default for GeminiSettings {
    fn default() -> Self {
        Self {
            model: default_model(),
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            speech_model: default_speech_model(),
            voice: default_voice(),
        }
    }
}

impl GeminiSettings {
    /// Request timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }

    /// Full `generateContent` URL for the configured model.
    #[must_use]
    pub fn generate_content_url(&self) -> String {
        self.model_url(&self.model)
    }

    /// Full `generateContent` URL for the text-to-speech model.
    #[must_use]
    pub fn speech_url(&self) -> String {
        self.model_url(&self.speech_model)
    }

    fn model_url(&self, model: &str) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            model
        )
    }
}

/// Read the API key from the environment.
///
/// Blank values are treated as missing.
pub fn api_key_from_env() -> Option<String> {
    API_KEY_VARS
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .map(|key| key.trim().to_string())
        .find(|key| !key.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = GeminiSettings::default();
        assert_eq!(settings.model, "gemini-2.5-flash");
        assert_eq!(settings.timeout(), Duration::from_secs(60));
    }

    #[test]
    fn test_generate_content_url() {
        let settings = GeminiSettings {
            base_url: "http://127.0.0.1:8080/".to_string(),
            ..Default::default()
        };
        assert_eq!(
            settings.generate_content_url(),
            "http://127.0.0.1:8080/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: GeminiSettings = serde_json::from_str(r#"{"model":"gemini-pro"}"#).unwrap();
        assert_eq!(settings.model, "gemini-pro");
        assert_eq!(settings.base_url, DEFAULT_BASE_URL);
        assert_eq!(settings.timeout_secs, 60);
        assert_eq!(settings.speech_model, DEFAULT_SPEECH_MODEL);
        assert_eq!(settings.voice, "Kore");
    }

    #[test]
    fn test_speech_url_uses_speech_model() {
        let settings = GeminiSettings {
            base_url: "http://127.0.0.1:8080".to_string(),
            speech_model: "tts-test".to_string(),
            ..Default::default()
        };
        assert_eq!(
            settings.speech_url(),
            "http://127.0.0.1:8080/v1beta/models/tts-test:generateContent"
        );
    }
}
