//! Application settings - persisted user preferences.
//!
//! Settings are loaded from disk at startup and saved when changed. A
//! missing or unreadable file yields the defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tug_gemini::GeminiSettings;

// =============================================================================
// ROOT SETTINGS
// =============================================================================

/// Application settings.
///
/// Serialized to TOML and stored in the user's config directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// General application settings.
    pub general: GeneralSettings,

    /// Guidance provider settings. The API key is read from the environment.
    pub gemini: GeminiSettings,

    /// Offline cache settings.
    pub offline: OfflineSettings,
}

impl Settings {
    /// Load settings from the default path.
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load settings from a specific path.
    pub fn load_from(path: &Path) -> Self {
        std::fs::read_to_string(path)
            .ok()
            .and_then(|content| toml::from_str(&content).ok())
            .unwrap_or_default()
    }

    /// Save settings to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize settings: {}", e))?;

        std::fs::write(path, content).map_err(|e| format!("Failed to write settings: {}", e))
    }

    /// Get the default config file path.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "UniverseGuidance", "TUG")
            .map(|dirs| dirs.config_dir().join("settings.toml"))
            .unwrap_or_else(|| PathBuf::from("settings.toml"))
    }

    /// Get the directory holding the offline caches.
    pub fn cache_dir() -> PathBuf {
        directories::ProjectDirs::from("com", "UniverseGuidance", "TUG")
            .map(|dirs| dirs.cache_dir().join("offline"))
            .unwrap_or_else(|| PathBuf::from("offline-cache"))
    }
}

// =============================================================================
// GENERAL SETTINGS
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Locale code of the voice assistant language.
    pub voice_language: String,

    /// Zodiac sign shown on the daily horoscope page.
    pub horoscope_sign: String,

    /// Store listing opened by "Rate App".
    pub rate_url: Option<String>,

    /// Page opened by "Privacy Policy".
    pub privacy_policy_url: Option<String>,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            voice_language: tug_core::catalog::default_voice_language().code.to_string(),
            horoscope_sign: "Aries".to_string(),
            rate_url: None,
            privacy_policy_url: None,
        }
    }
}

// =============================================================================
// OFFLINE SETTINGS
// =============================================================================

/// Offline cache settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OfflineSettings {
    /// Name of the current cache. Other caches are removed at startup.
    pub cache_version: String,
}

impl Default for OfflineSettings {
    fn default() -> Self {
        Self {
            cache_version: tug_offline::CACHE_NAME.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load_from(&dir.path().join("settings.toml"));
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.general.voice_language, "ta-IN");
        assert_eq!(settings.offline.cache_version, "universe-guidance-v5");
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.toml");
        let mut settings = Settings::default();
        settings.general.horoscope_sign = "Leo".to_string();
        settings.gemini.timeout_secs = 30;

        settings.save_to(&path).unwrap();

        assert_eq!(Settings::load_from(&path), settings);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "[general]\nhoroscope_sign = \"Pisces\"\n").unwrap();

        let settings = Settings::load_from(&path);

        assert_eq!(settings.general.horoscope_sign, "Pisces");
        assert_eq!(settings.general.voice_language, "ta-IN");
        assert_eq!(settings.gemini, GeminiSettings::default());
    }

    #[test]
    fn test_invalid_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "general = 3").unwrap();

        assert_eq!(Settings::load_from(&path), Settings::default());
    }
}
