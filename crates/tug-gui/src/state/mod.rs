//! Application state.
//!
//! [`AppState`] holds the navigator, one view state per page and the
//! services the handlers call into. Views read it; only handlers change it.

use std::path::PathBuf;
use std::sync::Arc;

use chrono::NaiveDate;
use tug_audio::{MediaPlayer, MicrophoneVoice, NoOutputPlayer, RodioPlayer, SpeechService};
use tug_core::feature::{
    DreamInterpreter, EmotionGuidanceView, HoroscopeView, KundaliView, MantraSoundscape,
    PalmReadingView, SacredTeachings, VoiceAssistant,
};
use tug_core::provider::{UnavailableVoice, UnconfiguredProvider};
use tug_core::{CalendarView, GuidanceProvider, Navigator, VoiceProvider};
use tug_gemini::GeminiClient;
use tug_offline::OfflineCache;

use crate::component::ToastState;
use crate::service::DesktopAudio;
use crate::settings::Settings;

// =============================================================================
// SERVICES
// =============================================================================

/// External boundaries used by the handlers.
#[derive(Clone)]
pub struct Services {
    pub provider: Arc<dyn GuidanceProvider>,
    pub voice: Arc<dyn VoiceProvider>,
    pub player: Arc<dyn MediaPlayer>,
    pub cache: Option<OfflineCache>,
}

impl Services {
    /// Build the services from the settings and environment.
    ///
    /// Without an API key every guidance request fails with a "not
    /// configured" error instead of the app refusing to start. Voice needs
    /// both the API key and a microphone.
    pub fn from_settings(settings: &Settings) -> Self {
        let client = match GeminiClient::from_env(settings.gemini.clone()) {
            Ok(client) => {
                tracing::info!(model = %settings.gemini.model, "Gemini provider ready");
                Some(Arc::new(client))
            }
            Err(err) => {
                tracing::warn!(error = %err, "Guidance provider not configured");
                None
            }
        };
        let provider: Arc<dyn GuidanceProvider> = match &client {
            Some(client) => Arc::clone(client) as Arc<dyn GuidanceProvider>,
            None => Arc::new(UnconfiguredProvider),
        };
        let voice: Arc<dyn VoiceProvider> = match client {
            Some(client) => match MicrophoneVoice::detect(client as Arc<dyn SpeechService>) {
                Ok(voice) => Arc::new(voice),
                Err(err) => {
                    tracing::warn!(error = %err, "Voice input unavailable");
                    Arc::new(UnavailableVoice)
                }
            },
            None => Arc::new(UnavailableVoice),
        };

        let player: Arc<dyn MediaPlayer> = match RodioPlayer::spawn() {
            Ok(player) => Arc::new(player),
            Err(err) => {
                tracing::warn!(error = %err, "Mantra playback unavailable");
                Arc::new(NoOutputPlayer::new())
            }
        };

        let cache = match crate::service::build_offline_cache(settings) {
            Ok(cache) => Some(cache),
            Err(err) => {
                tracing::warn!(error = %err, "Offline cache disabled");
                None
            }
        };

        Self {
            provider,
            voice,
            player,
            cache,
        }
    }

    /// Services that never reach the network or an audio device.
    pub fn offline() -> Self {
        Self {
            provider: Arc::new(UnconfiguredProvider),
            voice: Arc::new(UnavailableVoice),
            player: Arc::new(NoOutputPlayer::new()),
            cache: None,
        }
    }
}

impl std::fmt::Debug for Services {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Services")
            .field("cache", &self.cache)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// APP STATE
// =============================================================================

/// All application state.
#[derive(Debug)]
pub struct AppState {
    pub navigator: Navigator,

    /// Date the app treats as today.
    pub today: NaiveDate,

    pub calendar: CalendarView,
    pub horoscope: HoroscopeView,
    pub dream: DreamInterpreter,
    pub emotion: EmotionGuidanceView,
    pub palm: PalmReadingView,
    pub kundali: KundaliView,
    pub mantra: MantraSoundscape,
    pub teachings: SacredTeachings,
    pub voice: VoiceAssistant,

    /// Audio handle of the mantra soundscape.
    pub audio: DesktopAudio,

    pub services: Services,
    pub settings: Settings,

    /// Where settings changes are written. `None` keeps them in memory.
    pub settings_path: Option<PathBuf>,

    /// Current notice, if any.
    pub toast: Option<ToastState>,
}

impl AppState {
    pub fn new(settings: Settings, services: Services, today: NaiveDate) -> Self {
        Self {
            navigator: Navigator::new(),
            today,
            calendar: CalendarView::new(today),
            horoscope: HoroscopeView::with_sign(&settings.general.horoscope_sign),
            dream: DreamInterpreter::new(),
            emotion: EmotionGuidanceView::new(),
            palm: PalmReadingView::new(),
            kundali: KundaliView::new(),
            mantra: MantraSoundscape::new(),
            teachings: SacredTeachings::new(),
            voice: VoiceAssistant::with_language(&settings.general.voice_language),
            audio: DesktopAudio::new(Arc::clone(&services.player)),
            services,
            settings,
            settings_path: None,
            toast: None,
        }
    }

    /// Persist settings changes to `path`.
    pub fn with_settings_path(mut self, path: PathBuf) -> Self {
        self.settings_path = Some(path);
        self
    }

    /// Check if any status text needs rotating.
    pub fn has_rotating_status(&self) -> bool {
        self.dream.request().is_pending() || self.emotion.request().is_pending()
    }

    /// Persist the settings, reporting failures as a toast.
    pub fn save_settings(&mut self) {
        let Some(path) = &self.settings_path else {
            return;
        };
        if let Err(err) = self.settings.save_to(path) {
            tracing::warn!(error = %err, "Failed to save settings");
            self.toast = Some(ToastState::error(err));
        }
    }
}
