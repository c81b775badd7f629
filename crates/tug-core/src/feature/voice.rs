//! Voice assistant overlay.
//!
//! One question is one session: listen, answer through the guidance
//! provider, speak the answer. Each step returns a [`VoiceEffect`] tagged
//! with the session id; results from an older session are dropped, which is
//! how close and language changes cancel in-flight work.

use tracing::{debug, warn};

use crate::catalog::{self, VoiceLanguage};
use crate::error::{GuidanceError, Result};

/// Where the assistant is in a session.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum VoiceStatus {
    #[default]
    Idle,
    Listening,
    Processing,
    Speaking,
    Error,
}

impl VoiceStatus {
    pub fn message(&self) -> &'static str {
        match self {
            Self::Idle => "Tap the orb to ask a question",
            Self::Listening => "Listening...",
            Self::Processing => "Consulting the cosmos...",
            Self::Speaking => "Speaking...",
            Self::Error => "Something went wrong",
        }
    }
}

/// Work the caller must perform for the assistant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VoiceEffect {
    /// Capture one utterance.
    Listen {
        session: u64,
        language: &'static str,
    },

    /// Answer the transcript through the guidance provider.
    Ask {
        session: u64,
        text: String,
        language: &'static str,
    },

    /// Speak the answer.
    Speak {
        session: u64,
        text: String,
        language: &'static str,
    },

    /// Finish capture. The transcript still arrives through
    /// [`VoiceAssistant::heard`] for `session`.
    StopListening { session: u64 },

    /// Abort capture or speech in progress.
    Cancel,
}

#[derive(Debug, Clone)]
pub struct VoiceAssistant {
    is_open: bool,
    language: &'static VoiceLanguage,
    status: VoiceStatus,
    session: u64,
    transcript: Option<String>,
    response: Option<String>,
    error: Option<String>,
}

impl Default for VoiceAssistant {
    fn default() -> Self {
        Self {
            is_open: false,
            language: catalog::default_voice_language(),
            status: VoiceStatus::Idle,
            session: 0,
            transcript: None,
            response: None,
            error: None,
        }
    }
}

impl VoiceAssistant {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with the language identified by `code`, falling back to the
    /// default language.
    pub fn with_language(code: &str) -> Self {
        Self {
            language: catalog::voice_language(code)
                .unwrap_or_else(catalog::default_voice_language),
            ..Self::default()
        }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn language(&self) -> &'static VoiceLanguage {
        self.language
    }

    pub fn status(&self) -> VoiceStatus {
        self.status
    }

    pub fn transcript(&self) -> Option<&str> {
        self.transcript.as_deref()
    }

    pub fn response(&self) -> Option<&str> {
        self.response.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn open(&mut self) {
        self.is_open = true;
    }

    /// Close the overlay, cancelling any session.
    pub fn close(&mut self) -> VoiceEffect {
        self.is_open = false;
        self.stop()
    }

    /// Finish the utterance if listening, otherwise start a new session.
    ///
    /// Stopping keeps the session: the capture ends and its transcript is
    /// processed like one that ended on its own.
    pub fn orb_clicked(&mut self) -> VoiceEffect {
        if self.status == VoiceStatus::Listening {
            debug!(session = self.session, "Listening stopped by user");
            self.status = VoiceStatus::Processing;
            VoiceEffect::StopListening {
                session: self.session,
            }
        } else {
            self.start()
        }
    }

    /// Change language. Listening restarts in the new language.
    pub fn select_language(&mut self, language: &'static VoiceLanguage) -> Option<VoiceEffect> {
        self.language = language;
        if self.status == VoiceStatus::Listening {
            debug!(language = language.code, "Restarting listening");
            Some(self.start())
        } else {
            None
        }
    }

    /// Apply the transcript of `session`.
    ///
    /// Accepted while listening, or after the capture was stopped and before
    /// any transcript was applied.
    pub fn heard(&mut self, session: u64, result: Result<String>) -> Option<VoiceEffect> {
        let awaiting = self.status == VoiceStatus::Processing && self.transcript.is_none();
        let status = if awaiting {
            VoiceStatus::Processing
        } else {
            VoiceStatus::Listening
        };
        if !self.is_current(session, status) {
            return None;
        }
        match result {
            Ok(text) if !text.trim().is_empty() => {
                self.status = VoiceStatus::Processing;
                self.transcript = Some(text.clone());
                Some(VoiceEffect::Ask {
                    session,
                    text,
                    language: self.language.code,
                })
            }
            Ok(_) => {
                self.status = VoiceStatus::Idle;
                None
            }
            Err(err) => {
                self.fail(&err);
                None
            }
        }
    }

    /// Apply the provider answer of `session`.
    pub fn answered(&mut self, session: u64, result: Result<String>) -> Option<VoiceEffect> {
        if !self.is_current(session, VoiceStatus::Processing) {
            return None;
        }
        match result {
            Ok(text) => {
                self.status = VoiceStatus::Speaking;
                self.response = Some(text.clone());
                Some(VoiceEffect::Speak {
                    session,
                    text,
                    language: self.language.code,
                })
            }
            Err(err) => {
                self.fail(&err);
                None
            }
        }
    }

    /// Apply the end of speech for `session`.
    pub fn spoken(&mut self, session: u64, result: Result<()>) {
        if !self.is_current(session, VoiceStatus::Speaking) {
            return;
        }
        match result {
            Ok(()) => self.status = VoiceStatus::Idle,
            Err(err) => self.fail(&err),
        }
    }

    fn start(&mut self) -> VoiceEffect {
        self.session += 1;
        self.status = VoiceStatus::Listening;
        self.transcript = None;
        self.response = None;
        self.error = None;
        VoiceEffect::Listen {
            session: self.session,
            language: self.language.code,
        }
    }

    fn stop(&mut self) -> VoiceEffect {
        self.session += 1;
        if self.status != VoiceStatus::Error {
            self.status = VoiceStatus::Idle;
        }
        VoiceEffect::Cancel
    }

    fn is_current(&self, session: u64, expected: VoiceStatus) -> bool {
        let current = session == self.session && self.status == expected;
        if !current {
            debug!(session, "Dropping stale voice result");
        }
        current
    }

    fn fail(&mut self, err: &GuidanceError) {
        warn!(error = %err, "Voice session failed");
        self.status = VoiceStatus::Error;
        self.error = Some(err.user_message());
    }
}
