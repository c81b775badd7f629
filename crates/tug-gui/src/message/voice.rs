//! Voice assistant overlay messages.

use tug_core::catalog::VoiceLanguage;

/// Voice assistant messages.
///
/// Results carry the session they belong to.
#[derive(Debug, Clone)]
pub enum VoiceMessage {
    Open,
    Close,
    OrbClicked,
    SelectLanguage(&'static VoiceLanguage),
    Heard(u64, tug_core::Result<String>),
    Answered(u64, tug_core::Result<String>),
    Spoken(u64, tug_core::Result<()>),
}
