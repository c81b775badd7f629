//! Page-local view state for each feature.
//!
//! Every view owns its own state and never touches the navigator directly.
//! Operations that would start a provider call return a ticket (or an
//! effect) describing the call; the caller performs it and feeds the result
//! back through the matching `settle` operation.

pub mod dream;
pub mod emotion;
pub mod horoscope;
pub mod kundali;
pub mod mantra;
pub mod palm;
pub mod teachings;
pub mod voice;

pub use dream::{DreamInterpreter, DreamStage};
pub use emotion::EmotionGuidanceView;
pub use horoscope::HoroscopeView;
pub use kundali::KundaliView;
pub use mantra::{MantraLevel, MantraSoundscape};
pub use palm::PalmReadingView;
pub use teachings::{SacredTeachings, TeachingsLevel};
pub use voice::{VoiceAssistant, VoiceEffect, VoiceStatus};

/// Outcome of a back request handled by a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Back {
    /// The view stepped back internally.
    Handled,

    /// The view is at its first step; the navigator should go back.
    Delegate,
}
