//! Messages of the AI guidance pages: dream, emotion, palm and kundali.

use std::path::PathBuf;

use iced::window::Screenshot;
use tug_core::Ticket;
use tug_core::feature::kundali::KundaliField;
use tug_core::provider::{DreamInterpretation, EmotionalGuidance, KundaliReading, PalmReading};

/// Dream interpreter messages.
#[derive(Debug, Clone)]
pub enum DreamMessage {
    DescriptionChanged(String),
    Submit,
    Interpreted(Ticket, tug_core::Result<DreamInterpretation>),
}

/// Emotion guidance messages.
#[derive(Debug, Clone)]
pub enum EmotionMessage {
    GuidanceLoaded(Ticket, tug_core::Result<EmotionalGuidance>),

    /// Share the guidance text
    Share,

    /// Save the guidance card as an image
    Export,

    /// Save dialog closed
    ExportPathChosen(Option<PathBuf>),

    /// Window captured for export
    Captured(PathBuf, Screenshot),

    /// Image written (or not)
    Exported(Result<PathBuf, String>),
}

/// Palm reading messages.
#[derive(Debug, Clone)]
pub enum PalmMessage {
    PickImage,
    ImagePicked(Option<Vec<u8>>),
    QuestionChanged(String),
    Submit,
    Analyzed(Ticket, tug_core::Result<PalmReading>),
}

/// Kundali messages.
#[derive(Debug, Clone)]
pub enum KundaliMessage {
    FieldChanged(KundaliField, String),
    Submit,
    Generated(Ticket, tug_core::Result<KundaliReading>),
    StartOver,
}
