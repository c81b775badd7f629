//! Error types for audio devices.

use thiserror::Error;
use tug_core::GuidanceError;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AudioError {
    /// The host has no microphone.
    #[error("no audio input device found")]
    NoInputDevice,

    /// The host has no speaker.
    #[error("no audio output device found")]
    NoOutputDevice,

    /// The device refused the stream.
    #[error("audio stream error: {0}")]
    Stream(String),

    /// A recording could not be encoded.
    #[error("WAV encoding failed: {0}")]
    Wav(#[from] hound::Error),

    /// A file could not be decoded for playback.
    #[error("cannot decode {path}: {reason}")]
    Decode { path: String, reason: String },
}

impl From<AudioError> for GuidanceError {
    fn from(err: AudioError) -> Self {
        match err {
            AudioError::NoInputDevice => Self::Unsupported {
                capability: "Voice input",
            },
            AudioError::NoOutputDevice => Self::Unsupported {
                capability: "Voice output",
            },
            _ => Self::Provider {
                reason: err.to_string(),
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, AudioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_devices_are_unsupported() {
        assert_eq!(
            GuidanceError::from(AudioError::NoInputDevice).user_message(),
            "Voice input is not available on this device."
        );
        assert!(matches!(
            GuidanceError::from(AudioError::Stream("busy".to_string())),
            GuidanceError::Provider { .. }
        ));
    }
}
