//! Audio devices for The Universe Guidance.
//!
//! - [`voice`]: the desktop [`VoiceProvider`](tug_core::VoiceProvider),
//!   recording the microphone until the user stops and answering aloud
//! - [`player`]: the mantra player thread behind [`MediaPlayer`]
//!
//! Device streams are not `Send` on every platform, so each one lives on
//! the thread that created it: capture and speech run inside
//! `spawn_blocking`, the mantra player owns a dedicated thread.

#![warn(clippy::all)]

pub mod capture;
pub mod error;
pub mod output;
pub mod player;
pub mod speech;
pub mod voice;
pub mod wav;

pub use capture::{AudioInput, CpalInput, Recording, Signal};
pub use error::{AudioError, Result};
pub use output::{RodioSpeaker, SpeechOutput};
pub use player::{MediaPlayer, NoOutputPlayer, PlayerEvent, RodioPlayer};
pub use speech::SpeechService;
pub use voice::MicrophoneVoice;
