//! Audio output boundary for mantra playback.

/// A single audio output handle.
///
/// Calls are fire-and-forget. The real playing state is reported back as
/// [`AudioEvent`]s, which the owner applies to its own state.
pub trait AudioOutput: Send {
    /// Replace the current source. Does not start playback.
    fn set_source(&mut self, url: &str);

    fn play(&mut self);

    fn pause(&mut self);

    /// Drop the current source.
    fn clear(&mut self);
}

/// Playback state changes observed on an [`AudioOutput`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioEvent {
    Play,
    Pause,
    Ended,
}

/// Every call made on an audio handle, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AudioCall {
    SetSource(String),
    Play,
    Pause,
    Clear,
}

/// Audio output that records calls without producing sound.
#[derive(Debug, Default, Clone)]
pub struct RecordingAudio {
    pub calls: Vec<AudioCall>,
}

impl AudioOutput for RecordingAudio {
    fn set_source(&mut self, url: &str) {
        self.calls.push(AudioCall::SetSource(url.to_string()));
    }

    fn play(&mut self) {
        self.calls.push(AudioCall::Play);
    }

    fn pause(&mut self) {
        self.calls.push(AudioCall::Pause);
    }

    fn clear(&mut self) {
        self.calls.push(AudioCall::Clear);
    }
}
