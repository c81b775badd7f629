//! Speech playback.

use std::time::Duration;

use rodio::buffer::SamplesBuffer;
use rodio::{OutputStream, Sink};
use tracing::debug;
use tug_gemini::SpeechAudio;

use crate::capture::Signal;
use crate::error::{AudioError, Result};

const POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Blocking speech sink.
pub trait SpeechOutput: Send + Sync {
    /// Play `speech` to the end or until `signal` fires. Runs on a blocking
    /// thread.
    fn play(&self, speech: &SpeechAudio, signal: &Signal) -> Result<()>;
}

/// Default system speaker through rodio.
#[derive(Debug, Default, Clone, Copy)]
pub struct RodioSpeaker;

impl SpeechOutput for RodioSpeaker {
    fn play(&self, speech: &SpeechAudio, signal: &Signal) -> Result<()> {
        let (_stream, handle) =
            OutputStream::try_default().map_err(|_| AudioError::NoOutputDevice)?;
        let sink = Sink::try_new(&handle).map_err(|e| AudioError::Stream(e.to_string()))?;
        sink.append(SamplesBuffer::new(
            1,
            speech.sample_rate,
            speech.samples.clone(),
        ));

        while !sink.empty() {
            if signal.is_fired() {
                debug!("Speech interrupted");
                sink.stop();
                break;
            }
            std::thread::sleep(POLL_INTERVAL);
        }
        Ok(())
    }
}
