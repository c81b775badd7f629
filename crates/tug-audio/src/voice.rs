//! Desktop voice provider.
//!
//! `listen` records the microphone until [`VoiceProvider::stop_listening`]
//! (or the maximum utterance length), then sends the recording as WAV to
//! the [`SpeechService`]. `speak` synthesizes the answer and plays it.
//! `cancel` ends both and discards whatever they produce.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, info};
use tug_core::{GuidanceError, VoiceProvider};

use crate::capture::{AudioInput, CpalInput, Recording, Signal};
use crate::error::AudioError;
use crate::output::{RodioSpeaker, SpeechOutput};
use crate::speech::SpeechService;
use crate::wav::encode_wav;

/// Recordings shorter than this are treated as silence.
pub const MIN_UTTERANCE: Duration = Duration::from_millis(300);

#[derive(Debug, Default)]
struct Active {
    listening: Option<Arc<Signal>>,
    speaking: Option<Arc<Signal>>,
}

/// Microphone and speaker voice provider.
pub struct MicrophoneVoice {
    input: Arc<dyn AudioInput>,
    output: Arc<dyn SpeechOutput>,
    speech: Arc<dyn SpeechService>,
    active: Mutex<Active>,
    /// Bumped by `cancel`; work started under an older value is discarded.
    generation: AtomicU64,
}

impl MicrophoneVoice {
    pub fn new(
        input: Arc<dyn AudioInput>,
        output: Arc<dyn SpeechOutput>,
        speech: Arc<dyn SpeechService>,
    ) -> Self {
        Self {
            input,
            output,
            speech,
            active: Mutex::new(Active::default()),
            generation: AtomicU64::new(0),
        }
    }

    /// Voice on the default microphone and speaker.
    ///
    /// Fails with [`AudioError::NoInputDevice`] when the host has no
    /// microphone.
    pub fn detect(speech: Arc<dyn SpeechService>) -> Result<Self, AudioError> {
        let input = CpalInput::detect()?;
        Ok(Self::new(Arc::new(input), Arc::new(RodioSpeaker), speech))
    }

    /// Whether a recording is running.
    pub fn is_listening(&self) -> bool {
        self.active().listening.is_some()
    }

    fn active(&self) -> std::sync::MutexGuard<'_, Active> {
        self.active.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn cancelled() -> GuidanceError {
        GuidanceError::Provider {
            reason: "voice session cancelled".to_string(),
        }
    }

    async fn record(&self, signal: &Arc<Signal>) -> tug_core::Result<Recording> {
        let input = Arc::clone(&self.input);
        let capture = Arc::clone(signal);
        let result = tokio::task::spawn_blocking(move || input.record(&capture)).await;

        let mut active = self.active();
        if active
            .listening
            .as_ref()
            .is_some_and(|current| Arc::ptr_eq(current, signal))
        {
            active.listening = None;
        }
        drop(active);

        let recording = result.map_err(|e| GuidanceError::Provider {
            reason: format!("capture task failed: {e}"),
        })??;
        Ok(recording)
    }
}

impl std::fmt::Debug for MicrophoneVoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MicrophoneVoice")
            .field("generation", &self.generation)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl VoiceProvider for MicrophoneVoice {
    async fn listen(&self, language: String) -> tug_core::Result<String> {
        let generation = self.generation.load(Ordering::SeqCst);
        let signal = Arc::new(Signal::new());
        {
            let mut active = self.active();
            if let Some(previous) = active.listening.replace(Arc::clone(&signal)) {
                previous.fire();
            }
            if let Some(speech) = active.speaking.take() {
                speech.fire();
            }
        }
        info!(%language, "Listening");

        let recording = self.record(&signal).await?;
        if self.generation.load(Ordering::SeqCst) != generation {
            return Err(Self::cancelled());
        }
        if recording.duration() < MIN_UTTERANCE {
            debug!("Recording too short, nothing heard");
            return Ok(String::new());
        }

        let wav = encode_wav(&recording.samples, recording.sample_rate)?;
        let text = self.speech.transcribe(wav, language).await?;
        if self.generation.load(Ordering::SeqCst) != generation {
            return Err(Self::cancelled());
        }
        Ok(text)
    }

    async fn speak(&self, text: String, language: String) -> tug_core::Result<()> {
        let generation = self.generation.load(Ordering::SeqCst);
        let speech = self.speech.synthesize(text, language).await?;
        if self.generation.load(Ordering::SeqCst) != generation {
            return Err(Self::cancelled());
        }

        let signal = Arc::new(Signal::new());
        if let Some(previous) = self.active().speaking.replace(Arc::clone(&signal)) {
            previous.fire();
        }
        let output = Arc::clone(&self.output);
        let playback = Arc::clone(&signal);
        let result =
            tokio::task::spawn_blocking(move || output.play(&speech, &playback)).await;

        let mut active = self.active();
        if active
            .speaking
            .as_ref()
            .is_some_and(|current| Arc::ptr_eq(current, &signal))
        {
            active.speaking = None;
        }
        drop(active);

        result.map_err(|e| GuidanceError::Provider {
            reason: format!("playback task failed: {e}"),
        })??;
        Ok(())
    }

    fn stop_listening(&self) {
        if let Some(signal) = &self.active().listening {
            debug!("Stopping capture");
            signal.fire();
        }
    }

    fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        let mut active = self.active();
        for signal in [active.listening.take(), active.speaking.take()]
            .into_iter()
            .flatten()
        {
            signal.fire();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tug_gemini::SpeechAudio;

    /// Microphone producing `samples` once the recording is stopped.
    struct FakeInput {
        samples: usize,
    }

    impl AudioInput for FakeInput {
        fn record(&self, signal: &Signal) -> crate::Result<Recording> {
            while !signal.is_fired() {
                std::thread::sleep(Duration::from_millis(2));
            }
            Ok(Recording {
                samples: vec![0.1; self.samples],
                sample_rate: 16_000,
            })
        }
    }

    #[derive(Default)]
    struct FakeOutput {
        played: Mutex<Vec<usize>>,
    }

    impl SpeechOutput for FakeOutput {
        fn play(&self, speech: &SpeechAudio, _: &Signal) -> crate::Result<()> {
            self.played.lock().unwrap().push(speech.samples.len());
            Ok(())
        }
    }

    #[derive(Default)]
    struct FakeSpeech {
        wavs: Mutex<Vec<(usize, String)>>,
    }

    #[async_trait]
    impl SpeechService for FakeSpeech {
        async fn transcribe(&self, wav: Vec<u8>, language: String) -> tug_core::Result<String> {
            assert_eq!(&wav[..4], b"RIFF");
            self.wavs.lock().unwrap().push((wav.len(), language));
            Ok("What is my path?".to_string())
        }

        async fn synthesize(&self, text: String, _: String) -> tug_core::Result<SpeechAudio> {
            Ok(SpeechAudio {
                samples: vec![0; text.len()],
                sample_rate: 24_000,
            })
        }
    }

    fn voice(samples: usize) -> (Arc<MicrophoneVoice>, Arc<FakeSpeech>, Arc<FakeOutput>) {
        let speech = Arc::new(FakeSpeech::default());
        let output = Arc::new(FakeOutput::default());
        let voice = MicrophoneVoice::new(
            Arc::new(FakeInput { samples }),
            Arc::clone(&output) as Arc<dyn SpeechOutput>,
            Arc::clone(&speech) as Arc<dyn SpeechService>,
        );
        (Arc::new(voice), speech, output)
    }

    async fn wait_until_listening(voice: &MicrophoneVoice) {
        while !voice.is_listening() {
            tokio::time::sleep(Duration::from_millis(2)).await;
        }
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_stop_listening_transcribes_recording() {
        let (voice, speech, _) = voice(16_000);
        let listener = Arc::clone(&voice);
        let heard = tokio::spawn(async move { listener.listen("ta-IN".to_string()).await });

        wait_until_listening(&voice).await;
        voice.stop_listening();

        assert_eq!(heard.await.unwrap().unwrap(), "What is my path?");
        assert!(!voice.is_listening());
        let wavs = speech.wavs.lock().unwrap();
        assert_eq!(wavs.len(), 1);
        assert!(wavs[0].0 > 2 * 16_000);
        assert_eq!(wavs[0].1, "ta-IN");
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_short_recording_is_silence() {
        let (voice, speech, _) = voice(100);
        let listener = Arc::clone(&voice);
        let heard = tokio::spawn(async move { listener.listen("ta-IN".to_string()).await });

        wait_until_listening(&voice).await;
        voice.stop_listening();

        assert_eq!(heard.await.unwrap().unwrap(), "");
        assert!(speech.wavs.lock().unwrap().is_empty());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_cancel_discards_recording() {
        let (voice, speech, _) = voice(16_000);
        let listener = Arc::clone(&voice);
        let heard = tokio::spawn(async move { listener.listen("ta-IN".to_string()).await });

        wait_until_listening(&voice).await;
        voice.cancel();

        assert!(heard.await.unwrap().is_err());
        assert!(speech.wavs.lock().unwrap().is_empty());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_speak_plays_synthesized_answer() {
        let (voice, _, output) = voice(0);

        voice
            .speak("Walk gently.".to_string(), "ta-IN".to_string())
            .await
            .unwrap();

        assert_eq!(*output.played.lock().unwrap(), vec![12]);
    }
}
