//! Speech-to-text and text-to-speech backend.

use async_trait::async_trait;
use tug_gemini::{GeminiClient, SpeechAudio};

/// Turns recordings into text and answers into audio.
#[async_trait]
pub trait SpeechService: Send + Sync {
    /// Transcribe a WAV recording. Empty when nothing was said.
    async fn transcribe(&self, wav: Vec<u8>, language: String) -> tug_core::Result<String>;

    async fn synthesize(&self, text: String, language: String) -> tug_core::Result<SpeechAudio>;
}

#[async_trait]
impl SpeechService for GeminiClient {
    async fn transcribe(&self, wav: Vec<u8>, language: String) -> tug_core::Result<String> {
        Ok(GeminiClient::transcribe(self, &wav, &language).await?)
    }

    async fn synthesize(&self, text: String, language: String) -> tug_core::Result<SpeechAudio> {
        Ok(GeminiClient::synthesize(self, &text, &language).await?)
    }
}
