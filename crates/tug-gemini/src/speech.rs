//! Speech recognition and synthesis through Gemini.
//!
//! Recognition sends a WAV recording as inline audio to the text model.
//! Synthesis asks the text-to-speech model for raw 16-bit PCM.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use tracing::info;

use crate::client::GeminiClient;
use crate::error::{GeminiError, Result};
use crate::prompt;
use crate::schema;
use crate::types::{GenerateContentRequest, Part};

/// Sample rate of synthesized speech when the response does not name one.
pub const DEFAULT_SPEECH_RATE: u32 = 24_000;

/// Mono 16-bit speech samples.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeechAudio {
    pub samples: Vec<i16>,
    pub sample_rate: u32,
}

impl GeminiClient {
    /// Transcribe a WAV recording spoken in `language`.
    ///
    /// Returns an empty string when nothing was said.
    pub async fn transcribe(&self, wav: &[u8], language: &str) -> Result<String> {
        info!(bytes = wav.len(), %language, "Requesting transcription");
        let request = GenerateContentRequest::new(vec![
            Part::inline("audio/wav", STANDARD.encode(wav)),
            Part::text(prompt::transcribe(language)),
        ]);
        match self.generate(&request).await {
            Ok(text) => Ok(text.trim().to_string()),
            Err(GeminiError::EmptyResponse) => Ok(String::new()),
            Err(err) => Err(err),
        }
    }

    /// Speak `text` in `language` with the configured voice.
    pub async fn synthesize(&self, text: &str, language: &str) -> Result<SpeechAudio> {
        let text = schema::parse_text(text)?;
        info!(chars = text.chars().count(), %language, "Requesting speech");
        let request = GenerateContentRequest::new(vec![Part::text(prompt::speak(&text, language))])
            .with_speech(&self.settings().voice);
        let response = self.generate_speech(&request).await?;
        let data = response.inline_data().ok_or(GeminiError::EmptyResponse)?;
        let bytes = STANDARD
            .decode(&data.data)
            .map_err(|e| GeminiError::Malformed(format!("speech payload: {e}")))?;
        Ok(SpeechAudio {
            samples: decode_pcm(&bytes),
            sample_rate: pcm_rate(&data.mime_type).unwrap_or(DEFAULT_SPEECH_RATE),
        })
    }
}

/// Read the `rate=` parameter of an `audio/L16` mime type.
fn pcm_rate(mime_type: &str) -> Option<u32> {
    mime_type
        .split(';')
        .filter_map(|param| param.trim().strip_prefix("rate="))
        .find_map(|rate| rate.parse().ok())
}

/// Little-endian 16-bit PCM. A trailing odd byte is dropped.
fn decode_pcm(bytes: &[u8]) -> Vec<i16> {
    bytes
        .chunks_exact(2)
        .map(|pair| i16::from_le_bytes([pair[0], pair[1]]))
        .collect()
}
