//! Gemini REST client.

use reqwest::StatusCode;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use tracing::debug;

use crate::config::{GeminiSettings, api_key_from_env};
use crate::error::{GeminiError, Result};
use crate::types::{GenerateContentRequest, GenerateContentResponse};

/// User agent string for API requests.
const USER_AGENT_VALUE: &str = concat!("the-universe-guidance/", env!("CARGO_PKG_VERSION"));

/// Header carrying the API key.
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Client for the Gemini `generateContent` endpoint.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: reqwest::Client,
    settings: GeminiSettings,
}

impl GeminiClient {
    /// Creates a client authenticated with `api_key`.
    pub fn new(api_key: &str, settings: GeminiSettings) -> Result<Self> {
        let api_key = api_key.trim();
        if api_key.is_empty() {
            return Err(GeminiError::NotConfigured);
        }

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));
        let mut key = HeaderValue::from_str(api_key)
            .map_err(|e| GeminiError::Network(format!("invalid API key header: {e}")))?;
        key.set_sensitive(true);
        headers.insert(API_KEY_HEADER, key);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(settings.timeout())
            .build()
            .map_err(|e| GeminiError::Network(format!("failed to create HTTP client: {e}")))?;

        Ok(Self { client, settings })
    }

    /// Creates a client with the API key found in the environment.
    pub fn from_env(settings: GeminiSettings) -> Result<Self> {
        let api_key = api_key_from_env().ok_or(GeminiError::NotConfigured)?;
        Self::new(&api_key, settings)
    }

    pub fn settings(&self) -> &GeminiSettings {
        &self.settings
    }

    /// Sends one request and returns the text of the first candidate.
    pub async fn generate(&self, request: &GenerateContentRequest) -> Result<String> {
        debug!(model = %self.settings.model, "Calling generateContent");
        let body = self
            .send(&self.settings.generate_content_url(), request)
            .await?;

        body.text().ok_or(GeminiError::EmptyResponse)
    }

    /// Sends one request to the text-to-speech model and returns the raw
    /// response.
    pub async fn generate_speech(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse> {
        debug!(model = %self.settings.speech_model, "Calling generateContent for speech");
        self.send(&self.settings.speech_url(), request).await
    }

    async fn send(
        &self,
        url: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse> {
        let response = self.client.post(url).json(request).send().await?;
        Self::handle_response(response).await
    }

    /// Checks the status and parses the body.
    async fn handle_response(response: reqwest::Response) -> Result<GenerateContentResponse> {
        let status = response.status();

        if status == StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse::<u64>().ok())
                .unwrap_or(60);
            return Err(GeminiError::RateLimited { retry_after });
        }

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(GeminiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let bytes = response.bytes().await?;
        let body: GenerateContentResponse = serde_json::from_slice(&bytes)?;
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_key_is_not_configured() {
        assert!(matches!(
            GeminiClient::new("   ", GeminiSettings::default()),
            Err(GeminiError::NotConfigured)
        ));
    }

    #[test]
    fn test_client_keeps_settings() {
        let settings = GeminiSettings {
            model: "gemini-test".to_string(),
            ..Default::default()
        };
        let client = GeminiClient::new("key", settings.clone()).unwrap();
        assert_eq!(client.settings(), &settings);
    }
}
