//! [`GuidanceProvider`] implementation backed by Gemini.

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use tracing::info;
use tug_core::GuidanceProvider;
use tug_core::provider::{
    DreamInterpretation, EmotionalGuidance, KundaliDetails, KundaliReading, PalmImage, PalmReading,
};

use crate::client::GeminiClient;
use crate::types::{GenerateContentRequest, Part};
use crate::{prompt, schema};

#[async_trait]
impl GuidanceProvider for GeminiClient {
    async fn analyze_palm(
        &self,
        image: PalmImage,
        question: Option<String>,
    ) -> tug_core::Result<PalmReading> {
        info!(bytes = image.bytes.len(), "Requesting palm reading");
        let request = GenerateContentRequest::new(vec![
            Part::inline(image.mime_type, STANDARD.encode(&image.bytes)),
            Part::text(prompt::palm(question.as_deref())),
        ])
        .with_schema(schema::palm());
        let text = self.generate(&request).await?;
        Ok(schema::parse_palm(&text)?)
    }

    async fn generate_kundali(&self, details: KundaliDetails) -> tug_core::Result<KundaliReading> {
        details.validate()?;
        info!("Requesting kundali reading");
        let request = GenerateContentRequest::new(vec![Part::text(prompt::kundali(&details))])
            .with_schema(schema::kundali());
        let text = self.generate(&request).await?;
        Ok(schema::parse_kundali(&text)?)
    }

    async fn freeform_query(&self, text: String, language: String) -> tug_core::Result<String> {
        info!(%language, "Requesting spiritual answer");
        let request =
            GenerateContentRequest::new(vec![Part::text(prompt::freeform(&text, &language))]);
        let answer = self.generate(&request).await?;
        Ok(schema::parse_text(&answer)?)
    }

    async fn emotional_guidance(&self, emotion: String) -> tug_core::Result<EmotionalGuidance> {
        info!(%emotion, "Requesting emotional guidance");
        let request =
            GenerateContentRequest::new(vec![Part::text(prompt::emotional_guidance(&emotion))])
                .with_schema(schema::emotional_guidance());
        let text = self.generate(&request).await?;
        Ok(schema::parse_emotional_guidance(&text)?)
    }

    async fn mantra_insight(&self, name: String, meaning: String) -> tug_core::Result<String> {
        info!(%name, "Requesting mantra insight");
        let request =
            GenerateContentRequest::new(vec![Part::text(prompt::mantra_insight(&name, &meaning))]);
        let text = self.generate(&request).await?;
        Ok(schema::parse_text(&text)?)
    }

    async fn video_takeaways(&self, title: String) -> tug_core::Result<Vec<String>> {
        info!(%title, "Requesting video takeaways");
        let request = GenerateContentRequest::new(vec![Part::text(prompt::video_takeaways(&title))])
            .with_schema(schema::video_takeaways());
        let text = self.generate(&request).await?;
        Ok(schema::parse_takeaways(&text)?)
    }

    async fn interpret_dream(&self, dream: String) -> tug_core::Result<DreamInterpretation> {
        info!(chars = dream.chars().count(), "Requesting dream interpretation");
        let request = GenerateContentRequest::new(vec![Part::text(prompt::dream(&dream))])
            .with_schema(schema::dream());
        let text = self.generate(&request).await?;
        Ok(schema::parse_dream(&text)?)
    }
}
