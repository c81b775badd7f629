//! Response schemas and validation of structured answers.
//!
//! Gemini is asked for JSON matching a schema, but the answer is still
//! checked here: every required string must be present and non-blank.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use tug_core::provider::{
    DreamInterpretation, EmotionalGuidance, GuidanceTheme, KundaliReading, PalmReading,
};

use crate::error::{GeminiError, Result};

// =============================================================================
// SCHEMAS
// =============================================================================

fn object_of_strings(fields: &[(&str, &str)]) -> Value {
    let properties: serde_json::Map<String, Value> = fields
        .iter()
        .map(|(name, description)| {
            (
                (*name).to_string(),
                json!({"type": "STRING", "description": description}),
            )
        })
        .collect();
    let required: Vec<&str> = fields.iter().map(|(name, _)| *name).collect();
    json!({"type": "OBJECT", "properties": properties, "required": required})
}

pub fn palm() -> Value {
    object_of_strings(&[
        ("lifeLine", "Interpretation of the life line."),
        ("heartLine", "Interpretation of the heart line."),
        ("headLine", "Interpretation of the head line."),
        ("fateLine", "Interpretation of the fate line."),
    ])
}

pub fn kundali() -> Value {
    object_of_strings(&[
        (
            "lagnaChart",
            "Analysis of the Lagna (Ascendant) chart, personality, and life purpose.",
        ),
        (
            "kundaliAnalysis",
            "Detailed interpretation of planetary positions covering career, relationships, and health.",
        ),
        (
            "palmLeafInsights",
            "Vaideeswaran Koil palm leaf reading with past, present and future insights.",
        ),
        (
            "remedies",
            "Actionable Vedic remedies to mitigate challenges.",
        ),
    ])
}

pub fn dream() -> Value {
    object_of_strings(&[
        ("mainThemes", "The main themes of the dream."),
        ("symbolism", "Explanation of the key symbols."),
        ("guidance", "Cosmic guidance for waking life."),
    ])
}

pub fn emotional_guidance() -> Value {
    let themes: Vec<&str> = GuidanceTheme::all()
        .iter()
        .map(GuidanceTheme::category_name)
        .collect();
    json!({
        "type": "OBJECT",
        "properties": {
            "guidance": {
                "type": "STRING",
                "description": "A short, comforting piece of wisdom or mantra."
            },
            "theme": {
                "type": "STRING",
                "enum": themes,
                "description": "The most relevant theme for the emotion."
            }
        },
        "required": ["guidance", "theme"]
    })
}

pub fn video_takeaways() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "takeaways": {
                "type": "ARRAY",
                "items": {"type": "STRING"},
                "description": "A list of key spiritual takeaways from the video."
            }
        },
        "required": ["takeaways"]
    })
}

// =============================================================================
// PARSING
// =============================================================================

fn parse<T: DeserializeOwned>(text: &str) -> Result<T> {
    serde_json::from_str(text.trim()).map_err(|e| GeminiError::Malformed(e.to_string()))
}

fn require(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(GeminiError::Malformed(format!("`{field}` is blank")));
    }
    Ok(())
}

pub fn parse_palm(text: &str) -> Result<PalmReading> {
    let reading: PalmReading = parse(text)?;
    require("lifeLine", &reading.life_line)?;
    require("heartLine", &reading.heart_line)?;
    require("headLine", &reading.head_line)?;
    require("fateLine", &reading.fate_line)?;
    Ok(reading)
}

pub fn parse_kundali(text: &str) -> Result<KundaliReading> {
    let reading: KundaliReading = parse(text)?;
    require("lagnaChart", &reading.lagna_chart)?;
    require("kundaliAnalysis", &reading.kundali_analysis)?;
    require("palmLeafInsights", &reading.palm_leaf_insights)?;
    require("remedies", &reading.remedies)?;
    Ok(reading)
}

pub fn parse_dream(text: &str) -> Result<DreamInterpretation> {
    let reading: DreamInterpretation = parse(text)?;
    require("mainThemes", &reading.main_themes)?;
    require("symbolism", &reading.symbolism)?;
    require("guidance", &reading.guidance)?;
    Ok(reading)
}

/// Parse emotional guidance. A theme outside the five categories fails
/// deserialization.
pub fn parse_emotional_guidance(text: &str) -> Result<EmotionalGuidance> {
    let guidance: EmotionalGuidance = parse(text)?;
    require("guidance", &guidance.guidance)?;
    Ok(guidance)
}

pub fn parse_takeaways(text: &str) -> Result<Vec<String>> {
    #[derive(Deserialize)]
    struct Takeaways {
        takeaways: Vec<String>,
    }

    let parsed: Takeaways = parse(text)?;
    let takeaways: Vec<String> = parsed
        .takeaways
        .into_iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect();
    if takeaways.is_empty() {
        return Err(GeminiError::Malformed("no takeaways".to_string()));
    }
    Ok(takeaways)
}

/// Plain-text answers only need to be non-blank.
pub fn parse_text(text: &str) -> Result<String> {
    let text = text.trim();
    if text.is_empty() {
        return Err(GeminiError::EmptyResponse);
    }
    Ok(text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palm_schema_requires_all_lines() {
        let schema = palm();
        assert_eq!(
            schema["required"],
            json!(["lifeLine", "heartLine", "headLine", "fateLine"])
        );
        assert_eq!(schema["properties"]["fateLine"]["type"], "STRING");
    }

    #[test]
    fn test_emotion_schema_lists_themes() {
        let schema = emotional_guidance();
        assert_eq!(schema["properties"]["theme"]["enum"][4], "Peace & Protection");
    }

    #[test]
    fn test_parse_palm() {
        let reading = parse_palm(
            r#"{"lifeLine":"Long","heartLine":"Deep","headLine":"Clear","fateLine":"Strong"}"#,
        )
        .unwrap();
        assert_eq!(reading.head_line, "Clear");

        let err = parse_palm(r#"{"lifeLine":"Long","heartLine":" ","headLine":"Clear","fateLine":"Strong"}"#)
            .unwrap_err();
        assert!(matches!(err, GeminiError::Malformed(ref m) if m.contains("heartLine")));

        assert!(parse_palm(r#"{"lifeLine":"Long"}"#).is_err());
    }

    #[test]
    fn test_parse_emotional_guidance_rejects_unknown_theme() {
        assert!(parse_emotional_guidance(r#"{"guidance":"Rest.","theme":"Fame & Glory"}"#).is_err());
        let guidance =
            parse_emotional_guidance(r#"{"guidance":"Rest.","theme":"Health & Healing"}"#).unwrap();
        assert_eq!(guidance.theme, GuidanceTheme::HealthHealing);
    }

    #[test]
    fn test_parse_takeaways() {
        let takeaways =
            parse_takeaways(r#"{"takeaways":[" Be present. ", "", "Serve others."]}"#).unwrap();
        assert_eq!(takeaways, vec!["Be present.", "Serve others."]);
        assert!(parse_takeaways(r#"{"takeaways":[]}"#).is_err());
    }

    #[test]
    fn test_parse_text() {
        assert_eq!(parse_text("  Peace.\n").unwrap(), "Peace.");
        assert!(matches!(parse_text("  "), Err(GeminiError::EmptyResponse)));
    }
}
