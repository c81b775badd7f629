//! Tests for the feature view states driven against a fake provider.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tug_core::audio::{AudioCall, AudioEvent, RecordingAudio};
use tug_core::catalog::{EMOTION_CARDS, Mantra, MantraCategory};
use tug_core::feature::{DreamInterpreter, DreamStage, EmotionGuidanceView, MantraSoundscape};
use tug_core::provider::{
    DreamInterpretation, EmotionalGuidance, GuidanceTheme, KundaliDetails, KundaliReading,
    PalmImage, PalmReading,
};
use tug_core::{GuidanceError, GuidanceProvider, Result};

// =========================================================================
// Fake provider
// =========================================================================

#[derive(Default)]
struct CountingProvider {
    calls: AtomicUsize,
}

impl CountingProvider {
    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn record(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl GuidanceProvider for CountingProvider {
    async fn analyze_palm(&self, _: PalmImage, _: Option<String>) -> Result<PalmReading> {
        self.record();
        Err(GuidanceError::NotConfigured)
    }

    async fn generate_kundali(&self, _: KundaliDetails) -> Result<KundaliReading> {
        self.record();
        Err(GuidanceError::NotConfigured)
    }

    async fn freeform_query(&self, _: String, _: String) -> Result<String> {
        self.record();
        Ok("Be still.".to_string())
    }

    async fn emotional_guidance(&self, emotion: String) -> Result<EmotionalGuidance> {
        self.record();
        Ok(EmotionalGuidance {
            guidance: format!("{emotion} is a visitor, not a resident."),
            theme: GuidanceTheme::HealthHealing,
        })
    }

    async fn mantra_insight(&self, name: String, _: String) -> Result<String> {
        self.record();
        Ok(format!("Chant {name} at dawn."))
    }

    async fn video_takeaways(&self, _: String) -> Result<Vec<String>> {
        self.record();
        Ok(vec!["Listen deeply.".to_string()])
    }

    async fn interpret_dream(&self, _: String) -> Result<DreamInterpretation> {
        self.record();
        Ok(DreamInterpretation {
            main_themes: "Freedom".to_string(),
            symbolism: "Flight means release.".to_string(),
            guidance: "Trust the wind.".to_string(),
        })
    }
}

/// Submit the dream and, if a call was issued, run it to completion.
async fn run_dream(view: &mut DreamInterpreter, provider: &dyn GuidanceProvider) {
    if let Ok(Some((ticket, text))) = view.submit() {
        let result = provider.interpret_dream(text).await;
        view.settle(ticket, result);
    }
}

// =========================================================================
// Dream interpreter
// =========================================================================

#[tokio::test]
async fn test_nine_characters_never_call_provider() {
    let provider = CountingProvider::default();
    let mut view = DreamInterpreter::new();
    view.set_description("  ninechars  ");
    assert_eq!(view.description().trim().chars().count(), 9);

    run_dream(&mut view, &provider).await;

    assert_eq!(provider.calls(), 0);
    assert_eq!(view.stage(), DreamStage::Idle);
}

#[tokio::test]
async fn test_ten_characters_call_provider_once() {
    let provider = CountingProvider::default();
    let mut view = DreamInterpreter::new();
    view.set_description("   ten chars! ");
    assert_eq!(view.description().trim().chars().count(), 10);

    run_dream(&mut view, &provider).await;

    assert_eq!(provider.calls(), 1);
    assert_eq!(view.stage(), DreamStage::Result);
    assert_eq!(
        view.request().data().map(|r| r.main_themes.as_str()),
        Some("Freedom")
    );
}

// =========================================================================
// Emotion guidance
// =========================================================================

#[tokio::test]
async fn test_emotion_guidance_round() {
    let provider = CountingProvider::default();
    let mut view = EmotionGuidanceView::new();

    let (ticket, emotion) = view.start(Some(EMOTION_CARDS[6])).unwrap();
    let result = provider.emotional_guidance(emotion.title.to_string()).await;
    view.settle(ticket, result);

    assert_eq!(provider.calls(), 1);
    assert_eq!(
        view.suggested_category().map(|c| c.name),
        Some("Health & Healing")
    );
}

#[test]
fn test_emotion_guidance_leave_drops_late_result() {
    let mut view = EmotionGuidanceView::new();
    let (ticket, _) = view.start(Some(EMOTION_CARDS[0])).unwrap();
    view.leave();
    view.settle(
        ticket,
        Ok(EmotionalGuidance {
            guidance: "late".to_string(),
            theme: GuidanceTheme::MoneyAbundance,
        }),
    );
    assert!(view.request().data().is_none());
}

// =========================================================================
// Mantra playback
// =========================================================================

static TWO_MANTRAS: MantraCategory = MantraCategory {
    name: "Test",
    description: "Two mantras",
    icon: "*",
    mantras: &[
        Mantra {
            name: "A",
            sanskrit: "a",
            meaning: "first",
            audio_url: "https://cdn.test/a.mp3",
        },
        Mantra {
            name: "B",
            sanskrit: "b",
            meaning: "second",
            audio_url: "https://cdn.test/b.mp3",
        },
    ],
};

#[test]
fn test_switching_mantra_pauses_before_new_source() {
    let mut audio = RecordingAudio::default();
    let mut view = MantraSoundscape::new();
    view.select_category(Some(&TWO_MANTRAS));
    view.select_mantra(Some(&TWO_MANTRAS.mantras[0]), &mut audio);
    view.toggle_audio(&mut audio);
    view.on_audio_event(AudioEvent::Play);
    audio.calls.clear();

    view.select_mantra(Some(&TWO_MANTRAS.mantras[1]), &mut audio);

    assert_eq!(
        audio.calls,
        vec![
            AudioCall::Pause,
            AudioCall::SetSource("https://cdn.test/b.mp3".to_string()),
        ]
    );
    assert!(!view.is_playing());

    view.toggle_audio(&mut audio);
    assert!(!view.is_playing());
    view.on_audio_event(AudioEvent::Play);
    assert!(view.is_playing());
}

#[tokio::test]
async fn test_switching_mantra_clears_insight() {
    let provider = CountingProvider::default();
    let mut audio = RecordingAudio::default();
    let mut view = MantraSoundscape::new();
    view.select_mantra(Some(&TWO_MANTRAS.mantras[0]), &mut audio);

    let (ticket, mantra) = view.request_insight().unwrap();
    let result = provider
        .mantra_insight(mantra.name.to_string(), mantra.meaning.to_string())
        .await;
    view.settle_insight(ticket, result);
    assert_eq!(view.insight().data().map(String::as_str), Some("Chant A at dawn."));

    view.select_mantra(Some(&TWO_MANTRAS.mantras[1]), &mut audio);
    assert!(view.insight().data().is_none());
}
