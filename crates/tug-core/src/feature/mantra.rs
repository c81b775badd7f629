//! Mantra soundscape: category list, mantra list and mantra player.
//!
//! The view owns no audio handle. Every operation that touches playback
//! takes the handle as an argument so the order of audio calls stays under
//! the view's control.

use tracing::debug;

use crate::audio::{AudioEvent, AudioOutput};
use crate::catalog::{Mantra, MantraCategory};
use crate::error::Result;
use crate::feature::Back;
use crate::request::{Request, Ticket};

pub const INSIGHT_FAILURE_MESSAGE: &str =
    "A moment of silence... The cosmos is not responding. Please try again.";

/// Which list or player is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MantraLevel {
    NoCategorySelected,
    CategorySelected,
    MantraSelected,
}

#[derive(Debug, Clone, Default)]
pub struct MantraSoundscape {
    category: Option<&'static MantraCategory>,
    mantra: Option<&'static Mantra>,
    is_playing: bool,
    insight: Request<String>,
}

impl MantraSoundscape {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn level(&self) -> MantraLevel {
        match (self.category, self.mantra) {
            (_, Some(_)) => MantraLevel::MantraSelected,
            (Some(_), None) => MantraLevel::CategorySelected,
            (None, None) => MantraLevel::NoCategorySelected,
        }
    }

    pub fn category(&self) -> Option<&'static MantraCategory> {
        self.category
    }

    pub fn mantra(&self) -> Option<&'static Mantra> {
        self.mantra
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn insight(&self) -> &Request<String> {
        &self.insight
    }

    pub fn select_category(&mut self, category: Option<&'static MantraCategory>) {
        self.category = category;
    }

    /// Switch to another mantra (or back to the list with `None`).
    ///
    /// A playing mantra is paused before the new source is assigned, and the
    /// insight of the previous mantra is discarded.
    pub fn select_mantra(&mut self, mantra: Option<&'static Mantra>, audio: &mut dyn AudioOutput) {
        if self.is_playing {
            audio.pause();
        }
        self.is_playing = false;
        self.insight.reset();
        self.mantra = mantra;
        if let Some(mantra) = mantra {
            debug!(mantra = mantra.name, "Mantra selected");
            audio.set_source(mantra.audio_url);
        }
    }

    /// Request play or pause depending on the observed state.
    pub fn toggle_audio(&self, audio: &mut dyn AudioOutput) {
        if self.is_playing {
            audio.pause();
        } else if self.mantra.is_some() {
            audio.play();
        }
    }

    /// Apply a playback event reported by the audio handle.
    pub fn on_audio_event(&mut self, event: AudioEvent) {
        self.is_playing = matches!(event, AudioEvent::Play);
    }

    /// Start an insight request for the selected mantra.
    ///
    /// Returns the ticket with the mantra name and meaning to send.
    pub fn request_insight(&mut self) -> Option<(Ticket, &'static Mantra)> {
        let mantra = self.mantra?;
        let ticket = self.insight.begin()?;
        Some((ticket, mantra))
    }

    pub fn settle_insight(&mut self, ticket: Ticket, result: Result<String>) {
        self.insight.settle(ticket, result, INSIGHT_FAILURE_MESSAGE);
    }

    /// Step back one level, or delegate when the category list is shown.
    pub fn go_back(&mut self, audio: &mut dyn AudioOutput) -> Back {
        match self.level() {
            MantraLevel::MantraSelected => {
                self.select_mantra(None, audio);
                Back::Handled
            }
            MantraLevel::CategorySelected => {
                self.select_category(None);
                Back::Handled
            }
            MantraLevel::NoCategorySelected => Back::Delegate,
        }
    }

    /// Release the audio handle when the page is left.
    pub fn teardown(&mut self, audio: &mut dyn AudioOutput) {
        audio.pause();
        audio.clear();
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::{AudioCall, RecordingAudio};
    use crate::catalog::MANTRA_CATEGORIES;

    #[test]
    fn test_levels_and_back() {
        let mut audio = RecordingAudio::default();
        let mut view = MantraSoundscape::new();
        let category = &MANTRA_CATEGORIES[0];
        view.select_category(Some(category));
        view.select_mantra(Some(&category.mantras[0]), &mut audio);
        assert_eq!(view.level(), MantraLevel::MantraSelected);

        assert_eq!(view.go_back(&mut audio), Back::Handled);
        assert_eq!(view.level(), MantraLevel::CategorySelected);
        assert_eq!(view.go_back(&mut audio), Back::Handled);
        assert_eq!(view.level(), MantraLevel::NoCategorySelected);
        assert_eq!(view.go_back(&mut audio), Back::Delegate);
    }

    #[test]
    fn test_playing_follows_events_only() {
        let mut audio = RecordingAudio::default();
        let mut view = MantraSoundscape::new();
        view.select_mantra(Some(&MANTRA_CATEGORIES[0].mantras[0]), &mut audio);
        view.toggle_audio(&mut audio);
        assert!(!view.is_playing());
        view.on_audio_event(AudioEvent::Play);
        assert!(view.is_playing());
        view.on_audio_event(AudioEvent::Ended);
        assert!(!view.is_playing());
    }

    #[test]
    fn test_teardown_releases_handle() {
        let mut audio = RecordingAudio::default();
        let mut view = MantraSoundscape::new();
        view.teardown(&mut audio);
        assert_eq!(audio.calls, vec![AudioCall::Pause, AudioCall::Clear]);
    }
}
