//! Desktop audio adapter for mantra playback.
//!
//! The core calls [`AudioOutput`] synchronously from `update()`. Pause,
//! stop and resume go straight to the [`MediaPlayer`]. Starting a source
//! that is not loaded yet needs a local file, so the adapter queues the
//! source; the handler resolves it through the offline cache and hands the
//! file back with [`DesktopAudio::source_ready`].

use std::path::PathBuf;
use std::sync::Arc;

use tug_audio::{MediaPlayer, PlayerEvent};
use tug_core::audio::AudioOutput;
use tug_offline::OfflineCache;
use url::Url;

/// Audio handle owned by the application state.
pub struct DesktopAudio {
    player: Arc<dyn MediaPlayer>,
    source: Option<String>,
    /// Source whose file is in the player.
    loaded: Option<String>,
    /// Source being resolved to a local file.
    fetching: Option<String>,
    /// Whether a resolved file should start playing.
    wants_play: bool,
    queued: Vec<String>,
}

impl DesktopAudio {
    pub fn new(player: Arc<dyn MediaPlayer>) -> Self {
        Self {
            player,
            source: None,
            loaded: None,
            fetching: None,
            wants_play: false,
            queued: Vec::new(),
        }
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// Take the sources that need a local file before they can play.
    pub fn take_queued(&mut self) -> Vec<String> {
        std::mem::take(&mut self.queued)
    }

    /// Load the file resolved for `source` and start it.
    ///
    /// Returns `false` when the source was replaced, cleared or paused in
    /// the meantime; the file is then left alone.
    pub fn source_ready(&mut self, source: &str, path: PathBuf) -> bool {
        if self.fetching.as_deref() != Some(source) {
            return false;
        }
        self.fetching = None;
        if !std::mem::take(&mut self.wants_play) {
            return false;
        }
        self.player.load(path);
        self.loaded = Some(source.to_string());
        true
    }

    /// Forget a source that could not be resolved.
    pub fn source_failed(&mut self, source: &str) {
        if self.fetching.as_deref() == Some(source) {
            self.fetching = None;
            self.wants_play = false;
        }
    }

    /// Take the events the player observed since the last call.
    pub fn poll_events(&self) -> Vec<PlayerEvent> {
        self.player.poll_events()
    }

    fn release(&mut self) {
        self.player.stop();
        self.loaded = None;
        self.fetching = None;
        self.wants_play = false;
    }
}

impl AudioOutput for DesktopAudio {
    fn set_source(&mut self, url: &str) {
        if self.source.as_deref().is_some_and(|current| current != url) {
            self.release();
        }
        self.source = Some(url.to_string());
    }

    fn play(&mut self) {
        let Some(source) = &self.source else {
            return;
        };
        if self.loaded.as_ref() == Some(source) {
            self.player.play();
        } else {
            self.wants_play = true;
            if self.fetching.as_ref() != Some(source) {
                self.fetching = Some(source.clone());
                self.queued.push(source.clone());
            }
        }
    }

    fn pause(&mut self) {
        self.wants_play = false;
        self.player.pause();
    }

    fn clear(&mut self) {
        self.release();
        self.source = None;
    }
}

impl std::fmt::Debug for DesktopAudio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DesktopAudio")
            .field("source", &self.source)
            .field("loaded", &self.loaded)
            .field("fetching", &self.fetching)
            .finish_non_exhaustive()
    }
}

/// Resolve `source` to a local file through the offline cache.
///
/// The cache stores the recording on first use, so a mantra played once
/// plays again without a network.
pub async fn resolve(source: String, cache: Option<OfflineCache>) -> Result<PathBuf, String> {
    let Some(cache) = cache else {
        tracing::warn!(%source, "No offline cache to download the mantra into");
        return Err("Mantra recordings need the offline cache, which is disabled".to_string());
    };
    let url = Url::parse(&source).map_err(|e| format!("Invalid audio URL: {}", e))?;
    let path = cache.fetch_to_file(&url).await.map_err(|err| {
        tracing::warn!(%source, error = %err, "Could not fetch mantra recording");
        "Could not load the mantra recording".to_string()
    })?;
    tracing::info!(path = %path.display(), "Mantra recording ready");
    Ok(path)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Player that records every call.
    #[derive(Debug, Default)]
    pub(crate) struct RecordingPlayer {
        pub calls: Mutex<Vec<String>>,
        pub events: Mutex<Vec<PlayerEvent>>,
    }

    impl RecordingPlayer {
        pub fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }

        fn push(&self, call: String) {
            self.calls.lock().unwrap().push(call);
        }
    }

    impl MediaPlayer for RecordingPlayer {
        fn load(&self, path: PathBuf) {
            self.push(format!("load {}", path.display()));
        }

        fn play(&self) {
            self.push("play".to_string());
        }

        fn pause(&self) {
            self.push("pause".to_string());
        }

        fn stop(&self) {
            self.push("stop".to_string());
        }

        fn poll_events(&self) -> Vec<PlayerEvent> {
            std::mem::take(&mut *self.events.lock().unwrap())
        }
    }

    fn audio() -> (DesktopAudio, Arc<RecordingPlayer>) {
        let player = Arc::new(RecordingPlayer::default());
        (DesktopAudio::new(Arc::clone(&player) as Arc<dyn MediaPlayer>), player)
    }

    #[test]
    fn test_first_play_waits_for_local_file() {
        let (mut audio, player) = audio();
        audio.set_source("https://cdn.test/a.mp3");
        audio.play();
        audio.play();

        assert_eq!(audio.take_queued(), vec!["https://cdn.test/a.mp3".to_string()]);
        assert!(audio.source_ready("https://cdn.test/a.mp3", PathBuf::from("/cache/a.mp3")));
        assert_eq!(player.calls(), vec!["load /cache/a.mp3"]);

        audio.pause();
        audio.play();
        assert_eq!(player.calls(), vec!["load /cache/a.mp3", "pause", "play"]);
        assert!(audio.take_queued().is_empty());
    }

    #[test]
    fn test_switching_source_stops_previous_track_first() {
        let (mut audio, player) = audio();
        audio.set_source("https://cdn.test/a.mp3");
        audio.play();
        audio.source_ready("https://cdn.test/a.mp3", PathBuf::from("/cache/a.mp3"));

        audio.pause();
        audio.set_source("https://cdn.test/b.mp3");
        audio.play();
        audio.source_ready("https://cdn.test/b.mp3", PathBuf::from("/cache/b.mp3"));

        assert_eq!(
            player.calls(),
            vec!["load /cache/a.mp3", "pause", "stop", "load /cache/b.mp3"]
        );
    }

    #[test]
    fn test_reselecting_same_source_resumes() {
        let (mut audio, player) = audio();
        audio.set_source("https://cdn.test/a.mp3");
        audio.play();
        audio.source_ready("https://cdn.test/a.mp3", PathBuf::from("/cache/a.mp3"));
        audio.pause();
        audio.set_source("https://cdn.test/a.mp3");
        audio.play();

        assert_eq!(player.calls(), vec!["load /cache/a.mp3", "pause", "play"]);
    }

    #[test]
    fn test_stale_file_is_not_loaded() {
        let (mut audio, player) = audio();
        audio.set_source("https://cdn.test/a.mp3");
        audio.play();
        audio.clear();

        assert!(!audio.source_ready("https://cdn.test/a.mp3", PathBuf::from("/cache/a.mp3")));
        assert_eq!(player.calls(), vec!["stop"]);
        assert_eq!(audio.source(), None);
    }

    #[test]
    fn test_pause_while_fetching_keeps_file_unplayed() {
        let (mut audio, player) = audio();
        audio.set_source("https://cdn.test/a.mp3");
        audio.play();
        audio.pause();

        assert!(!audio.source_ready("https://cdn.test/a.mp3", PathBuf::from("/cache/a.mp3")));
        assert_eq!(player.calls(), vec!["pause"]);
    }

    #[test]
    fn test_play_without_source_is_ignored() {
        let (mut audio, player) = audio();
        audio.play();

        assert!(audio.take_queued().is_empty());
        assert!(player.calls().is_empty());
    }
}
