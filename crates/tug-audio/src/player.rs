//! Mantra player.
//!
//! [`RodioPlayer`] owns a dedicated thread holding the output stream and at
//! most one [`Sink`]. Commands go in over a channel; playback changes come
//! back as [`PlayerEvent`]s the GUI drains on a timer.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};
use tracing::{debug, info, warn};
use tug_core::audio::AudioEvent;

use crate::error::{AudioError, Result};

/// How often the player thread checks whether the track ended.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Something the player observed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerEvent {
    Audio(AudioEvent),
    /// The track could not be played.
    Failed(String),
}

/// Handle to a media player. Calls never block.
pub trait MediaPlayer: Send + Sync {
    /// Replace the current track with the file at `path` and start it.
    fn load(&self, path: PathBuf);

    /// Resume the current track.
    fn play(&self);

    fn pause(&self);

    /// Drop the current track.
    fn stop(&self);

    /// Take the events observed since the last call.
    fn poll_events(&self) -> Vec<PlayerEvent>;
}

#[derive(Debug)]
enum Command {
    Load(PathBuf),
    Play,
    Pause,
    Stop,
}

/// Media player on the default output device.
pub struct RodioPlayer {
    commands: Sender<Command>,
    events: Mutex<Receiver<PlayerEvent>>,
}

impl RodioPlayer {
    /// Start the player thread.
    ///
    /// Fails with [`AudioError::NoOutputDevice`] when the host has no
    /// speaker.
    pub fn spawn() -> Result<Self> {
        let (commands, command_rx) = mpsc::channel();
        let (event_tx, events) = mpsc::channel();
        let (ready_tx, ready_rx) = mpsc::channel();

        std::thread::Builder::new()
            .name("mantra-player".into())
            .spawn(move || run(&command_rx, &event_tx, &ready_tx))
            .map_err(|e| AudioError::Stream(e.to_string()))?;

        ready_rx
            .recv()
            .map_err(|_| AudioError::NoOutputDevice)??;
        info!("Mantra player ready");
        Ok(Self {
            commands,
            events: Mutex::new(events),
        })
    }

    fn send(&self, command: Command) {
        if self.commands.send(command).is_err() {
            warn!("Mantra player thread is gone");
        }
    }
}

impl MediaPlayer for RodioPlayer {
    fn load(&self, path: PathBuf) {
        self.send(Command::Load(path));
    }

    fn play(&self) {
        self.send(Command::Play);
    }

    fn pause(&self) {
        self.send(Command::Pause);
    }

    fn stop(&self) {
        self.send(Command::Stop);
    }

    fn poll_events(&self) -> Vec<PlayerEvent> {
        let events = self.events.lock().unwrap_or_else(PoisonError::into_inner);
        events.try_iter().collect()
    }
}

impl std::fmt::Debug for RodioPlayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RodioPlayer").finish_non_exhaustive()
    }
}

/// Player thread body. Returns when the [`RodioPlayer`] is dropped.
fn run(commands: &Receiver<Command>, events: &Sender<PlayerEvent>, ready: &Sender<Result<()>>) {
    let (_stream, handle) = match OutputStream::try_default() {
        Ok(output) => output,
        Err(err) => {
            warn!(error = %err, "No audio output");
            let _ = ready.send(Err(AudioError::NoOutputDevice));
            return;
        }
    };
    let _ = ready.send(Ok(()));

    let emit = |event: PlayerEvent| {
        let _ = events.send(event);
    };
    let mut sink: Option<Sink> = None;
    let mut playing = false;

    loop {
        match commands.recv_timeout(POLL_INTERVAL) {
            Ok(Command::Load(path)) => {
                if let Some(previous) = sink.take() {
                    previous.stop();
                }
                match open_track(&handle, &path) {
                    Ok(track) => {
                        debug!(path = %path.display(), "Track loaded");
                        sink = Some(track);
                        playing = true;
                        emit(PlayerEvent::Audio(AudioEvent::Play));
                    }
                    Err(err) => {
                        warn!(error = %err, "Cannot play track");
                        if std::mem::take(&mut playing) {
                            emit(PlayerEvent::Audio(AudioEvent::Pause));
                        }
                        emit(PlayerEvent::Failed(err.to_string()));
                    }
                }
            }
            Ok(Command::Play) => {
                if let Some(track) = &sink {
                    track.play();
                    if !playing {
                        playing = true;
                        emit(PlayerEvent::Audio(AudioEvent::Play));
                    }
                }
            }
            Ok(Command::Pause) => {
                if let Some(track) = &sink {
                    track.pause();
                }
                if std::mem::take(&mut playing) {
                    emit(PlayerEvent::Audio(AudioEvent::Pause));
                }
            }
            Ok(Command::Stop) => {
                if let Some(track) = sink.take() {
                    track.stop();
                }
                if std::mem::take(&mut playing) {
                    emit(PlayerEvent::Audio(AudioEvent::Pause));
                }
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }

        if playing && sink.as_ref().is_some_and(Sink::empty) {
            debug!("Track ended");
            playing = false;
            sink = None;
            emit(PlayerEvent::Audio(AudioEvent::Ended));
        }
    }
    debug!("Mantra player stopped");
}

fn open_track(handle: &OutputStreamHandle, path: &Path) -> Result<Sink> {
    let decode_error = |reason: String| AudioError::Decode {
        path: path.display().to_string(),
        reason,
    };
    let file = File::open(path).map_err(|e| decode_error(e.to_string()))?;
    let source = Decoder::new(BufReader::new(file)).map_err(|e| decode_error(e.to_string()))?;
    let sink = Sink::try_new(handle).map_err(|e| AudioError::Stream(e.to_string()))?;
    sink.append(source);
    Ok(sink)
}

/// Player used when the host has no speaker. Every track fails.
#[derive(Debug, Default)]
pub struct NoOutputPlayer {
    events: Mutex<Vec<PlayerEvent>>,
}

impl NoOutputPlayer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MediaPlayer for NoOutputPlayer {
    fn load(&self, path: PathBuf) {
        debug!(path = %path.display(), "No audio output for track");
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(PlayerEvent::Failed(AudioError::NoOutputDevice.to_string()));
    }

    fn play(&self) {}

    fn pause(&self) {}

    fn stop(&self) {}

    fn poll_events(&self) -> Vec<PlayerEvent> {
        std::mem::take(&mut *self.events.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_output_player_fails_each_track_once() {
        let player = NoOutputPlayer::new();
        player.play();
        assert!(player.poll_events().is_empty());

        player.load(PathBuf::from("/tmp/om.mp3"));
        assert_eq!(
            player.poll_events(),
            vec![PlayerEvent::Failed("no audio output device found".to_string())]
        );
        assert!(player.poll_events().is_empty());
    }
}
