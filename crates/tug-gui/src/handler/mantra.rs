//! Mantra soundscape handler.
//!
//! The view issues audio calls on [`DesktopAudio`](crate::service::DesktopAudio);
//! after every operation that may have touched it, [`playback_tasks`]
//! turns the sources waiting for a local file into fetch tasks. Player
//! events are drained on [`MantraMessage::PlayerTick`].

use std::sync::Arc;

use iced::Task;
use tug_audio::PlayerEvent;
use tug_core::audio::AudioEvent;

use super::MessageHandler;
use crate::component::ToastState;
use crate::message::{MantraMessage, Message};
use crate::service::audio;
use crate::state::AppState;

/// Handler for mantra soundscape messages.
pub struct MantraHandler;

impl MessageHandler<MantraMessage> for MantraHandler {
    fn handle(&self, state: &mut AppState, msg: MantraMessage) -> Task<Message> {
        match msg {
            MantraMessage::SelectCategory(category) => {
                state.mantra.select_category(Some(category));
                Task::none()
            }

            MantraMessage::SelectMantra(mantra) => {
                state.mantra.select_mantra(Some(mantra), &mut state.audio);
                playback_tasks(state)
            }

            MantraMessage::TogglePlayback => {
                state.mantra.toggle_audio(&mut state.audio);
                playback_tasks(state)
            }

            MantraMessage::PlayerTick => {
                for event in state.audio.poll_events() {
                    match event {
                        // Late events for a player that is gone are dropped
                        PlayerEvent::Audio(event) if state.mantra.mantra().is_some() => {
                            state.mantra.on_audio_event(event);
                        }
                        PlayerEvent::Audio(_) => {}
                        PlayerEvent::Failed(err) => playback_failed(state, err),
                    }
                }
                Task::none()
            }

            MantraMessage::SourceReady(source, Ok(path)) => {
                if !state.audio.source_ready(&source, path) {
                    tracing::debug!(%source, "Resolved mantra no longer wanted");
                }
                Task::none()
            }

            MantraMessage::SourceReady(source, Err(err)) => {
                state.audio.source_failed(&source);
                playback_failed(state, err);
                Task::none()
            }

            MantraMessage::RequestInsight => {
                let Some((ticket, mantra)) = state.mantra.request_insight() else {
                    return Task::none();
                };
                let provider = Arc::clone(&state.services.provider);
                Task::perform(
                    async move {
                        provider
                            .mantra_insight(mantra.name.to_string(), mantra.meaning.to_string())
                            .await
                    },
                    move |result| Message::Mantra(MantraMessage::InsightLoaded(ticket, result)),
                )
            }

            MantraMessage::InsightLoaded(ticket, result) => {
                if let Err(err) = &result {
                    tracing::warn!(ticket = ticket.id(), error = %err, "Mantra insight failed");
                }
                state.mantra.settle_insight(ticket, result);
                Task::none()
            }
        }
    }
}

fn playback_failed(state: &mut AppState, err: String) {
    tracing::warn!(error = %err, "Mantra playback failed");
    state.mantra.on_audio_event(AudioEvent::Pause);
    state.toast = Some(ToastState::error(err));
}

/// Fetch the local files of the sources queued since the last call.
pub(super) fn playback_tasks(state: &mut AppState) -> Task<Message> {
    let tasks = state
        .audio
        .take_queued()
        .into_iter()
        .map(|source| {
            let cache = state.services.cache.clone();
            let ready = source.clone();
            Task::perform(audio::resolve(source, cache), move |result| {
                Message::Mantra(MantraMessage::SourceReady(ready.clone(), result))
            })
        })
        .collect::<Vec<_>>();
    Task::batch(tasks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::audio::tests::RecordingPlayer;
    use crate::settings::Settings;
    use crate::state::Services;
    use chrono::NaiveDate;
    use std::path::PathBuf;
    use tug_audio::MediaPlayer;
    use tug_core::catalog::{MANTRA_CATEGORIES, Mantra};

    static GAYATRI: Mantra = Mantra {
        name: "Gayatri Mantra",
        sanskrit: "ॐ भूर्भुवः स्वः",
        meaning: "We meditate on the glory of the Creator.",
        audio_url: "https://cdn.test/gayatri.mp3",
    };

    fn state() -> (AppState, Arc<RecordingPlayer>) {
        let player = Arc::new(RecordingPlayer::default());
        let services = Services {
            player: Arc::clone(&player) as Arc<dyn MediaPlayer>,
            ..Services::offline()
        };
        let state = AppState::new(
            Settings::default(),
            services,
            NaiveDate::from_ymd_opt(2026, 4, 15).unwrap(),
        );
        (state, player)
    }

    fn report(player: &RecordingPlayer, event: PlayerEvent) {
        player.events.lock().unwrap().push(event);
    }

    #[test]
    fn test_selecting_mantra_sets_source() {
        let (mut state, _) = state();
        let category = &MANTRA_CATEGORIES[0];
        let mantra = &category.mantras[0];
        let _ = MantraHandler.handle(&mut state, MantraMessage::SelectCategory(category));
        let _ = MantraHandler.handle(&mut state, MantraMessage::SelectMantra(mantra));

        assert_eq!(state.audio.source(), Some(mantra.audio_url));
        assert!(!state.mantra.is_playing());
    }

    #[test]
    fn test_play_pause_play_reuses_one_track() {
        let (mut state, player) = state();
        let mantra = &MANTRA_CATEGORIES[0].mantras[0];
        let _ = MantraHandler.handle(&mut state, MantraMessage::SelectMantra(mantra));

        let _ = MantraHandler.handle(&mut state, MantraMessage::TogglePlayback);
        let _ = MantraHandler.handle(
            &mut state,
            MantraMessage::SourceReady(
                mantra.audio_url.to_string(),
                Ok(PathBuf::from("/cache/om.mp3")),
            ),
        );
        report(&player, PlayerEvent::Audio(AudioEvent::Play));
        let _ = MantraHandler.handle(&mut state, MantraMessage::PlayerTick);
        assert!(state.mantra.is_playing());

        let _ = MantraHandler.handle(&mut state, MantraMessage::TogglePlayback);
        report(&player, PlayerEvent::Audio(AudioEvent::Pause));
        let _ = MantraHandler.handle(&mut state, MantraMessage::PlayerTick);
        assert!(!state.mantra.is_playing());

        let _ = MantraHandler.handle(&mut state, MantraMessage::TogglePlayback);
        assert_eq!(player.calls(), vec!["load /cache/om.mp3", "pause", "play"]);
    }

    #[test]
    fn test_switching_mantra_stops_previous_track_before_new_source() {
        let (mut state, player) = state();
        let first = &MANTRA_CATEGORIES[0].mantras[0];
        let second = &GAYATRI;
        let _ = MantraHandler.handle(&mut state, MantraMessage::SelectMantra(first));
        let _ = MantraHandler.handle(&mut state, MantraMessage::TogglePlayback);
        let _ = MantraHandler.handle(
            &mut state,
            MantraMessage::SourceReady(first.audio_url.to_string(), Ok(PathBuf::from("/a.mp3"))),
        );
        report(&player, PlayerEvent::Audio(AudioEvent::Play));
        let _ = MantraHandler.handle(&mut state, MantraMessage::PlayerTick);

        let _ = MantraHandler.handle(&mut state, MantraMessage::SelectMantra(second));

        assert_eq!(player.calls(), vec!["load /a.mp3", "pause", "stop"]);
        assert_eq!(state.audio.source(), Some(second.audio_url));
        assert!(!state.mantra.is_playing());
    }

    #[test]
    fn test_ended_track_shows_play_again() {
        let (mut state, player) = state();
        let _ = MantraHandler.handle(
            &mut state,
            MantraMessage::SelectMantra(&MANTRA_CATEGORIES[0].mantras[0]),
        );
        report(&player, PlayerEvent::Audio(AudioEvent::Play));
        report(&player, PlayerEvent::Audio(AudioEvent::Ended));
        let _ = MantraHandler.handle(&mut state, MantraMessage::PlayerTick);

        assert!(!state.mantra.is_playing());
    }

    #[test]
    fn test_player_failure_is_shown() {
        let (mut state, player) = state();
        let _ = MantraHandler.handle(
            &mut state,
            MantraMessage::SelectMantra(&MANTRA_CATEGORIES[0].mantras[0]),
        );
        report(&player, PlayerEvent::Failed("no audio output device found".to_string()));
        let _ = MantraHandler.handle(&mut state, MantraMessage::PlayerTick);

        assert!(!state.mantra.is_playing());
        assert!(state.toast.is_some());
    }

    #[test]
    fn test_late_event_after_teardown_is_ignored() {
        let (mut state, player) = state();
        report(&player, PlayerEvent::Audio(AudioEvent::Play));
        let _ = MantraHandler.handle(&mut state, MantraMessage::PlayerTick);
        assert!(!state.mantra.is_playing());
    }
}
