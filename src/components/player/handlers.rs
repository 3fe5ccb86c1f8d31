//! Bodies of the player's media and slider handlers.

use crate::components::{progress_from_time, MediaBinding, MediaElement, TimeUpdateFn};
use crate::error::PlayerError;
use crate::playback::PlaybackContext;
use dioxus::logger::tracing::{debug, info, warn};
use dioxus::prelude::*;

/// Makes the element follow the playing flag. A detached binding is skipped.
pub(super) fn apply_playing<M: MediaElement>(media: &MediaBinding<M>, playing: bool) {
    match media.sync_playing(playing) {
        Ok(()) => debug!(playing, "synchronized media element"),
        Err(PlayerError::Detached) => {}
        Err(err) => warn!(%err, playing, "failed to synchronize media element"),
    }
}

/// Binds `element` for a freshly loaded episode and starts tracking progress.
///
/// A play request made while the element was still missing is replayed here.
/// A paused flag is left alone so `autoplay` can still start the episode.
pub(super) fn load_metadata<M: MediaElement>(
    media: &mut MediaBinding<M>,
    element: Option<M>,
    playback: PlaybackContext,
    mut progress: Signal<u32>,
) {
    progress.set(0);
    let Some(element) = element else {
        debug!("metadata loaded without a reachable media element");
        return;
    };
    let duration = playback.peek_episode().map(|e| e.duration).unwrap_or(0);
    if let Some(episode) = playback.peek_episode() {
        info!(episode = %episode.id, duration, "episode metadata loaded");
    }

    let mut tracked = progress;
    let on_tick: TimeUpdateFn =
        Box::new(move |seconds| tracked.set(progress_from_time(seconds, duration)));

    media.attach(element);
    if let Err(err) = media.setup_progress_listener(on_tick) {
        warn!(%err, "could not register progress listener");
        return;
    }
    if playback.peek_is_playing() {
        apply_playing(media, true);
    }
}

/// Moves the element to `value` seconds and shows it at once.
pub(super) fn seek<M: MediaElement>(
    media: &MediaBinding<M>,
    playback: PlaybackContext,
    mut progress: Signal<u32>,
    value: f64,
) -> u32 {
    let duration = playback.peek_episode().map(|e| e.duration).unwrap_or(0);
    let target = progress_from_time(value, duration);
    if let Err(err) = media.seek(target) {
        debug!(%err, target, "seek before media attached");
    }
    progress.set(target);
    target
}

/// Advances the queue when the episode finishes. Returns whether it moved.
pub(super) fn episode_ended(mut playback: PlaybackContext) -> bool {
    if playback.has_next() {
        playback.play_next();
        true
    } else {
        debug!("episode ended with nothing queued after it");
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Episode;
    use crate::components::media_binding::testing::{Call, RecordingElement};
    use crate::db::ProgressListenerMode;
    use crate::playback::PlaybackState;
    use crate::test_scope::run_in_scope;

    fn playback_with(len: usize, index: usize, playing: bool) -> PlaybackContext {
        let state = PlaybackState {
            episode_list: (0..len)
                .map(|i| Episode {
                    id: i.to_string(),
                    title: format!("Episode {i}"),
                    duration: 100,
                    url: format!("/{i}.m4a"),
                    ..Episode::default()
                })
                .collect(),
            current_episode_index: index,
            is_playing: playing,
            ..PlaybackState::default()
        };
        PlaybackContext::new(Signal::new(state))
    }

    #[test]
    fn metadata_resets_progress_and_tracks_time() {
        let html = run_in_scope(|| {
            let playback = playback_with(1, 0, false);
            let progress = Signal::new(37u32);
            let element = RecordingElement::default();
            let mut media = MediaBinding::new(ProgressListenerMode::Single);

            load_metadata(&mut media, Some(element.clone()), playback, progress);
            let reset = *progress.peek();
            element.advance_to(12.7);
            let ticked = *progress.peek();
            element.advance_to(250.0);
            let clamped = *progress.peek();

            format!("reset={reset} ticked={ticked} clamped={clamped} calls={:?}", element.calls())
        });
        assert!(html.contains("reset=0 ticked=12 clamped=100 calls=[SetTime(0.0)]"));
    }

    #[test]
    fn metadata_without_element_still_resets_progress() {
        let html = run_in_scope(|| {
            let playback = playback_with(1, 0, true);
            let progress = Signal::new(64u32);
            let mut media = MediaBinding::<RecordingElement>::new(ProgressListenerMode::Single);
            load_metadata(&mut media, None, playback, progress);
            format!("progress={} attached={}", *progress.peek(), media.is_attached())
        });
        assert!(html.contains("progress=0 attached=false"));
    }

    #[test]
    fn play_requested_before_attach_starts_element_on_metadata() {
        let html = run_in_scope(|| {
            let playback = playback_with(2, 0, true);
            let progress = Signal::new(0u32);
            let element = RecordingElement::default();
            let mut media = MediaBinding::new(ProgressListenerMode::Single);

            apply_playing(&media, playback.peek_is_playing());
            let before = element.calls().len();
            load_metadata(&mut media, Some(element.clone()), playback, progress);

            format!("before={before} played={}", element.calls().contains(&Call::Play))
        });
        assert!(html.contains("before=0 played=true"));
    }

    #[test]
    fn paused_flag_is_not_forced_onto_a_new_element() {
        let html = run_in_scope(|| {
            let playback = playback_with(1, 0, false);
            let element = RecordingElement::default();
            let mut media = MediaBinding::new(ProgressListenerMode::Single);
            load_metadata(&mut media, Some(element.clone()), playback, Signal::new(0u32));
            let calls = element.calls();
            format!(
                "play={} pause={}",
                calls.contains(&Call::Play),
                calls.contains(&Call::Pause)
            )
        });
        assert!(html.contains("play=false pause=false"));
    }

    #[test]
    fn seek_shows_target_immediately() {
        let html = run_in_scope(|| {
            let playback = playback_with(1, 0, true);
            let progress = Signal::new(5u32);
            let element = RecordingElement::default();
            let mut media = MediaBinding::new(ProgressListenerMode::Single);
            media.attach(element.clone());

            let target = seek(&media, playback, progress, 42.0);
            format!("target={target} progress={} element={}", *progress.peek(), element.time())
        });
        assert!(html.contains("target=42 progress=42 element=42"));
    }

    #[test]
    fn seek_while_detached_still_updates_progress() {
        let html = run_in_scope(|| {
            let playback = playback_with(1, 0, false);
            let progress = Signal::new(0u32);
            let media = MediaBinding::<RecordingElement>::new(ProgressListenerMode::Single);
            seek(&media, playback, progress, 130.0);
            format!("progress={}", *progress.peek())
        });
        assert!(html.contains("progress=100"));
    }

    #[test]
    fn ended_advances_only_when_next_exists() {
        let html = run_in_scope(|| {
            let playback = playback_with(2, 0, true);
            let first = episode_ended(playback);
            let index_after_first = playback.peek_episode().map(|e| e.id).unwrap_or_default();
            let second = episode_ended(playback);
            let index_after_second = playback.peek_episode().map(|e| e.id).unwrap_or_default();
            format!("{first}/{index_after_first} {second}/{index_after_second}")
        });
        assert!(html.contains("true/1 false/1"));
    }

    #[test]
    fn sync_follows_flag_once_attached() {
        let html = run_in_scope(|| {
            let element = RecordingElement::default();
            let mut media = MediaBinding::new(ProgressListenerMode::Single);
            apply_playing(&media, true);
            media.attach(element.clone());
            apply_playing(&media, true);
            apply_playing(&media, false);
            format!("{:?}", element.calls())
        });
        assert!(html.contains("[Play, Pause]"));
    }
}
