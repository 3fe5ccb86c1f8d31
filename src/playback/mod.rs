//! Shared playback store and the controller handed to views through context.

mod state;

pub use state::PlaybackState;

use crate::api::Episode;
use dioxus::logger::tracing::info;
use dioxus::prelude::*;

/// Copyable handle over the shared [`PlaybackState`] signal.
///
/// Views read snapshots with [`PlaybackContext::snapshot`] and mutate only
/// through the action methods, so the store has a single writer path.
#[derive(Clone, Copy, PartialEq)]
pub struct PlaybackContext {
    state: Signal<PlaybackState>,
}

impl PlaybackContext {
    pub fn new(state: Signal<PlaybackState>) -> Self {
        Self { state }
    }

    /// Reads the state and subscribes the calling scope to changes.
    pub fn snapshot(&self) -> PlaybackState {
        (self.state)()
    }

    pub fn is_playing(&self) -> bool {
        self.state.read().is_playing
    }

    /// The playing flag, read without subscribing.
    pub fn peek_is_playing(&self) -> bool {
        self.state.peek().is_playing
    }

    pub fn has_next(&self) -> bool {
        self.state.peek().has_next()
    }

    /// The current episode, read without subscribing. For event handlers.
    pub fn peek_episode(&self) -> Option<Episode> {
        self.state.peek().current_episode().cloned()
    }

    pub fn play(&mut self, episode: Episode) {
        info!(episode = %episode.id, "playing single episode");
        self.state.with_mut(|state| state.play(episode));
    }

    pub fn play_list(&mut self, list: Vec<Episode>, index: usize) {
        info!(index, len = list.len(), "playing episode list");
        self.state.with_mut(|state| state.play_list(list, index));
    }

    pub fn toggle_play(&mut self) {
        self.state.with_mut(PlaybackState::toggle_play);
    }

    pub fn toggle_loop(&mut self) {
        self.state.with_mut(PlaybackState::toggle_loop);
    }

    pub fn toggle_shuffle(&mut self) {
        self.state.with_mut(PlaybackState::toggle_shuffle);
    }

    pub fn set_playing_state(&mut self, playing: bool) {
        if self.state.peek().is_playing != playing {
            self.state.with_mut(|state| state.set_playing_state(playing));
        }
    }

    pub fn play_next(&mut self) {
        self.state.with_mut(PlaybackState::play_next);
        info!(index = self.state.peek().current_episode_index, "advanced to next episode");
    }

    pub fn play_previous(&mut self) {
        self.state.with_mut(PlaybackState::play_previous);
        info!(index = self.state.peek().current_episode_index, "went back to previous episode");
    }

    pub fn clear_player_state(&mut self) {
        self.state.with_mut(PlaybackState::clear_player_state);
    }
}
