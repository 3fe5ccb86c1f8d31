use crate::api::Episode;
use rand::Rng;

/// Queue and transport flags shared by every playback surface.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlaybackState {
    pub episode_list: Vec<Episode>,
    pub current_episode_index: usize,
    pub is_playing: bool,
    pub is_looping: bool,
    pub is_shuffling: bool,
}

impl PlaybackState {
    /// The selected episode, or `None` when the index points outside the queue.
    pub fn current_episode(&self) -> Option<&Episode> {
        self.episode_list.get(self.current_episode_index)
    }

    pub fn has_previous(&self) -> bool {
        self.current_episode_index > 0
    }

    pub fn has_next(&self) -> bool {
        self.is_shuffling || self.current_episode_index + 1 < self.episode_list.len()
    }

    pub fn play(&mut self, episode: Episode) {
        self.episode_list = vec![episode];
        self.current_episode_index = 0;
        self.is_playing = true;
    }

    pub fn play_list(&mut self, list: Vec<Episode>, index: usize) {
        self.episode_list = list;
        self.current_episode_index = index;
        self.is_playing = true;
    }

    pub fn toggle_play(&mut self) {
        self.is_playing = !self.is_playing;
    }

    pub fn toggle_loop(&mut self) {
        self.is_looping = !self.is_looping;
    }

    pub fn toggle_shuffle(&mut self) {
        self.is_shuffling = !self.is_shuffling;
    }

    pub fn set_playing_state(&mut self, playing: bool) {
        self.is_playing = playing;
    }

    pub fn play_next(&mut self) {
        self.play_next_with(&mut rand::thread_rng());
    }

    /// Shuffling picks any index in the queue, the current one included.
    pub fn play_next_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if self.is_shuffling {
            if !self.episode_list.is_empty() {
                self.current_episode_index = rng.gen_range(0..self.episode_list.len());
            }
        } else if self.has_next() {
            self.current_episode_index += 1;
        }
    }

    pub fn play_previous(&mut self) {
        if self.has_previous() {
            self.current_episode_index -= 1;
        }
    }

    pub fn clear_player_state(&mut self) {
        self.episode_list.clear();
        self.current_episode_index = 0;
    }
}
