use crate::api::{format_duration, Episode};
use crate::playback::PlaybackState;

pub const PLAY_ICON: &str = "/play.svg";
pub const PAUSE_ICON: &str = "/pause.svg";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ButtonState {
    pub disabled: bool,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SliderModel {
    Interactive { max: u32, value: u32 },
    Empty,
}

/// Attributes of the `audio` element rendered for the current episode.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaSource {
    pub src: String,
    pub looping: bool,
    pub autoplay: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ControlStates {
    pub shuffle: ButtonState,
    pub previous: ButtonState,
    pub play_pause: ButtonState,
    pub play_pause_icon: &'static str,
    pub play_pause_label: &'static str,
    pub next: ButtonState,
    pub repeat: ButtonState,
}

/// Everything the player panel renders, derived from one state snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerViewModel {
    pub episode: Option<Episode>,
    pub footer_empty: bool,
    pub progress_label: String,
    pub duration_label: String,
    pub slider: SliderModel,
    pub media: Option<MediaSource>,
    pub controls: ControlStates,
}

impl PlayerViewModel {
    pub fn derive(state: &PlaybackState, progress: u32, autoplay: bool) -> Self {
        let episode = state.current_episode().cloned();
        let has_episode = episode.is_some();

        let (slider, duration, media) = match episode.as_ref() {
            Some(ep) => (
                SliderModel::Interactive {
                    max: ep.duration,
                    value: progress.min(ep.duration),
                },
                ep.duration,
                Some(MediaSource {
                    src: ep.url.clone(),
                    looping: state.is_looping,
                    autoplay,
                }),
            ),
            None => (SliderModel::Empty, 0, None),
        };

        let progress_label = if has_episode {
            format_duration(progress.min(duration))
        } else {
            format_duration(0)
        };

        let controls = ControlStates {
            shuffle: ButtonState {
                disabled: !has_episode || state.episode_list.len() <= 1,
                active: state.is_shuffling,
            },
            previous: ButtonState {
                disabled: !has_episode || !state.has_previous(),
                active: false,
            },
            play_pause: ButtonState {
                disabled: !has_episode,
                active: false,
            },
            play_pause_icon: if state.is_playing { PAUSE_ICON } else { PLAY_ICON },
            play_pause_label: if state.is_playing { "Pause" } else { "Play" },
            next: ButtonState {
                disabled: !has_episode || !state.has_next(),
                active: false,
            },
            repeat: ButtonState {
                disabled: !has_episode,
                active: state.is_looping,
            },
        };

        Self {
            episode,
            footer_empty: !has_episode,
            progress_label,
            duration_label: format_duration(duration),
            slider,
            media,
            controls,
        }
    }
}
