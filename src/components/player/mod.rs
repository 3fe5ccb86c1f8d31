use crate::components::{locate_media_element, MediaBinding, PlatformMedia};
use crate::db::PlayerSettings;
use crate::playback::PlaybackContext;
use dioxus::prelude::*;

mod controls;
mod handlers;
mod view_model;

use controls::PlayerControls;
pub use view_model::*;

pub const AUDIO_ELEMENT_ID: &str = "podcast-player-audio";

/// The "now playing" panel: episode details, seek slider, audio element and
/// transport controls.
#[component]
pub fn PlayerView() -> Element {
    let playback = use_context::<PlaybackContext>();
    let settings = use_context::<Signal<PlayerSettings>>();
    let mut progress = use_signal(|| 0u32);
    let mut media = use_signal(|| {
        MediaBinding::<PlatformMedia>::new(settings.peek().progress_listener)
    });

    let is_playing = use_memo(move || playback.is_playing());
    let has_episode = use_memo(move || playback.snapshot().current_episode().is_some());

    // The UI flag is authoritative; the element follows it.
    use_effect(move || {
        let playing = is_playing();
        handlers::apply_playing(&*media.peek(), playing);
    });

    // The audio element unmounts with the last episode.
    use_effect(move || {
        if !has_episode() {
            media.write().detach();
            progress.set(0);
        }
    });

    let state = playback.snapshot();
    let model = PlayerViewModel::derive(&state, progress(), settings.read().autoplay);

    let on_loaded_metadata = move |_: Event<MediaData>| {
        let element = locate_media_element(AUDIO_ELEMENT_ID);
        handlers::load_metadata(&mut *media.write(), element, playback, progress);
    };

    let on_seek = move |evt: Event<FormData>| {
        if let Ok(value) = evt.value().parse::<f64>() {
            handlers::seek(&*media.peek(), playback, progress, value);
        }
    };

    let on_ended = move |_: Event<MediaData>| {
        handlers::episode_ended(playback);
    };

    let on_play = {
        let mut playback = playback;
        move |_: Event<MediaData>| playback.set_playing_state(true)
    };

    let on_pause = {
        let mut playback = playback;
        move |_: Event<MediaData>| playback.set_playing_state(false)
    };

    rsx! {
        div { class: "player-container",
            header {
                img { src: "/playing.svg", alt: "Now playing" }
                strong { "Now playing" }
            }

            {
                match &model.episode {
                    Some(episode) => rsx! {
                        div { class: "current-episode",
                            img {
                                width: "592",
                                height: "592",
                                src: "{episode.thumbnail}",
                                alt: "{episode.title}",
                                style: "object-fit: cover",
                            }
                            strong { "{episode.title}" }
                            span { "{episode.members}" }
                        }
                    },
                    None => rsx! {
                        div { class: "empty-player",
                            strong { "Select a podcast to listen to" }
                        }
                    },
                }
            }

            footer { class: if model.footer_empty { "empty" } else { "" },
                div { class: "progress",
                    span { "{model.progress_label}" }
                    div { class: "slider",
                        {
                            match model.slider {
                                SliderModel::Interactive { max, value } => rsx! {
                                    input {
                                        r#type: "range",
                                        class: "seek-slider",
                                        min: "0",
                                        max: "{max}",
                                        step: "1",
                                        value: "{value}",
                                        oninput: on_seek,
                                    }
                                },
                                SliderModel::Empty => rsx! {
                                    div { class: "empty-slider" }
                                },
                            }
                        }
                    }
                    span { "{model.duration_label}" }
                }

                if let Some(source) = model.media.clone() {
                    audio {
                        id: AUDIO_ELEMENT_ID,
                        src: "{source.src}",
                        r#loop: source.looping,
                        autoplay: source.autoplay,
                        onended: on_ended,
                        onplay: on_play,
                        onpause: on_pause,
                        onloadedmetadata: on_loaded_metadata,
                    }
                }

                PlayerControls { controls: model.controls.clone() }
            }
        }
    }
}
