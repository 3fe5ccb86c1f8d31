use crate::api::{format_duration, Episode};
use crate::playback::PlaybackContext;
use dioxus::prelude::*;

/// The feed's episodes, each playable alone or as the start of the whole list.
#[component]
pub fn EpisodeList(episodes: Vec<Episode>) -> Element {
    let playback = use_context::<PlaybackContext>();
    let state = playback.snapshot();
    let current_id = state.current_episode().map(|e| e.id.clone());

    rsx! {
        section { class: "episode-list",
            header { class: "episode-list__header",
                h2 { "Latest episodes" }
                if !state.episode_list.is_empty() {
                    button {
                        r#type: "button",
                        class: "episode-list__clear",
                        onclick: {
                            let mut playback = playback;
                            move |_| playback.clear_player_state()
                        },
                        "Clear queue"
                    }
                }
            }

            if episodes.is_empty() {
                p { class: "episode-list__empty", "No episodes available" }
            } else {
                ul {
                    for (idx, episode) in episodes.iter().enumerate() {
                        {
                            let is_current = current_id.as_deref() == Some(episode.id.as_str());
                            let single = episode.clone();
                            let list = episodes.clone();
                            rsx! {
                                li {
                                    key: "{episode.id}",
                                    class: if is_current { "episode-list__item is-current" } else { "episode-list__item" },
                                    img {
                                        src: "{episode.thumbnail}",
                                        alt: "{episode.title}",
                                        width: "64",
                                        height: "64",
                                    }
                                    div { class: "episode-list__details",
                                        strong { "{episode.title}" }
                                        span { "{episode.members}" }
                                        if let Some(published) = episode.published_at.as_ref() {
                                            span { class: "episode-list__date", "{published}" }
                                        }
                                        span { class: "episode-list__duration", "{format_duration(episode.duration)}" }
                                    }
                                    button {
                                        r#type: "button",
                                        onclick: {
                                            let mut playback = playback;
                                            move |_| playback.play(single.clone())
                                        },
                                        "Play"
                                    }
                                    button {
                                        r#type: "button",
                                        onclick: {
                                            let mut playback = playback;
                                            move |_| playback.play_list(list.clone(), idx)
                                        },
                                        "Play from here"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
