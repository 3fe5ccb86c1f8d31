use crate::api::{parse_episode_feed, Episode};
use crate::components::{EpisodeList, PlayerView};
use crate::db::{load_settings, save_settings, PlayerSettings};
use crate::playback::{PlaybackContext, PlaybackState};
use dioxus::logger::tracing::{error, info, warn};
use dioxus::prelude::*;

const EPISODE_FEED: &str = include_str!("../../assets/episodes.json");

fn load_feed() -> Vec<Episode> {
    match parse_episode_feed(EPISODE_FEED) {
        Ok(episodes) => {
            info!(count = episodes.len(), "loaded episode feed");
            episodes
        }
        Err(err) => {
            error!(%err, "failed to parse episode feed");
            Vec::new()
        }
    }
}

#[component]
pub fn AppShell() -> Element {
    let playback_state = use_signal(PlaybackState::default);
    let playback = PlaybackContext::new(playback_state);
    let mut settings = use_signal(|| {
        load_settings().unwrap_or_else(|err| {
            warn!(%err, "using default settings");
            PlayerSettings::default()
        })
    });
    let episodes = use_hook(load_feed);

    // Provide state via context
    use_context_provider(|| playback);
    use_context_provider(|| settings);

    let on_autoplay_change = move |e: Event<FormData>| {
        let autoplay = e.checked();
        settings.with_mut(|s| s.autoplay = autoplay);
        if let Err(err) = save_settings(&settings.peek()) {
            warn!(%err, "failed to save settings");
        }
    };

    rsx! {
        div { class: "app-shell",
            main { class: "app-shell__main",
                EpisodeList { episodes }
                label { class: "app-shell__setting",
                    input {
                        r#type: "checkbox",
                        checked: settings.read().autoplay,
                        onchange: on_autoplay_change,
                    }
                    "Start episodes automatically"
                }
            }
            aside { class: "app-shell__player",
                PlayerView {}
            }
        }
    }
}
