use super::view_model::ControlStates;
use crate::playback::PlaybackContext;
use dioxus::prelude::*;

/// Icon button used for every transport control.
#[component]
pub(super) fn ControlButton(
    id: &'static str,
    icon: &'static str,
    alt: &'static str,
    disabled: bool,
    #[props(default)] active: bool,
    #[props(default)] primary: bool,
    onclick: EventHandler<MouseEvent>,
) -> Element {
    let mut class = String::from("control-button");
    if primary {
        class.push_str(" play-button");
    }
    if active {
        class.push_str(" is-active");
    }

    rsx! {
        button {
            id,
            r#type: "button",
            class: "{class}",
            disabled,
            onclick: move |evt| onclick.call(evt),
            img { src: icon, alt }
        }
    }
}

/// Shuffle, previous, play/pause, next and repeat, in that order.
#[component]
pub(super) fn PlayerControls(controls: ControlStates) -> Element {
    let playback = use_context::<PlaybackContext>();

    rsx! {
        div { class: "buttons",
            ControlButton {
                id: "shuffle-btn",
                icon: "/shuffle.svg",
                alt: "Shuffle",
                disabled: controls.shuffle.disabled,
                active: controls.shuffle.active,
                onclick: {
                    let mut playback = playback;
                    move |_| playback.toggle_shuffle()
                },
            }
            ControlButton {
                id: "prev-btn",
                icon: "/play-previous.svg",
                alt: "Play previous",
                disabled: controls.previous.disabled,
                onclick: {
                    let mut playback = playback;
                    move |_| playback.play_previous()
                },
            }
            ControlButton {
                id: "play-pause-btn",
                icon: controls.play_pause_icon,
                alt: controls.play_pause_label,
                disabled: controls.play_pause.disabled,
                primary: true,
                onclick: {
                    let mut playback = playback;
                    move |_| playback.toggle_play()
                },
            }
            ControlButton {
                id: "next-btn",
                icon: "/play-next.svg",
                alt: "Play next",
                disabled: controls.next.disabled,
                onclick: {
                    let mut playback = playback;
                    move |_| playback.play_next()
                },
            }
            ControlButton {
                id: "repeat-btn",
                icon: "/repeat.svg",
                alt: "Repeat",
                disabled: controls.repeat.disabled,
                active: controls.repeat.active,
                onclick: {
                    let mut playback = playback;
                    move |_| playback.toggle_loop()
                },
            }
        }
    }
}
