use dioxus::logger::tracing::{warn, Level};
use dioxus::prelude::*;

mod api;
mod components;
mod db;
mod error;
mod playback;
#[cfg(test)]
mod test_scope;

use components::AppShell;

const APP_CSS: Asset = asset!("/assets/styling/player.css");

fn main() {
    let settings = db::load_settings();
    let level = settings
        .as_ref()
        .map(|s| s.tracing_level())
        .unwrap_or(Level::INFO);
    if let Err(err) = dioxus::logger::init(level) {
        eprintln!("Failed to initialize logging: {err}");
    }
    if let Err(err) = settings {
        warn!(%err, "settings unavailable, falling back to defaults");
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Meta { name: "theme-color", content: "#8257e5" }
        document::Title { "Podcast Player" }
        document::Stylesheet { href: APP_CSS }

        AppShell {}
    }
}
