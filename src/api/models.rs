use serde::{Deserialize, Serialize};

/// A playable podcast episode as carried through the queue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Episode {
    pub id: String,
    pub title: String,
    /// Display label for the people on the episode.
    #[serde(default)]
    pub members: String,
    #[serde(default)]
    pub thumbnail: String,
    /// Length in whole seconds.
    #[serde(default)]
    pub duration: u32,
    pub url: String,
    #[serde(default, alias = "publishedAt")]
    pub published_at: Option<String>,
}

/// Formats whole seconds as `MM:SS`. Minutes are not wrapped into hours.
pub fn format_duration(seconds: u32) -> String {
    let mins = seconds / 60;
    let secs = seconds % 60;
    format!("{:02}:{:02}", mins, secs)
}
