//! Episode feed parsing.
//!
//! The feed is a JSON document of the form `{ "episodes": [...] }` where each
//! entry keeps its media under a nested `file` object. A bare array of
//! already-flat episodes is accepted too.

use super::models::Episode;
use crate::error::Result;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum FeedDocument {
    Wrapped { episodes: Vec<FeedEntry> },
    Bare(Vec<FeedEntry>),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum FeedEntry {
    Nested(NestedEpisode),
    Flat(Episode),
}

#[derive(Debug, Deserialize)]
struct NestedEpisode {
    id: String,
    title: String,
    #[serde(default)]
    members: String,
    #[serde(default)]
    thumbnail: String,
    #[serde(default, alias = "publishedAt")]
    published_at: Option<String>,
    file: FeedFile,
}

#[derive(Debug, Deserialize)]
struct FeedFile {
    url: String,
    #[serde(default)]
    duration: f64,
}

impl From<FeedEntry> for Episode {
    fn from(entry: FeedEntry) -> Self {
        match entry {
            FeedEntry::Flat(episode) => episode,
            FeedEntry::Nested(nested) => Episode {
                id: nested.id,
                title: nested.title,
                members: nested.members,
                thumbnail: nested.thumbnail,
                duration: if nested.file.duration.is_finite() {
                    nested.file.duration.max(0.0).floor() as u32
                } else {
                    0
                },
                url: nested.file.url,
                published_at: nested.published_at,
            },
        }
    }
}

pub fn parse_episode_feed(raw: &str) -> Result<Vec<Episode>> {
    let document: FeedDocument = serde_json::from_str(raw)?;
    let entries = match document {
        FeedDocument::Wrapped { episodes } => episodes,
        FeedDocument::Bare(entries) => entries,
    };
    Ok(entries.into_iter().map(Episode::from).collect())
}
