use thiserror::Error;

/// Errors surfaced by the player, the episode feed and the settings layer.
#[derive(Debug, Error)]
pub enum PlayerError {
    /// A media operation was attempted before an element was attached.
    #[error("no media element is attached")]
    Detached,
    #[error("media platform error: {0}")]
    Platform(String),
    #[error("invalid episode feed: {0}")]
    Feed(#[from] serde_json::Error),
    #[error("settings unavailable: {0}")]
    Settings(String),
}

pub type Result<T> = std::result::Result<T, PlayerError>;
