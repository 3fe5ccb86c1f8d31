//! Player settings storage.
//!
//! Browsers keep settings in `LocalStorage`; native builds keep a JSON file
//! under the user's config directory.

use crate::error::{PlayerError, Result};
use serde::{Deserialize, Serialize};

#[cfg(target_arch = "wasm32")]
use gloo_storage::{LocalStorage, Storage};

#[cfg(target_arch = "wasm32")]
const SETTINGS_KEY: &str = "podcast-player.settings";
#[cfg(not(target_arch = "wasm32"))]
const SETTINGS_FILE: &str = "settings.json";
#[cfg(not(target_arch = "wasm32"))]
const APP_DIR: &str = "podcast-player";

/// How time-update subscriptions are handled when a new episode loads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProgressListenerMode {
    /// Release the previous subscription before registering a new one.
    #[default]
    Single,
    /// Keep every subscription ever registered, one per metadata load.
    Accumulate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSettings {
    #[serde(default = "default_autoplay")]
    pub autoplay: bool,
    #[serde(default)]
    pub progress_listener: ProgressListenerMode,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_autoplay() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            autoplay: default_autoplay(),
            progress_listener: ProgressListenerMode::default(),
            log_level: default_log_level(),
        }
    }
}

impl PlayerSettings {
    pub fn tracing_level(&self) -> dioxus::logger::tracing::Level {
        use dioxus::logger::tracing::Level;
        match self.log_level.trim().to_ascii_lowercase().as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "warn" | "warning" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        }
    }
}

pub fn parse_settings(raw: &str) -> Result<PlayerSettings> {
    serde_json::from_str(raw).map_err(|e| PlayerError::Settings(e.to_string()))
}

#[cfg(not(target_arch = "wasm32"))]
fn settings_path() -> Result<std::path::PathBuf> {
    let dir = dirs::config_dir()
        .ok_or_else(|| PlayerError::Settings("no config directory".to_string()))?;
    Ok(dir.join(APP_DIR).join(SETTINGS_FILE))
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load_settings() -> Result<PlayerSettings> {
    let path = settings_path()?;
    if !path.exists() {
        return Ok(PlayerSettings::default());
    }
    let raw = std::fs::read_to_string(&path).map_err(|e| PlayerError::Settings(e.to_string()))?;
    parse_settings(&raw)
}

#[cfg(target_arch = "wasm32")]
pub fn load_settings() -> Result<PlayerSettings> {
    match LocalStorage::get::<PlayerSettings>(SETTINGS_KEY) {
        Ok(settings) => Ok(settings),
        Err(gloo_storage::errors::StorageError::KeyNotFound(_)) => Ok(PlayerSettings::default()),
        Err(e) => Err(PlayerError::Settings(e.to_string())),
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn save_settings(settings: &PlayerSettings) -> Result<()> {
    let path = settings_path()?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| PlayerError::Settings(e.to_string()))?;
    }
    let json = serde_json::to_string_pretty(settings)
        .map_err(|e| PlayerError::Settings(e.to_string()))?;
    std::fs::write(&path, json).map_err(|e| PlayerError::Settings(e.to_string()))
}

#[cfg(target_arch = "wasm32")]
pub fn save_settings(settings: &PlayerSettings) -> Result<()> {
    LocalStorage::set(SETTINGS_KEY, settings).map_err(|e| PlayerError::Settings(e.to_string()))
}
