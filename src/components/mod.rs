//! The components module contains all shared components for our app.

mod app;
mod episode_list;
mod media_binding;
mod player;

pub use app::*;
pub use episode_list::*;
pub use media_binding::*;
pub use player::*;
