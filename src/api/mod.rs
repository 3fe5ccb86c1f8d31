pub mod feed;
pub mod models;

pub use feed::*;
pub use models::*;
