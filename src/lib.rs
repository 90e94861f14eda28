pub mod app;
pub mod client;
pub mod config;
pub mod db;
pub mod dto;
pub mod error;
pub mod feed;
pub mod handlers;
pub mod identity;
pub mod models;
pub mod palette;
pub mod timeline;

use std::sync::Arc;

use config::Config;
use db::MoodStore;
use feed::MoodFeed;

pub use app::router;

#[derive(Clone)]
pub struct AppState {
    pub store: MoodStore,
    pub config: Arc<Config>,
    pub feed: MoodFeed,
}
