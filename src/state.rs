//! Application state: configuration and access to the data feed.
//!
//! There is no mutable shared state. Every quiz session takes its own snapshot
//! of the feed when it starts, so edits to `data.json` show up on the next
//! page load without a restart.

use tracing::{info, instrument};

use crate::config::{load_app_config_from_env, AppConfig, GameCfg};
use crate::feed::DataFeed;

#[derive(Clone, Debug)]
pub struct AppState {
    pub config: AppConfig,
}

impl AppState {
    /// Build state from env (APP_CONFIG_PATH, DATA_PATH).
    #[instrument(level = "info", skip_all)]
    pub fn new() -> Self {
        let state = Self::with_config(load_app_config_from_env());
        for game in &state.config.games {
            info!(target: "quiz", slug = %game.slug, kind = ?game.kind, feed_key = %game.feed_key, "Game registered");
        }
        info!(target: "mandarin_helper", data_path = %state.config.data_path.display(), "Data feed location");
        state
    }

    pub fn with_config(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn game(&self, slug: &str) -> Option<&GameCfg> {
        self.config.games.iter().find(|g| g.slug == slug)
    }

    /// Fresh read of the feed; empty when unreadable.
    pub fn load_feed(&self) -> DataFeed {
        DataFeed::load_or_empty(&self.config.data_path)
    }
}
