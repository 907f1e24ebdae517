//! Loading app configuration (data feed path + game list) from TOML.
//!
//! Example `APP_CONFIG_PATH` file:
//!
//! ```toml
//! data_path = "data.json"
//!
//! [[games]]
//! slug = "hsk-4-6"
//! title = "HSK 1 Lesson 4-6"
//! description = "Learn vocabulary with English to Chinese flash cards including pinyin."
//! kind = "flashcard"
//! feed_key = "hskLesson4to6"
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::domain::GameKind;
use crate::feed::PINYIN_PAIRS_KEY;

#[derive(Clone, Debug, Deserialize)]
pub struct AppConfig {
  #[serde(default = "default_data_path")]
  pub data_path: PathBuf,
  #[serde(default = "default_games")]
  pub games: Vec<GameCfg>,
}

impl Default for AppConfig {
  fn default() -> Self {
    Self { data_path: default_data_path(), games: default_games() }
  }
}

/// One playable game: where it lives and which feed collection it reads.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct GameCfg {
  pub slug: String,
  pub title: String,
  #[serde(default)] pub description: String,
  pub kind: GameKind,
  pub feed_key: String,
}

impl GameCfg {
  /// Shown instead of a question when the collection is empty.
  pub fn empty_notice(&self) -> String {
    format!("No data found. Provide {} in data.json.", self.feed_key)
  }

  /// Heading on the game page.
  pub fn heading(&self) -> String {
    match self.kind {
      GameKind::Pinyin => self.title.clone(),
      GameKind::Flashcard => format!("{} Flash Cards", self.title),
    }
  }
}

fn default_data_path() -> PathBuf {
  PathBuf::from("data.json")
}

fn default_games() -> Vec<GameCfg> {
  vec![
    GameCfg {
      slug: "pinyin".into(),
      title: "Which one are you hearing?".into(),
      description: "Listen to Chinese words and choose the correct pinyin pronunciation.".into(),
      kind: GameKind::Pinyin,
      feed_key: PINYIN_PAIRS_KEY.into(),
    },
    GameCfg {
      slug: "hsk-4-6".into(),
      title: "HSK 1 Lesson 4-6".into(),
      description: "Learn vocabulary with English to Chinese flash cards including pinyin.".into(),
      kind: GameKind::Flashcard,
      feed_key: "hskLesson4to6".into(),
    },
    GameCfg {
      slug: "hsk-7-9".into(),
      title: "HSK 1 Lesson 7-9".into(),
      description: "Continue learning with more vocabulary flash cards and pinyin practice.".into(),
      kind: GameKind::Flashcard,
      feed_key: "hskLesson7to9".into(),
    },
  ]
}

/// Parse a TOML config document.
pub fn parse_app_config(s: &str) -> Result<AppConfig, toml::de::Error> {
  toml::from_str::<AppConfig>(s)
}

/// Build the config from APP_CONFIG_PATH (TOML) and DATA_PATH.
/// On any IO/parse error the defaults are used.
pub fn load_app_config_from_env() -> AppConfig {
  let mut cfg = match std::env::var("APP_CONFIG_PATH") {
    Ok(path) => match std::fs::read_to_string(&path) {
      Ok(s) => match parse_app_config(&s) {
        Ok(cfg) => {
          info!(target: "mandarin_helper", %path, games = cfg.games.len(), "Loaded app config (TOML)");
          cfg
        }
        Err(e) => {
          error!(target: "mandarin_helper", %path, error = %e, "Failed to parse TOML config; using defaults");
          AppConfig::default()
        }
      },
      Err(e) => {
        error!(target: "mandarin_helper", %path, error = %e, "Failed to read TOML config file; using defaults");
        AppConfig::default()
      }
    },
    Err(_) => AppConfig::default(),
  };

  if let Ok(path) = std::env::var("DATA_PATH") {
    cfg.data_path = PathBuf::from(path);
  }
  cfg
}
