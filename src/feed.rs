//! The static data feed (`data.json`): one JSON document holding every game's items.
//!
//! Expected shape (all keys optional):
//!
//! ```json
//! {
//!   "pinyinPairs":   [{"text": "妈", "en": "mother", "correct": "ma1", "distractor": "ma3"}],
//!   "hskLesson4to6": [{"english": "hello",
//!                      "correct": {"chinese": "你好", "pinyin": "ni3 hao3"},
//!                      "distractors": [{"chinese": "再见", "pinyin": "zai4 jian4"}]}]
//! }
//! ```
//!
//! A missing file, a broken document or a collection that is not an array all
//! read as "no items" for the affected game; a single malformed item is dropped
//! on its own. Problems are logged, never surfaced.

use std::path::Path;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::domain::{FlashcardItem, PinyinItem};
use crate::error::FeedError;

pub const PINYIN_PAIRS_KEY: &str = "pinyinPairs";

#[derive(Clone, Debug, Default)]
pub struct DataFeed {
  root: Value,
}

impl DataFeed {
  pub fn load(path: &Path) -> Result<Self, FeedError> {
    let raw = std::fs::read_to_string(path)?;
    Self::parse(&raw)
  }

  pub fn parse(raw: &str) -> Result<Self, FeedError> {
    let root = serde_json::from_str::<Value>(raw)?;
    Ok(Self { root })
  }

  /// Load the feed, or an empty one if it cannot be read.
  pub fn load_or_empty(path: &Path) -> Self {
    match Self::load(path) {
      Ok(feed) => {
        debug!(target: "quiz", path = %path.display(), "Loaded data feed");
        feed
      }
      Err(e) => {
        warn!(target: "quiz", path = %path.display(), error = %e, "Data feed unavailable; serving empty games");
        Self::default()
      }
    }
  }

  pub fn pinyin_items(&self, key: &str) -> Vec<PinyinItem> {
    self.collection(key)
  }

  pub fn flashcards(&self, key: &str) -> Vec<FlashcardItem> {
    self.collection(key)
  }

  /// Raw JSON of one collection (an empty array when absent).
  pub fn raw_collection(&self, key: &str) -> Value {
    match self.root.get(key) {
      Some(v @ Value::Array(_)) => v.clone(),
      _ => Value::Array(Vec::new()),
    }
  }

  /// Items of one collection. Entries that do not fit `T` are skipped one by
  /// one, so a single broken card leaves the rest of its lesson playable.
  fn collection<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
    let entries = match self.root.get(key) {
      None => return Vec::new(),
      Some(Value::Array(entries)) => entries,
      Some(_) => {
        warn!(target: "quiz", %key, "Collection in data feed is not an array; treating as empty");
        return Vec::new();
      }
    };
    entries
      .iter()
      .enumerate()
      .filter_map(|(position, entry)| match serde_json::from_value::<T>(entry.clone()) {
        Ok(item) => Some(item),
        Err(e) => {
          warn!(target: "quiz", %key, position, error = %e, "Skipping malformed item in data feed");
          None
        }
      })
      .collect()
  }
}
