//! Domain models: quiz items as they appear in the data feed, and game kinds.

use serde::{Deserialize, Serialize};

/// Which quiz controller drives a game.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GameKind {
  /// Listen to a word, pick between the correct pinyin and one distractor.
  Pinyin,
  /// Read an English word, pick the matching Chinese (with pinyin).
  Flashcard,
}

/// One listening question. Pinyin is stored in numbered form (`"ni3"`).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PinyinItem {
  #[serde(default)] pub text: String,
  #[serde(default)] pub en: String,
  #[serde(default)] pub correct: String,
  #[serde(default)] pub distractor: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct FlashcardOption {
  #[serde(default)] pub chinese: String,
  #[serde(default)] pub pinyin: String,
}

/// One flash card. The number of distractors may differ between cards.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct FlashcardItem {
  #[serde(default)] pub english: String,
  pub correct: FlashcardOption,
  #[serde(default)] pub distractors: Vec<FlashcardOption>,
}
