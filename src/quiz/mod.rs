//! Quiz sessions: question cycling, option shuffling and answer scoring.
//!
//! A `QuizSession` is created once per page view from a snapshot of the data
//! feed. Both games share it; each item type says how its options look and
//! which answer key is correct.
//!
//! Per question the state machine is `Loaded -> Answered -> (next) -> Loaded`.

pub mod flashcard;
pub mod pinyin;

use serde::Serialize;
use tracing::debug;

use crate::shuffle::{shuffle, RandomSource};

pub use flashcard::FlashcardQuiz;
pub use pinyin::PinyinQuiz;

/// One answer button. `key` is what gets compared on selection; the label is
/// display only, so two options that render alike are still told apart.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizOption {
  pub label: String,
  pub detail: Option<String>,
  pub key: String,
}

pub trait QuizItem {
  /// All options in feed order (correct first), before shuffling.
  fn options(&self) -> Vec<QuizOption>;
  fn answer_key(&self) -> &str;
  fn prompt(&self) -> &str;
  fn meaning(&self) -> Option<&str> {
    None
  }
  fn feedback(&self, verdict: Verdict) -> String;
}

#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
  Correct,
  Incorrect,
}

#[derive(Clone, Debug)]
struct Selection {
  chosen: String,
  verdict: Verdict,
}

pub struct QuizSession<T, R> {
  items: Vec<T>,
  index: usize,
  options: Vec<QuizOption>,
  answered: Option<Selection>,
  rng: R,
  empty_notice: String,
}

impl<T: QuizItem, R: RandomSource> QuizSession<T, R> {
  /// Start on the first item (or the "no data" state when `items` is empty).
  pub fn new(items: Vec<T>, rng: R, empty_notice: impl Into<String>) -> Self {
    let mut session = Self {
      items,
      index: 0,
      options: Vec::new(),
      answered: None,
      rng,
      empty_notice: empty_notice.into(),
    };
    session.render_current();
    session
  }

  /// Rebuild the option set for the current item with a fresh shuffle.
  pub fn render_current(&mut self) {
    self.answered = None;
    let mut options = self.current().map(QuizItem::options).unwrap_or_default();
    shuffle(&mut options, &mut self.rng);
    self.options = options;
  }

  pub fn current(&self) -> Option<&T> {
    if self.is_empty() {
      return None;
    }
    self.items.get(self.index % self.items.len())
  }

  /// Score the option with answer key `key`.
  ///
  /// Only the first selection per question counts; later ones, selections
  /// while there is no data, and keys that are not on screen return `None`.
  pub fn select(&mut self, key: &str) -> Option<Verdict> {
    if self.answered.is_some() {
      debug!(target: "quiz", index = self.index, "Options locked; selection ignored");
      return None;
    }
    if !self.options.iter().any(|o| o.key == key) {
      debug!(target: "quiz", index = self.index, %key, "Unknown option key; selection ignored");
      return None;
    }
    let verdict = match self.current() {
      Some(item) if item.answer_key() == key => Verdict::Correct,
      Some(_) => Verdict::Incorrect,
      None => return None,
    };
    self.answered = Some(Selection { chosen: key.to_string(), verdict });
    debug!(target: "quiz", index = self.index, ?verdict, "Answer scored");
    Some(verdict)
  }

  /// Advance with wraparound; an empty session stays at index 0.
  pub fn next(&mut self) {
    self.index = (self.index + 1) % self.items.len().max(1);
    self.render_current();
  }

  pub fn index(&self) -> usize {
    self.index
  }

  pub fn len(&self) -> usize {
    self.items.len()
  }

  pub fn is_empty(&self) -> bool {
    self.items.is_empty()
  }

  pub fn is_answered(&self) -> bool {
    self.answered.is_some()
  }

  #[cfg(test)]
  pub fn options(&self) -> &[QuizOption] {
    &self.options
  }

  /// Human-facing position, e.g. `"3 / 10"`; `"0 / 0"` when empty.
  pub fn counter(&self) -> String {
    if self.is_empty() {
      return "0 / 0".to_string();
    }
    format!("{} / {}", self.index + 1, self.items.len())
  }

  /// Snapshot of everything the page needs to draw the current question.
  pub fn view(&self) -> QuizView {
    let item = match self.current() {
      Some(item) => item,
      None => {
        return QuizView {
          counter: self.counter(),
          prompt: String::new(),
          meaning: None,
          options: Vec::new(),
          feedback: None,
          notice: Some(self.empty_notice.clone()),
        }
      }
    };

    let options = self
      .options
      .iter()
      .map(|o| OptionView {
        label: o.label.clone(),
        detail: o.detail.clone(),
        key: o.key.clone(),
        enabled: self.answered.is_none(),
        mark: self.answered.as_ref().and_then(|sel| {
          if o.key == item.answer_key() {
            Some(Verdict::Correct)
          } else if o.key == sel.chosen {
            Some(Verdict::Incorrect)
          } else {
            None
          }
        }),
      })
      .collect();

    QuizView {
      counter: self.counter(),
      prompt: item.prompt().to_string(),
      meaning: item.meaning().map(str::to_string),
      options,
      feedback: self.answered.as_ref().map(|sel| Feedback {
        text: item.feedback(sel.verdict),
        verdict: sel.verdict,
      }),
      notice: None,
    }
  }
}

#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuizView {
  pub counter: String,
  pub prompt: String,
  pub meaning: Option<String>,
  pub options: Vec<OptionView>,
  pub feedback: Option<Feedback>,
  /// Set instead of a question when there is nothing to ask.
  pub notice: Option<String>,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OptionView {
  pub label: String,
  pub detail: Option<String>,
  pub key: String,
  pub enabled: bool,
  pub mark: Option<Verdict>,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Feedback {
  pub text: String,
  pub verdict: Verdict,
}
