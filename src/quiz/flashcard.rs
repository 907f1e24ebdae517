//! HSK flash cards: English prompt, Chinese answers shown with pinyin.

use crate::domain::{FlashcardItem, FlashcardOption};
use crate::tone;

use super::{QuizItem, QuizOption, QuizSession, Verdict};

/// Flash cards need nothing beyond the shared session; no speech.
pub type FlashcardQuiz<R> = QuizSession<FlashcardItem, R>;

impl QuizItem for FlashcardItem {
  fn options(&self) -> Vec<QuizOption> {
    std::iter::once(&self.correct)
      .chain(self.distractors.iter())
      .map(to_option)
      .collect()
  }

  // Options are told apart by their Chinese text.
  fn answer_key(&self) -> &str {
    &self.correct.chinese
  }

  fn prompt(&self) -> &str {
    &self.english
  }

  fn feedback(&self, verdict: Verdict) -> String {
    match verdict {
      Verdict::Correct => "Correct! 🎉".into(),
      Verdict::Incorrect => format!(
        "Incorrect. The correct answer is {} ({})",
        self.correct.chinese,
        tone::render(&self.correct.pinyin)
      ),
    }
  }
}

fn to_option(opt: &FlashcardOption) -> QuizOption {
  QuizOption {
    label: opt.chinese.clone(),
    detail: Some(tone::render(&opt.pinyin)),
    key: opt.chinese.clone(),
  }
}
