//! Pinyin listening game: hear a word, pick the pinyin with the right tone.

use crate::domain::PinyinItem;
use crate::shuffle::RandomSource;
use crate::speech::{SpeechEngine, SpeechTrigger, AUTOPLAY_DELAY};
use crate::tone;

use super::{QuizItem, QuizOption, QuizSession, QuizView, Verdict};

impl QuizItem for PinyinItem {
  fn options(&self) -> Vec<QuizOption> {
    [&self.correct, &self.distractor]
      .into_iter()
      .map(|raw| QuizOption {
        label: tone::render(raw),
        detail: None,
        key: raw.clone(),
      })
      .collect()
  }

  fn answer_key(&self) -> &str {
    &self.correct
  }

  fn prompt(&self) -> &str {
    &self.text
  }

  fn meaning(&self) -> Option<&str> {
    Some(&self.en)
  }

  fn feedback(&self, verdict: Verdict) -> String {
    match verdict {
      Verdict::Correct => "Correct".into(),
      Verdict::Incorrect => "Incorrect".into(),
    }
  }
}

/// Two-option session that also reads the word aloud.
pub struct PinyinQuiz<R, E> {
  session: QuizSession<PinyinItem, R>,
  speech: SpeechTrigger<E>,
}

impl<R: RandomSource, E: SpeechEngine> PinyinQuiz<R, E> {
  pub fn new(items: Vec<PinyinItem>, rng: R, engine: E, empty_notice: impl Into<String>) -> Self {
    let mut quiz = Self {
      session: QuizSession::new(items, rng, empty_notice),
      speech: SpeechTrigger::new(engine),
    };
    quiz.autoplay();
    quiz
  }

  pub fn select(&mut self, key: &str) -> Option<Verdict> {
    self.session.select(key)
  }

  pub fn next(&mut self) {
    self.session.next();
    self.autoplay();
  }

  /// Play the current word again. Scoring state is untouched.
  pub fn repeat(&mut self) {
    if let Some(item) = self.session.current() {
      self.speech.speak(&item.text);
    }
  }

  pub fn view(&self) -> QuizView {
    self.session.view()
  }

  pub fn session(&self) -> &QuizSession<PinyinItem, R> {
    &self.session
  }

  pub fn speech_engine(&mut self) -> &mut E {
    self.speech.engine_mut()
  }

  fn autoplay(&mut self) {
    if let Some(item) = self.session.current() {
      self.speech.speak_after(&item.text, AUTOPLAY_DELAY);
    }
  }
}

#[cfg(test)]
mod tests {
  use std::time::Duration;

  use super::*;
  use crate::shuffle::testing::Scripted;
  use crate::speech::testing::RecordingSpeech;
  use rand::{rngs::StdRng, SeedableRng};

  fn ma() -> PinyinItem {
    PinyinItem {
      text: "妈".into(),
      en: "mother".into(),
      correct: "ma1".into(),
      distractor: "ma3".into(),
    }
  }

  fn quiz_with<R: RandomSource>(items: Vec<PinyinItem>, rng: R) -> PinyinQuiz<R, RecordingSpeech> {
    PinyinQuiz::new(items, rng, RecordingSpeech::default(), "No data found. Provide pinyinPairs in data.json.")
  }

  #[test]
  fn always_two_options_with_raw_keys() {
    let mut quiz = quiz_with(vec![ma()], StdRng::seed_from_u64(3));
    for _ in 0..10 {
      let mut keys: Vec<_> = quiz.session().options().iter().map(|o| o.key.clone()).collect();
      keys.sort();
      assert_eq!(keys, vec!["ma1", "ma3"]);
      quiz.next();
    }
  }

  #[test]
  fn labels_are_tone_marked() {
    let quiz = quiz_with(vec![ma()], Scripted::zeros());
    let view = quiz.view();
    assert_eq!(view.options[0].label, "mǎ");
    assert_eq!(view.options[0].key, "ma3");
    assert_eq!(view.options[1].label, "mā");
    assert_eq!(view.options[1].key, "ma1");
  }

  #[test]
  fn feedback_text() {
    let mut quiz = quiz_with(vec![ma()], Scripted::identity());
    assert_eq!(quiz.select("ma1"), Some(Verdict::Correct));
    assert_eq!(quiz.view().feedback.map(|f| f.text).as_deref(), Some("Correct"));

    let mut quiz = quiz_with(vec![ma()], Scripted::identity());
    assert_eq!(quiz.select("ma3"), Some(Verdict::Incorrect));
    assert_eq!(quiz.view().feedback.map(|f| f.text).as_deref(), Some("Incorrect"));
    assert_eq!(quiz.select("ma1"), None);
  }

  #[test]
  fn end_to_end_single_item() {
    let mut quiz = quiz_with(vec![ma()], StdRng::seed_from_u64(11));
    let view = quiz.view();
    assert_eq!(view.counter, "1 / 1");
    assert_eq!(view.prompt, "妈");
    assert_eq!(view.meaning.as_deref(), Some("mother"));
    let mut labels: Vec<_> = view.options.iter().map(|o| o.label.as_str()).collect();
    labels.sort();
    assert_eq!(labels, vec!["mā", "mǎ"]);

    let key = view.options.iter().find(|o| o.label == "mā").map(|o| o.key.clone()).expect("mā option");
    quiz.select(&key);
    assert_eq!(quiz.view().feedback.map(|f| f.text).as_deref(), Some("Correct"));
  }

  #[test]
  fn lookalike_options_are_told_apart_by_key() {
    let lv = PinyinItem {
      text: "绿".into(),
      en: "green".into(),
      correct: "lv4".into(),
      distractor: "lu:4".into(),
    };
    let mut quiz = quiz_with(vec![lv], StdRng::seed_from_u64(5));
    let view = quiz.view();
    assert!(view.options.iter().all(|o| o.label == "lǜ"));

    assert_eq!(quiz.select("lu:4"), Some(Verdict::Incorrect));
    let view = quiz.view();
    let mark = |key: &str| view.options.iter().find(|o| o.key == key).and_then(|o| o.mark);
    assert_eq!(mark("lv4"), Some(Verdict::Correct));
    assert_eq!(mark("lu:4"), Some(Verdict::Incorrect));
    assert_eq!(view.feedback.map(|f| f.text).as_deref(), Some("Incorrect"));
  }

  #[test]
  fn autoplay_on_render_with_delay() {
    let mut quiz = quiz_with(vec![ma()], Scripted::identity());
    let engine = quiz.speech_engine();
    assert_eq!(engine.spoken.len(), 1);
    assert_eq!(engine.spoken[0].text, "妈");
    assert_eq!(engine.spoken[0].delay, Duration::from_millis(150));
  }

  #[test]
  fn repeat_speaks_now_and_keeps_score_state() {
    let mut quiz = quiz_with(vec![ma()], Scripted::identity());
    quiz.select("ma3");
    quiz.repeat();
    assert!(quiz.session().is_answered());
    let engine = quiz.speech_engine();
    assert_eq!(engine.spoken.len(), 2);
    assert_eq!(engine.spoken[1].delay, Duration::ZERO);
    assert_eq!(engine.cancels, 1);
  }

  #[test]
  fn next_speaks_the_new_word() {
    let other = PinyinItem {
      text: "马".into(),
      en: "horse".into(),
      correct: "ma3".into(),
      distractor: "ma1".into(),
    };
    let mut quiz = quiz_with(vec![ma(), other], Scripted::identity());
    quiz.next();
    assert_eq!(quiz.speech_engine().spoken.last().map(|u| u.text.as_str()), Some("马"));
    quiz.next();
    assert_eq!(quiz.session().index(), 0);
    assert_eq!(quiz.speech_engine().spoken.last().map(|u| u.text.as_str()), Some("妈"));
  }

  #[test]
  fn empty_feed_is_silent() {
    let mut quiz = quiz_with(Vec::new(), Scripted::identity());
    quiz.next();
    quiz.repeat();
    assert!(quiz.speech_engine().spoken.is_empty());
    let view = quiz.view();
    assert_eq!(view.counter, "0 / 0");
    assert_eq!(view.notice.as_deref(), Some("No data found. Provide pinyinPairs in data.json."));
  }
}
