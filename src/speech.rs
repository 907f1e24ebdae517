//! Speech trigger: asks an external text-to-speech engine to read Chinese aloud.
//!
//! The engine is injected. In production it is the browser on the other end of
//! the quiz WebSocket (`ClientSpeech` queues messages for it); tests record calls.
//! At most one utterance is active: a new request cancels the running one.

use std::time::Duration;

pub const SPEECH_LANG: &str = "zh-CN";
pub const SPEECH_RATE: f32 = 0.95;
/// Lets the option buttons appear before the audio starts.
pub const AUTOPLAY_DELAY: Duration = Duration::from_millis(150);

#[derive(Clone, Debug, PartialEq)]
pub struct Utterance {
  pub text: String,
  pub lang: &'static str,
  pub rate: f32,
  pub delay: Duration,
}

/// Platform text-to-speech capability. Failures are the engine's business.
pub trait SpeechEngine {
  fn is_speaking(&self) -> bool;
  fn cancel(&mut self);
  fn speak(&mut self, utterance: Utterance);
}

#[derive(Debug)]
pub struct SpeechTrigger<E> {
  engine: E,
}

impl<E: SpeechEngine> SpeechTrigger<E> {
  pub fn new(engine: E) -> Self {
    Self { engine }
  }

  /// Speak `text` right away.
  pub fn speak(&mut self, text: &str) {
    self.speak_after(text, Duration::ZERO);
  }

  /// Speak `text` once `delay` has passed. Fire and forget.
  pub fn speak_after(&mut self, text: &str, delay: Duration) {
    if text.is_empty() {
      return;
    }
    if self.engine.is_speaking() {
      self.engine.cancel();
    }
    self.engine.speak(Utterance {
      text: text.to_string(),
      lang: SPEECH_LANG,
      rate: SPEECH_RATE,
      delay,
    });
  }

  pub fn engine_mut(&mut self) -> &mut E {
    &mut self.engine
  }
}

/// What the browser should do with its `speechSynthesis`.
#[derive(Clone, Debug, PartialEq)]
pub enum SpeechCommand {
  Cancel,
  Speak(Utterance),
}

/// Engine for a remote client: commands are queued and flushed to the socket
/// after each session operation.
///
/// The server cannot observe playback, so once something has been spoken it
/// is treated as still speaking and the next request cancels it first.
#[derive(Debug, Default)]
pub struct ClientSpeech {
  pending: Vec<SpeechCommand>,
  active: bool,
}

impl ClientSpeech {
  pub fn drain(&mut self) -> Vec<SpeechCommand> {
    std::mem::take(&mut self.pending)
  }
}

impl SpeechEngine for ClientSpeech {
  fn is_speaking(&self) -> bool {
    self.active
  }

  fn cancel(&mut self) {
    self.pending.push(SpeechCommand::Cancel);
    self.active = false;
  }

  fn speak(&mut self, utterance: Utterance) {
    self.pending.push(SpeechCommand::Speak(utterance));
    self.active = true;
  }
}


#[cfg(test)]
mod tests {
  use super::testing::RecordingSpeech;
  use super::*;

  #[test]
  fn empty_text_is_ignored() {
    let mut trigger = SpeechTrigger::new(RecordingSpeech::default());
    trigger.speak("");
    assert!(trigger.engine_mut().spoken.is_empty());
    assert_eq!(trigger.engine_mut().cancels, 0);
  }

  #[test]
  fn fixed_language_and_rate() {
    let mut trigger = SpeechTrigger::new(RecordingSpeech::default());
    trigger.speak_after("妈", AUTOPLAY_DELAY);
    let spoken = &trigger.engine_mut().spoken;
    assert_eq!(
      spoken[0],
      Utterance { text: "妈".into(), lang: "zh-CN", rate: 0.95, delay: Duration::from_millis(150) }
    );
  }

  #[test]
  fn new_request_cancels_running_one() {
    let mut trigger = SpeechTrigger::new(RecordingSpeech::default());
    trigger.speak("你好");
    trigger.speak("再见");
    let engine = trigger.engine_mut();
    assert_eq!(engine.cancels, 1);
    assert_eq!(engine.spoken.len(), 2);
    assert_eq!(engine.spoken[1].text, "再见");
  }

  #[test]
  fn client_speech_queues_cancel_before_speak() {
    let mut trigger = SpeechTrigger::new(ClientSpeech::default());
    trigger.speak("一");
    trigger.speak("二");
    let cmds = trigger.engine_mut().drain();
    assert_eq!(cmds.len(), 3);
    assert_eq!(cmds[1], SpeechCommand::Cancel);
    assert!(matches!(&cmds[2], SpeechCommand::Speak(u) if u.text == "二"));
    assert!(trigger.engine_mut().drain().is_empty());
  }
}
