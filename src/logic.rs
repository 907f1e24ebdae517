//! Core behaviors behind the WebSocket: starting a game session and applying
//! client actions to it.
//!
//! One `GameSession` lives per socket. Every action answers with messages for
//! the client: a fresh view and any speech commands the action produced.

use rand::{rngs::StdRng, SeedableRng};
use tracing::{debug, info, instrument, warn};

use crate::config::GameCfg;
use crate::domain::GameKind;
use crate::error::AppError;
use crate::feed::DataFeed;
use crate::protocol::{ClientWsMessage, ServerWsMessage};
use crate::quiz::{FlashcardQuiz, PinyinQuiz, QuizView, Verdict};
use crate::speech::{ClientSpeech, SpeechCommand};
use crate::state::AppState;

pub enum GameSession {
  Pinyin(PinyinQuiz<StdRng, ClientSpeech>),
  Flashcard(FlashcardQuiz<StdRng>),
}

impl GameSession {
  /// Snapshot the feed for `slug` and open a session on its first question.
  #[instrument(level = "info", skip(state))]
  pub fn start(state: &AppState, slug: &str) -> Result<Self, AppError> {
    let game = state
      .game(slug)
      .ok_or_else(|| AppError::NotFound(format!("Unknown game: {}", slug)))?;
    let feed = state.load_feed();
    Ok(Self::from_feed(game, &feed, StdRng::from_entropy()))
  }

  pub fn from_feed(game: &GameCfg, feed: &DataFeed, rng: StdRng) -> Self {
    let session = match game.kind {
      GameKind::Pinyin => GameSession::Pinyin(PinyinQuiz::new(
        feed.pinyin_items(&game.feed_key),
        rng,
        ClientSpeech::default(),
        game.empty_notice(),
      )),
      GameKind::Flashcard => GameSession::Flashcard(FlashcardQuiz::new(
        feed.flashcards(&game.feed_key),
        rng,
        game.empty_notice(),
      )),
    };
    info!(target: "quiz", slug = %game.slug, items = session.len(), "Quiz session started");
    session
  }

  pub fn select(&mut self, key: &str) -> Option<Verdict> {
    match self {
      GameSession::Pinyin(q) => q.select(key),
      GameSession::Flashcard(q) => q.select(key),
    }
  }

  pub fn next(&mut self) {
    match self {
      GameSession::Pinyin(q) => q.next(),
      GameSession::Flashcard(q) => q.next(),
    }
  }

  /// Replay audio. Flash cards have none.
  pub fn repeat(&mut self) {
    if let GameSession::Pinyin(q) = self {
      q.repeat();
    }
  }

  pub fn view(&self) -> QuizView {
    match self {
      GameSession::Pinyin(q) => q.view(),
      GameSession::Flashcard(q) => q.view(),
    }
  }

  pub fn index(&self) -> usize {
    match self {
      GameSession::Pinyin(q) => q.session().index(),
      GameSession::Flashcard(q) => q.index(),
    }
  }

  pub fn is_answered(&self) -> bool {
    match self {
      GameSession::Pinyin(q) => q.session().is_answered(),
      GameSession::Flashcard(q) => q.is_answered(),
    }
  }

  pub fn len(&self) -> usize {
    match self {
      GameSession::Pinyin(q) => q.session().len(),
      GameSession::Flashcard(q) => q.len(),
    }
  }

  fn take_speech(&mut self) -> Vec<SpeechCommand> {
    match self {
      GameSession::Pinyin(q) => q.speech_engine().drain(),
      GameSession::Flashcard(_) => Vec::new(),
    }
  }

  fn view_and_speech(&mut self) -> Vec<ServerWsMessage> {
    let mut out = vec![ServerWsMessage::View { view: self.view() }];
    out.extend(self.take_speech().into_iter().map(ServerWsMessage::from));
    out
  }
}

/// Apply one client message to the socket's session.
#[instrument(level = "debug", skip(session, state))]
pub fn handle_client_ws(
  msg: ClientWsMessage,
  session: &mut Option<GameSession>,
  state: &AppState,
) -> Vec<ServerWsMessage> {
  if let ClientWsMessage::Ping = msg {
    return vec![ServerWsMessage::Pong];
  }
  if let ClientWsMessage::Start { game } = &msg {
    return match GameSession::start(state, game) {
      Ok(started) => session.insert(started).view_and_speech(),
      Err(e) => {
        warn!(target: "quiz", %game, error = %e, "Cannot start session");
        vec![ServerWsMessage::Error { message: e.to_string() }]
      }
    };
  }

  let Some(active) = session.as_mut() else {
    return vec![ServerWsMessage::Error { message: "No game started; send a start message first.".into() }];
  };

  match msg {
    ClientWsMessage::Select { key } => {
      match active.select(&key) {
        Some(verdict) => info!(target: "quiz", index = active.index(), %key, ?verdict, "Answer checked"),
        None => debug!(target: "quiz", index = active.index(), %key, answered = active.is_answered(), "Selection ignored"),
      }
      active.view_and_speech()
    }
    ClientWsMessage::Next => {
      active.next();
      debug!(target: "quiz", index = active.index(), of = active.len(), "Moved to next question");
      active.view_and_speech()
    }
    ClientWsMessage::Repeat => {
      active.repeat();
      active.take_speech().into_iter().map(ServerWsMessage::from).collect()
    }
    ClientWsMessage::Ping | ClientWsMessage::Start { .. } => Vec::new(),
  }
}
