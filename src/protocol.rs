//! Public protocol structs for WebSocket and HTTP endpoints (serde ready).
//! Keep this small and stable to evolve backend and frontend independently.

use serde::{Deserialize, Serialize};

use crate::config::GameCfg;
use crate::domain::GameKind;
use crate::quiz::QuizView;
use crate::speech::{SpeechCommand, Utterance};

/// Messages the client can send over WebSocket.
#[derive(Debug, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientWsMessage {
    Ping,
    /// Open a quiz session for the game with this slug.
    Start {
        game: String,
    },
    /// The user clicked the option with this answer key.
    Select {
        key: String,
    },
    Next,
    /// Play the current word again (listening game only).
    Repeat,
}

/// Messages the server sends back over WebSocket.
#[derive(Debug, Serialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerWsMessage {
    Pong,
    View {
        view: QuizView,
    },
    Speak {
        text: String,
        lang: String,
        rate: f32,
        #[serde(rename = "delayMs")]
        delay_ms: u64,
    },
    CancelSpeech,
    Error {
        message: String,
    },
}

impl From<Utterance> for ServerWsMessage {
    fn from(u: Utterance) -> Self {
        ServerWsMessage::Speak {
            text: u.text,
            lang: u.lang.to_string(),
            rate: u.rate,
            delay_ms: u64::try_from(u.delay.as_millis()).unwrap_or(u64::MAX),
        }
    }
}

impl From<SpeechCommand> for ServerWsMessage {
    fn from(cmd: SpeechCommand) -> Self {
        match cmd {
            SpeechCommand::Cancel => ServerWsMessage::CancelSpeech,
            SpeechCommand::Speak(u) => u.into(),
        }
    }
}

//
// HTTP request/response DTOs
//

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct GameOut {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub kind: GameKind,
}

impl From<&GameCfg> for GameOut {
    fn from(g: &GameCfg) -> Self {
        GameOut {
            slug: g.slug.clone(),
            title: g.title.clone(),
            description: g.description.clone(),
            kind: g.kind,
        }
    }
}

#[derive(Deserialize)]
pub struct ToneMarksIn {
    pub text: String,
}
#[derive(Serialize)]
pub struct ToneMarksOut {
    pub pinyin: String,
}

#[derive(Serialize)]
pub struct HealthOut {
    pub ok: bool,
}
