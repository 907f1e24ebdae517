//! HTTP endpoint handlers: thin, instrumented wrappers over config, feed and tone rendering.

use std::sync::Arc;
use axum::{extract::{Path, State}, Json, response::IntoResponse};
use serde_json::Value;
use tracing::{info, instrument};

use crate::error::AppError;
use crate::protocol::*;
use crate::state::AppState;
use crate::tone;

#[instrument(level = "info")]
pub async fn http_health() -> impl IntoResponse { Json(HealthOut { ok: true }) }

#[instrument(level = "info", skip(state))]
pub async fn http_list_games(State(state): State<Arc<AppState>>) -> impl IntoResponse {
  let games: Vec<GameOut> = state.config.games.iter().map(GameOut::from).collect();
  Json(games)
}

/// The game's slice of the data feed, as stored.
#[instrument(level = "info", skip(state))]
pub async fn http_game_items(
  State(state): State<Arc<AppState>>,
  Path(slug): Path<String>,
) -> Result<Json<Value>, AppError> {
  let game = state
    .game(&slug)
    .ok_or_else(|| AppError::NotFound(format!("Unknown game: {}", slug)))?;
  let items = state.load_feed().raw_collection(&game.feed_key);
  info!(target: "quiz", %slug, count = items.as_array().map(Vec::len).unwrap_or(0), "HTTP game items served");
  Ok(Json(items))
}

#[instrument(level = "info", skip(body), fields(text_len = body.text.len()))]
pub async fn http_post_tone_marks(Json(body): Json<ToneMarksIn>) -> impl IntoResponse {
  Json(ToneMarksOut { pinyin: tone::render(&body.text) })
}
