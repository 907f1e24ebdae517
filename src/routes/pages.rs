//! HTML pages: the landing page and one page per configured game.
//! Templates are compiled in; the quiz itself runs over `/ws`.

use std::sync::Arc;

use axum::{
  extract::{Path, State},
  http::header,
  response::{Html, IntoResponse},
};
use lazy_static::lazy_static;
use tera::{Context, Tera};
use tracing::{error, instrument};

use crate::config::GameCfg;
use crate::domain::GameKind;
use crate::error::AppError;
use crate::state::AppState;

const LANDING_HTML: &str = include_str!("../../templates/landing.html");
const GAME_HTML: &str = include_str!("../../templates/game.html");
const QUIZ_JS: &str = include_str!("../../static/quiz.js");

lazy_static! {
  static ref TEMPLATES: Tera = {
    let mut tera = Tera::default();
    if let Err(e) = tera.add_raw_templates(vec![("landing.html", LANDING_HTML), ("game.html", GAME_HTML)]) {
      // Pages then fail per request with a render error.
      error!(target: "mandarin_helper", error = %e, "Page templates failed to parse");
    }
    tera.autoescape_on(vec![".html"]);
    tera
  };
}

pub fn render_landing(games: &[GameCfg]) -> Result<String, tera::Error> {
  let mut ctx = Context::new();
  ctx.insert("games", games);
  TEMPLATES.render("landing.html", &ctx)
}

pub fn render_game(game: &GameCfg) -> Result<String, tera::Error> {
  let kind = match game.kind {
    GameKind::Pinyin => "pinyin",
    GameKind::Flashcard => "flashcard",
  };
  let mut ctx = Context::new();
  ctx.insert("heading", &game.heading());
  ctx.insert("slug", &game.slug);
  ctx.insert("kind", kind);
  TEMPLATES.render("game.html", &ctx)
}

#[instrument(level = "info", skip(state))]
pub async fn landing_page(State(state): State<Arc<AppState>>) -> Result<Html<String>, AppError> {
  Ok(Html(render_landing(&state.config.games)?))
}

#[instrument(level = "info", skip(state))]
pub async fn game_page(
  State(state): State<Arc<AppState>>,
  Path(slug): Path<String>,
) -> Result<Html<String>, AppError> {
  let game = state
    .game(&slug)
    .ok_or_else(|| AppError::NotFound(format!("Unknown game: {}", slug)))?;
  Ok(Html(render_game(game)?))
}

pub async fn quiz_script() -> impl IntoResponse {
  ([(header::CONTENT_TYPE, "text/javascript; charset=utf-8")], QUIZ_JS)
}
