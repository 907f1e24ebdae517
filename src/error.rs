//! Error types: `AppError` for the HTTP/WS surface and `FeedError` for loading data.

use std::fmt;

use axum::{
  http::StatusCode,
  response::{IntoResponse, Response},
  Json,
};
use serde_json::json;
use tracing::error;

#[derive(Debug)]
pub enum AppError {
  // 404, e.g. an unknown game slug
  NotFound(String),
  // 500, a page template failed to render
  Render(tera::Error),
}

impl fmt::Display for AppError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      AppError::NotFound(msg) => write!(f, "not found: {}", msg),
      AppError::Render(e) => write!(f, "render error: {}", e),
    }
  }
}

impl std::error::Error for AppError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      AppError::NotFound(_) => None,
      AppError::Render(e) => Some(e),
    }
  }
}

impl From<tera::Error> for AppError {
  fn from(err: tera::Error) -> Self {
    AppError::Render(err)
  }
}

/// JSON body `{"error": "..."}` with the matching status code.
impl IntoResponse for AppError {
  fn into_response(self) -> Response {
    let (status, message) = match self {
      AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
      AppError::Render(e) => {
        error!(target: "mandarin_helper", error = ?e, "Page render failed");
        (StatusCode::INTERNAL_SERVER_ERROR, "Failed to render page".to_string())
      }
    };
    (status, Json(json!({ "error": message }))).into_response()
  }
}

/// Why the data feed could not be read. Callers fall back to empty data.
#[derive(Debug)]
pub enum FeedError {
  Io(std::io::Error),
  Json(serde_json::Error),
}

impl fmt::Display for FeedError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      FeedError::Io(e) => write!(f, "cannot read data feed: {}", e),
      FeedError::Json(e) => write!(f, "cannot parse data feed: {}", e),
    }
  }
}

impl std::error::Error for FeedError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      FeedError::Io(e) => Some(e),
      FeedError::Json(e) => Some(e),
    }
  }
}

impl From<std::io::Error> for FeedError {
  fn from(err: std::io::Error) -> Self {
    FeedError::Io(err)
  }
}

impl From<serde_json::Error> for FeedError {
  fn from(err: serde_json::Error) -> Self {
    FeedError::Json(err)
  }
}
