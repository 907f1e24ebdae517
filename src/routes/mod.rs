//! Router assembly: pages, HTTP API, WebSocket upgrade, static files, CORS, and HTTP tracing.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::state::AppState;

pub mod http;
pub mod pages;
pub mod ws;

/// Build the application router with:
/// - Landing page at `/` and one page per game at `/game/:slug`
/// - WebSocket quiz sessions at `/ws`
/// - REST-ish API under `/api/v1/...`
/// - Static files from `./static`
/// - CORS (allow any origin/method/headers)
/// - HTTP trace layer (per-request spans w/ method, path, status, latency)
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Pages
        .route("/", get(pages::landing_page))
        .route("/game/:slug", get(pages::game_page))
        .route("/assets/quiz.js", get(pages::quiz_script))
        // WebSocket
        .route("/ws", get(ws::ws_upgrade))
        // HTTP API
        .route("/api/v1/health", get(http::http_health))
        .route("/api/v1/games", get(http::http_list_games))
        .route("/api/v1/games/:slug/items", get(http::http_game_items))
        .route("/api/v1/tone_marks", post(http::http_post_tone_marks))
        // State + CORS + HTTP tracing
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .fallback_service(ServeDir::new("./static"))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;
    use crate::config::AppConfig;

    fn app() -> Router {
        build_router(Arc::new(AppState::with_config(AppConfig::default())))
    }

    async fn body_string(res: axum::response::Response) -> String {
        let bytes = to_bytes(res.into_body(), usize::MAX).await.expect("body");
        String::from_utf8(bytes.to_vec()).expect("utf-8")
    }

    #[tokio::test]
    async fn health() {
        let res = app()
            .oneshot(Request::get("/api/v1/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(body_string(res).await, r#"{"ok":true}"#);
    }

    #[tokio::test]
    async fn landing_and_game_pages() {
        let res = app().oneshot(Request::get("/").body(Body::empty()).unwrap()).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        assert!(body_string(res).await.contains("/game/hsk-7-9"));

        let res = app()
            .oneshot(Request::get("/game/pinyin").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        assert!(body_string(res).await.contains("data-game=\"pinyin\""));
    }

    #[tokio::test]
    async fn unknown_game_is_404() {
        let res = app()
            .oneshot(Request::get("/game/crossword").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        let json: Value = serde_json::from_str(&body_string(res).await).unwrap();
        assert_eq!(json["error"], "Unknown game: crossword");
    }

    #[tokio::test]
    async fn quiz_script_is_served() {
        let res = app()
            .oneshot(Request::get("/assets/quiz.js").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        assert!(res.headers()[header::CONTENT_TYPE].to_str().unwrap().starts_with("text/javascript"));
    }

    #[tokio::test]
    async fn tone_marks_endpoint() {
        let req = Request::post("/api/v1/tone_marks")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"text":"ni3 hao3"}"#))
            .unwrap();
        let res = app().oneshot(req).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let json: Value = serde_json::from_str(&body_string(res).await).unwrap();
        assert_eq!(json["pinyin"], "nǐ hǎo");
    }

    #[tokio::test]
    async fn games_and_items() {
        let path = std::env::temp_dir().join(format!("mandarin-helper-routes-{}.json", std::process::id()));
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(r#"{"hskLesson4to6":[{"english":"hello","correct":{"chinese":"你好","pinyin":"ni3 hao3"}}]}"#.as_bytes())
            .unwrap();
        let config = AppConfig { data_path: path.clone(), ..AppConfig::default() };
        let app = build_router(Arc::new(AppState::with_config(config)));

        let res = app
            .clone()
            .oneshot(Request::get("/api/v1/games").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let games: Value = serde_json::from_str(&body_string(res).await).unwrap();
        assert_eq!(games.as_array().map(Vec::len), Some(3));
        assert_eq!(games[0]["kind"], "pinyin");

        let res = app
            .clone()
            .oneshot(Request::get("/api/v1/games/hsk-4-6/items").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let items: Value = serde_json::from_str(&body_string(res).await).unwrap();
        assert_eq!(items[0]["correct"]["chinese"], "你好");

        let res = app
            .oneshot(Request::get("/api/v1/games/pinyin/items").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(body_string(res).await, "[]");

        let _ = std::fs::remove_file(path);
    }
}
