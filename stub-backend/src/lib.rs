//! Canned-response stand-in for the generation backend.
//!
//! Serves the same two endpoints the frontend calls, with deterministic output
//! derived from the request. Used for local development and as the mock
//! backend in tests.

mod handlers;

use crate::handlers::{generate_book, generate_character};
use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;

pub use handlers::ErrorBody;

#[derive(Clone, Debug)]
pub struct StubConfig {
    /// Chapters in every generated book.
    pub chapter_count: usize,
}

impl Default for StubConfig {
    fn default() -> Self {
        Self { chapter_count: 3 }
    }
}

pub fn router(config: StubConfig) -> Router {
    Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .route("/api/generateBook", post(generate_book))
        .route("/api/generateCharacter", post(generate_character))
        .layer(CorsLayer::permissive())
        .with_state(config)
}
