use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::core::app::AppState;
use crate::web::handlers::board;

pub fn create_router(state: Arc<AppState>) -> Router {
    let static_dir = state.config.server.static_dir.clone();

    Router::new()
        // Board pages
        .route("/", get(board::index))
        .route("/index", get(board::index))
        .route("/board/save-form", get(board::save_form))
        .route("/board/save", post(board::save))
        .route("/board/:id", get(board::detail))
        .route(
            "/board/:id/update-form",
            get(board::update_form).post(board::update),
        )
        .route("/board/:id/delete", post(board::delete))

        // Static files
        .nest_service("/static", ServeDir::new(static_dir))

        // Health check
        .route("/health", get(health_check))

        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
