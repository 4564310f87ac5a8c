use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::routes::{health, status};
use crate::{AppConfig, AppState};

/// Build the route table shared by both hosting modes.
///
/// Unknown paths fall through to axum's default 404.
pub fn build_router(config: &AppConfig) -> Router {
    let state = AppState {
        running_message: config.running_message(),
    };

    Router::new()
        .route("/", get(status::root))
        .route("/health", get(health::health_check))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}
