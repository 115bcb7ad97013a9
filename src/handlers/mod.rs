pub mod extract;
pub mod health;
pub mod instagram;

pub use extract::*;
pub use health::*;
pub use instagram::*;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;

/// Build the full application router. Shared between `main` and the
/// integration tests so both exercise the same middleware stack.
pub fn router(state: AppState) -> Router {
    let body_limit = DefaultBodyLimit::max(state.config.max_upload_bytes());

    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/extract-text", post(extract_text_handler))
        .route("/extract-from-base64", post(extract_base64_handler))
        .route("/instagram-thumbnail", get(instagram_thumbnail_handler))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive())
                .layer(body_limit),
        )
        .with_state(state)
}
