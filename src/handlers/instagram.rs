use axum::{
    extract::{Query, State},
    response::Json,
};
use serde::Deserialize;
use tracing::info;

use crate::error::{AppError, AppResult};
use crate::models::ThumbnailResponse;
use crate::services::instagram::{media_url, parse_post_id, FALLBACK_THUMBNAIL};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ThumbnailQuery {
    pub url: Option<String>,
}

/// `GET /instagram-thumbnail?url=` — best-effort thumbnail resolution for a
/// post or reel URL. A failed reachability check silently falls back to the
/// placeholder asset; the caller only sees `fallback: true`.
pub async fn instagram_thumbnail_handler(
    State(state): State<AppState>,
    Query(query): Query<ThumbnailQuery>,
) -> AppResult<Json<ThumbnailResponse>> {
    let url = query
        .url
        .filter(|u| !u.is_empty())
        .ok_or(AppError::MissingUrl)?;

    if !url.contains("instagram.com") {
        return Err(AppError::NotInstagram);
    }

    let post_id = parse_post_id(&url).ok_or(AppError::InvalidInstagramUrl)?;

    let candidate = media_url(&post_id);
    let response = if state.probe.is_reachable(&candidate).await {
        info!(post_id = %post_id, "Resolved Instagram thumbnail");
        ThumbnailResponse::resolved(candidate, post_id)
    } else {
        info!(post_id = %post_id, "Thumbnail unreachable, using placeholder");
        ThumbnailResponse::fallback(FALLBACK_THUMBNAIL.to_string(), post_id)
    };

    Ok(Json(response))
}
