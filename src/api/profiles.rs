//! Profile fetch endpoint

use axum::{
    Router,
    extract::{Query, State},
    response::Json,
    routing::get,
};
use serde::Deserialize;

use crate::AppState;
use crate::data::ProfileRecord;
use crate::error::AppError;
use crate::service::ProfileService;

/// Fetch query parameters
#[derive(Debug, Deserialize)]
pub struct FetchParams {
    /// Username of the profile to snapshot
    username: Option<String>,
}

/// GET /fetch_instagram - Fetch and snapshot one public profile
///
/// Returns the profile record as JSON and leaves the JSON/HTML/CSV
/// artifacts (plus a best-effort picture download) behind on disk.
pub async fn fetch_instagram(
    State(state): State<AppState>,
    Query(params): Query<FetchParams>,
) -> Result<Json<ProfileRecord>, AppError> {
    let username = params
        .username
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .ok_or(AppError::MissingUsername)?;

    let record = ProfileService::from_state(&state).fetch(username).await?;
    Ok(Json(record))
}

/// Create profile router
pub fn profiles_router() -> Router<AppState> {
    Router::new().route("/fetch_instagram", get(fetch_instagram))
}
