use axum::{extract::State, routing::get, Json, Router};
use serde::Deserialize;
use tracing::instrument;

use crate::{
    app_state::AppState,
    domain::models::{BookmarkedCafe, CafeId, Credential},
    routes::{ApiError, ApiSuccess},
};

pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(list_bookmarks).post(add_bookmark).delete(remove_bookmark),
    )
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BookmarkRequest {
    cafe_id: CafeId,
}

#[instrument(name = "list_bookmarks", skip(credential, app_state))]
async fn list_bookmarks(
    credential: Credential,
    State(app_state): State<AppState>,
) -> Result<ApiSuccess<Vec<BookmarkedCafe>>, ApiError> {
    let cafes = app_state
        .bookmark_service
        .list_bookmarks(&credential)
        .await?;

    Ok(ApiSuccess::new(cafes))
}

#[instrument(name = "add_bookmark", skip(credential, app_state))]
async fn add_bookmark(
    credential: Credential,
    State(app_state): State<AppState>,
    Json(body): Json<BookmarkRequest>,
) -> Result<ApiSuccess<CafeId>, ApiError> {
    let cafe_id = app_state
        .bookmark_service
        .add_bookmark(&credential, body.cafe_id)
        .await?;

    Ok(ApiSuccess::new(cafe_id))
}

#[instrument(name = "remove_bookmark", skip(credential, app_state))]
async fn remove_bookmark(
    credential: Credential,
    State(app_state): State<AppState>,
    Json(body): Json<BookmarkRequest>,
) -> Result<ApiSuccess<CafeId>, ApiError> {
    let cafe_id = app_state
        .bookmark_service
        .remove_bookmark(&credential, body.cafe_id)
        .await?;

    Ok(ApiSuccess::new(cafe_id))
}
