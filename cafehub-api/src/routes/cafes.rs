use axum::{
    extract::{Path, State},
    routing::get,
    Router,
};
use serde::Serialize;
use tracing::instrument;

use crate::{
    app_state::AppState,
    domain::models::{Cafe, CafeId, Menu},
    routes::{ApiError, ApiSuccess, ErrorCode},
};

pub fn router() -> Router<AppState> {
    Router::new().route("/:cafe_id", get(cafe_detail))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CafeDetailResponse {
    cafe: Cafe,
    menus: Vec<Menu>,
}

#[instrument(name = "cafe_detail", skip(app_state))]
async fn cafe_detail(
    Path(cafe_id): Path<CafeId>,
    State(app_state): State<AppState>,
) -> Result<ApiSuccess<CafeDetailResponse>, ApiError> {
    let cafe = app_state
        .cafe_repo
        .find_by_id(cafe_id)
        .await?
        .ok_or_else(|| {
            ApiError::not_found(format!("cafe not found: {cafe_id}"))
                .with_code(ErrorCode::CafeNotFound)
        })?;

    let menus = app_state.menu_repo.find_all_by_cafe(cafe_id).await?;

    Ok(ApiSuccess::new(CafeDetailResponse { cafe, menus }))
}
