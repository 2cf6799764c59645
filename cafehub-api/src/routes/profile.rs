use axum::{
    extract::{DefaultBodyLimit, Multipart, State},
    routing::get,
    Router,
};
use tracing::instrument;

use crate::{
    app_state::AppState,
    domain::models::{Credential, Profile, ProfileImageUpload, ProfileUpdate},
    routes::{ApiError, ApiSuccess},
};

// Allow multipart overhead on top of the actual image payload.
const PROFILE_UPLOAD_BODY_LIMIT: usize = 6 * 1024 * 1024;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/profile", get(my_profile).post(update_my_profile))
        .route_layer(DefaultBodyLimit::max(PROFILE_UPLOAD_BODY_LIMIT))
}

#[instrument(name = "my_profile", skip(credential, app_state))]
async fn my_profile(
    credential: Credential,
    State(app_state): State<AppState>,
) -> Result<ApiSuccess<Profile>, ApiError> {
    let profile = app_state.profile_service.get_profile(&credential).await?;

    Ok(ApiSuccess::new(profile))
}

#[instrument(name = "update_my_profile", skip(credential, app_state, multipart))]
async fn update_my_profile(
    credential: Credential,
    State(app_state): State<AppState>,
    mut multipart: Multipart,
) -> Result<ApiSuccess<&'static str>, ApiError> {
    let update = extract_profile_update(&mut multipart).await?;

    app_state
        .profile_service
        .update_profile(&credential, update)
        .await?;

    Ok(ApiSuccess::new("Profile Changed"))
}

async fn extract_profile_update(multipart: &mut Multipart) -> Result<ProfileUpdate, ApiError> {
    let mut update = ProfileUpdate::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| ApiError::bad_request("failed to parse multipart field"))?
    {
        match field.name() {
            Some("nickname") => {
                let nickname = field
                    .text()
                    .await
                    .map_err(|_| ApiError::bad_request("failed to read nickname field"))?;
                update.nickname = Some(nickname);
            }
            Some("profileImg") => {
                let filename = field
                    .file_name()
                    .map(str::to_string)
                    .unwrap_or_else(|| "profile".to_string());
                let content_type = field.content_type().map(str::to_string);
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|_| ApiError::bad_request("failed to read image payload"))?;

                update.image = Some(ProfileImageUpload {
                    filename,
                    content_type,
                    bytes: bytes.to_vec(),
                });
            }
            _ => continue,
        }
    }

    Ok(update)
}
