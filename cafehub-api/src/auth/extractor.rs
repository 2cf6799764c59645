use axum::{async_trait, extract::FromRequestParts, http::request::Parts, RequestPartsExt};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};

use crate::{
    domain::models::Credential,
    routes::{ApiError, ErrorCode},
};

/// Extracts the raw bearer credential from the Authorization header.
///
/// A missing or malformed header is rejected here with 401; whether the
/// token itself is valid is decided later by the AuthResolver the services
/// consult.
#[async_trait]
impl<S> FromRequestParts<S> for Credential
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) = parts
            .extract::<TypedHeader<Authorization<Bearer>>>()
            .await
            .map_err(|_| {
                ApiError::unauthorized("Not authenticated").with_code(ErrorCode::Unauthenticated)
            })?;

        Ok(Credential::new(bearer.token()))
    }
}
