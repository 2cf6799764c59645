use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::fmt;

use crate::{
    domain::{AuthError, BookmarkError, ProfileError},
    repositories::RepositoryError,
};

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    CafeNotFound,
    InvalidCafeId,
    Unauthenticated,
    ProfileUpdateFailed,
}

/// The failure half of the uniform response envelope.
#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<ErrorCode>,
}

pub struct ApiError {
    status: StatusCode,
    message: String,
    code: Option<ErrorCode>,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            code: None,
        }
    }

    pub fn with_code(mut self, code: ErrorCode) -> Self {
        self.code = Some(code);
        self
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.status, self.message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            success: false,
            error: self.message,
            code: self.code,
        };
        (self.status, Json(body)).into_response()
    }
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::DatabaseError(ref e) => {
                tracing::error!("Database error: {:?}", e);
                Self::internal(err.to_string())
            }
            RepositoryError::NotFound(_) => Self::not_found(err.to_string()),
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Unauthenticated => {
                Self::unauthorized("Not authenticated").with_code(ErrorCode::Unauthenticated)
            }
            AuthError::Repository(e) => e.into(),
        }
    }
}

impl From<BookmarkError> for ApiError {
    fn from(err: BookmarkError) -> Self {
        match err {
            BookmarkError::CafeNotFound(id) => {
                Self::not_found(format!("cafe not found: {id}")).with_code(ErrorCode::CafeNotFound)
            }
            BookmarkError::InvalidCafeId(id) => {
                Self::bad_request(format!("invalid cafe id: {id}"))
                    .with_code(ErrorCode::InvalidCafeId)
            }
            BookmarkError::Auth(e) => e.into(),
            BookmarkError::Repository(e) => e.into(),
        }
    }
}

impl From<ProfileError> for ApiError {
    fn from(err: ProfileError) -> Self {
        match err {
            ProfileError::UpdateFailed(message) => {
                tracing::error!("Profile update failed: {}", message);
                Self::internal("failed to change profile")
                    .with_code(ErrorCode::ProfileUpdateFailed)
            }
            ProfileError::Auth(e) => e.into(),
            ProfileError::Repository(e) => e.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_codes_serialize_screaming_snake() {
        let code = serde_json::to_string(&ErrorCode::CafeNotFound).unwrap();
        assert_eq!(code, "\"CAFE_NOT_FOUND\"");
    }

    #[test]
    fn failure_envelope_carries_error_and_code() {
        let body = ErrorBody {
            success: false,
            error: "cafe not found: 7".to_string(),
            code: Some(ErrorCode::CafeNotFound),
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "success": false,
                "error": "cafe not found: 7",
                "code": "CAFE_NOT_FOUND",
            })
        );
    }
}
