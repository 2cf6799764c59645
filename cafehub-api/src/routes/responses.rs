use axum::{
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// The success half of the uniform response envelope. Handlers return this
/// instead of raw entities so that success and failure share one shape.
#[derive(Debug, Serialize)]
pub struct ApiSuccess<T: Serialize> {
    success: bool,
    data: T,
}

impl<T: Serialize> ApiSuccess<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_envelope_wraps_the_payload() {
        let json = serde_json::to_value(ApiSuccess::new(7)).unwrap();
        assert_eq!(json, serde_json::json!({ "success": true, "data": 7 }));
    }
}
