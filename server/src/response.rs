use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Body of every response, `{ "success": bool, "data": ... }`.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    success: bool,
    data: T,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

impl ApiResponse<String> {
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: message.into(),
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}
