//! API response envelope.
//!
//! Every endpoint answers with the same shape:
//! success `{"ok": true, "data": ..., "message": ...}`,
//! failure `{"ok": false, "message": ..., "error": {...}}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use kinship_core::{ErrorResponse, KinshipError};
use serde::{Deserialize, Serialize};
use tracing::error;

/// Standard API response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorResponse>,
}

impl<T> ApiResponse<T> {
    /// Creates a successful response.
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            ok: true,
            data: Some(data),
            message: message.into(),
            error: None,
        }
    }

    /// Creates an error response.
    pub fn failure(error: ErrorResponse) -> ApiResponse<()> {
        ApiResponse {
            ok: false,
            data: None,
            message: error.message.clone(),
            error: Some(error),
        }
    }
}

/// Application error type for Axum.
#[derive(Debug)]
pub struct AppError(pub KinshipError);

impl From<KinshipError> for AppError {
    fn from(err: KinshipError) -> Self {
        Self(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        // Infrastructure failures are logged with their details here;
        // the envelope only carries the generic message.
        if self.0.is_internal() {
            error!("Internal error: {}", self.0);
        }

        let body = Json(ApiResponse::<()>::failure(ErrorResponse::from_error(&self.0)));
        (status, body).into_response()
    }
}

/// Result type for Axum handlers.
pub type ApiResult<T> = Result<Json<ApiResponse<T>>, AppError>;

/// Helper to create a success response.
pub fn ok<T: Serialize>(data: T, message: impl Into<String>) -> ApiResult<T> {
    Ok(Json(ApiResponse::success(data, message)))
}

/// Helper to create a created (201) response.
pub fn created<T: Serialize>(
    data: T,
    message: impl Into<String>,
) -> (StatusCode, Json<ApiResponse<T>>) {
    (StatusCode::CREATED, Json(ApiResponse::success(data, message)))
}
