// src/shared/api/response.rs
use actix_web::{http::StatusCode, HttpResponse};
use serde::Serialize;

/// Every non-entity response body carries a stable `message` field; contact
/// acceptance additionally echoes `data`, and development mode may attach the
/// raw provider `error` text.
#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(message: &str, data: T) -> HttpResponse {
        HttpResponse::Ok().json(ApiResponse {
            message: message.to_string(),
            data: Some(data),
            error: None,
        })
    }
}

impl ApiResponse<()> {
    pub fn error(status: StatusCode, message: &str) -> HttpResponse {
        Self::error_with_detail(status, message, None)
    }

    pub fn error_with_detail(
        status: StatusCode,
        message: &str,
        detail: Option<String>,
    ) -> HttpResponse {
        HttpResponse::build(status).json(ApiResponse::<()> {
            message: message.to_string(),
            data: None,
            error: detail,
        })
    }

    pub fn not_found(message: &str) -> HttpResponse {
        Self::error(StatusCode::NOT_FOUND, message)
    }

    pub fn bad_request(message: &str) -> HttpResponse {
        Self::error(StatusCode::BAD_REQUEST, message)
    }

    pub fn internal_error(message: &str) -> HttpResponse {
        Self::error(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}
