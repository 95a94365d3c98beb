use serde::Serialize;
use axum::Json;
use axum::http::StatusCode;
use chrono::{DateTime, Utc};

/// Uniform JSON envelope for every endpoint: the payload (if any) plus
/// request metadata mirrored into the body.
#[derive(Serialize)]
pub struct ApiResponse<T> {
    pub data: Option<T>,
    pub meta: ResponseMeta,
}

#[derive(Serialize)]
pub struct ResponseMeta {
    pub status: String,
    pub status_code: u16,
    pub timestamp: DateTime<Utc>,
    pub message: Option<String>,
}

pub fn success<T: Serialize>(data: T) -> (StatusCode, Json<ApiResponse<T>>) {
    (
        StatusCode::OK,
        Json(ApiResponse {
            data: Some(data),
            meta: ResponseMeta {
                status: "success".to_string(),
                status_code: StatusCode::OK.as_u16(),
                timestamp: Utc::now(),
                message: None,
            },
        }),
    )
}

pub fn error<T>(status: StatusCode, message: impl Into<String>) -> (StatusCode, Json<ApiResponse<T>>) {
    (
        status,
        Json(ApiResponse {
            data: None,
            meta: ResponseMeta {
                status: "error".to_string(),
                status_code: status.as_u16(),
                timestamp: Utc::now(),
                message: Some(message.into()),
            },
        }),
    )
}
