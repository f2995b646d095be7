use axum::{
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

pub const CALLER_ID_HEADER: &str = "X-Caller-Id";

pub fn caller_id_from_headers(headers: &HeaderMap) -> Option<String> {
    headers
        .get(CALLER_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
}

/// 400 returned when a route that needs a caller identity gets none.
pub fn missing_caller_response() -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "error": format!("missing {} header", CALLER_ID_HEADER) })),
    )
        .into_response()
}
