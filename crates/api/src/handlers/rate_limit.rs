use crate::{
    dto::{CallerUsageResponse, LimiterStatsResponse},
    middleware::{caller_id_from_headers, missing_caller_response},
    state::AppState,
};
use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::{instrument, warn};

#[instrument(skip(state, headers), name = "api_rate_limit_me")]
pub async fn get_my_usage(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let Some(caller) = caller_id_from_headers(&headers) else {
        return missing_caller_response();
    };

    let usage = state.limiter.caller_stats(&caller);

    Json(CallerUsageResponse {
        caller,
        minute_count: usage.minute_count,
        hour_count: usage.hour_count,
        max_per_minute: state.limiter.max_per_minute(),
        max_per_hour: state.limiter.max_per_hour(),
        bypassed: usage.bypassed,
    })
    .into_response()
}

#[instrument(skip(state, headers), name = "api_rate_limit_stats")]
pub async fn get_limiter_stats(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let Some(caller) = caller_id_from_headers(&headers) else {
        return missing_caller_response();
    };

    if !state.limiter.is_bypassed(&caller) {
        warn!(caller = %caller, "Limiter stats requested by non-admin caller");
        return (
            StatusCode::FORBIDDEN,
            Json(json!({ "error": "forbidden" })),
        )
            .into_response();
    }

    let stats = state.limiter.global_stats();

    Json(LimiterStatsResponse {
        tracked_callers: stats.tracked_callers,
        requests_last_hour: stats.requests_last_hour,
    })
    .into_response()
}
