use crate::dto::RateLimitedResponse;
use crate::state::AppState;
use axum::{
    extract::{Request, State},
    http::{header::RETRY_AFTER, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use plmnscope_domain::RateDecision;
use tracing::{debug, info};

use super::caller::{caller_id_from_headers, missing_caller_response};

/// Admits the request through the sliding-window limiter, keyed by the
/// `X-Caller-Id` header. Admission and recording happen in one step.
pub async fn enforce_rate_limit(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let Some(caller) = caller_id_from_headers(request.headers()) else {
        return missing_caller_response();
    };

    match state.limiter.try_acquire(&caller) {
        RateDecision::Denied(denial) => {
            info!(
                caller = %caller,
                window = %denial.window,
                wait_secs = denial.wait_secs,
                "Request rate limited"
            );
            let retry_after = denial.wait_secs.max(1).to_string();
            (
                StatusCode::TOO_MANY_REQUESTS,
                [(RETRY_AFTER, retry_after)],
                Json(RateLimitedResponse::from(&denial)),
            )
                .into_response()
        }
        decision => {
            debug!(
                caller = %caller,
                bypassed = matches!(decision, RateDecision::Bypassed),
                "Request admitted"
            );
            next.run(request).await
        }
    }
}
