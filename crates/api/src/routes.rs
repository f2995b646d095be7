use crate::handlers;
use crate::middleware::enforce_rate_limit;
use crate::state::AppState;
use axum::{middleware, routing::get, Router};

pub fn create_api_routes(state: AppState) -> Router {
    let lookups = Router::new()
        .route(
            "/operators/{name}/infrastructure",
            get(handlers::get_operator_infrastructure),
        )
        .route(
            "/plmn/{mcc}/{mnc}/infrastructure",
            get(handlers::get_plmn_infrastructure),
        )
        .route(
            "/mcc/{mcc}/infrastructure",
            get(handlers::get_mcc_infrastructure),
        )
        .route(
            "/countries/{name}/infrastructure",
            get(handlers::get_country_infrastructure),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            enforce_rate_limit,
        ));

    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/rate-limit/me", get(handlers::get_my_usage))
        .route("/rate-limit/stats", get(handlers::get_limiter_stats))
        .merge(lookups)
        .with_state(state)
}
