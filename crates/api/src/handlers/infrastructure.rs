use crate::{
    dto::{InfrastructureParams, LookupResponse},
    errors::ApiError,
    state::AppState,
};
use axum::{
    extract::{Path, Query, State},
    Json,
};
use plmnscope_application::use_cases::InfrastructureQuery;
use plmnscope_domain::{DomainError, PlmnId};
use tracing::{debug, instrument};

fn parse_code(kind: &str, raw: &str) -> Result<u16, ApiError> {
    let value = raw.trim().parse::<i64>().map_err(|_| {
        ApiError(DomainError::InvalidInput(format!(
            "{} must be a number, got '{}'",
            kind, raw
        )))
    })?;
    PlmnId::validate_code(kind, value).map_err(|e| ApiError(DomainError::InvalidInput(e)))
}

async fn run_lookup(
    state: &AppState,
    query: InfrastructureQuery,
    params: &InfrastructureParams,
) -> Result<Json<LookupResponse>, ApiError> {
    let lookup = state.lookup.execute(query, params.all).await?;
    Ok(Json(LookupResponse::from(lookup)))
}

#[instrument(skip(state), name = "api_operator_infrastructure")]
pub async fn get_operator_infrastructure(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(params): Query<InfrastructureParams>,
) -> Result<Json<LookupResponse>, ApiError> {
    debug!(operator = %name, all = params.all, "Looking up operator infrastructure");
    run_lookup(&state, InfrastructureQuery::Operator(name), &params).await
}

#[instrument(skip(state), name = "api_plmn_infrastructure")]
pub async fn get_plmn_infrastructure(
    State(state): State<AppState>,
    Path((mcc, mnc)): Path<(String, String)>,
    Query(params): Query<InfrastructureParams>,
) -> Result<Json<LookupResponse>, ApiError> {
    let mcc = parse_code("MCC", &mcc)?;
    let mnc = parse_code("MNC", &mnc)?;
    run_lookup(&state, InfrastructureQuery::Plmn { mnc, mcc }, &params).await
}

#[instrument(skip(state), name = "api_mcc_infrastructure")]
pub async fn get_mcc_infrastructure(
    State(state): State<AppState>,
    Path(mcc): Path<String>,
    Query(params): Query<InfrastructureParams>,
) -> Result<Json<LookupResponse>, ApiError> {
    let mcc = parse_code("MCC", &mcc)?;
    run_lookup(&state, InfrastructureQuery::Mcc(mcc), &params).await
}

#[instrument(skip(state), name = "api_country_infrastructure")]
pub async fn get_country_infrastructure(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(params): Query<InfrastructureParams>,
) -> Result<Json<LookupResponse>, ApiError> {
    run_lookup(&state, InfrastructureQuery::Country(name), &params).await
}
