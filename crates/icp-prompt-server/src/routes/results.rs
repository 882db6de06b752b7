//! Prompt Result Routes

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use uuid::Uuid;

use crate::models::{PromptResultResponse, ResultQuery};
use crate::AppState;

use super::{domain_error, not_found, ApiError};

/// List results, newest first
#[utoipa::path(
    get,
    path = "/icp/results",
    params(ResultQuery),
    responses(
        (status = 200, description = "Saved results", body = Vec<PromptResultResponse>),
        (status = 500, description = "Internal server error")
    ),
    tag = "Result"
)]
pub async fn list_results(
    State(state): State<AppState>,
    Query(query): Query<ResultQuery>,
) -> Result<Json<Vec<PromptResultResponse>>, ApiError> {
    let results = state
        .result_service
        .list(query.domain.as_deref())
        .await
        .map_err(domain_error)?;

    Ok(Json(results.into_iter().map(Into::into).collect()))
}

/// Domains that have at least one result
#[utoipa::path(
    get,
    path = "/icp/results/domains",
    responses(
        (status = 200, description = "Distinct domains", body = Vec<String>)
    ),
    tag = "Result"
)]
pub async fn list_result_domains(
    State(state): State<AppState>,
) -> Result<Json<Vec<String>>, ApiError> {
    let domains = state
        .result_service
        .domains()
        .await
        .map_err(domain_error)?;

    Ok(Json(domains))
}

#[utoipa::path(
    get,
    path = "/icp/results/{id}",
    params(
        ("id" = Uuid, Path, description = "Result ID")
    ),
    responses(
        (status = 200, description = "Result found", body = PromptResultResponse),
        (status = 404, description = "Result not found")
    ),
    tag = "Result"
)]
pub async fn get_result(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<PromptResultResponse>, ApiError> {
    let result = state
        .result_service
        .get_by_id(id)
        .await
        .map_err(domain_error)?
        .ok_or_else(|| not_found("Result"))?;

    Ok(Json(result.into()))
}

#[utoipa::path(
    delete,
    path = "/icp/results/{id}",
    params(
        ("id" = Uuid, Path, description = "Result ID")
    ),
    responses(
        (status = 204, description = "Result deleted"),
        (status = 404, description = "Result not found")
    ),
    tag = "Result"
)]
pub async fn delete_result(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if state
        .result_service
        .delete(id)
        .await
        .map_err(domain_error)?
    {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found("Result"))
    }
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/icp/results", get(list_results))
        .route("/icp/results/domains", get(list_result_domains))
        .route("/icp/results/:id", get(get_result).delete(delete_result))
}
