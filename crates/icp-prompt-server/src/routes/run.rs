//! Run Routes - execute prompts across imported domains

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::Value;

use icp_prompt::{find_model, normalize, DomainError, RunRequest, UserContext};

use crate::models::{RunPromptsRequest, RunResponse, RunStatusResponse};
use crate::AppState;

use super::{domain_error, ApiError};

/// Resolve questions, system prompt, model and records for a run
async fn resolve_request(
    state: &AppState,
    payload: RunPromptsRequest,
) -> Result<RunRequest, DomainError> {
    let mut questions = state
        .question_service
        .contents_for(&payload.question_ids)
        .await?;
    questions.extend(
        payload
            .questions
            .into_iter()
            .filter(|q| !q.trim().is_empty()),
    );

    let system_prompt = match payload.system_prompt.filter(|p| !p.trim().is_empty()) {
        Some(prompt) => prompt,
        None => {
            state
                .template_service
                .resolve_system_prompt(payload.prompt_id)
                .await?
        }
    };

    let model = payload
        .model
        .map(|m| m.trim().to_string())
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| state.default_model.to_string());
    if find_model(&model).is_none() {
        tracing::warn!("Model {} is not in the catalog, sending as-is", model);
    }

    let records = normalize(&Value::Array(payload.records))
        .map(|n| n.records)
        .unwrap_or_default();

    Ok(RunRequest {
        system_prompt,
        questions,
        model,
        records,
        user_context: payload
            .user_context
            .filter(|c| !c.is_null())
            .map(UserContext::new),
    })
}

/// Run the selected questions against every unique domain, one at a time
///
/// Failures for individual domains are reported in `failures` and do not
/// stop the run. Only one run may be active at a time.
#[utoipa::path(
    post,
    path = "/icp/run",
    request_body = RunPromptsRequest,
    responses(
        (status = 200, description = "Run finished", body = RunResponse),
        (status = 400, description = "No questions selected or no domains found"),
        (status = 404, description = "Prompt template not found"),
        (status = 409, description = "A run is already in progress")
    ),
    tag = "Run"
)]
pub async fn run_prompts(
    State(state): State<AppState>,
    Json(payload): Json<RunPromptsRequest>,
) -> Result<Json<RunResponse>, ApiError> {
    let Some(_guard) = state.run_gate.try_begin() else {
        tracing::warn!("Rejected run: another run is in progress");
        return Err((
            StatusCode::CONFLICT,
            "A run is already in progress".to_string(),
        ));
    };

    let request = resolve_request(&state, payload)
        .await
        .map_err(domain_error)?;

    let report = state
        .run_service
        .run(&request, state.run_gate.as_ref())
        .await
        .map_err(domain_error)?;

    Ok(Json(report.into()))
}

/// Progress of the active run
#[utoipa::path(
    get,
    path = "/icp/run/status",
    responses(
        (status = 200, description = "Current progress", body = RunStatusResponse)
    ),
    tag = "Run"
)]
pub async fn run_status(State(state): State<AppState>) -> Json<RunStatusResponse> {
    Json(state.run_gate.snapshot().into())
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/icp/run", post(run_prompts))
        .route("/icp/run/status", get(run_status))
}
