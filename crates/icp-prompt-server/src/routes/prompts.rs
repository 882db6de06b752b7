//! System Prompt Template Routes

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use uuid::Uuid;

use crate::models::{
    CreatePromptTemplateRequest, PromptTemplateResponse, UpdatePromptTemplateRequest,
};
use crate::AppState;

use super::{domain_error, not_found, ApiError};

/// List templates, most recently updated first
#[utoipa::path(
    get,
    path = "/icp/prompts",
    responses(
        (status = 200, description = "List of templates", body = Vec<PromptTemplateResponse>),
        (status = 500, description = "Internal server error")
    ),
    tag = "Prompt"
)]
pub async fn list_prompts(
    State(state): State<AppState>,
) -> Result<Json<Vec<PromptTemplateResponse>>, ApiError> {
    let templates = state
        .template_service
        .list_all()
        .await
        .map_err(domain_error)?;

    Ok(Json(templates.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    post,
    path = "/icp/prompts",
    request_body = CreatePromptTemplateRequest,
    responses(
        (status = 201, description = "Template created", body = PromptTemplateResponse),
        (status = 400, description = "Blank name or content")
    ),
    tag = "Prompt"
)]
pub async fn create_prompt(
    State(state): State<AppState>,
    Json(payload): Json<CreatePromptTemplateRequest>,
) -> Result<(StatusCode, Json<PromptTemplateResponse>), ApiError> {
    let template = state
        .template_service
        .create(&payload.name, &payload.content)
        .await
        .map_err(domain_error)?;

    Ok((StatusCode::CREATED, Json(template.into())))
}

#[utoipa::path(
    get,
    path = "/icp/prompts/{id}",
    params(
        ("id" = Uuid, Path, description = "Template ID")
    ),
    responses(
        (status = 200, description = "Template found", body = PromptTemplateResponse),
        (status = 404, description = "Template not found")
    ),
    tag = "Prompt"
)]
pub async fn get_prompt(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<PromptTemplateResponse>, ApiError> {
    let template = state
        .template_service
        .get_by_id(id)
        .await
        .map_err(domain_error)?
        .ok_or_else(|| not_found("Prompt template"))?;

    Ok(Json(template.into()))
}

#[utoipa::path(
    put,
    path = "/icp/prompts/{id}",
    params(
        ("id" = Uuid, Path, description = "Template ID")
    ),
    request_body = UpdatePromptTemplateRequest,
    responses(
        (status = 200, description = "Template updated", body = PromptTemplateResponse),
        (status = 400, description = "Blank name or content"),
        (status = 404, description = "Template not found")
    ),
    tag = "Prompt"
)]
pub async fn update_prompt(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdatePromptTemplateRequest>,
) -> Result<Json<PromptTemplateResponse>, ApiError> {
    let template = state
        .template_service
        .update(id, payload.name.as_deref(), payload.content.as_deref())
        .await
        .map_err(domain_error)?;

    Ok(Json(template.into()))
}

/// Delete a template. The last remaining template cannot be deleted.
#[utoipa::path(
    delete,
    path = "/icp/prompts/{id}",
    params(
        ("id" = Uuid, Path, description = "Template ID")
    ),
    responses(
        (status = 204, description = "Template deleted"),
        (status = 404, description = "Template not found"),
        (status = 409, description = "Last remaining template")
    ),
    tag = "Prompt"
)]
pub async fn delete_prompt(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let deleted = state
        .template_service
        .delete(id)
        .await
        .map_err(domain_error)?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found("Prompt template"))
    }
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/icp/prompts", get(list_prompts).post(create_prompt))
        .route(
            "/icp/prompts/:id",
            get(get_prompt).put(update_prompt).delete(delete_prompt),
        )
}
