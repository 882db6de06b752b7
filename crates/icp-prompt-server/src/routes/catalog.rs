//! Model Catalog Route

use axum::{extract::State, routing::get, Json, Router};

use icp_prompt::AVAILABLE_MODELS;

use crate::models::{ModelCatalogResponse, ModelResponse};
use crate::AppState;

/// Models offered for a run and the configured default
#[utoipa::path(
    get,
    path = "/icp/models",
    responses(
        (status = 200, description = "Model catalog", body = ModelCatalogResponse)
    ),
    tag = "Run"
)]
pub async fn list_models(State(state): State<AppState>) -> Json<ModelCatalogResponse> {
    Json(ModelCatalogResponse {
        default_model: state.default_model.to_string(),
        models: AVAILABLE_MODELS.iter().map(ModelResponse::from).collect(),
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/icp/models", get(list_models))
}
