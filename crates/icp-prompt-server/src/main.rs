use anyhow::Context;
use axum::{middleware, routing::get, Json, Router};
use serde::Serialize;
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod adapters;
mod application;
mod auth;
mod config;
mod models;
mod routes;
#[cfg(test)]
mod test_support;

use adapters::{
    OpenAiCompletion, PgPromptResultRepository, PgPromptTemplateRepository, PgQuestionRepository,
    RunGate,
};
use application::{PromptResultService, PromptTemplateService, QuestionService, RunService};
use config::AppConfig;
use icp_prompt::{
    CompletionProvider, PromptResultRepository, PromptTemplateRepository, QuestionRepository,
};

/// Type aliases for application services behind trait objects
pub type AppQuestionService = QuestionService<dyn QuestionRepository>;
pub type AppTemplateService = PromptTemplateService<dyn PromptTemplateRepository>;
pub type AppResultService = PromptResultService<dyn PromptResultRepository>;
pub type AppRunService = RunService<dyn CompletionProvider, dyn PromptResultRepository>;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub question_service: Arc<AppQuestionService>,
    pub template_service: Arc<AppTemplateService>,
    pub result_service: Arc<AppResultService>,
    pub run_service: Arc<AppRunService>,
    pub run_gate: Arc<RunGate>,
    pub default_model: Arc<str>,
}

impl AppState {
    pub fn new(
        questions: Arc<dyn QuestionRepository>,
        templates: Arc<dyn PromptTemplateRepository>,
        results: Arc<dyn PromptResultRepository>,
        completion: Arc<dyn CompletionProvider>,
        default_model: &str,
    ) -> Self {
        Self {
            question_service: Arc::new(QuestionService::new(questions)),
            template_service: Arc::new(PromptTemplateService::new(templates)),
            result_service: Arc::new(PromptResultService::new(results.clone())),
            run_service: Arc::new(RunService::new(completion, results)),
            run_gate: Arc::new(RunGate::new()),
            default_model: Arc::from(default_model),
        }
    }
}

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    message: String,
    version: String,
}

async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "ICP Prompt API is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Full router: `/health` and Swagger UI are open, `/icp/*` requires the API key
pub fn build_router(state: AppState) -> Router {
    let protected_routes = routes::router().layer(middleware::from_fn(auth::auth_middleware));

    let openapi = routes::swagger::ApiDoc::openapi();

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(protected_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[shuttle_runtime::main]
async fn main(
    #[shuttle_shared_db::Postgres] pool: PgPool,
    #[shuttle_runtime::Secrets] secrets: shuttle_runtime::SecretStore,
) -> shuttle_axum::ShuttleAxum {
    tracing::info!("ICP Prompt API initializing...");

    let config = AppConfig::from_secrets(&secrets)?;

    match &config.api_key {
        Some(key) => {
            auth::init_api_key(key.clone());
            tracing::info!("API key authentication enabled");
        }
        None => tracing::warn!("No ICP_API_KEY set - authentication disabled"),
    }

    sqlx::migrate!()
        .run(&pool)
        .await
        .context("Failed to run database migrations")?;

    tracing::info!("Database migrations completed");

    let completion = OpenAiCompletion::new(config.openai()).context("Failed to build OpenAI client")?;
    tracing::info!(
        "Completion provider: {} (default model {})",
        config.openai_base_url,
        config.default_model
    );

    let state = AppState::new(
        Arc::new(PgQuestionRepository::new(pool.clone())),
        Arc::new(PgPromptTemplateRepository::new(pool.clone())),
        Arc::new(PgPromptResultRepository::new(pool)),
        Arc::new(completion),
        &config.default_model,
    );

    state
        .template_service
        .ensure_default()
        .await
        .context("Failed to seed default prompt template")?;

    let router = build_router(state);

    tracing::info!("Swagger UI: /swagger-ui");
    tracing::info!("ICP Prompt API ready");

    Ok(router.into())
}
