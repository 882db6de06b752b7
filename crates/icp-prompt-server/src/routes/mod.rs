//! ICP Prompt API Routes
//!
//! - /icp/import - JSON import and normalization
//! - /icp/questions - Question management
//! - /icp/prompts - System prompt templates
//! - /icp/run - Run prompts over imported domains
//! - /icp/results - Saved analysis results
//! - /icp/models - Selectable model catalog

use axum::http::StatusCode;
use axum::Router;

use icp_prompt::{DomainError, ImportError};

use crate::AppState;

pub mod catalog;
pub mod import;
pub mod prompts;
pub mod questions;
pub mod results;
pub mod run;
pub mod swagger;

/// Error body returned by every handler
pub type ApiError = (StatusCode, String);

pub fn domain_error(e: DomainError) -> ApiError {
    let status = match &e {
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::Validation(_) => StatusCode::BAD_REQUEST,
        DomainError::Conflict(_) => StatusCode::CONFLICT,
        DomainError::ExternalService(_) => StatusCode::BAD_GATEWAY,
        DomainError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    if status.is_server_error() {
        tracing::error!("{}", e);
    }
    (status, e.to_string())
}

pub fn import_error(e: ImportError) -> ApiError {
    (StatusCode::BAD_REQUEST, e.to_string())
}

pub fn not_found(entity: &str) -> ApiError {
    (StatusCode::NOT_FOUND, format!("{} not found", entity))
}

/// All `/icp` routes
pub fn router() -> Router<AppState> {
    Router::new()
        .merge(import::router())
        .merge(questions::router())
        .merge(prompts::router())
        .merge(run::router())
        .merge(results::router())
        .merge(catalog::router())
}
