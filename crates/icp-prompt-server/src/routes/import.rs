//! Import Route - JSON text to normalized domain records

use axum::{routing::post, Json, Router};

use icp_prompt::import_json;

use crate::models::{ImportRequest, ImportResponse};
use crate::AppState;

use super::{import_error, ApiError};

/// Normalize text and log what was found
fn import_text(text: &str) -> Result<ImportResponse, ApiError> {
    let outcome = import_json(text).map_err(import_error)?;

    if let Some(ctx) = &outcome.import.user_context {
        tracing::info!(
            "Import carries user context (user {:?}, country {:?})",
            ctx.user_name(),
            ctx.country_code()
        );
    }

    let response = ImportResponse::from(outcome);
    tracing::info!(
        "Imported {} entries, {} unique domains",
        response.entry_count,
        response.unique_domains.len()
    );
    if let Some(warning) = &response.warning {
        tracing::warn!("{}", warning);
    }

    Ok(response)
}

/// Normalize pasted JSON
///
/// Accepts a record array, a `{content: "<json>"}` wrapper, the WEBSHOP
/// export format, or a single record. When no record carries a domain the
/// records are still returned together with a warning.
#[utoipa::path(
    post,
    path = "/icp/import",
    request_body = ImportRequest,
    responses(
        (status = 200, description = "Normalized records", body = ImportResponse),
        (status = 400, description = "Empty, invalid or unrecognized JSON")
    ),
    tag = "Import"
)]
pub async fn import_records(
    Json(payload): Json<ImportRequest>,
) -> Result<Json<ImportResponse>, ApiError> {
    import_text(&payload.text).map(Json)
}

/// Normalize an uploaded file sent as the raw request body
#[utoipa::path(
    post,
    path = "/icp/import/file",
    request_body(content = String, description = "File contents", content_type = "application/octet-stream"),
    responses(
        (status = 200, description = "Normalized records", body = ImportResponse),
        (status = 400, description = "Empty, invalid or unrecognized JSON")
    ),
    tag = "Import"
)]
pub async fn import_file(body: String) -> Result<Json<ImportResponse>, ApiError> {
    import_text(&body).map(Json)
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/icp/import", post(import_records))
        .route("/icp/import/file", post(import_file))
}
