//! Run DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use icp_prompt::{DomainFailure, RunProgress, RunReport};

use super::PromptResultResponse;

/// Start a run over the given records
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct RunPromptsRequest {
    /// Stored questions to ask, by id
    #[serde(default)]
    pub question_ids: Vec<Uuid>,
    /// Question texts to ask in addition to `question_ids`
    #[serde(default)]
    pub questions: Vec<String>,
    /// Stored template to use as the system prompt
    pub prompt_id: Option<Uuid>,
    /// Inline system prompt, takes precedence over `prompt_id`
    pub system_prompt: Option<String>,
    /// Model id, defaults to the configured model
    pub model: Option<String>,
    /// Records as returned by `/icp/import`
    #[serde(default)]
    #[schema(value_type = Vec<Object>)]
    pub records: Vec<serde_json::Value>,
    #[schema(value_type = Option<Object>)]
    pub user_context: Option<serde_json::Value>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DomainFailureResponse {
    pub domain: String,
    pub message: String,
}

impl From<DomainFailure> for DomainFailureResponse {
    fn from(f: DomainFailure) -> Self {
        Self {
            domain: f.domain,
            message: f.message,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RunResponse {
    pub results: Vec<PromptResultResponse>,
    pub failures: Vec<DomainFailureResponse>,
    pub domains_processed: usize,
    /// Most recent failure message, if any
    pub last_error: Option<String>,
}

impl From<RunReport> for RunResponse {
    fn from(report: RunReport) -> Self {
        let last_error = report.last_error().map(str::to_string);
        Self {
            results: report.results.into_iter().map(Into::into).collect(),
            failures: report.failures.into_iter().map(Into::into).collect(),
            domains_processed: report.domains_processed,
            last_error,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RunStatusResponse {
    pub running: bool,
    pub current: usize,
    pub total: usize,
    pub current_domain: Option<String>,
}

impl From<RunProgress> for RunStatusResponse {
    fn from(p: RunProgress) -> Self {
        Self {
            running: p.running,
            current: p.current,
            total: p.total,
            current_domain: p.current_domain,
        }
    }
}
