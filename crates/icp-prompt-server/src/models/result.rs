//! Prompt Result DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use icp_prompt::PromptResult;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PromptResultResponse {
    pub id: Uuid,
    pub domain_url: String,
    /// Snapshot of what was sent: `{domainURL, data, system_icp, user_context, model}`
    #[schema(value_type = Object)]
    pub prompt_input: serde_json::Value,
    pub response: String,
    pub created_at: DateTime<Utc>,
}

impl From<PromptResult> for PromptResultResponse {
    fn from(r: PromptResult) -> Self {
        Self {
            id: r.id,
            domain_url: r.domain_url,
            prompt_input: r.prompt_input,
            response: r.response,
            created_at: r.created_at,
        }
    }
}

/// Result listing filter
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ResultQuery {
    /// Only results for this domain
    pub domain: Option<String>,
}
