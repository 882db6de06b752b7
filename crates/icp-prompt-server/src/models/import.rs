//! Import DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use icp_prompt::ImportOutcome;

/// Raw text of a pasted or uploaded JSON file
#[derive(Debug, Deserialize, ToSchema)]
pub struct ImportRequest {
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ImportResponse {
    #[schema(value_type = Vec<Object>)]
    pub records: Vec<serde_json::Value>,
    #[schema(value_type = Option<Object>)]
    pub user_context: Option<serde_json::Value>,
    pub entry_count: usize,
    pub unique_domains: Vec<String>,
    pub warning: Option<String>,
}

impl From<ImportOutcome> for ImportResponse {
    fn from(outcome: ImportOutcome) -> Self {
        let unique_domains = outcome.import.unique_domains();
        let entry_count = outcome.import.records.len();
        Self {
            records: outcome
                .import
                .records
                .into_iter()
                .map(|r| r.into_value())
                .collect(),
            user_context: outcome
                .import
                .user_context
                .map(|c| c.as_value().clone()),
            entry_count,
            unique_domains,
            warning: outcome.warning,
        }
    }
}
