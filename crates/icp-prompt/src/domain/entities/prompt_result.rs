//! PromptResult - Persisted outcome of one domain's completion

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// PromptResult - immutable once created, deletable
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PromptResult {
    pub id: Uuid,
    pub domain_url: String,
    pub prompt_input: serde_json::Value,
    pub response: String,
    pub created_at: DateTime<Utc>,
}

impl PromptResult {
    pub fn new(domain_url: String, prompt_input: serde_json::Value, response: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            domain_url,
            prompt_input,
            response,
            created_at: Utc::now(),
        }
    }
}
