//! Prompt Template DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use icp_prompt::PromptTemplate;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePromptTemplateRequest {
    pub name: String,
    pub content: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdatePromptTemplateRequest {
    pub name: Option<String>,
    pub content: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PromptTemplateResponse {
    pub id: Uuid,
    pub name: String,
    pub content: String,
    pub updated_at: DateTime<Utc>,
}

impl From<PromptTemplate> for PromptTemplateResponse {
    fn from(t: PromptTemplate) -> Self {
        Self {
            id: t.id,
            name: t.name,
            content: t.content,
            updated_at: t.updated_at,
        }
    }
}
