//! Question DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use icp_prompt::Question;

/// Create Question request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateQuestionRequest {
    pub content: String,
    /// Blank or missing becomes `untagged`
    pub tag: Option<String>,
}

/// Update Question request. Omitted fields are left unchanged.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateQuestionRequest {
    pub content: Option<String>,
    pub tag: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct QuestionResponse {
    pub id: Uuid,
    pub content: String,
    pub tag: String,
    pub created_at: DateTime<Utc>,
}

impl From<Question> for QuestionResponse {
    fn from(q: Question) -> Self {
        Self {
            id: q.id,
            content: q.content,
            tag: q.tag,
            created_at: q.created_at,
        }
    }
}
