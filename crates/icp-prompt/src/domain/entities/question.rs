//! Question - A reusable ICP question
//!
//! Pure domain entity without infrastructure dependencies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{errors::DomainError, value_objects::Tag};

/// Question - one analytical question applied to every domain in a run
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Question {
    pub id: Uuid,
    pub content: String,
    pub tag: String,
    pub created_at: DateTime<Utc>,
}

impl Question {
    /// Create a new question. Content is trimmed and must not be blank.
    pub fn new(content: &str, tag: Option<&str>) -> Result<Self, DomainError> {
        Ok(Self {
            id: Uuid::new_v4(),
            content: Self::clean_content(content)?,
            tag: Tag::new(tag).into_inner(),
            created_at: Utc::now(),
        })
    }

    pub fn clean_content(content: &str) -> Result<String, DomainError> {
        let trimmed = content.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("Question content cannot be empty"));
        }
        Ok(trimmed.to_string())
    }
}
