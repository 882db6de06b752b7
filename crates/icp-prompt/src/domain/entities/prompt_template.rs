//! PromptTemplate - Named system prompt texts
//!
//! Pure domain entity without infrastructure dependencies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::errors::DomainError;

/// Built-in system prompt used when no template is stored
pub const DEFAULT_SYSTEM_PROMPT: &str = "You are an ICP (Ideal Customer Profile) analyst. Analyze the provided website/company data thoroughly. Be detailed, specific, and provide actionable insights based on the data provided.";

pub const DEFAULT_TEMPLATE_NAME: &str = "Default";

/// PromptTemplate - A stored system prompt
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PromptTemplate {
    pub id: Uuid,
    pub name: String,
    pub content: String,
    pub updated_at: DateTime<Utc>,
}

impl PromptTemplate {
    /// Create a new prompt template
    pub fn new(name: &str, content: &str) -> Result<Self, DomainError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::validation("Template name cannot be empty"));
        }
        if content.trim().is_empty() {
            return Err(DomainError::validation("Template content cannot be empty"));
        }
        Ok(Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            content: content.to_string(),
            updated_at: Utc::now(),
        })
    }

    /// The template seeded into an empty store
    pub fn builtin() -> Self {
        Self {
            id: Uuid::new_v4(),
            name: DEFAULT_TEMPLATE_NAME.to_string(),
            content: DEFAULT_SYSTEM_PROMPT.to_string(),
            updated_at: Utc::now(),
        }
    }
}
