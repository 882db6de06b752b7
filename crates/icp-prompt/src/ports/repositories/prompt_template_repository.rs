//! Prompt Template Repository Port

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{errors::DomainError, PromptTemplate};

/// Outcome of [`PromptTemplateRepository::delete_keeping_one`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateDeletion {
    Deleted,
    NotFound,
    /// The template is the only one left and was kept
    LastRemaining,
}

/// Repository interface for PromptTemplate entities
#[async_trait]
pub trait PromptTemplateRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<PromptTemplate>, DomainError>;

    /// Find all templates, most recently updated first
    async fn find_all(&self) -> Result<Vec<PromptTemplate>, DomainError>;

    async fn count(&self) -> Result<i64, DomainError>;

    async fn insert(&self, template: &PromptTemplate) -> Result<PromptTemplate, DomainError>;

    async fn update(&self, template: &PromptTemplate)
        -> Result<Option<PromptTemplate>, DomainError>;

    /// Delete a template unless it is the last one.
    ///
    /// The existence check, the count and the delete happen as one atomic
    /// step, so concurrent calls can never empty the store.
    async fn delete_keeping_one(&self, id: Uuid) -> Result<TemplateDeletion, DomainError>;
}
