//! Prompt Template Application Service (Use Case)
//!
//! At least one template must always exist: the store is seeded when empty
//! and deleting the last template is refused.

use std::sync::Arc;
use uuid::Uuid;

use icp_prompt::{
    DomainError, PromptTemplate, PromptTemplateRepository, TemplateDeletion, DEFAULT_SYSTEM_PROMPT,
};

/// Application service for PromptTemplate operations
pub struct PromptTemplateService<R: PromptTemplateRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: PromptTemplateRepository + ?Sized> PromptTemplateService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Seed the built-in template into an empty store
    pub async fn ensure_default(&self) -> Result<Option<PromptTemplate>, DomainError> {
        if self.repo.count().await? > 0 {
            return Ok(None);
        }
        let seeded = self.repo.insert(&PromptTemplate::builtin()).await?;
        tracing::info!("Seeded default prompt template: {}", seeded.id);
        Ok(Some(seeded))
    }

    /// Get all templates, most recently updated first
    pub async fn list_all(&self) -> Result<Vec<PromptTemplate>, DomainError> {
        self.repo.find_all().await
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<PromptTemplate>, DomainError> {
        self.repo.find_by_id(id).await
    }

    pub async fn create(&self, name: &str, content: &str) -> Result<PromptTemplate, DomainError> {
        let template = PromptTemplate::new(name, content)?;
        let saved = self.repo.insert(&template).await?;

        tracing::info!("Created prompt template: {} ({})", saved.name, saved.id);

        Ok(saved)
    }

    pub async fn update(
        &self,
        id: Uuid,
        name: Option<&str>,
        content: Option<&str>,
    ) -> Result<PromptTemplate, DomainError> {
        let current = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("PromptTemplate", id))?;

        let name = name.unwrap_or(&current.name);
        let content = content.unwrap_or(&current.content);
        let checked = PromptTemplate::new(name, content)?;

        let updated = PromptTemplate {
            id: current.id,
            name: checked.name,
            content: checked.content,
            updated_at: chrono::Utc::now(),
        };

        let saved = self
            .repo
            .update(&updated)
            .await?
            .ok_or_else(|| DomainError::not_found("PromptTemplate", id))?;

        tracing::info!("Updated prompt template: {}", id);

        Ok(saved)
    }

    /// Delete a template, refusing to remove the last one
    pub async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        match self.repo.delete_keeping_one(id).await? {
            TemplateDeletion::Deleted => {
                tracing::info!("Deleted prompt template: {}", id);
                Ok(true)
            }
            TemplateDeletion::NotFound => Ok(false),
            TemplateDeletion::LastRemaining => {
                tracing::warn!("Refused to delete last prompt template: {}", id);
                Err(DomainError::Conflict(
                    "Cannot delete the last remaining prompt template".to_string(),
                ))
            }
        }
    }

    /// System prompt for a run: the named template, else the most recently
    /// updated one, else the built-in text.
    pub async fn resolve_system_prompt(&self, id: Option<Uuid>) -> Result<String, DomainError> {
        if let Some(id) = id {
            return self
                .repo
                .find_by_id(id)
                .await?
                .map(|t| t.content)
                .ok_or_else(|| DomainError::not_found("PromptTemplate", id));
        }

        Ok(self
            .repo
            .find_all()
            .await?
            .into_iter()
            .next()
            .map(|t| t.content)
            .unwrap_or_else(|| DEFAULT_SYSTEM_PROMPT.to_string()))
    }
}
