//! Question Application Service (Use Case)
//!
//! Orchestrates domain operations for Question management.

use std::collections::HashSet;
use std::sync::Arc;
use uuid::Uuid;

use icp_prompt::{DomainError, Question, QuestionRepository, Tag};

/// Application service for Question operations
pub struct QuestionService<R: QuestionRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: QuestionRepository + ?Sized> QuestionService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Get all Questions, oldest first
    pub async fn list_all(&self) -> Result<Vec<Question>, DomainError> {
        self.repo.find_all().await
    }

    /// Get a Question by ID
    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<Question>, DomainError> {
        self.repo.find_by_id(id).await
    }

    /// Create a new Question
    pub async fn create(&self, content: &str, tag: Option<&str>) -> Result<Question, DomainError> {
        let question = Question::new(content, tag)?;
        let saved = self.repo.insert(&question).await?;

        tracing::info!("Created Question: {} [{}]", saved.id, saved.tag);

        Ok(saved)
    }

    /// Update a Question. Omitted fields keep their value; a blank tag resets to `untagged`.
    pub async fn update(
        &self,
        id: Uuid,
        content: Option<&str>,
        tag: Option<&str>,
    ) -> Result<Question, DomainError> {
        let current = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Question", id))?;

        let updated = Question {
            content: match content {
                Some(c) => Question::clean_content(c)?,
                None => current.content.clone(),
            },
            tag: match tag {
                Some(t) => Tag::new(Some(t)).into_inner(),
                None => current.tag.clone(),
            },
            ..current
        };

        let saved = self
            .repo
            .update(&updated)
            .await?
            .ok_or_else(|| DomainError::not_found("Question", id))?;

        tracing::info!("Updated Question: {}", id);

        Ok(saved)
    }

    /// Delete a Question
    pub async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let deleted = self.repo.delete(id).await?;
        if deleted {
            tracing::info!("Deleted Question: {}", id);
        }
        Ok(deleted)
    }

    /// Contents of the selected Questions, in creation order. Unknown ids are ignored.
    pub async fn contents_for(&self, ids: &[Uuid]) -> Result<Vec<String>, DomainError> {
        let wanted: HashSet<&Uuid> = ids.iter().collect();
        let questions = self.repo.find_all().await?;

        Ok(questions
            .into_iter()
            .filter(|q| wanted.contains(&q.id))
            .map(|q| q.content)
            .collect())
    }
}
