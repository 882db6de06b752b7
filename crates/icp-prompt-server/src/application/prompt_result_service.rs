//! Prompt Result Application Service (Use Case)
//!
//! Read and delete access to persisted results. Inserts happen only
//! through a run.

use std::sync::Arc;
use uuid::Uuid;

use icp_prompt::{DomainError, PromptResult, PromptResultRepository};

pub struct PromptResultService<R: PromptResultRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: PromptResultRepository + ?Sized> PromptResultService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Newest first, optionally narrowed to one domain
    pub async fn list(&self, domain: Option<&str>) -> Result<Vec<PromptResult>, DomainError> {
        match domain.map(str::trim).filter(|d| !d.is_empty()) {
            Some(domain) => self.repo.find_by_domain(domain).await,
            None => self.repo.find_all().await,
        }
    }

    pub async fn domains(&self) -> Result<Vec<String>, DomainError> {
        self.repo.domains().await
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<PromptResult>, DomainError> {
        self.repo.find_by_id(id).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let deleted = self.repo.delete(id).await?;
        if deleted {
            tracing::info!("Deleted prompt result: {}", id);
        }
        Ok(deleted)
    }
}
