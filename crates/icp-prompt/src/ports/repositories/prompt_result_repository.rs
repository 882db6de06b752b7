//! Prompt Result Repository Port
//!
//! Results are insert-only; the only mutation is deletion.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{errors::DomainError, PromptResult};

/// Repository interface for PromptResult entities
#[async_trait]
pub trait PromptResultRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<PromptResult>, DomainError>;

    /// Find all results, newest first
    async fn find_all(&self) -> Result<Vec<PromptResult>, DomainError>;

    /// Find results for one domain, newest first
    async fn find_by_domain(&self, domain_url: &str) -> Result<Vec<PromptResult>, DomainError>;

    /// Distinct domains that have at least one result
    async fn domains(&self) -> Result<Vec<String>, DomainError>;

    async fn insert(&self, result: &PromptResult) -> Result<PromptResult, DomainError>;

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
}
