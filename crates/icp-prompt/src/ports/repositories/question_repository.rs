//! Question Repository Port
//!
//! Abstract interface for Question persistence operations.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{errors::DomainError, Question};

/// Repository interface for Question entities
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// Find a Question by ID
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Question>, DomainError>;

    /// Find all Questions, oldest first
    async fn find_all(&self) -> Result<Vec<Question>, DomainError>;

    /// Insert a new Question
    async fn insert(&self, question: &Question) -> Result<Question, DomainError>;

    /// Update content and tag of an existing Question
    async fn update(&self, question: &Question) -> Result<Option<Question>, DomainError>;

    /// Delete a Question by ID
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
}
