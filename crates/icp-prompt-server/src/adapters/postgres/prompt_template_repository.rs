//! PostgreSQL implementation of PromptTemplateRepository
//!
//! Templates live in the `system_prompt` table.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use icp_prompt::{DomainError, PromptTemplate, PromptTemplateRepository, TemplateDeletion};

pub struct PgPromptTemplateRepository {
    pool: PgPool,
}

impl PgPromptTemplateRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct PromptTemplateRow {
    id: Uuid,
    name: String,
    content: String,
    updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<PromptTemplateRow> for PromptTemplate {
    fn from(row: PromptTemplateRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            content: row.content,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait]
impl PromptTemplateRepository for PgPromptTemplateRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<PromptTemplate>, DomainError> {
        let row =
            sqlx::query_as::<_, PromptTemplateRow>("SELECT * FROM system_prompt WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(row.map(Into::into))
    }

    async fn find_all(&self) -> Result<Vec<PromptTemplate>, DomainError> {
        let rows = sqlx::query_as::<_, PromptTemplateRow>(
            "SELECT * FROM system_prompt ORDER BY updated_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn count(&self) -> Result<i64, DomainError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM system_prompt")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))
    }

    async fn insert(&self, template: &PromptTemplate) -> Result<PromptTemplate, DomainError> {
        let row = sqlx::query_as::<_, PromptTemplateRow>(
            r#"
            INSERT INTO system_prompt (id, name, content, updated_at)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(template.id)
        .bind(&template.name)
        .bind(&template.content)
        .bind(template.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(row.into())
    }

    async fn update(
        &self,
        template: &PromptTemplate,
    ) -> Result<Option<PromptTemplate>, DomainError> {
        let row = sqlx::query_as::<_, PromptTemplateRow>(
            r#"
            UPDATE system_prompt
            SET name = $2, content = $3, updated_at = $4
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(template.id)
        .bind(&template.name)
        .bind(&template.content)
        .bind(template.updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(row.map(Into::into))
    }

    async fn delete_keeping_one(&self, id: Uuid) -> Result<TemplateDeletion, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))?;

        // Row locks serialize concurrent deletes; a waiting transaction
        // re-reads the rows left after the first one commits.
        let ids = sqlx::query_scalar::<_, Uuid>("SELECT id FROM system_prompt FOR UPDATE")
            .fetch_all(&mut *tx)
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))?;

        let outcome = if !ids.contains(&id) {
            TemplateDeletion::NotFound
        } else if ids.len() <= 1 {
            TemplateDeletion::LastRemaining
        } else {
            sqlx::query("DELETE FROM system_prompt WHERE id = $1")
                .bind(id)
                .execute(&mut *tx)
                .await
                .map_err(|e| DomainError::Repository(e.to_string()))?;
            TemplateDeletion::Deleted
        };

        tx.commit()
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(outcome)
    }
}
