//! PostgreSQL implementation of PromptResultRepository

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use icp_prompt::{DomainError, PromptResult, PromptResultRepository};

pub struct PgPromptResultRepository {
    pool: PgPool,
}

impl PgPromptResultRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct PromptResultRow {
    id: Uuid,
    domain_url: String,
    prompt_input: serde_json::Value,
    response: String,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl From<PromptResultRow> for PromptResult {
    fn from(row: PromptResultRow) -> Self {
        Self {
            id: row.id,
            domain_url: row.domain_url,
            prompt_input: row.prompt_input,
            response: row.response,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl PromptResultRepository for PgPromptResultRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<PromptResult>, DomainError> {
        let row =
            sqlx::query_as::<_, PromptResultRow>("SELECT * FROM prompt_results WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(row.map(Into::into))
    }

    async fn find_all(&self) -> Result<Vec<PromptResult>, DomainError> {
        let rows = sqlx::query_as::<_, PromptResultRow>(
            "SELECT * FROM prompt_results ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_domain(&self, domain_url: &str) -> Result<Vec<PromptResult>, DomainError> {
        let rows = sqlx::query_as::<_, PromptResultRow>(
            "SELECT * FROM prompt_results WHERE domain_url = $1 ORDER BY created_at DESC",
        )
        .bind(domain_url)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn domains(&self) -> Result<Vec<String>, DomainError> {
        sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT domain_url FROM prompt_results ORDER BY domain_url",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))
    }

    async fn insert(&self, result: &PromptResult) -> Result<PromptResult, DomainError> {
        let row = sqlx::query_as::<_, PromptResultRow>(
            r#"
            INSERT INTO prompt_results (id, domain_url, prompt_input, response, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(result.id)
        .bind(&result.domain_url)
        .bind(&result.prompt_input)
        .bind(&result.response)
        .bind(result.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(row.into())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM prompt_results WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }
}
