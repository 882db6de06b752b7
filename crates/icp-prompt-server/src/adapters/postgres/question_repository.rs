//! PostgreSQL implementation of QuestionRepository

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use icp_prompt::{DomainError, Question, QuestionRepository};

pub struct PgQuestionRepository {
    pool: PgPool,
}

impl PgQuestionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct QuestionRow {
    id: Uuid,
    content: String,
    tag: String,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl From<QuestionRow> for Question {
    fn from(row: QuestionRow) -> Self {
        Self {
            id: row.id,
            content: row.content,
            tag: row.tag,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl QuestionRepository for PgQuestionRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Question>, DomainError> {
        let row = sqlx::query_as::<_, QuestionRow>("SELECT * FROM questions WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(row.map(Into::into))
    }

    async fn find_all(&self) -> Result<Vec<Question>, DomainError> {
        let rows =
            sqlx::query_as::<_, QuestionRow>("SELECT * FROM questions ORDER BY created_at ASC")
                .fetch_all(&self.pool)
                .await
                .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn insert(&self, question: &Question) -> Result<Question, DomainError> {
        let row = sqlx::query_as::<_, QuestionRow>(
            r#"
            INSERT INTO questions (id, content, tag, created_at)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(question.id)
        .bind(&question.content)
        .bind(&question.tag)
        .bind(question.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(row.into())
    }

    async fn update(&self, question: &Question) -> Result<Option<Question>, DomainError> {
        let row = sqlx::query_as::<_, QuestionRow>(
            r#"
            UPDATE questions
            SET content = $2, tag = $3
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(question.id)
        .bind(&question.content)
        .bind(&question.tag)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(row.map(Into::into))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }
}
