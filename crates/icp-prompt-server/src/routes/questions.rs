//! Question Routes
//!
//! HTTP handlers that delegate to QuestionService.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use uuid::Uuid;

use crate::models::{CreateQuestionRequest, QuestionResponse, UpdateQuestionRequest};
use crate::AppState;

use super::{domain_error, not_found, ApiError};

/// List all Questions, oldest first
#[utoipa::path(
    get,
    path = "/icp/questions",
    responses(
        (status = 200, description = "List of all Questions", body = Vec<QuestionResponse>),
        (status = 500, description = "Internal server error")
    ),
    tag = "Question"
)]
pub async fn list_questions(
    State(state): State<AppState>,
) -> Result<Json<Vec<QuestionResponse>>, ApiError> {
    let questions = state
        .question_service
        .list_all()
        .await
        .map_err(domain_error)?;

    Ok(Json(questions.into_iter().map(Into::into).collect()))
}

/// Create a Question
#[utoipa::path(
    post,
    path = "/icp/questions",
    request_body = CreateQuestionRequest,
    responses(
        (status = 201, description = "Question created", body = QuestionResponse),
        (status = 400, description = "Blank content"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Question"
)]
pub async fn create_question(
    State(state): State<AppState>,
    Json(payload): Json<CreateQuestionRequest>,
) -> Result<(StatusCode, Json<QuestionResponse>), ApiError> {
    let question = state
        .question_service
        .create(&payload.content, payload.tag.as_deref())
        .await
        .map_err(domain_error)?;

    Ok((StatusCode::CREATED, Json(question.into())))
}

/// Get Question by ID
#[utoipa::path(
    get,
    path = "/icp/questions/{id}",
    params(
        ("id" = Uuid, Path, description = "Question ID")
    ),
    responses(
        (status = 200, description = "Question found", body = QuestionResponse),
        (status = 404, description = "Question not found")
    ),
    tag = "Question"
)]
pub async fn get_question(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<QuestionResponse>, ApiError> {
    let question = state
        .question_service
        .get_by_id(id)
        .await
        .map_err(domain_error)?
        .ok_or_else(|| not_found("Question"))?;

    Ok(Json(question.into()))
}

/// Update a Question
#[utoipa::path(
    put,
    path = "/icp/questions/{id}",
    params(
        ("id" = Uuid, Path, description = "Question ID")
    ),
    request_body = UpdateQuestionRequest,
    responses(
        (status = 200, description = "Question updated", body = QuestionResponse),
        (status = 400, description = "Blank content"),
        (status = 404, description = "Question not found")
    ),
    tag = "Question"
)]
pub async fn update_question(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateQuestionRequest>,
) -> Result<Json<QuestionResponse>, ApiError> {
    let question = state
        .question_service
        .update(id, payload.content.as_deref(), payload.tag.as_deref())
        .await
        .map_err(domain_error)?;

    Ok(Json(question.into()))
}

/// Delete a Question
#[utoipa::path(
    delete,
    path = "/icp/questions/{id}",
    params(
        ("id" = Uuid, Path, description = "Question ID")
    ),
    responses(
        (status = 204, description = "Question deleted"),
        (status = 404, description = "Question not found")
    ),
    tag = "Question"
)]
pub async fn delete_question(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let deleted = state
        .question_service
        .delete(id)
        .await
        .map_err(domain_error)?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found("Question"))
    }
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/icp/questions", get(list_questions).post(create_question))
        .route(
            "/icp/questions/:id",
            get(get_question).put(update_question).delete(delete_question),
        )
}

#[cfg(test)]
mod tests {
    use crate::test_support::TestApp;
    use axum::http::StatusCode;
    use serde_json::json;

    #[tokio::test]
    async fn test_question_crud_over_http() {
        let app = TestApp::new();

        let (status, created) = app
            .send("POST", "/icp/questions", Some(json!({"content": " Who buys? ", "tag": ""})))
            .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["content"], "Who buys?");
        assert_eq!(created["tag"], "untagged");
        let id = created["id"].as_str().unwrap().to_string();

        let (status, updated) = app
            .send(
                "PUT",
                &format!("/icp/questions/{}", id),
                Some(json!({"tag": "buyers"})),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["tag"], "buyers");
        assert_eq!(updated["content"], "Who buys?");

        let (_, listed) = app.send("GET", "/icp/questions", None).await;
        assert_eq!(listed.as_array().unwrap().len(), 1);

        let (status, _) = app.send("DELETE", &format!("/icp/questions/{}", id), None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        let (status, _) = app.send("GET", &format!("/icp/questions/{}", id), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_blank_question_rejected() {
        let app = TestApp::new();
        let (status, body) = app
            .send("POST", "/icp/questions", Some(json!({"content": "   "})))
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.as_str().unwrap().contains("Question"));
        assert!(app.questions.questions.lock().unwrap().is_empty());
    }
}
