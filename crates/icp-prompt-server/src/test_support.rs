//! In-memory port implementations shared by unit tests

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use std::sync::{Arc, Mutex};
use tower::ServiceExt;
use uuid::Uuid;

use icp_prompt::{
    CompletionProvider, CompletionRequest, CompletionResponse, DomainError, ProgressSink,
    PromptResult, PromptResultRepository, PromptTemplate, PromptTemplateRepository, Question,
    QuestionRepository, RunProgress, TemplateDeletion, TokenUsage, DEFAULT_MODEL,
};

use crate::{build_router, AppState};

#[derive(Default)]
pub struct InMemoryQuestionRepository {
    pub questions: Mutex<Vec<Question>>,
    pub fail_writes: bool,
}

impl InMemoryQuestionRepository {
    pub fn failing() -> Self {
        Self {
            fail_writes: true,
            ..Default::default()
        }
    }

    fn check_write(&self) -> Result<(), DomainError> {
        if self.fail_writes {
            return Err(DomainError::Repository("Simulated write failure".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl QuestionRepository for InMemoryQuestionRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Question>, DomainError> {
        Ok(self
            .questions
            .lock()
            .unwrap()
            .iter()
            .find(|q| q.id == id)
            .cloned())
    }

    async fn find_all(&self) -> Result<Vec<Question>, DomainError> {
        let mut all = self.questions.lock().unwrap().clone();
        all.sort_by_key(|q| q.created_at);
        Ok(all)
    }

    async fn insert(&self, question: &Question) -> Result<Question, DomainError> {
        self.check_write()?;
        self.questions.lock().unwrap().push(question.clone());
        Ok(question.clone())
    }

    async fn update(&self, question: &Question) -> Result<Option<Question>, DomainError> {
        self.check_write()?;
        let mut questions = self.questions.lock().unwrap();
        match questions.iter_mut().find(|q| q.id == question.id) {
            Some(existing) => {
                existing.content = question.content.clone();
                existing.tag = question.tag.clone();
                Ok(Some(existing.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        self.check_write()?;
        let mut questions = self.questions.lock().unwrap();
        let before = questions.len();
        questions.retain(|q| q.id != id);
        Ok(questions.len() < before)
    }
}

#[derive(Default)]
pub struct InMemoryTemplateRepository {
    pub templates: Mutex<Vec<PromptTemplate>>,
}

impl InMemoryTemplateRepository {
    pub fn with(templates: Vec<PromptTemplate>) -> Self {
        Self {
            templates: Mutex::new(templates),
        }
    }

    pub fn len(&self) -> usize {
        self.templates.lock().unwrap().len()
    }
}

#[async_trait]
impl PromptTemplateRepository for InMemoryTemplateRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<PromptTemplate>, DomainError> {
        // Lets concurrent callers interleave the way a real store would
        tokio::task::yield_now().await;
        Ok(self
            .templates
            .lock()
            .unwrap()
            .iter()
            .find(|t| t.id == id)
            .cloned())
    }

    async fn find_all(&self) -> Result<Vec<PromptTemplate>, DomainError> {
        let mut all = self.templates.lock().unwrap().clone();
        all.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(all)
    }

    async fn count(&self) -> Result<i64, DomainError> {
        tokio::task::yield_now().await;
        Ok(self.templates.lock().unwrap().len() as i64)
    }

    async fn insert(&self, template: &PromptTemplate) -> Result<PromptTemplate, DomainError> {
        self.templates.lock().unwrap().push(template.clone());
        Ok(template.clone())
    }

    async fn update(
        &self,
        template: &PromptTemplate,
    ) -> Result<Option<PromptTemplate>, DomainError> {
        let mut templates = self.templates.lock().unwrap();
        match templates.iter_mut().find(|t| t.id == template.id) {
            Some(existing) => {
                *existing = template.clone();
                Ok(Some(existing.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete_keeping_one(&self, id: Uuid) -> Result<TemplateDeletion, DomainError> {
        tokio::task::yield_now().await;
        let mut templates = self.templates.lock().unwrap();
        if !templates.iter().any(|t| t.id == id) {
            return Ok(TemplateDeletion::NotFound);
        }
        if templates.len() <= 1 {
            return Ok(TemplateDeletion::LastRemaining);
        }
        templates.retain(|t| t.id != id);
        Ok(TemplateDeletion::Deleted)
    }
}

#[derive(Default)]
pub struct InMemoryResultRepository {
    pub results: Mutex<Vec<PromptResult>>,
    /// Inserts for these domains fail
    pub fail_domains: Vec<String>,
}

impl InMemoryResultRepository {
    pub fn failing_for(domains: &[&str]) -> Self {
        Self {
            fail_domains: domains.iter().map(|d| d.to_string()).collect(),
            ..Default::default()
        }
    }

    pub fn stored(&self) -> Vec<PromptResult> {
        self.results.lock().unwrap().clone()
    }
}

#[async_trait]
impl PromptResultRepository for InMemoryResultRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<PromptResult>, DomainError> {
        Ok(self.stored().into_iter().find(|r| r.id == id))
    }

    async fn find_all(&self) -> Result<Vec<PromptResult>, DomainError> {
        let mut all = self.stored();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(all)
    }

    async fn find_by_domain(&self, domain_url: &str) -> Result<Vec<PromptResult>, DomainError> {
        let mut all = self.find_all().await?;
        all.retain(|r| r.domain_url == domain_url);
        Ok(all)
    }

    async fn domains(&self) -> Result<Vec<String>, DomainError> {
        let mut domains: Vec<String> = self.stored().into_iter().map(|r| r.domain_url).collect();
        domains.sort();
        domains.dedup();
        Ok(domains)
    }

    async fn insert(&self, result: &PromptResult) -> Result<PromptResult, DomainError> {
        if self.fail_domains.contains(&result.domain_url) {
            return Err(DomainError::Repository("Simulated insert failure".into()));
        }
        self.results.lock().unwrap().push(result.clone());
        Ok(result.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut results = self.results.lock().unwrap();
        let before = results.len();
        results.retain(|r| r.id != id);
        Ok(results.len() < before)
    }
}

/// Completion stub answering "analysis of <domain>" and recording every call
#[derive(Default)]
pub struct ScriptedCompletion {
    pub calls: Mutex<Vec<CompletionRequest>>,
    pub fail_domains: Vec<String>,
}

impl ScriptedCompletion {
    pub fn failing_for(domains: &[&str]) -> Self {
        Self {
            fail_domains: domains.iter().map(|d| d.to_string()).collect(),
            ..Default::default()
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn calls(&self) -> Vec<CompletionRequest> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionProvider for ScriptedCompletion {
    async fn complete(
        &self,
        request: &CompletionRequest,
    ) -> Result<CompletionResponse, DomainError> {
        self.calls.lock().unwrap().push(request.clone());

        if self.fail_domains.contains(&request.domain.domain_url) {
            return Err(DomainError::ExternalService("rate limited".into()));
        }

        Ok(CompletionResponse {
            content: format!("analysis of {}", request.domain.domain_url),
            model: request.model.clone(),
            usage: TokenUsage::default(),
            finish_reason: Some("stop".into()),
        })
    }

    fn provider_name(&self) -> &str {
        "scripted"
    }
}

#[derive(Default)]
pub struct RecordingProgress {
    pub updates: Mutex<Vec<RunProgress>>,
}

impl ProgressSink for RecordingProgress {
    fn report(&self, progress: RunProgress) {
        self.updates.lock().unwrap().push(progress);
    }
}

/// Router over in-memory ports, with handles to inspect them
pub struct TestApp {
    pub questions: Arc<InMemoryQuestionRepository>,
    pub templates: Arc<InMemoryTemplateRepository>,
    pub results: Arc<InMemoryResultRepository>,
    pub completion: Arc<ScriptedCompletion>,
    pub state: AppState,
}

impl TestApp {
    pub fn new() -> Self {
        Self::build(Vec::new(), ScriptedCompletion::default())
    }

    pub fn with_templates(templates: Vec<PromptTemplate>) -> Self {
        Self::build(templates, ScriptedCompletion::default())
    }

    pub fn with_completion(completion: ScriptedCompletion) -> Self {
        Self::build(Vec::new(), completion)
    }

    fn build(templates: Vec<PromptTemplate>, completion: ScriptedCompletion) -> Self {
        let questions = Arc::new(InMemoryQuestionRepository::default());
        let templates = Arc::new(InMemoryTemplateRepository::with(templates));
        let results = Arc::new(InMemoryResultRepository::default());
        let completion = Arc::new(completion);

        let state = AppState::new(
            questions.clone(),
            templates.clone(),
            results.clone(),
            completion.clone(),
            DEFAULT_MODEL,
        );

        Self {
            questions,
            templates,
            results,
            completion,
            state,
        }
    }

    /// Send one request; JSON bodies are parsed, anything else comes back as a string
    pub async fn send(
        &self,
        method: &str,
        uri: &str,
        body: Option<serde_json::Value>,
    ) -> (StatusCode, serde_json::Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .unwrap();
        self.dispatch(request).await
    }

    /// Send a raw text body with the given content type
    pub async fn send_raw(
        &self,
        method: &str,
        uri: &str,
        content_type: &str,
        body: &str,
    ) -> (StatusCode, serde_json::Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", content_type)
            .body(Body::from(body.to_string()))
            .unwrap();
        self.dispatch(request).await
    }

    async fn dispatch(&self, request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = build_router(self.state.clone())
            .oneshot(request)
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        let value = serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            serde_json::Value::String(String::from_utf8_lossy(&bytes).into_owned())
        });
        (status, value)
    }
}
