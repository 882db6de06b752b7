//! Run Application Service - sequential per-domain prompt execution
//!
//! A run is planned into one task per unique domain and the tasks are
//! consumed strictly one at a time: complete, persist, move on. A failing
//! domain is recorded in the report and never stops the remaining ones.
//! No retries are attempted.

use std::sync::Arc;

use icp_prompt::{
    CompletionProvider, CompletionRequest, DomainError, DomainFailure, DomainTask, ProgressSink,
    PromptInput, PromptResult, PromptResultRepository, RunProgress, RunReport, RunRequest,
};

pub struct RunService<C, R>
where
    C: CompletionProvider + ?Sized,
    R: PromptResultRepository + ?Sized,
{
    completion: Arc<C>,
    results: Arc<R>,
}

impl<C, R> RunService<C, R>
where
    C: CompletionProvider + ?Sized,
    R: PromptResultRepository + ?Sized,
{
    pub fn new(completion: Arc<C>, results: Arc<R>) -> Self {
        Self {
            completion,
            results,
        }
    }

    /// Execute a run.
    ///
    /// Precondition failures (no questions, no domains) are returned as
    /// `Validation` errors before any completion call. Per-domain failures
    /// end up in [`RunReport::failures`].
    pub async fn run(
        &self,
        request: &RunRequest,
        progress: &dyn ProgressSink,
    ) -> Result<RunReport, DomainError> {
        let tasks = request.plan()?;

        tracing::info!(
            "Starting run: {} domains, {} questions, model {} via {}",
            tasks.len(),
            request.question_texts().len(),
            request.model,
            self.completion.provider_name()
        );

        progress.report(RunProgress::starting(tasks.len()));
        let mut report = RunReport::default();

        for task in &tasks {
            progress.report(RunProgress::at(task));
            tracing::info!("[{}/{}] Processing {}", task.index, task.total, task.domain_url);

            match self.process(request, task).await {
                Ok(result) => report.results.push(result),
                Err(e) => {
                    let failure = DomainFailure::new(&task.domain_url, &e);
                    tracing::error!("{}", failure.message);
                    report.failures.push(failure);
                }
            }
            report.domains_processed += 1;
        }

        progress.report(RunProgress::idle());

        tracing::info!(
            "Run finished: {} saved, {} failed",
            report.results.len(),
            report.failures.len()
        );

        Ok(report)
    }

    async fn process(
        &self,
        request: &RunRequest,
        task: &DomainTask,
    ) -> Result<PromptResult, DomainError> {
        let completion = self
            .completion
            .complete(&CompletionRequest::for_task(request, task))
            .await?;
        tracing::debug!(
            "{} finished with {:?}",
            task.domain_url,
            completion.finish_reason
        );

        let input = serde_json::to_value(PromptInput::for_task(request, task))
            .map_err(|e| DomainError::Repository(format!("Unserializable prompt input: {}", e)))?;

        self.results
            .insert(&PromptResult::new(
                task.domain_url.clone(),
                input,
                completion.content,
            ))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{
        InMemoryResultRepository, RecordingProgress, ScriptedCompletion,
    };
    use icp_prompt::{normalize, DomainRecord, NoProgress, UserContext};
    use serde_json::json;

    fn records(value: serde_json::Value) -> Vec<DomainRecord> {
        normalize(&value).unwrap().records
    }

    fn request(questions: &[&str], records: Vec<DomainRecord>) -> RunRequest {
        RunRequest {
            system_prompt: "You are an ICP analyst.".into(),
            questions: questions.iter().map(|q| q.to_string()).collect(),
            model: "gpt-4o-mini".into(),
            records,
            user_context: Some(UserContext::new(json!({"userName": "sam"}))),
        }
    }

    fn service(
        completion: Arc<ScriptedCompletion>,
        results: Arc<InMemoryResultRepository>,
    ) -> RunService<ScriptedCompletion, InMemoryResultRepository> {
        RunService::new(completion, results)
    }

    #[tokio::test]
    async fn test_no_questions_rejected_before_any_call() {
        let completion = Arc::new(ScriptedCompletion::default());
        let results = Arc::new(InMemoryResultRepository::default());
        let svc = service(completion.clone(), results.clone());

        let req = request(&[], records(json!([{"domain": "a.com"}])));
        let err = svc.run(&req, &NoProgress).await.unwrap_err();

        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(completion.call_count(), 0);
        assert!(results.stored().is_empty());
    }

    #[tokio::test]
    async fn test_no_domains_rejected_before_any_call() {
        let completion = Arc::new(ScriptedCompletion::default());
        let svc = service(completion.clone(), Arc::new(InMemoryResultRepository::default()));

        let req = request(&["q"], records(json!([{"name": "anon"}])));
        assert!(svc.run(&req, &NoProgress).await.is_err());
        assert_eq!(completion.call_count(), 0);
    }

    #[tokio::test]
    async fn test_one_call_per_unique_domain_with_own_records() {
        let completion = Arc::new(ScriptedCompletion::default());
        let results = Arc::new(InMemoryResultRepository::default());
        let svc = service(completion.clone(), results.clone());

        let req = request(
            &["Who buys?"],
            records(json!([
                {"domain": "a.com", "n": 1},
                {"domain": "a.com", "n": 2},
                {"domain": "b.com", "n": 3}
            ])),
        );
        let report = svc.run(&req, &NoProgress).await.unwrap();

        assert_eq!(completion.call_count(), 2);
        for call in completion.calls() {
            let expected = if call.domain.domain_url == "a.com" { 2 } else { 1 };
            assert_eq!(call.domain.entries.len(), expected);
            assert!(call
                .domain
                .entries
                .iter()
                .all(|r| r.domain_url() == Some(call.domain.domain_url.as_str())));
            assert_eq!(call.questions, vec!["Who buys?"]);
            assert_eq!(call.model, "gpt-4o-mini");
            assert_eq!(
                call.domain.user_context.as_ref().and_then(|c| c.user_name()),
                Some("sam")
            );
        }

        assert_eq!(report.results.len(), 2);
        assert!(report.failures.is_empty());
        assert_eq!(report.domains_processed, 2);
        assert_eq!(results.stored().len(), 2);
    }

    #[tokio::test]
    async fn test_failed_domain_does_not_abort_run() {
        let completion = Arc::new(ScriptedCompletion::failing_for(&["b.com"]));
        let results = Arc::new(InMemoryResultRepository::default());
        let svc = service(completion.clone(), results.clone());

        let req = request(
            &["q"],
            records(json!([{"domain": "a.com"}, {"domain": "b.com"}, {"domain": "c.com"}])),
        );
        let report = svc.run(&req, &NoProgress).await.unwrap();

        assert_eq!(completion.call_count(), 3);
        let saved: Vec<String> = results.stored().into_iter().map(|r| r.domain_url).collect();
        assert_eq!(saved, vec!["a.com", "c.com"]);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].domain, "b.com");
        assert!(report.last_error().unwrap().contains("b.com"));
        assert_eq!(report.domains_processed, 3);
    }

    #[tokio::test]
    async fn test_persistence_failure_is_per_domain() {
        let completion = Arc::new(ScriptedCompletion::default());
        let results = Arc::new(InMemoryResultRepository::failing_for(&["a.com"]));
        let svc = service(completion, results.clone());

        let req = request(&["q"], records(json!([{"domain": "a.com"}, {"domain": "b.com"}])));
        let report = svc.run(&req, &NoProgress).await.unwrap();

        assert_eq!(report.results.len(), 1);
        assert_eq!(report.results[0].domain_url, "b.com");
        assert_eq!(report.failures[0].domain, "a.com");
    }

    #[tokio::test]
    async fn test_result_snapshot_and_response() {
        let completion = Arc::new(ScriptedCompletion::default());
        let results = Arc::new(InMemoryResultRepository::default());
        let svc = service(completion, results.clone());

        let req = request(&["Who buys?", "Why?"], records(json!([{"domainUrl": "a.com"}])));
        svc.run(&req, &NoProgress).await.unwrap();

        let stored = &results.stored()[0];
        assert_eq!(stored.response, "analysis of a.com");
        assert_eq!(stored.prompt_input["domainURL"], "a.com");
        assert_eq!(stored.prompt_input["system_icp"], json!(["Who buys?", "Why?"]));
        assert_eq!(stored.prompt_input["model"], "gpt-4o-mini");
        assert_eq!(stored.prompt_input["user_context"]["userName"], "sam");
        assert_eq!(stored.prompt_input["data"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_progress_reported_before_each_domain() {
        let svc = service(
            Arc::new(ScriptedCompletion::default()),
            Arc::new(InMemoryResultRepository::default()),
        );
        let progress = RecordingProgress::default();

        let req = request(&["q"], records(json!([{"domain": "a.com"}, {"domain": "b.com"}])));
        svc.run(&req, &progress).await.unwrap();

        let updates = progress.updates.lock().unwrap().clone();
        assert_eq!(updates.len(), 4);
        assert_eq!(updates[0], RunProgress::starting(2));
        assert_eq!(updates[1].current, 1);
        assert_eq!(updates[1].total, 2);
        assert_eq!(updates[1].current_domain.as_deref(), Some("a.com"));
        assert_eq!(updates[2].current, 2);
        assert_eq!(updates[2].current_domain.as_deref(), Some("b.com"));
        assert_eq!(updates[3], RunProgress::idle());
    }
}
