//! Run - One pass of the selected questions over every imported domain
//!
//! A run is described entirely by its [`RunRequest`]; planning turns it into
//! an ordered list of [`DomainTask`]s consumed one at a time.

use serde::{Deserialize, Serialize};

use super::{unique_domains, DomainRecord, PromptResult, UserContext};
use crate::domain::errors::DomainError;

/// Everything a run needs, passed explicitly
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunRequest {
    pub system_prompt: String,
    pub questions: Vec<String>,
    pub model: String,
    pub records: Vec<DomainRecord>,
    pub user_context: Option<UserContext>,
}

/// One unit of work: a domain and the records that belong to it
#[derive(Debug, Clone, PartialEq)]
pub struct DomainTask {
    /// 1-based position in the run
    pub index: usize,
    pub total: usize,
    pub domain_url: String,
    pub entries: Vec<DomainRecord>,
}

impl RunRequest {
    /// Validate preconditions and group records by domain.
    ///
    /// Fails before any side effect when no question is selected or no
    /// record carries a resolvable domain.
    pub fn plan(&self) -> Result<Vec<DomainTask>, DomainError> {
        if self.questions.iter().all(|q| q.trim().is_empty()) {
            return Err(DomainError::validation("Please select at least one question"));
        }

        let domains = unique_domains(&self.records);
        if domains.is_empty() {
            return Err(DomainError::validation("No domains found in JSON data"));
        }

        let total = domains.len();
        Ok(domains
            .into_iter()
            .enumerate()
            .map(|(i, domain_url)| DomainTask {
                index: i + 1,
                total,
                entries: self
                    .records
                    .iter()
                    .filter(|r| r.domain_url() == Some(domain_url.as_str()))
                    .cloned()
                    .collect(),
                domain_url,
            })
            .collect())
    }

    /// Non-blank question texts, in selection order
    pub fn question_texts(&self) -> Vec<String> {
        self.questions
            .iter()
            .map(|q| q.trim())
            .filter(|q| !q.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Snapshot of what was sent for one domain, stored with its result
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PromptInput {
    #[serde(rename = "domainURL")]
    pub domain_url: String,
    pub data: Vec<DomainRecord>,
    pub system_icp: Vec<String>,
    pub user_context: Option<UserContext>,
    pub model: String,
}

impl PromptInput {
    pub fn for_task(request: &RunRequest, task: &DomainTask) -> Self {
        Self {
            domain_url: task.domain_url.clone(),
            data: task.entries.clone(),
            system_icp: request.question_texts(),
            user_context: request.user_context.clone(),
            model: request.model.clone(),
        }
    }
}

/// Observable progress of the active run
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RunProgress {
    pub running: bool,
    pub current: usize,
    pub total: usize,
    pub current_domain: Option<String>,
}

impl RunProgress {
    pub fn idle() -> Self {
        Self::default()
    }

    /// A claimed run that has not reached its first domain yet
    pub fn starting(total: usize) -> Self {
        Self {
            running: true,
            total,
            ..Self::default()
        }
    }

    pub fn at(task: &DomainTask) -> Self {
        Self {
            running: true,
            current: task.index,
            total: task.total,
            current_domain: Some(task.domain_url.clone()),
        }
    }
}

/// A domain that could not be completed or persisted
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DomainFailure {
    pub domain: String,
    pub message: String,
}

impl DomainFailure {
    pub fn new(domain: &str, cause: &impl std::fmt::Display) -> Self {
        Self {
            domain: domain.to_string(),
            message: format!("Error processing {}: {}", domain, cause),
        }
    }
}

/// Outcome of a run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunReport {
    pub results: Vec<PromptResult>,
    pub failures: Vec<DomainFailure>,
    pub domains_processed: usize,
}

impl RunReport {
    /// Message of the most recent failure
    pub fn last_error(&self) -> Option<&str> {
        self.failures.last().map(|f| f.message.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DOMAIN_FIELDS;
    use serde_json::json;

    fn record(value: serde_json::Value) -> DomainRecord {
        match value {
            serde_json::Value::Object(map) => DomainRecord::from_fields(map, DOMAIN_FIELDS, None),
            _ => panic!("expected object"),
        }
    }

    fn request(questions: Vec<&str>, records: Vec<DomainRecord>) -> RunRequest {
        RunRequest {
            system_prompt: "analyze".into(),
            questions: questions.into_iter().map(String::from).collect(),
            model: "gpt-4o-mini".into(),
            records,
            user_context: None,
        }
    }

    #[test]
    fn test_plan_requires_question() {
        let req = request(vec![], vec![record(json!({"domain": "a.com"}))]);
        assert!(matches!(req.plan(), Err(DomainError::Validation(_))));

        let blank = request(vec!["  "], vec![record(json!({"domain": "a.com"}))]);
        assert!(matches!(blank.plan(), Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_plan_requires_domain() {
        let req = request(vec!["q"], vec![record(json!({"name": "nameless"}))]);
        let err = req.plan().unwrap_err();
        assert_eq!(err.to_string(), "Validation error: No domains found in JSON data");
    }

    #[test]
    fn test_plan_groups_records_by_domain() {
        let req = request(
            vec!["q"],
            vec![
                record(json!({"domain": "a.com", "n": 1})),
                record(json!({"domain": "b.com", "n": 2})),
                record(json!({"domain": "a.com", "n": 3})),
                record(json!({"n": 4})),
            ],
        );
        let tasks = req.plan().unwrap();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].domain_url, "a.com");
        assert_eq!(tasks[0].entries.len(), 2);
        assert_eq!((tasks[0].index, tasks[0].total), (1, 2));
        assert_eq!(tasks[1].domain_url, "b.com");
        assert_eq!(tasks[1].entries.len(), 1);
    }

    #[test]
    fn test_prompt_input_snapshot_shape() {
        let req = request(vec!["Who buys?"], vec![record(json!({"domain": "a.com"}))]);
        let task = &req.plan().unwrap()[0];
        let snapshot = serde_json::to_value(PromptInput::for_task(&req, task)).unwrap();
        assert_eq!(snapshot["domainURL"], "a.com");
        assert_eq!(snapshot["system_icp"], json!(["Who buys?"]));
        assert_eq!(snapshot["model"], "gpt-4o-mini");
        assert_eq!(snapshot["data"][0]["domainURL"], "a.com");
        assert!(snapshot["user_context"].is_null());
    }

    #[test]
    fn test_failure_message_names_domain() {
        let failure = DomainFailure::new("b.com", &"timeout");
        assert_eq!(failure.message, "Error processing b.com: timeout");
    }
}
