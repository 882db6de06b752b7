//! Completion Provider Port
//!
//! Abstract interface for the LLM call that analyzes one domain.
//! Transport framing (chat messages, instruction fields) belongs to the
//! adapter; the run only relies on getting one answer per domain.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{
    errors::DomainError, DomainRecord, DomainTask, RunRequest, UserContext,
};

/// Role of a message in a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    User,
}

/// A message in a conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }
}

/// Options for LLM completion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionOptions {
    /// Maximum tokens to generate
    pub max_tokens: Option<u32>,
    /// Temperature (0.0 - 2.0)
    pub temperature: Option<f32>,
}

impl Default for CompletionOptions {
    fn default() -> Self {
        Self {
            max_tokens: Some(2000),
            temperature: Some(0.7),
        }
    }
}

/// Domain data handed to the model
#[derive(Debug, Clone, Serialize)]
pub struct DomainPayload {
    #[serde(rename = "domainURL")]
    pub domain_url: String,
    pub entries: Vec<DomainRecord>,
    #[serde(rename = "userContext", skip_serializing_if = "Option::is_none")]
    pub user_context: Option<UserContext>,
}

/// One completion call: system instruction, questions, one domain, model
#[derive(Debug, Clone, Serialize)]
pub struct CompletionRequest {
    pub system_prompt: String,
    pub questions: Vec<String>,
    pub domain: DomainPayload,
    pub model: String,
    pub options: CompletionOptions,
}

impl CompletionRequest {
    pub fn for_task(request: &RunRequest, task: &DomainTask) -> Self {
        Self {
            system_prompt: request.system_prompt.clone(),
            questions: request.question_texts(),
            domain: DomainPayload {
                domain_url: task.domain_url.clone(),
                entries: task.entries.clone(),
                user_context: request.user_context.clone(),
            },
            model: request.model.clone(),
            options: CompletionOptions::default(),
        }
    }

    /// Numbered question list ("1. ...")
    pub fn numbered_questions(&self) -> String {
        self.questions
            .iter()
            .enumerate()
            .map(|(i, q)| format!("{}. {}", i + 1, q))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// User-turn text: optional user context, domain data, then questions
    pub fn user_content(&self) -> String {
        let mut content = String::new();

        if let Some(ctx) = &self.domain.user_context {
            content.push_str("## User Context\n");
            content.push_str(&pretty(ctx.as_value()));
            content.push_str("\n\n");
        }

        let data = serde_json::json!({
            "domainURL": self.domain.domain_url,
            "entries": self.domain.entries,
        });
        content.push_str("## Domain Data\n");
        content.push_str(&pretty(&data));

        content.push_str("\n\n## Questions\n");
        content.push_str(&self.numbered_questions());

        content
    }

    /// System + user chat framing
    pub fn to_messages(&self) -> Vec<ChatMessage> {
        vec![
            ChatMessage::system(self.system_prompt.clone()),
            ChatMessage::user(self.user_content()),
        ]
    }
}

fn pretty(value: &serde_json::Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// Response from LLM completion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionResponse {
    /// Generated text content
    pub content: String,
    /// Model that generated the response
    pub model: String,
    /// Token usage statistics
    pub usage: TokenUsage,
    /// Finish reason
    pub finish_reason: Option<String>,
}

/// Token usage statistics
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TokenUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// Completion collaborator
///
/// # Example
///
/// ```rust,ignore
/// use icp_prompt::ports::CompletionProvider;
///
/// struct OpenAiCompletion { /* ... */ }
///
/// #[async_trait]
/// impl CompletionProvider for OpenAiCompletion {
///     async fn complete(&self, request: &CompletionRequest)
///         -> Result<CompletionResponse, DomainError> {
///         // Call chat completions API
///     }
///     // ...
/// }
/// ```
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Analyze one domain
    async fn complete(&self, request: &CompletionRequest)
        -> Result<CompletionResponse, DomainError>;

    /// Get the provider name (e.g., "openai")
    fn provider_name(&self) -> &str;
}
