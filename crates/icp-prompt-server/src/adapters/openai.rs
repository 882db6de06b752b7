//! OpenAI Chat Completions adapter
//!
//! Implements `CompletionProvider` against `{base_url}/chat/completions`.
//! One request per domain, no streaming, no retries.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use icp_prompt::{
    ChatMessage, CompletionProvider, CompletionRequest, CompletionResponse, DomainError,
    TokenUsage,
};

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Connection settings for the OpenAI API
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    api_key: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl OpenAiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(120),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

pub struct OpenAiCompletion {
    config: OpenAiConfig,
    client: Client,
}

impl OpenAiCompletion {
    pub fn new(config: OpenAiConfig) -> Result<Self, DomainError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| DomainError::ExternalService(format!("HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.config.base_url)
    }
}

/// Reasoning models reject `temperature` and take `max_completion_tokens`.
/// Matches the `o<digit>` family (o1, o3-mini, o4-mini) and `gpt-5*`.
fn is_reasoning_model(model: &str) -> bool {
    let mut chars = model.chars();
    let o_series = chars.next() == Some('o') && chars.next().is_some_and(|c| c.is_ascii_digit());
    o_series || model.starts_with("gpt-5")
}

#[derive(Debug, Serialize)]
struct ChatRequestBody {
    model: String,
    messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_completion_tokens: Option<u32>,
}

impl ChatRequestBody {
    fn from_request(request: &CompletionRequest) -> Self {
        let reasoning = is_reasoning_model(&request.model);
        Self {
            model: request.model.clone(),
            messages: request.to_messages(),
            temperature: if reasoning {
                None
            } else {
                request.options.temperature
            },
            max_tokens: if reasoning {
                None
            } else {
                request.options.max_tokens
            },
            max_completion_tokens: if reasoning {
                request.options.max_tokens
            } else {
                None
            },
        }
    }
}

#[derive(Debug, Deserialize)]
struct ChatResponseBody {
    model: String,
    choices: Vec<ChatChoice>,
    usage: Option<ChatUsage>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChatUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
    total_tokens: u32,
}

impl From<ChatUsage> for TokenUsage {
    fn from(u: ChatUsage) -> Self {
        Self {
            prompt_tokens: u.prompt_tokens,
            completion_tokens: u.completion_tokens,
            total_tokens: u.total_tokens,
        }
    }
}

/// Pull the error message out of an OpenAI error body, falling back to the raw text
fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v["error"]["message"].as_str().map(str::to_string))
        .unwrap_or_else(|| body.to_string())
}

fn into_completion(body: ChatResponseBody) -> Result<CompletionResponse, DomainError> {
    let choice = body
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| DomainError::ExternalService("No choices in response".to_string()))?;

    let content = match choice.message.content {
        Some(text) if !text.trim().is_empty() => text,
        _ => {
            return Err(DomainError::ExternalService(format!(
                "Empty completion (finish_reason: {})",
                choice.finish_reason.as_deref().unwrap_or("unknown")
            )))
        }
    };

    Ok(CompletionResponse {
        content,
        model: body.model,
        usage: body.usage.map(Into::into).unwrap_or_default(),
        finish_reason: choice.finish_reason,
    })
}

#[async_trait]
impl CompletionProvider for OpenAiCompletion {
    async fn complete(
        &self,
        request: &CompletionRequest,
    ) -> Result<CompletionResponse, DomainError> {
        let body = ChatRequestBody::from_request(request);

        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    DomainError::ExternalService(format!(
                        "Request timed out after {}s",
                        self.config.timeout.as_secs()
                    ))
                } else {
                    DomainError::ExternalService(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(DomainError::ExternalService(format!(
                "OpenAI API error {}: {}",
                status.as_u16(),
                error_message(&text)
            )));
        }

        let parsed: ChatResponseBody = response.json().await.map_err(|e| {
            DomainError::ExternalService(format!("Failed to parse response: {}", e))
        })?;

        let completion = into_completion(parsed)?;
        tracing::debug!(
            "Completion for {}: {} tokens, finish_reason {:?}",
            request.domain.domain_url,
            completion.usage.total_tokens,
            completion.finish_reason
        );
        Ok(completion)
    }

    fn provider_name(&self) -> &str {
        "openai"
    }
}
