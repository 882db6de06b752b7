//! ICP Prompt Domain Library
//!
//! Core domain types and interfaces for the ICP (Ideal Customer Profile)
//! prompt tool: curate questions, import company/domain data, run every
//! domain through a completion model and keep the answers.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Question, PromptTemplate, PromptResult, DomainRecord, Run types
//!   - `value_objects/`: RecordSource, Tag, model catalog
//!   - `services/`: JSON import normalizer
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: Data access interfaces
//!   - `services/`: Completion provider and progress reporting
//!
//! # Usage
//!
//! ```rust,ignore
//! use icp_prompt::domain::{import_json, RunRequest};
//! use icp_prompt::ports::{CompletionProvider, PromptResultRepository};
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    find_model, import_json, normalize, DomainError, DomainFailure, DomainRecord, DomainTask,
    ImportError, ImportOutcome, ModelOption, NormalizedImport, PromptInput, PromptResult,
    PromptTemplate, Question, RecordSource, RunProgress, RunReport, RunRequest, Tag,
    UserContext, AVAILABLE_MODELS, DEFAULT_MODEL, DEFAULT_SYSTEM_PROMPT,
};
pub use ports::{
    ChatMessage,
    CompletionOptions,
    // Services
    CompletionProvider,
    CompletionRequest,
    CompletionResponse,
    DomainPayload,
    MessageRole,
    NoProgress,
    ProgressSink,
    // Repositories
    PromptResultRepository,
    PromptTemplateRepository,
    QuestionRepository,
    TemplateDeletion,
    TokenUsage,
};
