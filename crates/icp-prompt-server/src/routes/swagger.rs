//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{
    CreatePromptTemplateRequest,
    // Question models
    CreateQuestionRequest,
    DomainFailureResponse,
    // Import models
    ImportRequest,
    ImportResponse,
    // Catalog models
    ModelCatalogResponse,
    ModelResponse,
    // Result models
    PromptResultResponse,
    // Template models
    PromptTemplateResponse,
    QuestionResponse,
    // Run models
    RunPromptsRequest,
    RunResponse,
    RunStatusResponse,
    UpdatePromptTemplateRequest,
    UpdateQuestionRequest,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Import
        super::import::import_records,
        super::import::import_file,
        // Question endpoints
        super::questions::list_questions,
        super::questions::create_question,
        super::questions::get_question,
        super::questions::update_question,
        super::questions::delete_question,
        // Template endpoints
        super::prompts::list_prompts,
        super::prompts::create_prompt,
        super::prompts::get_prompt,
        super::prompts::update_prompt,
        super::prompts::delete_prompt,
        // Run endpoints
        super::run::run_prompts,
        super::run::run_status,
        super::catalog::list_models,
        // Result endpoints
        super::results::list_results,
        super::results::list_result_domains,
        super::results::get_result,
        super::results::delete_result,
    ),
    info(
        title = "ICP Prompt API",
        version = "0.1.0",
        description = "Run ICP analysis questions against imported company/domain data, one domain at a time.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Import", description = "Import - Normalize pasted or uploaded JSON"),
        (name = "Question", description = "Question - Reusable analysis questions"),
        (name = "Prompt", description = "Prompt - System prompt templates"),
        (name = "Run", description = "Run - Per-domain prompt execution"),
        (name = "Result", description = "Result - Saved analysis results"),
    ),
    components(
        schemas(
            // Import
            ImportRequest,
            ImportResponse,
            // Question
            CreateQuestionRequest,
            UpdateQuestionRequest,
            QuestionResponse,
            // Template
            CreatePromptTemplateRequest,
            UpdatePromptTemplateRequest,
            PromptTemplateResponse,
            // Run
            RunPromptsRequest,
            RunResponse,
            RunStatusResponse,
            DomainFailureResponse,
            ModelResponse,
            ModelCatalogResponse,
            // Result
            PromptResultResponse,
        )
    ),
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_icp_paths() {
        let doc = ApiDoc::openapi();
        for path in ["/icp/import", "/icp/import/file", "/icp/questions/{id}", "/icp/run", "/icp/results"] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
    }
}
