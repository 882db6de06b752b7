//! Model catalog DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use icp_prompt::ModelOption;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ModelResponse {
    pub id: String,
    pub name: String,
    pub description: String,
}

impl From<&ModelOption> for ModelResponse {
    fn from(m: &ModelOption) -> Self {
        Self {
            id: m.id.to_string(),
            name: m.name.to_string(),
            description: m.description.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ModelCatalogResponse {
    pub default_model: String,
    pub models: Vec<ModelResponse>,
}
