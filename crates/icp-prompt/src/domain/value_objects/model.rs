//! Model catalog - completion models offered for a run

use serde::Serialize;

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// A selectable completion model
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct ModelOption {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

pub const AVAILABLE_MODELS: &[ModelOption] = &[
    // GPT-5 series
    ModelOption {
        id: "gpt-5.2",
        name: "GPT-5.2",
        description: "Flagship reasoning model - most powerful",
    },
    ModelOption {
        id: "gpt-5.1",
        name: "GPT-5.1",
        description: "Advanced flagship model",
    },
    ModelOption {
        id: "gpt-5",
        name: "GPT-5",
        description: "Recommended for complex tasks",
    },
    // GPT-4.1 series
    ModelOption {
        id: "gpt-4.1",
        name: "GPT-4.1",
        description: "Improved coding & 1M context window",
    },
    ModelOption {
        id: "gpt-4.1-mini",
        name: "GPT-4.1 Mini",
        description: "Fast, efficient, fine-tunable",
    },
    ModelOption {
        id: "gpt-4.1-nano",
        name: "GPT-4.1 Nano",
        description: "Smallest and fastest",
    },
    // GPT-4o series
    ModelOption {
        id: "gpt-4o",
        name: "GPT-4o",
        description: "Multimodal, vision capable",
    },
    ModelOption {
        id: "gpt-4o-mini",
        name: "GPT-4o Mini",
        description: "Fast and cost-effective",
    },
    // Reasoning (o-series)
    ModelOption {
        id: "o3-pro",
        name: "o3-pro",
        description: "Most capable reasoning model",
    },
    ModelOption {
        id: "o3",
        name: "o3",
        description: "Advanced reasoning with tools",
    },
    ModelOption {
        id: "o4-mini",
        name: "o4-mini",
        description: "Fast reasoning, best math/coding",
    },
    ModelOption {
        id: "o3-mini",
        name: "o3-mini",
        description: "Efficient reasoning model",
    },
    ModelOption {
        id: "o1",
        name: "o1",
        description: "Original reasoning model",
    },
    ModelOption {
        id: "o1-mini",
        name: "o1-mini",
        description: "Compact reasoning model",
    },
];

/// Look up a model in the catalog
pub fn find_model(id: &str) -> Option<&'static ModelOption> {
    AVAILABLE_MODELS.iter().find(|m| m.id == id)
}
