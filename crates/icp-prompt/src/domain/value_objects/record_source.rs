//! RecordSource - Which part of a provider export a record came from

use serde::{Deserialize, Serialize};

/// Origin tag attached to records extracted from a nested WEBSHOP export
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RecordSource {
    Overview,
    SimilarWebshop,
}

impl RecordSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordSource::Overview => "overview",
            RecordSource::SimilarWebshop => "similar_webshop",
        }
    }
}

impl std::fmt::Display for RecordSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RecordSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "overview" => Ok(RecordSource::Overview),
            "similar_webshop" => Ok(RecordSource::SimilarWebshop),
            _ => Err(format!("Unknown record source: {}", s)),
        }
    }
}
