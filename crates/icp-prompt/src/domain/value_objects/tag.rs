//! Tag - Free-form label grouping questions

use serde::{Deserialize, Serialize};

pub const UNTAGGED: &str = "untagged";

/// Question tag. Blank input collapses to `untagged`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Tag(String);

impl Tag {
    pub fn new(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some(t) if !t.is_empty() => Self(t.to_string()),
            _ => Self::untagged(),
        }
    }

    pub fn untagged() -> Self {
        Self(UNTAGGED.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Default for Tag {
    fn default() -> Self {
        Self::untagged()
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
