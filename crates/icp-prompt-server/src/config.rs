//! Application configuration
//!
//! Loaded from Shuttle secrets. Loading goes through a plain key lookup so
//! it can be exercised without a secret store.

use anyhow::{bail, Context};
use std::time::Duration;

use icp_prompt::DEFAULT_MODEL;

use crate::adapters::openai::DEFAULT_BASE_URL;
use crate::adapters::OpenAiConfig;

/// Runtime configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub openai_api_key: String,
    pub openai_base_url: String,
    pub openai_timeout_secs: u64,
    pub default_model: String,
    /// Bearer token guarding `/icp/*`. `None` disables authentication.
    pub api_key: Option<String>,
}

fn default_timeout() -> u64 {
    120
}

impl AppConfig {
    pub fn from_secrets(secrets: &shuttle_runtime::SecretStore) -> anyhow::Result<Self> {
        Self::from_lookup(|key| secrets.get(key))
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let Some(openai_api_key) = get("OPENAI_API_KEY") else {
            bail!("OPENAI_API_KEY is required");
        };

        let openai_timeout_secs = match get("OPENAI_TIMEOUT_SECS") {
            Some(raw) => raw
                .parse::<u64>()
                .with_context(|| format!("OPENAI_TIMEOUT_SECS is not a number: {}", raw))?,
            None => default_timeout(),
        };

        Ok(Self {
            openai_api_key,
            openai_base_url: get("OPENAI_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            openai_timeout_secs,
            default_model: get("ICP_DEFAULT_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            api_key: get("ICP_API_KEY"),
        })
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.openai_timeout_secs)
    }

    pub fn openai(&self) -> OpenAiConfig {
        OpenAiConfig::new(self.openai_api_key.clone())
            .with_base_url(self.openai_base_url.clone())
            .with_timeout(self.timeout())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(pairs: &[(&str, &str)]) -> anyhow::Result<AppConfig> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[("OPENAI_API_KEY", "sk-test")]).unwrap();
        assert_eq!(config.openai_api_key, "sk-test");
        assert_eq!(config.openai_base_url, "https://api.openai.com/v1");
        assert_eq!(config.timeout(), Duration::from_secs(120));
        assert_eq!(config.default_model, "gpt-4o-mini");
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_missing_api_key() {
        assert!(load(&[]).is_err());
        assert!(load(&[("OPENAI_API_KEY", "  ")]).is_err());
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("OPENAI_API_KEY", "sk-test"),
            ("OPENAI_BASE_URL", "http://localhost:11434/v1/"),
            ("OPENAI_TIMEOUT_SECS", "30"),
            ("ICP_DEFAULT_MODEL", "gpt-4.1"),
            ("ICP_API_KEY", "secret"),
        ])
        .unwrap();
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert_eq!(config.default_model, "gpt-4.1");
        assert_eq!(config.api_key.as_deref(), Some("secret"));
        assert_eq!(config.openai().base_url, "http://localhost:11434/v1");
    }

    #[test]
    fn test_bad_timeout() {
        let err = load(&[("OPENAI_API_KEY", "k"), ("OPENAI_TIMEOUT_SECS", "soon")]).unwrap_err();
        assert!(err.to_string().contains("OPENAI_TIMEOUT_SECS"));
    }
}
