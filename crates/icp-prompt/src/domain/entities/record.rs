//! Imported domain records and the optional user context that travels with them
//!
//! Records are transient: they are derived from imported JSON, grouped by
//! `domainURL` for a run, and never persisted on their own.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::value_objects::RecordSource;

/// Canonical key carrying the resolved domain on every record
pub const DOMAIN_URL_KEY: &str = "domainURL";

/// Key carrying the [`RecordSource`] of WEBSHOP-derived records
pub const SOURCE_KEY: &str = "_source";

/// Key holding the user context in provider exports
pub const USER_CONTEXT_KEY: &str = "user_context";

/// Domain field aliases, in resolution order
pub const DOMAIN_FIELDS: &[&str] = &["domainURL", "domainUrl", "domain"];

/// Aliases tried on WEBSHOP sub-objects
pub const WEBSHOP_DOMAIN_FIELDS: &[&str] = &["domainUrl", "domain"];

/// A company/website record.
///
/// Arbitrary fields are kept verbatim; only `domainURL` (and `_source` for
/// WEBSHOP records) is rewritten.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct DomainRecord(Map<String, Value>);

impl DomainRecord {
    /// Build a record from raw fields, resolving the canonical domain from
    /// the first usable alias in `aliases`.
    ///
    /// When nothing resolves, `domainURL` is removed so the record is
    /// flagged as domain-less rather than dropped.
    pub fn from_fields(
        mut fields: Map<String, Value>,
        aliases: &[&str],
        source: Option<RecordSource>,
    ) -> Self {
        match resolve_domain(&fields, aliases) {
            Some(domain) => {
                fields.insert(DOMAIN_URL_KEY.to_string(), Value::String(domain));
            }
            None => {
                fields.remove(DOMAIN_URL_KEY);
            }
        }
        if let Some(source) = source {
            fields.insert(
                SOURCE_KEY.to_string(),
                Value::String(source.as_str().to_string()),
            );
        }
        Self(fields)
    }

    /// Resolved domain, if any
    pub fn domain_url(&self) -> Option<&str> {
        self.0
            .get(DOMAIN_URL_KEY)
            .and_then(Value::as_str)
            .filter(|d| !d.trim().is_empty())
    }

    pub fn has_domain(&self) -> bool {
        self.domain_url().is_some()
    }

    pub fn source(&self) -> Option<RecordSource> {
        self.0
            .get(SOURCE_KEY)
            .and_then(Value::as_str)
            .and_then(|s| s.parse().ok())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

/// First alias holding a non-null, non-blank value.
///
/// Non-string values are rendered with their JSON text.
pub fn resolve_domain(fields: &Map<String, Value>, aliases: &[&str]) -> Option<String> {
    aliases.iter().find_map(|key| match fields.get(*key) {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) if s.trim().is_empty() => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => Some(other.to_string()),
    })
}

/// Unique resolved domains in first-seen order
pub fn unique_domains(records: &[DomainRecord]) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    records
        .iter()
        .filter_map(DomainRecord::domain_url)
        .filter(|d| seen.insert(*d))
        .map(str::to_string)
        .collect()
}

/// Caller-supplied context (user name, country, currency, providers, ...)
///
/// Passed through to the completion call unmodified.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct UserContext(Value);

impl UserContext {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn user_name(&self) -> Option<&str> {
        self.0.get("userName").and_then(Value::as_str)
    }

    pub fn country_code(&self) -> Option<&str> {
        self.0.get("country_code").and_then(Value::as_str)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

/// Output of the normalizer
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NormalizedImport {
    pub records: Vec<DomainRecord>,
    pub user_context: Option<UserContext>,
}

impl NormalizedImport {
    pub fn unique_domains(&self) -> Vec<String> {
        unique_domains(&self.records)
    }

    pub fn has_any_domain(&self) -> bool {
        self.records.iter().any(DomainRecord::has_domain)
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn obj(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_resolve_skips_null_and_blank() {
        let fields = obj(json!({"domainURL": null, "domainUrl": "  ", "domain": "c.com"}));
        assert_eq!(resolve_domain(&fields, DOMAIN_FIELDS).as_deref(), Some("c.com"));
    }

    #[test]
    fn test_record_without_domain_is_flagged() {
        let record = DomainRecord::from_fields(obj(json!({"name": "x"})), DOMAIN_FIELDS, None);
        assert!(!record.has_domain());
        assert!(record.get(DOMAIN_URL_KEY).is_none());
        assert_eq!(record.get("name"), Some(&json!("x")));
    }

    #[test]
    fn test_canonical_domain_overwrites() {
        let record = DomainRecord::from_fields(
            obj(json!({"domainURL": null, "domain": "a.com"})),
            DOMAIN_FIELDS,
            Some(RecordSource::Overview),
        );
        assert_eq!(record.domain_url(), Some("a.com"));
        assert_eq!(record.source(), Some(RecordSource::Overview));
    }

    #[test]
    fn test_unique_domains_first_seen_order() {
        let records: Vec<DomainRecord> = ["b.com", "a.com", "b.com"]
            .iter()
            .map(|d| DomainRecord::from_fields(obj(json!({"domain": d})), DOMAIN_FIELDS, None))
            .chain(std::iter::once(DomainRecord::default()))
            .collect();
        assert_eq!(unique_domains(&records), vec!["b.com", "a.com"]);
    }

    #[test]
    fn test_user_context_accessors() {
        let ctx = UserContext::new(json!({"userName": "sam", "country_code": "NL", "currency": "EUR"}));
        assert_eq!(ctx.user_name(), Some("sam"));
        assert_eq!(ctx.country_code(), Some("NL"));
        assert_eq!(ctx.as_value()["currency"], "EUR");
    }
}
