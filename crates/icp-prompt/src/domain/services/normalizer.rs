//! Normalizer - Reduce heterogeneous imported JSON to domain records
//!
//! Recognized shapes, tried in order against the same input:
//!
//! 1. an array of records
//! 2. an object whose string `content` field is itself JSON (recursed into)
//! 3. a provider export carrying `data.WEBSHOP` (overview + similar shops)
//! 4. a single bare record with a domain field
//!
//! Anything else is rejected.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::domain::entities::{
    resolve_domain, DomainRecord, NormalizedImport, UserContext, DOMAIN_FIELDS,
    USER_CONTEXT_KEY, WEBSHOP_DOMAIN_FIELDS,
};
use crate::domain::errors::ImportError;
use crate::domain::value_objects::RecordSource;

/// Nesting limit for `content` strings wrapping further JSON
pub const MAX_CONTENT_DEPTH: usize = 8;

pub const NO_DOMAIN_WARNING: &str = "Warning: No domainURL fields found in data";

/// A recognized input shape
#[derive(Debug)]
enum Shape<'a> {
    RecordList(&'a [Value]),
    Wrapped(Value),
    Webshop {
        webshop: &'a Map<String, Value>,
        outer: &'a Map<String, Value>,
    },
    Single(&'a Map<String, Value>),
}

fn classify(value: &Value) -> Option<Shape<'_>> {
    if let Value::Array(items) = value {
        return Some(Shape::RecordList(items));
    }

    let object = value.as_object()?;

    if let Some(Value::String(content)) = object.get("content") {
        match serde_json::from_str::<Value>(content) {
            Ok(inner) => return Some(Shape::Wrapped(inner)),
            Err(e) => {
                tracing::debug!("`content` is not JSON ({}), trying other shapes", e);
            }
        }
    }

    if let Some(webshop) = object
        .get("data")
        .and_then(|d| d.get("WEBSHOP"))
        .and_then(Value::as_object)
    {
        return Some(Shape::Webshop {
            webshop,
            outer: object,
        });
    }

    if resolve_domain(object, DOMAIN_FIELDS).is_some() {
        return Some(Shape::Single(object));
    }

    None
}

/// Normalize parsed JSON. Returns `None` when no shape matches.
pub fn normalize(value: &Value) -> Option<NormalizedImport> {
    normalize_at_depth(value, 0)
}

fn normalize_at_depth(value: &Value, depth: usize) -> Option<NormalizedImport> {
    match classify(value)? {
        Shape::RecordList(items) => Some(NormalizedImport {
            records: items.iter().map(record_from_item).collect(),
            user_context: None,
        }),
        Shape::Wrapped(inner) => {
            if depth >= MAX_CONTENT_DEPTH {
                tracing::warn!(
                    "Nested `content` deeper than {} levels, giving up",
                    MAX_CONTENT_DEPTH
                );
                return None;
            }
            normalize_at_depth(&inner, depth + 1)
        }
        Shape::Webshop { webshop, outer } => Some(from_webshop(webshop, outer)),
        Shape::Single(object) => Some(from_single(object)),
    }
}

fn record_from_item(item: &Value) -> DomainRecord {
    match item {
        Value::Object(fields) => DomainRecord::from_fields(fields.clone(), DOMAIN_FIELDS, None),
        other => {
            tracing::debug!("Array element is not an object: {}", other);
            DomainRecord::default()
        }
    }
}

fn from_webshop(webshop: &Map<String, Value>, outer: &Map<String, Value>) -> NormalizedImport {
    let mut records = Vec::new();

    if let Some(overview) = webshop.get("overview").and_then(Value::as_object) {
        records.push(DomainRecord::from_fields(
            overview.clone(),
            WEBSHOP_DOMAIN_FIELDS,
            Some(RecordSource::Overview),
        ));
    }

    if let Some(similar) = webshop.get("similar_webshop").and_then(Value::as_array) {
        for shop in similar {
            match shop.as_object() {
                Some(fields) => records.push(DomainRecord::from_fields(
                    fields.clone(),
                    WEBSHOP_DOMAIN_FIELDS,
                    Some(RecordSource::SimilarWebshop),
                )),
                None => tracing::warn!("Skipping non-object similar_webshop entry"),
            }
        }
    }

    // Exports place user_context at the top level, occasionally under data/WEBSHOP.
    let user_context = [
        outer.get(USER_CONTEXT_KEY),
        outer.get("data").and_then(|d| d.get(USER_CONTEXT_KEY)),
        webshop.get(USER_CONTEXT_KEY),
    ]
    .into_iter()
    .flatten()
    .find(|v| !v.is_null())
    .cloned()
    .map(UserContext::new);

    NormalizedImport {
        records,
        user_context,
    }
}

fn from_single(object: &Map<String, Value>) -> NormalizedImport {
    let mut fields = object.clone();
    let user_context = fields
        .remove(USER_CONTEXT_KEY)
        .filter(|v| !v.is_null())
        .map(UserContext::new);

    NormalizedImport {
        records: vec![DomainRecord::from_fields(fields, DOMAIN_FIELDS, None)],
        user_context,
    }
}

/// Result of importing pasted or uploaded text
#[derive(Debug, Clone, Serialize)]
pub struct ImportOutcome {
    pub import: NormalizedImport,
    /// Set when no record resolved a domain
    pub warning: Option<String>,
}

/// Parse and normalize raw JSON text from the import surface
pub fn import_json(text: &str) -> Result<ImportOutcome, ImportError> {
    if text.trim().is_empty() {
        return Err(ImportError::Empty);
    }

    let parsed: Value =
        serde_json::from_str(text).map_err(|e| ImportError::InvalidJson(e.to_string()))?;

    let import = normalize(&parsed)
        .filter(|n| !n.is_empty())
        .ok_or(ImportError::Unrecognized)?;

    let warning = if import.has_any_domain() {
        None
    } else {
        tracing::warn!("Imported {} records without any domainURL", import.records.len());
        Some(NO_DOMAIN_WARNING.to_string())
    };

    Ok(ImportOutcome { import, warning })
}
