//! Generated documentation models
//!
//! The docs download is the backend payload as received, so every struct here
//! keeps the keys it does not model in `extra`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::PatternInfo;

/// Documentation assembled by the backend from captured requests
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GeneratedDocs {
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub title: String,

    /// Generation time (ISO 8601)
    #[serde(default)]
    pub generated_at: Option<String>,

    #[serde(default, deserialize_with = "super::null_as_default")]
    pub endpoints: Vec<DocEndpoint>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One documented method + URL pair
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DocEndpoint {
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub method: String,

    #[serde(default, deserialize_with = "super::null_as_default")]
    pub url: String,

    #[serde(default, deserialize_with = "super::null_as_default")]
    pub description: String,

    /// Distinct status codes seen for this endpoint
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub status_codes: Vec<u16>,

    /// Mean response time in milliseconds
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub avg_response_time: f64,

    /// Distinct content types seen for this endpoint
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub content_types: Vec<String>,

    #[serde(default, deserialize_with = "super::null_as_default")]
    pub security: DocSecurity,

    #[serde(default)]
    pub patterns: Option<PatternInfo>,

    #[serde(default)]
    pub example_response: Option<Value>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Security summary carried into the docs.
///
/// Only `authentication` is displayed; `https`, `security_headers` and
/// `vulnerabilities` ride along in `extra`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DocSecurity {
    #[serde(default)]
    pub authentication: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Generate-docs outcome: either documentation or a backend-reported error
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum DocsResponse {
    Error { error: String },
    Docs(GeneratedDocs),
}
