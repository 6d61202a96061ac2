//! Analysis result models

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Result of a single endpoint analysis.
///
/// The backend returns the same shape for analyze, for every batch entry, and
/// for every captured request. Failed probes carry `error` and little else.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AnalysisResult {
    /// Analyzed URL
    #[serde(default)]
    pub url: Option<String>,

    /// HTTP method used for the probe
    #[serde(default)]
    pub method: Option<String>,

    /// Response status code
    #[serde(default)]
    pub status_code: Option<u16>,

    /// Round-trip time in milliseconds
    #[serde(default)]
    pub response_time_ms: Option<f64>,

    /// Response content type
    #[serde(default)]
    pub content_type: Option<String>,

    /// Response body size in bytes
    #[serde(default)]
    pub content_length: Option<u64>,

    /// Declared response encoding
    #[serde(default)]
    pub encoding: Option<String>,

    /// Encoding detected from the body
    #[serde(default)]
    pub apparent_encoding: Option<String>,

    /// Redirect chain followed before the final response
    #[serde(default)]
    pub redirects: Vec<String>,

    /// Cookies set by the response
    #[serde(default)]
    pub cookies: BTreeMap<String, String>,

    /// Security assessment
    #[serde(default)]
    pub security: Option<SecurityInfo>,

    /// Detected API patterns
    #[serde(default)]
    pub patterns: Option<PatternInfo>,

    /// Response headers
    #[serde(default)]
    pub headers: BTreeMap<String, String>,

    /// How `response_data` is encoded
    #[serde(default)]
    pub data_type: Option<DataType>,

    /// Parsed response body (JSON value, text, or base64 for binary)
    #[serde(default)]
    pub response_data: Option<Value>,

    /// Probe failure reported by the backend
    #[serde(default)]
    pub error: Option<String>,

    /// When the probe ran (ISO 8601, usually without offset)
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl AnalysisResult {
    /// True when the probe got a non-error response below 400.
    ///
    /// A result with neither an error nor a status code counts as neither
    /// successful nor failed.
    pub fn is_success(&self) -> bool {
        self.error.is_none() && self.status_code.is_some_and(|c| c < 400)
    }

    /// True when the probe failed or got a status of 400 or above
    pub fn is_failure(&self) -> bool {
        self.error.is_some() || self.status_code.is_some_and(|c| c >= 400)
    }
}

/// Encoding of the response body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    Json,
    Text,
    Binary,
    Error,
    #[serde(other)]
    Unknown,
}

/// Security assessment of a response
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SecurityInfo {
    /// Whether the final URL used HTTPS
    #[serde(default)]
    pub https: bool,

    /// Detected authentication scheme (bearer_token, basic_auth, api_key, ...)
    #[serde(default)]
    pub authentication: Option<String>,

    /// Security headers present on the response, by name
    #[serde(default)]
    pub security_headers: BTreeMap<String, String>,

    /// Potential weaknesses found
    #[serde(default)]
    pub vulnerabilities: Vec<String>,
}

/// API style and feature detection
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PatternInfo {
    #[serde(default)]
    pub rest_api: bool,

    #[serde(default)]
    pub graphql: bool,

    #[serde(default)]
    pub soap: bool,

    #[serde(default)]
    pub rpc: bool,

    #[serde(default)]
    pub rate_limiting: bool,

    #[serde(default)]
    pub pagination: bool,

    /// API version extracted from the URL (number or string on the wire)
    #[serde(default, deserialize_with = "deserialize_version")]
    pub versioning: Option<String>,

    /// Detections not shown in the views, such as `crud_operations`
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Custom deserializer for the API version that handles both numbers and strings
fn deserialize_version<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: serde::de::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum VersionValue {
        Integer(i64),
        String(String),
    }

    Ok(
        match Option::<VersionValue>::deserialize(deserializer)? {
            Some(VersionValue::Integer(i)) => Some(i.to_string()),
            Some(VersionValue::String(s)) if !s.is_empty() => Some(s),
            _ => None,
        },
    )
}

/// Response of the batch-analyze operation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatchResponse {
    #[serde(default)]
    pub results: Vec<AnalysisResult>,
}
