//! Request bodies sent to the analysis backend

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::ExportFormat;

/// Body of an analyze call
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AnalyzeRequest {
    pub url: String,
    pub method: String,
    /// Header name to value
    pub headers: Map<String, Value>,
    /// Raw request body text
    pub data: String,
    pub params: Map<String, Value>,
}

/// One endpoint of a batch analysis
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BatchEndpoint {
    pub url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
}

/// Body of a batch-analyze call
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BatchRequest {
    pub endpoints: Vec<BatchEndpoint>,
}

/// Body of a discover call
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DiscoverRequest {
    pub url: String,
}

/// Body of an export call
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ExportRequest {
    pub format: ExportFormat,
}
