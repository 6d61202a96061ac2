//! Export models

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Export formats offered by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Full captured data as JSON
    Json,
    /// One curl command per successful capture
    Curl,
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Json => write!(f, "json"),
            ExportFormat::Curl => write!(f, "curl"),
        }
    }
}

/// Body of a curl export
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CurlExport {
    #[serde(default)]
    pub curl_commands: Vec<String>,
}

/// Export result, shaped by the requested format
#[derive(Debug, Clone, PartialEq)]
pub enum ExportPayload {
    /// Opaque JSON blob, saved as-is
    Json(Value),
    /// curl commands, saved as plain text
    Curl(CurlExport),
}
