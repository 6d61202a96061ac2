//! Captured request models

use serde::{Deserialize, Serialize};

/// A backend-recorded record of one past analyze call.
///
/// The backend stores full analysis results; only the fields shown in the
/// captured list are kept here.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CapturedRequest {
    /// Absent or null for batch entries submitted without a URL
    #[serde(default)]
    pub url: Option<String>,

    #[serde(default)]
    pub method: Option<String>,

    #[serde(default)]
    pub status_code: Option<u16>,

    #[serde(default)]
    pub error: Option<String>,

    #[serde(default)]
    pub response_time_ms: Option<f64>,

    #[serde(default)]
    pub content_type: Option<String>,

    /// When the capture was made (ISO 8601)
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// Response of the list-captured operation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CapturedResponse {
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub requests: Vec<CapturedRequest>,
}
