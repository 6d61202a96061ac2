//! JSON output formatting

use chrono::Utc;
use serde::Serialize;

/// Envelope for JSON output: the payload plus where and when it came from
#[derive(Debug, Serialize)]
pub struct JsonOutput<'a, T: ?Sized> {
    pub data: &'a T,
    pub meta: Metadata,
}

#[derive(Debug, Serialize)]
pub struct Metadata {
    /// RFC 3339 time the output was produced
    pub timestamp: String,

    /// apiscope version
    pub version: &'static str,
}

impl<'a, T: ?Sized> JsonOutput<'a, T> {
    pub fn new(data: &'a T) -> Self {
        Self {
            data,
            meta: Metadata {
                timestamp: Utc::now().to_rfc3339(),
                version: env!("CARGO_PKG_VERSION"),
            },
        }
    }
}

/// Format data as pretty-printed JSON inside the envelope
pub fn format_json<T: Serialize + ?Sized>(data: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonOutput::new(data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{CapturedRequest, DiscoveredEndpoint};

    #[test]
    fn test_envelope_carries_version() {
        let captured: Vec<CapturedRequest> = vec![];
        let output = JsonOutput::new(&captured);

        assert_eq!(output.meta.version, env!("CARGO_PKG_VERSION"));
        assert!(!output.meta.timestamp.is_empty());
    }

    #[test]
    fn test_format_captured() {
        let captured = vec![CapturedRequest {
            url: Some("https://api.example.com/posts".to_string()),
            status_code: Some(200),
            ..Default::default()
        }];

        let result = format_json(&captured).unwrap();

        assert!(result.contains("\"data\""));
        assert!(result.contains("\"meta\""));
        assert!(result.contains("\"url\": \"https://api.example.com/posts\""));
        assert!(result.contains("\"status_code\": 200"));
    }

    #[test]
    fn test_format_empty_list() {
        let discovered: Vec<DiscoveredEndpoint> = vec![];
        let result = format_json(&discovered).unwrap();

        assert!(result.contains("\"data\": []"));
    }

    #[test]
    fn test_format_unsized_slice() {
        let discovered = [DiscoveredEndpoint {
            url: "https://a/api".to_string(),
            ..Default::default()
        }];
        let result = format_json(&discovered[..]).unwrap();

        assert!(result.contains("https://a/api"));
    }
}
