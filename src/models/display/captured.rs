//! Captured request display model

use serde::Serialize;
use tabled::Tabled;

use super::common::{method_cell, or_dash, status_cell};
use crate::client::CapturedRequest;
use crate::error::Result;
use crate::output::formatters::{format_ms, format_timestamp_local};
use crate::output::{Formattable, OutputFormat, json, table};
use crate::render::render_captured;

#[derive(Debug, Clone, Tabled, Serialize)]
pub struct CapturedDisplay {
    #[tabled(rename = "TIME")]
    pub time: String,

    #[tabled(rename = "METHOD")]
    pub method: String,

    #[tabled(rename = "URL")]
    pub url: String,

    #[tabled(rename = "STATUS")]
    pub status: String,

    #[tabled(rename = "RESPONSE")]
    pub response_time: String,

    /// Content type, or the error text for failed probes
    #[tabled(rename = "DETAIL")]
    pub detail: String,
}

impl From<&CapturedRequest> for CapturedDisplay {
    fn from(request: &CapturedRequest) -> Self {
        Self {
            time: format_timestamp_local(request.timestamp.as_deref()),
            method: method_cell(request.method.as_deref()),
            url: or_dash(request.url.as_deref()),
            status: status_cell(request.status_code, request.error.as_deref()),
            response_time: format_ms(request.response_time_ms),
            detail: match request.error.as_deref() {
                Some(error) => error.to_string(),
                None => or_dash(request.content_type.as_deref()),
            },
        }
    }
}

impl Formattable for [CapturedRequest] {
    fn format(&self, format: OutputFormat) -> Result<String> {
        Ok(match format {
            OutputFormat::Html => render_captured(self),
            OutputFormat::Table => {
                let rows: Vec<CapturedDisplay> = self.iter().map(CapturedDisplay::from).collect();
                let table = table::format_table(&rows, "No requests captured yet.");
                if rows.is_empty() {
                    table
                } else {
                    format!("{}\nTotal Requests: {}", table, rows.len())
                }
            }
            OutputFormat::Json => json::format_json(self)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_from_error_request() {
        let display = CapturedDisplay::from(&CapturedRequest {
            url: Some("https://down".to_string()),
            error: Some("Connection refused".to_string()),
            ..Default::default()
        });

        assert_eq!(display.status, "ERROR");
        assert_eq!(display.detail, "Connection refused");
        assert_eq!(display.time, "N/A");
        assert_eq!(display.method, "GET");
    }

    #[test]
    fn test_display_without_url() {
        let display = CapturedDisplay::from(&CapturedRequest::default());
        assert_eq!(display.url, "-");
    }

    #[test]
    fn test_table_total() {
        let captured = vec![CapturedRequest {
            url: Some("https://a/1".to_string()),
            status_code: Some(200),
            ..Default::default()
        }];

        let output = captured.as_slice().format(OutputFormat::Table).unwrap();
        assert!(output.ends_with("Total Requests: 1"));
    }

    #[test]
    fn test_empty_table() {
        let captured: Vec<CapturedRequest> = vec![];
        assert_eq!(
            captured.as_slice().format(OutputFormat::Table).unwrap(),
            "No requests captured yet."
        );
    }
}
