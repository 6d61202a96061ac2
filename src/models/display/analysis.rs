//! Analysis and batch display models

use serde::Serialize;
use tabled::Tabled;

use super::common::{method_cell, or_dash, status_cell, truncate_string};
use crate::client::AnalysisResult;
use crate::error::Result;
use crate::output::formatters::{format_bytes, format_ms};
use crate::output::{Formattable, OutputFormat, json, table};
use crate::render::{BatchSummary, render_analysis, render_batch, response_body};

/// Longest response preview shown in a table cell
const PREVIEW_CHARS: usize = 120;

/// One FIELD / VALUE row of a single analysis
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct AnalysisFieldDisplay {
    #[tabled(rename = "FIELD")]
    pub field: &'static str,

    #[tabled(rename = "VALUE")]
    pub value: String,
}

impl AnalysisFieldDisplay {
    fn new(field: &'static str, value: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
        }
    }

    /// Rows describing one result, in display order
    pub fn rows(result: &AnalysisResult) -> Vec<Self> {
        let mut rows = vec![
            Self::new("URL", or_dash(result.url.as_deref())),
            Self::new("Method", method_cell(result.method.as_deref())),
            Self::new(
                "Status",
                status_cell(result.status_code, result.error.as_deref()),
            ),
        ];

        if let Some(error) = result.error.as_deref() {
            rows.push(Self::new("Error", error));
            return rows;
        }

        rows.push(Self::new("Response Time", format_ms(result.response_time_ms)));
        rows.push(Self::new("Content Type", or_dash(result.content_type.as_deref())));
        rows.push(Self::new("Content Length", format_bytes(result.content_length)));
        rows.push(Self::new("Encoding", or_dash(result.encoding.as_deref())));

        if !result.redirects.is_empty() {
            rows.push(Self::new("Redirects", result.redirects.join(" -> ")));
        }

        let security = result.security.clone().unwrap_or_default();
        rows.push(Self::new(
            "HTTPS",
            if security.https { "Enabled" } else { "Disabled" },
        ));
        rows.push(Self::new(
            "Authentication",
            security
                .authentication
                .filter(|a| !a.is_empty())
                .unwrap_or_else(|| "None".to_string()),
        ));
        rows.push(Self::new(
            "Security Headers",
            if security.security_headers.is_empty() {
                "None found".to_string()
            } else {
                security
                    .security_headers
                    .keys()
                    .cloned()
                    .collect::<Vec<_>>()
                    .join(", ")
            },
        ));
        for vulnerability in &security.vulnerabilities {
            rows.push(Self::new("Vulnerability", vulnerability.clone()));
        }

        let patterns = result.patterns.clone().unwrap_or_default();
        let detected: Vec<&str> = [
            ("REST", patterns.rest_api),
            ("GraphQL", patterns.graphql),
            ("SOAP", patterns.soap),
            ("RPC", patterns.rpc),
            ("Rate Limiting", patterns.rate_limiting),
            ("Pagination", patterns.pagination),
        ]
        .into_iter()
        .filter_map(|(name, active)| active.then_some(name))
        .collect();
        rows.push(Self::new(
            "Patterns",
            if detected.is_empty() {
                "-".to_string()
            } else {
                detected.join(", ")
            },
        ));
        if let Some(version) = patterns.versioning {
            rows.push(Self::new("API Version", format!("v{}", version)));
        }

        rows.push(Self::new(
            "Response",
            truncate_string(&response_body(result).text.replace('\n', " "), PREVIEW_CHARS),
        ));

        rows
    }
}

impl Formattable for AnalysisResult {
    fn format(&self, format: OutputFormat) -> Result<String> {
        Ok(match format {
            OutputFormat::Html => render_analysis(self),
            OutputFormat::Table => {
                table::format_table(&AnalysisFieldDisplay::rows(self), "No analysis data.")
            }
            OutputFormat::Json => json::format_json(self)?,
        })
    }
}

/// One row per batch entry
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct BatchRowDisplay {
    #[tabled(rename = "METHOD")]
    pub method: String,

    #[tabled(rename = "URL")]
    pub url: String,

    #[tabled(rename = "STATUS")]
    pub status: String,

    #[tabled(rename = "TIME")]
    pub time: String,

    /// Content type, or the error text for failed probes
    #[tabled(rename = "DETAIL")]
    pub detail: String,
}

impl From<&AnalysisResult> for BatchRowDisplay {
    fn from(result: &AnalysisResult) -> Self {
        let detail = match result.error.as_deref() {
            Some(error) => error.to_string(),
            None => or_dash(result.content_type.as_deref()),
        };

        Self {
            method: method_cell(result.method.as_deref()),
            url: or_dash(result.url.as_deref()),
            status: status_cell(result.status_code, result.error.as_deref()),
            time: format_ms(result.response_time_ms),
            detail,
        }
    }
}

impl Formattable for [AnalysisResult] {
    fn format(&self, format: OutputFormat) -> Result<String> {
        Ok(match format {
            OutputFormat::Html => render_batch(self),
            OutputFormat::Table => {
                let summary = BatchSummary::from_results(self);
                let rows: Vec<BatchRowDisplay> = self.iter().map(BatchRowDisplay::from).collect();
                format!(
                    "{}\n{} endpoints | Successful: {} | Failed: {} | Avg Response Time: {}ms",
                    table::format_table(&rows, "No results."),
                    summary.total,
                    summary.successful,
                    summary.failed,
                    summary.avg_response_ms
                )
            }
            OutputFormat::Json => json::format_json(self)?,
        })
    }
}
