//! Generated documentation display model

use serde::Serialize;
use tabled::Tabled;

use super::common::method_cell;
use crate::client::DocsResponse;
use crate::client::models::DocEndpoint;
use crate::error::Result;
use crate::output::formatters::format_timestamp_local;
use crate::output::{Formattable, OutputFormat, json, table};
use crate::render::render_docs_response;

#[derive(Debug, Clone, Tabled, Serialize)]
pub struct DocEndpointDisplay {
    #[tabled(rename = "METHOD")]
    pub method: String,

    #[tabled(rename = "URL")]
    pub url: String,

    #[tabled(rename = "STATUS CODES")]
    pub status_codes: String,

    #[tabled(rename = "AVG TIME")]
    pub avg_response_time: String,

    #[tabled(rename = "AUTH")]
    pub authentication: String,
}

impl From<&DocEndpoint> for DocEndpointDisplay {
    fn from(endpoint: &DocEndpoint) -> Self {
        Self {
            method: method_cell(Some(endpoint.method.as_str())),
            url: endpoint.url.clone(),
            status_codes: endpoint
                .status_codes
                .iter()
                .map(u16::to_string)
                .collect::<Vec<_>>()
                .join(", "),
            avg_response_time: format!("{}ms", endpoint.avg_response_time.round()),
            authentication: endpoint
                .security
                .authentication
                .clone()
                .filter(|a| !a.is_empty())
                .unwrap_or_else(|| "None".to_string()),
        }
    }
}

impl Formattable for DocsResponse {
    fn format(&self, format: OutputFormat) -> Result<String> {
        Ok(match (format, self) {
            (OutputFormat::Html, _) => render_docs_response(self),
            (OutputFormat::Json, _) => json::format_json(self)?,
            (OutputFormat::Table, DocsResponse::Error { error }) => error.clone(),
            (OutputFormat::Table, DocsResponse::Docs(docs)) => {
                let rows: Vec<DocEndpointDisplay> =
                    docs.endpoints.iter().map(DocEndpointDisplay::from).collect();
                format!(
                    "{}\nGenerated on: {}\n{}",
                    docs.title,
                    format_timestamp_local(docs.generated_at.as_deref()),
                    table::format_table(&rows, "No endpoints documented.")
                )
            }
        })
    }
}
