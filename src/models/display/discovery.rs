//! Discovered endpoint display model

use serde::Serialize;
use tabled::Tabled;

use super::common::or_dash;
use crate::client::DiscoveredEndpoint;
use crate::error::Result;
use crate::output::{Formattable, OutputFormat, json, table};
use crate::render::render_discovery;

#[derive(Debug, Clone, Tabled, Serialize)]
pub struct DiscoveredDisplay {
    #[tabled(rename = "URL")]
    pub url: String,

    #[tabled(rename = "STATUS")]
    pub status: String,

    #[tabled(rename = "CONTENT TYPE")]
    pub content_type: String,
}

impl From<&DiscoveredEndpoint> for DiscoveredDisplay {
    fn from(endpoint: &DiscoveredEndpoint) -> Self {
        Self {
            url: endpoint.url.clone(),
            status: endpoint
                .status_code
                .map_or_else(|| "-".to_string(), |c| c.to_string()),
            content_type: or_dash(endpoint.content_type.as_deref()),
        }
    }
}

impl Formattable for [DiscoveredEndpoint] {
    fn format(&self, format: OutputFormat) -> Result<String> {
        Ok(match format {
            OutputFormat::Html => render_discovery(self),
            OutputFormat::Table => {
                let rows: Vec<DiscoveredDisplay> =
                    self.iter().map(DiscoveredDisplay::from).collect();
                table::format_table(
                    &rows,
                    "No endpoints discovered. The API might use non-standard paths or require authentication.",
                )
            }
            OutputFormat::Json => json::format_json(self)?,
        })
    }
}
