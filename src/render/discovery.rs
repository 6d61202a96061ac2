//! Discovery view

use super::{escape_html, status_class, status_text};
use crate::client::models::DiscoveredEndpoint;

/// `data-action` value on the re-analyze button of each discovered endpoint
pub const ANALYZE_DISCOVERED_ACTION: &str = "analyze-discovered";

const EMPTY_PLACEHOLDER: &str = "No endpoints discovered. The API might use non-standard paths or require authentication.";

pub fn render_discovery(discovered: &[DiscoveredEndpoint]) -> String {
    if discovered.is_empty() {
        return format!(
            r#"<div class="alert alert-info"><i class="fas fa-info-circle"></i> {}</div>"#,
            EMPTY_PLACEHOLDER
        );
    }

    let cards: String = discovered.iter().map(endpoint_card).collect();

    format!(
        r#"<div class="card"><div class="card-header"><h5><i class="fas fa-list"></i> Discovered Endpoints ({})</h5></div><div class="card-body"><div class="row">{}</div></div></div>"#,
        discovered.len(),
        cards
    )
}

fn endpoint_card(endpoint: &DiscoveredEndpoint) -> String {
    let url = escape_html(&endpoint.url);
    let content_type = endpoint
        .content_type
        .as_deref()
        .filter(|t| !t.is_empty())
        .unwrap_or("Unknown type");

    format!(
        concat!(
            r#"<div class="col-md-6 mb-3"><div class="card border-success"><div class="card-body">"#,
            r#"<div class="d-flex justify-content-between align-items-center">"#,
            r#"<div><strong>{url}</strong><br><small class="text-muted">{content_type}</small></div>"#,
            r#"<div><span class="badge {class}">{status}</span>"#,
            r#"<button class="btn btn-sm btn-outline-primary ms-2" data-action="{action}" data-url="{url}"><i class="fas fa-search"></i> Analyze</button></div>"#,
            r#"</div></div></div></div>"#
        ),
        url = url,
        content_type = escape_html(content_type),
        class = status_class(endpoint.status_code),
        status = status_text(endpoint.status_code),
        action = ANALYZE_DISCOVERED_ACTION,
    )
}
