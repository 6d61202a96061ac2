//! Generated documentation view

use super::{escape_html, method_badge, method_name, pretty_json, status_class};
use crate::client::models::{DocEndpoint, DocsResponse, GeneratedDocs};
use crate::output::formatters::format_timestamp_local;

/// `data-action` value on the docs download button
pub const DOWNLOAD_DOCS_ACTION: &str = "download-docs";

/// Render either the documentation or the backend's inline error
pub fn render_docs_response(response: &DocsResponse) -> String {
    match response {
        DocsResponse::Docs(docs) => render_docs(docs),
        DocsResponse::Error { error } => format!(
            r#"<div class="alert alert-warning"><i class="fas fa-exclamation-triangle"></i> {}</div>"#,
            escape_html(error)
        ),
    }
}

pub fn render_docs(docs: &GeneratedDocs) -> String {
    let endpoints: String = docs.endpoints.iter().map(endpoint_block).collect();

    format!(
        concat!(
            r#"<div class="card"><div class="card-header d-flex justify-content-between align-items-center">"#,
            r#"<h5>{}</h5>"#,
            r#"<button class="btn btn-sm btn-outline-primary" data-action="{}"><i class="fas fa-download"></i> Download</button>"#,
            r#"</div><div class="card-body">"#,
            r#"<div class="mb-3"><small class="text-muted">Generated on: {}</small></div>{}"#,
            r#"</div></div>"#
        ),
        escape_html(&docs.title),
        DOWNLOAD_DOCS_ACTION,
        escape_html(&format_timestamp_local(docs.generated_at.as_deref())),
        endpoints
    )
}

fn endpoint_block(endpoint: &DocEndpoint) -> String {
    let method_class = method_name(Some(endpoint.method.as_str())).to_lowercase();

    let status_codes: String = endpoint
        .status_codes
        .iter()
        .map(|code| {
            format!(
                r#"<span class="badge {} me-1">{}</span>"#,
                status_class(Some(*code)),
                code
            )
        })
        .collect();

    let content_types = endpoint
        .content_types
        .iter()
        .map(|t| format!(r#"<small class="text-muted">{}</small>"#, escape_html(t)))
        .collect::<Vec<_>>()
        .join("<br>");

    let authentication = endpoint
        .security
        .authentication
        .as_deref()
        .filter(|a| !a.is_empty())
        .unwrap_or("None");

    let example = endpoint
        .example_response
        .as_ref()
        .filter(|v| !v.is_null())
        .map(|value| {
            format!(
                r#"<div class="mt-3"><strong>Example Response:</strong><pre class="code-block mt-2"><code class="language-json">{}</code></pre></div>"#,
                escape_html(&pretty_json(value))
            )
        })
        .unwrap_or_default();

    format!(
        concat!(
            r#"<div class="card mb-3 endpoint-card {}"><div class="card-header">{}<strong class="ms-2">{}</strong></div>"#,
            r#"<div class="card-body"><p>{}</p>"#,
            r#"<div class="row"><div class="col-md-6"><strong>Status Codes:</strong> {}</div>"#,
            r#"<div class="col-md-6"><strong>Avg Response Time:</strong> {}ms</div></div>"#,
            r#"<div class="row mt-2"><div class="col-md-6"><strong>Content Types:</strong><br>{}</div>"#,
            r#"<div class="col-md-6"><strong>Authentication:</strong> <span class="badge bg-info">{}</span></div></div>"#,
            r#"{}</div></div>"#
        ),
        escape_html(&method_class),
        method_badge(Some(endpoint.method.as_str())),
        escape_html(&endpoint.url),
        escape_html(&endpoint.description),
        status_codes,
        endpoint.avg_response_time.round(),
        content_types,
        escape_html(authentication),
        example
    )
}
