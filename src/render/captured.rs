//! Captured requests view

use super::{escape_html, method_badge, outcome_detail, status_badge};
use crate::client::models::CapturedRequest;
use crate::output::formatters::format_timestamp_local;

const EMPTY_PLACEHOLDER: &str = "No requests captured yet. Start analyzing APIs to see them here.";

pub fn render_captured(captured: &[CapturedRequest]) -> String {
    if captured.is_empty() {
        return format!(
            r#"<div class="alert alert-info"><i class="fas fa-info-circle"></i> {}</div>"#,
            EMPTY_PLACEHOLDER
        );
    }

    let mut html = format!(
        r#"<div class="mb-3"><strong>Total Requests:</strong> {}</div>"#,
        captured.len()
    );
    for request in captured {
        html.push_str(&row(request));
    }
    html
}

fn row(request: &CapturedRequest) -> String {
    format!(
        concat!(
            r#"<div class="card mb-2"><div class="card-body">"#,
            r#"<div class="d-flex justify-content-between align-items-center">"#,
            r#"<div>{}<strong class="ms-2">{}</strong></div>"#,
            r#"<div><small class="text-muted">{}</small>{}</div></div>{}"#,
            r#"</div></div>"#
        ),
        method_badge(request.method.as_deref()),
        escape_html(request.url.as_deref().unwrap_or_default()),
        escape_html(&format_timestamp_local(request.timestamp.as_deref())),
        status_badge(request.status_code, request.error.as_deref(), "ms-2"),
        outcome_detail(
            request.error.as_deref(),
            request.response_time_ms,
            request.content_type.as_deref()
        )
    )
}
