//! HTML views
//!
//! Pure functions from backend view-models to markup strings. Every renderer
//! accepts any combination of missing fields, escapes all text it did not
//! produce itself, and returns the same markup for the same input.

mod analysis;
mod batch;
mod captured;
mod discovery;
mod docs;
mod page;

pub use analysis::{ResponseBody, render_analysis, response_body};
pub use batch::{BatchSummary, render_batch};
pub use captured::render_captured;
pub use discovery::{ANALYZE_DISCOVERED_ACTION, render_discovery};
pub use docs::{render_docs, render_docs_response};
pub use page::render_page;

/// Badge class for an HTTP status code
pub fn status_class(status_code: Option<u16>) -> &'static str {
    match status_code {
        Some(200..=299) => "bg-success",
        Some(300..=399) => "bg-warning",
        Some(400..=499) => "bg-danger",
        Some(500..=u16::MAX) => "bg-dark",
        _ => "bg-secondary",
    }
}

/// Speed class for a response time in milliseconds
pub fn response_time_class(ms: f64) -> &'static str {
    if ms < 200.0 {
        "fast"
    } else if ms < 1000.0 {
        "medium"
    } else {
        "slow"
    }
}

/// Escape text for use in element content and quoted attributes
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Status badge, or an `Error` badge when the item failed
fn status_badge(status_code: Option<u16>, error: Option<&str>, extra_class: &str) -> String {
    let class = |base: &str| {
        if extra_class.is_empty() {
            base.to_string()
        } else {
            format!("{} {}", base, extra_class)
        }
    };

    if error.is_some() {
        format!(r#"<span class="badge {}">Error</span>"#, class("bg-danger"))
    } else {
        format!(
            r#"<span class="badge {}">{}</span>"#,
            class(status_class(status_code)),
            status_text(status_code)
        )
    }
}

fn status_text(status_code: Option<u16>) -> String {
    status_code.map_or_else(|| "N/A".to_string(), |c| c.to_string())
}

/// Upper-cased method, defaulting to GET
fn method_name(method: Option<&str>) -> String {
    method
        .filter(|m| !m.is_empty())
        .map_or_else(|| "GET".to_string(), str::to_uppercase)
}

/// Method badge with a `method-<name>` class
fn method_badge(method: Option<&str>) -> String {
    let name = method_name(method);
    format!(
        r#"<span class="method-badge method-{}">{}</span>"#,
        escape_html(&name.to_lowercase()),
        escape_html(&name)
    )
}

/// Either the error text or a timing / content-type line
fn outcome_detail(
    error: Option<&str>,
    response_time_ms: Option<f64>,
    content_type: Option<&str>,
) -> String {
    match error {
        Some(error) => format!(r#"<div class="text-danger mt-2">{}</div>"#, escape_html(error)),
        None => format!(
            r#"<div class="mt-2"><small class="text-muted">Response time: {} | Content type: {}</small></div>"#,
            crate::output::formatters::format_ms(response_time_ms),
            escape_html(or_unknown(content_type))
        ),
    }
}

fn or_unknown(value: Option<&str>) -> &str {
    value.filter(|v| !v.is_empty()).unwrap_or("Unknown")
}

/// Pretty-print a JSON value with two-space indentation
fn pretty_json(value: &serde_json::Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}
