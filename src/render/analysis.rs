//! Single analysis view

use serde_json::Value;

use super::{escape_html, or_unknown, pretty_json, response_time_class, status_class, status_text};
use crate::client::models::{AnalysisResult, DataType, PatternInfo, SecurityInfo};
use crate::output::formatters::{format_bytes, format_ms};

/// Binary bodies are cut to this many characters
const BINARY_PREVIEW_CHARS: usize = 500;

/// Response body prepared for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseBody {
    pub text: String,
    /// Highlighter language hint (`language-<name>` class)
    pub language: &'static str,
}

/// Choose how to show the response body based on its declared data type.
///
/// - json: pretty-printed with two-space indentation
/// - text: verbatim
/// - binary: labelled, first 500 characters, then `...`
/// - anything else: the textual payload when there is one, else a placeholder
pub fn response_body(result: &AnalysisResult) -> ResponseBody {
    let data = result.response_data.as_ref();

    match result.data_type {
        Some(DataType::Json) => ResponseBody {
            text: data.map_or_else(|| "No response data".to_string(), pretty_json),
            language: "json",
        },
        Some(DataType::Text) => ResponseBody {
            text: data.map(value_as_text).unwrap_or_default(),
            language: "none",
        },
        Some(DataType::Binary) => {
            let encoded = data.map(value_as_text).unwrap_or_default();
            let preview: String = encoded.chars().take(BINARY_PREVIEW_CHARS).collect();
            ResponseBody {
                text: format!("[Binary data - base64 encoded]\n{}...", preview),
                language: "none",
            }
        }
        _ => ResponseBody {
            text: match data {
                Some(Value::String(s)) if !s.is_empty() => s.clone(),
                _ => "No response data".to_string(),
            },
            language: "none",
        },
    }
}

fn value_as_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Render the full analysis view for one result.
///
/// A result carrying `error` renders an inline failure block instead.
pub fn render_analysis(result: &AnalysisResult) -> String {
    if let Some(error) = result.error.as_deref() {
        return format!(
            r#"<div class="alert alert-danger"><strong>Request failed:</strong> {} <div class="mt-1"><small>{}</small></div></div>"#,
            escape_html(error),
            escape_html(result.url.as_deref().unwrap_or_default())
        );
    }

    let mut html = String::new();
    html.push_str(r#"<div class="row">"#);
    html.push_str(&card("Basic Info", "basic-info", &basic_info(result)));
    html.push_str(&card(
        "Security",
        "security-info",
        &security_info(result.security.as_ref()),
    ));
    html.push_str(&card(
        "API Patterns",
        "patterns-info",
        &patterns_info(result.patterns.as_ref()),
    ));
    html.push_str(&card("Headers", "headers-info", &headers_info(result)));
    html.push_str("</div>");

    let body = response_body(result);
    html.push_str(&format!(
        r#"<div class="card mt-3"><div class="card-header"><h5>Response Data</h5></div><div class="card-body"><pre class="code-block"><code id="response-data" class="language-{}">{}</code></pre></div></div>"#,
        body.language,
        escape_html(&body.text)
    ));

    html
}

fn card(title: &str, id: &str, body: &str) -> String {
    format!(
        r#"<div class="col-md-6 mb-3"><div class="card"><div class="card-header"><h5>{}</h5></div><div class="card-body" id="{}">{}</div></div></div>"#,
        title, id, body
    )
}

fn basic_info(result: &AnalysisResult) -> String {
    let time_class = result
        .response_time_ms
        .map_or("", response_time_class);

    let mut html = format!(
        r#"<div class="row"><div class="col-6"><strong>Status:</strong> <span class="badge {}">{}</span></div><div class="col-6"><strong>Response Time:</strong> <span class="response-time {}">{}</span></div></div>"#,
        status_class(result.status_code),
        status_text(result.status_code),
        time_class,
        format_ms(result.response_time_ms)
    );

    html.push_str(&format!(
        r#"<div class="row mt-2"><div class="col-6"><strong>Content Type:</strong><br><small>{}</small></div><div class="col-6"><strong>Content Length:</strong><br><small>{}</small></div></div>"#,
        escape_html(or_unknown(result.content_type.as_deref())),
        format_bytes(result.content_length)
    ));

    html.push_str(&format!(
        r#"<div class="row mt-2"><div class="col-12"><strong>Encoding:</strong> {}</div></div>"#,
        escape_html(or_unknown(result.encoding.as_deref()))
    ));

    if !result.redirects.is_empty() {
        let hops: Vec<String> = result
            .redirects
            .iter()
            .map(|url| format!("<li><small>{}</small></li>", escape_html(url)))
            .collect();
        html.push_str(&format!(
            r#"<div class="row mt-2"><div class="col-12"><strong>Redirects:</strong><ol class="mb-0">{}</ol></div></div>"#,
            hops.concat()
        ));
    }

    if !result.cookies.is_empty() {
        let names: Vec<String> = result
            .cookies
            .keys()
            .map(|name| format!(r#"<span class="badge bg-light text-dark me-1">{}</span>"#, escape_html(name)))
            .collect();
        html.push_str(&format!(
            r#"<div class="row mt-2"><div class="col-12"><strong>Cookies:</strong> {}</div></div>"#,
            names.concat()
        ));
    }

    html
}

fn security_info(security: Option<&SecurityInfo>) -> String {
    let fallback = SecurityInfo::default();
    let security = security.unwrap_or(&fallback);

    let (https_class, https_icon, https_label) = if security.https {
        ("security-good", "fa-check", "Enabled")
    } else {
        ("security-danger", "fa-times", "Disabled")
    };

    let headers = if security.security_headers.is_empty() {
        r#"<span class="text-muted">None found</span>"#.to_string()
    } else {
        security
            .security_headers
            .keys()
            .map(|h| format!(r#"<span class="badge bg-success me-1">{}</span>"#, escape_html(h)))
            .collect()
    };

    let vulnerabilities = if security.vulnerabilities.is_empty() {
        r#"<div class="text-success"><i class="fas fa-shield-alt"></i> No obvious vulnerabilities detected</div>"#
            .to_string()
    } else {
        let items: String = security
            .vulnerabilities
            .iter()
            .map(|v| format!(r#"<div class="vulnerability-item">{}</div>"#, escape_html(v)))
            .collect();
        format!(r#"<div class="mt-2"><strong>Vulnerabilities:</strong>{}</div>"#, items)
    };

    format!(
        r#"<div class="mb-2"><strong>HTTPS:</strong> <span class="{}"><i class="fas {}"></i> {}</span></div><div class="mb-2"><strong>Authentication:</strong> <span class="badge bg-info">{}</span></div><div class="mb-2"><strong>Security Headers:</strong><div class="mt-1">{}</div></div>{}"#,
        https_class,
        https_icon,
        https_label,
        escape_html(
            security
                .authentication
                .as_deref()
                .filter(|a| !a.is_empty())
                .unwrap_or("None")
        ),
        headers,
        vulnerabilities
    )
}

fn pattern_badge(label: &str, active: bool) -> String {
    if active {
        format!(r#"<span class="pattern-badge active">{}</span>"#, label)
    } else {
        format!(r#"<span class="pattern-badge">{}</span>"#, label)
    }
}

fn patterns_info(patterns: Option<&PatternInfo>) -> String {
    let fallback = PatternInfo::default();
    let patterns = patterns.unwrap_or(&fallback);

    let mut html = format!(
        r#"<div class="mb-2"><strong>API Type:</strong><br>{}{}{}</div><div class="mb-2"><strong>Features:</strong><br>{}{}</div>"#,
        pattern_badge("REST", patterns.rest_api),
        pattern_badge("GraphQL", patterns.graphql),
        pattern_badge("SOAP", patterns.soap),
        pattern_badge("Rate Limiting", patterns.rate_limiting),
        pattern_badge("Pagination", patterns.pagination)
    );

    if let Some(version) = patterns.versioning.as_deref() {
        html.push_str(&format!(
            r#"<div class="mb-2"><strong>API Version:</strong> <span class="badge bg-primary">v{}</span></div>"#,
            escape_html(version)
        ));
    }

    html
}

fn headers_info(result: &AnalysisResult) -> String {
    let entries: String = result
        .headers
        .iter()
        .map(|(key, value)| {
            format!(
                r#"<div class="mb-1"><strong>{}:</strong><br><small class="text-muted">{}</small></div>"#,
                escape_html(key),
                escape_html(value)
            )
        })
        .collect();

    format!(r#"<div style="max-height: 200px; overflow-y: auto;">{}</div>"#, entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::BTreeMap;

    fn json_result() -> AnalysisResult {
        AnalysisResult {
            url: Some("https://api.example.com/v1/posts".to_string()),
            method: Some("GET".to_string()),
            status_code: Some(200),
            response_time_ms: Some(150.0),
            content_type: Some("application/json".to_string()),
            content_length: Some(1536),
            encoding: Some("utf-8".to_string()),
            data_type: Some(DataType::Json),
            response_data: Some(json!({"id": 1, "title": "hello"})),
            security: Some(SecurityInfo {
                https: true,
                authentication: Some("bearer_token".to_string()),
                security_headers: BTreeMap::from([(
                    "x-frame-options".to_string(),
                    "DENY".to_string(),
                )]),
                vulnerabilities: vec![],
            }),
            patterns: Some(PatternInfo {
                rest_api: true,
                versioning: Some("1".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_json_body_is_pretty_printed() {
        let body = response_body(&json_result());
        assert_eq!(body.language, "json");
        assert_eq!(body.text, "{\n  \"id\": 1,\n  \"title\": \"hello\"\n}");
    }

    #[test]
    fn test_text_body_is_verbatim() {
        let result = AnalysisResult {
            data_type: Some(DataType::Text),
            response_data: Some(json!("<xml>ok</xml>")),
            ..Default::default()
        };
        assert_eq!(response_body(&result).text, "<xml>ok</xml>");
    }

    #[test]
    fn test_binary_body_is_truncated() {
        let encoded = "A".repeat(800);
        let result = AnalysisResult {
            data_type: Some(DataType::Binary),
            response_data: Some(Value::String(encoded)),
            ..Default::default()
        };

        let text = response_body(&result).text;
        assert!(text.starts_with("[Binary data - base64 encoded]\n"));
        assert!(text.ends_with("..."));
        assert_eq!(text.matches('A').count(), 500);
    }

    #[test]
    fn test_unknown_body_falls_back() {
        let error_parse = AnalysisResult {
            data_type: Some(DataType::Error),
            response_data: Some(json!("Error parsing response: bad")),
            ..Default::default()
        };
        assert_eq!(
            response_body(&error_parse).text,
            "Error parsing response: bad"
        );

        assert_eq!(
            response_body(&AnalysisResult::default()).text,
            "No response data"
        );
    }

    #[test]
    fn test_render_full_result() {
        let html = render_analysis(&json_result());

        assert!(html.contains(r#"<span class="badge bg-success">200</span>"#));
        assert!(html.contains(r#"<span class="response-time fast">150ms</span>"#));
        assert!(html.contains("1.5 KB"));
        assert!(html.contains("No obvious vulnerabilities detected"));
        assert!(html.contains(r#"<span class="pattern-badge active">REST</span>"#));
        assert!(html.contains(r#"<span class="pattern-badge">GraphQL</span>"#));
        assert!(html.contains(">v1</span>"));
        assert!(html.contains("bearer_token"));
        assert!(html.contains(r#"class="language-json""#));
    }

    #[test]
    fn test_render_lists_vulnerabilities() {
        let mut result = json_result();
        result.security = Some(SecurityInfo {
            vulnerabilities: vec![
                "Unencrypted HTTP connection".to_string(),
                "Missing X-Frame-Options header".to_string(),
            ],
            ..Default::default()
        });

        let html = render_analysis(&result);
        assert_eq!(html.matches("vulnerability-item").count(), 2);
        assert!(!html.contains("No obvious vulnerabilities detected"));
        assert!(html.contains("None found"));
        assert!(html.contains("Disabled"));
    }

    #[test]
    fn test_render_empty_result_is_total() {
        let html = render_analysis(&AnalysisResult::default());
        assert!(html.contains("bg-secondary"));
        assert!(html.contains("Unknown"));
        assert!(html.contains(r#"<span class="badge bg-info">None</span>"#));
        assert!(html.contains("No response data"));
    }

    #[test]
    fn test_render_error_result_inline() {
        let result = AnalysisResult {
            url: Some("https://down.example.com".to_string()),
            error: Some("Connection refused".to_string()),
            ..Default::default()
        };

        let html = render_analysis(&result);
        assert!(html.contains("alert-danger"));
        assert!(html.contains("Connection refused"));
        assert!(!html.contains("basic-info"));
    }

    #[test]
    fn test_render_escapes_backend_text() {
        let mut result = json_result();
        result
            .headers
            .insert("x-evil".to_string(), "<script>alert(1)</script>".to_string());

        let html = render_analysis(&result);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_render_is_idempotent() {
        let result = json_result();
        assert_eq!(render_analysis(&result), render_analysis(&result));
    }
}
