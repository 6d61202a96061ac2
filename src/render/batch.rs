//! Batch analysis view

use super::{escape_html, method_badge, method_name, outcome_detail, status_badge};
use crate::client::models::AnalysisResult;

/// Aggregate counts shown above the batch timeline
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatchSummary {
    pub total: usize,
    pub successful: usize,
    pub failed: usize,
    /// Rounded mean; missing times count as zero
    pub avg_response_ms: u64,
}

impl BatchSummary {
    pub fn from_results(results: &[AnalysisResult]) -> Self {
        let total = results.len();
        let successful = results.iter().filter(|r| r.is_success()).count();
        let failed = results.iter().filter(|r| r.is_failure()).count();

        let avg_response_ms = if total == 0 {
            0
        } else {
            let sum: f64 = results
                .iter()
                .map(|r| r.response_time_ms.unwrap_or(0.0))
                .sum();
            (sum / total as f64).round().max(0.0) as u64
        };

        Self {
            total,
            successful,
            failed,
            avg_response_ms,
        }
    }
}

pub fn render_batch(results: &[AnalysisResult]) -> String {
    let summary = BatchSummary::from_results(results);

    let entries: String = results.iter().map(timeline_entry).collect();

    format!(
        concat!(
            r#"<div class="card"><div class="card-header"><h5><i class="fas fa-chart-bar"></i> Batch Analysis Results ({} endpoints)</h5></div>"#,
            r#"<div class="card-body"><div class="stats-grid">"#,
            r#"<div class="stat-card"><div class="stat-value">{}</div><div class="stat-label">Successful</div></div>"#,
            r#"<div class="stat-card"><div class="stat-value">{}</div><div class="stat-label">Failed</div></div>"#,
            r#"<div class="stat-card"><div class="stat-value">{}ms</div><div class="stat-label">Avg Response Time</div></div>"#,
            r#"</div><div class="timeline">{}</div></div></div>"#
        ),
        summary.total, summary.successful, summary.failed, summary.avg_response_ms, entries
    )
}

fn timeline_entry(result: &AnalysisResult) -> String {
    let method_class = method_name(result.method.as_deref()).to_lowercase();

    format!(
        concat!(
            r#"<div class="timeline-item"><div class="card endpoint-card {}"><div class="card-body">"#,
            r#"<div class="d-flex justify-content-between align-items-start">"#,
            r#"<div>{}<strong class="ms-2">{}</strong></div><div>{}</div></div>{}"#,
            r#"</div></div></div>"#
        ),
        escape_html(&method_class),
        method_badge(result.method.as_deref()),
        escape_html(result.url.as_deref().unwrap_or_default()),
        status_badge(result.status_code, result.error.as_deref(), ""),
        outcome_detail(
            result.error.as_deref(),
            result.response_time_ms,
            result.content_type.as_deref()
        )
    )
}
