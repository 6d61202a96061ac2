//! Common display utilities and helpers

/// Truncate to `max_chars` characters, marking the cut with an ellipsis
pub fn truncate_string(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Status column: the code, `ERROR` for failed probes, `-` when unknown
pub fn status_cell(status_code: Option<u16>, error: Option<&str>) -> String {
    match (error, status_code) {
        (Some(_), _) => "ERROR".to_string(),
        (None, Some(code)) => code.to_string(),
        (None, None) => "-".to_string(),
    }
}

/// Upper-cased method, defaulting to GET
pub fn method_cell(method: Option<&str>) -> String {
    method
        .filter(|m| !m.is_empty())
        .map_or_else(|| "GET".to_string(), str::to_uppercase)
}

pub fn or_dash(value: Option<&str>) -> String {
    value
        .filter(|v| !v.is_empty())
        .unwrap_or("-")
        .to_string()
}
