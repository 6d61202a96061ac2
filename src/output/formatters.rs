//! Reusable formatting utilities for rendered output
//!
//! This module provides common formatting functions for timestamps, byte
//! counts, and response times used across multiple views.

use chrono::{DateTime, Local, NaiveDateTime, TimeZone};

/// Format an ISO 8601 timestamp as a local date/time string.
///
/// Timestamps without an offset are taken as local time. Returns "N/A" when
/// absent and the raw input when it cannot be parsed.
///
/// # Example output
/// `1/15/2025, 2:30:00 PM`
pub fn format_timestamp_local(timestamp: Option<&str>) -> String {
    let Some(raw) = timestamp.filter(|t| !t.trim().is_empty()) else {
        return "N/A".to_string();
    };

    let local = if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        Some(dt.with_timezone(&Local))
    } else {
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
            .ok()
            .and_then(|naive| Local.from_local_datetime(&naive).earliest())
    };

    match local {
        Some(dt) => dt.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string(),
        None => raw.to_string(),
    }
}

/// Format a byte count using base-1024 units with two-decimal rounding.
///
/// Trailing zeros are dropped, zero renders as `0 Bytes`, and a missing
/// count renders as `Unknown`.
///
/// # Example output
/// - `0 Bytes`
/// - `1.5 KB`
/// - `1 MB`
pub fn format_bytes(bytes: Option<u64>) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

    let Some(bytes) = bytes else {
        return "Unknown".to_string();
    };
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let rounded = (value * 100.0).round() / 100.0;
    format!("{} {}", rounded, UNITS[unit])
}

/// Format a response time in milliseconds as reported by the backend.
///
/// # Example output
/// - `123.45ms`
/// - `42ms`
pub fn format_ms(ms: Option<f64>) -> String {
    match ms {
        Some(ms) => format!("{}ms", ms),
        None => "N/A".to_string(),
    }
}
