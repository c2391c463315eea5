//! Reusable formatting utilities for CLI output

use chrono::TimeDelta;

/// Date part of a server timestamp (`2024-01-01T10:00:00.123` -> `2024-01-01`)
pub fn short_date(timestamp: &str) -> String {
    match timestamp.split_once('T') {
        Some((date, _)) => date.to_string(),
        None => timestamp.to_string(),
    }
}

/// Human readable remaining time, e.g. `1h 05m` or `12m`
pub fn format_remaining(remaining: TimeDelta) -> String {
    let hours = remaining.num_hours();
    let mins = remaining.num_minutes() % 60;
    if hours > 0 {
        format!("{}h {:02}m", hours, mins)
    } else {
        format!("{}m", mins.max(0))
    }
}
