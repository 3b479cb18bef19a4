use chrono::{DateTime, Local};

/// Placeholder for values that could not be computed
pub const NOT_AVAILABLE: &str = "n/a";

/// Right-aligned fixed point value with unit, or "n/a"
pub fn format_optional(value: Option<f64>, unit: &str) -> String {
    match value {
        Some(v) => format!("{:>8.2} {}", v, unit),
        None => format!("{:>8}", NOT_AVAILABLE),
    }
}

/// Format timestamp in human-readable format (YYYY-MM-DD HH:MM:SS)
pub fn format_timestamp(time: &DateTime<Local>) -> String {
    time.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Escape text for inclusion in HTML element content or attributes
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
