// File: crates/linechart-core/src/format.rs
// Summary: Stock label formatters for ticks and tooltips.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Category labels shown as-is.
pub fn identity_x(label: &str) -> String {
    label.to_string()
}

/// Shortest round-trip rendering of a value (`10.0` -> "10", `2.5` -> "2.5").
pub fn identity_y(v: f64) -> String {
    if v == 0.0 { "0".to_string() } else { format!("{v}") }
}

/// Integer part grouped by thousands ("12,345.5").
pub fn thousands(v: f64) -> String {
    let raw = identity_y(v);
    let (sign, body) = raw.strip_prefix('-').map_or(("", raw.as_str()), |b| ("-", b));
    let (int, frac) = body.split_once('.').map_or((body, None), |(i, f)| (i, Some(f)));
    let mut grouped = String::with_capacity(int.len() + int.len() / 3);
    for (i, ch) in int.chars().enumerate() {
        if i > 0 && (int.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    match frac {
        Some(f) => format!("{sign}{grouped}.{f}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Re-render ISO-8601 date (or date-time) categories with a `chrono` format string.
/// Labels that are not dates pass through unchanged.
pub fn date_label(fmt: &str) -> impl Fn(&str) -> String + Send + Sync + 'static {
    let fmt = fmt.to_string();
    move |label| {
        let s = label.trim();
        if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            return d.format(&fmt).to_string();
        }
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return dt.format(&fmt).to_string();
        }
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
            return dt.format(&fmt).to_string();
        }
        label.to_string()
    }
}
