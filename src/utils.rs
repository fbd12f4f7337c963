/// Utility functions
use chrono::{DateTime, Duration, SecondsFormat, Utc};
use serde_json::Value;

/// Check for a `YYYY-MM-DD` shaped string (digits only, no calendar check)
pub fn is_iso_date(s: &str) -> bool {
    let b = s.as_bytes();
    b.len() == 10
        && b.iter().enumerate().all(|(i, c)| match i {
            4 | 7 => *c == b'-',
            _ => c.is_ascii_digit(),
        })
}

/// Convert a float into a JSON number, keeping whole values as integers
pub fn json_number(x: f64) -> Value {
    if x.fract() == 0.0 && x.abs() < i64::MAX as f64 {
        Value::from(x as i64)
    } else {
        Value::from(x)
    }
}

/// `(start, end)` calendar dates covering the trailing `days` up to `now`
pub fn trailing_window(now: DateTime<Utc>, days: i64) -> (String, String) {
    let to = now.date_naive();
    let from = (now - Duration::days(days)).date_naive();
    (from.to_string(), to.to_string())
}

/// ISO-8601 timestamp (millisecond precision, `Z` suffix) `minutes` before `now`
pub fn minutes_ago(now: DateTime<Utc>, minutes: i64) -> String {
    (now - Duration::minutes(minutes)).to_rfc3339_opts(SecondsFormat::Millis, true)
}
