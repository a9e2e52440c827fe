use chrono::{DateTime, Utc};

/// Formats a backend timestamp (epoch milliseconds as text) for display.
/// Anything that is not a millisecond count is shown unchanged.
pub fn format_timestamp(raw: &str) -> String {
    raw.trim()
        .parse::<i64>()
        .ok()
        .and_then(DateTime::<Utc>::from_timestamp_millis)
        .map(|dt| dt.format("%a %b %d %Y %H:%M UTC").to_string())
        .unwrap_or_else(|| raw.to_string())
}

pub fn format_optional_timestamp(raw: Option<&str>) -> String {
    raw.map(format_timestamp).unwrap_or_else(|| "-".to_string())
}

pub fn format_amount(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.2}", v),
        None => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_epoch_millis() {
        assert_eq!(format_timestamp("0"), "Thu Jan 01 1970 00:00 UTC");
        assert_eq!(format_timestamp("1718000000000"), "Mon Jun 10 2024 06:13 UTC");
    }

    #[test]
    fn non_numeric_timestamps_pass_through() {
        assert_eq!(format_timestamp("2026-11-01"), "2026-11-01");
        assert_eq!(format_optional_timestamp(None), "-");
    }

    #[test]
    fn amounts_use_two_decimals() {
        assert_eq!(format_amount(Some(12.5)), "12.50");
        assert_eq!(format_amount(None), "-");
    }
}
