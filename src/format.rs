//! Display Formatting
//!
//! Helpers for rendering wire values in the table.

use chrono::DateTime;

/// Shown for timestamps the store hands back in a form we cannot parse
const DATE_PLACEHOLDER: &str = "—";

/// Format an ISO-8601 request timestamp as e.g. "Mar 11, 2024"
pub fn format_request_date(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(date) => date.format("%b %-d, %Y").to_string(),
        Err(_) => DATE_PLACEHOLDER.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_request_date() {
        assert_eq!(format_request_date("2024-03-11T00:00:00Z"), "Mar 11, 2024");
    }

    #[test]
    fn test_single_digit_day_is_not_padded() {
        assert_eq!(format_request_date("2023-12-05T14:30:00Z"), "Dec 5, 2023");
    }

    #[test]
    fn test_offset_timestamps_keep_their_local_date() {
        assert_eq!(format_request_date("2024-06-01T23:00:00+09:00"), "Jun 1, 2024");
    }

    #[test]
    fn test_unparseable_input_renders_placeholder() {
        assert_eq!(format_request_date("not a date"), DATE_PLACEHOLDER);
        assert_eq!(format_request_date(""), DATE_PLACEHOLDER);
        // Date without a time part is not a full timestamp
        assert_eq!(format_request_date("2024-03-11"), DATE_PLACEHOLDER);
    }
}
