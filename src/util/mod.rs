//
//  jira-fetcher
//  util/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Utility Module
//!
//! Small helpers shared by the fetcher and the CLI.
//!
//! - **Time Utilities**: [`normalize_date`]
//! - **String Utilities**: [`truncate`]

use chrono::DateTime;

/// Timestamp layout Jira uses for `created`, `updated` and comment dates,
/// e.g. `2024-01-01T10:00:00.000+0000`.
const JIRA_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f%z";

/// Reduces a Jira timestamp to its `YYYY-MM-DD` date.
///
/// Accepts fractional seconds followed by an offset of the form `+HHMM`,
/// `-HHMM` or `Z` (RFC 3339 offsets such as `+09:00` also work). The date is
/// taken in the timestamp's own offset, not converted to UTC.
///
/// # Returns
///
/// - the date portion for a parseable timestamp
/// - an empty string for empty input
/// - the input unchanged for anything else
///
/// # Example
///
/// ```rust
/// use jira_fetcher::util::normalize_date;
///
/// assert_eq!(normalize_date("2024-01-01T10:00:00.000+0900"), "2024-01-01");
/// assert_eq!(normalize_date("2024-01-01T10:00:00.000Z"), "2024-01-01");
/// assert_eq!(normalize_date(""), "");
/// assert_eq!(normalize_date("invalid-date"), "invalid-date");
/// ```
///
/// # Notes
///
/// An unparseable value is deliberately passed through rather than
/// reported: the result only feeds best-effort metadata.
pub fn normalize_date(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    match DateTime::parse_from_str(raw, JIRA_TIMESTAMP_FORMAT)
        .or_else(|_| DateTime::parse_from_rfc3339(raw))
    {
        Ok(timestamp) => timestamp.date_naive().format("%Y-%m-%d").to_string(),
        Err(_) => {
            tracing::debug!("Could not parse timestamp '{}', keeping it as is", raw);
            raw.to_string()
        }
    }
}

/// Truncates a string to `max_len` characters, ending in `...` when cut.
///
/// # Example
///
/// ```rust
/// use jira_fetcher::util::truncate;
///
/// assert_eq!(truncate("hello", 10), "hello");
/// assert_eq!(truncate("hello world", 8), "hello...");
/// ```
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len > 3 {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    } else {
        s.chars().take(max_len).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_date_offsets() {
        assert_eq!(normalize_date("2024-01-01T10:00:00.000+0000"), "2024-01-01");
        assert_eq!(normalize_date("2024-01-01T10:00:00.000-0000"), "2024-01-01");
        assert_eq!(normalize_date("2024-01-01T10:00:00.000+0900"), "2024-01-01");
        assert_eq!(normalize_date("2024-01-01T10:00:00.000Z"), "2024-01-01");
    }

    #[test]
    fn test_normalize_date_keeps_local_day() {
        // 23:30 at -0500 is already the next day in UTC.
        assert_eq!(normalize_date("2024-03-15T23:30:00.000-0500"), "2024-03-15");
    }

    #[test]
    fn test_normalize_date_fallbacks() {
        assert_eq!(normalize_date(""), "");
        assert_eq!(normalize_date("invalid-date"), "invalid-date");
        assert_eq!(normalize_date("2024-13-45T10:00:00.000+0000"), "2024-13-45T10:00:00.000+0000");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello world", 8), "hello...");
        assert_eq!(truncate("héllo wörld", 8), "héllo...");
    }
}
