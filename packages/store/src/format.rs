//! Display helpers: markup stripping, excerpts and relative timestamps.

use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());

/// Remove HTML tags from rich-text markup.
pub fn strip_markup(markup: &str) -> String {
    TAG_RE.replace_all(markup, "").into_owned()
}

/// Truncate to at most `max` characters, never splitting a code point.
pub fn truncate(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Plain-text preview of note content.
pub fn excerpt(content: &str, max: usize) -> String {
    let plain = strip_markup(content);
    let plain = plain.trim();
    if plain.is_empty() {
        return "No content".to_string();
    }
    if plain.chars().count() > max {
        format!("{}...", truncate(plain, max).trim_end())
    } else {
        plain.to_string()
    }
}

/// "Saved 5 minutes ago" style timestamp. Absent or unrepresentable
/// timestamps render as `Unknown`.
pub fn format_timestamp(timestamp: Option<i64>, now: i64) -> String {
    match timestamp.and_then(DateTime::<Utc>::from_timestamp_millis) {
        Some(at) => relative_time(at.timestamp_millis(), now),
        None => "Unknown".to_string(),
    }
}

const MINUTES_IN_DAY: i64 = 1440;
const MINUTES_IN_MONTH: i64 = 43_200;

/// Human distance between `timestamp` and `now`, with an `ago`/`in` suffix.
/// A distance that does not fit in an `i64` renders as `Unknown`.
pub fn relative_time(timestamp: i64, now: i64) -> String {
    let Some(diff_ms) = now.checked_sub(timestamp) else {
        return "Unknown".to_string();
    };
    let distance = distance_words(diff_ms.unsigned_abs());
    if diff_ms < 0 {
        format!("in {distance}")
    } else {
        format!("{distance} ago")
    }
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("1 {unit}")
    } else {
        format!("{n} {unit}s")
    }
}

fn distance_words(ms: u64) -> String {
    let seconds = (ms / 1000) as i64;
    let minutes = (seconds as f64 / 60.0).round() as i64;

    if minutes < 1 {
        "less than a minute".to_string()
    } else if minutes < 45 {
        plural(minutes, "minute")
    } else if minutes < 90 {
        "about 1 hour".to_string()
    } else if minutes < MINUTES_IN_DAY {
        let hours = (minutes as f64 / 60.0).round() as i64;
        format!("about {}", plural(hours, "hour"))
    } else if minutes < 2520 {
        "1 day".to_string()
    } else if minutes < MINUTES_IN_MONTH {
        let days = (minutes as f64 / MINUTES_IN_DAY as f64).round() as i64;
        plural(days, "day")
    } else if minutes < 2 * MINUTES_IN_MONTH {
        let months = (minutes as f64 / MINUTES_IN_MONTH as f64).round() as i64;
        format!("about {}", plural(months, "month"))
    } else {
        let months = minutes / MINUTES_IN_MONTH;
        if months < 12 {
            return plural(months, "month");
        }
        let years = months / 12;
        match months % 12 {
            0..=2 => format!("about {}", plural(years, "year")),
            3..=8 => format!("over {}", plural(years, "year")),
            _ => format!("almost {}", plural(years + 1, "year")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECOND: i64 = 1000;
    const MINUTE: i64 = 60 * SECOND;
    const HOUR: i64 = 60 * MINUTE;
    const DAY: i64 = 24 * HOUR;
    const NOW: i64 = 1_700_000_000_000;

    #[test]
    fn strips_tags() {
        assert_eq!(strip_markup("<p>Hello <strong>there</strong></p>"), "Hello there");
        assert_eq!(strip_markup("plain"), "plain");
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate("héllo", 2), "hé");
        assert_eq!(truncate("abc", 10), "abc");
    }

    #[test]
    fn excerpt_variants() {
        assert_eq!(excerpt("", 60), "No content");
        assert_eq!(excerpt("<p>  </p>", 60), "No content");
        assert_eq!(excerpt("<p>short</p>", 60), "short");
        assert_eq!(excerpt("<p>abcdefghij</p>", 4), "abcd...");
    }

    #[test]
    fn relative_time_buckets() {
        assert_eq!(relative_time(NOW - 10 * SECOND, NOW), "less than a minute ago");
        assert_eq!(relative_time(NOW - MINUTE, NOW), "1 minute ago");
        assert_eq!(relative_time(NOW - 5 * MINUTE, NOW), "5 minutes ago");
        assert_eq!(relative_time(NOW - 50 * MINUTE, NOW), "about 1 hour ago");
        assert_eq!(relative_time(NOW - 2 * HOUR, NOW), "about 2 hours ago");
        assert_eq!(relative_time(NOW - DAY, NOW), "1 day ago");
        assert_eq!(relative_time(NOW - 3 * DAY, NOW), "3 days ago");
        assert_eq!(relative_time(NOW - 40 * DAY, NOW), "about 1 month ago");
        assert_eq!(relative_time(NOW - 100 * DAY, NOW), "3 months ago");
        assert_eq!(relative_time(NOW - 370 * DAY, NOW), "about 1 year ago");
        assert_eq!(relative_time(NOW + 5 * MINUTE, NOW), "in 5 minutes");
    }

    #[test]
    fn extreme_distances_do_not_overflow() {
        assert_eq!(relative_time(i64::MIN, NOW), "Unknown");
        assert_eq!(relative_time(i64::MAX, -NOW), "Unknown");
        assert!(relative_time(0, NOW).ends_with("years ago"));
    }

    #[test]
    fn malformed_timestamps_render_unknown() {
        assert_eq!(format_timestamp(None, NOW), "Unknown");
        assert_eq!(format_timestamp(Some(i64::MAX), NOW), "Unknown");
        assert_eq!(format_timestamp(Some(i64::MIN), NOW), "Unknown");
        assert_eq!(format_timestamp(Some(NOW - 3 * DAY), NOW), "3 days ago");
    }
}
