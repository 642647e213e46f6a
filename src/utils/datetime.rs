//! Date and time utility functions
//!
//! Pure helpers behind the time-related [`AppUtil`](super::app_util::AppUtil)
//! operations. They take "now" as an argument so they can be tested against
//! fixed instants.

use chrono::{DateTime, Datelike, Duration};

use super::clock::Timestamp;
use crate::constants::MONTH_ABBREVIATION_FORMAT;
use crate::error::{AppUtilError, Result};

/// Byte offset of the date/time separator in an RFC 3339 date-time.
const DATE_TIME_SEPARATOR_INDEX: usize = 10;

/// Parse an RFC 3339 date-time, keeping the offset it carries.
///
/// The date and time must be joined by `T` (or `t`). chrono alone also
/// accepts a space there, which RFC 3339 `date-time` does not.
///
/// # Arguments
/// * `text` - Date-time string such as `2021-06-16T14:30:00Z`
///
/// # Returns
/// * `Result<Timestamp>` - Parsed instant or [`AppUtilError::Parse`]
pub fn parse_rfc3339(text: &str) -> Result<Timestamp> {
    let parse_error = |reason: String| AppUtilError::Parse {
        input: text.to_string(),
        reason,
    };

    match text.as_bytes().get(DATE_TIME_SEPARATOR_INDEX) {
        Some(b'T') | Some(b't') => {}
        Some(_) => return Err(parse_error("expected 'T' between date and time".to_string())),
        None => return Err(parse_error("input is too short".to_string())),
    }

    DateTime::parse_from_rfc3339(text).map_err(|e| parse_error(e.to_string()))
}

/// Instant `hours` hours after `now`; negative values land in the past.
pub fn add_hours(now: Timestamp, hours: i32) -> Timestamp {
    now + Duration::hours(i64::from(hours))
}

/// Whether `t` lies strictly before `now`. `t == now` is not expired.
pub fn is_expired_at(t: &Timestamp, now: &Timestamp) -> bool {
    t < now
}

/// Ordinal suffix for a day of month.
pub fn ordinal_suffix(day: u32) -> &'static str {
    match day {
        1 | 21 | 31 => "st",
        2 | 22 => "nd",
        3 | 23 => "rd",
        _ => "th",
    }
}

/// Format as day-of-month with ordinal suffix and abbreviated month
///
/// Uses the calendar day in the timestamp's own offset.
///
/// # Returns
/// * `String` - e.g. "1st Jan", "23rd Mar"
pub fn format_ordinal_date(t: &Timestamp) -> String {
    let day = t.day();
    format!("{}{} {}", day, ordinal_suffix(day), t.format(MONTH_ABBREVIATION_FORMAT))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinal_suffix_table() {
        let expected = [
            (1, "st"),
            (2, "nd"),
            (3, "rd"),
            (4, "th"),
            (11, "th"),
            (12, "th"),
            (13, "th"),
            (21, "st"),
            (22, "nd"),
            (23, "rd"),
            (30, "th"),
            (31, "st"),
        ];
        for (day, suffix) in expected {
            assert_eq!(ordinal_suffix(day), suffix, "day {}", day);
        }
    }

    #[test]
    fn test_parse_requires_t_separator() {
        assert!(parse_rfc3339("2021-06-16t14:30:00Z").is_ok());
        for input in ["2021-06-16 14:30:00Z", "2021-06-16_14:30:00Z", "2021-06-16"] {
            match parse_rfc3339(input) {
                Err(AppUtilError::Parse { input: reported, .. }) => assert_eq!(reported, input),
                other => panic!("expected parse error for {:?}, got {:?}", input, other),
            }
        }
    }

    #[test]
    fn test_parse_keeps_offset() {
        let t = parse_rfc3339("2021-06-16T23:30:00+05:30").unwrap();
        assert_eq!(t.offset().local_minus_utc(), 5 * 3600 + 30 * 60);
        assert_eq!(format_ordinal_date(&t), "16th Jun");
    }
}
