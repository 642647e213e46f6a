use apputil::utils::datetime::*;
use chrono::{Duration, TimeZone, Utc};

#[test]
fn test_parse_rfc3339_valid() {
    let t = parse_rfc3339("2021-06-16T14:30:00Z").unwrap();
    assert_eq!(t, Utc.with_ymd_and_hms(2021, 6, 16, 14, 30, 0).unwrap().fixed_offset());
}

#[test]
fn test_parse_rfc3339_invalid_minute() {
    assert!(parse_rfc3339("2021-06-16T14:90:00Z").is_err());
}

#[test]
fn test_parse_rfc3339_missing_offset() {
    assert!(parse_rfc3339("2021-06-16T14:30:00").is_err());
}

#[test]
fn test_parse_rfc3339_space_separator() {
    assert!(parse_rfc3339("2021-06-16 14:30:00Z").is_err());
    assert!(parse_rfc3339("2021-06-16T14:30:00.Z").is_err());
}

#[test]
fn test_add_hours() {
    let now = Utc.with_ymd_and_hms(2023, 12, 31, 23, 0, 0).unwrap().fixed_offset();
    let later = add_hours(now, 2);
    assert_eq!(later, Utc.with_ymd_and_hms(2024, 1, 1, 1, 0, 0).unwrap().fixed_offset());
    assert_eq!(add_hours(now, -24), now - Duration::days(1));
}

#[test]
fn test_is_expired_at_boundary() {
    let now = Utc.with_ymd_and_hms(2023, 12, 25, 9, 0, 0).unwrap().fixed_offset();
    assert!(!is_expired_at(&now, &now));
    assert!(is_expired_at(&(now - Duration::seconds(1)), &now));
    assert!(!is_expired_at(&(now + Duration::seconds(1)), &now));
}

#[test]
fn test_format_ordinal_date_uses_own_offset() {
    // 23:30 UTC on the 1st is already the 2nd at +05:30
    let t = parse_rfc3339("2024-01-02T05:00:00+05:30").unwrap();
    assert_eq!(format_ordinal_date(&t), "2nd Jan");
    assert_eq!(format_ordinal_date(&t.with_timezone(&Utc).fixed_offset()), "1st Jan");
}

#[test]
fn test_format_ordinal_date_months() {
    let t = Utc.with_ymd_and_hms(2024, 12, 13, 0, 0, 0).unwrap().fixed_offset();
    assert_eq!(format_ordinal_date(&t), "13th Dec");
}
