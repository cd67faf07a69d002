//! DateTime formatting and arithmetic used by log lines and cookies.

use chrono::{DateTime, Datelike, Duration, TimeZone, Timelike, Utc};

use crate::error::UtilsError;

/// Formats a log timestamp as `D/M/YYYY - H:M:S.mmm`.
///
/// No component is zero-padded. The month is the calendar month (1-12).
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use dputils_domain::common::format_timestamp;
///
/// let dt = Utc.with_ymd_and_hms(2024, 3, 5, 9, 4, 7).unwrap()
///     + chrono::Duration::milliseconds(12);
/// assert_eq!(format_timestamp(&dt), "5/3/2024 - 9:4:7.12");
/// ```
pub fn format_timestamp<Tz: TimeZone>(dt: &DateTime<Tz>) -> String {
    format!(
        "{}/{}/{} - {}:{}:{}.{}",
        dt.day(),
        dt.month(),
        dt.year(),
        dt.hour(),
        dt.minute(),
        dt.second(),
        // leap seconds report 1000..=1999
        dt.timestamp_subsec_millis() % 1000
    )
}

/// Formats an instant the way `Date.prototype.toUTCString` does (RFC 1123).
///
/// ```
/// use chrono::{DateTime, Utc};
/// use dputils_domain::common::format_rfc1123;
///
/// assert_eq!(format_rfc1123(&DateTime::<Utc>::UNIX_EPOCH), "Thu, 01 Jan 1970 00:00:00 GMT");
/// ```
pub fn format_rfc1123(dt: &DateTime<Utc>) -> String {
    dt.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

/// Adds a signed millisecond offset to `now`.
///
/// Returns `None` when the result falls outside the representable range.
pub fn offset_millis(now: DateTime<Utc>, millis: i64) -> Option<DateTime<Utc>> {
    now.checked_add_signed(Duration::try_milliseconds(millis)?)
}

/// Milliseconds from `now` until `future`; negative when `future` is past.
pub fn remaining_millis(future: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (future - now).num_milliseconds()
}

/// Parses an RFC3339 timestamp string into UTC.
///
/// # Errors
///
/// Returns `UtilsError::InvalidInput` if the string is not valid RFC3339.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, UtilsError> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| UtilsError::invalid_input(format!("'{}' is not an RFC3339 date: {}", s, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32, ms: i64) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s)
            .single()
            .expect("valid date")
            + Duration::milliseconds(ms)
    }

    #[test]
    fn test_format_timestamp_is_not_padded() {
        assert_eq!(format_timestamp(&at(2024, 1, 2, 3, 4, 5, 6)), "2/1/2024 - 3:4:5.6");
    }

    #[test]
    fn test_format_timestamp_two_digit_components() {
        assert_eq!(
            format_timestamp(&at(2023, 12, 31, 23, 59, 58, 999)),
            "31/12/2023 - 23:59:58.999"
        );
    }

    #[test]
    fn test_format_timestamp_midnight_zero_millis() {
        assert_eq!(format_timestamp(&at(2020, 6, 15, 0, 0, 0, 0)), "15/6/2020 - 0:0:0.0");
    }

    #[test]
    fn test_format_timestamp_uses_given_offset() {
        let offset = FixedOffset::east_opt(2 * 3600).expect("valid offset");
        let local = at(2024, 1, 1, 23, 30, 0, 0).with_timezone(&offset);
        assert_eq!(format_timestamp(&local), "2/1/2024 - 1:30:0.0");
    }

    #[test]
    fn test_format_rfc1123() {
        assert_eq!(
            format_rfc1123(&at(2024, 3, 5, 9, 4, 7, 0)),
            "Tue, 05 Mar 2024 09:04:07 GMT"
        );
    }

    #[test]
    fn test_offset_and_remaining_millis() {
        let now = at(2024, 1, 1, 0, 0, 0, 0);
        let later = offset_millis(now, 1_500).expect("in range");
        assert_eq!(remaining_millis(later, now), 1_500);
        assert_eq!(remaining_millis(now, later), -1_500);
    }

    #[test]
    fn test_parse_datetime() {
        let dt = parse_datetime("2024-01-15T10:30:00+05:00").expect("valid RFC3339");
        assert_eq!(dt, at(2024, 1, 15, 5, 30, 0, 0));
        assert!(matches!(
            parse_datetime("not-a-date"),
            Err(UtilsError::InvalidInput(_))
        ));
    }
}
