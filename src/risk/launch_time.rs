use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use thiserror::Error;

pub const ACCEPTED_FORMATS: &str = "YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid date format for '{value}'. Use {}.", ACCEPTED_FORMATS)]
pub struct LaunchTimeError {
    pub value: String,
}

/// Parse a launch time; values without a zone are taken as UTC.
pub fn parse_launch_time(value: &str) -> Result<DateTime<Utc>, LaunchTimeError> {
    let s = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(naive.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN).and_utc());
    }

    Err(LaunchTimeError {
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn naive_datetime_is_utc() {
        assert_eq!(
            parse_launch_time("2025-10-04T12:00:00"),
            Ok(Utc.with_ymd_and_hms(2025, 10, 4, 12, 0, 0).unwrap())
        );
    }

    #[test]
    fn date_only_is_midnight_utc() {
        assert_eq!(
            parse_launch_time("2025-10-04"),
            Ok(Utc.with_ymd_and_hms(2025, 10, 4, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn zoned_time_is_converted() {
        assert_eq!(
            parse_launch_time("2025-10-04T15:00:00+03:00"),
            Ok(Utc.with_ymd_and_hms(2025, 10, 4, 12, 0, 0).unwrap())
        );
    }

    #[test]
    fn rejects_other_formats() {
        for bad in ["04.10.2025", "2025-13-01", "tomorrow", ""] {
            let err = parse_launch_time(bad).unwrap_err();
            assert_eq!(err.value, bad);
        }
        let err = parse_launch_time("04/10/2025").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid date format for '04/10/2025'. Use YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS."
        );
    }
}
