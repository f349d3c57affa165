//! Input validation functions
//!
//! Cross-field and parse-time checks the `validator` derives on the request
//! types cannot express. All validators return `Result<(), String>` and are
//! composed into [`crate::errors::AppError`] at the tracker boundary.

use chrono::{DateTime, NaiveTime, Utc};

/// Validate that a fast ends at or after it starts
pub fn validate_fast_times(started_at: DateTime<Utc>, ended_at: DateTime<Utc>) -> Result<(), String> {
    if ended_at < started_at {
        return Err("Fast end time must not precede start time".to_string());
    }
    Ok(())
}

/// Parse an `HH:MM` clock string into a `NaiveTime`
pub fn parse_clock_time(value: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .map_err(|_| format!("Invalid clock time (expected HH:MM): {}", value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use rstest::rstest;

    #[test]
    fn test_fast_times_ordering() {
        let start = Utc::now();
        assert!(validate_fast_times(start, start).is_ok());
        assert!(validate_fast_times(start, start + Duration::hours(16)).is_ok());
        assert!(validate_fast_times(start, start - Duration::seconds(1)).is_err());
    }

    #[rstest]
    #[case("23:00", true)]
    #[case("00:00", true)]
    #[case("7:05", true)]
    #[case("24:00", false)]
    #[case("23:60", false)]
    #[case("bedtime", false)]
    fn test_clock_time_parsing(#[case] input: &str, #[case] ok: bool) {
        assert_eq!(parse_clock_time(input).is_ok(), ok);
    }
}
