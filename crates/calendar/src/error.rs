//! Error types for the lunisol-calendar crate.

/// Error type for all fallible operations in the lunisol-calendar crate.
///
/// Covers validation failures for month numbers and day-within-month
/// values in the Gregorian calendar, plus `YYYY-MM-DD` parse failures.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a day number exceeds the number of days in the given
    /// month of the given year.
    #[error("invalid day: {day} for month {month} of year {year} (max {max_day})")]
    InvalidDay {
        /// The year for which the day is invalid (February length varies).
        year: i32,
        /// The month for which the day is invalid.
        month: u8,
        /// The invalid day number that was provided.
        day: u8,
        /// The maximum valid day for the given month and year.
        max_day: u8,
    },

    /// Returned when a date string does not match the `YYYY-MM-DD` format.
    #[error("invalid date string: {input:?} (expected YYYY-MM-DD)")]
    InvalidFormat {
        /// The string that failed to parse.
        input: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_month() {
        let err = CalendarError::InvalidMonth { month: 13 };
        assert_eq!(err.to_string(), "invalid month: 13 (must be 1..=12)");
    }

    #[test]
    fn error_invalid_day() {
        let err = CalendarError::InvalidDay {
            year: 2025,
            month: 2,
            day: 29,
            max_day: 28,
        };
        assert_eq!(
            err.to_string(),
            "invalid day: 29 for month 2 of year 2025 (max 28)"
        );
    }

    #[test]
    fn error_invalid_format() {
        let err = CalendarError::InvalidFormat {
            input: "2025/01/29".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid date string: \"2025/01/29\" (expected YYYY-MM-DD)"
        );
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<CalendarError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<CalendarError>();
    }
}
