//! Validated Gregorian date with day-level arithmetic.

use std::str::FromStr;

use crate::error::CalendarError;
use crate::rata;
use crate::weekday::Weekday;

/// Number of days in each month of a common year (index 0 unused).
const DAYS_PER_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// A date in the proleptic Gregorian calendar.
///
/// Comparable, subtractable in whole days, and shiftable by signed day
/// offsets across month and year boundaries. Construction validates the
/// day against the real month length, including leap-year February.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CalendarDate {
    year: i32,
    month: u8,
    day: u8,
}

impl CalendarDate {
    /// Creates a new `CalendarDate` from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError`] if the month is not in 1..=12 or the day
    /// is invalid for the given month and year.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth { month });
        }
        let max_day = Self::days_in_month(year, month);
        if !(1..=max_day).contains(&day) {
            return Err(CalendarError::InvalidDay {
                year,
                month,
                day,
                max_day,
            });
        }
        Ok(Self { year, month, day })
    }

    /// Creates a `CalendarDate` from a day count since 1970-01-01.
    pub fn from_day_number(days: i64) -> Self {
        let (year, month, day) = rata::ymd_from_day_number(days);
        Self { year, month, day }
    }

    /// Returns true if `year` is a Gregorian leap year.
    pub fn is_leap_year(year: i32) -> bool {
        (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
    }

    /// Returns the number of days in the given month of the given year.
    pub fn days_in_month(year: i32, month: u8) -> u8 {
        if month == 2 && Self::is_leap_year(year) {
            29
        } else {
            DAYS_PER_MONTH[month as usize]
        }
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u8 {
        self.day
    }

    /// Returns the day count since 1970-01-01 (day 0).
    pub fn day_number(self) -> i64 {
        rata::day_number_from_ymd(self.year, self.month, self.day)
    }

    /// Returns the signed whole-day difference `self - other`.
    pub fn diff_days(self, other: Self) -> i64 {
        self.day_number() - other.day_number()
    }

    /// Returns the date shifted by a signed number of days.
    pub fn shift_days(self, days: i64) -> Self {
        Self::from_day_number(self.day_number() + days)
    }

    /// Returns this date with the year replaced.
    ///
    /// February 29 is clamped to February 28 when the target year is not
    /// a leap year, so the substitution is total.
    pub fn with_year(self, year: i32) -> Self {
        let max_day = Self::days_in_month(year, self.month);
        Self {
            year,
            month: self.month,
            day: self.day.min(max_day),
        }
    }

    /// Returns the day of the week.
    pub fn weekday(self) -> Weekday {
        // 1970-01-01 (day 0) was a Thursday, index 4 with Sunday=0.
        Weekday::from_index(self.day_number() + 4)
    }
}

impl std::fmt::Display for CalendarDate {
    /// Formats as `YYYY-MM-DD` (zero-padded).
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for CalendarDate {
    type Err = CalendarError;

    /// Parses a `YYYY-MM-DD` date string.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CalendarError::InvalidFormat {
            input: s.to_string(),
        };
        let mut parts = s.split('-');
        let (Some(y), Some(m), Some(d), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(invalid());
        };
        let year: i32 = y.trim().parse().map_err(|_| invalid())?;
        let month: u8 = m.trim().parse().map_err(|_| invalid())?;
        let day: u8 = d.trim().parse().map_err(|_| invalid())?;
        Self::new(year, month, day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_valid() {
        let date = CalendarDate::new(2025, 1, 29).unwrap();
        assert_eq!(date.year(), 2025);
        assert_eq!(date.month(), 1);
        assert_eq!(date.day(), 29);
    }

    #[test]
    fn new_invalid_month() {
        assert_eq!(
            CalendarDate::new(2025, 13, 1).unwrap_err(),
            CalendarError::InvalidMonth { month: 13 }
        );
        assert_eq!(
            CalendarDate::new(2025, 0, 1).unwrap_err(),
            CalendarError::InvalidMonth { month: 0 }
        );
    }

    #[test]
    fn new_feb_29_common_year() {
        assert_eq!(
            CalendarDate::new(2025, 2, 29).unwrap_err(),
            CalendarError::InvalidDay {
                year: 2025,
                month: 2,
                day: 29,
                max_day: 28,
            }
        );
    }

    #[test]
    fn new_feb_29_leap_year() {
        assert!(CalendarDate::new(2024, 2, 29).is_ok());
        assert!(CalendarDate::new(2000, 2, 29).is_ok());
        assert!(CalendarDate::new(2100, 2, 29).is_err()); // century rule
    }

    #[test]
    fn leap_year_rules() {
        assert!(CalendarDate::is_leap_year(2024));
        assert!(CalendarDate::is_leap_year(2000));
        assert!(!CalendarDate::is_leap_year(2025));
        assert!(!CalendarDate::is_leap_year(1900));
    }

    #[test]
    fn diff_days_signed() {
        let a = CalendarDate::new(2025, 1, 1).unwrap();
        let b = CalendarDate::new(2025, 1, 29).unwrap();
        assert_eq!(b.diff_days(a), 28);
        assert_eq!(a.diff_days(b), -28);
        assert_eq!(a.diff_days(a), 0);
    }

    #[test]
    fn diff_days_across_leap_day() {
        let a = CalendarDate::new(2024, 2, 28).unwrap();
        let b = CalendarDate::new(2024, 3, 1).unwrap();
        assert_eq!(b.diff_days(a), 2);
    }

    #[test]
    fn shift_days_across_year_boundary() {
        let date = CalendarDate::new(2026, 1, 5).unwrap();
        assert_eq!(
            date.shift_days(-11),
            CalendarDate::new(2025, 12, 25).unwrap()
        );
        assert_eq!(date.shift_days(0), date);
    }

    #[test]
    fn shift_roundtrip() {
        let date = CalendarDate::new(2027, 2, 17).unwrap();
        assert_eq!(date.shift_days(100).shift_days(-100), date);
    }

    #[test]
    fn with_year_plain() {
        let date = CalendarDate::new(2026, 2, 17).unwrap();
        assert_eq!(
            date.with_year(2027),
            CalendarDate::new(2027, 2, 17).unwrap()
        );
    }

    #[test]
    fn with_year_clamps_feb_29() {
        let date = CalendarDate::new(2024, 2, 29).unwrap();
        assert_eq!(
            date.with_year(2025),
            CalendarDate::new(2025, 2, 28).unwrap()
        );
        assert_eq!(
            date.with_year(2028),
            CalendarDate::new(2028, 2, 29).unwrap()
        );
    }

    #[test]
    fn weekday_known_dates() {
        // 2025-01-29 was a Wednesday (Seollal).
        assert_eq!(
            CalendarDate::new(2025, 1, 29).unwrap().weekday(),
            Weekday::Wednesday
        );
        // 1970-01-01 was a Thursday.
        assert_eq!(
            CalendarDate::new(1970, 1, 1).unwrap().weekday(),
            Weekday::Thursday
        );
        // 2000-01-01 was a Saturday.
        assert_eq!(
            CalendarDate::new(2000, 1, 1).unwrap().weekday(),
            Weekday::Saturday
        );
    }

    #[test]
    fn ord_follows_chronology() {
        let earlier = CalendarDate::new(2025, 12, 31).unwrap();
        let later = CalendarDate::new(2026, 1, 1).unwrap();
        assert!(earlier < later);
        let same_year = CalendarDate::new(2025, 6, 1).unwrap();
        assert!(same_year < earlier);
    }

    #[test]
    fn display_zero_padded() {
        let date = CalendarDate::new(2025, 1, 5).unwrap();
        assert_eq!(date.to_string(), "2025-01-05");
    }

    #[test]
    fn parse_valid() {
        let date: CalendarDate = "2025-01-29".parse().unwrap();
        assert_eq!(date, CalendarDate::new(2025, 1, 29).unwrap());
    }

    #[test]
    fn parse_trims_whitespace_in_fields() {
        // The reference data source carries stray spaces around fields.
        let date: CalendarDate = "2025-01- 29".parse().unwrap();
        assert_eq!(date, CalendarDate::new(2025, 1, 29).unwrap());
    }

    #[test]
    fn parse_invalid_format() {
        for input in ["2025/01/29", "2025-01", "2025-01-29-1", "", "not-a-date"] {
            assert!(
                input.parse::<CalendarDate>().is_err(),
                "expected parse failure for {input:?}"
            );
        }
    }

    #[test]
    fn parse_invalid_calendar_day() {
        let err = "2025-02-30".parse::<CalendarDate>().unwrap_err();
        assert!(matches!(err, CalendarError::InvalidDay { .. }));
    }

    #[test]
    fn copy_trait() {
        fn assert_copy<T: Copy>() {}
        assert_copy::<CalendarDate>();
    }
}
