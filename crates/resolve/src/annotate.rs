//! Day-of-week and D-Day countdown annotation.

use lunisol_calendar::{CalendarDate, Weekday};

/// Weekday and countdown derived for one resolved solar date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    weekday: Weekday,
    countdown: String,
}

impl Annotation {
    /// Returns the day of the week.
    pub fn weekday(&self) -> Weekday {
        self.weekday
    }

    /// Returns the countdown label (`D-n`, `D+n`, or `D-DAY`).
    pub fn countdown(&self) -> &str {
        &self.countdown
    }
}

/// Annotates a solar date relative to an injected "today".
///
/// Both dates are whole calendar days, so the countdown is the plain
/// day-number difference: `D-n` for n days ahead, `D+n` for n days past,
/// `D-DAY` when the dates coincide.
pub fn annotate(date: CalendarDate, today: CalendarDate) -> Annotation {
    Annotation {
        weekday: date.weekday(),
        countdown: countdown(date, today),
    }
}

/// Formats the signed countdown label for `date` relative to `today`.
pub fn countdown(date: CalendarDate, today: CalendarDate) -> String {
    let delta = date.diff_days(today);
    if delta > 0 {
        format!("D-{delta}")
    } else if delta < 0 {
        format!("D+{}", delta.abs())
    } else {
        "D-DAY".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> CalendarDate {
        s.parse().unwrap()
    }

    #[test]
    fn countdown_future() {
        assert_eq!(countdown(date("2025-01-29"), date("2025-01-01")), "D-28");
        assert_eq!(countdown(date("2025-01-02"), date("2025-01-01")), "D-1");
    }

    #[test]
    fn countdown_same_day() {
        assert_eq!(countdown(date("2025-01-01"), date("2025-01-01")), "D-DAY");
    }

    #[test]
    fn countdown_past() {
        assert_eq!(countdown(date("2024-12-31"), date("2025-01-01")), "D+1");
        assert_eq!(countdown(date("2024-01-01"), date("2025-01-01")), "D+366");
    }

    #[test]
    fn countdown_spans_year_boundary() {
        assert_eq!(countdown(date("2026-01-01"), date("2025-12-31")), "D-1");
    }

    #[test]
    fn annotate_combines_weekday_and_countdown() {
        // 2025-01-29 was a Wednesday.
        let a = annotate(date("2025-01-29"), date("2025-01-01"));
        assert_eq!(a.weekday(), Weekday::Wednesday);
        assert_eq!(a.countdown(), "D-28");
    }
}
