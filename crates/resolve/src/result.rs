//! Result value types for range generation.

use lunisol_calendar::{CalendarDate, Weekday};

use crate::anniversary::LunarAnniversary;

/// One resolved solar occurrence of the anniversary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedOccurrence {
    year: i32,
    solar_date: CalendarDate,
    weekday: Weekday,
    countdown: String,
}

impl ResolvedOccurrence {
    /// Creates a resolved occurrence.
    pub fn new(year: i32, solar_date: CalendarDate, weekday: Weekday, countdown: String) -> Self {
        Self {
            year,
            solar_date,
            weekday,
            countdown,
        }
    }

    /// Returns the target year this occurrence was resolved for.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the resolved solar date.
    pub fn solar_date(&self) -> CalendarDate {
        self.solar_date
    }

    /// Returns the day of the week.
    pub fn weekday(&self) -> Weekday {
        self.weekday
    }

    /// Returns the countdown label relative to generation-time "today".
    pub fn countdown(&self) -> &str {
        &self.countdown
    }
}

/// The full conversion outcome for one anniversary.
///
/// Occurrences are ascending by year, at most one per year, and every
/// solar date was `>= today` at the moment of generation. An empty
/// occurrence list is the normal "no data" outcome, not a failure.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionResult {
    anniversary: LunarAnniversary,
    occurrences: Vec<ResolvedOccurrence>,
}

impl ConversionResult {
    /// Creates a conversion result.
    pub fn new(anniversary: LunarAnniversary, occurrences: Vec<ResolvedOccurrence>) -> Self {
        Self {
            anniversary,
            occurrences,
        }
    }

    /// Returns the anniversary this result was generated for.
    pub fn anniversary(&self) -> &LunarAnniversary {
        &self.anniversary
    }

    /// Returns the resolved occurrences, ascending by year.
    pub fn occurrences(&self) -> &[ResolvedOccurrence] {
        &self.occurrences
    }

    /// Returns the number of occurrences.
    pub fn len(&self) -> usize {
        self.occurrences.len()
    }

    /// Returns true if no future occurrence was found.
    pub fn is_empty(&self) -> bool {
        self.occurrences.is_empty()
    }
}
