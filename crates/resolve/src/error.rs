//! Error types for the lunisol-resolve crate.

/// Error type for validation failures in the lunisol-resolve crate.
///
/// Absence of a resolution for a given year is not an error (it surfaces
/// as an empty or sparse result); this enum only covers rejected inputs
/// and rejected configurations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ResolveError {
    /// Returned when an anniversary title is empty or whitespace-only.
    #[error("anniversary title must not be empty")]
    EmptyTitle,

    /// Returned when a lunar month is outside the valid range 1..=12.
    #[error("invalid lunar month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a lunar day is outside the valid range 1..=30.
    #[error("invalid lunar day: {day} (must be 1..=30)")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: u8,
    },

    /// Returned when the drift constant is non-finite or non-positive.
    #[error("invalid drift constant: {drift} days/year (must be finite and positive)")]
    InvalidDrift {
        /// The invalid drift value that was provided.
        drift: f64,
    },

    /// Returned when the year range is inverted.
    #[error("invalid year range: {start}..={end} (start must not exceed end)")]
    InvalidYearRange {
        /// First year of the range.
        start: i32,
        /// Last year of the range.
        end: i32,
    },
}
