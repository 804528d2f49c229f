//! Validated lunar anniversary input.

use crate::error::ResolveError;

/// A recurring anniversary expressed as a lunar-calendar month and day.
///
/// The day range 1..=30 is intentionally looser than the real lunar
/// calendar (which alternates 29- and 30-day months and inserts leap
/// months): day-count irregularity is not modeled, and a day-30 request
/// simply resolves through the approximation like any other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LunarAnniversary {
    title: String,
    month: u8,
    day: u8,
}

impl LunarAnniversary {
    /// Creates a validated lunar anniversary.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::EmptyTitle`] if the title is empty or
    /// whitespace-only, [`ResolveError::InvalidMonth`] if the month is
    /// not in 1..=12, or [`ResolveError::InvalidDay`] if the day is not
    /// in 1..=30.
    pub fn new(title: impl Into<String>, month: u8, day: u8) -> Result<Self, ResolveError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ResolveError::EmptyTitle);
        }
        if !(1..=12).contains(&month) {
            return Err(ResolveError::InvalidMonth { month });
        }
        if !(1..=30).contains(&day) {
            return Err(ResolveError::InvalidDay { day });
        }
        Ok(Self { title, month, day })
    }

    /// Returns the anniversary title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the lunar month (1..=12).
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Returns the lunar day (1..=30).
    pub fn day(&self) -> u8 {
        self.day
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_valid() {
        let a = LunarAnniversary::new("할머니 생신", 8, 15).unwrap();
        assert_eq!(a.title(), "할머니 생신");
        assert_eq!(a.month(), 8);
        assert_eq!(a.day(), 15);
    }

    #[test]
    fn empty_title_rejected() {
        assert_eq!(
            LunarAnniversary::new("", 1, 1).unwrap_err(),
            ResolveError::EmptyTitle
        );
        assert_eq!(
            LunarAnniversary::new("   ", 1, 1).unwrap_err(),
            ResolveError::EmptyTitle
        );
    }

    #[test]
    fn month_bounds() {
        assert!(LunarAnniversary::new("t", 1, 1).is_ok());
        assert!(LunarAnniversary::new("t", 12, 1).is_ok());
        assert_eq!(
            LunarAnniversary::new("t", 0, 1).unwrap_err(),
            ResolveError::InvalidMonth { month: 0 }
        );
        assert_eq!(
            LunarAnniversary::new("t", 13, 1).unwrap_err(),
            ResolveError::InvalidMonth { month: 13 }
        );
    }

    #[test]
    fn day_bounds() {
        // Day 30 is accepted even though not every lunar month has one.
        assert!(LunarAnniversary::new("t", 1, 30).is_ok());
        assert_eq!(
            LunarAnniversary::new("t", 1, 0).unwrap_err(),
            ResolveError::InvalidDay { day: 0 }
        );
        assert_eq!(
            LunarAnniversary::new("t", 1, 31).unwrap_err(),
            ResolveError::InvalidDay { day: 31 }
        );
    }
}
