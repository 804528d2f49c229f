//! Configuration for resolution queries.

use crate::error::ResolveError;

/// Default lunar drift in days per year of separation from the anchor.
///
/// The lunar year of ~354.37 days falls short of the solar year by about
/// this much; the historical variants of this tool disagreed between 11
/// and 10.875, and 10.875 is the reconciled default.
pub const DEFAULT_DRIFT_DAYS_PER_YEAR: f64 = 10.875;

/// Default first year of the supported window.
pub const DEFAULT_START_YEAR: i32 = 2025;

/// Default last year of the supported window.
pub const DEFAULT_END_YEAR: i32 = 2050;

/// Tie-break rule when two anchors are equally distant from the target year.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TieBreak {
    /// The anchor with the earlier solar year wins (deterministic default).
    #[default]
    Earlier,
    /// The anchor with the later solar year wins (matches one historical
    /// variant of this tool).
    Later,
}

/// Configuration for resolution and range generation.
///
/// Use the builder methods to customise parameters.
///
/// # Example
///
/// ```
/// use lunisol_resolve::{ResolveConfig, TieBreak};
///
/// let config = ResolveConfig::new()
///     .with_drift_days_per_year(11.0)
///     .with_tie_break(TieBreak::Later)
///     .with_year_range(2025, 2030);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ResolveConfig {
    /// Linear drift correction, in days per year of anchor separation.
    drift_days_per_year: f64,
    /// Tie-break rule for equally distant anchors.
    tie_break: TieBreak,
    /// First year of the generation window (inclusive).
    start_year: i32,
    /// Last year of the generation window (inclusive).
    end_year: i32,
}

impl ResolveConfig {
    /// Creates a configuration with the reconciled defaults:
    /// drift 10.875 days/year, earlier-year tie-break, window 2025..=2050.
    pub fn new() -> Self {
        Self {
            drift_days_per_year: DEFAULT_DRIFT_DAYS_PER_YEAR,
            tie_break: TieBreak::default(),
            start_year: DEFAULT_START_YEAR,
            end_year: DEFAULT_END_YEAR,
        }
    }

    /// Sets the drift constant in days per year.
    pub fn with_drift_days_per_year(mut self, drift: f64) -> Self {
        self.drift_days_per_year = drift;
        self
    }

    /// Sets the tie-break rule.
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Sets the inclusive year range for generation.
    pub fn with_year_range(mut self, start_year: i32, end_year: i32) -> Self {
        self.start_year = start_year;
        self.end_year = end_year;
        self
    }

    /// Returns the drift constant in days per year.
    pub fn drift_days_per_year(&self) -> f64 {
        self.drift_days_per_year
    }

    /// Returns the tie-break rule.
    pub fn tie_break(&self) -> TieBreak {
        self.tie_break
    }

    /// Returns the first year of the generation window.
    pub fn start_year(&self) -> i32 {
        self.start_year
    }

    /// Returns the last year of the generation window.
    pub fn end_year(&self) -> i32 {
        self.end_year
    }

    /// Validates this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::InvalidDrift`] if the drift constant is
    /// non-finite or non-positive, or [`ResolveError::InvalidYearRange`]
    /// if the range is inverted.
    pub fn validate(&self) -> Result<(), ResolveError> {
        if !self.drift_days_per_year.is_finite() || self.drift_days_per_year <= 0.0 {
            return Err(ResolveError::InvalidDrift {
                drift: self.drift_days_per_year,
            });
        }
        if self.start_year > self.end_year {
            return Err(ResolveError::InvalidYearRange {
                start: self.start_year,
                end: self.end_year,
            });
        }
        Ok(())
    }
}

impl Default for ResolveConfig {
    fn default() -> Self {
        Self::new()
    }
}
