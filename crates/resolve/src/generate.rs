//! Range generation: sweeping the resolution engine over the year window.

use lunisol_calendar::CalendarDate;
use lunisol_table::ReferenceTable;
use tracing::debug;

use crate::annotate::annotate;
use crate::anniversary::LunarAnniversary;
use crate::config::ResolveConfig;
use crate::error::ResolveError;
use crate::resolve::resolve;
use crate::result::{ConversionResult, ResolvedOccurrence};

/// Generates all future occurrences of the anniversary over the
/// configured year window.
///
/// Each year in the inclusive range is resolved independently: years
/// with no reference match and years resolving to a date before `today`
/// are skipped without aborting the sweep. The returned occurrence list
/// is therefore a possibly-sparse, strictly ascending-by-year
/// subsequence of the window; an empty list is a normal "no data"
/// outcome.
///
/// # Errors
///
/// Returns [`ResolveError`] only for an invalid configuration.
pub fn generate(
    table: &ReferenceTable,
    anniversary: &LunarAnniversary,
    today: CalendarDate,
    config: &ResolveConfig,
) -> Result<ConversionResult, ResolveError> {
    config.validate()?;

    let mut occurrences = Vec::new();
    for year in config.start_year()..=config.end_year() {
        let Some(solar_date) = resolve(table, anniversary.month(), anniversary.day(), year, config)
        else {
            debug!(year, "no reference match; skipping year");
            continue;
        };
        if solar_date < today {
            debug!(year, %solar_date, "resolved date in the past; skipping year");
            continue;
        }
        let annotation = annotate(solar_date, today);
        occurrences.push(ResolvedOccurrence::new(
            year,
            solar_date,
            annotation.weekday(),
            annotation.countdown().to_string(),
        ));
    }

    Ok(ConversionResult::new(anniversary.clone(), occurrences))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> CalendarDate {
        s.parse().unwrap()
    }

    fn anniversary() -> LunarAnniversary {
        LunarAnniversary::new("할머니 생신", 1, 1).unwrap()
    }

    #[test]
    fn occurrences_strictly_ascending_by_year() {
        let table = ReferenceTable::bundled();
        let cfg = ResolveConfig::new();
        let result = generate(&table, &anniversary(), date("2025-01-01"), &cfg).unwrap();
        assert!(!result.is_empty());
        for pair in result.occurrences().windows(2) {
            assert!(
                pair[0].year() < pair[1].year(),
                "years not strictly ascending: {} then {}",
                pair[0].year(),
                pair[1].year()
            );
        }
    }

    #[test]
    fn future_only() {
        let table = ReferenceTable::bundled();
        let cfg = ResolveConfig::new();
        let today = date("2025-06-01");
        let result = generate(&table, &anniversary(), today, &cfg).unwrap();
        for occ in result.occurrences() {
            assert!(
                occ.solar_date() >= today,
                "past occurrence leaked through: {}",
                occ.solar_date()
            );
        }
        // 2025's Seollal (2025-01-29) is before today and must be gone.
        assert_eq!(result.occurrences()[0].year(), 2026);
    }

    #[test]
    fn same_day_occurrence_kept_as_dday() {
        let table = ReferenceTable::bundled();
        let cfg = ResolveConfig::new();
        let result = generate(&table, &anniversary(), date("2025-01-29"), &cfg).unwrap();
        let first = &result.occurrences()[0];
        assert_eq!(first.year(), 2025);
        assert_eq!(first.countdown(), "D-DAY");
    }

    #[test]
    fn full_window_when_today_precedes_it() {
        let table = ReferenceTable::bundled();
        let cfg = ResolveConfig::new();
        let result = generate(&table, &anniversary(), date("2025-01-01"), &cfg).unwrap();
        // Bundled data has a lunar 1-1 anchor for every window year.
        assert_eq!(result.len(), 26);
        assert_eq!(result.occurrences()[0].year(), 2025);
        assert_eq!(result.occurrences()[25].year(), 2050);
    }

    #[test]
    fn no_matching_lunar_date_yields_empty_result() {
        let table = ReferenceTable::parse("2025-01-29,2025-01-01\n");
        let cfg = ResolveConfig::new();
        let unmatched = LunarAnniversary::new("t", 11, 11).unwrap();
        let result = generate(&table, &unmatched, date("2025-01-01"), &cfg).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn all_past_yields_empty_result() {
        let table = ReferenceTable::parse("2025-01-29,2025-01-01\n");
        let cfg = ResolveConfig::new().with_year_range(2025, 2025);
        let result = generate(&table, &anniversary(), date("2026-01-01"), &cfg).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn sparse_table_yields_sparse_subsequence() {
        // Anchors only for 2025 and 2027; 2026 still resolves (nearest
        // anchor + drift), so sparsity comes from the window, not gaps.
        let table = ReferenceTable::parse("2025-01-29,2025-01-01\n2027-02-07,2027-01-01\n");
        let cfg = ResolveConfig::new().with_year_range(2025, 2027);
        let result = generate(&table, &anniversary(), date("2025-01-01"), &cfg).unwrap();
        let years: Vec<i32> = result.occurrences().iter().map(|o| o.year()).collect();
        assert_eq!(years, vec![2025, 2026, 2027]);
    }

    #[test]
    fn invalid_config_rejected() {
        let table = ReferenceTable::bundled();
        let cfg = ResolveConfig::new().with_year_range(2050, 2025);
        let err = generate(&table, &anniversary(), date("2025-01-01"), &cfg).unwrap_err();
        assert!(matches!(err, ResolveError::InvalidYearRange { .. }));
    }

    #[test]
    fn deterministic_for_fixed_inputs() {
        let table = ReferenceTable::bundled();
        let cfg = ResolveConfig::new();
        let chuseok = LunarAnniversary::new("추석", 8, 15).unwrap();
        let a = generate(&table, &chuseok, date("2025-06-01"), &cfg).unwrap();
        let b = generate(&table, &chuseok, date("2025-06-01"), &cfg).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn drift_approximation_end_to_end() {
        // Anchors 2025/2026 only; target 2027 approximates from 2026 with
        // an 11-day drift shift, and today filters nothing after June.
        let table = ReferenceTable::parse("2025-01-29,2025-01-01\n2026-02-17,2026-01-01\n");
        let cfg = ResolveConfig::new().with_year_range(2027, 2027);
        let result = generate(&table, &anniversary(), date("2025-06-01"), &cfg).unwrap();
        assert_eq!(result.len(), 1);
        let occ = &result.occurrences()[0];
        assert_eq!(occ.solar_date(), date("2027-02-06"));
        assert_eq!(occ.weekday(), occ.solar_date().weekday());
        assert!(occ.countdown().starts_with("D-"));
    }
}
