//! Lunar-to-solar date resolution against the reference table.

use lunisol_calendar::CalendarDate;
use lunisol_table::{ReferenceEntry, ReferenceTable};
use tracing::debug;

use crate::config::{ResolveConfig, TieBreak};

/// Resolves a lunar (month, day) anniversary to a solar date in
/// `target_year`.
///
/// Policy, in order:
///
/// 1. An entry whose lunar date matches and whose solar date already
///    falls in `target_year` is returned verbatim (the only exact
///    branch). The first such entry in source order wins.
/// 2. Otherwise the anchor whose solar year is closest to `target_year`
///    is selected, ties broken by the configured [`TieBreak`] rule.
/// 3. The anchor's solar date has its year replaced by `target_year` and
///    is shifted by `-round(year_delta * drift)` days: earlier for
///    future targets, later for past ones.
///
/// Returns `None` when no entry matches the lunar (month, day) at all.
/// The linear drift correction does not model leap-lunar-month insertion;
/// it is accurate to within a few days for small anchor separations.
pub fn resolve(
    table: &ReferenceTable,
    month: u8,
    day: u8,
    target_year: i32,
    config: &ResolveConfig,
) -> Option<CalendarDate> {
    if let Some(exact) = table
        .lunar_matches(month, day)
        .find(|e| e.solar().year() == target_year)
    {
        return Some(exact.solar());
    }

    let anchor = table
        .lunar_matches(month, day)
        .reduce(|best, candidate| pick_nearer(best, candidate, target_year, config.tie_break()))?;

    let year_delta = i64::from(target_year) - i64::from(anchor.solar().year());
    let candidate = anchor.solar().with_year(target_year);
    let shift = (year_delta as f64 * config.drift_days_per_year()).round() as i64;
    let resolved = candidate.shift_days(-shift);
    debug!(
        anchor = %anchor.solar(),
        year_delta,
        shift,
        %resolved,
        "no exact-year anchor; applied drift correction"
    );
    Some(resolved)
}

/// Keeps whichever of two anchors is nearer to the target year.
///
/// Equal distances fall to the tie-break rule; anchors in the same year
/// keep the incumbent, preserving source order.
fn pick_nearer<'t>(
    best: &'t ReferenceEntry,
    candidate: &'t ReferenceEntry,
    target_year: i32,
    tie_break: TieBreak,
) -> &'t ReferenceEntry {
    let best_year = best.solar().year();
    let candidate_year = candidate.solar().year();
    let best_dist = (target_year - best_year).abs();
    let candidate_dist = (target_year - candidate_year).abs();

    if candidate_dist < best_dist {
        return candidate;
    }
    if candidate_dist > best_dist {
        return best;
    }
    let wins = match tie_break {
        TieBreak::Earlier => candidate_year < best_year,
        TieBreak::Later => candidate_year > best_year,
    };
    if wins { candidate } else { best }
}
