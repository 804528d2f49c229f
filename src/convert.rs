//! Pure conversion functions: CLI/TOML inputs -> crate API types.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use chrono::Datelike;
use tracing::warn;

use lunisol_calendar::CalendarDate;
use lunisol_resolve::{ResolveConfig, TieBreak};
use lunisol_table::ReferenceTable;

use crate::config::ResolveToml;

/// Parses a tie-break rule name string into the corresponding enum variant.
pub fn parse_tie_break(s: &str) -> Result<TieBreak> {
    match s.to_lowercase().as_str() {
        "earlier" => Ok(TieBreak::Earlier),
        "later" => Ok(TieBreak::Later),
        other => bail!("unknown tie-break rule: {other:?} (expected \"earlier\" or \"later\")"),
    }
}

/// Builds a [`ResolveConfig`] from the TOML resolve configuration.
pub fn build_resolve_config(resolve: &ResolveToml) -> Result<ResolveConfig> {
    let tie_break = parse_tie_break(&resolve.tie_break)?;
    let config = ResolveConfig::new()
        .with_drift_days_per_year(resolve.drift_days_per_year)
        .with_tie_break(tie_break)
        .with_year_range(resolve.start_year, resolve.end_year);
    config.validate()?;
    Ok(config)
}

/// Resolves "today": an explicit `YYYY-MM-DD` override, or the system's
/// local date. The core only ever sees the resulting [`CalendarDate`].
pub fn resolve_today(override_arg: Option<&str>) -> Result<CalendarDate> {
    match override_arg {
        Some(s) => s
            .parse()
            .with_context(|| format!("invalid --today value: {s:?}")),
        None => {
            let now = chrono::Local::now().date_naive();
            CalendarDate::new(now.year(), now.month() as u8, now.day() as u8)
                .context("system date out of range")
        }
    }
}

/// Loads the reference table: an explicit file path, or the bundled
/// 2025-2050 dataset.
pub fn load_table(path: Option<&PathBuf>) -> Result<ReferenceTable> {
    let table = match path {
        Some(p) => {
            let raw = std::fs::read_to_string(p)
                .with_context(|| format!("failed to read reference table: {}", p.display()))?;
            ReferenceTable::parse(&raw)
        }
        None => ReferenceTable::bundled(),
    };
    if table.is_empty() {
        // A present-but-useless file yields the normal "no data" outcome
        // downstream, but it is worth a warning.
        warn!("reference table is empty; all conversions will find no data");
    }
    Ok(table)
}
