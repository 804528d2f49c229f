use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level Lunisol configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LunisolConfig {
    /// Resolution settings.
    #[serde(default)]
    pub resolve: ResolveToml,

    /// Reference table settings.
    #[serde(default)]
    pub table: TableToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResolveToml {
    #[serde(default = "default_drift_days_per_year")]
    pub drift_days_per_year: f64,
    #[serde(default = "default_tie_break")]
    pub tie_break: String,
    #[serde(default = "default_start_year")]
    pub start_year: i32,
    #[serde(default = "default_end_year")]
    pub end_year: i32,
}

impl Default for ResolveToml {
    fn default() -> Self {
        Self {
            drift_days_per_year: default_drift_days_per_year(),
            tie_break: default_tie_break(),
            start_year: default_start_year(),
            end_year: default_end_year(),
        }
    }
}

fn default_drift_days_per_year() -> f64 {
    lunisol_resolve::DEFAULT_DRIFT_DAYS_PER_YEAR
}
fn default_tie_break() -> String {
    "earlier".to_string()
}
fn default_start_year() -> i32 {
    lunisol_resolve::DEFAULT_START_YEAR
}
fn default_end_year() -> i32 {
    lunisol_resolve::DEFAULT_END_YEAR
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct TableToml {
    /// Optional reference table file; the bundled dataset is used when
    /// unset.
    pub path: Option<PathBuf>,
}

/// Loads the TOML configuration, falling back to defaults when the file
/// does not exist (the default path is optional).
pub fn load(path: &Path) -> Result<LunisolConfig> {
    if !path.exists() {
        return Ok(LunisolConfig::default());
    }
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    toml::from_str(&raw).with_context(|| format!("failed to parse config: {}", path.display()))
}
