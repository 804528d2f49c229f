//! # lunisol-resolve
//!
//! Lunar-to-solar date resolution against an empirical reference table,
//! with day-of-week / D-Day annotation and range generation.
//!
//! Resolution is approximate by design: instead of a lunisolar ephemeris,
//! it anchors on known (solar, lunar) correspondences and corrects for the
//! roughly 10.875 days the lunar year falls short of the solar year per
//! year of separation from the anchor.
//!
//! # Quick start
//!
//! ```
//! use lunisol_resolve::{LunarAnniversary, ResolveConfig, generate};
//! use lunisol_table::ReferenceTable;
//!
//! let table = ReferenceTable::parse("2025-01-29,2025-01-01\n");
//! let anniversary = LunarAnniversary::new("할머니 생신", 1, 1).unwrap();
//! let today = "2025-01-01".parse().unwrap();
//! let config = ResolveConfig::new();
//!
//! let result = generate(&table, &anniversary, today, &config).unwrap();
//! assert_eq!(result.occurrences()[0].countdown(), "D-28");
//! ```
//!
//! # Architecture
//!
//! ```text
//! generate()
//!   ├─ validate config
//!   └─ for each year in range (ascending)
//!        ├─ resolve()      exact-year match, else nearest anchor + drift
//!        ├─ skip past dates
//!        └─ annotate()     weekday + D-Day countdown
//! ```

pub mod annotate;
pub mod anniversary;
pub mod config;
pub mod error;
pub mod generate;
pub mod resolve;
pub mod result;

pub use annotate::{Annotation, annotate};
pub use anniversary::LunarAnniversary;
pub use config::{
    DEFAULT_DRIFT_DAYS_PER_YEAR, DEFAULT_END_YEAR, DEFAULT_START_YEAR, ResolveConfig, TieBreak,
};
pub use error::ResolveError;
pub use generate::generate;
pub use resolve::resolve;
pub use result::{ConversionResult, ResolvedOccurrence};
