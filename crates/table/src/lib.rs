//! # lunisol-table
//!
//! Reference table of empirically known (solar date, lunar date)
//! correspondences, the anchor points for lunar-to-solar approximation.
//!
//! The table is loaded once from a newline-delimited text resource
//! (`YYYY-MM-DD,YYYY-MM-DD` per line, solar first) and is immutable
//! afterwards. The source data is a static asset not under runtime
//! control, so parsing is deliberately tolerant: malformed lines are
//! skipped and logged at `debug`, never turned into errors.
//!
//! ## Quick Start
//!
//! ```
//! use lunisol_table::ReferenceTable;
//!
//! let table = ReferenceTable::parse("2025-01-29,2025-01-01\nbad line\n");
//! assert_eq!(table.len(), 1);
//!
//! // Entries matching a lunar month/day, in source order:
//! assert_eq!(table.lunar_matches(1, 1).count(), 1);
//! assert_eq!(table.lunar_matches(8, 15).count(), 0);
//! ```
//!
//! A bundled dataset covering the supported 2025-2050 window is available
//! through [`ReferenceTable::bundled`].

mod table;

pub use table::{ReferenceEntry, ReferenceTable};
