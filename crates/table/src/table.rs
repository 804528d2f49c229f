//! Reference table storage and the tolerant line parser.

use lunisol_calendar::CalendarDate;
use tracing::debug;

/// Bundled reference dataset covering the supported 2025-2050 window.
const BUNDLED: &str = include_str!("../data/base_dates.txt");

/// One empirically known correspondence between a solar and a lunar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceEntry {
    solar: CalendarDate,
    lunar: CalendarDate,
}

impl ReferenceEntry {
    /// Creates a new reference entry.
    pub fn new(solar: CalendarDate, lunar: CalendarDate) -> Self {
        Self { solar, lunar }
    }

    /// Returns the solar side of the correspondence.
    pub fn solar(&self) -> CalendarDate {
        self.solar
    }

    /// Returns the lunar side of the correspondence.
    pub fn lunar(&self) -> CalendarDate {
        self.lunar
    }
}

/// Ordered, immutable set of reference entries.
///
/// Source order is preserved for determinism; there is no uniqueness
/// constraint on lunar (month, day) pairs, so observations of the same
/// lunar anniversary across several years coexist.
#[derive(Debug, Clone, Default)]
pub struct ReferenceTable {
    entries: Vec<ReferenceEntry>,
}

impl ReferenceTable {
    /// Parses a newline-delimited `solar,lunar` text resource.
    ///
    /// Each non-blank line must hold two `YYYY-MM-DD` dates separated by a
    /// comma. Lines failing either parse are skipped, so malformed input
    /// yields a smaller (possibly empty) table rather than an error.
    pub fn parse(raw: &str) -> Self {
        let mut entries = Vec::new();
        for (idx, line) in raw.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            match parse_line(line) {
                Some(entry) => entries.push(entry),
                None => debug!(line_no = idx + 1, line, "skipping malformed reference line"),
            }
        }
        Self { entries }
    }

    /// Returns the bundled 2025-2050 reference dataset.
    pub fn bundled() -> Self {
        Self::parse(BUNDLED)
    }

    /// Builds a table directly from entries (mainly for tests and callers
    /// that assemble anchors programmatically).
    pub fn from_entries(entries: Vec<ReferenceEntry>) -> Self {
        Self { entries }
    }

    /// Returns all entries in source order.
    pub fn entries(&self) -> &[ReferenceEntry] {
        &self.entries
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over entries whose lunar date has the given month and day,
    /// in source order.
    pub fn lunar_matches(&self, month: u8, day: u8) -> impl Iterator<Item = &ReferenceEntry> {
        self.entries
            .iter()
            .filter(move |e| e.lunar.month() == month && e.lunar.day() == day)
    }
}

/// Parses one `solar,lunar` line; `None` on any malformation.
fn parse_line(line: &str) -> Option<ReferenceEntry> {
    let (solar_text, lunar_text) = line.split_once(',')?;
    let solar: CalendarDate = solar_text.trim().parse().ok()?;
    let lunar: CalendarDate = lunar_text.trim().parse().ok()?;
    Some(ReferenceEntry::new(solar, lunar))
}
