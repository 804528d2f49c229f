//! Day-of-week enum with display labels.

/// Day of the week, zero-based from Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weekday {
    /// Sunday (index 0).
    Sunday = 0,
    /// Monday (index 1).
    Monday = 1,
    /// Tuesday (index 2).
    Tuesday = 2,
    /// Wednesday (index 3).
    Wednesday = 3,
    /// Thursday (index 4).
    Thursday = 4,
    /// Friday (index 5).
    Friday = 5,
    /// Saturday (index 6).
    Saturday = 6,
}

/// Korean weekday labels, indexed Sunday=0 .. Saturday=6.
const LABELS: [&str; 7] = [
    "일요일",
    "월요일",
    "화요일",
    "수요일",
    "목요일",
    "금요일",
    "토요일",
];

impl Weekday {
    /// Creates a `Weekday` from a zero-based Sunday index.
    ///
    /// Indices outside 0..=6 are reduced modulo 7, so any day count maps
    /// to a valid weekday.
    pub(crate) fn from_index(index: i64) -> Self {
        match index.rem_euclid(7) {
            0 => Self::Sunday,
            1 => Self::Monday,
            2 => Self::Tuesday,
            3 => Self::Wednesday,
            4 => Self::Thursday,
            5 => Self::Friday,
            _ => Self::Saturday,
        }
    }

    /// Returns the zero-based index (Sunday=0 .. Saturday=6).
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Returns the display label in the reference locale.
    pub fn label(self) -> &'static str {
        LABELS[self.index() as usize]
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
