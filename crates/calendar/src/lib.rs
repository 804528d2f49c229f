//! # lunisol-calendar
//!
//! Pure date arithmetic for the proleptic Gregorian calendar.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["(year, month, day)"] -->|"CalendarDate::new()"| B["CalendarDate"]
//!     S["YYYY-MM-DD"] -->|".parse()"| B
//!     B -->|".day_number()"| C["rata die (i64)"]
//!     C -->|"CalendarDate::from_day_number()"| B
//!     B -->|".shift_days()"| B
//!     B -->|".weekday()"| D["Weekday"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use lunisol_calendar::{CalendarDate, Weekday};
//!
//! let seollal = CalendarDate::new(2025, 1, 29).unwrap();
//! assert_eq!(seollal.weekday(), Weekday::Wednesday);
//!
//! let parsed: CalendarDate = "2025-01-29".parse().unwrap();
//! assert_eq!(parsed, seollal);
//!
//! // Whole-day difference and signed shifting
//! let new_year = CalendarDate::new(2025, 1, 1).unwrap();
//! assert_eq!(seollal.diff_days(new_year), 28);
//! assert_eq!(new_year.shift_days(28), seollal);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `date` | Validated Gregorian date with day-level arithmetic |
//! | `weekday` | Day-of-week enum with display labels |
//! | `error` | Error types |

mod date;
mod error;
mod rata;
mod weekday;

pub use date::CalendarDate;
pub use error::CalendarError;
pub use weekday::Weekday;
