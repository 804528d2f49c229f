//! # lunisol-export
//!
//! Renders a [`ConversionResult`](lunisol_resolve::ConversionResult) into
//! calendar-importable CSV text and derives a safe download filename.
//!
//! The CSV contract targets calendar import tools: a UTF-8 byte-order
//! mark, a `Subject,Start Date,All Day Event` header, and one
//! `{title},{YYYY-MM-DD},TRUE` row per occurrence. The same text serves
//! both file download and clipboard copy; writing it anywhere is the
//! caller's concern except for the [`write_csv`] convenience, whose
//! failure surfaces as a distinct [`ExportError`].

mod csv;
mod error;
mod filename;

pub use csv::{CSV_HEADER, csv_content};
pub use error::ExportError;
pub use filename::suggested_filename;

use std::path::Path;

use lunisol_resolve::ConversionResult;

/// Writes the CSV rendering of `result` to `path`.
///
/// # Errors
///
/// Returns [`ExportError::Io`] with the offending path if the write is
/// rejected by the host.
pub fn write_csv(path: &Path, result: &ConversionResult) -> Result<(), ExportError> {
    std::fs::write(path, csv_content(result)).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })
}
