//! Error types for the lunisol-export crate.

use std::path::PathBuf;

/// Error type for export operations.
///
/// Export failure is always surfaced to the caller so it can be shown to
/// the user; it is never swallowed and never fatal to the process.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// The host rejected the file write.
    #[error("failed to write CSV to {}", path.display())]
    Io {
        /// The path the write was attempted at.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
