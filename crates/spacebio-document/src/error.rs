//! Error types for manifest parsing.

use thiserror::Error;

/// Errors that can occur when parsing a corpus manifest.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The manifest has no header row or no data rows.
    #[error("manifest is empty or malformed: found {lines} non-blank line(s)")]
    EmptyManifest {
        /// Number of non-blank lines found.
        lines: usize,
    },

    /// A required column is absent from the header row.
    #[error("manifest header is missing required column '{column}'")]
    MissingColumn {
        /// Name of the missing column.
        column: &'static str,
    },
}
