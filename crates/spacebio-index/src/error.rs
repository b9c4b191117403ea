//! Error types for the spacebio-index crate.

use std::{io, path::PathBuf};

use spacebio_document::DocumentError;
use thiserror::Error;

/// Errors raised while loading a corpus.
///
/// The query engine absorbs these and serves fallback data; they reach callers only through
/// the loaders themselves.
#[derive(Debug, Error)]
pub enum IndexError {
    /// A file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path that failed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: io::Error,
    },

    /// The manifest was rejected.
    #[error("invalid manifest: {0}")]
    Manifest(#[from] DocumentError),

    /// No article could be loaded.
    #[error("no articles found under {path}")]
    NoData {
        /// Directory or manifest that was searched.
        path: PathBuf,
    },

    /// The fallback data source was selected explicitly.
    #[error("fallback data source selected")]
    ForcedFallback,
}

impl IndexError {
    /// Creates an `Io` error for `path`.
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
