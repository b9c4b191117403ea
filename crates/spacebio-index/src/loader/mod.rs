//! Corpus loading.
//!
//! A loader turns an external data source into a list of normalized documents. Loaders either
//! return a complete corpus or an error; they never hand back partial results from a failed
//! read of the manifest itself. Individual unreadable articles are skipped.

mod availability;
mod embedded;
mod filesystem;

use std::fmt;

pub use availability::{DataAvailability, verify_data_availability};
pub use embedded::EmbeddedLoader;
pub use filesystem::FilesystemLoader;
use serde::Serialize;
use spacebio_analyze::DocumentBuilder;
use spacebio_config::{Config, DataSettings, DataSource};
use spacebio_document::Document;

use crate::{IndexError, fallback_documents};

/// Where a corpus came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DataOrigin {
    /// CSV manifest and article files on disk.
    Filesystem,
    /// Dataset compiled into the binary.
    Embedded,
    /// Fixed fallback articles.
    Fallback,
}

impl DataOrigin {
    /// Lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Filesystem => "filesystem",
            Self::Embedded => "embedded",
            Self::Fallback => "fallback",
        }
    }
}

impl fmt::Display for DataOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A loaded document collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Corpus {
    /// Documents in manifest order.
    pub documents: Vec<Document>,
    /// Source of the documents.
    pub origin: DataOrigin,
}

impl Corpus {
    /// The fixed fallback corpus.
    pub fn fallback() -> Self {
        Self {
            documents: fallback_documents(),
            origin: DataOrigin::Fallback,
        }
    }

    /// Number of documents.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Returns true if there are no documents.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

/// Produces a corpus.
pub trait CorpusLoader: Send + Sync {
    /// Loads every document.
    fn load(&self) -> Result<Corpus, IndexError>;

    /// Short description for diagnostics.
    fn describe(&self) -> String;
}

/// A loader that always fails, so callers install the fallback corpus.
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackLoader;

impl CorpusLoader for FallbackLoader {
    fn load(&self) -> Result<Corpus, IndexError> {
        Err(IndexError::ForcedFallback)
    }

    fn describe(&self) -> String {
        "fixed fallback articles".to_string()
    }
}

/// Resolves `auto` to a concrete source: filesystem when the manifest exists, else embedded.
pub fn resolve_source(settings: &DataSettings, requested: DataSource) -> DataSource {
    match requested {
        DataSource::Auto if settings.manifest_path().is_file() => DataSource::Filesystem,
        DataSource::Auto => DataSource::Embedded,
        other => other,
    }
}

/// Builds the loader for `source` (after resolving `auto`).
pub fn loader_for(config: &Config, source: DataSource) -> Box<dyn CorpusLoader> {
    let builder = DocumentBuilder::new(&config.taxonomy, &config.processing);
    match resolve_source(&config.data, source) {
        DataSource::Filesystem => Box::new(FilesystemLoader::new(&config.data, builder)),
        DataSource::Embedded => Box::new(EmbeddedLoader::new(builder)),
        DataSource::Auto | DataSource::Fallback => Box::new(FallbackLoader),
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn settings(root: &TempDir) -> DataSettings {
        DataSettings {
            root: root.path().to_path_buf(),
            ..Default::default()
        }
    }

    #[test]
    fn test_auto_prefers_filesystem() {
        let dir = TempDir::new().unwrap();
        let settings = settings(&dir);
        assert_eq!(
            resolve_source(&settings, DataSource::Auto),
            DataSource::Embedded
        );

        fs::write(settings.manifest_path(), "article_id,url,saved_file_path\n").unwrap();
        assert_eq!(
            resolve_source(&settings, DataSource::Auto),
            DataSource::Filesystem
        );
    }

    #[test]
    fn test_explicit_source_is_kept() {
        let dir = TempDir::new().unwrap();
        let settings = settings(&dir);
        assert_eq!(
            resolve_source(&settings, DataSource::Fallback),
            DataSource::Fallback
        );
        assert_eq!(
            resolve_source(&settings, DataSource::Filesystem),
            DataSource::Filesystem
        );
    }

    #[test]
    fn test_fallback_loader_fails() {
        assert!(matches!(
            FallbackLoader.load(),
            Err(IndexError::ForcedFallback)
        ));
        assert_eq!(Corpus::fallback().len(), 5);
    }

    #[test]
    fn test_loader_for_describes_source() {
        let config = Config::default();
        let loader = loader_for(&config, DataSource::Embedded);
        assert!(loader.describe().contains("embedded"));
    }
}
