//! Diagnostics for the on-disk corpus.

use std::fs;

use serde::Serialize;
use spacebio_config::{DataSettings, DataSource};
use spacebio_document::parse_manifest;
use walkdir::WalkDir;

use super::resolve_source;

/// Number of article files test-read. Readability matches the loader: bytes, decoded lossily.
const SAMPLE_SIZE: usize = 5;

/// What the configured data location holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataAvailability {
    /// Source `auto` resolves to.
    pub source: DataSource,
    /// Whether the manifest file exists.
    pub manifest_found: bool,
    /// Valid manifest rows.
    pub articles_count: usize,
    /// Text files under the articles directory.
    pub article_files: usize,
    /// Sampled article files that could be read.
    pub readable_samples: usize,
    /// One-line summary.
    pub note: String,
}

impl DataAvailability {
    /// Returns true if the filesystem corpus can be served.
    pub fn is_available(&self) -> bool {
        self.manifest_found && self.articles_count > 0 && self.readable_samples > 0
    }
}

/// Inspects the configured data location without loading it.
pub fn verify_data_availability(settings: &DataSettings) -> DataAvailability {
    let source = resolve_source(settings, settings.source);
    let manifest_path = settings.manifest_path();
    let manifest_found = manifest_path.is_file();
    let articles_count = fs::read_to_string(&manifest_path)
        .ok()
        .and_then(|text| parse_manifest(&text).ok())
        .map_or(0, |m| m.records.len());

    let files: Vec<_> = WalkDir::new(settings.articles_path())
        .follow_links(false)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "txt"))
        .map(|e| e.into_path())
        .collect();
    let readable_samples = files
        .iter()
        .take(SAMPLE_SIZE)
        .filter(|path| fs::read(path).is_ok())
        .count();

    let note = if !manifest_found {
        format!("manifest not found at {}", manifest_path.display())
    } else if articles_count == 0 {
        "manifest has no usable rows".to_string()
    } else if files.is_empty() {
        format!("no article files under {}", settings.articles_path().display())
    } else {
        format!("{articles_count} articles listed, {} files on disk", files.len())
    };

    DataAvailability {
        source,
        manifest_found,
        articles_count,
        article_files: files.len(),
        readable_samples,
        note,
    }
}
