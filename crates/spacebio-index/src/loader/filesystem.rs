//! Loading from a CSV manifest and article files on disk.

use std::{fs, path::PathBuf};

use spacebio_analyze::{DocumentBuilder, RawArticle};
use spacebio_config::DataSettings;
use spacebio_document::parse_manifest;
use tracing::{debug, info, warn};

use super::{Corpus, CorpusLoader, DataOrigin};
use crate::IndexError;

/// Article files shorter than this are treated as failed scrapes.
const MIN_ARTICLE_BYTES: usize = 100;

/// Progress is logged every this many documents.
const PROGRESS_INTERVAL: usize = 50;

/// Loads the corpus from `<root>/<manifest>` and the files it lists.
#[derive(Debug, Clone)]
pub struct FilesystemLoader {
    /// Directory article paths are relative to.
    root: PathBuf,
    /// Manifest file.
    manifest: PathBuf,
    /// Document normalizer.
    builder: DocumentBuilder,
}

impl FilesystemLoader {
    /// Creates a loader for the configured data location.
    pub fn new(settings: &DataSettings, builder: DocumentBuilder) -> Self {
        Self {
            root: settings.root.clone(),
            manifest: settings.manifest_path(),
            builder,
        }
    }
}

impl CorpusLoader for FilesystemLoader {
    fn load(&self) -> Result<Corpus, IndexError> {
        if !self.manifest.is_file() {
            return Err(IndexError::NoData {
                path: self.manifest.clone(),
            });
        }
        let text =
            fs::read_to_string(&self.manifest).map_err(|e| IndexError::io(&self.manifest, e))?;
        let manifest = parse_manifest(&text)?;
        let total = manifest.records.len();
        info!(
            manifest = %self.manifest.display(),
            records = total,
            skipped_rows = manifest.skipped,
            "loading articles"
        );

        let mut documents = Vec::with_capacity(total);
        let mut skipped = 0usize;
        for (i, record) in manifest.records.iter().enumerate() {
            let path = self.root.join(&record.saved_file_path);
            match fs::read(&path) {
                Ok(bytes) if bytes.len() >= MIN_ARTICLE_BYTES => {
                    let body = String::from_utf8_lossy(&bytes).into_owned();
                    documents.push(self.builder.build(RawArticle::from_record(record, body)));
                }
                Ok(bytes) => {
                    debug!(path = %path.display(), bytes = bytes.len(), "article too short");
                    skipped += 1;
                }
                Err(e) => {
                    debug!(path = %path.display(), error = %e, "article unreadable");
                    skipped += 1;
                }
            }
            if (i + 1) % PROGRESS_INTERVAL == 0 {
                info!(processed = i + 1, total, "loading articles");
            }
        }

        if skipped > 0 {
            warn!(skipped, loaded = documents.len(), "some articles could not be loaded");
        }
        if documents.is_empty() {
            return Err(IndexError::NoData {
                path: self.root.clone(),
            });
        }
        info!(loaded = documents.len(), "articles loaded");

        Ok(Corpus {
            documents,
            origin: DataOrigin::Filesystem,
        })
    }

    fn describe(&self) -> String {
        format!("filesystem ({})", self.manifest.display())
    }
}
