//! The dataset compiled into the binary.

use spacebio_analyze::{DocumentBuilder, RawArticle};
use spacebio_document::parse_manifest;
use tracing::info;

use super::{Corpus, CorpusLoader, DataOrigin};
use crate::IndexError;

/// Embedded manifest.
const MANIFEST: &str = include_str!("../../data/embedded/summary.csv");

/// Embedded article texts, keyed by manifest path.
const ARTICLES: &[(&str, &str)] = &[
    (
        "scraped_articles/article_1.txt",
        include_str!("../../data/embedded/articles/article_1.txt"),
    ),
    (
        "scraped_articles/article_2.txt",
        include_str!("../../data/embedded/articles/article_2.txt"),
    ),
    (
        "scraped_articles/article_3.txt",
        include_str!("../../data/embedded/articles/article_3.txt"),
    ),
    (
        "scraped_articles/article_4.txt",
        include_str!("../../data/embedded/articles/article_4.txt"),
    ),
    (
        "scraped_articles/article_5.txt",
        include_str!("../../data/embedded/articles/article_5.txt"),
    ),
];

/// Body used for manifest rows without embedded text.
const MISSING_CONTENT: &str = "Article content not available";

/// Loads the embedded manifest and articles.
#[derive(Debug, Clone, Default)]
pub struct EmbeddedLoader {
    /// Document normalizer.
    builder: DocumentBuilder,
}

impl EmbeddedLoader {
    /// Creates a loader using `builder`.
    pub fn new(builder: DocumentBuilder) -> Self {
        Self { builder }
    }
}

/// Embedded text for a manifest path.
fn article_text(path: &str) -> Option<&'static str> {
    ARTICLES
        .iter()
        .find(|(p, _)| *p == path)
        .map(|(_, text)| *text)
}

impl CorpusLoader for EmbeddedLoader {
    fn load(&self) -> Result<Corpus, IndexError> {
        let manifest = parse_manifest(MANIFEST)?;
        let documents: Vec<_> = manifest
            .records
            .iter()
            .map(|record| {
                let body = article_text(&record.saved_file_path).unwrap_or(MISSING_CONTENT);
                self.builder
                    .build(RawArticle::from_record(record, body.to_string()))
            })
            .collect();
        info!(loaded = documents.len(), "embedded articles loaded");

        Ok(Corpus {
            documents,
            origin: DataOrigin::Embedded,
        })
    }

    fn describe(&self) -> String {
        format!("embedded dataset ({} articles)", ARTICLES.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_manifest_loads() {
        let corpus = EmbeddedLoader::default().load().unwrap();
        assert_eq!(corpus.origin, DataOrigin::Embedded);
        assert_eq!(corpus.len(), 30);
        assert!(corpus.documents.iter().all(|d| !d.categories.is_empty()));
    }

    #[test]
    fn test_rows_without_text_use_placeholder() {
        let corpus = EmbeddedLoader::default().load().unwrap();
        let first = &corpus.documents[0];
        assert!(first.body.starts_with("Microgravity Effects on Plant Cell Biology"));
        assert!(first.keywords.contains(&"microgravity".to_string()));

        let last = corpus.documents.last().unwrap();
        assert_eq!(last.body, MISSING_CONTENT);
    }
}
