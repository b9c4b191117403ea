//! Normalization of raw articles into documents.

use spacebio_config::{ProcessingSettings, TaxonomySettings};
use spacebio_document::{
    AbstractRule, ContentType, Document, ManifestRecord, content_lines, extract_abstract,
    extract_pmc_id, extract_title, fallback_title, truncate_chars, word_count,
};
use tracing::trace;

use crate::{KeywordDetector, Tagger};

/// Title prefix used when an article has no recoverable title.
pub const ARTICLE_TITLE_PREFIX: &str = "Biology Research Article";

/// Raw input for one article.
#[derive(Debug, Clone)]
pub struct RawArticle<'a> {
    /// Article id.
    pub id: u32,
    /// Source URL.
    pub url: &'a str,
    /// Title supplied by the manifest, if any.
    pub title: Option<&'a str>,
    /// Source format.
    pub content_type: ContentType,
    /// Word count supplied by the manifest, if any.
    pub word_count: Option<usize>,
    /// Full article text.
    pub body: String,
}

impl<'a> RawArticle<'a> {
    /// Pairs a manifest record with the text of its article file.
    pub fn from_record(record: &'a ManifestRecord, body: String) -> Self {
        Self {
            id: record.article_id,
            url: &record.url,
            title: record.title.as_deref(),
            content_type: record.content_type,
            word_count: record.word_count,
            body,
        }
    }
}

/// Builds `Document`s from raw article text.
#[derive(Debug, Clone)]
pub struct DocumentBuilder {
    /// Category tagger.
    tagger: Tagger,
    /// Keyword detector.
    keywords: KeywordDetector,
    /// Abstract character budget.
    abstract_chars: usize,
    /// Length of the body preview.
    preview_chars: usize,
}

impl DocumentBuilder {
    /// Creates a builder from taxonomy and processing settings.
    pub fn new(taxonomy: &TaxonomySettings, processing: &ProcessingSettings) -> Self {
        Self {
            tagger: Tagger::new(taxonomy),
            keywords: KeywordDetector::new(taxonomy, processing.max_keywords),
            abstract_chars: processing.abstract_chars,
            preview_chars: processing.content_preview_chars,
        }
    }

    /// The tagger used for categories.
    pub fn tagger(&self) -> &Tagger {
        &self.tagger
    }

    /// The keyword detector.
    pub fn keywords(&self) -> &KeywordDetector {
        &self.keywords
    }

    /// Normalizes one article.
    pub fn build(&self, raw: RawArticle<'_>) -> Document {
        let lines = content_lines(&raw.body);

        let title = raw
            .title
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(String::from)
            .or_else(|| extract_title(&lines))
            .unwrap_or_else(|| fallback_title(ARTICLE_TITLE_PREFIX, raw.url));
        let abstract_text = extract_abstract(&lines, AbstractRule::article(self.abstract_chars));
        let keywords = self.keywords.detect(&raw.body);
        let categories = self.tagger.tag(&format!("{} {}", raw.body, title));
        let words = raw
            .word_count
            .filter(|&n| n > 0)
            .unwrap_or_else(|| word_count(&raw.body));
        trace!(id = raw.id, ?categories, keywords = keywords.len(), "document built");

        Document {
            id: raw.id,
            content: truncate_chars(&raw.body, self.preview_chars).to_string(),
            url: raw.url.to_string(),
            pmc_id: extract_pmc_id(raw.url),
            word_count: words,
            content_type: raw.content_type,
            title,
            abstract_text,
            keywords,
            categories,
            body: raw.body,
        }
    }
}

impl Default for DocumentBuilder {
    fn default() -> Self {
        Self::new(&TaxonomySettings::default(), &ProcessingSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = "\
12|Microgravity alters bone density in mice.
Abstract
Mice flown aboard the station lost bone mass.
Osteoclast activity increased during spaceflight.
Results
Methods
";

    fn raw(body: &str) -> RawArticle<'static> {
        RawArticle {
            id: 3,
            url: "https://www.ncbi.nlm.nih.gov/pmc/articles/PMC3630201/",
            title: None,
            content_type: ContentType::Html,
            word_count: None,
            body: body.to_string(),
        }
    }

    #[test]
    fn test_build_extracts_fields() {
        let doc = DocumentBuilder::default().build(raw(BODY));
        assert_eq!(doc.title, "Microgravity alters bone density in mice");
        assert_eq!(
            doc.abstract_text,
            "Mice flown aboard the station lost bone mass. Osteoclast activity increased during spaceflight. Results Methods"
        );
        assert_eq!(doc.pmc_id.as_deref(), Some("3630201"));
        assert_eq!(doc.keywords, vec!["microgravity", "space", "bone", "spaceflight"]);
        assert_eq!(doc.categories, vec!["Space Biology"]);
        assert_eq!(doc.word_count, word_count(BODY));
        assert_eq!(doc.content, BODY);
    }

    #[test]
    fn test_manifest_title_wins() {
        let mut input = raw(BODY);
        input.title = Some("  Bion-M 1 mission  ");
        input.word_count = Some(4200);
        let doc = DocumentBuilder::default().build(input);
        assert_eq!(doc.title, "Bion-M 1 mission");
        assert_eq!(doc.word_count, 4200);
    }

    #[test]
    fn test_untitled_article_falls_back() {
        let doc = DocumentBuilder::default().build(raw("tiny\ntext"));
        assert_eq!(doc.title, "Biology Research Article - PMC3630201");
        assert_eq!(doc.abstract_text, "Abstract not available");
        assert_eq!(doc.categories, vec!["General Biology"]);
        assert!(doc.keywords.is_empty());
    }

    #[test]
    fn test_preview_is_truncated() {
        let processing = ProcessingSettings {
            content_preview_chars: 5,
            ..Default::default()
        };
        let builder = DocumentBuilder::new(&TaxonomySettings::default(), &processing);
        let doc = builder.build(raw(BODY));
        assert_eq!(doc.content, "12|Mi");
        assert_eq!(doc.body, BODY);
    }
}
