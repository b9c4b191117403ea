//! Document model and text extraction for spacebio.
//!
//! This crate defines the values the rest of the workspace passes around:
//! - `Document`, the normalized article that search and tagging operate on
//! - `Publication`, the enriched view with classification and synthetic metadata
//! - the CSV manifest that lists the corpus
//! - heuristics that recover titles, abstracts and authors from scraped text

#![warn(missing_docs)]

mod error;
mod extract;
mod manifest;
mod publication;

use std::{convert::Infallible, fmt, str::FromStr};

pub use error::DocumentError;
pub use extract::{
    ARTICLE_ABSTRACT_FALLBACK, AbstractRule, DEFAULT_AUTHOR, PUBLICATION_ABSTRACT_FALLBACK,
    content_lines, extract_abstract, extract_authors, extract_pmc_id, extract_title,
    fallback_title, truncate_chars, word_count,
};
pub use manifest::{Manifest, ManifestRecord, parse_line, parse_manifest};
pub use publication::{
    Atmosphere, Change, ExperimentType, Finding, Gravity, Level, Location, Publication,
    Quantitative, Radiation, SpaceEnvironment,
};
use serde::Serialize;

/// Source format of an article.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum ContentType {
    /// Scraped web page.
    #[default]
    #[serde(rename = "HTML")]
    Html,
    /// Extracted PDF text.
    #[serde(rename = "PDF")]
    Pdf,
}

impl ContentType {
    /// Manifest label.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Html => "HTML",
            Self::Pdf => "PDF",
        }
    }

    /// Parses a manifest label. Anything other than `PDF` is HTML.
    pub fn from_label(label: &str) -> Self {
        if label.trim().eq_ignore_ascii_case("pdf") {
            Self::Pdf
        } else {
            Self::Html
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_label(s))
    }
}

/// A normalized article.
///
/// Documents are immutable once built. `keywords` and `categories` are derived from `body`
/// and recomputing them from the same text gives the same result.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Manifest article id.
    pub id: u32,
    /// Display title.
    pub title: String,
    /// Source URL.
    pub url: String,
    /// Leading part of the body returned to callers.
    pub content: String,
    /// Word count.
    pub word_count: usize,
    /// HTML or PDF.
    pub content_type: ContentType,
    /// Bounded summary.
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    /// Detected vocabulary keywords, in detection order.
    pub keywords: Vec<String>,
    /// Category labels, never empty.
    pub categories: Vec<String>,
    /// PMC digits from the URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pmc_id: Option<String>,
    /// Full text, used for detection only.
    #[serde(skip)]
    pub body: String,
}
