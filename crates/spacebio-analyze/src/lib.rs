//! Text analysis for spacebio.
//!
//! Everything here is a pure function of its input text and the configured dictionaries:
//!
//! 1. **Tagging**: coarse topical categories from a keyword dictionary
//! 2. **Keyword detection**: vocabulary terms present in an article
//! 3. **Classification**: experiment type, organism, mission, environment and findings
//!
//! `DocumentBuilder` combines these with the extraction heuristics of `spacebio-document` to
//! turn raw article text into a `Document`.

#![warn(missing_docs)]

mod builder;
pub mod classify;
mod keywords;
mod tagger;

pub use builder::{ARTICLE_TITLE_PREFIX, DocumentBuilder, RawArticle};
pub use classify::FindingKind;
pub use keywords::KeywordDetector;
pub use tagger::Tagger;
