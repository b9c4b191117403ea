//! Cached corpus queries for spacebio.
//!
//! This crate serves searches, statistics and insights over a corpus of NASA bioscience
//! articles. It handles:
//! - Loading the corpus from a CSV manifest on disk, an embedded dataset or fixed fallback data
//! - Ranking articles and publications with a weighted substring heuristic
//! - Memoizing each derived resource behind its own time-to-live cache
//! - Computing statistics and rule-based research insights
//!
//! # Example
//!
//! ```no_run
//! use spacebio_config::Config;
//! use spacebio_index::{QueryEngine, StatsView};
//!
//! let engine = QueryEngine::from_config(&Config::default());
//! for doc in engine.search_articles("microgravity bone", 10, None) {
//!     println!("{} {}", doc.id, doc.title);
//! }
//! let overview = engine.stats_view(StatsView::Overview);
//! println!("{}", serde_json::to_string_pretty(&overview).unwrap());
//! ```

#![warn(missing_docs)]

mod cache;
mod clock;
mod engine;
mod error;
mod fallback;
mod insights;
mod loader;
mod publication;
mod rank;
mod response;
mod stats;
mod synthetic;

pub use cache::{CacheState, TtlCache};
pub use clock::{Clock, ManualClock, SystemClock};
pub use engine::QueryEngine;
pub use error::IndexError;
pub use fallback::{fallback_documents, fallback_stats};
pub use insights::{
    ContentAnalysis, Insight, InsightFilter, InsightKind, Priority, generate_insights,
    select_insights,
};
pub use loader::{
    Corpus, CorpusLoader, DataAvailability, DataOrigin, EmbeddedLoader, FallbackLoader,
    FilesystemLoader, loader_for, resolve_source, verify_data_availability,
};
pub use publication::{PUBLICATION_TITLE_PREFIX, PublicationBuilder};
pub use rank::{RankProfile, Rankable, Ranked, SearchQuery, rank, rank_scored, score};
pub use response::{
    ArticlesResponse, ErrorResponse, InsightsResponse, PublicationsResponse, StatsResponse,
};
pub use stats::{
    CategoriesReport, CorpusStats, DailyActivity, KeywordCount, KeywordsReport, MonthlyCount,
    Overview, ResearchTrend, StatsReport, StatsView, TrendsReport,
};
pub use synthetic::{JOURNALS, SyntheticGenerator};
