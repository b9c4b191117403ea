//! The cached query engine.
//!
//! One engine is built at startup and shared by reference. It owns a corpus loader and one TTL
//! cache per resource. Derived resources (publications, statistics, insights) read the corpus
//! through the articles cache, but each keeps its own timestamp and expires on its own.

use std::{
    collections::BTreeMap,
    sync::{Arc, Mutex, PoisonError},
};

use chrono::Utc;
use spacebio_analyze::KeywordDetector;
use spacebio_config::{Config, DataSource};
use spacebio_document::{Document, Publication};
use tracing::{debug, info};

use crate::{
    CacheState, Clock, ContentAnalysis, Corpus, CorpusLoader, CorpusStats, DataOrigin, Insight,
    InsightFilter, PublicationBuilder, RankProfile, StatsReport, StatsView, SyntheticGenerator,
    SystemClock, TtlCache, fallback_stats, generate_insights, loader_for, rank, select_insights,
};

/// Serves searches, lookups, statistics and insights from cached data.
pub struct QueryEngine {
    /// Source of the corpus.
    loader: Box<dyn CorpusLoader>,
    /// Vocabulary used for statistics and insights.
    keywords: KeywordDetector,
    /// Enriches documents into publications.
    publication_builder: PublicationBuilder,
    /// Weights for article search.
    article_profile: RankProfile,
    /// Weights for publication search.
    publication_profile: RankProfile,
    /// Keywords reported in statistics.
    top_keywords: usize,
    /// Synthetic display values.
    synthetic: Mutex<SyntheticGenerator>,
    /// Loaded corpus.
    articles: TtlCache<Corpus>,
    /// Publications derived from the corpus.
    publications: TtlCache<Vec<Publication>>,
    /// Corpus statistics.
    stats: TtlCache<CorpusStats>,
    /// Generated insights.
    insights: TtlCache<Vec<Insight>>,
}

impl QueryEngine {
    /// Creates an engine for the configured data source.
    pub fn from_config(config: &Config) -> Self {
        Self::with_source(config, config.data.source)
    }

    /// Creates an engine for an explicit data source.
    pub fn with_source(config: &Config, source: DataSource) -> Self {
        Self::new(config, loader_for(config, source))
    }

    /// Creates an engine around `loader` on the system clock.
    pub fn new(config: &Config, loader: Box<dyn CorpusLoader>) -> Self {
        Self::with_clock(config, loader, Arc::new(SystemClock))
    }

    /// Creates an engine around `loader` whose caches read `clock`.
    pub fn with_clock(config: &Config, loader: Box<dyn CorpusLoader>, clock: Arc<dyn Clock>) -> Self {
        let cache = &config.cache;
        debug!(loader = %loader.describe(), "creating query engine");
        Self {
            keywords: KeywordDetector::new(&config.taxonomy, config.processing.max_keywords),
            publication_builder: PublicationBuilder::new(&config.processing),
            article_profile: RankProfile::articles(&config.search.weights),
            publication_profile: RankProfile::publications(&config.search.weights),
            top_keywords: config.processing.top_keywords,
            synthetic: Mutex::new(SyntheticGenerator::new(config.synthetic.seed)),
            articles: TtlCache::with_clock("articles", cache.articles_ttl(), Arc::clone(&clock)),
            publications: TtlCache::with_clock(
                "publications",
                cache.publications_ttl(),
                Arc::clone(&clock),
            ),
            stats: TtlCache::with_clock("stats", cache.stats_ttl(), Arc::clone(&clock)),
            insights: TtlCache::with_clock("insights", cache.insights_ttl(), clock),
            loader,
        }
    }

    /// Describes the loader.
    pub fn describe_loader(&self) -> String {
        self.loader.describe()
    }

    /// The current corpus, loading it if needed.
    pub fn corpus(&self) -> Arc<Corpus> {
        self.articles.get_or_load(
            || {
                let corpus = self.loader.load()?;
                info!(
                    documents = corpus.len(),
                    origin = %corpus.origin,
                    "corpus loaded"
                );
                Ok(corpus)
            },
            Corpus::fallback,
        )
    }

    /// Where the current corpus came from.
    pub fn origin(&self) -> DataOrigin {
        self.corpus().origin
    }

    /// Ranks articles against `query`.
    ///
    /// When `category` is given only articles carrying exactly that category are ranked. A blank
    /// query returns the first `limit` articles in corpus order.
    pub fn search_articles(&self, query: &str, limit: usize, category: Option<&str>) -> Vec<Document> {
        let corpus = self.corpus();
        let candidates = corpus
            .documents
            .iter()
            .filter(|doc| category.is_none_or(|c| doc.categories.iter().any(|dc| dc == c)));
        let results: Vec<Document> = rank(candidates, query, limit, &self.article_profile)
            .into_iter()
            .cloned()
            .collect();
        debug!(query, results = results.len(), "article search");
        results
    }

    /// Looks up an article by id.
    pub fn article(&self, id: u32) -> Option<Document> {
        self.corpus().documents.iter().find(|d| d.id == id).cloned()
    }

    /// Every publication, building them if needed.
    pub fn all_publications(&self) -> Arc<Vec<Publication>> {
        self.publications.get_or_load(
            || Ok(self.build_publications(&self.corpus().documents)),
            || self.build_publications(&Corpus::fallback().documents),
        )
    }

    /// Ranks publications against `query`.
    pub fn search_publications(&self, query: &str, limit: usize) -> Vec<Publication> {
        let publications = self.all_publications();
        let results: Vec<Publication> =
            rank(publications.iter(), query, limit, &self.publication_profile)
                .into_iter()
                .cloned()
                .collect();
        debug!(query, results = results.len(), "publication search");
        results
    }

    /// Corpus statistics, computing them if needed.
    pub fn stats(&self) -> Arc<CorpusStats> {
        self.stats.get_or_load(
            || {
                let corpus = self.corpus();
                if corpus.origin == DataOrigin::Fallback {
                    return Ok(fallback_stats());
                }
                let mut synthetic = self.synthetic.lock().unwrap_or_else(PoisonError::into_inner);
                Ok(CorpusStats::compute(
                    &corpus.documents,
                    &self.keywords,
                    self.top_keywords,
                    &mut synthetic,
                    Utc::now().date_naive(),
                ))
            },
            fallback_stats,
        )
    }

    /// One view of the corpus statistics.
    pub fn stats_view(&self, view: StatsView) -> StatsReport {
        self.stats().view(view)
    }

    /// Every generated insight, generating them if needed.
    pub fn all_insights(&self) -> Arc<Vec<Insight>> {
        let generate = |documents: &[Document]| {
            generate_insights(&ContentAnalysis::analyze(documents, &self.keywords), Utc::now())
        };
        self.insights.get_or_load(
            || Ok(generate(&self.corpus().documents)),
            || generate(&Corpus::fallback().documents),
        )
    }

    /// Insights passing `filter`, at most `limit`.
    pub fn insights(&self, filter: InsightFilter, limit: usize) -> Vec<Insight> {
        select_insights(&self.all_insights(), filter, limit)
    }

    /// Drops every cached resource, so the next read reloads.
    pub fn refresh(&self) {
        self.articles.invalidate();
        self.publications.invalidate();
        self.stats.invalidate();
        self.insights.invalidate();
        info!("caches invalidated");
    }

    /// State of each cache, by resource name.
    pub fn cache_states(&self) -> BTreeMap<&'static str, CacheState> {
        [
            (self.articles.name(), self.articles.state()),
            (self.publications.name(), self.publications.state()),
            (self.stats.name(), self.stats.state()),
            (self.insights.name(), self.insights.state()),
        ]
        .into_iter()
        .collect()
    }

    /// Enriches `documents`, drawing synthetic fields from the shared generator.
    fn build_publications(&self, documents: &[Document]) -> Vec<Publication> {
        let now = Utc::now();
        let mut synthetic = self.synthetic.lock().unwrap_or_else(PoisonError::into_inner);
        documents
            .iter()
            .map(|doc| self.publication_builder.build(doc, &mut synthetic, now))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::{
        sync::atomic::{AtomicUsize, Ordering},
        time::Duration,
    };

    use super::*;
    use crate::{EmbeddedLoader, FallbackLoader, IndexError, ManualClock};

    /// Counts loads and fails on demand.
    struct CountingLoader {
        loads: Arc<AtomicUsize>,
        fail: bool,
    }

    impl CorpusLoader for CountingLoader {
        fn load(&self) -> Result<Corpus, IndexError> {
            self.loads.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(IndexError::ForcedFallback);
            }
            EmbeddedLoader::default().load()
        }

        fn describe(&self) -> String {
            "counting".into()
        }
    }

    fn engine(fail: bool) -> (QueryEngine, Arc<AtomicUsize>, Arc<ManualClock>) {
        let loads = Arc::new(AtomicUsize::new(0));
        let clock = Arc::new(ManualClock::new());
        let mut config = Config::default();
        config.synthetic.seed = Some(3);
        let loader = CountingLoader {
            loads: Arc::clone(&loads),
            fail,
        };
        let engine = QueryEngine::with_clock(&config, Box::new(loader), clock.clone());
        (engine, loads, clock)
    }

    #[test]
    fn test_cache_states_follow_reads() {
        let (engine, loads, clock) = engine(false);
        assert!(engine.cache_states().values().all(|s| *s == CacheState::Empty));

        engine.search_articles("", 5, None);
        let states = engine.cache_states();
        assert_eq!(states["articles"], CacheState::Valid);
        assert_eq!(states["stats"], CacheState::Empty);
        assert_eq!(loads.load(Ordering::SeqCst), 1);

        clock.advance(Duration::from_secs(600));
        assert_eq!(engine.cache_states()["articles"], CacheState::Stale);
        engine.article(1);
        assert_eq!(loads.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_failure_serves_fallback_once_per_ttl() {
        let (engine, loads, _clock) = engine(true);
        assert_eq!(engine.origin(), DataOrigin::Fallback);
        assert_eq!(engine.search_articles("", 100, None).len(), 5);
        assert_eq!(engine.stats().total_words, 13_500);
        assert_eq!(loads.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_refresh_reloads() {
        let (engine, loads, _clock) = engine(false);
        engine.corpus();
        engine.refresh();
        assert!(engine.cache_states().values().all(|s| *s == CacheState::Empty));
        engine.corpus();
        assert_eq!(loads.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_derived_caches_expire_independently() {
        let (engine, _loads, clock) = engine(false);
        engine.stats();
        engine.all_insights();
        clock.advance(Duration::from_secs(300));
        let states = engine.cache_states();
        assert_eq!(states["stats"], CacheState::Stale);
        assert_eq!(states["insights"], CacheState::Valid);
        assert_eq!(states["articles"], CacheState::Valid);
    }

    #[test]
    fn test_publications_follow_corpus() {
        let engine = QueryEngine::new(&Config::default(), Box::new(FallbackLoader));
        let publications = engine.all_publications();
        assert_eq!(publications.len(), 5);
        assert_eq!(publications[0].id, "pub-1");

        let hits = engine.search_publications("immune", 10);
        assert_eq!(hits[0].id, "pub-5");
    }
}
