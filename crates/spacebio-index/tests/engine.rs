//! Integration tests for the query engine over on-disk corpora.

// Integration tests live outside cfg(test) by design
#![allow(clippy::tests_outside_test_module)]

use std::{fs, path::Path, sync::Arc, time::Duration};

use spacebio_config::{Config, DataSource};
use spacebio_document::Document;
use spacebio_index::{
    CacheState, DataOrigin, InsightFilter, InsightKind, ManualClock, QueryEngine, RankProfile,
    StatsView, loader_for, rank_scored, verify_data_availability,
};

/// Padding that keeps article files above the minimum size without adding vocabulary.
const PADDING: &str = "Results\nSamples were returned to Earth for analysis after the flight.\n";

/// One row of a test corpus.
struct Article {
    id: u32,
    title: &'static str,
    body: &'static str,
}

const ARTICLES: &[Article] = &[
    Article {
        id: 1,
        title: "Microgravity and bone density",
        body: "Microgravity and bone density\nAbstract\nBone tissue thins during long missions.\n",
    },
    Article {
        id: 2,
        title: "Microgravity alters muscle",
        body: "Microgravity alters muscle fibres\nAbstract\nMuscle fibres shrink in orbit.\n",
    },
    Article {
        id: 3,
        title: "Microgravity and tendons",
        body: "Microgravity and tendon stiffness\nAbstract\nTendons lose stiffness in orbit.\n",
    },
    Article {
        id: 4,
        title: "Bone loss during long missions",
        body: "Bone loss during long missions\nAbstract\nMicrogravity drives bone loss in rodents.\n",
    },
    Article {
        id: 5,
        title: "Brain plasticity in orbit",
        body: "Brain plasticity in orbit and after landing\nAbstract\nThe brain rewires itself.\n",
    },
    Article {
        id: 6,
        title: "Arabidopsis roots in orbit grow sideways",
        body: "Arabidopsis roots in orbit grow sideways\nAbstract\nPlant roots lose their bearing.\n",
    },
];

fn write(root: &Path, rel: &str, contents: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

fn write_corpus(root: &Path, articles: &[Article]) {
    let mut manifest = String::from("article_id,url,title,saved_file_path\n");
    for article in articles {
        let file = format!("scraped_articles/article_{}.txt", article.id);
        manifest.push_str(&format!(
            "{},https://www.ncbi.nlm.nih.gov/pmc/articles/PMC{}/,\"{}\",{file}\n",
            article.id,
            100 + article.id,
            article.title
        ));
        write(root, &file, &format!("{}{PADDING}", article.body));
    }
    write(root, "scraped_summary.csv", &manifest);
}

fn config(root: &Path) -> Config {
    let mut config = Config::default();
    config.data.root = root.to_path_buf();
    config.data.source = DataSource::Filesystem;
    config.synthetic.seed = Some(11);
    config
}

fn ids<'a>(docs: impl IntoIterator<Item = &'a Document>) -> Vec<u32> {
    docs.into_iter().map(|d| d.id).collect()
}

#[test]
fn test_title_matches_rank_above_abstract_matches() {
    let dir = tempfile::tempdir().unwrap();
    write_corpus(dir.path(), ARTICLES);
    let engine = QueryEngine::from_config(&config(dir.path()));

    let results = engine.search_articles("microgravity", 10, None);
    assert_eq!(ids(&results), vec![1, 2, 3, 4]);
    assert_eq!(engine.origin(), DataOrigin::Filesystem);
}

#[test]
fn test_blank_query_returns_prefix() {
    let dir = tempfile::tempdir().unwrap();
    write_corpus(dir.path(), ARTICLES);
    let engine = QueryEngine::from_config(&config(dir.path()));

    assert_eq!(ids(&engine.search_articles("", 5, None)), vec![1, 2, 3, 4, 5]);
    assert_eq!(ids(&engine.search_articles("   ", 2, None)), vec![1, 2]);
}

#[test]
fn test_category_filter_applies_before_ranking() {
    let dir = tempfile::tempdir().unwrap();
    write_corpus(dir.path(), ARTICLES);
    let engine = QueryEngine::from_config(&config(dir.path()));

    let neuro = engine.search_articles("", 10, Some("Neuroscience"));
    assert_eq!(ids(&neuro), vec![5]);
    assert!(engine.search_articles("microgravity", 10, Some("Neuroscience")).is_empty());
    assert!(engine.search_articles("", 10, Some("neuroscience")).is_empty());
}

#[test]
fn test_exact_experiment_type_bonus() {
    let dir = tempfile::tempdir().unwrap();
    write_corpus(dir.path(), ARTICLES);
    let config = config(dir.path());
    let engine = QueryEngine::from_config(&config);

    let results = engine.search_publications("plant biology", 10);
    assert_eq!(results[0].id, "pub-6");

    let publications = engine.all_publications();
    let with_bonus = RankProfile::publications(&config.search.weights);
    let mut weights = config.search.weights;
    weights.exact_type_bonus = 0;
    let without_bonus = RankProfile::publications(&weights);

    let scored = rank_scored(publications.iter(), "plant biology", 10, &with_bonus);
    let plain = rank_scored(publications.iter(), "plant biology", 10, &without_bonus);
    assert_eq!(scored[0].item.id, "pub-6");
    let plain_score = plain
        .iter()
        .find(|r| r.item.id == "pub-6")
        .map(|r| r.score)
        .unwrap();
    assert_eq!(scored[0].score, plain_score + 50);
}

#[test]
fn test_article_lookup() {
    let dir = tempfile::tempdir().unwrap();
    write_corpus(dir.path(), ARTICLES);
    let engine = QueryEngine::from_config(&config(dir.path()));

    let doc = engine.article(4).unwrap();
    assert_eq!(doc.title, "Bone loss during long missions");
    assert_eq!(doc.pmc_id.as_deref(), Some("104"));
    assert!(engine.article(99).is_none());
}

#[test]
fn test_cache_serves_stale_disk_until_ttl() {
    let dir = tempfile::tempdir().unwrap();
    write_corpus(dir.path(), &ARTICLES[..3]);
    let clock = Arc::new(ManualClock::new());
    let config = config(dir.path());
    let engine = QueryEngine::with_clock(
        &config,
        loader_for(&config, DataSource::Filesystem),
        clock.clone(),
    );

    assert_eq!(engine.search_articles("", 100, None).len(), 3);
    write_corpus(dir.path(), ARTICLES);

    clock.advance(Duration::from_secs(599));
    assert_eq!(engine.search_articles("", 100, None).len(), 3);
    assert_eq!(engine.cache_states()["articles"], CacheState::Valid);

    clock.advance(Duration::from_secs(1));
    assert_eq!(engine.cache_states()["articles"], CacheState::Stale);
    assert_eq!(engine.search_articles("", 100, None).len(), 6);
}

#[test]
fn test_missing_data_serves_fallback() {
    let dir = tempfile::tempdir().unwrap();
    let engine = QueryEngine::from_config(&config(dir.path()));

    assert_eq!(engine.origin(), DataOrigin::Fallback);
    let docs = engine.search_articles("immune", 10, None);
    assert_eq!(ids(&docs), vec![5]);

    let stats = engine.stats();
    assert_eq!(stats.total_articles, 5);
    assert_eq!(stats.average_words, 2700);

    let availability = verify_data_availability(&config(dir.path()).data);
    assert!(!availability.is_available());
}

#[test]
fn test_embedded_source() {
    let engine = QueryEngine::with_source(&Config::default(), DataSource::Embedded);
    assert_eq!(engine.origin(), DataOrigin::Embedded);
    assert_eq!(engine.search_articles("", 1000, None).len(), 30);
    assert!(!engine.search_articles("microgravity", 10, None).is_empty());
}

#[test]
fn test_stats_and_insights_over_corpus() {
    let dir = tempfile::tempdir().unwrap();
    write_corpus(dir.path(), ARTICLES);
    let engine = QueryEngine::from_config(&config(dir.path()));

    let stats = engine.stats();
    assert_eq!(stats.total_articles, 6);
    assert_eq!(stats.content_types["HTML"], 6);
    assert_eq!(stats.daily_activity.len(), 30);

    let keywords = serde_json::to_value(engine.stats_view(StatsView::Keywords)).unwrap();
    assert_eq!(keywords["topKeywords"][0]["keyword"], "microgravity");

    let gaps = engine.insights(InsightFilter::Kind(InsightKind::Gap), 10);
    assert!(!gaps.is_empty());
    assert!(gaps.iter().all(|i| i.kind == InsightKind::Gap));
    assert_eq!(engine.insights(InsightFilter::All, 2).len(), 2);
}
