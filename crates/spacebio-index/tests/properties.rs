//! Property tests for ranking and tagging.

// Integration tests live outside cfg(test) by design
#![allow(clippy::tests_outside_test_module)]

use proptest::prelude::*;
use spacebio_analyze::Tagger;
use spacebio_config::{ScoreWeights, TaxonomySettings};
use spacebio_document::{ContentType, Document};
use spacebio_index::{RankProfile, SearchQuery, rank, rank_scored, score};

/// Words queries and documents are built from, so that matches actually happen.
const WORDS: &[&str] = &[
    "microgravity",
    "bone",
    "plant",
    "cell",
    "radiation",
    "immune",
    "orbit",
    "mouse",
    "(",
    "*",
    "a",
];

fn text(max_words: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(WORDS), 0..max_words).prop_map(|w| w.join(" "))
}

fn document() -> impl Strategy<Value = Document> {
    (text(6), text(12), prop::collection::vec(prop::sample::select(WORDS), 0..4)).prop_map(
        |(title, abstract_text, keywords)| Document {
            id: 0,
            title,
            url: String::new(),
            content: String::new(),
            word_count: 0,
            content_type: ContentType::Html,
            abstract_text,
            keywords: keywords.into_iter().map(String::from).collect(),
            categories: vec![],
            pmc_id: None,
            body: String::new(),
        },
    )
}

fn corpus() -> impl Strategy<Value = Vec<Document>> {
    prop::collection::vec(document(), 0..20).prop_map(|mut docs| {
        for (i, doc) in docs.iter_mut().enumerate() {
            doc.id = u32::try_from(i).unwrap_or(u32::MAX);
        }
        docs
    })
}

fn ids(docs: &[&Document]) -> Vec<u32> {
    docs.iter().map(|d| d.id).collect()
}

proptest! {
    #[test]
    fn test_results_never_exceed_limit(docs in corpus(), query in text(3), limit in 0usize..25) {
        let profile = RankProfile::default();
        prop_assert!(rank(&docs, &query, limit, &profile).len() <= limit);
    }

    #[test]
    fn test_blank_query_is_prefix(docs in corpus(), limit in 0usize..25, blank in "[ \t]{0,3}") {
        let profile = RankProfile::default();
        let expected: Vec<u32> = docs.iter().take(limit).map(|d| d.id).collect();
        prop_assert_eq!(ids(&rank(&docs, &blank, limit, &profile)), expected);
    }

    #[test]
    fn test_results_have_positive_scores(docs in corpus(), query in text(3)) {
        let profile = RankProfile::publications(&ScoreWeights::default());
        if let Some(parsed) = SearchQuery::parse(&query) {
            for ranked in rank_scored(&docs, &query, docs.len(), &profile) {
                prop_assert!(ranked.score > 0);
                prop_assert_eq!(ranked.score, score(ranked.item, &parsed, &profile));
            }
        }
    }

    #[test]
    fn test_scores_are_non_increasing(docs in corpus(), query in text(3)) {
        let profile = RankProfile::default();
        let ranked = rank_scored(&docs, &query, docs.len(), &profile);
        prop_assert!(ranked.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn test_ranking_is_deterministic(docs in corpus(), query in text(3), limit in 0usize..25) {
        let profile = RankProfile::default();
        let first = ids(&rank(&docs, &query, limit, &profile));
        let second = ids(&rank(&docs, &query, limit, &profile));
        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_tagger_never_returns_empty(input in ".{0,200}") {
        let tagger = Tagger::new(&TaxonomySettings::default());
        prop_assert!(!tagger.tag(&input).is_empty());
    }
}
