//! Weighted substring ranking.
//!
//! A query is lowercased and split on whitespace. Each term contributes independently:
//! - occurrences in the title and abstract, multiplied by their weights
//! - keywords and categories containing the term, multiplied by their weights
//! - flat bonuses when the experiment type, organism or mission contains the term
//!
//! Two bonuses apply once per document: the whole query appearing in the searchable text, and
//! the query naming the document's experiment type exactly.
//!
//! Terms are literal. Nothing in a query is interpreted as a pattern.

use spacebio_config::ScoreWeights;
use spacebio_document::{Document, ExperimentType, Publication};

/// A value the ranking heuristic can score.
///
/// Only the text fields are required; optional facets default to absent.
pub trait Rankable {
    /// Display title.
    fn title(&self) -> &str;

    /// Abstract text.
    fn abstract_text(&self) -> &str;

    /// Detected keywords.
    fn keywords(&self) -> &[String];

    /// Category labels.
    fn categories(&self) -> &[String] {
        &[]
    }

    /// Experiment type label.
    fn experiment_type(&self) -> Option<&str> {
        None
    }

    /// Model organism.
    fn organism(&self) -> Option<&str> {
        None
    }

    /// Mission name.
    fn mission(&self) -> Option<&str> {
        None
    }
}

impl Rankable for Document {
    fn title(&self) -> &str {
        &self.title
    }

    fn abstract_text(&self) -> &str {
        &self.abstract_text
    }

    fn keywords(&self) -> &[String] {
        &self.keywords
    }

    fn categories(&self) -> &[String] {
        &self.categories
    }
}

impl Rankable for Publication {
    fn title(&self) -> &str {
        &self.title
    }

    fn abstract_text(&self) -> &str {
        &self.abstract_text
    }

    fn keywords(&self) -> &[String] {
        &self.keywords
    }

    fn categories(&self) -> &[String] {
        &self.categories
    }

    fn experiment_type(&self) -> Option<&str> {
        Some(self.experiment_type.as_str())
    }

    fn organism(&self) -> Option<&str> {
        self.organism.as_deref()
    }

    fn mission(&self) -> Option<&str> {
        self.mission.as_deref()
    }
}

/// Which fields count toward a score, and how much.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankProfile {
    /// Field weights. A zero weight disables the field.
    pub weights: ScoreWeights,
}

impl RankProfile {
    /// Article search: title, abstract and keywords only.
    pub fn articles(weights: &ScoreWeights) -> Self {
        Self {
            weights: ScoreWeights {
                title: weights.title,
                abstract_text: weights.abstract_text,
                keyword: weights.keyword,
                category: 0,
                experiment_type: 0,
                organism: 0,
                mission: 0,
                phrase_bonus: 0,
                exact_type_bonus: 0,
            },
        }
    }

    /// Publication search: every field and both bonuses.
    pub fn publications(weights: &ScoreWeights) -> Self {
        Self { weights: *weights }
    }
}

impl Default for RankProfile {
    fn default() -> Self {
        Self::articles(&ScoreWeights::default())
    }
}

/// A normalized search query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    /// Trimmed, lowercased query.
    phrase: String,
    /// Whitespace-separated terms of `phrase`.
    terms: Vec<String>,
}

impl SearchQuery {
    /// Normalizes `query`. Returns `None` for a blank query.
    pub fn parse(query: &str) -> Option<Self> {
        let phrase = query.trim().to_lowercase();
        if phrase.is_empty() {
            return None;
        }
        let terms = phrase.split_whitespace().map(String::from).collect();
        Some(Self { phrase, terms })
    }

    /// The whole query.
    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    /// Individual terms.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }
}

/// Non-overlapping occurrences of `needle` in `haystack`.
fn occurrences(haystack: &str, needle: &str) -> u64 {
    haystack.matches(needle).count() as u64
}

/// Number of `values` containing `needle`.
fn containing(values: &[String], needle: &str) -> u64 {
    values.iter().filter(|v| v.contains(needle)).count() as u64
}

/// Lowercased searchable fields of one item.
struct Fields {
    /// Title.
    title: String,
    /// Abstract.
    abstract_text: String,
    /// Keywords.
    keywords: Vec<String>,
    /// Categories.
    categories: Vec<String>,
    /// Experiment type.
    experiment_type: String,
    /// Organism.
    organism: String,
    /// Mission.
    mission: String,
}

impl Fields {
    /// Lowercases the fields of `item`.
    fn of<T: Rankable + ?Sized>(item: &T) -> Self {
        let lower_all =
            |values: &[String]| -> Vec<String> { values.iter().map(|v| v.to_lowercase()).collect() };
        Self {
            title: item.title().to_lowercase(),
            abstract_text: item.abstract_text().to_lowercase(),
            keywords: lower_all(item.keywords()),
            categories: lower_all(item.categories()),
            experiment_type: item.experiment_type().unwrap_or_default().to_lowercase(),
            organism: item.organism().unwrap_or_default().to_lowercase(),
            mission: item.mission().unwrap_or_default().to_lowercase(),
        }
    }

    /// Every field joined with spaces.
    fn composite(&self) -> String {
        let keywords = self.keywords.join(" ");
        let categories = self.categories.join(" ");
        [
            self.title.as_str(),
            self.abstract_text.as_str(),
            keywords.as_str(),
            categories.as_str(),
            self.experiment_type.as_str(),
            self.organism.as_str(),
            self.mission.as_str(),
        ]
        .join(" ")
    }
}

/// Scores one item against a query.
pub fn score<T: Rankable + ?Sized>(item: &T, query: &SearchQuery, profile: &RankProfile) -> u64 {
    let w = &profile.weights;
    let fields = Fields::of(item);
    let mut score = 0u64;

    for term in query.terms() {
        let term = term.as_str();
        score += occurrences(&fields.title, term) * u64::from(w.title);
        score += occurrences(&fields.abstract_text, term) * u64::from(w.abstract_text);
        score += containing(&fields.keywords, term) * u64::from(w.keyword);
        score += containing(&fields.categories, term) * u64::from(w.category);
        if fields.experiment_type.contains(term) {
            score += u64::from(w.experiment_type);
        }
        if fields.organism.contains(term) {
            score += u64::from(w.organism);
        }
        if fields.mission.contains(term) {
            score += u64::from(w.mission);
        }
    }

    let phrase = query.phrase();
    if w.phrase_bonus > 0 && phrase.chars().count() > 2 && fields.composite().contains(phrase) {
        score += u64::from(w.phrase_bonus);
    }
    if w.exact_type_bonus > 0
        && ExperimentType::from_label(phrase).is_some()
        && fields.experiment_type == phrase
    {
        score += u64::from(w.exact_type_bonus);
    }

    score
}

/// An item with its score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ranked<'a, T> {
    /// The scored item.
    pub item: &'a T,
    /// Its score. Always positive for a non-blank query.
    pub score: u64,
}

/// Ranks `items` against `query` and keeps at most `limit`, with scores.
///
/// A blank query returns the first `limit` items in input order with a score of zero.
/// Otherwise items scoring zero are dropped and the rest are stably sorted by descending
/// score, so equal scores keep input order.
pub fn rank_scored<'a, T, I>(
    items: I,
    query: &str,
    limit: usize,
    profile: &RankProfile,
) -> Vec<Ranked<'a, T>>
where
    T: Rankable + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let Some(query) = SearchQuery::parse(query) else {
        return items
            .into_iter()
            .take(limit)
            .map(|item| Ranked { item, score: 0 })
            .collect();
    };

    let mut ranked: Vec<Ranked<'a, T>> = items
        .into_iter()
        .map(|item| Ranked {
            item,
            score: score(item, &query, profile),
        })
        .filter(|r| r.score > 0)
        .collect();
    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked.truncate(limit);
    ranked
}

/// Ranks `items` against `query` and keeps at most `limit`.
pub fn rank<'a, T, I>(items: I, query: &str, limit: usize, profile: &RankProfile) -> Vec<&'a T>
where
    T: Rankable + 'a,
    I: IntoIterator<Item = &'a T>,
{
    rank_scored(items, query, limit, profile)
        .into_iter()
        .map(|r| r.item)
        .collect()
}
