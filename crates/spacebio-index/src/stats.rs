//! Aggregate corpus statistics.

use std::{collections::BTreeMap, fmt, str::FromStr};

use chrono::NaiveDate;
use serde::Serialize;
use spacebio_analyze::KeywordDetector;
use spacebio_document::Document;

use crate::SyntheticGenerator;

/// Keywords carried into the research trend series.
const TREND_TOPICS: usize = 10;

/// A keyword and the number of documents mentioning it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeywordCount {
    /// Vocabulary keyword.
    pub keyword: String,
    /// Documents containing it.
    pub count: usize,
}

/// Publications in one month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyCount {
    /// Month label.
    pub month: String,
    /// Publication count.
    pub count: u32,
}

/// Activity on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyActivity {
    /// ISO date.
    pub date: String,
    /// Articles processed.
    pub articles: u32,
    /// Words processed.
    pub words: u32,
}

/// Growth of one research topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResearchTrend {
    /// Topic name.
    pub topic: String,
    /// Articles on the topic.
    pub articles: usize,
    /// Growth in percent.
    pub growth: i32,
}

/// Aggregate statistics over a corpus.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CorpusStats {
    /// Number of documents.
    pub total_articles: usize,
    /// Sum of word counts.
    pub total_words: usize,
    /// Mean word count, rounded.
    pub average_words: usize,
    /// Documents per content type label.
    pub content_types: BTreeMap<String, usize>,
    /// Most frequent vocabulary keywords.
    pub top_keywords: Vec<KeywordCount>,
    /// Documents per category.
    pub categories_count: BTreeMap<String, usize>,
    /// Synthetic monthly publication counts.
    pub monthly_publications: Vec<MonthlyCount>,
    /// Synthetic daily activity.
    pub daily_activity: Vec<DailyActivity>,
    /// Top keywords with synthetic growth.
    pub research_trends: Vec<ResearchTrend>,
}

impl CorpusStats {
    /// Computes statistics over `documents`.
    ///
    /// Keyword counts are document frequencies over the full vocabulary, not the capped
    /// per-document keyword lists.
    pub fn compute(
        documents: &[Document],
        keywords: &KeywordDetector,
        top: usize,
        synthetic: &mut SyntheticGenerator,
        today: NaiveDate,
    ) -> Self {
        let total_articles = documents.len();
        let total_words: usize = documents.iter().map(|d| d.word_count).sum();
        let average_words = if total_articles == 0 {
            0
        } else {
            (total_words + total_articles / 2) / total_articles
        };

        let mut content_types = BTreeMap::new();
        let mut categories_count = BTreeMap::new();
        for doc in documents {
            *content_types
                .entry(doc.content_type.as_str().to_string())
                .or_insert(0) += 1;
            for category in &doc.categories {
                *categories_count.entry(category.clone()).or_insert(0) += 1;
            }
        }

        let frequency = keywords.document_frequency(documents.iter().map(|d| d.body.as_str()));
        let top_keywords: Vec<KeywordCount> = keywords
            .top_keywords(&frequency, top)
            .into_iter()
            .map(|(keyword, count)| KeywordCount { keyword, count })
            .collect();
        let research_trends = top_keywords
            .iter()
            .take(TREND_TOPICS)
            .map(|k| ResearchTrend {
                topic: k.keyword.clone(),
                articles: k.count,
                growth: synthetic.growth(),
            })
            .collect();

        Self {
            total_articles,
            total_words,
            average_words,
            content_types,
            top_keywords,
            categories_count,
            monthly_publications: synthetic.monthly(),
            daily_activity: synthetic.daily(today),
            research_trends,
        }
    }

    /// Projects one view of the statistics.
    pub fn view(&self, view: StatsView) -> StatsReport {
        match view {
            StatsView::Overview => StatsReport::Overview(Overview {
                total_articles: self.total_articles,
                total_words: self.total_words,
                average_words: self.average_words,
                content_types: self.content_types.clone(),
            }),
            StatsView::Keywords => StatsReport::Keywords(KeywordsReport {
                top_keywords: self.top_keywords.clone(),
                total: self.top_keywords.len(),
            }),
            StatsView::Categories => StatsReport::Categories(CategoriesReport {
                categories_count: self.categories_count.clone(),
                total: self.categories_count.len(),
            }),
            StatsView::Trends => StatsReport::Trends(TrendsReport {
                monthly_publications: self.monthly_publications.clone(),
                daily_activity: self.daily_activity.clone(),
                research_trends: self.research_trends.clone(),
            }),
            StatsView::Full => StatsReport::Full(Box::new(self.clone())),
        }
    }
}

/// Named projections of `CorpusStats`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatsView {
    /// Totals and content types.
    #[default]
    Overview,
    /// Top keywords.
    Keywords,
    /// Category counts.
    Categories,
    /// Activity series and trends.
    Trends,
    /// Everything.
    Full,
}

impl StatsView {
    /// All views, in display order.
    pub const ALL: [Self; 5] = [
        Self::Overview,
        Self::Keywords,
        Self::Categories,
        Self::Trends,
        Self::Full,
    ];

    /// Lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Overview => "overview",
            Self::Keywords => "keywords",
            Self::Categories => "categories",
            Self::Trends => "trends",
            Self::Full => "full",
        }
    }
}

impl fmt::Display for StatsView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatsView {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!("unknown view '{s}' (expected overview, keywords, categories, trends or full)")
            })
    }
}

/// Totals and content types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Overview {
    /// Number of documents.
    pub total_articles: usize,
    /// Sum of word counts.
    pub total_words: usize,
    /// Mean word count.
    pub average_words: usize,
    /// Documents per content type.
    pub content_types: BTreeMap<String, usize>,
}

/// Top keywords.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordsReport {
    /// Keywords by frequency.
    pub top_keywords: Vec<KeywordCount>,
    /// Number of keywords listed.
    pub total: usize,
}

/// Category counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoriesReport {
    /// Documents per category.
    pub categories_count: BTreeMap<String, usize>,
    /// Number of categories.
    pub total: usize,
}

/// Activity series and trends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendsReport {
    /// Monthly publication counts.
    pub monthly_publications: Vec<MonthlyCount>,
    /// Daily activity.
    pub daily_activity: Vec<DailyActivity>,
    /// Research trends.
    pub research_trends: Vec<ResearchTrend>,
}

/// One projected view.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StatsReport {
    /// `overview`.
    Overview(Overview),
    /// `keywords`.
    Keywords(KeywordsReport),
    /// `categories`.
    Categories(CategoriesReport),
    /// `trends`.
    Trends(TrendsReport),
    /// `full`.
    Full(Box<CorpusStats>),
}

#[cfg(test)]
mod tests {
    use spacebio_document::ContentType;

    use super::*;

    fn doc(id: u32, words: usize, content_type: ContentType, body: &str, categories: &[&str]) -> Document {
        Document {
            id,
            title: format!("doc {id}"),
            url: String::new(),
            content: body.to_string(),
            word_count: words,
            content_type,
            abstract_text: String::new(),
            keywords: vec![],
            categories: categories.iter().map(ToString::to_string).collect(),
            pmc_id: None,
            body: body.to_string(),
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    fn sample() -> CorpusStats {
        let docs = vec![
            doc(1, 100, ContentType::Html, "bone loss in space", &["Space Biology"]),
            doc(2, 201, ContentType::Pdf, "bone density", &["General Biology"]),
            doc(3, 300, ContentType::Html, "space radiation", &["Space Biology", "Radiation Biology"]),
        ];
        CorpusStats::compute(
            &docs,
            &KeywordDetector::default(),
            20,
            &mut SyntheticGenerator::seeded(1),
            today(),
        )
    }

    #[test]
    fn test_totals() {
        let stats = sample();
        assert_eq!(stats.total_articles, 3);
        assert_eq!(stats.total_words, 601);
        assert_eq!(stats.average_words, 200);
        assert_eq!(stats.content_types["HTML"], 2);
        assert_eq!(stats.content_types["PDF"], 1);
        assert_eq!(stats.categories_count["Space Biology"], 2);
        assert_eq!(stats.categories_count.len(), 3);
    }

    #[test]
    fn test_top_keywords_use_document_frequency() {
        let stats = sample();
        let top: Vec<(&str, usize)> = stats
            .top_keywords
            .iter()
            .map(|k| (k.keyword.as_str(), k.count))
            .collect();
        assert_eq!(top, vec![("space", 2), ("bone", 2), ("radiation", 1)]);
        assert_eq!(stats.research_trends.len(), 3);
        assert_eq!(stats.research_trends[0].topic, "space");
    }

    #[test]
    fn test_empty_corpus() {
        let stats = CorpusStats::compute(
            &[],
            &KeywordDetector::default(),
            20,
            &mut SyntheticGenerator::seeded(1),
            today(),
        );
        assert_eq!(stats.total_articles, 0);
        assert_eq!(stats.average_words, 0);
        assert!(stats.top_keywords.is_empty());
        assert_eq!(stats.monthly_publications.len(), 12);
    }

    #[test]
    fn test_views_serialize_like_routes() {
        let stats = sample();
        let overview = serde_json::to_value(stats.view(StatsView::Overview)).unwrap();
        assert_eq!(overview["totalArticles"], 3);
        assert_eq!(overview["contentTypes"]["PDF"], 1);
        assert!(overview.get("topKeywords").is_none());

        let keywords = serde_json::to_value(stats.view(StatsView::Keywords)).unwrap();
        assert_eq!(keywords["total"], 3);
        assert_eq!(keywords["topKeywords"][0]["keyword"], "space");

        let categories = serde_json::to_value(stats.view(StatsView::Categories)).unwrap();
        assert_eq!(categories["total"], 3);

        let trends = serde_json::to_value(stats.view(StatsView::Trends)).unwrap();
        assert_eq!(trends["dailyActivity"].as_array().unwrap().len(), 30);

        let full = serde_json::to_value(stats.view(StatsView::Full)).unwrap();
        assert_eq!(full["averageWords"], 200);
        assert!(full["researchTrends"].is_array());
    }

    #[test]
    fn test_view_names() {
        assert_eq!("Trends".parse::<StatsView>(), Ok(StatsView::Trends));
        assert!("weekly".parse::<StatsView>().is_err());
    }
}
