//! Rule-based research insights.
//!
//! A `ContentAnalysis` summarizes the corpus; each generator turns that summary into zero or
//! more insights. Every ratio is guarded, so an empty corpus yields only the unconditional
//! insights.

use std::{
    collections::{BTreeMap, HashMap},
    fmt,
    str::FromStr,
};

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use spacebio_analyze::KeywordDetector;
use spacebio_document::{ContentType, Document};

/// Topics kept in `common_topics`.
const COMMON_TOPICS: usize = 10;

/// Kind of insight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    /// Observed research trend.
    Trend,
    /// Underrepresented research area.
    Gap,
    /// Suggested action.
    Recommendation,
    /// Expected development.
    Prediction,
}

impl InsightKind {
    /// All kinds, in generation order.
    pub const ALL: [Self; 4] = [
        Self::Trend,
        Self::Gap,
        Self::Recommendation,
        Self::Prediction,
    ];

    /// Lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Trend => "trend",
            Self::Gap => "gap",
            Self::Recommendation => "recommendation",
            Self::Prediction => "prediction",
        }
    }

    /// Prefix of insight ids of this kind.
    fn id_prefix(self) -> &'static str {
        match self {
            Self::Trend => "trend",
            Self::Gap => "gap",
            Self::Recommendation => "rec",
            Self::Prediction => "pred",
        }
    }
}

impl fmt::Display for InsightKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which insights to return.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InsightFilter {
    /// Every kind.
    #[default]
    All,
    /// One kind.
    Kind(InsightKind),
}

impl InsightFilter {
    /// Returns true if `insight` passes the filter.
    pub fn matches(self, insight: &Insight) -> bool {
        match self {
            Self::All => true,
            Self::Kind(kind) => insight.kind == kind,
        }
    }
}

impl fmt::Display for InsightFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Kind(kind) => kind.fmt(f),
        }
    }
}

impl FromStr for InsightFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        InsightKind::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(s))
            .map(Self::Kind)
            .ok_or_else(|| {
                format!(
                    "unknown insight type '{s}' (expected all, trend, gap, recommendation or prediction)"
                )
            })
    }
}

/// Urgency of an insight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Informational.
    Low,
    /// Worth attention.
    Medium,
    /// Act on it.
    High,
}

/// One generated insight.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Insight {
    /// `<prefix>-<unix millis>-<n>`.
    pub id: String,
    /// Kind.
    #[serde(rename = "type")]
    pub kind: InsightKind,
    /// Headline.
    pub title: String,
    /// Explanation.
    pub description: String,
    /// Confidence in `[0, 1]`.
    pub confidence: f64,
    /// Supporting observations.
    pub evidence: Vec<String>,
    /// Consequences.
    pub implications: Vec<String>,
    /// Whether it suggests an action.
    pub actionable: bool,
    /// Urgency.
    pub priority: Priority,
    /// RFC 3339 creation time.
    pub created_at: String,
}

/// Summary of a corpus that insights are generated from.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentAnalysis {
    /// Number of documents.
    pub total_articles: usize,
    /// Documents mentioning each vocabulary keyword.
    pub keyword_frequency: HashMap<String, usize>,
    /// Documents per category.
    pub category_distribution: BTreeMap<String, usize>,
    /// Documents per content type.
    pub content_types: BTreeMap<ContentType, usize>,
    /// Mean word count.
    pub average_word_count: f64,
    /// Most frequent keywords, ties in vocabulary order.
    pub common_topics: Vec<String>,
    /// Underrepresented research areas.
    pub research_gaps: Vec<&'static str>,
}

impl ContentAnalysis {
    /// Analyzes `documents` against the detector's vocabulary.
    pub fn analyze(documents: &[Document], keywords: &KeywordDetector) -> Self {
        let keyword_frequency =
            keywords.document_frequency(documents.iter().map(|d| d.body.as_str()));
        let mut category_distribution = BTreeMap::new();
        let mut content_types = BTreeMap::new();
        for doc in documents {
            *content_types.entry(doc.content_type).or_insert(0) += 1;
            for category in &doc.categories {
                *category_distribution.entry(category.clone()).or_insert(0) += 1;
            }
        }

        let total_articles = documents.len();
        let average_word_count = if total_articles == 0 {
            0.0
        } else {
            documents.iter().map(|d| d.word_count).sum::<usize>() as f64 / total_articles as f64
        };
        let common_topics = keywords
            .top_keywords(&keyword_frequency, COMMON_TOPICS)
            .into_iter()
            .map(|(topic, _)| topic)
            .collect();
        let research_gaps = research_gaps(&keyword_frequency, &category_distribution);

        Self {
            total_articles,
            keyword_frequency,
            category_distribution,
            content_types,
            average_word_count,
            common_topics,
            research_gaps,
        }
    }

    /// Documents mentioning `keyword`.
    fn frequency(&self, keyword: &str) -> usize {
        self.keyword_frequency.get(keyword).copied().unwrap_or(0)
    }

    /// Documents tagged `category`.
    fn category(&self, category: &str) -> usize {
        self.category_distribution.get(category).copied().unwrap_or(0)
    }

    /// `count` as a share of all documents, if there are any.
    fn share(&self, count: usize) -> Option<f64> {
        (self.total_articles > 0).then(|| count as f64 / self.total_articles as f64)
    }
}

/// Research areas that are underrepresented.
///
/// Category shares are taken over all category assignments, so a document with three
/// categories counts three times.
fn research_gaps(
    keywords: &HashMap<String, usize>,
    categories: &BTreeMap<String, usize>,
) -> Vec<&'static str> {
    let assignments: usize = categories.values().sum();
    let share = |name: &str| {
        (assignments > 0)
            .then(|| categories.get(name).copied().unwrap_or(0) as f64 / assignments as f64)
    };
    let frequency = |name: &str| keywords.get(name).copied().unwrap_or(0);

    let mut gaps = Vec::new();
    if share("Radiation Biology").is_some_and(|s| s < 0.10) {
        gaps.push("Radiation biology research in space environments");
    }
    if share("Neuroscience").is_some_and(|s| s < 0.15) {
        gaps.push("Neurological adaptations to microgravity");
    }
    if frequency("therapeutic") < 5 {
        gaps.push("Therapeutic interventions for space-related health issues");
    }
    if frequency("biomarker") < 3 {
        gaps.push("Biomarker identification for space medicine");
    }
    gaps
}

/// Builds insights of one kind with sequential ids.
struct InsightFactory {
    /// Unix milliseconds embedded in ids.
    millis: i64,
    /// RFC 3339 timestamp.
    created_at: String,
}

impl InsightFactory {
    /// Creates a factory stamping `now`.
    fn new(now: DateTime<Utc>) -> Self {
        Self {
            millis: now.timestamp_millis(),
            created_at: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    /// Creates one insight.
    #[allow(clippy::too_many_arguments)]
    fn make(
        &self,
        kind: InsightKind,
        n: usize,
        title: String,
        description: String,
        confidence: f64,
        evidence: Vec<String>,
        implications: &[&str],
        actionable: bool,
        priority: Priority,
    ) -> Insight {
        Insight {
            id: format!("{}-{}-{n}", kind.id_prefix(), self.millis),
            kind,
            title,
            description,
            confidence,
            evidence,
            implications: implications.iter().map(ToString::to_string).collect(),
            actionable,
            priority,
            created_at: self.created_at.clone(),
        }
    }
}

/// Uppercases the first character.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Trend insights: the top topic and a high PDF share.
fn trends(analysis: &ContentAnalysis, factory: &InsightFactory) -> Vec<Insight> {
    let mut insights = Vec::new();

    if let Some(topic) = analysis.common_topics.first()
        && let Some(share) = analysis.share(analysis.frequency(topic))
    {
        let count = analysis.frequency(topic);
        insights.push(factory.make(
            InsightKind::Trend,
            1,
            format!("Rising Interest in {} Research", capitalize(topic)),
            format!(
                "Analysis of {} articles shows {topic} is the most frequently mentioned topic, \
                 appearing in {count} publications. This indicates strong research focus in this area.",
                analysis.total_articles
            ),
            0.85,
            vec![
                format!("{count} articles mention {topic}"),
                format!("Represents {:.1}% of all publications", share * 100.0),
                "Consistent appearance across multiple research categories".to_string(),
            ],
            &[
                "Indicates high priority research area for NASA bioscience",
                "Suggests established expertise and ongoing investment",
                "Potential for breakthrough discoveries in this field",
            ],
            true,
            Priority::High,
        ));
    }

    let pdfs = analysis
        .content_types
        .get(&ContentType::Pdf)
        .copied()
        .unwrap_or(0);
    if let Some(ratio) = analysis.share(pdfs)
        && ratio > 0.3
    {
        insights.push(factory.make(
            InsightKind::Trend,
            2,
            "High Proportion of PDF-Based Research Publications".to_string(),
            format!(
                "{:.1}% of articles are in PDF format, suggesting formal publication standards \
                 and peer-reviewed content quality.",
                ratio * 100.0
            ),
            0.92,
            vec![
                format!(
                    "{pdfs} PDF documents out of {} total",
                    analysis.total_articles
                ),
                "PDF format indicates formal publication process".to_string(),
                "Suggests academic rigor in research documentation".to_string(),
            ],
            &[
                "High quality, peer-reviewed research content",
                "Formal documentation standards being maintained",
                "Research suitable for academic and policy references",
            ],
            false,
            Priority::Medium,
        ));
    }

    insights
}

/// One gap insight per research gap.
fn gaps(analysis: &ContentAnalysis, factory: &InsightFactory) -> Vec<Insight> {
    analysis
        .research_gaps
        .iter()
        .enumerate()
        .map(|(i, gap)| {
            factory.make(
                InsightKind::Gap,
                i + 1,
                format!("Research Gap Identified: {gap}"),
                format!(
                    "Analysis reveals limited research coverage in {}, representing an \
                     opportunity for future investigations.",
                    gap.to_lowercase()
                ),
                0.75,
                vec![
                    "Low frequency of related keywords in current literature".to_string(),
                    "Underrepresented in major research categories".to_string(),
                    "Important for comprehensive space biology understanding".to_string(),
                ],
                &[
                    "Potential area for new research initiatives",
                    "May require additional funding allocation",
                    "Could yield significant scientific insights if pursued",
                ],
                true,
                Priority::Medium,
            )
        })
        .collect()
}

/// Recommendations: cross-disciplinary work and data standardization.
fn recommendations(analysis: &ContentAnalysis, factory: &InsightFactory) -> Vec<Insight> {
    let mut insights = Vec::new();

    let categories = analysis.category_distribution.len();
    if categories > 3 {
        insights.push(factory.make(
            InsightKind::Recommendation,
            1,
            "Promote Cross-Disciplinary Research Integration".to_string(),
            format!(
                "With {categories} distinct research categories identified, there's significant \
                 potential for cross-disciplinary collaboration to yield novel insights."
            ),
            0.80,
            vec![
                format!("{categories} different research categories present"),
                "Multiple overlapping research domains".to_string(),
                "Strong foundation in diverse biological sciences".to_string(),
            ],
            &[
                "Enhanced research outcomes through collaboration",
                "More comprehensive understanding of space biology",
                "Efficient resource utilization across disciplines",
            ],
            true,
            Priority::High,
        ));
    }

    insights.push(factory.make(
        InsightKind::Recommendation,
        2,
        "Implement Standardized Research Data Formats".to_string(),
        "Analysis of content structure reveals opportunities for improved data standardization \
         to enhance research accessibility and meta-analysis capabilities."
            .to_string(),
        0.70,
        vec![
            "Varying content structures across publications".to_string(),
            "Mix of PDF and HTML formats".to_string(),
            "Potential for improved data extraction".to_string(),
        ],
        &[
            "Better data integration and analysis capabilities",
            "Enhanced research discoverability",
            "Improved meta-analysis opportunities",
        ],
        true,
        Priority::Medium,
    ));

    insights
}

/// Predictions: cell biology when it is well represented.
fn predictions(analysis: &ContentAnalysis, factory: &InsightFactory) -> Vec<Insight> {
    let cell = analysis.category("Cell Biology");
    let Some(ratio) = analysis.share(cell).filter(|&r| r > 0.2) else {
        return Vec::new();
    };

    vec![factory.make(
        InsightKind::Prediction,
        1,
        "Cell Biology Research Likely to Drive Future Breakthroughs".to_string(),
        format!(
            "With {:.1}% of research focused on cell biology, this field is positioned to \
             produce significant advances in understanding space-related biological changes.",
            ratio * 100.0
        ),
        0.72,
        vec![
            format!("{cell} articles in cell biology category"),
            "Strong foundation of cellular research".to_string(),
            "Critical for understanding space adaptation mechanisms".to_string(),
        ],
        &[
            "Anticipated breakthroughs in cellular adaptation mechanisms",
            "Potential for novel therapeutic targets",
            "Enhanced astronaut health countermeasures",
        ],
        false,
        Priority::High,
    )]
}

/// Generates every insight for `analysis`, trends first, then gaps, recommendations and
/// predictions.
pub fn generate_insights(analysis: &ContentAnalysis, now: DateTime<Utc>) -> Vec<Insight> {
    let factory = InsightFactory::new(now);
    let mut insights = trends(analysis, &factory);
    insights.extend(gaps(analysis, &factory));
    insights.extend(recommendations(analysis, &factory));
    insights.extend(predictions(analysis, &factory));
    insights
}

/// Applies a filter and a limit.
pub fn select_insights(insights: &[Insight], filter: InsightFilter, limit: usize) -> Vec<Insight> {
    insights
        .iter()
        .filter(|i| filter.matches(i))
        .take(limit)
        .cloned()
        .collect()
}
