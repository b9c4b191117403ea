//! Fixed data served when no corpus can be loaded.

use std::collections::BTreeMap;

use spacebio_document::{ContentType, Document, extract_pmc_id};

use crate::{CorpusStats, DailyActivity, KeywordCount, MonthlyCount, ResearchTrend};

/// One fallback article: id, title, content, word count, abstract, keywords, categories.
type FallbackArticle = (
    u32,
    &'static str,
    &'static str,
    usize,
    &'static str,
    &'static [&'static str],
    &'static [&'static str],
);

/// The fallback articles.
const ARTICLES: [FallbackArticle; 5] = [
    (
        1,
        "Microgravity Effects on Plant Cell Biology",
        "This study investigates the effects of microgravity on plant cell biology, examining \
         cellular responses and adaptations in space environments...",
        2500,
        "Plants show significant cellular adaptations when exposed to microgravity conditions, \
         with notable changes in cell wall structure and metabolism.",
        &["microgravity", "plant biology", "cell biology", "space", "adaptation"],
        &["Space Biology", "Plant Biology", "Cell Biology"],
    ),
    (
        2,
        "Human Physiological Adaptation to Long-Duration Spaceflight",
        "Long-duration spaceflight presents unique challenges to human physiology. This \
         comprehensive study examines cardiovascular, musculoskeletal, and neural adaptations...",
        3200,
        "Astronauts undergo significant physiological changes during extended missions, \
         requiring targeted countermeasures for mission success.",
        &[
            "human physiology",
            "spaceflight",
            "cardiovascular",
            "musculoskeletal",
            "adaptation",
        ],
        &["Human Physiology", "Space Biology"],
    ),
    (
        3,
        "Molecular Biology of Radiation Exposure in Space",
        "Space radiation poses significant risks to biological systems. This study examines DNA \
         damage, repair mechanisms, and cellular responses to cosmic radiation...",
        2800,
        "Cosmic radiation induces complex DNA damage patterns that require sophisticated \
         cellular repair mechanisms for organism survival.",
        &[
            "radiation",
            "DNA damage",
            "molecular biology",
            "cosmic rays",
            "repair mechanisms",
        ],
        &["Radiation Biology", "Molecular Biology", "Space Biology"],
    ),
    (
        4,
        "Neural Plasticity and Spatial Orientation in Microgravity",
        "The absence of gravity fundamentally alters how the nervous system processes spatial \
         information. This neurobiological study examines adaptation mechanisms...",
        2600,
        "The brain demonstrates remarkable plasticity in adapting to microgravity environments, \
         rewiring neural networks for spatial processing.",
        &[
            "neuroscience",
            "spatial orientation",
            "neural plasticity",
            "microgravity",
            "brain adaptation",
        ],
        &["Neuroscience", "Space Biology", "Human Physiology"],
    ),
    (
        5,
        "Immune System Function During Space Missions",
        "Space environments present unique challenges to immune system function. This \
         immunological study examines changes in immune response and susceptibility...",
        2400,
        "Spaceflight conditions lead to immune system suppression, increasing astronaut \
         susceptibility to infections and requiring preventive measures.",
        &[
            "immunology",
            "immune system",
            "infection",
            "spaceflight",
            "immune suppression",
        ],
        &["Immunology", "Space Biology", "Human Physiology"],
    ),
];

/// Converts a slice of string literals.
fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}

/// The five fallback articles.
pub fn fallback_documents() -> Vec<Document> {
    ARTICLES
        .iter()
        .map(
            |&(id, title, content, word_count, abstract_text, keywords, categories)| {
                let url = format!("https://www.ncbi.nlm.nih.gov/pmc/articles/PMC{id:06}/");
                Document {
                    id,
                    title: title.to_string(),
                    pmc_id: extract_pmc_id(&url),
                    url,
                    content: content.to_string(),
                    word_count,
                    content_type: ContentType::Html,
                    abstract_text: abstract_text.to_string(),
                    keywords: strings(keywords),
                    categories: strings(categories),
                    body: content.to_string(),
                }
            },
        )
        .collect()
}

/// Statistics describing the fallback articles.
pub fn fallback_stats() -> CorpusStats {
    let keyword = |keyword: &str, count| KeywordCount {
        keyword: keyword.to_string(),
        count,
    };
    let day = |date: &str, words| DailyActivity {
        date: date.to_string(),
        articles: 1,
        words,
    };
    let trend = |topic: &str, articles, growth| ResearchTrend {
        topic: topic.to_string(),
        articles,
        growth,
    };
    let counts = |pairs: &[(&str, usize)]| -> BTreeMap<String, usize> {
        pairs.iter().map(|&(k, v)| (k.to_string(), v)).collect()
    };

    let total_words: usize = ARTICLES.iter().map(|a| a.3).sum();
    CorpusStats {
        total_articles: ARTICLES.len(),
        total_words,
        average_words: total_words / ARTICLES.len(),
        content_types: counts(&[("HTML", ARTICLES.len()), ("PDF", 0)]),
        top_keywords: vec![
            keyword("microgravity", 3),
            keyword("space", 4),
            keyword("biology", 5),
            keyword("adaptation", 3),
            keyword("human", 2),
        ],
        categories_count: counts(&[
            ("Space Biology", 5),
            ("Human Physiology", 3),
            ("Cell Biology", 2),
            ("Molecular Biology", 2),
            ("Neuroscience", 1),
            ("Immunology", 1),
            ("Radiation Biology", 1),
            ("Plant Biology", 1),
        ]),
        monthly_publications: (1..=5)
            .map(|m| MonthlyCount {
                month: format!("2024-{m:02}"),
                count: 1,
            })
            .collect(),
        daily_activity: vec![
            day("2024-01-15", 2500),
            day("2024-02-20", 3200),
            day("2024-03-10", 2800),
            day("2024-04-05", 2600),
            day("2024-05-12", 2400),
        ],
        research_trends: vec![
            trend("Space Biology", 5, 15),
            trend("Human Physiology", 3, 12),
            trend("Radiation Biology", 1, 8),
        ],
    }
}
