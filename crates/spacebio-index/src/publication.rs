//! Enrichment of documents into publications.

use chrono::{DateTime, Datelike, SecondsFormat, Utc};
use spacebio_analyze::{
    FindingKind,
    classify::{experiment_type, impact_score, mission, organism, space_environment},
};
use spacebio_config::ProcessingSettings;
use spacebio_document::{
    AbstractRule, Change, ContentType, Document, Finding, Publication, Quantitative,
    content_lines, extract_abstract, extract_authors, extract_pmc_id, extract_title,
    fallback_title,
};

use crate::SyntheticGenerator;

/// Title prefix for publications without a recoverable title.
pub const PUBLICATION_TITLE_PREFIX: &str = "NASA Bioscience Research";

/// Title of an untitled publication whose URL has no PMC id.
const UNTITLED_PUBLICATION: &str = "NASA Bioscience Research Article";

/// Builds `Publication`s from documents.
#[derive(Debug, Clone)]
pub struct PublicationBuilder {
    /// Abstract character budget.
    abstract_chars: usize,
}

impl PublicationBuilder {
    /// Creates a builder from processing settings.
    pub fn new(processing: &ProcessingSettings) -> Self {
        Self {
            abstract_chars: processing.publication_abstract_chars,
        }
    }

    /// Enriches one document. Synthetic fields are drawn from `synthetic`.
    pub fn build(
        &self,
        doc: &Document,
        synthetic: &mut SyntheticGenerator,
        now: DateTime<Utc>,
    ) -> Publication {
        let lines = content_lines(&doc.body);
        let title = extract_title(&lines).unwrap_or_else(|| {
            if extract_pmc_id(&doc.url).is_some() {
                fallback_title(PUBLICATION_TITLE_PREFIX, &doc.url)
            } else {
                UNTITLED_PUBLICATION.to_string()
            }
        });
        let findings = findings(&doc.body, synthetic);
        let significances: Vec<_> = findings.iter().map(|f| f.significance).collect();
        let timestamp = now.to_rfc3339_opts(SecondsFormat::Millis, true);

        Publication {
            id: format!("pub-{}", doc.id),
            authors: extract_authors(&lines),
            abstract_text: extract_abstract(&lines, AbstractRule::publication(self.abstract_chars)),
            doi: doc.pmc_id.as_ref().map(|pmc| format!("10.1234/{pmc}")),
            journal: synthetic.journal().to_string(),
            year: synthetic.year(now.year()),
            keywords: doc.keywords.clone(),
            categories: doc.categories.clone(),
            mission: mission(&doc.body).map(String::from),
            experiment_type: experiment_type(&format!("{} {}", doc.body, title)),
            organism: organism(&doc.body).map(String::from),
            space_environment: space_environment(&doc.body, synthetic.duration_days()),
            impact_score: impact_score(&doc.keywords, &significances),
            citations: synthetic.citations(),
            url: doc.url.clone(),
            pdf_url: (doc.content_type == ContentType::Pdf).then(|| doc.url.clone()),
            related_publications: Vec::new(),
            created_at: timestamp.clone(),
            updated_at: timestamp,
            findings,
            title,
        }
    }
}

impl Default for PublicationBuilder {
    fn default() -> Self {
        Self::new(&ProcessingSettings::default())
    }
}

/// Findings supported by `body`, with synthetic measurements.
fn findings(body: &str, synthetic: &mut SyntheticGenerator) -> Vec<Finding> {
    FindingKind::detect(body)
        .into_iter()
        .map(|kind| {
            let quantitative = kind.metric().map(|(metric, unit)| {
                let (value, change) = match kind {
                    FindingKind::Cell => (synthetic.cell_viability(), synthetic.change()),
                    _ => (synthetic.adaptation_rate(), Change::Increase),
                };
                Quantitative {
                    metric: metric.to_string(),
                    value,
                    unit: unit.to_string(),
                    change,
                }
            });
            Finding {
                id: synthetic.finding_id(kind.slug()),
                description: kind.description().to_string(),
                significance: kind.significance(),
                category: kind.category().to_string(),
                quantitative,
                implications: kind.implications().iter().map(ToString::to_string).collect(),
                confidence: kind.confidence(),
            }
        })
        .collect()
}
