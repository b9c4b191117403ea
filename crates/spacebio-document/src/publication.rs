//! The enriched publication view.
//!
//! Publications carry the same text fields as documents plus classification results and a
//! number of display-only values (year, citations, findings metrics) that are synthetic.

use std::{collections::BTreeMap, fmt};

use serde::Serialize;

/// Controlled vocabulary of experiment types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ExperimentType {
    /// Plants and botany.
    #[serde(rename = "Plant Biology")]
    PlantBiology,
    /// Human physiology.
    #[serde(rename = "Human Physiology")]
    HumanPhysiology,
    /// Microbes and bacteria.
    Microbiology,
    /// Cells.
    #[serde(rename = "Cell Biology")]
    CellBiology,
    /// Animal models.
    #[serde(rename = "Animal Studies")]
    AnimalStudies,
    /// Molecules and proteins.
    Biomolecular,
    /// Behaviour and cognition.
    Behavioral,
    /// Diet.
    Nutrition,
    /// Radiation exposure.
    #[serde(rename = "Radiation Biology")]
    RadiationBiology,
    /// Anything else.
    Other,
}

impl ExperimentType {
    /// Every type, in vocabulary order.
    pub const ALL: [Self; 10] = [
        Self::PlantBiology,
        Self::HumanPhysiology,
        Self::Microbiology,
        Self::CellBiology,
        Self::AnimalStudies,
        Self::Biomolecular,
        Self::Behavioral,
        Self::Nutrition,
        Self::RadiationBiology,
        Self::Other,
    ];

    /// Display label.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PlantBiology => "Plant Biology",
            Self::HumanPhysiology => "Human Physiology",
            Self::Microbiology => "Microbiology",
            Self::CellBiology => "Cell Biology",
            Self::AnimalStudies => "Animal Studies",
            Self::Biomolecular => "Biomolecular",
            Self::Behavioral => "Behavioral",
            Self::Nutrition => "Nutrition",
            Self::RadiationBiology => "Radiation Biology",
            Self::Other => "Other",
        }
    }

    /// Looks a label up case-insensitively.
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(label))
    }
}

impl fmt::Display for ExperimentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where an experiment took place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Location {
    /// International Space Station.
    #[serde(rename = "ISS")]
    Iss,
    /// Ground-based simulation.
    Simulated,
    /// Ground control.
    #[serde(rename = "Ground Control")]
    GroundControl,
}

/// Gravity regime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Gravity {
    /// Orbital free fall.
    Microgravity,
    /// One g.
    Earth,
}

/// Coarse ordinal level, shared by radiation levels and finding significance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// Low.
    Low,
    /// Medium.
    Medium,
    /// High.
    High,
    /// Critical.
    Critical,
}

/// Radiation exposure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Radiation {
    /// Exposure level.
    pub level: Level,
    /// Radiation sources.
    #[serde(rename = "type")]
    pub kinds: Vec<String>,
}

/// Cabin atmosphere.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Atmosphere {
    /// Pressure in kPa.
    pub pressure: f64,
    /// Gas composition in percent.
    pub composition: BTreeMap<String, f64>,
}

/// Experimental environment of a publication.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpaceEnvironment {
    /// Location.
    pub location: Location,
    /// Duration in days.
    pub duration: u32,
    /// Gravity regime.
    pub gravity: Gravity,
    /// Radiation exposure.
    pub radiation: Radiation,
    /// Atmosphere, known only for the ISS.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub atmosphere: Option<Atmosphere>,
}

/// Direction of a measured change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Change {
    /// Went up.
    Increase,
    /// Went down.
    Decrease,
    /// Stayed put.
    NoChange,
}

/// A measured value attached to a finding.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Quantitative {
    /// What was measured.
    pub metric: String,
    /// Measured value.
    pub value: f64,
    /// Unit of `value`.
    pub unit: String,
    /// Direction of change.
    pub change: Change,
}

/// A research finding.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Finding {
    /// Finding id.
    pub id: String,
    /// Description.
    pub description: String,
    /// Significance level.
    pub significance: Level,
    /// Topical category.
    pub category: String,
    /// Optional measurement.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantitative: Option<Quantitative>,
    /// Implications.
    pub implications: Vec<String>,
    /// Confidence in `[0, 1]`.
    pub confidence: f64,
}

/// A publication record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Publication {
    /// `pub-<article id>`.
    pub id: String,
    /// Title.
    pub title: String,
    /// Up to five authors.
    pub authors: Vec<String>,
    /// Abstract.
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    /// Placeholder DOI built from the PMC id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doi: Option<String>,
    /// Journal name.
    pub journal: String,
    /// Publication year.
    pub year: i32,
    /// Detected keywords.
    pub keywords: Vec<String>,
    /// Categories.
    pub categories: Vec<String>,
    /// Mission, if one is mentioned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mission: Option<String>,
    /// Experiment type.
    pub experiment_type: ExperimentType,
    /// Organism, if one is mentioned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organism: Option<String>,
    /// Experimental environment.
    pub space_environment: SpaceEnvironment,
    /// Findings, never empty.
    pub findings: Vec<Finding>,
    /// Impact score in `[5, 10]`.
    pub impact_score: f64,
    /// Citation count.
    pub citations: u32,
    /// Source URL.
    pub url: String,
    /// Same as `url` for PDF sources.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pdf_url: Option<String>,
    /// Related publication ids.
    pub related_publications: Vec<String>,
    /// Creation time, RFC 3339.
    pub created_at: String,
    /// Update time, RFC 3339.
    pub updated_at: String,
}
