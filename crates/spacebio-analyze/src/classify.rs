//! Rule-based classification of publication text.
//!
//! Each classifier is a fixed, ordered rule table evaluated against lowercased text; the first
//! matching rule wins.

use std::collections::BTreeMap;

use spacebio_document::{
    Atmosphere, ExperimentType, Gravity, Level, Location, Radiation, SpaceEnvironment,
};

/// Experiment type rules, in evaluation order.
const EXPERIMENT_RULES: &[(ExperimentType, &[&str])] = &[
    (ExperimentType::PlantBiology, &["plant", "botany"]),
    (ExperimentType::HumanPhysiology, &["human", "physiological"]),
    (ExperimentType::Microbiology, &["microbe", "bacteria"]),
    (ExperimentType::CellBiology, &["cell", "cellular"]),
    (ExperimentType::AnimalStudies, &["animal", "mouse", "rat"]),
    (ExperimentType::Biomolecular, &["molecular", "protein"]),
    (ExperimentType::Behavioral, &["behavior", "cognitive"]),
    (ExperimentType::Nutrition, &["nutrition", "diet"]),
    (ExperimentType::RadiationBiology, &["radiation", "cosmic"]),
];

/// Model organisms, in evaluation order.
const ORGANISMS: &[&str] = &[
    "Human",
    "Mouse",
    "Rat",
    "C. elegans",
    "Drosophila",
    "E. coli",
    "Yeast",
    "Arabidopsis",
];

/// Missions, in evaluation order.
const MISSIONS: &[&str] = &[
    "ISS Expedition",
    "SpaceX Mission",
    "Artemis Program",
    "Mars Simulation",
];

/// Keywords that raise a publication's impact score.
const HIGH_IMPACT_KEYWORDS: &[&str] = &[
    "microgravity",
    "space",
    "astronaut",
    "radiation",
    "gene",
    "cellular",
];

/// Classifies the experiment type of a publication from its text.
pub fn experiment_type(text: &str) -> ExperimentType {
    let text = text.to_lowercase();
    EXPERIMENT_RULES
        .iter()
        .find(|(_, triggers)| triggers.iter().any(|t| text.contains(t)))
        .map_or(ExperimentType::Other, |(kind, _)| *kind)
}

/// First model organism mentioned in `text`.
pub fn organism(text: &str) -> Option<&'static str> {
    let text = text.to_lowercase();
    ORGANISMS
        .iter()
        .copied()
        .find(|o| text.contains(&o.to_lowercase()))
}

/// First mission mentioned in `text`.
///
/// Mission names are matched with their first space removed, as they appear in scraped
/// identifiers (`issexpedition`, `spacexmission`).
pub fn mission(text: &str) -> Option<&'static str> {
    let text = text.to_lowercase();
    MISSIONS
        .iter()
        .copied()
        .find(|m| text.contains(&m.to_lowercase().replacen(' ', "", 1)))
}

/// Where the experiment in `text` took place.
pub fn location(text: &str) -> Location {
    let text = text.to_lowercase();
    if text.contains("iss") || text.contains("international space station") {
        Location::Iss
    } else if text.contains("simulated") || text.contains("simulation") {
        Location::Simulated
    } else {
        Location::GroundControl
    }
}

/// Builds the experimental environment for `text` with the given duration in days.
pub fn space_environment(text: &str, duration: u32) -> SpaceEnvironment {
    let location = location(text);
    let on_iss = location == Location::Iss;
    SpaceEnvironment {
        location,
        duration,
        gravity: if location == Location::Simulated {
            Gravity::Earth
        } else {
            Gravity::Microgravity
        },
        radiation: Radiation {
            level: if on_iss { Level::Medium } else { Level::Low },
            kinds: vec!["cosmic rays".to_string(), "solar particles".to_string()],
        },
        atmosphere: on_iss.then(iss_atmosphere),
    }
}

/// Cabin atmosphere of the ISS.
fn iss_atmosphere() -> Atmosphere {
    Atmosphere {
        pressure: 101.3,
        composition: BTreeMap::from([
            ("N2".to_string(), 78.0),
            ("O2".to_string(), 21.0),
            ("Ar".to_string(), 1.0),
        ]),
    }
}

/// Kinds of finding a publication can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FindingKind {
    /// Adaptation to the space environment.
    Space,
    /// Altered cellular function.
    Cell,
    /// Gene expression changes.
    Gene,
    /// Nothing specific was detected.
    General,
}

impl FindingKind {
    /// Finding kinds supported by `text`. Never empty.
    pub fn detect(text: &str) -> Vec<Self> {
        let text = text.to_lowercase();
        let mut kinds = Vec::new();
        if text.contains("microgravity") || text.contains("space") {
            kinds.push(Self::Space);
        }
        if text.contains("cell") || text.contains("cellular") {
            kinds.push(Self::Cell);
        }
        if text.contains("gene") || text.contains("dna") || text.contains("genetic") {
            kinds.push(Self::Gene);
        }
        if kinds.is_empty() {
            kinds.push(Self::General);
        }
        kinds
    }

    /// Short slug used in finding ids.
    pub fn slug(self) -> &'static str {
        match self {
            Self::Space => "space",
            Self::Cell => "cell",
            Self::Gene => "gene",
            Self::General => "general",
        }
    }

    /// Human-readable description.
    pub fn description(self) -> &'static str {
        match self {
            Self::Space => "Significant physiological adaptations observed in microgravity environment",
            Self::Cell => "Cellular responses show altered function under experimental conditions",
            Self::Gene => "Gene expression patterns reveal important regulatory mechanisms",
            Self::General => "Biological processes show interesting patterns under study conditions",
        }
    }

    /// Significance of the finding.
    pub fn significance(self) -> Level {
        match self {
            Self::Space | Self::Gene => Level::High,
            Self::Cell | Self::General => Level::Medium,
        }
    }

    /// Category label of the finding.
    pub fn category(self) -> &'static str {
        match self {
            Self::Space => "Space Biology",
            Self::Cell => "Cell Biology",
            Self::Gene => "Molecular Biology",
            Self::General => "General Biology",
        }
    }

    /// Confidence in the finding.
    pub fn confidence(self) -> f64 {
        match self {
            Self::Space => 0.85,
            Self::Cell => 0.78,
            Self::Gene => 0.82,
            Self::General => 0.70,
        }
    }

    /// Metric name and unit of the measurement, for kinds that carry one.
    pub fn metric(self) -> Option<(&'static str, &'static str)> {
        match self {
            Self::Space => Some(("Adaptation rate", "%")),
            Self::Cell => Some(("Cell viability", "%")),
            Self::Gene | Self::General => None,
        }
    }

    /// Implications of the finding.
    pub fn implications(self) -> &'static [&'static str] {
        match self {
            Self::Space => &[
                "Important for long-duration spaceflight planning",
                "Potential countermeasures needed for astronaut health",
                "Implications for future Mars missions",
            ],
            Self::Cell => &[
                "Potential therapeutic targets identified",
                "Understanding of cellular mechanisms enhanced",
                "Basis for future research directions",
            ],
            Self::Gene => &[
                "New insights into genetic regulation",
                "Potential biomarkers identified",
                "Applications in personalized medicine",
            ],
            Self::General => &[
                "Contributes to understanding of biological systems",
                "Provides foundation for future research",
            ],
        }
    }
}

/// Impact score: 5 plus keyword, significance and high-impact bonuses, capped at 10.
pub fn impact_score(keywords: &[String], significances: &[Level]) -> f64 {
    let important = keywords
        .iter()
        .filter(|k| HIGH_IMPACT_KEYWORDS.contains(&k.to_lowercase().as_str()))
        .count();
    let significant = significances
        .iter()
        .filter(|&&s| s >= Level::High)
        .count();

    let score = 5.0 + keywords.len() as f64 * 0.2 + significant as f64 * 0.5 + important as f64 * 0.3;
    score.min(10.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_experiment_type_rule_order() {
        assert_eq!(
            experiment_type("Plant cells in orbit"),
            ExperimentType::PlantBiology
        );
        assert_eq!(
            experiment_type("Cellular stress in flight"),
            ExperimentType::CellBiology
        );
        assert_eq!(experiment_type("Cosmic exposure"), ExperimentType::RadiationBiology);
        assert_eq!(experiment_type("Orbital mechanics"), ExperimentType::Other);
    }

    #[test]
    fn test_organism_first_match() {
        assert_eq!(organism("Drosophila and yeast strains"), Some("Drosophila"));
        assert_eq!(organism("E. coli cultures"), Some("E. coli"));
        assert_eq!(organism("no model organism here"), None);
    }

    #[test]
    fn test_mission_matches_joined_name() {
        assert_eq!(mission("Data from ISSExpedition 42"), Some("ISS Expedition"));
        assert_eq!(mission("the Artemis Program"), None);
        assert_eq!(mission("artemisprogram-2"), Some("Artemis Program"));
    }

    #[test]
    fn test_environment() {
        let iss = space_environment("Aboard the International Space Station", 30);
        assert_eq!(iss.location, Location::Iss);
        assert_eq!(iss.radiation.level, Level::Medium);
        assert_eq!(iss.gravity, Gravity::Microgravity);
        assert_eq!(iss.atmosphere.unwrap().composition["N2"], 78.0);

        let sim = space_environment("Hindlimb unloading simulation", 10);
        assert_eq!(sim.location, Location::Simulated);
        assert_eq!(sim.gravity, Gravity::Earth);
        assert!(sim.atmosphere.is_none());

        let ground = space_environment("Bench study", 5);
        assert_eq!(ground.location, Location::GroundControl);
        assert_eq!(ground.radiation.level, Level::Low);
    }

    #[test]
    fn test_findings_detection() {
        assert_eq!(
            FindingKind::detect("Microgravity alters gene expression"),
            vec![FindingKind::Space, FindingKind::Gene]
        );
        assert_eq!(FindingKind::detect("Bench study"), vec![FindingKind::General]);
    }

    #[test]
    fn test_impact_score() {
        let keywords: Vec<String> = ["microgravity", "bone", "gene"]
            .iter()
            .map(ToString::to_string)
            .collect();
        let score = impact_score(&keywords, &[Level::High, Level::Medium]);
        // 5 + 3*0.2 + 1*0.5 + 2*0.3
        assert!((score - 6.7).abs() < 1e-9);

        let many: Vec<String> = (0..40).map(|i| format!("k{i}")).collect();
        assert_eq!(impact_score(&many, &[Level::High; 4]), 10.0);
    }
}
