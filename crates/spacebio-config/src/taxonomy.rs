//! Keyword vocabulary and category dictionary settings.
//!
//! The defaults are the dictionaries used across the corpus: one vocabulary for keyword
//! detection and one ordered category dictionary for tagging.

use serde::{Deserialize, Serialize};

/// Label assigned when no category trigger matches.
const DEFAULT_CATEGORY: &str = "General Biology";

/// Vocabulary scanned for document keywords, in detection order.
const DEFAULT_KEYWORDS: &[&str] = &[
    "microgravity",
    "space",
    "cell",
    "biology",
    "protein",
    "gene",
    "DNA",
    "RNA",
    "metabolism",
    "growth",
    "tissue",
    "molecular",
    "cellular",
    "genetic",
    "enzyme",
    "hormone",
    "neuron",
    "muscle",
    "bone",
    "immune",
    "cancer",
    "stem cell",
    "chromosome",
    "mutation",
    "research",
    "study",
    "experiment",
    "development",
    "differentiation",
    "proliferation",
    "apoptosis",
    "inflammation",
    "astronaut",
    "spaceflight",
    "radiation",
    "weightlessness",
    "adaptation",
    "physiological",
    "biochemical",
    "therapeutic",
    "clinical",
    "biomarker",
];

/// Category dictionary, in evaluation order.
const DEFAULT_CATEGORIES: &[(&str, &[&str])] = &[
    (
        "Space Biology",
        &["space", "microgravity", "astronaut", "spaceflight", "orbital"],
    ),
    (
        "Cell Biology",
        &["cell", "cellular", "membrane", "organelle", "cytoplasm"],
    ),
    (
        "Molecular Biology",
        &["dna", "rna", "gene", "genetic", "molecular", "protein"],
    ),
    (
        "Human Physiology",
        &[
            "human",
            "physiological",
            "cardiovascular",
            "muscle",
            "metabolism",
        ],
    ),
    (
        "Neuroscience",
        &["neuron", "brain", "nervous", "neural", "cognition"],
    ),
    (
        "Immunology",
        &["immune", "antibody", "antigen", "inflammation", "cytokine"],
    ),
    (
        "Cancer Research",
        &["cancer", "tumor", "oncology", "malignant", "carcinoma"],
    ),
    (
        "Stem Cell Research",
        &[
            "stem cell",
            "differentiation",
            "pluripotent",
            "regenerative",
        ],
    ),
    (
        "Genetics",
        &["chromosome", "mutation", "genomic", "inheritance", "allele"],
    ),
    (
        "Radiation Biology",
        &["radiation", "cosmic rays", "radioprotection", "dna damage"],
    ),
    (
        "Biochemistry",
        &["biochemical", "metabolic", "enzyme", "substrate", "pathway"],
    ),
];

/// Keyword vocabulary and category dictionary.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct TaxonomySettings {
    /// Label used when a document matches no category.
    pub default_category: String,
    /// Keyword vocabulary, in detection order.
    pub keywords: Vec<String>,
    /// Categories, in evaluation order.
    #[serde(rename = "category")]
    pub categories: Vec<CategoryDefinition>,
}

impl Default for TaxonomySettings {
    fn default() -> Self {
        Self {
            default_category: DEFAULT_CATEGORY.to_string(),
            keywords: DEFAULT_KEYWORDS.iter().map(ToString::to_string).collect(),
            categories: DEFAULT_CATEGORIES
                .iter()
                .map(|(name, triggers)| CategoryDefinition::new(name, triggers))
                .collect(),
        }
    }
}

/// A named category and the substrings that trigger it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CategoryDefinition {
    /// Category label.
    pub name: String,
    /// Lowercase trigger substrings.
    pub triggers: Vec<String>,
}

impl CategoryDefinition {
    /// Builds a definition, lowercasing the triggers.
    pub fn new(name: &str, triggers: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            triggers: triggers.iter().map(|t| t.to_lowercase()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_taxonomy_shape() {
        let taxonomy = TaxonomySettings::default();
        assert_eq!(taxonomy.default_category, "General Biology");
        assert_eq!(taxonomy.categories[0].name, "Space Biology");
        assert!(taxonomy.keywords.iter().any(|k| k == "biomarker"));
        assert!(taxonomy.categories.iter().all(|c| !c.triggers.is_empty()));
    }

    #[test]
    fn triggers_are_lowercased() {
        let def = CategoryDefinition::new("Genomics", &["DNA", "Genome"]);
        assert_eq!(def.triggers, vec!["dna", "genome"]);
    }
}
