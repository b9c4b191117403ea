//! Category tagging.
//!
//! A category applies when at least one of its triggers occurs as a substring of the
//! lowercased input. Matches are reported in dictionary order; a text that matches nothing
//! gets the single default label.

use spacebio_config::TaxonomySettings;

/// A compiled category.
#[derive(Debug, Clone)]
struct Category {
    /// Label reported on match.
    name: String,
    /// Lowercase trigger substrings.
    triggers: Vec<String>,
}

/// Assigns coarse topical labels to text.
#[derive(Debug, Clone)]
pub struct Tagger {
    /// Categories in evaluation order.
    categories: Vec<Category>,
    /// Label used when nothing matches.
    default_label: String,
}

impl Tagger {
    /// Builds a tagger from taxonomy settings.
    pub fn new(taxonomy: &TaxonomySettings) -> Self {
        let categories = taxonomy
            .categories
            .iter()
            .map(|c| Category {
                name: c.name.clone(),
                triggers: c
                    .triggers
                    .iter()
                    .map(|t| t.to_lowercase())
                    .filter(|t| !t.is_empty())
                    .collect(),
            })
            .collect();
        Self {
            categories,
            default_label: taxonomy.default_category.clone(),
        }
    }

    /// Tags `text`. The result is never empty.
    pub fn tag(&self, text: &str) -> Vec<String> {
        let text = text.to_lowercase();
        let matched: Vec<String> = self
            .categories
            .iter()
            .filter(|c| c.triggers.iter().any(|t| text.contains(t.as_str())))
            .map(|c| c.name.clone())
            .collect();

        if matched.is_empty() {
            vec![self.default_label.clone()]
        } else {
            matched
        }
    }

    /// Label assigned to untagged text.
    pub fn default_label(&self) -> &str {
        &self.default_label
    }

    /// Category names in evaluation order.
    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.name.as_str())
    }
}

impl Default for Tagger {
    fn default() -> Self {
        Self::new(&TaxonomySettings::default())
    }
}
