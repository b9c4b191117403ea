//! Vocabulary keyword detection.

use std::collections::HashMap;

use spacebio_config::TaxonomySettings;

/// Finds vocabulary keywords in text.
///
/// Keywords are reported with their vocabulary spelling, in vocabulary order.
#[derive(Debug, Clone)]
pub struct KeywordDetector {
    /// Vocabulary as configured.
    vocabulary: Vec<String>,
    /// Lowercased vocabulary, parallel to `vocabulary`.
    lowered: Vec<String>,
    /// Maximum keywords kept per document.
    max_keywords: usize,
}

impl KeywordDetector {
    /// Builds a detector over the configured vocabulary.
    pub fn new(taxonomy: &TaxonomySettings, max_keywords: usize) -> Self {
        let vocabulary = taxonomy.keywords.clone();
        let lowered = vocabulary.iter().map(|k| k.to_lowercase()).collect();
        Self {
            vocabulary,
            lowered,
            max_keywords,
        }
    }

    /// Keywords present in `text`, capped at the per-document maximum.
    pub fn detect(&self, text: &str) -> Vec<String> {
        let mut found = self.detect_all(text);
        found.truncate(self.max_keywords);
        found
    }

    /// Every vocabulary keyword present in `text`.
    pub fn detect_all(&self, text: &str) -> Vec<String> {
        let text = text.to_lowercase();
        self.vocabulary
            .iter()
            .zip(&self.lowered)
            .filter(|(_, lower)| text.contains(lower.as_str()))
            .map(|(keyword, _)| keyword.clone())
            .collect()
    }

    /// Vocabulary in detection order.
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    /// Counts, for each vocabulary keyword, how many texts contain it.
    ///
    /// Keywords found in no text are omitted.
    pub fn document_frequency<'a, I>(&self, texts: I) -> HashMap<String, usize>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut counts = HashMap::new();
        for text in texts {
            for keyword in self.detect_all(text) {
                *counts.entry(keyword).or_insert(0) += 1;
            }
        }
        counts
    }

    /// Top `limit` keywords by document frequency, ties broken by vocabulary order.
    pub fn top_keywords(&self, counts: &HashMap<String, usize>, limit: usize) -> Vec<(String, usize)> {
        let mut ranked: Vec<(String, usize)> = self
            .vocabulary
            .iter()
            .filter_map(|k| counts.get(k).map(|&n| (k.clone(), n)))
            .collect();
        // Stable: equal counts keep vocabulary order
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(limit);
        ranked
    }
}

impl Default for KeywordDetector {
    fn default() -> Self {
        Self::new(&TaxonomySettings::default(), 8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_in_vocabulary_order() {
        let detector = KeywordDetector::default();
        let found = detector.detect("Bone and muscle loss in MICROGRAVITY; dna repair");
        assert_eq!(found, vec!["microgravity", "DNA", "muscle", "bone"]);
    }

    #[test]
    fn test_detect_caps_at_max() {
        let detector = KeywordDetector::default();
        let text = "microgravity space cell biology protein gene dna rna metabolism growth";
        assert_eq!(detector.detect(text).len(), 8);
        assert_eq!(detector.detect_all(text).len(), 10);
    }

    #[test]
    fn test_document_frequency_and_top() {
        let detector = KeywordDetector::default();
        let counts = detector.document_frequency(["space bone", "bone", "space cell"]);
        assert_eq!(counts.get("bone"), Some(&2));
        assert_eq!(counts.get("space"), Some(&2));
        assert_eq!(counts.get("cell"), Some(&1));

        let top = detector.top_keywords(&counts, 2);
        // space precedes bone in the vocabulary
        assert_eq!(top, vec![("space".to_string(), 2), ("bone".to_string(), 2)]);
    }
}
