//! Configuration validation.
//!
//! Validates a loaded configuration and reports warnings for potential issues.

use std::{collections::HashSet, fmt};

use crate::{Config, DataSource};

/// A non-fatal warning about the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// The data root does not exist.
    DataRootMissing {
        /// Path that doesn't exist.
        path: String,
    },
    /// The manifest file does not exist.
    ManifestMissing {
        /// Path that doesn't exist.
        path: String,
    },
    /// The articles directory does not exist.
    ArticlesDirMissing {
        /// Path that doesn't exist.
        path: String,
    },
    /// A cache TTL is zero, so every request reloads.
    ZeroTtl {
        /// Name of the cached resource.
        resource: &'static str,
    },
    /// A category has no triggers and can never match.
    CategoryWithoutTriggers {
        /// Category name.
        category: String,
    },
    /// A category is defined more than once.
    DuplicateCategory {
        /// Category name.
        category: String,
    },
    /// The keyword vocabulary is empty.
    EmptyVocabulary,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DataRootMissing { path } => write!(f, "data root does not exist: {path}"),
            Self::ManifestMissing { path } => write!(f, "manifest does not exist: {path}"),
            Self::ArticlesDirMissing { path } => {
                write!(f, "articles directory does not exist: {path}")
            }
            Self::ZeroTtl { resource } => {
                write!(f, "{resource} cache TTL is zero; every request reloads")
            }
            Self::CategoryWithoutTriggers { category } => {
                write!(f, "category '{category}' has no triggers")
            }
            Self::DuplicateCategory { category } => {
                write!(f, "category '{category}' is defined more than once")
            }
            Self::EmptyVocabulary => write!(f, "keyword vocabulary is empty"),
        }
    }
}

/// Validates the configuration and returns any warnings.
pub fn validate_config(config: &Config) -> Vec<ConfigWarning> {
    let mut warnings = validate_data(config);

    let ttls = [
        ("articles", config.cache.articles_ttl_secs),
        ("publications", config.cache.publications_ttl_secs),
        ("stats", config.cache.stats_ttl_secs),
        ("insights", config.cache.insights_ttl_secs),
    ];
    for (resource, secs) in ttls {
        if secs == 0 {
            warnings.push(ConfigWarning::ZeroTtl { resource });
        }
    }

    let mut seen = HashSet::new();
    for category in &config.taxonomy.categories {
        if category.triggers.iter().all(|t| t.trim().is_empty()) {
            warnings.push(ConfigWarning::CategoryWithoutTriggers {
                category: category.name.clone(),
            });
        }
        if !seen.insert(category.name.as_str()) {
            warnings.push(ConfigWarning::DuplicateCategory {
                category: category.name.clone(),
            });
        }
    }

    if config.taxonomy.keywords.is_empty() {
        warnings.push(ConfigWarning::EmptyVocabulary);
    }

    warnings
}

/// Checks the corpus paths. Sources that never touch disk are skipped.
fn validate_data(config: &Config) -> Vec<ConfigWarning> {
    let mut warnings = Vec::new();
    if matches!(
        config.data.source,
        DataSource::Embedded | DataSource::Fallback
    ) {
        return warnings;
    }

    let root = &config.data.root;
    if !root.is_dir() {
        warnings.push(ConfigWarning::DataRootMissing {
            path: root.display().to_string(),
        });
        return warnings; // Nothing below it can exist
    }

    let manifest = config.data.manifest_path();
    if !manifest.is_file() {
        warnings.push(ConfigWarning::ManifestMissing {
            path: manifest.display().to_string(),
        });
    }

    let articles = config.data.articles_path();
    if !articles.is_dir() {
        warnings.push(ConfigWarning::ArticlesDirMissing {
            path: articles.display().to_string(),
        });
    }

    warnings
}
