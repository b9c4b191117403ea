//! Configuration file parsing.
//!
//! Parses individual `.spacebio.toml` files into intermediate `RawConfig` structures
//! that preserve the optional nature of all fields before merging.

use std::{fs, path::Path};

use serde::Deserialize;
use serde_with::{OneOrMany, serde_as};

use crate::{ConfigError, DataSource};

/// Raw configuration as parsed directly from a TOML file.
///
/// All fields are optional to support partial configs that will be merged.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// When true, stop discovery here and ignore parent and global configs.
    pub root: Option<bool>,
    /// Corpus location section.
    pub data: Option<RawDataSettings>,
    /// Cache TTL section.
    pub cache: Option<RawCacheSettings>,
    /// Search section.
    pub search: Option<RawSearchSettings>,
    /// Processing budgets section.
    pub processing: Option<RawProcessingSettings>,
    /// Vocabulary and category dictionary section.
    pub taxonomy: Option<RawTaxonomySettings>,
    /// Synthetic generator section.
    pub synthetic: Option<RawSyntheticSettings>,
}

/// Raw `[data]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawDataSettings {
    /// Corpus root, relative to the config file's directory.
    pub root: Option<String>,
    /// Manifest file name.
    pub manifest: Option<String>,
    /// Articles directory name.
    pub articles_dir: Option<String>,
    /// Backing store selection.
    pub source: Option<DataSource>,
}

/// Raw `[cache]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawCacheSettings {
    /// Article list TTL.
    pub articles_ttl_secs: Option<u64>,
    /// Publication list TTL.
    pub publications_ttl_secs: Option<u64>,
    /// Statistics TTL.
    pub stats_ttl_secs: Option<u64>,
    /// Insights TTL.
    pub insights_ttl_secs: Option<u64>,
}

/// Raw `[search]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawSearchSettings {
    /// Default article result count.
    pub limit: Option<usize>,
    /// Default publication result count.
    pub publications_limit: Option<usize>,
    /// Default insight count.
    pub insights_limit: Option<usize>,
    /// Ranking weights.
    pub weights: Option<RawWeights>,
}

/// Raw `[search.weights]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawWeights {
    /// Title weight.
    pub title: Option<u32>,
    /// Abstract weight.
    #[serde(rename = "abstract")]
    pub abstract_text: Option<u32>,
    /// Keyword weight.
    pub keyword: Option<u32>,
    /// Category weight.
    pub category: Option<u32>,
    /// Experiment type weight.
    pub experiment_type: Option<u32>,
    /// Organism weight.
    pub organism: Option<u32>,
    /// Mission weight.
    pub mission: Option<u32>,
    /// Whole-phrase bonus.
    pub phrase_bonus: Option<u32>,
    /// Exact experiment type bonus.
    pub exact_type_bonus: Option<u32>,
}

/// Raw `[processing]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawProcessingSettings {
    /// Article abstract budget.
    pub abstract_chars: Option<usize>,
    /// Publication abstract budget.
    pub publication_abstract_chars: Option<usize>,
    /// Keyword cap.
    pub max_keywords: Option<usize>,
    /// Content preview length.
    pub content_preview_chars: Option<usize>,
    /// Keywords reported in statistics.
    pub top_keywords: Option<usize>,
}

/// Raw `[taxonomy]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawTaxonomySettings {
    /// Label for untagged documents.
    pub default_category: Option<String>,
    /// Keyword vocabulary; replaces the default list wholesale.
    pub keywords: Option<Vec<String>>,
    /// Category dictionary; replaces the default list wholesale.
    pub category: Option<Vec<RawCategory>>,
}

/// Raw `[[taxonomy.category]]` entry.
#[serde_as]
#[derive(Debug, Clone, Deserialize)]
pub struct RawCategory {
    /// Category label.
    pub name: String,
    /// Trigger substring(s). Accepts either a single string or an array of strings.
    #[serde_as(as = "OneOrMany<_>")]
    pub triggers: Vec<String>,
}

/// Raw `[synthetic]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawSyntheticSettings {
    /// Generator seed.
    pub seed: Option<u64>,
}

/// Parses a configuration file from disk.
///
/// Returns a `RawConfig` with all fields as optionals, ready for merging.
pub fn parse_config_file(path: &Path) -> Result<RawConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config_str(&contents, path)
}

/// Parses configuration from a TOML string.
///
/// The `path` parameter is used for error reporting.
pub fn parse_config_str(contents: &str, path: &Path) -> Result<RawConfig, ConfigError> {
    toml::from_str(contents).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })
}

/// Checks if a config file has `root = true` set.
///
/// Returns false if the file cannot be read or parsed.
pub fn is_root_config(path: &Path) -> bool {
    let Ok(contents) = fs::read_to_string(path) else {
        return false;
    };
    let Ok(config) = toml::from_str::<RawConfig>(&contents) else {
        return false;
    };
    config.root == Some(true)
}
