//! Configuration system for spacebio.
//!
//! spacebio uses TOML configuration files named `.spacebio.toml`. Configuration is resolved by
//! walking up the directory tree from the current working directory, collecting any
//! `.spacebio.toml` files found, then loading `~/.spacebio.toml` as the global config with lowest
//! precedence.

#![warn(missing_docs)]

mod discovery;
mod error;
mod merge;
mod parse;
mod resolve;
mod taxonomy;
mod templates;
#[cfg(test)]
mod test_support;
mod validate;

use std::{
    fmt,
    path::{Path, PathBuf},
    str::FromStr,
    time::Duration,
};

pub use discovery::{CONFIG_FILENAME, discover_config_files, global_config_path, is_global_config};
pub use error::ConfigError;
pub use merge::{ParsedConfig, merge_configs};
pub use parse::{
    RawCacheSettings, RawCategory, RawConfig, RawDataSettings, RawProcessingSettings,
    RawSearchSettings, RawSyntheticSettings, RawTaxonomySettings, RawWeights, parse_config_file,
    parse_config_str,
};
pub use resolve::resolve_data_path;
use serde::{Deserialize, Serialize};
pub use taxonomy::{CategoryDefinition, TaxonomySettings};
pub use templates::{global_template, local_template};
pub use validate::ConfigWarning;
use validate::validate_config;

/// Top-level merged configuration for spacebio.
///
/// This represents the fully resolved configuration after merging all discovered
/// `.spacebio.toml` files according to precedence rules.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Where the corpus lives and how it is loaded.
    pub data: DataSettings,
    /// Time-to-live for each cached resource.
    pub cache: CacheSettings,
    /// Search limits and scoring weights.
    pub search: SearchSettings,
    /// Document normalization budgets.
    pub processing: ProcessingSettings,
    /// Keyword vocabulary and category dictionary.
    pub taxonomy: TaxonomySettings,
    /// Synthetic data generator settings.
    pub synthetic: SyntheticSettings,
    /// Directory containing the most specific config file.
    pub config_root: Option<PathBuf>,
}

impl Config {
    /// Loads configuration by discovering and merging all relevant `.spacebio.toml` files.
    ///
    /// A relative data root that no config file claimed is anchored at `cwd`.
    pub fn load(cwd: &Path) -> Result<Self, ConfigError> {
        let config_files = discover_config_files(cwd);
        let mut config = Self::load_from_files(&config_files)?;
        config.anchor_data_root(cwd);
        Ok(config)
    }

    /// Loads configuration from a specific list of config file paths.
    ///
    /// Files should be provided in precedence order: highest precedence first.
    /// Returns `Ok(Config::default())` if the list is empty.
    pub fn load_from_files(files: &[PathBuf]) -> Result<Self, ConfigError> {
        if files.is_empty() {
            return Ok(Self::default());
        }

        let parsed: Vec<ParsedConfig> = files
            .iter()
            .map(|path| {
                let config = parse_config_file(path)?;
                Ok(ParsedConfig {
                    path: path.clone(),
                    config,
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        merge_configs(&parsed)
    }

    /// Joins a relative data root onto `base`.
    pub fn anchor_data_root(&mut self, base: &Path) {
        if self.data.root.is_relative() {
            self.data.root = base.join(&self.data.root);
        }
    }

    /// Validates the configuration and returns any warnings.
    ///
    /// This checks for:
    /// - A data root, manifest or articles directory that doesn't exist
    /// - Cache TTLs of zero
    /// - Categories without triggers, or defined twice
    /// - An empty keyword vocabulary
    pub fn validate(&self) -> Vec<ConfigWarning> {
        validate_config(self)
    }

    /// Serializes the effective settings to TOML format.
    ///
    /// The output uses the same layout as a `.spacebio.toml` file.
    pub fn settings_to_toml(&self) -> Result<String, ConfigError> {
        let serializable = SerializableSettings {
            data: &self.data,
            cache: &self.cache,
            search: &self.search,
            processing: &self.processing,
            synthetic: &self.synthetic,
            taxonomy: &self.taxonomy,
        };
        toml::to_string_pretty(&serializable).map_err(ConfigError::Serialize)
    }
}

/// Which backing store the corpus loader reads from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    /// Filesystem when the manifest exists, embedded otherwise.
    #[default]
    Auto,
    /// Always the CSV manifest and article files.
    Filesystem,
    /// Always the dataset compiled into the binary.
    Embedded,
    /// Always the fixed fallback dataset.
    Fallback,
}

impl DataSource {
    /// All variants, in display order.
    pub const ALL: [Self; 4] = [Self::Auto, Self::Filesystem, Self::Embedded, Self::Fallback];

    /// Returns the lowercase name used in config files and on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Filesystem => "filesystem",
            Self::Embedded => "embedded",
            Self::Fallback => "fallback",
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DataSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|source| source.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!("unknown data source '{s}' (expected auto, filesystem, embedded or fallback)")
            })
    }
}

/// Location of the corpus on disk.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DataSettings {
    /// Directory holding the manifest and the articles directory.
    pub root: PathBuf,
    /// Manifest file name, relative to `root`.
    pub manifest: String,
    /// Directory of article text files, relative to `root`.
    pub articles_dir: String,
    /// Backing store selection.
    pub source: DataSource,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            root: PathBuf::from("SB_publications-main"),
            manifest: String::from("scraped_summary.csv"),
            articles_dir: String::from("scraped_articles"),
            source: DataSource::Auto,
        }
    }
}

impl DataSettings {
    /// Full path to the CSV manifest.
    pub fn manifest_path(&self) -> PathBuf {
        self.root.join(&self.manifest)
    }

    /// Full path to the articles directory.
    pub fn articles_path(&self) -> PathBuf {
        self.root.join(&self.articles_dir)
    }
}

/// Time-to-live of each cached resource, in seconds.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CacheSettings {
    /// Raw article list.
    pub articles_ttl_secs: u64,
    /// Enriched publication list.
    pub publications_ttl_secs: u64,
    /// Aggregate statistics.
    pub stats_ttl_secs: u64,
    /// Generated insights.
    pub insights_ttl_secs: u64,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            articles_ttl_secs: 600,
            publications_ttl_secs: 600,
            stats_ttl_secs: 300,
            insights_ttl_secs: 900,
        }
    }
}

impl CacheSettings {
    /// TTL of the article cache.
    pub fn articles_ttl(&self) -> Duration {
        Duration::from_secs(self.articles_ttl_secs)
    }

    /// TTL of the publication cache.
    pub fn publications_ttl(&self) -> Duration {
        Duration::from_secs(self.publications_ttl_secs)
    }

    /// TTL of the statistics cache.
    pub fn stats_ttl(&self) -> Duration {
        Duration::from_secs(self.stats_ttl_secs)
    }

    /// TTL of the insights cache.
    pub fn insights_ttl(&self) -> Duration {
        Duration::from_secs(self.insights_ttl_secs)
    }
}

/// Result limits and scoring weights.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Default number of articles returned by a search.
    pub limit: usize,
    /// Default number of publications returned.
    pub publications_limit: usize,
    /// Default number of insights returned.
    pub insights_limit: usize,
    /// Per-field weights of the ranking heuristic.
    pub weights: ScoreWeights,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            limit: 20,
            publications_limit: 1000,
            insights_limit: 10,
            weights: ScoreWeights::default(),
        }
    }
}

/// Weights applied by the ranking heuristic.
///
/// Per-term weights multiply a match count; bonuses are flat and applied once per document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ScoreWeights {
    /// Per occurrence of a term in the title.
    pub title: u32,
    /// Per occurrence of a term in the abstract.
    #[serde(rename = "abstract")]
    pub abstract_text: u32,
    /// Per keyword containing a term.
    pub keyword: u32,
    /// Per category containing a term.
    pub category: u32,
    /// When the experiment type contains a term.
    pub experiment_type: u32,
    /// When the organism contains a term.
    pub organism: u32,
    /// When the mission contains a term.
    pub mission: u32,
    /// When the whole query appears in the searchable text.
    pub phrase_bonus: u32,
    /// When the query equals the experiment type.
    pub exact_type_bonus: u32,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            title: 10,
            abstract_text: 5,
            keyword: 8,
            category: 8,
            experiment_type: 12,
            organism: 3,
            mission: 2,
            phrase_bonus: 20,
            exact_type_bonus: 50,
        }
    }
}

/// Budgets used when normalizing raw articles into documents.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ProcessingSettings {
    /// Character budget of an article abstract.
    pub abstract_chars: usize,
    /// Character budget of a publication abstract.
    pub publication_abstract_chars: usize,
    /// Maximum keywords kept per document.
    pub max_keywords: usize,
    /// Characters of body text returned to callers.
    pub content_preview_chars: usize,
    /// Number of keywords reported in statistics.
    pub top_keywords: usize,
}

impl Default for ProcessingSettings {
    fn default() -> Self {
        Self {
            abstract_chars: 300,
            publication_abstract_chars: 500,
            max_keywords: 8,
            content_preview_chars: 2000,
            top_keywords: 20,
        }
    }
}

/// Synthetic data generator settings.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct SyntheticSettings {
    /// Fixed seed; entropy is used when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

/// Borrowed view of every section, for TOML rendering.
#[derive(Serialize)]
struct SerializableSettings<'a> {
    /// Data location.
    data: &'a DataSettings,
    /// Cache TTLs.
    cache: &'a CacheSettings,
    /// Search settings.
    search: &'a SearchSettings,
    /// Processing budgets.
    processing: &'a ProcessingSettings,
    /// Synthetic generator.
    synthetic: &'a SyntheticSettings,
    /// Taxonomy, last because it holds arrays of tables.
    taxonomy: &'a TaxonomySettings,
}
