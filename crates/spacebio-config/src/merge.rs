//! Configuration merging.
//!
//! Merges multiple `RawConfig` files into a single resolved `Config`,
//! applying precedence rules and resolving the data root.

use std::path::{Path, PathBuf};

use crate::{
    CacheSettings, Config, ConfigError, DataSettings, ProcessingSettings, ScoreWeights,
    SearchSettings, SyntheticSettings,
    parse::{
        RawCacheSettings, RawConfig, RawDataSettings, RawProcessingSettings, RawSearchSettings,
        RawTaxonomySettings, RawWeights,
    },
    resolve::resolve_data_path,
    taxonomy::{CategoryDefinition, TaxonomySettings},
};

/// A parsed config file with its source path.
pub struct ParsedConfig {
    /// Path to the config file.
    pub path: PathBuf,
    /// Parsed raw configuration.
    pub config: RawConfig,
}

impl ParsedConfig {
    /// Directory containing the config file.
    fn dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new("."))
    }
}

/// Merges multiple configuration files into a single resolved `Config`.
///
/// Configs should be provided in precedence order: highest precedence first (closest to CWD),
/// lowest precedence last (global config).
///
/// Merge rules:
/// - Scalar settings: first defined value wins
/// - Data root: resolved relative to the directory of the file that defines it
/// - Keyword vocabulary and category list: first definition replaces the default wholesale
pub fn merge_configs(configs: &[ParsedConfig]) -> Result<Config, ConfigError> {
    if configs.is_empty() {
        return Ok(Config::default());
    }

    let data = merge_data_settings(configs)?;
    let mut cache = CacheSettings::default();
    let mut search = SearchSettings::default();
    let mut processing = ProcessingSettings::default();
    let mut taxonomy = TaxonomySettings::default();
    let mut synthetic = SyntheticSettings::default();

    // Iterate in reverse (lowest precedence first) so higher precedence overwrites
    for parsed in configs.iter().rev() {
        let raw = &parsed.config;
        if let Some(ref c) = raw.cache {
            apply_raw_cache(&mut cache, c);
        }
        if let Some(ref s) = raw.search {
            apply_raw_search(&mut search, s);
        }
        if let Some(ref p) = raw.processing {
            apply_raw_processing(&mut processing, p);
        }
        if let Some(ref t) = raw.taxonomy {
            apply_raw_taxonomy(&mut taxonomy, t);
        }
        if let Some(ref s) = raw.synthetic
            && s.seed.is_some()
        {
            synthetic.seed = s.seed;
        }
    }

    let config_root = configs.first().map(|c| c.dir().to_path_buf());

    Ok(Config {
        data,
        cache,
        search,
        processing,
        taxonomy,
        synthetic,
        config_root,
    })
}

/// Merges the `[data]` sections, resolving the root against its defining file.
fn merge_data_settings(configs: &[ParsedConfig]) -> Result<DataSettings, ConfigError> {
    let mut result = DataSettings::default();

    for parsed in configs.iter().rev() {
        if let Some(ref data) = parsed.config.data {
            apply_raw_data(&mut result, data, parsed.dir())?;
        }
    }

    Ok(result)
}

/// Applies a raw `[data]` section.
fn apply_raw_data(
    result: &mut DataSettings,
    raw: &RawDataSettings,
    config_dir: &Path,
) -> Result<(), ConfigError> {
    if let Some(ref root) = raw.root {
        result.root = resolve_data_path(root, config_dir)?;
    }
    if let Some(ref v) = raw.manifest {
        result.manifest = v.clone();
    }
    if let Some(ref v) = raw.articles_dir {
        result.articles_dir = v.clone();
    }
    if let Some(v) = raw.source {
        result.source = v;
    }
    Ok(())
}

/// Applies a raw `[cache]` section.
fn apply_raw_cache(result: &mut CacheSettings, raw: &RawCacheSettings) {
    if let Some(v) = raw.articles_ttl_secs {
        result.articles_ttl_secs = v;
    }
    if let Some(v) = raw.publications_ttl_secs {
        result.publications_ttl_secs = v;
    }
    if let Some(v) = raw.stats_ttl_secs {
        result.stats_ttl_secs = v;
    }
    if let Some(v) = raw.insights_ttl_secs {
        result.insights_ttl_secs = v;
    }
}

/// Applies a raw `[search]` section.
fn apply_raw_search(result: &mut SearchSettings, raw: &RawSearchSettings) {
    if let Some(v) = raw.limit {
        result.limit = v;
    }
    if let Some(v) = raw.publications_limit {
        result.publications_limit = v;
    }
    if let Some(v) = raw.insights_limit {
        result.insights_limit = v;
    }
    if let Some(ref w) = raw.weights {
        apply_raw_weights(&mut result.weights, w);
    }
}

/// Applies a raw `[search.weights]` section.
fn apply_raw_weights(result: &mut ScoreWeights, raw: &RawWeights) {
    let fields = [
        (&mut result.title, raw.title),
        (&mut result.abstract_text, raw.abstract_text),
        (&mut result.keyword, raw.keyword),
        (&mut result.category, raw.category),
        (&mut result.experiment_type, raw.experiment_type),
        (&mut result.organism, raw.organism),
        (&mut result.mission, raw.mission),
        (&mut result.phrase_bonus, raw.phrase_bonus),
        (&mut result.exact_type_bonus, raw.exact_type_bonus),
    ];
    for (slot, value) in fields {
        if let Some(v) = value {
            *slot = v;
        }
    }
}

/// Applies a raw `[processing]` section.
fn apply_raw_processing(result: &mut ProcessingSettings, raw: &RawProcessingSettings) {
    if let Some(v) = raw.abstract_chars {
        result.abstract_chars = v;
    }
    if let Some(v) = raw.publication_abstract_chars {
        result.publication_abstract_chars = v;
    }
    if let Some(v) = raw.max_keywords {
        result.max_keywords = v;
    }
    if let Some(v) = raw.content_preview_chars {
        result.content_preview_chars = v;
    }
    if let Some(v) = raw.top_keywords {
        result.top_keywords = v;
    }
}

/// Applies a raw `[taxonomy]` section. Lists replace, they never append.
fn apply_raw_taxonomy(result: &mut TaxonomySettings, raw: &RawTaxonomySettings) {
    if let Some(ref v) = raw.default_category {
        result.default_category = v.clone();
    }
    if let Some(ref v) = raw.keywords {
        result.keywords = v.clone();
    }
    if let Some(ref categories) = raw.category {
        result.categories = categories
            .iter()
            .map(|c| CategoryDefinition {
                name: c.name.clone(),
                triggers: c.triggers.iter().map(|t| t.to_lowercase()).collect(),
            })
            .collect();
    }
}
