//! Shared context for running CLI commands.

use std::{
    env,
    path::{Path, PathBuf},
    process::ExitCode,
};

use spacebio_config::{Config, DataSource};
use spacebio_index::QueryEngine;
use tracing::debug;

/// Command execution context built once per CLI invocation.
pub struct CommandContext {
    /// Current working directory.
    pub cwd: PathBuf,
    /// Loaded configuration (default if no config files were found), with any data source
    /// override applied.
    pub config: Config,
    /// Engine built on first use.
    engine: Option<QueryEngine>,
}

impl CommandContext {
    /// Loads the current directory and configuration, applying a data source override.
    pub fn load(data_source: Option<DataSource>) -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        let mut config = load_config_or_failure(&cwd)?;
        if let Some(source) = data_source {
            debug!(%source, "data source overridden");
            config.data.source = source;
        }
        Ok(Self {
            cwd,
            config,
            engine: None,
        })
    }

    /// Loads only the current directory, skipping configuration parsing.
    ///
    /// Used by `init`, which must work even when an existing config file is invalid.
    pub fn load_cwd_only() -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        Ok(Self {
            cwd,
            config: Config::default(),
            engine: None,
        })
    }

    /// The query engine, created on first use.
    pub fn engine(&mut self) -> &QueryEngine {
        self.engine
            .get_or_insert_with(|| QueryEngine::from_config(&self.config))
    }
}

/// Returns the current working directory or exits with a consistent error.
fn current_dir_or_failure() -> Result<PathBuf, ExitCode> {
    env::current_dir().map_err(|e| {
        eprintln!("error: could not determine current directory: {e}");
        ExitCode::FAILURE
    })
}

/// Loads configuration from the provided directory or exits with an error.
fn load_config_or_failure(cwd: &Path) -> Result<Config, ExitCode> {
    Config::load(cwd).map_err(|e| {
        eprintln!("error: failed to load configuration: {e}");
        ExitCode::FAILURE
    })
}
