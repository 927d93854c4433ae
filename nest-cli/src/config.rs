//! CLI configuration file
//!
//! Settings are layered: command-line flags override the TOML file, which
//! overrides the built-in defaults.
//!
//! ```toml
//! reorder = true
//! max_depth = 32
//!
//! [generate]
//! depth = 2
//! max_len = 8
//! seed = 42
//! ```

use nest_core::{GeneratorConfig, Limits, NestError};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised by the CLI before or around core operations
#[derive(Debug, Error)]
pub enum CliError {
    /// Config file could not be read
    #[error("failed to read config {}: {source}", path.display())]
    ConfigRead {
        /// Config path
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },
    /// Config file is not valid TOML for [`Config`]
    #[error("invalid config {}: {source}", path.display())]
    ConfigParse {
        /// Config path
        path: PathBuf,
        /// Underlying parse error
        source: toml::de::Error,
    },
    /// A flag expecting JSON got something else
    #[error("invalid JSON for --{flag}: {source}")]
    InvalidJsonArg {
        /// Flag name
        flag: &'static str,
        /// Underlying parse error
        source: serde_json::Error,
    },
    /// Core operation failed
    #[error(transparent)]
    Nest(#[from] NestError),
}

/// Settings loaded from `--config`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Renumber integer keys on `copy` unless a flag says otherwise
    pub reorder: bool,
    /// Maximum nesting accepted from input documents
    pub max_depth: Option<usize>,
    /// Defaults for `generate`
    pub generate: GenerateDefaults,
}

/// Defaults for the `generate` subcommand
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerateDefaults {
    /// Levels of sub-containers below the top level
    pub depth: usize,
    /// Insertion attempts at the top level
    pub max_len: usize,
    /// Fixed RNG seed; random when unset
    pub seed: Option<u64>,
}

impl Default for GenerateDefaults {
    fn default() -> Self {
        let config = GeneratorConfig::default();
        Self {
            depth: config.depth,
            max_len: config.max_len,
            seed: None,
        }
    }
}

impl Config {
    /// Load the config at `path`, or defaults when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self, CliError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let text = std::fs::read_to_string(path).map_err(|source| CliError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text).map_err(|source| CliError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse config text
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Limits after applying `max_depth`, validated against hard maximums
    pub fn limits(&self, max_depth_override: Option<usize>) -> Result<Limits, CliError> {
        let mut limits = Limits::default();
        if let Some(max_depth) = max_depth_override.or(self.max_depth) {
            limits.max_depth = max_depth;
        }
        limits.validate()?;
        Ok(limits)
    }
}
