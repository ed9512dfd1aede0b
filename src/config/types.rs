//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::services::ClassifierEntry;
use crate::domain::value_objects::Layer;
use crate::error::StrataResult;

use super::loader::{self, ConfigWarning};

/// One additional `pattern -> layer` classification binding.
///
///   [[layers.paths]]
///   pattern = "pages/**"
///   layer = "presentation"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerPathConfig {
    pub pattern: String,
    pub layer: Layer,
}

/// Layer classification configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LayersConfig {
    #[serde(default)]
    pub paths: Vec<LayerPathConfig>,
}

impl LayersConfig {
    /// The configured bindings as classifier entries, in file order.
    pub fn classifier_entries(&self) -> Vec<ClassifierEntry> {
        self.paths
            .iter()
            .map(|p| ClassifierEntry {
                pattern: p.pattern.clone(),
                layer: p.layer,
            })
            .collect()
    }
}

/// Migration planner configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MigrationConfig {
    /// Override for the mapping table location (relative to project root)
    #[serde(default)]
    pub mapping_file: Option<PathBuf>,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,

    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            verbosity: Verbosity::default(),
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub layers: LayersConfig,

    #[serde(default)]
    pub migration: MigrationConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> StrataResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> StrataResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from project config, user config, or defaults
    pub fn load_or_default(project_root: Option<&Path>) -> Self {
        loader::load_or_default(project_root)
    }

    /// Apply environment variable overrides (STRATA_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }
}
