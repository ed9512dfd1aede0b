//! Configuration
//!
//! Loads `strata.toml` from the project root, falling back to the user
//! config directory and then to defaults. Unknown keys are collected as
//! non-fatal warnings with nearest-key suggestions.

mod loader;
mod types;

pub use loader::{load_or_default, load_with_warnings, with_env_overrides, ConfigWarning};
pub use types::{
    ColorMode, Config, LayerPathConfig, LayersConfig, MigrationConfig, OutputConfig, Verbosity,
};
