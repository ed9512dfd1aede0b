//! Strata - layer dependency linter and migration planner
//!
//! Strata keeps layered codebases honest: it classifies source files into
//! architectural layers (domain, application, infrastructure,
//! presentation), checks every import against the allowed dependency
//! direction, and plans the migration of legacy flat paths to their new
//! layer-qualified aliases.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{CheckResult, CheckUseCase, MigrateUseCase};
pub use config::Config;
pub use domain::entities::{LegacyMapping, MigrationEntry, MigrationPlan, Violation};
pub use domain::ports::MappingRepository;
pub use domain::services::{extract_imports, ImportStatement, LayerClassifier};
pub use domain::value_objects::Layer;
pub use error::{StrataError, StrataResult};
pub use infrastructure::{JsonMappingRepository, DEFAULT_MAPPING_PATH};
