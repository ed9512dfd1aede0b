//! Domain Services
//!
//! Pure services that operate on paths and source text. No I/O.

mod classifier;
mod dependency_rules;
mod import_parser;

pub use classifier::{ClassifierEntry, LayerClassifier};
pub use dependency_rules::DependencyRules;
pub use import_parser::{extract_imports, ImportStatement};
