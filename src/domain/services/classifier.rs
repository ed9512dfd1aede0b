//! Layer classifier
//!
//! Maps project-relative file paths to layers through an ordered table of
//! glob patterns. First match wins; a path matching no pattern is
//! unclassified and exempt from the dependency rules.

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::domain::value_objects::{normalize_legacy_path, Layer};
use crate::error::{StrataError, StrataResult};

/// One `pattern -> layer` binding in the classification table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifierEntry {
    pub pattern: String,
    pub layer: Layer,
}

/// The built-in classification table. Kept as data so additional bindings
/// from configuration stay additive.
const STANDARD_TABLE: &[(&str, Layer)] = &[
    ("src/domain/**", Layer::Domain),
    ("src/application/**", Layer::Application),
    ("src/infrastructure/**", Layer::Infrastructure),
    ("src/presentation/**", Layer::Presentation),
    ("app/**", Layer::Presentation),
];

#[derive(Debug)]
pub struct LayerClassifier {
    set: GlobSet,
    layers: Vec<Layer>,
    patterns: Vec<String>,
}

impl LayerClassifier {
    /// The built-in table alone.
    pub fn standard() -> Self {
        Self::with_entries(&[]).expect("built-in classification table must build")
    }

    /// Built-in table plus additional bindings, appended in order after the
    /// built-ins so they can only widen classification, never shadow it.
    pub fn with_entries(extra: &[ClassifierEntry]) -> StrataResult<Self> {
        let mut builder = GlobSetBuilder::new();
        let mut layers = Vec::new();
        let mut patterns = Vec::new();

        for (pattern, layer) in STANDARD_TABLE {
            builder.add(compile(pattern)?);
            layers.push(*layer);
            patterns.push((*pattern).to_string());
        }
        for entry in extra {
            builder.add(compile(&entry.pattern)?);
            layers.push(entry.layer);
            patterns.push(entry.pattern.clone());
        }

        let set = builder.build().map_err(|e| StrataError::InvalidPattern {
            pattern: "<classification table>".to_string(),
            message: e.to_string(),
        })?;

        Ok(Self {
            set,
            layers,
            patterns,
        })
    }

    /// Classify a project-relative path. `None` means unclassified/exempt.
    pub fn classify(&self, path: &str) -> Option<Layer> {
        let normalized = normalize_legacy_path(path).replace('\\', "/");
        self.set
            .matches(normalized.as_str())
            .into_iter()
            .min()
            .map(|idx| self.layers[idx])
    }

    /// The table entries in match order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, Layer)> {
        self.patterns
            .iter()
            .map(String::as_str)
            .zip(self.layers.iter().copied())
    }
}

impl Default for LayerClassifier {
    fn default() -> Self {
        Self::standard()
    }
}

fn compile(pattern: &str) -> StrataResult<Glob> {
    Glob::new(pattern).map_err(|e| StrataError::InvalidPattern {
        pattern: pattern.to_string(),
        message: e.to_string(),
    })
}
