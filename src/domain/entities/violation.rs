//! Violation entity
//!
//! A detected forbidden cross-layer import. Violations are findings, not
//! errors: they are collected and reported, never thrown.

use std::fmt;
use std::path::PathBuf;

use crate::domain::value_objects::Layer;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Project-relative path of the offending file.
    pub file: PathBuf,
    /// 1-based line of the import statement.
    pub line: usize,
    /// Layer the file belongs to.
    pub source_layer: Layer,
    /// Layer the import reaches into.
    pub target_layer: Layer,
    /// The import specifier as written.
    pub specifier: String,
}

impl Violation {
    /// Diagnostic message. The `"<Layer> layer cannot import"` prefix is a
    /// stable contract consumed by downstream tooling - do not reword.
    pub fn message(&self) -> String {
        format!(
            "{} layer cannot import {}",
            self.source_layer.display_name(),
            self.target_layer.alias_pattern()
        )
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}: {} ({})",
            self.file.display(),
            self.line,
            self.message(),
            self.specifier
        )
    }
}
