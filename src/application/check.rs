//! Check Use Case
//!
//! Orchestrates the layer dependency check: classify the file, extract its
//! imports, and evaluate each against the dependency rules. Violations are
//! findings returned as data; only unparseable source is an error.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::domain::entities::Violation;
use crate::domain::services::{
    extract_imports, DependencyRules, ImportStatement, LayerClassifier,
};
use crate::domain::value_objects::{
    classify_specifier, resolve_relative, Layer, SpecifierKind,
};
use crate::error::StrataResult;

/// Outcome for a single checked file (for streaming UI callbacks).
#[derive(Debug, Clone)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub layer: Option<Layer>,
    pub violations: Vec<Violation>,
    pub error: Option<String>,
}

impl FileOutcome {
    pub fn status(&self) -> FileStatus {
        if self.error.is_some() {
            FileStatus::Error
        } else if !self.violations.is_empty() {
            FileStatus::Violations
        } else if self.layer.is_none() {
            FileStatus::Exempt
        } else {
            FileStatus::Pass
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    Pass,
    Exempt,
    Violations,
    Error,
}

/// Result of checking a set of files
#[derive(Debug, Clone, Default)]
pub struct CheckResult {
    /// Files that were classified and checked
    pub files_checked: usize,
    /// Files outside the classification table (exempt)
    pub files_exempt: usize,
    /// All violations across checked files
    pub violations: Vec<Violation>,
    /// Per-file tooling errors (unreadable file, unparseable imports)
    pub errors: Vec<String>,
}

impl CheckResult {
    /// True when no violations and no tooling errors occurred.
    pub fn is_success(&self) -> bool {
        self.violations.is_empty() && self.errors.is_empty()
    }
}

/// Check Use Case
pub struct CheckUseCase {
    classifier: LayerClassifier,
    rules: DependencyRules,
}

impl CheckUseCase {
    /// Build from configuration (built-in table plus config extensions).
    pub fn new(config: &Config) -> StrataResult<Self> {
        Ok(Self {
            classifier: LayerClassifier::with_entries(&config.layers.classifier_entries())?,
            rules: DependencyRules::standard(),
        })
    }

    /// Built-in table only.
    pub fn standard() -> Self {
        Self {
            classifier: LayerClassifier::standard(),
            rules: DependencyRules::standard(),
        }
    }

    /// Classify a path without checking anything.
    pub fn classify(&self, path: &Path) -> Option<Layer> {
        self.classifier.classify(&path_str(path))
    }

    /// Check one file from its full text.
    ///
    /// Unclassified files are exempt and always pass. Unparseable import
    /// syntax aborts this file's check with an error.
    pub fn check_file(&self, path: &Path, text: &str) -> StrataResult<Vec<Violation>> {
        let Some(layer) = self.classify(path) else {
            return Ok(Vec::new());
        };
        let imports = extract_imports(path, text)?;
        Ok(self.evaluate(path, layer, &imports))
    }

    /// Check one file from pre-extracted import specifiers.
    pub fn check_imports(&self, path: &Path, imports: &[ImportStatement]) -> Vec<Violation> {
        match self.classify(path) {
            Some(layer) => self.evaluate(path, layer, imports),
            None => Vec::new(),
        }
    }

    fn evaluate(&self, path: &Path, layer: Layer, imports: &[ImportStatement]) -> Vec<Violation> {
        imports
            .iter()
            .filter_map(|import| self.evaluate_import(path, layer, import))
            .collect()
    }

    fn evaluate_import(
        &self,
        path: &Path,
        layer: Layer,
        import: &ImportStatement,
    ) -> Option<Violation> {
        let target = match classify_specifier(&import.specifier) {
            SpecifierKind::LayerAlias(target) => Some(target),
            SpecifierKind::Relative => {
                // resolve against the importing file, then classify through
                // the same table; unresolvable/unclassified stays exempt
                resolve_relative(&path_str(path), &import.specifier)
                    .and_then(|resolved| self.classifier.classify(&resolved))
            }
            SpecifierKind::UnknownAlias | SpecifierKind::Bare => None,
        }?;

        if !self.rules.is_forbidden(layer, target) {
            return None;
        }

        Some(Violation {
            file: path.to_path_buf(),
            line: import.line,
            source_layer: layer,
            target_layer: target,
            specifier: import.specifier.clone(),
        })
    }

    /// Check a batch of project-relative files under `root`.
    pub fn execute(&self, root: &Path, files: &[PathBuf]) -> CheckResult {
        self.execute_with_callback(root, files, |_| {})
    }

    /// Check a batch with a callback per file (for streaming UI).
    pub fn execute_with_callback<F>(
        &self,
        root: &Path,
        files: &[PathBuf],
        mut on_file: F,
    ) -> CheckResult
    where
        F: FnMut(&FileOutcome),
    {
        let mut result = CheckResult::default();

        for file in files {
            let outcome = self.check_one(root, file);
            match outcome.status() {
                FileStatus::Exempt => result.files_exempt += 1,
                FileStatus::Error => {
                    result.files_checked += 1;
                    result.errors.extend(outcome.error.clone());
                }
                FileStatus::Pass | FileStatus::Violations => result.files_checked += 1,
            }
            result.violations.extend(outcome.violations.iter().cloned());
            on_file(&outcome);
        }

        result
    }

    fn check_one(&self, root: &Path, file: &Path) -> FileOutcome {
        let layer = self.classify(file);
        if layer.is_none() {
            return FileOutcome {
                path: file.to_path_buf(),
                layer,
                violations: Vec::new(),
                error: None,
            };
        }

        let text = match fs::read_to_string(root.join(file)) {
            Ok(text) => text,
            Err(e) => {
                return FileOutcome {
                    path: file.to_path_buf(),
                    layer,
                    violations: Vec::new(),
                    error: Some(format!("{}: {}", file.display(), e)),
                }
            }
        };

        match self.check_file(file, &text) {
            Ok(violations) => FileOutcome {
                path: file.to_path_buf(),
                layer,
                violations,
                error: None,
            },
            Err(e) => FileOutcome {
                path: file.to_path_buf(),
                layer,
                violations: Vec::new(),
                error: Some(e.to_string()),
            },
        }
    }
}

fn path_str(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
