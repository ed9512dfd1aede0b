//! Source file discovery
//!
//! Walks a project root for checkable source files, honoring `.gitignore`
//! via the `ignore` crate. Returned paths are project-relative and sorted
//! for deterministic reports.

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

/// Extensions the rule engine knows how to parse.
const SOURCE_EXTENSIONS: &[&str] = &["ts", "tsx", "js", "jsx"];

pub fn discover_source_files(root: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();

    // honor .gitignore even when the root is not itself a git checkout
    let walker = WalkBuilder::new(root).require_git(false).build();
    for entry in walker.flatten() {
        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }
        let path = entry.path();
        let is_source = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| SOURCE_EXTENSIONS.contains(&ext));
        if !is_source {
            continue;
        }
        if let Ok(relative) = path.strip_prefix(root) {
            files.push(relative.to_path_buf());
        }
    }

    files.sort();
    files
}
