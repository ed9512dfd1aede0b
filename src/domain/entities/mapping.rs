//! Legacy mapping table entity
//!
//! The persisted table that maps pre-refactor flat paths to their new
//! layer-qualified aliases. Immutable after load; lookup is exact-match
//! only (no globbing).

use std::collections::BTreeMap;

use crate::domain::value_objects::normalize_legacy_path;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LegacyMapping {
    entries: BTreeMap<String, String>,
}

impl LegacyMapping {
    /// Build a mapping from raw table entries, normalizing keys on ingest.
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let entries = entries
            .into_iter()
            .map(|(k, v)| (normalize_legacy_path(k.as_ref()).to_string(), v.into()))
            .collect();
        Self { entries }
    }

    /// Resolve a legacy path to its target alias.
    ///
    /// An unmapped path is a normal outcome (the path is outside the
    /// migration scope), so this returns `None` rather than an error.
    pub fn resolve(&self, source: &str) -> Option<&str> {
        self.entries
            .get(normalize_legacy_path(source))
            .map(String::as_str)
    }

    /// Iterate entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Legacy paths in key order.
    pub fn sources(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
