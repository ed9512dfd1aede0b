//! Migration plan entity
//!
//! An ordered dry-run report pairing each legacy path with its resolved
//! target alias (or nothing when the path is unmapped). The plan never
//! rewrites files - it is produced, rendered, and discarded.

use crate::domain::entities::LegacyMapping;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationEntry {
    /// The legacy path as given by the caller.
    pub source: String,
    /// Resolved alias, absent when the path has no mapping yet.
    pub target: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MigrationPlan {
    /// Entries in the caller's input order - positional correspondence is
    /// part of the contract.
    pub entries: Vec<MigrationEntry>,
}

impl MigrationPlan {
    /// Build a plan by resolving each path against the loaded mapping.
    pub fn resolve(mapping: &LegacyMapping, legacy_paths: &[String]) -> Self {
        let entries = legacy_paths
            .iter()
            .map(|source| MigrationEntry {
                source: source.clone(),
                target: mapping.resolve(source).map(str::to_string),
            })
            .collect();
        Self { entries }
    }

    pub fn mapped_count(&self) -> usize {
        self.entries.iter().filter(|e| e.target.is_some()).count()
    }

    pub fn unmapped_count(&self) -> usize {
        self.entries.len() - self.mapped_count()
    }

    pub fn is_fully_mapped(&self) -> bool {
        self.unmapped_count() == 0
    }

    /// Paths still lacking a mapping, in plan order.
    pub fn unmapped(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|e| e.target.is_none())
            .map(|e| e.source.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapping() -> LegacyMapping {
        LegacyMapping::from_entries([
            ("lib/auth.ts", "@/infrastructure/auth"),
            ("lib/utils.ts", "@/application/common"),
            ("types/index.ts", "@/domain"),
        ])
    }

    #[test]
    fn plan_preserves_input_order() {
        let paths = vec![
            "types/index.ts".to_string(),
            "lib/auth.ts".to_string(),
            "lib/utils.ts".to_string(),
        ];
        let plan = MigrationPlan::resolve(&mapping(), &paths);

        let sources: Vec<&str> = plan.entries.iter().map(|e| e.source.as_str()).collect();
        assert_eq!(sources, vec!["types/index.ts", "lib/auth.ts", "lib/utils.ts"]);
        assert_eq!(plan.entries[0].target.as_deref(), Some("@/domain"));
        assert_eq!(plan.entries[1].target.as_deref(), Some("@/infrastructure/auth"));
        assert_eq!(plan.entries[2].target.as_deref(), Some("@/application/common"));
    }

    #[test]
    fn plan_keeps_duplicates() {
        let paths = vec!["lib/auth.ts".to_string(), "lib/auth.ts".to_string()];
        let plan = MigrationPlan::resolve(&mapping(), &paths);
        assert_eq!(plan.entries.len(), 2);
    }

    #[test]
    fn unmapped_paths_surface_as_absent_targets() {
        let paths = vec!["lib/auth.ts".to_string(), "unknown/path.ts".to_string()];
        let plan = MigrationPlan::resolve(&mapping(), &paths);

        assert_eq!(plan.mapped_count(), 1);
        assert_eq!(plan.unmapped_count(), 1);
        assert!(!plan.is_fully_mapped());
        assert_eq!(plan.unmapped().collect::<Vec<_>>(), vec!["unknown/path.ts"]);
    }

    #[test]
    fn resolving_twice_yields_identical_plans() {
        let paths = vec!["lib/auth.ts".to_string(), "unknown/path.ts".to_string()];
        let m = mapping();
        assert_eq!(
            MigrationPlan::resolve(&m, &paths),
            MigrationPlan::resolve(&m, &paths)
        );
    }
}
