//! Migrate Use Case
//!
//! Loads the legacy mapping table once and turns a list of legacy paths
//! into an ordered dry-run migration plan. Nothing is rewritten - the plan
//! is a report for humans and follow-up tooling.

use std::path::Path;

use crate::domain::entities::{LegacyMapping, MigrationPlan};
use crate::domain::ports::MappingRepository;
use crate::error::StrataResult;

pub struct MigrateUseCase<R: MappingRepository> {
    repository: R,
}

impl<R: MappingRepository> MigrateUseCase<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Load the table for callers doing many individual resolutions.
    pub fn load(&self, project_root: &Path) -> StrataResult<LegacyMapping> {
        self.repository.load(project_root)
    }

    /// Plan the migration of the given legacy paths, in input order.
    pub fn plan(&self, project_root: &Path, legacy_paths: &[String]) -> StrataResult<MigrationPlan> {
        let mapping = self.repository.load(project_root)?;
        Ok(MigrationPlan::resolve(&mapping, legacy_paths))
    }

    /// Plan every entry in the table (the no-arguments dry-run report).
    pub fn plan_all(&self, project_root: &Path) -> StrataResult<MigrationPlan> {
        let mapping = self.repository.load(project_root)?;
        let sources: Vec<String> = mapping.sources().map(str::to_string).collect();
        Ok(MigrationPlan::resolve(&mapping, &sources))
    }
}
