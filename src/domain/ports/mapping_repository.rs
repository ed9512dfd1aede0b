//! Mapping repository port
//!
//! Loading the legacy mapping table is the only I/O the migration planner
//! needs; keeping it behind a trait lets tests substitute in-memory tables.

use std::path::Path;

use crate::domain::entities::LegacyMapping;
use crate::error::StrataResult;

pub trait MappingRepository {
    /// Load the mapping table for a project root.
    ///
    /// A missing table is a fatal configuration error - there is no
    /// fallback empty mapping.
    fn load(&self, project_root: &Path) -> StrataResult<LegacyMapping>;
}
