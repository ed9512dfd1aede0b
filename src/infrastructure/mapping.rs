//! JSON mapping repository
//!
//! Reads the legacy mapping table from its well-known location under the
//! project root: a JSON object of legacy path -> target alias strings.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::entities::LegacyMapping;
use crate::domain::ports::MappingRepository;
use crate::error::{StrataError, StrataResult};

/// Default table location relative to the project root.
pub const DEFAULT_MAPPING_PATH: &str = "tools/migration/layer-mapping.json";

#[derive(Debug, Clone)]
pub struct JsonMappingRepository {
    mapping_path: PathBuf,
}

impl JsonMappingRepository {
    pub fn new() -> Self {
        Self {
            mapping_path: PathBuf::from(DEFAULT_MAPPING_PATH),
        }
    }

    /// Override the table location. Relative paths are joined onto the
    /// project root; absolute paths are used as-is.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            mapping_path: path.into(),
        }
    }
}

impl Default for JsonMappingRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl MappingRepository for JsonMappingRepository {
    fn load(&self, project_root: &Path) -> StrataResult<LegacyMapping> {
        let path = project_root.join(&self.mapping_path);
        if !path.exists() {
            return Err(StrataError::MappingNotFound { path });
        }

        let content = fs::read_to_string(&path)?;
        let entries: BTreeMap<String, String> =
            serde_json::from_str(&content).map_err(|e| StrataError::MalformedMapping {
                path: path.clone(),
                message: e.to_string(),
            })?;

        Ok(LegacyMapping::from_entries(entries))
    }
}
