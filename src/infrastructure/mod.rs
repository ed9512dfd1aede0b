//! Infrastructure Layer
//!
//! Concrete implementations of domain ports and the only file-system
//! access in the crate: reading the mapping table and discovering source
//! files for `check`.

pub mod mapping;
pub mod source_files;

pub use mapping::{JsonMappingRepository, DEFAULT_MAPPING_PATH};
pub use source_files::discover_source_files;
