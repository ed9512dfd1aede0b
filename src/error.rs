//! Error types for Strata
//!
//! Uses `thiserror` for library errors. Violations and unmapped paths are
//! never errors - they are returned as data from the use cases.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Strata operations
pub type StrataResult<T> = Result<T, StrataError>;

/// Main error type for Strata operations
#[derive(Error, Debug)]
pub enum StrataError {
    /// Mapping table file absent - fatal, there is no fallback mapping
    #[error("mapping table not found: {path}")]
    MappingNotFound { path: PathBuf },

    /// Mapping table exists but is not a valid JSON object of strings
    #[error("malformed mapping table {path}: {message}")]
    MalformedMapping { path: PathBuf, message: String },

    /// Import statement that cannot be parsed into a module specifier
    #[error("unparseable import in {file}:{line}: {snippet}")]
    UnparseableImport {
        file: PathBuf,
        line: usize,
        snippet: String,
    },

    /// Invalid layer classification glob (from config extension entries)
    #[error("invalid layer pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    /// Invalid configuration file
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
