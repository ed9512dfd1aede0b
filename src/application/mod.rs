//! Application Layer
//!
//! Use cases that orchestrate the two core flows.
//! This layer:
//! - Depends on Domain (entities, services, ports)
//! - Does NOT contain the rules themselves (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `CheckUseCase` - classify a file, extract its imports, evaluate the
//!   dependency rules
//! - `MigrateUseCase` - load the mapping table once and produce an ordered
//!   dry-run migration plan

pub mod check;
pub mod migrate;

pub use check::{CheckResult, CheckUseCase, FileOutcome, FileStatus};
pub use migrate::MigrateUseCase;
