//! Domain Entities
//!
//! - `Violation` - a detected forbidden cross-layer import
//! - `LegacyMapping` - the persisted legacy-path -> alias table
//! - `MigrationPlan` - an ordered dry-run migration report

mod mapping;
mod migration;
mod violation;

pub use mapping::LegacyMapping;
pub use migration::{MigrationEntry, MigrationPlan};
pub use violation::Violation;
