//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure provides concrete implementations.

pub mod mapping_repository;

pub use mapping_repository::MappingRepository;
