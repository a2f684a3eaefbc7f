//! Infrastructure adapters for Strategen.
//!
//! This crate implements the ports defined in
//! `strategen-core::application::ports`. It contains all external
//! dependencies and I/O operations.

pub mod filesystem;
pub mod schema_loader;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use schema_loader::{SchemaSource, load_schema_text};
