//! Core domain layer for Strategen.
//!
//! This module contains pure logic with no I/O: the schema model, the fixed
//! template table, and the schema-to-plan transformation. Filesystem concerns
//! are handled via ports (traits) defined in the application layer.
//!
//! - **No async**: domain logic is synchronous
//! - **No I/O**: no filesystem, network, or external calls
//! - **Immutable data**: schema and plan types are Clone + PartialEq

pub mod codegen;
pub mod error;
pub mod plan;
pub mod schema;
pub mod templates;
pub mod validation;

// Re-exports for convenience
pub use codegen::{PlanOutput, SkippedStrategy, plan_files};
pub use error::{DomainError, ErrorCategory};
pub use plan::{FilePlan, PlannedFile, relative_dir};
pub use schema::{
    Context, Entity, GlobalSettings, LogicKind, OutputPaths, ProjectSchema, Property, Strategy,
};
pub use validation::{LintWarning, lint};
