//! Strategen Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Strategen
//! C# skeleton generator, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          strategen-cli (CLI)            │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │           (GenerateService)             │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │         (Driven: Filesystem)            │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   strategen-adapters (Infrastructure)   │
//! │   (LocalFilesystem, MemoryFilesystem)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │   (ProjectSchema, templates, FilePlan)  │
//! │         No External Dependencies        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use strategen_core::application::GenerateService;
//!
//! # fn run(filesystem: Box<dyn strategen_core::application::Filesystem>,
//! #        schema_text: &str) -> strategen_core::error::StrategenResult<()> {
//! let service = GenerateService::new(filesystem);
//! let report = service.generate(schema_text, "./output".as_ref())?;
//! println!("{} files written", report.files_written);
//! # Ok(())
//! # }
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        Filesystem, GenerateReport, GenerateService, plan_from_json,
    };
    pub use crate::domain::{
        Context, Entity, FilePlan, GlobalSettings, LintWarning, LogicKind, OutputPaths,
        PlanOutput, PlannedFile, ProjectSchema, Property, SkippedStrategy, Strategy, lint,
        plan_files,
    };
    pub use crate::error::{StrategenError, StrategenResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
