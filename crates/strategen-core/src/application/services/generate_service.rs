//! Generate Service - main application orchestrator.
//!
//! Coordinates the whole generation workflow:
//! 1. Parse the schema JSON
//! 2. Build the file plan (pure)
//! 3. Materialize the plan through the filesystem port, sequentially
//!
//! Writes are strictly sequential and short-circuit on the first failure.
//! There is no rollback: files written before a failure stay on disk, and the
//! failed run reports only the triggering error.

use std::path::Path;
use tracing::{debug, info, instrument};

use crate::{
    application::ports::Filesystem,
    domain::{self, PlanOutput, ProjectSchema, SkippedStrategy},
    error::{StrategenError, StrategenResult},
};

/// Summary of a completed generation run, for display purposes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateReport {
    pub entity_files: usize,
    pub interface_files: usize,
    pub implementation_files: usize,
    pub injector_written: bool,
    pub files_written: usize,
    pub skipped: Vec<SkippedStrategy>,
}

/// Parse schema text and build the file plan without touching any filesystem.
///
/// Serves `--dry-run` and `strategen validate` as well as the write path.
pub fn plan_from_json(schema_text: &str) -> StrategenResult<PlanOutput> {
    let schema = ProjectSchema::from_json(schema_text).map_err(StrategenError::Domain)?;
    Ok(domain::plan_files(&schema))
}

/// Main generation service.
pub struct GenerateService {
    filesystem: Box<dyn Filesystem>,
}

impl GenerateService {
    /// Create a new generate service with the given filesystem adapter.
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Generate all files for a schema under `output_root`.
    ///
    /// This is the main use case. Order of creation is deterministic:
    /// entities in schema order, then per-context interface and
    /// implementations, injector last.
    #[instrument(skip_all, fields(output_root = %output_root.display()))]
    pub fn generate(&self, schema_text: &str, output_root: &Path) -> StrategenResult<GenerateReport> {
        let output = plan_from_json(schema_text)?;
        info!(files = output.plan.file_count(), "File plan built");

        let mut files_written = 0usize;
        for file in output.plan.files() {
            let dir = output_root.join(&file.dir);
            self.filesystem.create_dir_all(&dir)?;

            let path = dir.join(&file.name);
            self.filesystem.write_file(&path, &file.content)?;
            debug!(path = %path.display(), bytes = file.content.len(), "File written");
            files_written += 1;
        }

        info!(files_written, "Generation completed successfully");
        Ok(GenerateReport {
            entity_files: output.entity_files,
            interface_files: output.interface_files,
            implementation_files: output.implementation_files,
            injector_written: output.injector_written,
            files_written,
            skipped: output.skipped,
        })
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
