//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `strategen-adapters` crate provides implementations.

use crate::error::StrategenResult;
use std::path::Path;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `strategen_adapters::filesystem::LocalFilesystem` (production)
/// - `strategen_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// The generator only needs three capabilities: resolve-or-create a nested
/// directory chain, create-or-overwrite a leaf file with text content, and
/// existence checks. A completed `write_file` call guarantees the content is
/// durably associated with the file. There is deliberately no remove
/// operation — failed runs leave already-written files in place.
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> StrategenResult<()>;

    /// Write content to a file, creating or overwriting it.
    fn write_file(&self, path: &Path, content: &str) -> StrategenResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}
