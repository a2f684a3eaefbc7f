//! Application layer errors.
//!
//! These errors represent failures in orchestration, not schema problems.
//! Schema problems are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while materializing a file plan.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Output root could not be accessed for writing.
    #[error("Output directory not writable: {path}: {reason}")]
    OutputNotWritable { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Files written before the failure were left in place".into(),
            ],
            Self::OutputNotWritable { path, .. } => vec![
                format!("Cannot write under: {}", path.display()),
                "Check that the directory exists and is writable".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FilesystemError { .. } | Self::OutputNotWritable { .. } => {
                ErrorCategory::Internal
            }
        }
    }
}
