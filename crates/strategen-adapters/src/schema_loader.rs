//! Schema input loading.
//!
//! The generator core consumes schema *text*; this adapter is the only place
//! that knows where that text comes from (a file on disk, or stdin when the
//! user pipes the schema in with `-`). Parsing stays in the core.

use std::{
    io::Read,
    path::{Path, PathBuf},
};

use tracing::debug;

use strategen_core::{application::ApplicationError, error::StrategenResult};

/// Where to read the schema document from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaSource {
    /// Read from standard input until EOF.
    Stdin,
    /// Read the whole file at the given path.
    File(PathBuf),
}

impl SchemaSource {
    /// Interpret a CLI argument: `-` means stdin, anything else is a path.
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            Self::Stdin
        } else {
            Self::File(PathBuf::from(arg))
        }
    }
}

impl std::fmt::Display for SchemaSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Stdin => write!(f, "<stdin>"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Load the raw schema text from a source.
///
/// No validation happens here beyond the read itself; empty input is still
/// returned and rejected later by the core parser, so that "empty file" and
/// "empty stdin" surface as the same schema error.
pub fn load_schema_text(source: &SchemaSource) -> StrategenResult<String> {
    match source {
        SchemaSource::Stdin => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .map_err(|e| read_error(Path::new("<stdin>"), e))?;
            debug!(bytes = text.len(), "Schema read from stdin");
            Ok(text)
        }
        SchemaSource::File(path) => {
            let text = std::fs::read_to_string(path).map_err(|e| read_error(path, e))?;
            debug!(path = %path.display(), bytes = text.len(), "Schema read from file");
            Ok(text)
        }
    }
}

fn read_error(path: &Path, e: std::io::Error) -> strategen_core::error::StrategenError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to read schema: {}", e),
    }
    .into()
}

// ── tests ─────────────────────────────────────────────────────────────────────
