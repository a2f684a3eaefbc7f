use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (callers may re-report them)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("Schema input is empty")]
    EmptySchema,

    #[error("Schema is not valid JSON: {message}")]
    SchemaParse { message: String },

    #[error("Unknown logic kind '{logic_type}'")]
    UnknownLogicKind { logic_type: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptySchema => vec![
                "The schema input contained no text".into(),
                "Pass a schema file, or pipe JSON via '-'".into(),
                "Try: strategen init schema.json".into(),
            ],
            Self::SchemaParse { message } => vec![
                "The schema could not be parsed as JSON".into(),
                format!("Details: {}", message),
                "Check for trailing commas and unquoted keys".into(),
            ],
            Self::UnknownLogicKind { logic_type } => vec![
                format!("'{}' is not a recognized logic kind", logic_type),
                "Recognized kinds: DateTime, StringRegex, GenericEquality".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::EmptySchema | Self::SchemaParse { .. } | Self::UnknownLogicKind { .. } => {
                ErrorCategory::Validation
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
