//! Schema model: the declarative input the generator consumes.
//!
//! The whole tree deserializes with serde from one JSON document. Entities
//! and contexts are related only by name-matching (`Context.target_entity`
//! naming some `Entity.name`); that link is intentionally unchecked here —
//! `validation::lint` reports it as an advisory finding.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// A field declaration on an entity.
///
/// `default` is an optional literal suffix appended verbatim to the emitted
/// declaration (e.g. `" = string.Empty;"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
}

/// A named record type producing one generated class file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub name: String,
    #[serde(default)]
    pub properties: Vec<Property>,
}

/// A single filter rule: one property reference plus a logic kind.
///
/// `logic_type` is kept as the raw input string so that unrecognized kinds
/// survive parsing and can be diagnosed during planning instead of failing
/// deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Strategy {
    pub property_ref: String,
    pub logic_type: String,
}

impl Strategy {
    /// Resolve the raw `logic_type` against the closed kind set.
    ///
    /// `None` means the strategy will be skipped (with a diagnostic) rather
    /// than generated.
    pub fn logic_kind(&self) -> Option<LogicKind> {
        LogicKind::from_str(&self.logic_type).ok()
    }
}

/// A named grouping of strategies targeting one entity type.
///
/// Produces one interface file and one implementation file per recognized
/// strategy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Context {
    pub context_name: String,
    pub target_entity: String,
    #[serde(default)]
    pub strategies: Vec<Strategy>,
}

/// The closed set of comparison semantics a strategy can use.
///
/// Template dispatch over this enum is exhaustive; see
/// `templates::LogicKind::guard_body`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LogicKind {
    /// Year/month/day component equality on an optional date value.
    DateTime,
    /// Case-insensitive pattern match when the criterion is non-null.
    StringRegex,
    /// Direct equality comparison when the criterion is non-null.
    GenericEquality,
}

impl LogicKind {
    /// Every recognized kind, in declaration order.
    pub const ALL: [LogicKind; 3] = [Self::DateTime, Self::StringRegex, Self::GenericEquality];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DateTime => "DateTime",
            Self::StringRegex => "StringRegex",
            Self::GenericEquality => "GenericEquality",
        }
    }
}

impl FromStr for LogicKind {
    type Err = DomainError;

    // Exact, case-sensitive match: the kind strings are part of the schema
    // contract, not free-form user text.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|kind| kind.as_str() == s)
            .copied()
            .ok_or_else(|| DomainError::UnknownLogicKind {
                logic_type: s.to_string(),
            })
    }
}

impl std::fmt::Display for LogicKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The four output directory paths, relative to the user-chosen root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputPaths {
    pub entities: String,
    pub interfaces: String,
    pub implementations: String,
    pub ioc: String,
}

/// Namespace roots and output paths; pure configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalSettings {
    pub root_namespace_domain: String,
    pub root_namespace_api: String,
    pub paths: OutputPaths,
}

/// Root of the schema document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSchema {
    pub global_settings: GlobalSettings,
    #[serde(default)]
    pub entities: Vec<Entity>,
    #[serde(default)]
    pub contexts: Vec<Context>,
}

impl ProjectSchema {
    /// Parse a schema from its JSON text.
    ///
    /// Empty (or whitespace-only) input and malformed JSON are the only
    /// rejection causes; everything structurally valid parses, including
    /// schemas with unknown logic kinds or dangling entity references.
    pub fn from_json(text: &str) -> Result<Self, DomainError> {
        if text.trim().is_empty() {
            return Err(DomainError::EmptySchema);
        }
        serde_json::from_str(text).map_err(|e| DomainError::SchemaParse {
            message: e.to_string(),
        })
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
