//! Advisory schema lints.
//!
//! Generation itself performs no checks beyond presence; a dangling entity
//! reference just emits code that won't compile downstream. These lints
//! exist for `strategen validate` only: they warn, they never fail, and they
//! never change what `plan_files` produces.

use crate::domain::schema::ProjectSchema;

/// A non-fatal finding about a schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LintWarning {
    /// An entity has an empty name; its file would be named `.cs`.
    EmptyEntityName { index: usize },
    /// A context has an empty name; derived type names would be malformed.
    EmptyContextName { index: usize },
    /// A strategy's `logic_type` is not in the recognized set and will be
    /// silently dropped at generation time.
    UnknownLogicKind {
        context_name: String,
        property_ref: String,
        logic_type: String,
    },
    /// A context targets an entity name that is not declared in the schema.
    DanglingTargetEntity {
        context_name: String,
        target_entity: String,
    },
}

impl std::fmt::Display for LintWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyEntityName { index } => {
                write!(f, "entity #{index} has an empty name")
            }
            Self::EmptyContextName { index } => {
                write!(f, "context #{index} has an empty name")
            }
            Self::UnknownLogicKind {
                context_name,
                property_ref,
                logic_type,
            } => write!(
                f,
                "context '{context_name}': strategy for '{property_ref}' has unknown logic kind '{logic_type}' and will be skipped"
            ),
            Self::DanglingTargetEntity {
                context_name,
                target_entity,
            } => write!(
                f,
                "context '{context_name}' targets undeclared entity '{target_entity}'"
            ),
        }
    }
}

/// Collect every advisory finding for a schema.
pub fn lint(schema: &ProjectSchema) -> Vec<LintWarning> {
    let mut warnings = Vec::new();

    for (index, entity) in schema.entities.iter().enumerate() {
        if entity.name.trim().is_empty() {
            warnings.push(LintWarning::EmptyEntityName { index });
        }
    }

    for (index, context) in schema.contexts.iter().enumerate() {
        if context.context_name.trim().is_empty() {
            warnings.push(LintWarning::EmptyContextName { index });
        }

        let declared = schema
            .entities
            .iter()
            .any(|e| e.name == context.target_entity);
        if !declared {
            warnings.push(LintWarning::DanglingTargetEntity {
                context_name: context.context_name.clone(),
                target_entity: context.target_entity.clone(),
            });
        }

        for strategy in &context.strategies {
            if strategy.logic_kind().is_none() {
                warnings.push(LintWarning::UnknownLogicKind {
                    context_name: context.context_name.clone(),
                    property_ref: strategy.property_ref.clone(),
                    logic_type: strategy.logic_type.clone(),
                });
            }
        }
    }

    warnings
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::schema::{Context, Entity, GlobalSettings, OutputPaths, Strategy};

    fn base_schema() -> ProjectSchema {
        ProjectSchema {
            global_settings: GlobalSettings {
                root_namespace_domain: "D".into(),
                root_namespace_api: "A".into(),
                paths: OutputPaths {
                    entities: "e".into(),
                    interfaces: "i".into(),
                    implementations: "s".into(),
                    ioc: "ioc".into(),
                },
            },
            entities: vec![Entity { name: "Order".into(), properties: vec![] }],
            contexts: vec![],
        }
    }

    #[test]
    fn clean_schema_has_no_warnings() {
        let mut schema = base_schema();
        schema.contexts.push(Context {
            context_name: "OrderFilter".into(),
            target_entity: "Order".into(),
            strategies: vec![Strategy {
                property_ref: "Id".into(),
                logic_type: "GenericEquality".into(),
            }],
        });
        assert!(lint(&schema).is_empty());
    }

    #[test]
    fn dangling_target_entity_is_flagged() {
        let mut schema = base_schema();
        schema.contexts.push(Context {
            context_name: "GhostFilter".into(),
            target_entity: "Ghost".into(),
            strategies: vec![],
        });
        let warnings = lint(&schema);
        assert!(warnings
            .iter()
            .any(|w| matches!(w, LintWarning::DanglingTargetEntity { target_entity, .. } if target_entity == "Ghost")));
    }

    #[test]
    fn unknown_logic_kind_is_flagged() {
        let mut schema = base_schema();
        schema.contexts.push(Context {
            context_name: "OrderFilter".into(),
            target_entity: "Order".into(),
            strategies: vec![Strategy {
                property_ref: "Id".into(),
                logic_type: "Fuzzy".into(),
            }],
        });
        let warnings = lint(&schema);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].to_string().contains("Fuzzy"));
    }

    #[test]
    fn empty_names_are_flagged() {
        let mut schema = base_schema();
        schema.entities.push(Entity { name: "".into(), properties: vec![] });
        schema.contexts.push(Context {
            context_name: " ".into(),
            target_entity: "Order".into(),
            strategies: vec![],
        });
        let warnings = lint(&schema);
        assert!(warnings.iter().any(|w| matches!(w, LintWarning::EmptyEntityName { index: 1 })));
        assert!(warnings.iter().any(|w| matches!(w, LintWarning::EmptyContextName { index: 0 })));
    }
}
