//! Schema-to-plan transformation.
//!
//! Pure and deterministic: walking the same schema twice yields byte-identical
//! plans. No I/O happens here; materialization is the application layer's job.

use tracing::warn;

use crate::domain::{
    plan::{FilePlan, relative_dir},
    schema::ProjectSchema,
    templates,
};

/// A strategy that was dropped because its `logic_type` is not recognized.
///
/// The strategy produces no file and is omitted from the injector; everything
/// else in its context is generated normally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedStrategy {
    pub context_name: String,
    pub property_ref: String,
    pub logic_type: String,
}

/// Result of planning: the ordered file plan plus bookkeeping for reporting.
#[derive(Debug, Clone, Default)]
pub struct PlanOutput {
    pub plan: FilePlan,
    pub entity_files: usize,
    pub interface_files: usize,
    pub implementation_files: usize,
    pub injector_written: bool,
    pub skipped: Vec<SkippedStrategy>,
}

/// Build the complete file plan for a schema.
///
/// Walk order (also the write order): entities, then per context the
/// interface followed by its implementations in strategy order, and finally
/// the aggregated injector — emitted only if at least one context produced at
/// least one class.
pub fn plan_files(schema: &ProjectSchema) -> PlanOutput {
    let settings = &schema.global_settings;
    let mut out = PlanOutput::default();

    let entities_dir = relative_dir(&settings.paths.entities);
    for entity in &schema.entities {
        out.plan.add_file(
            entities_dir.clone(),
            format!("{}.{}", entity.name, templates::FILE_EXTENSION),
            templates::entity_file(settings, entity),
        );
        out.entity_files += 1;
    }

    let interfaces_dir = relative_dir(&settings.paths.interfaces);
    let implementations_dir = relative_dir(&settings.paths.implementations);
    let mut registrations: Vec<(String, Vec<String>)> = Vec::new();

    for context in &schema.contexts {
        out.plan.add_file(
            interfaces_dir.clone(),
            format!(
                "{}.{}",
                templates::interface_name(&context.context_name),
                templates::FILE_EXTENSION
            ),
            templates::interface_file(settings, &context.context_name, &context.target_entity),
        );
        out.interface_files += 1;

        let context_dir = implementations_dir.join(format!("{}Strategies", context.context_name));
        let mut classes = Vec::new();

        for strategy in &context.strategies {
            let Some(kind) = strategy.logic_kind() else {
                warn!(
                    context = %context.context_name,
                    property = %strategy.property_ref,
                    logic_type = %strategy.logic_type,
                    "Skipping strategy with unrecognized logic kind"
                );
                out.skipped.push(SkippedStrategy {
                    context_name: context.context_name.clone(),
                    property_ref: strategy.property_ref.clone(),
                    logic_type: strategy.logic_type.clone(),
                });
                continue;
            };

            let class = templates::class_name(&strategy.property_ref, &context.context_name);
            out.plan.add_file(
                context_dir.clone(),
                format!("{class}.{}", templates::FILE_EXTENSION),
                templates::implementation_file(
                    settings,
                    &context.context_name,
                    &context.target_entity,
                    &strategy.property_ref,
                    kind,
                ),
            );
            out.implementation_files += 1;
            classes.push(class);
        }

        if !classes.is_empty() {
            registrations.push((context.context_name.clone(), classes));
        }
    }

    if !registrations.is_empty() {
        out.plan.add_file(
            relative_dir(&settings.paths.ioc),
            format!("{}.{}", templates::INJECTOR_NAME, templates::FILE_EXTENSION),
            templates::injector_file(settings, &registrations),
        );
        out.injector_written = true;
    }

    out
}

// ── tests ─────────────────────────────────────────────────────────────────────
