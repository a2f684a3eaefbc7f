//! Implementation of the `strategen validate` command.
//!
//! Parses the schema and builds the file plan without touching the
//! filesystem, then reports advisory lint warnings. Warnings never fail
//! the command; only a schema that cannot be parsed does.

use tracing::{debug, instrument};

use strategen_adapters::{SchemaSource, load_schema_text};
use strategen_core::{
    application::plan_from_json,
    domain::{ProjectSchema, lint},
};

use crate::{
    cli::ValidateArgs,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `strategen validate` command.
#[instrument(skip_all, fields(schema = %args.schema))]
pub fn execute(args: ValidateArgs, output: OutputManager) -> CliResult<()> {
    let source = SchemaSource::from_arg(&args.schema);
    if let SchemaSource::File(path) = &source {
        if !path.exists() {
            return Err(CliError::SchemaNotFound { path: path.clone() });
        }
    }

    let schema_text = load_schema_text(&source)?;
    let schema = ProjectSchema::from_json(&schema_text)
        .map_err(strategen_core::error::StrategenError::Domain)?;
    debug!(
        entities = schema.entities.len(),
        contexts = schema.contexts.len(),
        "Schema parsed"
    );

    // Reuse the planner so validate reports exactly what generate would do.
    let plan = plan_from_json(&schema_text)?;

    output.success(&format!("'{}' is a valid schema", source))?;
    output.detail(&format!("Entities:  {}", schema.entities.len()))?;
    output.detail(&format!("Contexts:  {}", schema.contexts.len()))?;
    output.detail(&format!("Planned files: {}", plan.plan.file_count()))?;

    let warnings = lint(&schema);
    for warning in &warnings {
        output.warning(&warning.to_string())?;
    }
    if !warnings.is_empty() {
        output.info(&format!(
            "{} warning(s); generation would still proceed",
            warnings.len(),
        ))?;
    }

    Ok(())
}
