//! Implementation of the `strategen init` command.
//!
//! Writes a starter schema the user can edit and feed straight back into
//! `strategen generate`.

use tracing::{info, instrument};

use crate::{
    cli::InitArgs,
    error::CliResult,
    output::OutputManager,
};

/// A small but complete schema: one entity, one context, all three
/// recognized logic types.
const STARTER_SCHEMA: &str = r#"{
    "global_settings": {
        "root_namespace_domain": "MyApp.Domain",
        "root_namespace_api": "MyApp.Api",
        "paths": {
            "entities": "MyApp.Domain/Entities",
            "interfaces": "MyApp.Domain/Interfaces",
            "implementations": "MyApp.Domain/Services",
            "ioc": "MyApp.Api/IoC"
        }
    },
    "entities": [
        {
            "name": "Order",
            "properties": [
                {"name": "Id", "type": "Guid"},
                {"name": "CustomerName", "type": "string", "default": " = string.Empty;"},
                {"name": "CreatedAt", "type": "DateTime?"}
            ]
        }
    ],
    "contexts": [
        {
            "context_name": "OrderFilter",
            "target_entity": "Order",
            "strategies": [
                {"property_ref": "Id", "logic_type": "GenericEquality"},
                {"property_ref": "CustomerName", "logic_type": "StringRegex"},
                {"property_ref": "CreatedAt", "logic_type": "DateTime"}
            ]
        }
    ]
}
"#;

/// Execute the `strategen init` command.
#[instrument(skip_all, fields(path = %args.path.display()))]
pub fn execute(args: InitArgs, output: OutputManager) -> CliResult<()> {
    if args.path.exists() && !args.force {
        output.warning(&format!(
            "'{}' already exists; pass --force to overwrite",
            args.path.display(),
        ))?;
        return Ok(());
    }

    std::fs::write(&args.path, STARTER_SCHEMA)?;
    info!(path = %args.path.display(), "Starter schema written");

    output.success(&format!("Wrote starter schema to '{}'", args.path.display()))?;
    output.print("")?;
    output.print("Next steps:")?;
    output.print(&format!("  $EDITOR {}", args.path.display()))?;
    output.print(&format!(
        "  strategen generate {} --out ./generated",
        args.path.display(),
    ))?;

    Ok(())
}

// ── tests ─────────────────────────────────────────────────────────────────────
