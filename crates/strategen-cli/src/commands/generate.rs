//! Implementation of the `strategen generate` command.
//!
//! Responsibility: resolve the schema source, call the core generate
//! service, and display results. No generation logic lives here.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use strategen_adapters::{LocalFilesystem, SchemaSource, load_schema_text};
use strategen_core::{
    application::{GenerateReport, GenerateService, plan_from_json},
    domain::{PlanOutput, SkippedStrategy},
};

use crate::{
    cli::{GenerateArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `strategen generate` command.
///
/// Dispatch sequence:
/// 1. Resolve the schema source (file or stdin) and the output root
/// 2. Load the schema text
/// 3. Early-exit with a plan listing if `--dry-run`
/// 4. Confirm with user unless `--yes`, `--quiet`, or reading from stdin
/// 5. Execute generation via `GenerateService`
/// 6. Print the run summary and any skipped strategies
#[instrument(skip_all, fields(schema = %args.schema))]
pub fn execute(
    args: GenerateArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Resolve the schema source and output root.
    let source = SchemaSource::from_arg(&args.schema);
    if let SchemaSource::File(path) = &source {
        if !path.exists() {
            return Err(CliError::SchemaNotFound { path: path.clone() });
        }
    }
    let out = resolve_output_root(&args, &config)?;

    // 2. Load the raw text. Parsing happens in the core.
    let schema_text = load_schema_text(&source)?;
    debug!(source = %source, bytes = schema_text.len(), "Schema loaded");

    // 3. Dry run: plan but do not write.
    if args.dry_run {
        let plan = plan_from_json(&schema_text)?;
        return show_plan(&plan, &out, &output);
    }

    // 4. Confirm. Stdin is already consumed by the schema, so a prompt
    //    would hang waiting on EOF — skip it for piped input.
    let confirm_configured = config.generate.confirm.unwrap_or(true);
    let interactive = matches!(source, SchemaSource::File(_));
    if confirm_configured && interactive && !args.yes && !global.quiet {
        output.print(&format!(
            "About to generate files from '{}' under '{}'.",
            source,
            out.display(),
        ))?;
        if !confirm()? {
            return Err(CliError::Cancelled);
        }
    }

    // 5. Generate through the local filesystem adapter.
    output.header(&format!("Generating into '{}'...", out.display()))?;
    info!(out = %out.display(), "Generation started");

    let service = GenerateService::new(Box::new(LocalFilesystem::new()));
    let report = service.generate(&schema_text, &out)?;

    info!(files = report.files_written, "Generation finished");

    // 6. Summary.
    show_report(&report, &out, &output)?;
    Ok(())
}

/// `--out` wins; `generate.default_out` from config is the fallback.
fn resolve_output_root(args: &GenerateArgs, config: &AppConfig) -> CliResult<PathBuf> {
    args.out
        .clone()
        .or_else(|| config.generate.default_out.clone())
        .ok_or_else(|| CliError::InvalidInput {
            message: "no output directory; pass --out or set generate.default_out in config"
                .into(),
            source: None,
        })
}

// ── UI helpers ────────────────────────────────────────────────────────────────

fn show_plan(plan: &PlanOutput, out_dir: &Path, output: &OutputManager) -> CliResult<()> {
    output.info(&format!(
        "Dry run: {} file(s) would be written under '{}'",
        plan.plan.file_count(),
        out_dir.display(),
    ))?;
    for file in plan.plan.files() {
        output.detail(&file.relative_path().display().to_string())?;
    }
    show_skipped(&plan.skipped, output)?;
    Ok(())
}

fn show_report(report: &GenerateReport, out_dir: &Path, output: &OutputManager) -> CliResult<()> {
    output.success(&format!(
        "Wrote {} file(s) under '{}'",
        report.files_written,
        out_dir.display(),
    ))?;
    output.detail(&format!("Entities:        {}", report.entity_files))?;
    output.detail(&format!("Interfaces:      {}", report.interface_files))?;
    output.detail(&format!("Implementations: {}", report.implementation_files))?;
    output.detail(&format!(
        "Injector:        {}",
        if report.injector_written { "yes" } else { "no" },
    ))?;
    show_skipped(&report.skipped, output)?;
    Ok(())
}

fn show_skipped(skipped: &[SkippedStrategy], output: &OutputManager) -> CliResult<()> {
    for s in skipped {
        output.warning(&format!(
            "Skipped strategy '{}' in context '{}': unrecognized logic type '{}'",
            s.property_ref, s.context_name, s.logic_type,
        ))?;
    }
    Ok(())
}

fn confirm() -> CliResult<bool> {
    use std::io::{self, Write};

    print!("Continue? [Y/n] ");
    io::stdout().flush().map_err(|e| CliError::IoError {
        message: "failed to flush stdout".into(),
        source: e,
    })?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| CliError::IoError {
            message: "failed to read confirmation input".into(),
            source: e,
        })?;

    let input = input.trim().to_ascii_lowercase();
    Ok(input.is_empty() || input == "y" || input == "yes")
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn args_with_out(out: Option<PathBuf>) -> GenerateArgs {
        GenerateArgs {
            schema: "schema.json".into(),
            out,
            yes: true,
            dry_run: false,
        }
    }

    fn config_with_default(default_out: Option<PathBuf>) -> AppConfig {
        let mut config = AppConfig::default();
        config.generate.default_out = default_out;
        config
    }

    #[test]
    fn out_flag_wins_over_config_default() {
        let resolved = resolve_output_root(
            &args_with_out(Some(PathBuf::from("./flag"))),
            &config_with_default(Some(PathBuf::from("./config"))),
        )
        .unwrap();
        assert_eq!(resolved, PathBuf::from("./flag"));
    }

    #[test]
    fn config_default_fills_missing_flag() {
        let resolved = resolve_output_root(
            &args_with_out(None),
            &config_with_default(Some(PathBuf::from("./config"))),
        )
        .unwrap();
        assert_eq!(resolved, PathBuf::from("./config"));
    }

    #[test]
    fn missing_both_is_invalid_input() {
        let err = resolve_output_root(&args_with_out(None), &config_with_default(None)).unwrap_err();
        assert!(matches!(err, CliError::InvalidInput { .. }));
    }
}
