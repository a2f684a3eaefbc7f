//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No generation logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "strategen",
    bin_name = "strategen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} C# strategy-pattern skeletons from a JSON schema",
    long_about = "Strategen reads a declarative JSON schema of entities and \
                  filter strategies and emits C# source skeletons: entity \
                  classes, strategy interfaces, implementations, and an IoC \
                  registration file.",
    after_help = "EXAMPLES:\n\
        \x20 strategen generate schema.json --out ./src\n\
        \x20 cat schema.json | strategen generate - --out ./src --yes\n\
        \x20 strategen validate schema.json\n\
        \x20 strategen init my-schema.json\n\
        \x20 strategen completions bash > /usr/share/bash-completion/completions/strategen",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate source files from a schema.
    #[command(
        visible_alias = "gen",
        about = "Generate C# skeletons from a schema",
        after_help = "EXAMPLES:\n\
            \x20 strategen generate schema.json --out ./src\n\
            \x20 strategen generate schema.json --out ./src --dry-run\n\
            \x20 cat schema.json | strategen generate - --out ./src --yes"
    )]
    Generate(GenerateArgs),

    /// Check a schema without writing anything.
    #[command(
        about = "Validate a schema and report advisory warnings",
        after_help = "EXAMPLES:\n\
            \x20 strategen validate schema.json\n\
            \x20 cat schema.json | strategen validate -"
    )]
    Validate(ValidateArgs),

    /// Write a starter schema file.
    #[command(
        about = "Create a starter schema",
        after_help = "EXAMPLES:\n\
            \x20 strategen init                 # writes strategen.json\n\
            \x20 strategen init my-schema.json\n\
            \x20 strategen init --force         # overwrite existing"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 strategen completions bash > ~/.local/share/bash-completion/completions/strategen\n\
            \x20 strategen completions zsh  > ~/.zfunc/_strategen\n\
            \x20 strategen completions fish > ~/.config/fish/completions/strategen.fish"
    )]
    Completions(CompletionsArgs),

    /// Manage the Strategen configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 strategen config get output.format\n\
            \x20 strategen config list"
    )]
    Config(ConfigCommands),
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `strategen generate`.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Schema document.  `-` reads JSON from stdin.
    #[arg(value_name = "SCHEMA", help = "Schema file path, or '-' for stdin")]
    pub schema: String,

    /// Root directory the generated tree is written under.
    ///
    /// Falls back to `generate.default_out` from the configuration file when
    /// omitted.
    #[arg(
        short = 'o',
        long = "out",
        value_name = "DIR",
        help = "Output root directory"
    )]
    pub out: Option<PathBuf>,

    /// Skip the confirmation prompt.
    #[arg(
        short = 'y',
        long = "yes",
        help = "Skip confirmation and write immediately"
    )]
    pub yes: bool,

    /// Preview what would be written without writing any files.
    #[arg(long = "dry-run", help = "Show planned files without writing them")]
    pub dry_run: bool,
}

// ── validate ──────────────────────────────────────────────────────────────────

/// Arguments for `strategen validate`.
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Schema document.  `-` reads JSON from stdin.
    #[arg(value_name = "SCHEMA", help = "Schema file path, or '-' for stdin")]
    pub schema: String,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `strategen init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Where to write the starter schema.
    #[arg(
        value_name = "PATH",
        default_value = "strategen.json",
        help = "Starter schema path"
    )]
    pub path: PathBuf,

    /// Overwrite an existing file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing schema file")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `strategen completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `strategen config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `output.format`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_generate_command() {
        let cli = Cli::parse_from([
            "strategen",
            "generate",
            "schema.json",
            "--out",
            "./src",
        ]);
        match cli.command {
            Commands::Generate(args) => {
                assert_eq!(args.schema, "schema.json");
                assert_eq!(args.out, Some(PathBuf::from("./src")));
                assert!(!args.dry_run);
            }
            other => panic!("expected Generate, got {other:?}"),
        }
    }

    #[test]
    fn gen_alias_works() {
        let cli = Cli::parse_from(["strategen", "gen", "-", "--out", "."]);
        assert!(matches!(cli.command, Commands::Generate(_)));
    }

    #[test]
    fn out_is_optional_at_parse_time() {
        // Resolution against `generate.default_out` happens in the handler.
        let cli = Cli::parse_from(["strategen", "generate", "schema.json"]);
        if let Commands::Generate(args) = cli.command {
            assert!(args.out.is_none());
        } else {
            panic!("expected Generate command");
        }
    }

    #[test]
    fn parse_validate_command() {
        let cli = Cli::parse_from(["strategen", "validate", "schema.json"]);
        assert!(matches!(cli.command, Commands::Validate(_)));
    }

    #[test]
    fn init_defaults_to_strategen_json() {
        let cli = Cli::parse_from(["strategen", "init"]);
        if let Commands::Init(args) = cli.command {
            assert_eq!(args.path, PathBuf::from("strategen.json"));
            assert!(!args.force);
        } else {
            panic!("expected Init command");
        }
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        // clap should reject --quiet --verbose together
        let result = Cli::try_parse_from(["strategen", "--quiet", "--verbose", "init"]);
        assert!(result.is_err());
    }
}
