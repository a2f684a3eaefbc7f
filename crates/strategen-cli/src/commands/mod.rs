//! Command handlers.
//!
//! Each submodule owns exactly one subcommand and exposes a single
//! `execute` function. Handlers translate CLI arguments into core calls
//! and render results; no generation logic lives here.

pub mod completions;
pub mod config;
pub mod generate;
pub mod init;
pub mod validate;
