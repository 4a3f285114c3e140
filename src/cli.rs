// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

use crate::types::InputFormat;

/// Command-line arguments for `taskorder`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "taskorder",
    version,
    about = "Recommend an execution order for tasks with dependencies, due dates and effort.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the task file (TOML or JSON). Use `-` for stdin.
    ///
    /// Default: `Tasks.toml` in the current working directory.
    #[arg(long, short, value_name = "PATH", default_value = "Tasks.toml")]
    pub input: String,

    /// Format of the task file. `auto` picks by extension; stdin is JSON.
    #[arg(long, value_enum, value_name = "FORMAT", default_value_t = InputFormat::Auto)]
    pub input_format: InputFormat,

    /// How to print the result.
    #[arg(long, short, value_enum, value_name = "FORMAT", default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    /// Report every unknown dependency and duplicate name instead of
    /// stopping at the first one. Overrides `[config].error_reporting`.
    #[arg(long)]
    pub report_all: bool,

    /// Group the text output by frontier.
    #[arg(long)]
    pub batches: bool,

    /// Parse + validate the task file and print it, but don't order anything.
    #[arg(long)]
    pub dry_run: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `TASKORDER_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Result rendering.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Numbered list on stdout, errors on stderr.
    Text,
    /// `{"order": [...]}` or `{"errors": [...]}` on stdout.
    Json,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
