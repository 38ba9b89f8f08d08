//! CLI argument definitions for the `checklist` tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "checklist",
    version,
    about = "Checklist Studio - create, edit and export checklist documents",
    long_about = "Create, inspect, edit and export checklist snapshot files.\n\n\
                  Edits are applied through an undoable store session described\n\
                  by a JSON script; exports are written as CSV or JSON."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Store configuration file (default: the platform config directory).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Write a new, empty checklist.
    New(NewArgs),

    /// Print a checklist as a table.
    Show(ShowArgs),

    /// Check column labels and row/column consistency.
    Validate(ValidateArgs),

    /// Apply an edit script and save the result.
    Edit(EditArgs),

    /// Export a checklist as CSV or JSON.
    Export(ExportArgs),
}

#[derive(Parser)]
pub struct NewArgs {
    /// Snapshot file to create.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Checklist title (default from config).
    #[arg(long = "title")]
    pub title: Option<String>,

    /// Number of columns, 1 to 10 (default from config).
    #[arg(long = "columns", value_parser = clap::value_parser!(u8).range(1..=10))]
    pub columns: Option<u8>,

    /// Overwrite an existing file.
    #[arg(long = "force")]
    pub force: bool,
}

#[derive(Parser)]
pub struct ShowArgs {
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

#[derive(Parser)]
pub struct ValidateArgs {
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

#[derive(Parser)]
pub struct EditArgs {
    /// Snapshot file to edit.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// JSON script of edit commands.
    #[arg(value_name = "SCRIPT")]
    pub script: PathBuf,

    /// Save to this path instead of overwriting FILE.
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Apply the script and report without saving.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Exit with status 1 when any command was rejected or skipped.
    #[arg(long = "fail-on-rejected")]
    pub fail_on_rejected: bool,
}

#[derive(Parser)]
pub struct ExportArgs {
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Export format.
    #[arg(long = "format", value_enum, default_value = "csv")]
    pub format: ExportFormatArg,

    /// Output directory (default: the directory of FILE).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ExportFormatArg {
    Csv,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
