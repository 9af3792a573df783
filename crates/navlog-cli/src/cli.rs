//! CLI argument definitions for `navlog`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "navlog",
    version,
    about = "Normalize navigation log tables to a canonical schema",
    long_about = "Rewrite CSV and TSV navigation logs into one canonical column layout.\n\n\
                  Source headers are matched against a built-in alias table, timestamps are\n\
                  rewritten as ISO-8601 UTC and depths are written as negative values."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for warnings only).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

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
}

#[derive(Subcommand)]
pub enum Command {
    /// Normalize every .csv and .tsv file in a directory.
    Run(RunArgs),

    /// Show how the columns of one file resolve, without writing anything.
    Resolve(ResolveArgs),

    /// List the built-in canonical columns and their aliases.
    Aliases,
}

#[derive(Parser)]
pub struct RunArgs {
    /// Directory containing the input tables.
    #[arg(value_name = "INPUT_DIR", default_value = "input")]
    pub input_dir: PathBuf,

    /// Output directory for normalized tables and the run report.
    #[arg(long = "output-dir", value_name = "DIR", default_value = "output")]
    pub output_dir: PathBuf,

    /// Suffix appended to each input file stem.
    #[arg(long = "suffix", default_value = "_processed")]
    pub suffix: String,

    /// Normalize and report without writing any file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Skip writing navlog_report.json.
    #[arg(long = "no-report")]
    pub no_report: bool,
}

#[derive(Parser)]
pub struct ResolveArgs {
    /// A .csv or .tsv file.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
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
