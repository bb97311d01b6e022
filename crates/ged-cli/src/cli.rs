//! CLI argument definitions for the GEDCOM field normalizer.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "gedcom-normalizer",
    version,
    about = "GEDCOM Field Normalizer - Rewrite free-text genealogy fields into GEDCOM form",
    long_about = "Rewrite loosely formatted genealogical field values into the \
                  canonical GEDCOM text grammar.\n\n\
                  Dates gain qualifier keywords, month tokens, calendar escapes \
                  and zero-padded days; coordinates gain hemisphere prefixes and \
                  decimal degrees. Unrecognized input passes through unchanged."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
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
}

#[derive(Subcommand)]
pub enum Command {
    /// Normalize one or more values given on the command line.
    Normalize(NormalizeArgs),

    /// Normalize a file of values, one per line.
    Batch(BatchArgs),

    /// List the supported calendar systems and their month tokens.
    Calendars,
}

#[derive(Parser)]
pub struct NormalizeArgs {
    /// Raw field values to normalize.
    #[arg(value_name = "VALUE", required = true)]
    pub values: Vec<String>,

    #[command(flatten)]
    pub field: FieldArgs,

    /// Emit results as JSON records instead of plain text.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct BatchArgs {
    /// Input file with one raw value per line ("-" for stdin).
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    #[command(flatten)]
    pub field: FieldArgs,

    /// Output format for the batch report.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: BatchFormatArg,
}

#[derive(Parser)]
pub struct FieldArgs {
    /// Field kind to normalize.
    #[arg(long = "kind", value_enum, default_value = "date")]
    pub kind: FieldKindArg,

    /// Day/month/year order preference for ambiguous numeric dates.
    #[arg(long = "date-order", value_enum, default_value = "dmy")]
    pub date_order: DateOrderArg,

    /// Anchor year for two-digit year resolution (default: the current year).
    #[arg(long = "current-year", value_name = "YYYY")]
    pub current_year: Option<i32>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum FieldKindArg {
    Date,
    Latitude,
    Longitude,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum DateOrderArg {
    Dmy,
    Mdy,
    Ymd,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum BatchFormatArg {
    Table,
    Json,
    Plain,
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
