//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "omeka-csv",
    version,
    about = "Build an Omeka S CSV Import file from catalog item metadata",
    long_about = "Normalize catalog item records (JSON) into an Omeka S CSV Import file.\n\n\
                  Cleans markup, extracts dates, splits physical descriptions and \
                  maps each record onto Dublin Core and MODS columns."
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
}

#[derive(Subcommand)]
pub enum Command {
    /// Map every record in a metadata directory and write the import CSV.
    Build(BuildArgs),

    /// Map a single record document and print its columns.
    Inspect(InspectArgs),
}

#[derive(Parser)]
pub struct BuildArgs {
    /// Directory of record documents (default: $OMEKA_METADATA_DIR or item-metadata).
    #[arg(value_name = "METADATA_DIR")]
    pub metadata_dir: Option<PathBuf>,

    /// CSV file to write (default: omeka-ingest-data.csv).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// TOML settings file.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Value for the item_type column.
    #[arg(long = "item-type", value_name = "TYPE")]
    pub item_type: Option<String>,

    /// Value for the date_uploaded column (default: today).
    #[arg(long = "date-uploaded", value_name = "YYYY-MM-DD")]
    pub date_uploaded: Option<String>,

    /// Map and report without writing the CSV.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct InspectArgs {
    /// Record document to map.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// TOML settings file (column prefixes, separator).
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,
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
