//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "listmatch",
    version,
    about = "Match noisy product listings to a canonical product catalog",
    long_about = "Match noisy product listings to a canonical product catalog.\n\n\
                  A listing is kept only when its title and manufacturer both match a\n\
                  product perfectly. Results are written as JSON lines, one product per line."
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

    /// Prefix pretty and compact log lines with a timestamp.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Match listings against products and write the retained groups.
    Match(MatchArgs),
}

#[derive(Parser)]
pub struct MatchArgs {
    /// Product catalog, one JSON object per line.
    #[arg(value_name = "PRODUCTS")]
    pub products: PathBuf,

    /// Listings to resolve, one JSON object per line.
    #[arg(value_name = "LISTINGS")]
    pub listings: PathBuf,

    /// Write results to a file instead of stdout.
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Classify listings on a worker pool.
    #[arg(long = "parallel")]
    pub parallel: bool,

    /// Worker count for parallel runs (implies --parallel).
    #[arg(long = "jobs", short = 'j', value_name = "N")]
    pub jobs: Option<usize>,

    /// Listings per work unit in parallel runs.
    #[arg(long = "chunk-size", value_name = "N", default_value_t = 256)]
    pub chunk_size: usize,

    /// Progress report cadence, in thousandths of the listings.
    #[arg(long = "progress-permille", value_name = "N", default_value_t = 1)]
    pub progress_permille: usize,

    /// Print a per-stage summary table to stderr.
    #[arg(long = "summary")]
    pub summary: bool,
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
