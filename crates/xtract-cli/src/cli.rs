//! CLI argument definitions for xtract.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "xtract",
    version,
    about = "Extract legend-described fields from XML files into a CSV report",
    long_about = "Extract fields from a folder of structurally similar XML files.\n\n\
                  Each line of the legend file names an output column and the\n\
                  element path holding its value, e.g. `Age :Person<1> Birth<2>`."
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
    /// Extract legend columns from every XML file in a folder.
    Extract(ExtractArgs),

    /// Parse a legend file and list its columns.
    Legend(LegendArgs),
}

#[derive(Parser)]
pub struct ExtractArgs {
    /// Folder containing the XML files to process.
    #[arg(value_name = "FOLDER")]
    pub folder: PathBuf,

    /// Legend file describing the output columns.
    #[arg(long = "legend", short = 'l', value_name = "FILE")]
    pub legend: PathBuf,

    /// Output file name (default: output.csv; `.csv` is appended if missing).
    #[arg(long = "output", short = 'o', value_name = "NAME")]
    pub output: Option<String>,

    /// Directory for the output file (default: <FOLDER>).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Namespace URI applied to `:`-prefixed legend tokens.
    ///
    /// Falls back to the XTRACT_NAMESPACE environment variable, then to the
    /// built-in person-report namespace.
    #[arg(long = "namespace", value_name = "URI")]
    pub namespace: Option<String>,

    /// Quoting of cell values in the CSV output.
    #[arg(long = "quote", value_enum, default_value = "necessary")]
    pub quote: QuoteArg,
}

#[derive(Parser)]
pub struct LegendArgs {
    /// Legend file to validate.
    #[arg(value_name = "FILE")]
    pub legend: PathBuf,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum QuoteArg {
    /// Quote values containing commas, quotes or line breaks.
    Necessary,
    /// Join values with commas verbatim.
    Never,
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
