//! CLI argument definitions for `brewdata`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "brewdata",
    version,
    about = "Validate and release brewing ingredient data",
    long_about = "Validate ingredient CSV sources against their category rules and \
                  merge fermentable, hop and yeast trees into sorted JSON artifacts."
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
    /// Check CSV sources against the rules of their category.
    Validate(ValidateArgs),

    /// Merge one source tree into one JSON artifact.
    Build(BuildArgs),

    /// Validate a data root, then build one artifact per category directory.
    Release(ReleaseArgs),

    /// List the known categories.
    Categories,
}

#[derive(Args)]
pub struct ValidateArgs {
    /// CSV files or directories searched recursively for CSV files.
    ///
    /// Each file is checked against the category named by its parent
    /// directory (`fermentables`, `hops`, `yeasts`).
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<PathBuf>,
}

#[derive(Args)]
pub struct BuildArgs {
    /// Source tree to merge.
    #[arg(value_name = "ROOT")]
    pub root: PathBuf,

    /// Artifact path to write.
    #[arg(long = "output", short = 'o', value_name = "FILE")]
    pub output: PathBuf,

    #[command(flatten)]
    pub merge: MergeArgs,
}

#[derive(Args)]
pub struct ReleaseArgs {
    /// Data root holding one directory per category.
    #[arg(value_name = "DATA_ROOT")]
    pub data_root: PathBuf,

    /// Directory receiving `<category directory>.json` artifacts.
    #[arg(long = "output-dir", value_name = "DIR", default_value = "dist")]
    pub output_dir: PathBuf,

    #[command(flatten)]
    pub merge: MergeArgs,
}

#[derive(Args)]
pub struct MergeArgs {
    /// Pretty-print artifacts instead of writing one line.
    #[arg(long = "pretty")]
    pub pretty: bool,

    /// Extra file extension to skip while merging (repeatable; `md` is always skipped).
    #[arg(long = "ignore-ext", value_name = "EXT")]
    pub ignore_ext: Vec<String>,
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
