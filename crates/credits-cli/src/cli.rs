//! CLI argument definitions for the credits sequence editor.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "credits",
    version,
    about = "Credits sequence editor - inspect and edit credits cutscene files",
    long_about = "Inspect and edit a game's credits cutscene binary file.\n\n\
                  Decodes the command sequence for display, exports it to an\n\
                  editable JSON representation, and encodes JSON back to binary."
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
    /// Decode a credits file and list its commands.
    Show(ShowArgs),

    /// Decode a credits file to editable JSON.
    Export(ExportArgs),

    /// Encode a JSON command list back to a credits file.
    Import(ImportArgs),

    /// Create a new, empty credits file.
    New(NewArgs),

    /// List all supported command types.
    Commands,
}

#[derive(Parser)]
pub struct ShowArgs {
    /// Path to the credits sequence binary file.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

#[derive(Parser)]
pub struct ExportArgs {
    /// Path to the credits sequence binary file.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Write JSON here instead of stdout.
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Parser)]
pub struct ImportArgs {
    /// Path to the JSON command list.
    #[arg(value_name = "JSON")]
    pub input: PathBuf,

    /// Path of the binary file to write.
    #[arg(long = "output", short = 'o', value_name = "FILE")]
    pub output: PathBuf,
}

#[derive(Parser)]
pub struct NewArgs {
    /// Path of the binary file to create.
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
