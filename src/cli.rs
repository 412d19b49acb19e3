use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::output::{ColorMode, OutputFormat};

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorChoice> for ColorMode {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => Self::Auto,
            ColorChoice::Always => Self::Always,
            ColorChoice::Never => Self::Never,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "xenon")]
#[command(version, about = "Monitor code complexity: fail when blocks, modules or the project average rank too high")]
#[command(long_about = "Runs radon's cyclomatic complexity analysis over Python sources and \
    checks the results against rank thresholds (A best, F worst).\n\n\
    Exit codes:\n  \
    0 - No threshold violated\n  \
    N - N violations were found (capped at 255)\n  \
    2 - Configuration error (also used by argument parsing errors)")]
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Source files or directories to analyze
    #[arg(required_unless_present = "report")]
    pub paths: Vec<PathBuf>,

    /// Threshold for the average complexity of all blocks
    #[arg(short = 'a', long, value_name = "RANK")]
    pub max_average: Option<String>,

    /// Threshold for the average complexity of each module
    #[arg(short = 'm', long, value_name = "RANK")]
    pub max_modules: Option<String>,

    /// Absolute threshold for the complexity of each block
    #[arg(short = 'b', long, value_name = "RANK")]
    pub max_absolute: Option<String>,

    /// Comma-separated glob patterns of files to exclude
    #[arg(short = 'e', long, value_delimiter = ',', value_name = "PATTERNS")]
    pub exclude: Vec<String>,

    /// Comma-separated glob patterns of directories not to descend into
    #[arg(short = 'i', long, value_delimiter = ',', value_name = "PATTERNS")]
    pub ignore: Vec<String>,

    /// Do not count `assert` statements when computing complexity
    #[arg(long)]
    pub no_assert: bool,

    /// Path to configuration file (default: .xenon.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Skip loading configuration file
    #[arg(long)]
    pub no_config: bool,

    /// Radon executable used to measure complexity
    #[arg(long, value_name = "PATH")]
    pub radon: Option<String>,

    /// Read measurements from a `radon cc --json` report instead of running radon
    #[arg(long, value_name = "FILE")]
    pub report: Option<PathBuf>,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Increase output verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress and per-file diagnostics
    #[arg(short, long)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorChoice,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
