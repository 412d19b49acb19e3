mod json;
mod progress;
mod text;

pub use json::JsonFormatter;
pub use progress::ScanProgress;
pub use text::{ColorMode, TextFormatter};

use crate::checker::RunSummary;
use crate::error::Result;
use crate::report::ViolationLog;

/// Prefix of every violation and diagnostic line written to stdout.
pub const ERROR_PREFIX: &str = "xenon: error: ";

/// Trait for formatting a finished run into various output formats.
pub trait OutputFormatter {
    /// Format the violations and statistics of a run into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, log: &ViolationLog, summary: &RunSummary) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
