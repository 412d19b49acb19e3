mod radon;
mod report;

pub use radon::{RadonExtractor, parse_radon_output};
pub use report::ReportExtractor;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("failed to run `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error talking to `{program}`: {source}")]
    Io {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{program}` exited with {status}: {stderr}")]
    ToolFailed {
        program: String,
        status: String,
        stderr: String,
    },

    #[error("source could not be parsed: {0}")]
    Parse(String),

    #[error("unexpected extractor output: {0}")]
    InvalidOutput(String),

    #[error("block `{name}` has an invalid complexity score {score}")]
    InvalidScore { name: String, score: f64 },

    #[error("block `{name}` has an invalid line number {line}")]
    InvalidLine { name: String, line: u64 },

    #[error("no entry for this module in the report")]
    MissingModule,
}

/// One analyzable function, method or class with its raw complexity score.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    name: String,
    line: u32,
    complexity: f64,
}

impl Block {
    /// Create a block, rejecting scores and line numbers no extractor can
    /// legitimately produce.
    ///
    /// # Errors
    /// Returns [`ExtractError::InvalidScore`] for negative or non-finite
    /// scores and [`ExtractError::InvalidLine`] for line `0`.
    pub fn new(name: impl Into<String>, line: u64, complexity: f64) -> Result<Self, ExtractError> {
        let name = name.into();
        if !complexity.is_finite() || complexity < 0.0 {
            return Err(ExtractError::InvalidScore {
                name,
                score: complexity,
            });
        }
        let line = match u32::try_from(line) {
            Ok(line) if line > 0 => line,
            _ => return Err(ExtractError::InvalidLine { name, line }),
        };
        Ok(Self {
            name,
            line,
            complexity,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn line(&self) -> u32 {
        self.line
    }

    #[must_use]
    pub const fn complexity(&self) -> f64 {
        self.complexity
    }
}

/// Turns one module's source text into its blocks, in source order.
///
/// Implementations must fail loudly on unparsable input; an empty vector
/// means the module has no analyzable blocks.
pub trait Extractor: Sync {
    /// # Errors
    /// Returns an error if the source cannot be analyzed.
    fn extract(
        &self,
        module: &str,
        source: &str,
        no_assert: bool,
    ) -> Result<Vec<Block>, ExtractError>;

    /// Whether `extract` needs the module's text; report-backed extractors
    /// do not, so the caller can skip reading the file.
    fn needs_source(&self) -> bool {
        true
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
