use std::collections::BTreeMap;
use std::io::Write;
use std::process::{Command, Stdio};

use serde::Deserialize;

use super::{Block, ExtractError, Extractor};

pub const DEFAULT_RADON: &str = "radon";

/// One file's entry in `radon cc --json` output: either its blocks, or the
/// error radon hit while visiting it.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum RadonEntry {
    Blocks(Vec<RadonBlock>),
    Failed { error: String },
}

/// Radon emits functions, classes and methods as a flat list; classes also
/// carry their methods nested, which are ignored here so that every method
/// is counted once.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RadonBlock {
    name: String,
    lineno: u64,
    complexity: f64,
}

impl RadonEntry {
    pub(crate) fn into_blocks(self) -> Result<Vec<Block>, ExtractError> {
        match self {
            Self::Blocks(blocks) => blocks
                .into_iter()
                .map(|b| Block::new(b.name, b.lineno, b.complexity))
                .collect(),
            Self::Failed { error } => Err(ExtractError::Parse(error)),
        }
    }
}

/// Parse the output of `radon cc --json` run on a single input.
///
/// # Errors
/// Returns an error if the JSON is malformed, does not hold exactly one
/// file entry, or radon reported a parse failure for that file.
pub fn parse_radon_output(json: &str) -> Result<Vec<Block>, ExtractError> {
    let entries: BTreeMap<String, RadonEntry> =
        serde_json::from_str(json).map_err(|e| ExtractError::InvalidOutput(e.to_string()))?;
    let mut entries = entries.into_values();
    match (entries.next(), entries.next()) {
        (Some(entry), None) => entry.into_blocks(),
        (None, _) => Ok(Vec::new()),
        (Some(_), Some(_)) => Err(ExtractError::InvalidOutput(
            "expected a single file entry".to_string(),
        )),
    }
}

/// Extracts blocks by piping each module's text through `radon cc`.
#[derive(Debug, Clone)]
pub struct RadonExtractor {
    program: String,
}

impl Default for RadonExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_RADON)
    }
}

impl RadonExtractor {
    #[must_use]
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }

    fn command(&self, no_assert: bool) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(["cc", "--json", "--order", "LINES"]);
        if no_assert {
            cmd.arg("--no-assert");
        }
        cmd.arg("-")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        cmd
    }

    fn spawn_error(&self, source: std::io::Error) -> ExtractError {
        ExtractError::Spawn {
            program: self.program.clone(),
            source,
        }
    }

    fn io_error(&self, source: std::io::Error) -> ExtractError {
        ExtractError::Io {
            program: self.program.clone(),
            source,
        }
    }
}

impl Extractor for RadonExtractor {
    fn extract(
        &self,
        module: &str,
        source: &str,
        no_assert: bool,
    ) -> Result<Vec<Block>, ExtractError> {
        log::debug!("running {} on {module}", self.program);
        let mut child = self
            .command(no_assert)
            .spawn()
            .map_err(|e| self.spawn_error(e))?;

        // Feed stdin from its own thread while stdout and stderr drain, so
        // neither side blocks on a full pipe. The pipe closes when the
        // writer returns.
        let stdin = child.stdin.take();
        let (written, output) = std::thread::scope(|scope| {
            let writer = scope.spawn(move || match stdin {
                Some(mut stdin) => stdin.write_all(source.as_bytes()),
                None => Ok(()),
            });
            let output = child.wait_with_output();
            let written = writer
                .join()
                .unwrap_or_else(|_| Err(std::io::Error::other("stdin writer panicked")));
            (written, output)
        });
        let output = output.map_err(|e| self.io_error(e))?;

        if !output.status.success() {
            return Err(ExtractError::ToolFailed {
                program: self.program.clone(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        // A tool that exits before reading all of its input reports through
        // its status above; a short write after a clean exit is still an error.
        written.map_err(|e| self.io_error(e))?;

        parse_radon_output(&String::from_utf8_lossy(&output.stdout))
    }
}

#[cfg(test)]
#[path = "radon_tests.rs"]
mod tests;
