use std::collections::BTreeMap;
use std::path::Path;

use super::radon::RadonEntry;
use super::{Block, ExtractError, Extractor};
use crate::error::{Result, XenonError};

/// Serves blocks from a pre-computed `radon cc --json` report.
///
/// Modules are the report's keys, in sorted order.
#[derive(Debug, Clone, Default)]
pub struct ReportExtractor {
    entries: BTreeMap<String, RadonEntry>,
}

impl ReportExtractor {
    /// Load a report from disk.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not a radon report.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| XenonError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    /// # Errors
    /// Returns an error if `json` is not a radon report.
    pub fn parse(json: &str) -> Result<Self> {
        let entries = serde_json::from_str(json)?;
        Ok(Self { entries })
    }

    pub fn modules(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Extractor for ReportExtractor {
    fn extract(
        &self,
        module: &str,
        _source: &str,
        _no_assert: bool,
    ) -> std::result::Result<Vec<Block>, ExtractError> {
        self.entries
            .get(module)
            .cloned()
            .ok_or(ExtractError::MissingModule)?
            .into_blocks()
    }

    fn needs_source(&self) -> bool {
        false
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
