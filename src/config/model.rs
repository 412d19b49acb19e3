use serde::{Deserialize, Serialize};

/// Settings read from `.xenon.toml`.
///
/// Every field is optional; command-line values take precedence, except for
/// `exclude` and `ignore`, which are concatenated with the command-line lists.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Maximum rank of any single block.
    pub max_absolute: Option<String>,

    /// Maximum rank of any module's average complexity.
    pub max_modules: Option<String>,

    /// Maximum rank of the project-wide average complexity.
    pub max_average: Option<String>,

    /// Glob patterns of files to skip.
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Glob patterns of directories not to descend into.
    #[serde(default)]
    pub ignore: Vec<String>,

    /// Do not count `assert` statements.
    #[serde(default)]
    pub no_assert: bool,

    /// Radon executable used for extraction.
    pub radon: Option<String>,
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
