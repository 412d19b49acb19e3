use std::path::{Component, Path};

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::error::{Result, XenonError};

/// Always ignored: dot-directories such as `.git`, `.venv` and `.tox`.
const HIDDEN_DIRS: &str = ".*";

pub trait FileFilter {
    /// Whether a discovered file should be analyzed.
    fn should_include(&self, path: &Path) -> bool;

    /// Whether the walker may descend into a directory.
    fn should_descend(&self, dir: &Path) -> bool;
}

/// Exclude/ignore filtering with shell-style glob patterns.
///
/// `*` also matches path separators, so `tests/*` excludes everything
/// below `tests`. Exclude patterns are tried against the whole path and the
/// file name; ignore patterns against directory names. Hidden directories
/// are ignored whatever patterns are given.
pub struct PatternFilter {
    exclude: GlobSet,
    ignore: GlobSet,
}

impl PatternFilter {
    /// Create a new filter with the given exclude and ignore patterns.
    /// Blank patterns (as produced by `a,,b`) are skipped.
    ///
    /// # Errors
    /// Returns an error if any pattern is invalid.
    pub fn new(exclude: &[String], ignore: &[String]) -> Result<Self> {
        Ok(Self {
            exclude: build_set(exclude.iter().map(String::as_str))?,
            ignore: build_set(ignore.iter().map(String::as_str).chain([HIDDEN_DIRS]))?,
        })
    }

    fn is_excluded(&self, path: &Path) -> bool {
        self.exclude.is_match(path)
            || path
                .file_name()
                .is_some_and(|name| self.exclude.is_match(name))
    }

    fn is_ignored(&self, dir: &Path) -> bool {
        dir.file_name().is_some_and(|name| self.ignore.is_match(name))
    }

    /// Whether any directory on the way to `path` is ignored. Used for
    /// paths that were not found by walking, such as report entries.
    #[must_use]
    pub fn is_under_ignored_dir(&self, path: &Path) -> bool {
        let Some(parent) = path.parent() else {
            return false;
        };
        parent.components().any(|component| match component {
            Component::Normal(name) => self.ignore.is_match(name),
            _ => false,
        })
    }
}

impl FileFilter for PatternFilter {
    fn should_include(&self, path: &Path) -> bool {
        !self.is_excluded(path)
    }

    fn should_descend(&self, dir: &Path) -> bool {
        !self.is_ignored(dir)
    }
}

fn build_set<'a>(patterns: impl IntoIterator<Item = &'a str>) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns.into_iter().map(str::trim).filter(|p| !p.is_empty()) {
        let glob = Glob::new(pattern).map_err(|e| XenonError::InvalidPattern {
            pattern: pattern.to_string(),
            source: e,
        })?;
        builder.add(glob);
    }
    builder.build().map_err(|e| XenonError::InvalidPattern {
        pattern: "combined patterns".to_string(),
        source: e,
    })
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
