mod filter;

pub use filter::{FileFilter, PatternFilter};

use std::path::{Component, Path, PathBuf};

use indexmap::IndexSet;
use walkdir::WalkDir;

use crate::error::{Result, XenonError};

const PYTHON_EXTENSION: &str = "py";

/// Trait for scanning a root path and finding files to analyze.
pub trait FileScanner {
    /// Scan a file or directory and return all matching file paths, along
    /// with the entries below it that could not be read.
    ///
    /// # Errors
    /// Returns an error if the root itself cannot be read.
    fn scan(&self, root: &Path) -> Result<ScanReport>;
}

/// Walks directories for Python sources.
///
/// Directory entries are visited in file-name order, so the same tree always
/// yields the same list. Files passed directly as roots are taken as-is,
/// whatever their extension.
pub struct DirectoryScanner<F: FileFilter> {
    filter: F,
}

impl<F: FileFilter> DirectoryScanner<F> {
    #[must_use]
    pub const fn new(filter: F) -> Self {
        Self { filter }
    }

    fn scan_dir(&self, root: &Path) -> ScanReport {
        let mut report = ScanReport::default();
        let walker = WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| {
                e.depth() == 0 || !e.file_type().is_dir() || self.filter.should_descend(e.path())
            });

        for entry in walker {
            match entry {
                Ok(entry) => {
                    if !entry.file_type().is_file() || !is_python_source(entry.path()) {
                        continue;
                    }
                    let path = normalize(entry.path());
                    if self.filter.should_include(&path) {
                        report.files.push(path);
                    }
                }
                Err(e) => report.errors.push(walk_error(root, e)),
            }
        }
        report
    }
}

impl<F: FileFilter> FileScanner for DirectoryScanner<F> {
    fn scan(&self, root: &Path) -> Result<ScanReport> {
        let metadata = std::fs::metadata(root).map_err(|source| XenonError::FileRead {
            path: root.to_path_buf(),
            source,
        })?;

        if metadata.is_dir() {
            return Ok(self.scan_dir(root));
        }

        let path = normalize(root);
        let files = if self.filter.should_include(&path) {
            vec![path]
        } else {
            Vec::new()
        };
        Ok(ScanReport {
            files,
            errors: Vec::new(),
        })
    }
}

/// Files found under the scanned roots, plus the paths that could not be read.
#[derive(Debug, Default)]
pub struct ScanReport {
    pub files: Vec<PathBuf>,
    pub errors: Vec<XenonError>,
}

/// Scan every root in order, dropping files already seen through an
/// earlier root (compared by canonical path).
pub fn discover<S: FileScanner>(scanner: &S, roots: &[PathBuf]) -> ScanReport {
    let mut seen = IndexSet::new();
    let mut report = ScanReport::default();

    for root in roots {
        match scanner.scan(root) {
            Ok(scanned) => {
                for file in scanned.files {
                    let key = dunce::canonicalize(&file).unwrap_or_else(|_| file.clone());
                    if seen.insert(key) {
                        report.files.push(file);
                    }
                }
                report.errors.extend(scanned.errors);
            }
            Err(e) => report.errors.push(e),
        }
    }

    log::info!(
        "discovered {} files under {} paths",
        report.files.len(),
        roots.len()
    );
    report
}

fn walk_error(root: &Path, error: walkdir::Error) -> XenonError {
    let path = error.path().unwrap_or(root).to_path_buf();
    XenonError::FileRead {
        path,
        source: error.into(),
    }
}

fn is_python_source(path: &Path) -> bool {
    let hidden = path
        .file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with('.'));
    !hidden && path.extension().is_some_and(|ext| ext == PYTHON_EXTENSION)
}

/// Drop `.` components so `./pkg/a.py` reports as `pkg/a.py`.
fn normalize(path: &Path) -> PathBuf {
    let normalized: PathBuf = path
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect();
    if normalized.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        normalized
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
