#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the xenon binary.
#[macro_export]
macro_rules! xenon {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("xenon"))
    };
}

/// Temporary working directory holding sources, reports and config files.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn create_config(&self, content: &str) {
        self.create_file(".xenon.toml", content);
    }

    /// Writes a `radon cc --json` style report named `cc.json`.
    pub fn create_report(&self, json: &str) {
        self.create_file("cc.json", json);
    }
}

/// Two modules: module1.py averages 2.5 (A), module2.py averages 35 (E).
/// The project average over all three blocks is 40/3, rank C.
pub const TWO_MODULES: &str = r#"{
  "module1.py": [
    {"type": "function", "name": "a", "lineno": 1, "complexity": 2, "rank": "A"},
    {"type": "function", "name": "b", "lineno": 6, "complexity": 3, "rank": "A"}
  ],
  "module2.py": [
    {"type": "function", "name": "c", "lineno": 1, "complexity": 35, "rank": "E"}
  ]
}"#;

/// A single block of complexity 25 (rank D) in `pkg/m.py`.
pub const SINGLE_D_BLOCK: &str = r#"{
  "pkg/m.py": [
    {"type": "method", "name": "Parser.run", "lineno": 12, "complexity": 25, "rank": "D",
     "classname": "Parser", "col_offset": 4, "endline": 60, "closures": []}
  ]
}"#;
