//! Integration tests for the complexity gate.

mod common;

use common::{SINGLE_D_BLOCK, TWO_MODULES, TestFixture};
use predicates::prelude::*;

#[test]
fn passes_without_thresholds() {
    let fixture = TestFixture::new();
    fixture.create_report(TWO_MODULES);

    xenon!()
        .current_dir(fixture.path())
        .args(["--no-config", "--report", "cc.json"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn block_above_absolute_threshold_fails() {
    let fixture = TestFixture::new();
    fixture.create_report(SINGLE_D_BLOCK);

    xenon!()
        .current_dir(fixture.path())
        .args(["--no-config", "--report", "cc.json", "-b", "B"])
        .assert()
        .code(1)
        .stdout("xenon: error: block \"pkg/m.py:12 Parser.run\" has a rank of D\n");
}

#[test]
fn block_at_threshold_passes() {
    let fixture = TestFixture::new();
    fixture.create_report(SINGLE_D_BLOCK);

    xenon!()
        .current_dir(fixture.path())
        .args(["--no-config", "--report", "cc.json", "--max-absolute", "d"])
        .assert()
        .success();
}

#[test]
fn module_threshold_names_the_offending_module() {
    let fixture = TestFixture::new();
    fixture.create_report(TWO_MODULES);

    xenon!()
        .current_dir(fixture.path())
        .args(["--no-config", "--report", "cc.json", "-m", "C"])
        .assert()
        .code(1)
        .stdout("xenon: error: module \"module2.py\" has a rank of E\n");
}

#[test]
fn average_violation_is_reported_after_module_violations() {
    let fixture = TestFixture::new();
    fixture.create_report(TWO_MODULES);

    let output = xenon!()
        .current_dir(fixture.path())
        .args(["--no-config", "--report", "cc.json", "-a", "A", "-m", "A", "-b", "A"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(3));
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(
        lines,
        [
            "xenon: error: block \"module2.py:1 c\" has a rank of E",
            "xenon: error: module \"module2.py\" has a rank of E",
            "xenon: error: average complexity is ranked C",
        ]
    );
}

#[test]
fn invalid_rank_exits_with_config_error() {
    let fixture = TestFixture::new();
    fixture.create_report(TWO_MODULES);

    xenon!()
        .current_dir(fixture.path())
        .args(["--no-config", "--report", "cc.json", "--max-average", "G"])
        .assert()
        .code(2)
        .stdout(predicate::str::starts_with("xenon: error: invalid rank \"G\" for --max-average"));
}

#[test]
fn unparsable_module_is_reported_and_skipped() {
    let fixture = TestFixture::new();
    fixture.create_report(
        r#"{"broken.py": {"error": "invalid syntax (<unknown>, line 3)"},
            "ok.py": [{"name": "f", "lineno": 1, "complexity": 1}]}"#,
    );

    xenon!()
        .current_dir(fixture.path())
        .args(["--no-config", "--report", "cc.json", "-b", "A"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cannot analyze \"broken.py\""));
}

#[test]
fn missing_path_prints_diagnostic_and_continues() {
    let fixture = TestFixture::new();

    xenon!()
        .current_dir(fixture.path())
        .args(["--no-config", "does-not-exist", "-b", "A"])
        .assert()
        .success()
        .stdout(predicate::str::contains("xenon: error: Failed to read file: does-not-exist"));
}

#[test]
fn hidden_directories_are_not_analyzed() {
    let fixture = TestFixture::new();
    fixture.create_file(".venv/lib/site.py", "def f():\n    pass\n");
    fixture.create_file(".git/hooks/hook.py", "def f():\n    pass\n");

    // Radon is never started: nothing outside hidden directories is found.
    xenon!()
        .current_dir(fixture.path())
        .args(["--no-config", "--radon", "xenon-test-no-such-radon-binary", ".", "-b", "A"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn quiet_hides_diagnostics_but_not_violations() {
    let fixture = TestFixture::new();
    fixture.create_report(
        r#"{"broken.py": {"error": "invalid syntax"},
            "bad.py": [{"name": "g", "lineno": 2, "complexity": 45}]}"#,
    );

    xenon!()
        .current_dir(fixture.path())
        .args(["--no-config", "--quiet", "--report", "cc.json", "-b", "E"])
        .assert()
        .code(1)
        .stdout("xenon: error: block \"bad.py:2 g\" has a rank of F\n");
}

#[test]
fn ignored_directories_are_skipped_in_reports() {
    let fixture = TestFixture::new();
    fixture.create_report(
        r#"{"app/core.py": [{"name": "f", "lineno": 1, "complexity": 1}],
            "app/legacy/old.py": [{"name": "g", "lineno": 1, "complexity": 50}]}"#,
    );

    xenon!()
        .current_dir(fixture.path())
        .args(["--no-config", "--report", "cc.json", "-b", "A", "-i", "legacy"])
        .assert()
        .success();
}

#[test]
fn json_output_summarizes_run() {
    let fixture = TestFixture::new();
    fixture.create_report(TWO_MODULES);

    let output = xenon!()
        .current_dir(fixture.path())
        .args(["--no-config", "--report", "cc.json", "-m", "C", "--format", "json"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["summary"]["modules"], 2);
    assert_eq!(json["summary"]["blocks"], 3);
    assert_eq!(json["summary"]["rank"], "C");
    assert_eq!(json["violations"][0]["level"], "module");
}

#[test]
fn verbose_text_output_includes_summary() {
    let fixture = TestFixture::new();
    fixture.create_report(TWO_MODULES);

    xenon!()
        .current_dir(fixture.path())
        .args(["--no-config", "--color", "never", "-v", "--report", "cc.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Summary: 3 blocks in 2 modules, average complexity 13.33 (C), 0 violations",
        ));
}
