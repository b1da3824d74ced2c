use std::path::Path;
use std::process::Command;

use tempfile::tempdir;

const VALID_UNIT: &str = r#"
package: org.example.client
declarations:
  - name: HomePerspective
    annotations: [Perspective]
    methods:
      - name: getPerspective
        returns: PerspectiveDefinition
"#;

fn compile_into(bin: &str, unit_path: &Path, out_dir: &Path) {
    let output = Command::new(bin)
        .arg("compile")
        .arg(unit_path)
        .arg("--out")
        .arg(out_dir)
        .output()
        .unwrap();
    assert!(output.status.success());
}

#[test]
fn test_check_passes_against_freshly_compiled_golden() {
    let bin = env!("CARGO_BIN_EXE_vista");

    let dir = tempdir().unwrap();
    let unit_path = dir.path().join("unit.yaml");
    let golden_dir = dir.path().join("expected");
    std::fs::write(&unit_path, VALID_UNIT).unwrap();
    compile_into(bin, &unit_path, &golden_dir);

    let output = Command::new(bin)
        .arg("check")
        .arg(&unit_path)
        .arg("--golden")
        .arg(&golden_dir)
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("1 artifact(s) match"),
        "expected clean check; got:\n{}",
        stdout
    );
}

#[test]
fn test_check_reports_drift_with_diff_and_nonzero_exit() {
    let bin = env!("CARGO_BIN_EXE_vista");

    let dir = tempdir().unwrap();
    let unit_path = dir.path().join("unit.yaml");
    let golden_dir = dir.path().join("expected");
    std::fs::write(&unit_path, VALID_UNIT).unwrap();
    compile_into(bin, &unit_path, &golden_dir);

    // Tamper with the golden file to force drift.
    let golden_file = golden_dir.join("HomePerspectiveActivity.java");
    let tampered = std::fs::read_to_string(&golden_file)
        .unwrap()
        .replace("realPresenter", "otherPresenter");
    std::fs::write(&golden_file, tampered).unwrap();

    let output = Command::new(bin)
        .arg("check")
        .arg(&unit_path)
        .arg("--golden")
        .arg(&golden_dir)
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("drift in HomePerspectiveActivity.java"));
    assert!(stdout.contains("-        return otherPresenter.getPerspective();"));
    assert!(stdout.contains("+        return realPresenter.getPerspective();"));
}

#[test]
fn test_check_reports_missing_golden_file() {
    let bin = env!("CARGO_BIN_EXE_vista");

    let dir = tempdir().unwrap();
    let unit_path = dir.path().join("unit.yaml");
    let golden_dir = dir.path().join("expected");
    std::fs::write(&unit_path, VALID_UNIT).unwrap();
    std::fs::create_dir_all(&golden_dir).unwrap();

    let output = Command::new(bin)
        .arg("check")
        .arg(&unit_path)
        .arg("--golden")
        .arg(&golden_dir)
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("missing golden file"));
}
