//! CLI integration tests for the geometry binary
//!
//! These tests run the compiled binary against temporary shape files and
//! configuration, checking stdout, stderr and exit status.

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Create a temporary workspace with an empty config file
fn setup_workspace() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("config.toml"), "").unwrap();
    dir
}

/// Get a command instance for the geometry binary, isolated to `dir`
fn geometry_cmd(dir: &TempDir) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("geometry"));
    cmd.current_dir(dir.path())
        .env("GEOMETRY_CONFIG", dir.path().join("config.toml"));
    cmd
}

fn write_shapes(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn stdout_json(output: &assert_cmd::assert::Assert) -> serde_json::Value {
    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    serde_json::from_str(&stdout).unwrap()
}

// =============================================================================
// Shape Commands
// =============================================================================

#[test]
fn test_circle_prints_measurements() {
    let dir = setup_workspace();

    geometry_cmd(&dir)
        .args(["circle", "--radius", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Shape: circle(radius=5)"))
        .stdout(predicate::str::contains("Area: 78.54"))
        .stdout(predicate::str::contains("Perimeter: 31.42"));
}

#[test]
fn test_rectangle_prints_measurements() {
    let dir = setup_workspace();

    geometry_cmd(&dir)
        .args(["rectangle", "--width", "4", "--height", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Area: 12.00"))
        .stdout(predicate::str::contains("Perimeter: 14.00"));
}

#[test]
fn test_square_json_output() {
    let dir = setup_workspace();

    let output = geometry_cmd(&dir)
        .args(["square", "--side", "4", "--format", "json"])
        .assert()
        .success();

    let json = stdout_json(&output);
    assert_eq!(json["kind"], "square");
    assert_eq!(json["side"], 4.0);
    assert_eq!(json["area"], 16.0);
    assert_eq!(json["perimeter"], 16.0);
}

#[test]
fn test_precision_flag() {
    let dir = setup_workspace();

    geometry_cmd(&dir)
        .args(["circle", "--radius", "1", "--precision", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Area: 3.1416"));
}

#[test]
fn test_invalid_dimensions_fail() {
    let dir = setup_workspace();

    geometry_cmd(&dir)
        .args(["circle", "--radius", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be positive"));

    geometry_cmd(&dir)
        .args(["circle", "--radius", "-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be positive"));

    geometry_cmd(&dir)
        .args(["rectangle", "--width", "5", "--height", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("height"));
}

#[test]
fn test_overflowing_dimensions_fail() {
    let dir = setup_workspace();

    geometry_cmd(&dir)
        .args(["square", "--side", "1e200"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Dimensions too large"));

    let file = write_shapes(&dir, "huge.json", r#"[{"kind": "circle", "radius": 1e200}]"#);
    geometry_cmd(&dir)
        .args(["--format", "json", "report"])
        .arg(&file)
        .assert()
        .failure()
        .stdout(predicate::str::contains("null").not())
        .stderr(predicate::str::contains("circle area is not a finite number"));
}

#[test]
fn test_non_numeric_radius_fails() {
    let dir = setup_workspace();

    geometry_cmd(&dir)
        .args(["circle", "--radius", "abc"])
        .assert()
        .failure();
}

// =============================================================================
// Export
// =============================================================================

#[test]
fn test_export_prints_serialized_shape() {
    let dir = setup_workspace();

    let output = geometry_cmd(&dir)
        .args(["export", "rectangle", "--params", r#"{"width": 4, "height": 3}"#])
        .assert()
        .success();

    let json = stdout_json(&output);
    assert_eq!(
        json,
        serde_json::json!({"kind": "rectangle", "width": 4.0, "height": 3.0})
    );
}

#[test]
fn test_export_to_file_round_trips_through_report() {
    let dir = setup_workspace();
    let shape_path = dir.path().join("circle.json");

    geometry_cmd(&dir)
        .args(["export", "circle", "--params", r#"{"radius": 5}"#, "--output"])
        .arg(&shape_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Shape data written to"));

    let exported: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&shape_path).unwrap()).unwrap();
    let list = serde_json::to_string(&vec![exported]).unwrap();
    let file = write_shapes(&dir, "list.json", &list);

    geometry_cmd(&dir)
        .arg("report")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Type: Circle"))
        .stdout(predicate::str::contains("Area: 78.54"));
}

#[test]
fn test_export_rejects_invalid_params() {
    let dir = setup_workspace();

    geometry_cmd(&dir)
        .args(["export", "circle", "--params", r#"{"radius": "big"}"#])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be a number"));

    geometry_cmd(&dir)
        .args(["export", "circle", "--params", "[1]"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("JSON object"));

    geometry_cmd(&dir)
        .args(["export", "square", "--params", "{}"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing required field 'side'"));
}

// =============================================================================
// Reports
// =============================================================================

#[test]
fn test_report_from_json_file() {
    let dir = setup_workspace();
    let file = write_shapes(
        &dir,
        "shapes.json",
        r#"[{"kind": "circle", "radius": 5}, {"kind": "square", "side": 4}]"#,
    );

    geometry_cmd(&dir)
        .arg("report")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Shape Report"))
        .stdout(predicate::str::contains("Area: 78.54"))
        .stdout(predicate::str::contains("Area: 16.00"))
        .stdout(predicate::str::contains("Total Shapes: 2"))
        .stdout(predicate::str::contains("Total Area: 94.54"));
}

#[test]
fn test_report_from_yaml_file() {
    let dir = setup_workspace();
    let file = write_shapes(
        &dir,
        "shapes.yaml",
        "- kind: rectangle\n  width: 4\n  height: 3\n",
    );

    geometry_cmd(&dir)
        .arg("report")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Type: Rectangle"))
        .stdout(predicate::str::contains("Total Perimeter: 14.00"));
}

#[test]
fn test_report_rejects_yaml_nan() {
    let dir = setup_workspace();
    let file = write_shapes(&dir, "nan.yaml", "- kind: square\n  side: .nan\n");

    geometry_cmd(&dir)
        .arg("report")
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Field 'side' must be a finite number"));
}

#[test]
fn test_report_output_to_directory_leaves_no_temp_file() {
    let dir = setup_workspace();
    let file = write_shapes(&dir, "shapes.json", r#"[{"kind": "square", "side": 2}]"#);
    let out = dir.path().join("out");
    fs::create_dir(&out).unwrap();
    fs::write(out.join("existing"), "x").unwrap();

    geometry_cmd(&dir)
        .arg("report")
        .arg(&file)
        .arg("--output")
        .arg(&out)
        .assert()
        .failure();

    assert!(!dir.path().join("out.tmp").exists());
}

#[test]
fn test_report_accepts_legacy_type_key() {
    let dir = setup_workspace();
    let file = write_shapes(&dir, "legacy.json", r#"[{"type": "Circle", "radius": 2}]"#);

    geometry_cmd(&dir)
        .arg("report")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Type: Circle"));
}

#[test]
fn test_empty_report() {
    let dir = setup_workspace();
    let file = write_shapes(&dir, "empty.json", "[]");

    geometry_cmd(&dir)
        .arg("report")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Shapes: 0"))
        .stdout(predicate::str::contains("Total Area: 0.00"))
        .stdout(predicate::str::contains("Shape 1:").not());
}

#[test]
fn test_report_sorted_by_area() {
    let dir = setup_workspace();
    let file = write_shapes(
        &dir,
        "shapes.json",
        r#"[{"kind": "circle", "radius": 5}, {"kind": "square", "side": 1}]"#,
    );

    let output = geometry_cmd(&dir)
        .arg("report")
        .arg(&file)
        .arg("--sort")
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout).to_string();
    let square = stdout.find("Type: Square").unwrap();
    let circle = stdout.find("Type: Circle").unwrap();
    assert!(square < circle);
}

#[test]
fn test_report_json_format() {
    let dir = setup_workspace();
    let file = write_shapes(&dir, "shapes.json", r#"[{"kind": "square", "side": 3}]"#);

    let output = geometry_cmd(&dir)
        .args(["--format", "json", "report"])
        .arg(&file)
        .assert()
        .success();

    let json = stdout_json(&output);
    assert_eq!(json["total_shapes"], 1);
    assert_eq!(json["total_area"], 9.0);
    assert_eq!(json["entries"][0]["shape"]["kind"], "square");
}

#[test]
fn test_report_written_to_file() {
    let dir = setup_workspace();
    let file = write_shapes(&dir, "shapes.json", r#"[{"kind": "square", "side": 2}]"#);
    let report_path = dir.path().join("out").join("report.txt");

    geometry_cmd(&dir)
        .arg("report")
        .arg(&file)
        .arg("--output")
        .arg(&report_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Report written to"));

    let report = fs::read_to_string(&report_path).unwrap();
    assert!(report.starts_with("Shape Report\n"));
    assert!(report.contains("Total Area: 4.00"));
}

#[test]
fn test_report_invalid_shape_fails() {
    let dir = setup_workspace();
    let file = write_shapes(
        &dir,
        "shapes.json",
        r#"[{"kind": "square", "side": 2}, {"kind": "triangle", "side": 2}]"#,
    );

    geometry_cmd(&dir)
        .arg("report")
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("position 2"))
        .stderr(predicate::str::contains("Unknown shape kind"));
}

#[test]
fn test_report_missing_file_fails() {
    let dir = setup_workspace();

    geometry_cmd(&dir)
        .args(["report", "missing.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read shape file"));
}

// =============================================================================
// Largest / Constants
// =============================================================================

#[test]
fn test_largest_shape() {
    let dir = setup_workspace();
    let file = write_shapes(
        &dir,
        "shapes.json",
        r#"[{"kind": "square", "side": 4}, {"kind": "rectangle", "width": 5, "height": 4}]"#,
    );

    geometry_cmd(&dir)
        .arg("largest")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Largest: rectangle(width=5, height=4)"))
        .stdout(predicate::str::contains("Area: 20.00"));
}

#[test]
fn test_largest_of_empty_file_fails() {
    let dir = setup_workspace();
    let file = write_shapes(&dir, "empty.json", "[]");

    geometry_cmd(&dir)
        .arg("largest")
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Empty shape list"));
}

#[test]
fn test_constants_json() {
    let dir = setup_workspace();

    let output = geometry_cmd(&dir)
        .args(["constants", "-f", "json"])
        .assert()
        .success();

    let json = stdout_json(&output);
    assert_eq!(json["pi"], std::f64::consts::PI);
    assert_eq!(json["epsilon"], 1e-10);
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn test_config_sets_precision_and_format() {
    let dir = setup_workspace();
    fs::write(
        dir.path().join("config.toml"),
        "precision = 3\ndefault_format = \"text\"\n",
    )
    .unwrap();

    geometry_cmd(&dir)
        .args(["circle", "--radius", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Area: 3.142"));

    fs::write(dir.path().join("config.toml"), "default_format = \"json\"\n").unwrap();

    let output = geometry_cmd(&dir)
        .args(["square", "--side", "2"])
        .assert()
        .success();
    assert_eq!(stdout_json(&output)["area"], 4.0);
}

#[test]
fn test_cli_precision_overrides_config() {
    let dir = setup_workspace();
    fs::write(dir.path().join("config.toml"), "precision = 5\n").unwrap();

    geometry_cmd(&dir)
        .args(["circle", "--radius", "1", "-p", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Area: 3.1\n"));
}

#[test]
fn test_invalid_config_fails() {
    let dir = setup_workspace();
    fs::write(dir.path().join("config.toml"), "precision = 99\n").unwrap();

    geometry_cmd(&dir)
        .args(["square", "--side", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("precision must be at most 12"));
}

#[test]
fn test_verbose_logs_to_stderr() {
    let dir = setup_workspace();

    geometry_cmd(&dir)
        .args(["--verbose", "square", "--side", "1"])
        .assert()
        .success()
        .stderr(predicate::str::contains("[verbose] Geometry CLI starting"))
        .stdout(predicate::str::contains("[verbose]").not());
}
