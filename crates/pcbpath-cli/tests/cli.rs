use std::process::{Command, Output};

use serde_json::Value;

fn pcbpath(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_pcbpath"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("run pcbpath")
}

fn stdout(out: &Output) -> String {
    assert!(
        out.status.success(),
        "pcbpath failed: {}",
        String::from_utf8_lossy(&out.stderr)
    );
    String::from_utf8_lossy(&out.stdout).trim().to_string()
}

fn json(out: &Output) -> Value {
    serde_json::from_str(&stdout(out)).expect("json output")
}

#[test]
fn relative_prints_relative_form() {
    let out = pcbpath(&["relative", "M5,8 6,8 2-2z"]);
    assert_eq!(stdout(&out), "m 5.0,8.0 1.0,0.0 -4.0,-10.0 z");
}

#[test]
fn relative_commands_are_nested_lists() {
    let out = pcbpath(&["relative", "--commands", "M5,8 6,8"]);
    assert_eq!(
        json(&out),
        serde_json::json!([["m", [[5.0, 8.0], [1.0, 0.0]]]])
    );
}

#[test]
fn bbox_reports_dimensions() {
    let out = pcbpath(&["bbox", "M 3 4 L 7 1 7 -2"]);
    let v = json(&out);
    assert_eq!(v["width"], 4.0);
    assert_eq!(v["height"], 6.0);
    assert_eq!(v["segments"], 1);
}

#[test]
fn transform_reports_both_orientations() {
    let out = pcbpath(&["transform", "M 1 4 L 3 2", "--scale", "2", "--mirror"]);
    let v = json(&out);
    assert_eq!(v["width"], 4.0);
    assert_eq!(v["height"], 4.0);
    assert!(v["path"].as_str().is_some_and(|p| p.starts_with("m ")));
    assert_ne!(v["path"], v["mirrored"]);
}

#[test]
fn points_splits_runs_at_movetos() {
    let out = pcbpath(&["points", "M 0 0 L 1 0 M 5 5 L 6 5"]);
    let runs = json(&out);
    assert_eq!(runs.as_array().map(Vec::len), Some(2));
    assert_eq!(runs[1][0], serde_json::json!({"x": 5.0, "y": 5.0}));
}

#[test]
fn precision_flag_rounds_coordinates() {
    let out = pcbpath(&["--precision", "2", "relative", "M 1.234567 0 z"]);
    assert_eq!(stdout(&out), "m 1.23,0.0 z");
}

#[test]
fn out_of_range_precision_falls_back_to_default() {
    let out = pcbpath(&["--precision", "40", "relative", "M 1.123456789 0"]);
    assert_eq!(stdout(&out), "m 1.12345679,0.0");
}

#[test]
fn settings_file_is_applied() {
    let dir = tempfile::tempdir().expect("tempdir");
    let settings = dir.path().join("settings.yaml");
    std::fs::write(&settings, "significant_digits: 1\n").expect("write settings");

    let out = pcbpath(&["--settings", settings.to_str().unwrap(), "relative", "M 1.26 0"]);
    assert_eq!(stdout(&out), "m 1.3,0.0");
}

#[test]
fn json_settings_file_is_applied() {
    let dir = tempfile::tempdir().expect("tempdir");
    let settings = dir.path().join("settings.json");
    std::fs::write(&settings, r#"{"segment_length": 100.0}"#).expect("write settings");

    let out = pcbpath(&[
        "--settings",
        settings.to_str().unwrap(),
        "points",
        "M 0 0 C 0 5 10 5 10 0",
    ]);
    // One piece: just the start and the endpoint.
    assert_eq!(json(&out)[0].as_array().map(Vec::len), Some(2));
}

#[test]
fn shape_rect_prints_path() {
    let out = pcbpath(&["shape", "rect", "10", "4"]);
    assert_eq!(stdout(&out), "m -5.0,-2.0 h 10.0 v 4.0 h -10.0 v -4.0 z");
}

#[test]
fn shape_rect_radii_accept_aliases() {
    let out = pcbpath(&["shape", "rect", "10", "4", "--radii", "{tl: 1, bot_right: 1}"]);
    assert!(stdout(&out).starts_with("m -5.0,0.0 v -1.0 c "));
}

#[test]
fn shape_meander_reports_measurements() {
    let out = pcbpath(&["shape", "meander", "--radius", "1", "--bus-width", "2", "--pitch", "1"]);
    let v = json(&out);
    let width = v["width"].as_f64().unwrap();
    let height = v["height"].as_f64().unwrap();
    assert!((width - 4.0).abs() < 1e-6);
    assert!((height - 3.0).abs() < 1e-6);
    assert_eq!(v["spacing"], 0.0);
}

#[test]
fn verbose_logs_to_stderr() {
    let out = pcbpath(&["--verbose", "bbox", "M 0 0 L 1 1"]);
    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("settings applied"));
    assert!(serde_json::from_slice::<Value>(&out.stdout).is_ok());
}
