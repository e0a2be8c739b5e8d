use std::process::{Command, Output};

fn pcbpath(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_pcbpath"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("run pcbpath")
}

#[test]
fn unknown_setting_is_an_input_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let settings = dir.path().join("settings.yaml");
    std::fs::write(&settings, "digits: 3\n").expect("write settings");

    let out = pcbpath(&["--settings", settings.to_str().unwrap(), "relative", "M 0 0"]);
    assert_eq!(out.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&out.stderr).contains("Invalid settings"));
}

#[test]
fn missing_settings_file_is_an_input_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let missing = dir.path().join("nope.yaml");
    let out = pcbpath(&["--settings", missing.to_str().unwrap(), "relative", "M 0 0"]);
    assert_eq!(out.status.code(), Some(2));
}

#[test]
fn malformed_path_is_an_input_error() {
    let out = pcbpath(&["bbox", "M 0 0 F 1"]);
    assert_eq!(out.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&out.stderr).contains("offset 6"));
}

#[test]
fn arc_dimensions_are_a_processing_error() {
    let out = pcbpath(&["bbox", "M 0 0 A 5 5 0 0 1 10 0"]);
    assert_eq!(out.status.code(), Some(3));
}

#[test]
fn missing_subcommand_is_a_usage_error() {
    assert_eq!(pcbpath(&[]).status.code(), Some(1));
    assert_eq!(pcbpath(&["bbox"]).status.code(), Some(1));
}

#[test]
fn help_exits_cleanly() {
    assert_eq!(pcbpath(&["--help"]).status.code(), Some(0));
}

#[test]
fn shape_rect_radius_options_conflict() {
    let out = pcbpath(&["shape", "rect", "10", "4", "--radius", "1", "--radii", "{tl: 1}"]);
    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn strict_precision_out_of_range_is_an_input_error() {
    let out = pcbpath(&["--strict", "--precision", "40", "relative", "M 0 0"]);
    assert_eq!(out.status.code(), Some(2));
}

#[test]
fn oversized_step_count_is_an_input_error() {
    let steps = usize::MAX.to_string();
    let out = pcbpath(&["points", "M0,0 C1,1 2,1 3,0", "--steps", &steps]);
    assert_eq!(out.status.code(), Some(2));

    let dir = tempfile::tempdir().expect("tempdir");
    let settings = dir.path().join("settings.yaml");
    std::fs::write(&settings, format!("bezier_steps: {steps}\n")).expect("write settings");
    let out = pcbpath(&["--settings", settings.to_str().unwrap(), "points", "M 0 0 L 1 1"]);
    assert_eq!(out.status.code(), Some(2));
}

#[test]
fn negative_arc_radius_is_an_input_error() {
    let out = pcbpath(&["relative", "M 0 0 A -5 5 0 0 1 10 0"]);
    assert_eq!(out.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&out.stderr).contains("must not be negative"));
}
