use std::fs;
use std::path::Path;
use std::process::{Command, Output, Stdio};
use tempfile::tempdir;

fn naca_geo(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_naca-geo"))
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .stdin(Stdio::null())
        .output()
        .unwrap()
}

#[test]
fn test_missing_input_is_reported() {
    let dir = tempdir().unwrap();
    let output = naca_geo(dir.path(), &["-n", "50"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("airfoil.dat not found"));
    assert!(!dir.path().join("airfoil.geo").exists());
}

#[test]
fn test_missing_code_is_reported() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("airfoil.dat"), "Clark Y\n").unwrap();
    let output = naca_geo(dir.path(), &["-n", "50"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("expected a NACA 4-digit code"));
    assert!(!dir.path().join("airfoil.geo").exists());
}

#[test]
fn test_summary_is_reported() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("airfoil.dat"), "NACA 2412\n").unwrap();
    let output = naca_geo(dir.path(), &["-n", "50"]);

    assert!(output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains(
        "airfoil.geo regenerated using NACA 2412 with 50 points per surface (88 points total)."
    ));
    assert!(dir.path().join("airfoil.geo").exists());
}

#[test]
fn test_closed_stdin_uses_default() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("airfoil.dat"), "NACA 0012\n").unwrap();
    let output = naca_geo(dir.path(), &["--default", "160"]);

    assert!(output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("with 160 points per surface (308 points total)."));
}
