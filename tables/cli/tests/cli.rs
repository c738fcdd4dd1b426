// Licensed under the Apache-2.0 license

use std::path::Path;
use std::process::Command;

const BIN: &str = env!("CARGO_BIN_EXE_fourcc-tables");

fn fixture() -> &'static Path {
    Path::new(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/../generator/tests/data/drm_fourcc.h"
    ))
}

#[test]
fn test_generates_tables() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("tables.c");

    let status = Command::new(BIN)
        .arg(fixture())
        .arg(&output)
        .status()
        .unwrap();
    assert!(status.success());

    let code = std::fs::read_to_string(&output).unwrap();
    assert!(code.contains("const char *format_str(uint32_t format)"));
    assert!(code.contains("const char *basic_modifier_str(uint64_t modifier)"));
}

#[test]
fn test_missing_input_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("tables.c");

    let result = Command::new(BIN)
        .arg(dir.path().join("missing.h"))
        .arg(&output)
        .output()
        .unwrap();
    assert!(!result.status.success());
    assert!(String::from_utf8_lossy(&result.stderr).contains("missing.h"));
    assert!(!output.exists());
}

#[test]
fn test_requires_both_arguments() {
    let status = Command::new(BIN).arg(fixture()).status().unwrap();
    assert!(!status.success());
}
