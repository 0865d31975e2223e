//! Common test utilities for integration tests.

// Each test file is compiled as a separate crate, so not all functions
// are used in every test file.
#![allow(dead_code)]

use std::path::PathBuf;
use std::process::{Command, Output};

/// Returns the path to the `lak` binary built by cargo.
pub fn lak_binary() -> String {
    env!("CARGO_BIN_EXE_lak").to_string()
}

/// Writes `source` to a uniquely-named file under the system temp
/// directory and returns its path. No external tempdir crate is needed
/// since the CLI only ever reads one file per invocation.
pub fn write_temp_source(name: &str, source: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!(
        "lak-test-{}-{}-{}",
        std::process::id(),
        name,
        source.len()
    ));
    std::fs::write(&path, source).expect("failed to write temp source file");
    path
}

/// Runs `lak <command> <path>` and returns the process output.
pub fn run_cli(command: &str, path: &std::path::Path) -> Output {
    Command::new(lak_binary())
        .arg(command)
        .arg(path)
        .output()
        .expect("failed to spawn lak binary")
}
