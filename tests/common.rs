#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn ark() -> Command {
    cargo_bin_cmd!("arbeitskal")
}

/// Create a unique calendar file path inside the system temp dir and remove
/// any leftover from a previous run
pub fn temp_ics(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_arbeitskal.ics", name));
    let ics_path = path.to_string_lossy().to_string();
    fs::remove_file(&ics_path).ok();
    ics_path
}

/// Run one scripted session against the given calendar file
pub fn run_session_script(ics_path: &str, stdin: &str) -> assert_cmd::assert::Assert {
    ark()
        .args(["--file", ics_path, "--offset", "2"])
        .write_stdin(stdin)
        .assert()
}
