//! Shared E2E test helpers for the `remotend` binary.

#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default timeout for launcher runs.
pub const TIMEOUT: Duration = Duration::from_secs(10);

/// Host variables that would leak into the launcher's config.
const HOST_VARS: &[&str] = &[
    "RUST_LOG",
    "REMOTEND_DEBUG",
    "REMOTEND_LOG_LEVEL",
    "REMOTEND_LOG_FILE",
    "REMOTEND_APP_PROGRAM",
    "REMOTEND_RUN_MODE",
];

/// Build a Command for `remotend` with an isolated config path.
///
/// The config file lives in a fresh temp dir and does not exist until
/// [`write_config`] creates it. Returns (command, guard); keep the guard
/// alive for the test's duration.
pub fn remotend_cmd() -> (assert_cmd::Command, tempfile::TempDir) {
    let tmp = tempfile::tempdir().expect("create temp dir for config");
    let mut cmd: assert_cmd::Command = cargo_bin_cmd!("remotend");
    cmd.timeout(TIMEOUT);
    for var in HOST_VARS {
        cmd.env_remove(var);
    }
    cmd.env("NO_COLOR", "1");
    cmd.env("REMOTEND_CONFIG", config_path(tmp.path()));
    (cmd, tmp)
}

/// Config file path inside a test temp dir.
pub fn config_path(dir: &Path) -> PathBuf {
    dir.join("launcher.toml")
}

/// Writes the launcher config into a test temp dir.
pub fn write_config(dir: &Path, content: &str) {
    std::fs::write(config_path(dir), content).expect("write launcher config");
}

/// Config whose application is a shell script reporting what it received.
///
/// Prints `mode=<REMOTEND_RUN_MODE> args=<forwarded args>`.
pub const ECHO_APP_CONFIG: &str = r#"
[app]
program = "sh"
args = ["-c", "echo mode=$REMOTEND_RUN_MODE args=$*", "sh"]
"#;

/// Source of the stub core shared with the `remotend-core` tests.
pub const CORE_STUB: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../remotend-core/tests/fixtures/core_stub.rs"
);

/// Compiles the stub core to `<dir>/libremotend.so`.
///
/// With `continue_startup` the core lets the launcher go on; otherwise it
/// claims the run.
pub fn build_core(dir: &Path, continue_startup: bool) {
    let rustc = std::env::var_os("RUSTC").unwrap_or_else(|| "rustc".into());
    let mut cmd = std::process::Command::new(rustc);
    cmd.args(["--crate-type", "cdylib", "--edition", "2021"])
        .arg("-o")
        .arg(dir.join("libremotend.so"))
        .arg(CORE_STUB);
    if continue_startup {
        cmd.args(["--cfg", "continue_startup"]);
    }

    let output = cmd.output().expect("run rustc");
    assert!(
        output.status.success(),
        "rustc failed to build the stub core:\n{}",
        String::from_utf8_lossy(&output.stderr)
    );
}
