use std::path::Path;
use std::process::{Command, Output};

/// Run the CLI binary with arguments.
#[allow(dead_code)]
pub fn run_cli(args: &[&str]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_motus"));
    cmd.args(args);
    cmd.output().expect("Failed to execute CLI")
}

/// Run the CLI against a given server with an isolated session store.
#[allow(dead_code)]
pub fn run_cli_isolated(args: &[&str], base_url: &str, store_dir: &Path) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_motus"));
    cmd.arg("--base-url").arg(base_url);
    cmd.arg("--store-dir").arg(store_dir);
    cmd.args(args);
    cmd.output().expect("Failed to execute CLI")
}

/// Run the CLI isolated and expect success.
#[allow(dead_code)]
pub fn run_cli_isolated_success(args: &[&str], base_url: &str, store_dir: &Path) -> String {
    let output = run_cli_isolated(args, base_url, store_dir);
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("CLI command failed: {:?}\nstderr: {}", args, stderr);
    }
    String::from_utf8_lossy(&output.stdout).to_string()
}
