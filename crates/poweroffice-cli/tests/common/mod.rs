#![allow(dead_code)]

use std::path::Path;
use std::process::{Command, Output};

/// Build a CLI command isolated from the caller's environment and session.
pub fn cli(store: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_poweroffice"));
    for var in [
        "POWEROFFICE_APPLICATION_KEY",
        "POWEROFFICE_CLIENT_KEY",
        "POWEROFFICE_TEST_MODE",
        "POWEROFFICE_AUTH_URL",
        "POWEROFFICE_API_URL",
    ] {
        cmd.env_remove(var);
    }
    cmd.env("POWEROFFICE_STORE_PATH", store);
    cmd.env("NO_COLOR", "1");
    cmd
}

/// Run the CLI against `store` with arguments.
pub fn run_cli(store: &Path, args: &[&str]) -> Output {
    cli(store)
        .args(args)
        .output()
        .expect("Failed to execute CLI")
}

/// Run the CLI and expect success.
pub fn run_cli_success(store: &Path, args: &[&str]) -> String {
    let output = run_cli(store, args);
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("CLI command failed: {:?}\nstderr: {}", args, stderr);
    }
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Run the CLI and expect failure.
pub fn run_cli_failure(store: &Path, args: &[&str]) -> String {
    let output = run_cli(store, args);
    if output.status.success() {
        panic!("CLI command should have failed: {:?}", args);
    }
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// Write a session file that expires `expires_in_secs` from now.
pub fn write_session(store: &Path, expires_in_secs: i64, refresh_token: Option<&str>) {
    let expires_at = chrono::Utc::now() + chrono::Duration::seconds(expires_in_secs);
    let mut session = serde_json::json!({
        "POWEROFFICE_SESSION_ACCESS_TOKEN": "stored-access",
        "POWEROFFICE_SESSION_EXPIRES_AT": expires_at.format("%Y-%m-%d %H:%M:%S").to_string(),
    });
    if let Some(token) = refresh_token {
        session["POWEROFFICE_SESSION_REFRESH_TOKEN"] = serde_json::json!(token);
    }
    std::fs::write(store, serde_json::to_string_pretty(&session).unwrap()).unwrap();
}

pub fn read_session(store: &Path) -> serde_json::Value {
    serde_json::from_str(&std::fs::read_to_string(store).unwrap()).unwrap()
}
