//! CLI tests that only touch the local session file.

mod common;

use tempfile::TempDir;

use common::{read_session, run_cli_failure, run_cli_success, write_session};

#[test]
fn test_status_on_empty_store() {
    let temp_dir = TempDir::new().unwrap();
    let store = temp_dir.path().join("session.json");

    let stdout = run_cli_success(&store, &["token", "status"]);

    assert!(stdout.contains("empty"), "unexpected output: {}", stdout);
    assert!(stdout.contains("test"));
    assert!(!store.exists());
}

#[test]
fn test_status_json_reports_valid_session() {
    let temp_dir = TempDir::new().unwrap();
    let store = temp_dir.path().join("session.json");
    write_session(&store, 600, Some("stored-refresh"));

    let stdout = run_cli_success(&store, &["token", "status", "--json"]);
    let status: serde_json::Value = serde_json::from_str(&stdout).unwrap();

    assert_eq!(status["state"], "valid");
    assert_eq!(status["test_mode"], true);
    assert!(status["expires_at"].is_string());
}

#[test]
fn test_status_reports_expired_states() {
    let temp_dir = TempDir::new().unwrap();
    let store = temp_dir.path().join("session.json");

    write_session(&store, -60, Some("stored-refresh"));
    let stdout = run_cli_success(&store, &["token", "status", "--json"]);
    let status: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(status["state"], "expired_refreshable");

    write_session(&store, -60, None);
    let stdout = run_cli_success(&store, &["token", "status", "--json"]);
    let status: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(status["state"], "expired_not_refreshable");
}

#[test]
fn test_live_mode_flag() {
    let temp_dir = TempDir::new().unwrap();
    let store = temp_dir.path().join("session.json");

    let stdout = run_cli_success(&store, &["--test-mode", "false", "token", "status", "--json"]);
    let status: serde_json::Value = serde_json::from_str(&stdout).unwrap();

    assert_eq!(status["test_mode"], false);
    assert_eq!(status["endpoints"]["auth"], "https://go.poweroffice.net");
    assert_eq!(status["endpoints"]["api"], "https://api.poweroffice.net");
}

#[test]
fn test_disconnect_keeps_foreign_keys() {
    let temp_dir = TempDir::new().unwrap();
    let store = temp_dir.path().join("session.json");
    write_session(&store, 600, Some("stored-refresh"));
    let mut content = read_session(&store);
    content["OTHER_SETTING"] = serde_json::json!("keep me");
    std::fs::write(&store, content.to_string()).unwrap();

    run_cli_success(&store, &["token", "disconnect"]);

    assert_eq!(read_session(&store), serde_json::json!({"OTHER_SETTING": "keep me"}));
}

#[test]
fn test_acquire_without_keys_fails() {
    let temp_dir = TempDir::new().unwrap();
    let store = temp_dir.path().join("session.json");

    let stderr = run_cli_failure(&store, &["token", "acquire"]);

    assert!(stderr.contains("POWEROFFICE_APPLICATION_KEY"), "stderr: {}", stderr);
}

#[test]
fn test_delivery_types_lists_all_codes() {
    let temp_dir = TempDir::new().unwrap();
    let store = temp_dir.path().join("session.json");

    let stdout = run_cli_success(&store, &["delivery-types", "--json"]);
    let lines: Vec<serde_json::Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    assert_eq!(lines.len(), 6);
    assert_eq!(lines[3]["name"], "EHF");
    assert_eq!(lines[5]["code"], 5);
}
