use assert_cmd::Command;
use std::io::Write;

fn fetch_projects() -> Command {
    let mut cmd = Command::cargo_bin("fetch-projects").expect("binary is built");
    cmd.env_remove("DEVREV_PAT")
        .env_remove("DEVREV_API_TOKEN")
        .env_remove("DEVREV_API_BASE_URL")
        .env("RUST_LOG", "info");
    cmd
}

fn stderr_of(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn missing_token_fails_before_any_request() {
    let output = fetch_projects().args(["--ids", "ENH-1"]).output().unwrap();

    assert!(!output.status.success());
    let stderr = stderr_of(&output);
    assert_eq!(
        stderr
            .matches("DEVREV_PAT or DEVREV_API_TOKEN environment variable is required")
            .count(),
        1,
        "stderr: {stderr}"
    );
    assert!(output.stdout.is_empty());
}

#[test]
fn no_input_prints_usage_and_fails() {
    let output = fetch_projects()
        .env("DEVREV_PAT", "test-token")
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = stderr_of(&output);
    assert!(
        stderr.contains("Please provide --ids, --vista-filters, or --config"),
        "stderr: {stderr}"
    );
    assert!(stderr.contains("Usage:"), "stderr: {stderr}");
}

#[test]
fn invalid_filter_json_is_logged_and_ignored() {
    let output = fetch_projects()
        .env("DEVREV_PAT", "test-token")
        .args(["--vista-filters", "{stage:"])
        .output()
        .unwrap();

    // Filters are dropped, so there is nothing left to fetch.
    assert!(!output.status.success());
    let stderr = stderr_of(&output);
    assert!(
        stderr.contains("Invalid JSON for vista-filters"),
        "stderr: {stderr}"
    );
    assert!(stderr.contains("Usage:"), "stderr: {stderr}");
}

#[test]
fn malformed_config_file_is_fatal() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{{ not json").unwrap();

    let output = fetch_projects()
        .env("DEVREV_PAT", "test-token")
        .arg("--config")
        .arg(file.path())
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = stderr_of(&output);
    assert!(stderr.contains("parse config file"), "stderr: {stderr}");
}

#[test]
fn unreachable_api_reports_an_error() {
    let output = fetch_projects()
        .env("DEVREV_PAT", "test-token")
        // Nothing listens on the discard port.
        .env("DEVREV_API_BASE_URL", "http://127.0.0.1:9")
        .args(["--ids", "ENH-1,ENH-2"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = stderr_of(&output);
    assert!(stderr.contains("Error: fetch projects by id"), "stderr: {stderr}");
    assert!(stderr.contains("Fetching 2 specific projects"), "stderr: {stderr}");
}

#[test]
fn version_flag_succeeds_without_credentials() {
    let output = fetch_projects().arg("--version").output().unwrap();
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("fetch-projects"));
}
